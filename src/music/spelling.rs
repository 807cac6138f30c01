// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic spelling of symmetric scales.
//!
//! A symmetric scale has several keys producing the same pitch classes,
//! and each of those keys can be spelled more than one way. Given a note
//! and the degree it should occupy, the resolver tries every simple
//! spelling of every equivalent key and picks the one whose notes read
//! best.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::mode::mode_notes;
use super::note::Note;
use super::note_set::NoteSet;
use super::scale_type::ScaleType;
use crate::error::{TheoryError, TheoryResult};

/// Key and degree chosen for a requested (note, degree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub key: Note,
    pub degree: usize,
    /// Key implied directly by the request, before respelling
    pub original_key: Note,
    pub original_degree: usize,
}

/// Ranking of one candidate; lower sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpellingRank {
    /// The requested spelling does not appear among the notes
    pub lacks_requested_spelling: bool,
    pub distinct_letters: Reverse<usize>,
    /// The candidate key is spelled differently from the direct key
    pub respelled: bool,
    pub accidentals: u32,
    /// Notes sharing the requested note's letter
    pub letter_clashes: usize,
}

/// A key that can spell the requested note at some degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingCandidate {
    pub key: Note,
    pub degree: usize,
    pub notes: NoteSet,
    pub rank: SpellingRank,
}

/// Chooses keys for symmetric scales, remembering earlier answers
#[derive(Debug, Default)]
pub struct SpellingResolver {
    cache: HashMap<(usize, Note, usize), Resolution>,
}

impl SpellingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key and degree for which `note` is at `degree` of `scale_type`.
    ///
    /// Asymmetric scales have exactly one answer. Symmetric scales take the
    /// best ranked of [`candidates`](Self::candidates).
    pub fn resolve(
        &mut self,
        scale_type: &ScaleType,
        note: &Note,
        degree: usize,
    ) -> TheoryResult<Resolution> {
        let cache_key = (scale_type.index(), *note, degree);
        if let Some(resolution) = self.cache.get(&cache_key) {
            return Ok(*resolution);
        }

        let resolution = if scale_type.is_symmetrical() {
            let primary = Self::primary_key(scale_type, note, degree)?;
            let best = Self::candidates(scale_type, note, degree)?
                .into_iter()
                .next()
                .ok_or_else(|| TheoryError::UnsatisfiableSpelling {
                    scale_type: scale_type.name().to_string(),
                    note: note.name(),
                    degree,
                })?;
            tracing::debug!(
                scale_type = %scale_type,
                note = %note,
                degree,
                key = %best.key,
                key_degree = best.degree,
                "resolved spelling"
            );
            Resolution {
                key: best.key,
                degree: best.degree,
                original_key: primary,
                original_degree: degree,
            }
        } else {
            let key = scale_type.key(note, degree)?;
            Resolution {
                key,
                degree,
                original_key: key,
                original_degree: degree,
            }
        };

        self.cache.insert(cache_key, resolution);
        Ok(resolution)
    }

    /// Every spelling of every equivalent key, best first.
    ///
    /// Candidates whose notes cannot be spelled are dropped; ties keep
    /// enumeration order.
    pub fn candidates(
        scale_type: &ScaleType,
        note: &Note,
        degree: usize,
    ) -> TheoryResult<Vec<SpellingCandidate>> {
        let primary = Self::primary_key(scale_type, note, degree)?;
        let mut candidates = Vec::new();

        for key in scale_type.equivalent_keys(&primary) {
            let Some(key_degree) = scale_type.degree_of(note, &key) else {
                continue;
            };
            let notes = match mode_notes(scale_type, key_degree, &key) {
                Ok(notes) => notes,
                Err(TheoryError::LetterPitchMismatch { .. }) => {
                    tracing::trace!(key = %key, degree = key_degree, "candidate cannot be spelled");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let rank = SpellingRank {
                lacks_requested_spelling: !notes.iter().any(|n| n.same_spelling(note)),
                distinct_letters: Reverse(notes.num_letters()),
                respelled: !(key.same_spelling(&primary) && key.is_equivalent(&primary)),
                accidentals: notes.num_accidentals(),
                letter_clashes: notes.iter().filter(|n| n.letter() == note.letter()).count(),
            };
            tracing::trace!(key = %key, degree = key_degree, ?rank, "spelling candidate");
            candidates.push(SpellingCandidate {
                key,
                degree: key_degree,
                notes,
                rank,
            });
        }

        candidates.sort_by_key(|c| c.rank);
        Ok(candidates)
    }

    /// Simplest spelling of the key directly implied by the request.
    ///
    /// A requested spelling such as Fb may leave the key letter out of
    /// accidental range; the plain spelling of the note implies the same
    /// key pitch.
    fn primary_key(scale_type: &ScaleType, note: &Note, degree: usize) -> TheoryResult<Note> {
        match scale_type.key(note, degree) {
            Ok(key) => Ok(key.simplify()),
            Err(TheoryError::LetterPitchMismatch { .. }) => {
                tracing::debug!(note = %note, degree, "key respelled from simplified note");
                Ok(scale_type.key(&note.simplify(), degree)?.simplify())
            }
            Err(err) => Err(err),
        }
    }

    /// Number of remembered resolutions
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale_type::ScaleRegistry;

    fn n(name: &str) -> Note {
        Note::parse(name).unwrap()
    }

    fn resolve(registry: &ScaleRegistry, name: &str, start: &str, degree: usize) -> Resolution {
        let mut resolver = SpellingResolver::new();
        resolver
            .resolve(registry.get(name).unwrap(), &n(start), degree)
            .unwrap()
    }

    #[test]
    fn test_diminished_keys() {
        let registry = ScaleRegistry::standard().unwrap();
        let expected = [
            ("C", "C", "G"),
            ("C#", "E", "B"),
            ("Db", "G", "F"),
            ("D", "D", "C"),
            ("D#", "D#", "E"),
            ("Eb", "Eb", "G"),
            ("E", "E", "D"),
        ];
        for (start, first, second) in expected {
            assert_eq!(
                resolve(&registry, "diminished", start, 1).key.name(),
                first,
                "{} degree 1",
                start
            );
            assert_eq!(
                resolve(&registry, "diminished", start, 2).key.name(),
                second,
                "{} degree 2",
                start
            );
        }
    }

    #[test]
    fn test_original_key_is_direct_inverse() {
        let registry = ScaleRegistry::standard().unwrap();
        let res = resolve(&registry, "diminished", "C", 2);
        assert_eq!(res.key.name(), "G");
        assert_eq!(res.degree, 4);
        assert_eq!(res.original_key.name(), "Bb");
        assert_eq!(res.original_degree, 2);

        let res = resolve(&registry, "augmented", "C", 2);
        assert_eq!(res.original_key.name(), "A");
        assert_eq!(res.key.name(), "F");
    }

    #[test]
    fn test_asymmetric_is_direct() {
        let registry = ScaleRegistry::standard().unwrap();
        let res = resolve(&registry, "mel min", "C", 7);
        assert_eq!(res.key.name(), "Db");
        assert_eq!(res.degree, 7);
        assert_eq!(res.original_key, res.key);
    }

    #[test]
    fn test_candidates_ranked() {
        let registry = ScaleRegistry::standard().unwrap();
        let dim = registry.get("diminished").unwrap();
        let candidates = SpellingResolver::candidates(dim, &n("C"), 1).unwrap();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].key.name(), "C");
        assert!(candidates.windows(2).all(|w| w[0].rank <= w[1].rank));
        assert_eq!(candidates[0].notes.note_names(), vec!["C", "D", "Eb", "F", "Gb", "Ab", "A", "B"]);
    }

    #[test]
    fn test_unspellable_direct_key_uses_plain_note() {
        let registry = ScaleRegistry::standard().unwrap();
        let whole_tone = registry.get("whole tone").unwrap();
        // A shifted five letters down from Fb would need a triple flat
        assert!(whole_tone.key(&n("Fb"), 6).is_err());

        let res = resolve(&registry, "whole tone", "Fb", 6);
        assert_eq!(res.original_key.name(), "Gb");
        assert_eq!(res.original_degree, 6);
        let first = whole_tone.note(&res.key, res.degree).unwrap();
        assert!(first.is_equivalent(&n("Fb")));
    }

    #[test]
    fn test_cache_lifetime() {
        let registry = ScaleRegistry::standard().unwrap();
        let dim = registry.get("diminished").unwrap();
        let mut resolver = SpellingResolver::new();
        assert_eq!(resolver.cache_len(), 0);
        let first = resolver.resolve(dim, &n("C#"), 2).unwrap();
        let again = resolver.resolve(dim, &n("C#"), 2).unwrap();
        assert_eq!(first, again);
        assert_eq!(resolver.cache_len(), 1);
        resolver.clear_cache();
        assert_eq!(resolver.cache_len(), 0);
    }
}
