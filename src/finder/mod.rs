// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Minimal identifying chords.
//!
//! Given a fixed chord and a catalogue of modes, the finder tries every
//! addition of 0, 1, 2 ... pitch classes and records the additions that
//! leave exactly one catalogue mode containing the result. The search is
//! exhaustive, so the smallest size recorded for a mode is a true minimum
//! within the catalogue.

pub mod catalogue;
pub mod pentatonic;
pub mod report;

pub use catalogue::{Catalogue, CatalogueBuilder, DEFAULT_FAMILIES};
pub use pentatonic::PentatonicMatcher;

use std::collections::{BTreeMap, HashSet};

use crate::music::{ModeInKey, NoteSet, PitchClassSet};

/// Largest chord searched by default (fixed notes plus additions)
pub const DEFAULT_MAX_CHORD_SIZE: usize = 7;

/// Progress of a [`ScaleFinder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderState {
    /// Inputs set, nothing searched
    Configured,
    /// Identifiers found, not yet reported
    Searching,
    Reported,
}

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderOptions {
    /// Pass every emitted note through `Note::simplify`
    pub simplify: bool,
    /// Stop before chords larger than this
    pub max_chord_size: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            simplify: false,
            max_chord_size: DEFAULT_MAX_CHORD_SIZE,
        }
    }
}

/// Identifying additions for one catalogue mode, keyed by chord size
pub type Identifiers = BTreeMap<usize, Vec<PitchClassSet>>;

/// One minimal chord that singles out a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyingChord {
    /// Pitch classes added to the fixed chord
    pub chord: PitchClassSet,
    /// The added notes as spelled in the mode
    pub identifying: NoteSet,
    /// The mode's notes beyond the fixed chord and the identifying notes
    pub alterations: NoteSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// No addition up to the size limit singles this mode out
    Unidentified,
    Identified {
        chord_size: usize,
        chords: Vec<IdentifyingChord>,
    },
}

/// Search result for one catalogue mode
#[derive(Debug, Clone)]
pub struct ScaleOutcome {
    pub scale: ModeInKey,
    /// The mode's notes, simplified when requested
    pub notes: NoteSet,
    pub identification: Identification,
}

impl ScaleOutcome {
    pub fn chord_size(&self) -> Option<usize> {
        match &self.identification {
            Identification::Identified { chord_size, .. } => Some(*chord_size),
            Identification::Unidentified => None,
        }
    }

    pub fn chords(&self) -> &[IdentifyingChord] {
        match &self.identification {
            Identification::Identified { chords, .. } => chords,
            Identification::Unidentified => &[],
        }
    }
}

/// A mode together with one chord that identifies it
#[derive(Debug, Clone, Copy)]
pub struct ScaleMatch<'a> {
    pub scale: &'a ModeInKey,
    pub notes: &'a NoteSet,
    pub identifying: &'a NoteSet,
    pub chord_size: usize,
}

/// Everything `identify_modes` found for one fixed chord
#[derive(Debug, Clone)]
pub struct FinderReport {
    pub fixed: NoteSet,
    pub outcomes: Vec<ScaleOutcome>,
}

impl FinderReport {
    /// One entry per identifying chord, in catalogue order
    pub fn matches(&self) -> Vec<ScaleMatch<'_>> {
        self.outcomes
            .iter()
            .flat_map(|outcome| {
                let size = outcome.chord_size().unwrap_or(0);
                outcome.chords().iter().map(move |chord| ScaleMatch {
                    scale: &outcome.scale,
                    notes: &outcome.notes,
                    identifying: &chord.identifying,
                    chord_size: size,
                })
            })
            .collect()
    }

    pub fn identified(&self) -> impl Iterator<Item = &ScaleOutcome> {
        self.outcomes.iter().filter(|o| o.chord_size().is_some())
    }

    /// Modes grouped by minimal chord size; size 0 holds unidentified modes
    pub fn scales_by_chord_size(&self) -> BTreeMap<usize, Vec<&ModeInKey>> {
        let mut by_size: BTreeMap<usize, Vec<&ModeInKey>> = BTreeMap::new();
        for outcome in &self.outcomes {
            by_size
                .entry(outcome.chord_size().unwrap_or(0))
                .or_default()
                .push(&outcome.scale);
        }
        by_size
    }

    /// Modes grouped by (chord size, number of chords at that size),
    /// easiest to identify first
    pub fn distinctiveness(&self) -> Vec<((usize, usize), Vec<&ModeInKey>)> {
        let mut groups: BTreeMap<(usize, usize), Vec<&ModeInKey>> = BTreeMap::new();
        for outcome in self.identified() {
            if let Some(size) = outcome.chord_size() {
                groups
                    .entry((size, outcome.chords().len()))
                    .or_default()
                    .push(&outcome.scale);
            }
        }
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|((sa, ca), _), ((sb, cb), _)| sa.cmp(sb).then(cb.cmp(ca)));
        groups
    }
}

/// Lexicographic k-combinations of 0..n
struct Combinations {
    n: u8,
    indices: Vec<u8>,
    done: bool,
}

impl Combinations {
    fn new(n: u8, k: usize) -> Self {
        Self {
            n,
            indices: (0..k as u8).collect(),
            done: k > n as usize,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (k - i) as u8 {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

/// Exhaustive search for the chords that identify each catalogue mode
#[derive(Debug, Clone)]
pub struct ScaleFinder {
    fixed: NoteSet,
    catalogue: Vec<ModeInKey>,
    options: FinderOptions,
    state: FinderState,
    identifiers: Vec<Identifiers>,
}

impl ScaleFinder {
    pub fn new(fixed: NoteSet, catalogue: Vec<ModeInKey>) -> Self {
        Self {
            fixed,
            catalogue,
            options: FinderOptions::default(),
            state: FinderState::Configured,
            identifiers: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: FinderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn enable_simplification(&mut self) {
        self.options.simplify = true;
    }

    pub fn state(&self) -> FinderState {
        self.state
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    pub fn fixed(&self) -> &NoteSet {
        &self.fixed
    }

    pub fn catalogue(&self) -> &[ModeInKey] {
        &self.catalogue
    }

    /// Chromatic pitch classes not in the fixed chord
    pub fn variable_pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::chromatic().difference(&self.fixed.pitch_classes())
    }

    /// Identifiers per catalogue mode, in catalogue order
    pub fn find_identifiers(&mut self) -> &[Identifiers] {
        self.state = FinderState::Searching;
        let fixed = self.fixed.pitch_classes();
        let scales: Vec<PitchClassSet> = self
            .catalogue
            .iter()
            .map(|m| m.notes().pitch_classes())
            .collect();
        let mut identifiers: Vec<Identifiers> = vec![Identifiers::new(); scales.len()];

        for additions in 0..=12usize {
            if fixed.len() + additions > self.options.max_chord_size {
                break;
            }
            tracing::info!(additions, "checking all {}-note additions", additions);

            let mut seen: HashSet<PitchClassSet> = HashSet::new();
            for combination in Combinations::new(12, additions) {
                let chord = PitchClassSet::from_pitch_classes(combination);
                if !seen.insert(chord.difference(&fixed)) {
                    continue;
                }
                let test = fixed.union(&chord);
                let matches: Vec<usize> = scales
                    .iter()
                    .enumerate()
                    .filter(|(_, scale)| test.is_subset(scale))
                    .map(|(i, _)| i)
                    .collect();

                match matches.as_slice() {
                    [] => tracing::trace!(chord = %test, "matched no modes"),
                    [only] => {
                        tracing::debug!(
                            chord = %test,
                            mode = %self.catalogue[*only],
                            "uniquely identified"
                        );
                        identifiers[*only]
                            .entry(fixed.len() + additions)
                            .or_default()
                            .push(chord);
                    }
                    many => tracing::trace!(chord = %test, modes = many.len(), "matched several modes"),
                }
            }
        }

        self.identifiers = identifiers;
        &self.identifiers
    }

    /// Smallest identifying chords for every catalogue mode
    pub fn identify_modes(&mut self) -> FinderReport {
        if self.state == FinderState::Configured {
            self.find_identifiers();
        }

        let fixed = self.fixed.pitch_classes();
        let simplify = self.options.simplify;
        let present = |notes: NoteSet| if simplify { notes.simplified() } else { notes };

        let mut outcomes = Vec::with_capacity(self.catalogue.len());
        for (scale, identifiers) in self.catalogue.iter().zip(&self.identifiers) {
            let identification = match identifiers.iter().next() {
                None => {
                    tracing::debug!(mode = %scale, "no chords found uniquely identifying mode");
                    Identification::Unidentified
                }
                Some((&chord_size, chords)) => {
                    tracing::info!(
                        mode = %scale,
                        chord_size,
                        chords = chords.len(),
                        "identified mode"
                    );
                    let chords = chords
                        .iter()
                        .map(|chord| {
                            let remaining = scale.notes().without_pitch_classes(chord);
                            IdentifyingChord {
                                chord: *chord,
                                identifying: present(scale.notes().with_pitch_classes(chord)),
                                alterations: present(remaining.without_pitch_classes(&fixed)),
                            }
                        })
                        .collect();
                    Identification::Identified { chord_size, chords }
                }
            };
            outcomes.push(ScaleOutcome {
                scale: scale.clone(),
                notes: present(scale.notes().clone()),
                identification,
            });
        }

        self.state = FinderState::Reported;
        FinderReport {
            fixed: self.fixed.clone(),
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{Note, ScaleRegistry};

    fn c_catalogue() -> Vec<ModeInKey> {
        let registry = ScaleRegistry::standard().unwrap();
        let mut builder = CatalogueBuilder::new(&registry);
        builder
            .build(&Note::parse("C").unwrap(), &DEFAULT_FAMILIES)
            .unwrap()
            .flatten()
    }

    #[test]
    fn test_combinations() {
        assert_eq!(Combinations::new(12, 0).count(), 1);
        assert_eq!(Combinations::new(12, 1).count(), 12);
        assert_eq!(Combinations::new(12, 3).count(), 220);
        assert_eq!(Combinations::new(12, 12).count(), 1);
        assert_eq!(Combinations::new(4, 5).count(), 0);
        let pairs: Vec<Vec<u8>> = Combinations::new(3, 2).collect();
        assert_eq!(pairs, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_state_transitions() {
        let fixed = NoteSet::parse("C E G Bb").unwrap();
        let mut finder = ScaleFinder::new(fixed, c_catalogue());
        assert_eq!(finder.state(), FinderState::Configured);
        finder.find_identifiers();
        assert_eq!(finder.state(), FinderState::Searching);
        finder.identify_modes();
        assert_eq!(finder.state(), FinderState::Reported);
    }

    #[test]
    fn test_dominant_seventh_identifies_mixolydian() {
        let fixed = NoteSet::parse("E G Bb").unwrap();
        let mut finder = ScaleFinder::new(fixed, c_catalogue());
        let report = finder.identify_modes();
        assert_eq!(report.identified().count(), 9);

        let mixo = report
            .outcomes
            .iter()
            .find(|o| o.scale.to_string() == "C mixo")
            .unwrap();
        assert_eq!(mixo.chord_size(), Some(6));
        assert_eq!(mixo.chords().len(), 1);
        assert_eq!(mixo.chords()[0].identifying.note_names(), vec!["D", "F", "A"]);
        assert_eq!(mixo.chords()[0].alterations.note_names(), vec!["C"]);
    }

    #[test]
    fn test_variable_pitch_classes() {
        let finder = ScaleFinder::new(NoteSet::parse("C E G").unwrap(), Vec::new());
        assert_eq!(finder.variable_pitch_classes().len(), 9);
    }

    #[test]
    fn test_empty_inputs() {
        let mut finder = ScaleFinder::new(NoteSet::default(), Vec::new());
        let report = finder.identify_modes();
        assert!(report.outcomes.is_empty());
        assert!(report.matches().is_empty());

        let mut finder = ScaleFinder::new(NoteSet::default(), c_catalogue());
        let report = finder.identify_modes();
        assert_eq!(report.outcomes.len(), 33);
    }

    #[test]
    fn test_max_chord_size_bounds_search() {
        let fixed = NoteSet::parse("C E Bb Db5").unwrap();
        let mut finder = ScaleFinder::new(fixed, c_catalogue()).with_options(FinderOptions {
            simplify: false,
            max_chord_size: 5,
        });
        let report = finder.identify_modes();
        assert_eq!(report.identified().count(), 0);
    }

    #[test]
    fn test_summaries() {
        let fixed = NoteSet::parse("C Eb Bb D5 F5").unwrap();
        let mut finder = ScaleFinder::new(fixed, c_catalogue());
        let report = finder.identify_modes();
        let by_size = report.scales_by_chord_size();
        assert_eq!(by_size.get(&7).map(Vec::len), Some(4));
        assert_eq!(by_size.get(&0).map(Vec::len), Some(29));
        let distinct = report.distinctiveness();
        assert_eq!(distinct.len(), 1);
        assert_eq!(distinct[0].0, (7, 1));
    }
}
