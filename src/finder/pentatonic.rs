// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pentatonic scales hiding inside larger scales.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::FinderReport;
use crate::error::TheoryResult;
use crate::music::{Mode, ModeInKey, NoteSet, ScaleFamily, ScaleRegistry, ScaleType, SpellingResolver};

/// Compares note sets against every pentatonic built on their notes
#[derive(Debug)]
pub struct PentatonicMatcher {
    pentatonics: Vec<Arc<ScaleType>>,
    resolver: SpellingResolver,
}

impl PentatonicMatcher {
    /// Matcher over the registry's pentatonic family
    pub fn new(registry: &ScaleRegistry) -> Self {
        Self::with_scale_types(registry.in_families(&[ScaleFamily::Pentatonic]))
    }

    pub fn with_scale_types(pentatonics: Vec<Arc<ScaleType>>) -> Self {
        Self {
            pentatonics,
            resolver: SpellingResolver::new(),
        }
    }

    /// Pentatonics rooted on each note of `notes`, keyed by how many
    /// pitch classes they share with `notes`
    pub fn match_notes(&mut self, notes: &NoteSet) -> TheoryResult<BTreeMap<usize, Vec<ModeInKey>>> {
        let notes = notes.octave_squashed();
        let pitch_classes = notes.pitch_classes();
        let mut matches: BTreeMap<usize, Vec<ModeInKey>> = BTreeMap::new();

        for note in &notes {
            for scale_type in &self.pentatonics {
                let mode = Mode::new(1, Arc::clone(scale_type))?;
                let pentatonic = ModeInKey::by_start_note(&mode, note, &mut self.resolver)?;
                let shared = pitch_classes
                    .intersection(&pentatonic.notes().pitch_classes())
                    .len();
                matches.entry(shared).or_default().push(pentatonic);
            }
        }
        Ok(matches)
    }

    /// Pentatonics lying entirely inside `notes`
    pub fn contained_in(&mut self, notes: &NoteSet) -> TheoryResult<Vec<ModeInKey>> {
        let pitch_classes = notes.pitch_classes();
        Ok(self
            .match_notes(notes)?
            .into_values()
            .flatten()
            .filter(|p| p.notes().pitch_classes().is_subset(&pitch_classes))
            .collect())
    }

    /// For every pentatonic contained in a matched scale, the names of the
    /// matched scales containing it. Keys read "<name> - <notes>".
    pub fn containment(&mut self, report: &FinderReport) -> TheoryResult<BTreeMap<String, Vec<String>>> {
        let mut containment: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for found in report.matches() {
            for pentatonic in self.contained_in(found.notes)? {
                let key = format!(
                    "{} - {}",
                    pentatonic.name_joined(" "),
                    pentatonic.note_names().join(" ")
                );
                let scales = containment.entry(key).or_default();
                let scale = found.scale.name_joined(" ");
                if !scales.contains(&scale) {
                    scales.push(scale);
                }
            }
        }
        Ok(containment)
    }
}
