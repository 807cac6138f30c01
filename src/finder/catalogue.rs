// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Every mode of every registered scale type, starting on one note.

use std::sync::Arc;

use crate::error::{TheoryError, TheoryResult};
use crate::music::{Mode, ModeInKey, Note, ScaleFamily, ScaleRegistry};
use crate::music::spelling::SpellingResolver;

/// Families searched when none are specified
pub const DEFAULT_FAMILIES: [ScaleFamily; 2] = [ScaleFamily::Diatonic, ScaleFamily::Symmetrical];

/// Modes grouped by scale type, each group ordered flats-minus-sharps
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    start: Option<Note>,
    groups: Vec<Vec<ModeInKey>>,
}

impl Catalogue {
    /// Catalogue with explicit groups
    pub fn from_groups(start: Option<Note>, groups: Vec<Vec<ModeInKey>>) -> Self {
        Self { start, groups }
    }

    pub fn start(&self) -> Option<&Note> {
        self.start.as_ref()
    }

    pub fn groups(&self) -> &[Vec<ModeInKey>] {
        &self.groups
    }

    /// All modes in catalogue order
    pub fn flatten(&self) -> Vec<ModeInKey> {
        self.groups.iter().flatten().cloned().collect()
    }

    /// Number of modes
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds catalogues from a registry, reusing one spelling cache
#[derive(Debug)]
pub struct CatalogueBuilder<'a> {
    registry: &'a ScaleRegistry,
    resolver: SpellingResolver,
}

impl<'a> CatalogueBuilder<'a> {
    pub fn new(registry: &'a ScaleRegistry) -> Self {
        Self {
            registry,
            resolver: SpellingResolver::new(),
        }
    }

    pub fn resolver(&self) -> &SpellingResolver {
        &self.resolver
    }

    /// Every mode of the requested families, each starting on `start`.
    ///
    /// Modes whose notes would need more than a double accidental from this
    /// spelling of `start` are left out.
    pub fn build(&mut self, start: &Note, families: &[ScaleFamily]) -> TheoryResult<Catalogue> {
        let mut groups = Vec::new();
        for scale_type in self.registry.in_families(families) {
            let mut group = Vec::with_capacity(scale_type.num_modes());
            for degree in 1..=scale_type.num_modes() {
                let mode = Mode::new(degree, Arc::clone(&scale_type))?;
                match ModeInKey::by_start_note(&mode, start, &mut self.resolver) {
                    Ok(mode_in_key) => group.push(mode_in_key),
                    Err(err @ TheoryError::LetterPitchMismatch { .. }) => {
                        tracing::warn!(
                            start = %start,
                            scale_type = %scale_type,
                            degree,
                            error = %err,
                            "mode cannot be spelled from this start note, skipping"
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
            if group.is_empty() {
                continue;
            }
            group.sort_by(|a, b| a.cmp_accidentals(b));
            groups.push(group);
        }

        let catalogue = Catalogue::from_groups(Some(*start), groups);
        tracing::info!(
            start = %start,
            scale_types = catalogue.groups().len(),
            modes = catalogue.len(),
            "built catalogue"
        );
        Ok(catalogue)
    }

    /// Catalogue over every family in the registry
    pub fn build_all(&mut self, start: &Note) -> TheoryResult<Catalogue> {
        self.build(start, &ScaleFamily::ALL)
    }
}
