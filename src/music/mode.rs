// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modes of a scale type, and modes materialised in a key.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::note::Note;
use super::note_set::NoteSet;
use super::scale_type::ScaleType;
use super::spelling::SpellingResolver;
use crate::error::{TheoryError, TheoryResult};

/// English ordinal, e.g. "2nd", "11th", "23rd"
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// One octave of the mode starting at `degree` of `scale_type` on `key`,
/// moved so the first note sits in the key's octave.
pub fn mode_notes(scale_type: &ScaleType, degree: usize, key: &Note) -> TheoryResult<NoteSet> {
    let notes = (0..scale_type.len())
        .map(|i| scale_type.note(key, degree + i))
        .collect::<TheoryResult<Vec<_>>>()?;
    let shift = match notes.first() {
        Some(first) => first.pitch().div_euclid(12) - key.pitch().div_euclid(12),
        None => 0,
    };
    Ok(notes.iter().map(|n| n.octave_shifted(-shift)).collect())
}

/// A scale type read from one of its degrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    degree: usize,
    scale_type: Arc<ScaleType>,
    name_override: Option<String>,
}

impl Mode {
    /// Mode starting on `degree` (1-based, within one cycle of the scale)
    pub fn new(degree: usize, scale_type: Arc<ScaleType>) -> TheoryResult<Self> {
        if degree == 0 || degree > scale_type.len() {
            return Err(TheoryError::InvalidDegree {
                scale_type: scale_type.name().to_string(),
                degree,
            });
        }
        Ok(Self {
            degree,
            scale_type,
            name_override: None,
        })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name_override = Some(name.to_string());
        self
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn scale_type(&self) -> &Arc<ScaleType> {
        &self.scale_type
    }

    /// Increments starting from this degree, without the step back to the octave
    pub fn increments(&self) -> Vec<i32> {
        let mut increments = self.scale_type.increments().to_vec();
        increments.rotate_left(self.degree - 1);
        increments.pop();
        increments
    }

    /// Parent scale degrees in the order this mode visits them
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = (1..=self.scale_type.len()).collect();
        degrees.rotate_left(self.degree - 1);
        degrees
    }

    /// Override, else the curated name for this degree
    pub fn name(&self) -> Option<&str> {
        self.name_override
            .as_deref()
            .or_else(|| self.scale_type.mode_name(self.degree))
    }

    /// Notes of this mode when the parent scale is built on `key`
    pub fn notes(&self, key: &Note) -> TheoryResult<NoteSet> {
        mode_notes(&self.scale_type, self.degree, key)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{} degree of {}", ordinal(self.degree), self.scale_type),
        }
    }
}

/// A mode materialised on an actual key.
///
/// `mode`/`key` are the spelling actually used to generate the notes;
/// `original_mode`/`original_key` are what the caller asked for before a
/// symmetric scale was respelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeInKey {
    mode: Mode,
    key: Note,
    notes: NoteSet,
    original_mode: Mode,
    original_key: Note,
    original_first: Note,
}

impl ModeInKey {
    /// Materialise `mode` with its parent scale built on `key`
    pub fn new(mode: Mode, key: Note) -> TheoryResult<Self> {
        let notes = mode.notes(&key)?;
        let original_first = first_note(&notes, &key);
        Ok(Self {
            original_mode: mode.clone(),
            original_key: key,
            mode,
            key,
            notes,
            original_first,
        })
    }

    /// Materialise `mode` so that its first note is `start`.
    ///
    /// Symmetric scales may be respelled from an equivalent key; the
    /// requested mode and key are kept as the original.
    pub fn by_start_note(
        mode: &Mode,
        start: &Note,
        resolver: &mut SpellingResolver,
    ) -> TheoryResult<Self> {
        let scale_type = mode.scale_type();
        let resolution = resolver.resolve(scale_type, start, mode.degree())?;
        let octave = start.octave();

        let key = resolution.key.with_octave(octave);
        let actual = Mode::new(resolution.degree, Arc::clone(scale_type))?;
        let notes = actual.notes(&key)?;

        let original_key = resolution.original_key.with_octave(octave);
        let original_first = scale_type.note(&original_key, mode.degree())?;

        Ok(Self {
            mode: actual,
            key,
            notes,
            original_mode: mode.clone(),
            original_key,
            original_first,
        })
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn key(&self) -> &Note {
        &self.key
    }

    pub fn notes(&self) -> &NoteSet {
        &self.notes
    }

    pub fn note_names(&self) -> Vec<String> {
        self.notes.note_names()
    }

    pub fn original_mode(&self) -> &Mode {
        &self.original_mode
    }

    pub fn original_key(&self) -> &Note {
        &self.original_key
    }

    pub fn scale_type(&self) -> &Arc<ScaleType> {
        self.mode.scale_type()
    }

    /// First note of the mode
    pub fn start(&self) -> Note {
        first_note(&self.notes, &self.key)
    }

    pub fn num_sharps(&self) -> u32 {
        self.notes.num_sharps()
    }

    pub fn num_flats(&self) -> u32 {
        self.notes.num_flats()
    }

    /// Flats minus sharps; catalogue groups sort ascending on this
    pub fn accidental_balance(&self) -> i64 {
        i64::from(self.num_flats()) - i64::from(self.num_sharps())
    }

    pub fn cmp_accidentals(&self, other: &ModeInKey) -> Ordering {
        self.accidental_balance().cmp(&other.accidental_balance())
    }

    fn generic(&self, mode: &Mode, key: &Note, first: &Note) -> String {
        let text = format!("{} {}", key.name(), mode.scale_type().name());
        if first.same_spelling(key) {
            text
        } else {
            format!("{} degree of {}", ordinal(mode.degree()), text)
        }
    }

    fn special(&self, mode: &Mode) -> Option<String> {
        mode.name()
            .map(|name| format!("{} {}", self.start().name(), name))
    }

    fn combined(&self, generic: String, special: Option<String>, separator: &str) -> String {
        match special {
            Some(special) if special != generic => {
                format!("{}{}({})", special, separator, generic)
            }
            _ => generic,
        }
    }

    /// Key-relative description, e.g. "4th degree of G diminished"
    pub fn generic_name(&self) -> String {
        self.generic(&self.mode, &self.key, &self.start())
    }

    /// Curated description, e.g. "C altered"
    pub fn special_name(&self) -> Option<String> {
        self.special(&self.mode)
    }

    /// Curated name with the generic one in brackets on the next line
    pub fn name(&self) -> String {
        self.name_joined("\n")
    }

    /// As [`name`](Self::name) with a custom separator
    pub fn name_joined(&self, separator: &str) -> String {
        self.combined(self.generic_name(), self.special_name(), separator)
    }

    fn original_generic(&self) -> String {
        self.generic(&self.original_mode, &self.original_key, &self.original_first)
    }

    /// Name of the mode and key originally requested
    pub fn original_name(&self) -> String {
        self.combined(self.original_generic(), self.special(&self.original_mode), "\n")
    }

    /// Single-line form of [`original_name`](Self::original_name)
    pub fn original_label(&self) -> String {
        self.special(&self.original_mode)
            .unwrap_or_else(|| self.original_generic())
    }
}

fn first_note(notes: &NoteSet, fallback: &Note) -> Note {
    notes.notes().first().copied().unwrap_or(*fallback)
}

impl fmt::Display for ModeInKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special_name() {
            Some(special) => write!(f, "{}", special),
            None => write!(f, "{}", self.generic_name()),
        }
    }
}
