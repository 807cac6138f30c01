// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note collections and pitch-class sets.

use std::fmt;

use super::accidental::Accidental;
use super::note::{Letter, Note, DEFAULT_OCTAVE};
use crate::error::TheoryResult;

/// Fixed spelling of the twelve pitch classes used for raw combinations
const PITCH_CLASS_SPELLING: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::D, Accidental::Flat),
    (Letter::D, Accidental::Natural),
    (Letter::E, Accidental::Flat),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::A, Accidental::Flat),
    (Letter::A, Accidental::Natural),
    (Letter::B, Accidental::Flat),
    (Letter::B, Accidental::Natural),
];

/// A set of pitch classes stored as a 12-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    const FULL: u16 = 0x0fff;

    pub fn new() -> Self {
        Self(0)
    }

    /// All twelve pitch classes
    pub fn chromatic() -> Self {
        Self(Self::FULL)
    }

    pub fn from_pitch_classes<I: IntoIterator<Item = u8>>(pitch_classes: I) -> Self {
        let mut set = Self::new();
        for pc in pitch_classes {
            set.insert(pc);
        }
        set
    }

    pub fn from_notes<'a, I: IntoIterator<Item = &'a Note>>(notes: I) -> Self {
        Self::from_pitch_classes(notes.into_iter().map(|n| n.pitch_class()))
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn insert(&mut self, pitch_class: u8) {
        self.0 |= 1 << (pitch_class % 12);
    }

    pub fn contains(&self, pitch_class: u8) -> bool {
        self.0 & (1 << (pitch_class % 12)) != 0
    }

    pub fn contains_note(&self, note: &Note) -> bool {
        self.contains(note.pitch_class())
    }

    pub fn is_subset(&self, other: &PitchClassSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn union(&self, other: &PitchClassSet) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(&self, other: &PitchClassSet) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn intersection(&self, other: &PitchClassSet) -> Self {
        Self(self.0 & other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Pitch classes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..12).filter(move |&pc| self.contains(pc))
    }

    /// Spell each pitch class with the fixed C Db D Eb E F F# G Ab A Bb B table
    pub fn to_note_set(&self) -> NoteSet {
        NoteSet::new(self.iter().map(|pc| {
            let (letter, accidental) = PITCH_CLASS_SPELLING[pc as usize];
            Note::new(letter, accidental, DEFAULT_OCTAVE)
        }))
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_note_set())
    }
}

/// An ordered collection of distinct notes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NoteSet {
    notes: Vec<Note>,
}

impl NoteSet {
    /// Keep the first occurrence of each note, preserving order
    pub fn new<I: IntoIterator<Item = Note>>(notes: I) -> Self {
        let mut unique: Vec<Note> = Vec::new();
        for note in notes {
            if !unique.contains(&note) {
                unique.push(note);
            }
        }
        Self { notes: unique }
    }

    /// Parse whitespace separated note names, e.g. "E G Bb"
    pub fn parse(names: &str) -> TheoryResult<Self> {
        let notes = names
            .split_whitespace()
            .map(Note::parse)
            .collect::<TheoryResult<Vec<_>>>()?;
        Ok(Self::new(notes))
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::from_notes(&self.notes)
    }

    pub fn pitches(&self) -> Vec<i32> {
        self.notes.iter().map(|n| n.pitch()).collect()
    }

    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.name()).collect()
    }

    /// Names with octave numbers joined by single spaces, e.g. "C4 E4 G4"
    pub fn scientific_names(&self) -> String {
        self.notes
            .iter()
            .map(|n| n.scientific_name())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn contains_equivalent(&self, note: &Note) -> bool {
        self.notes.iter().any(|n| n.is_equivalent(note))
    }

    /// Notes whose pitch class is not in `exclude`, in order
    pub fn without_pitch_classes(&self, exclude: &PitchClassSet) -> NoteSet {
        Self {
            notes: self
                .notes
                .iter()
                .filter(|n| !exclude.contains_note(n))
                .copied()
                .collect(),
        }
    }

    /// Notes whose pitch class is in `include`, in order
    pub fn with_pitch_classes(&self, include: &PitchClassSet) -> NoteSet {
        Self {
            notes: self
                .notes
                .iter()
                .filter(|n| include.contains_note(n))
                .copied()
                .collect(),
        }
    }

    /// Sum of sharp magnitudes (a double sharp counts twice)
    pub fn num_sharps(&self) -> u32 {
        self.notes
            .iter()
            .filter(|n| n.accidental().delta() > 0)
            .map(|n| n.accidental().magnitude())
            .sum()
    }

    /// Sum of flat magnitudes (a double flat counts twice)
    pub fn num_flats(&self) -> u32 {
        self.notes
            .iter()
            .filter(|n| n.accidental().delta() < 0)
            .map(|n| n.accidental().magnitude())
            .sum()
    }

    pub fn num_accidentals(&self) -> u32 {
        self.num_sharps() + self.num_flats()
    }

    /// Number of distinct letters used
    pub fn num_letters(&self) -> usize {
        let mut letters: Vec<Letter> = self.notes.iter().map(|n| n.letter()).collect();
        letters.sort();
        letters.dedup();
        letters.len()
    }

    pub fn simplified(&self) -> NoteSet {
        Self::new(self.notes.iter().map(|n| n.simplify()))
    }

    pub fn octave_squashed(&self) -> NoteSet {
        Self::new(self.notes.iter().map(|n| n.octave_squashed()))
    }
}

impl FromIterator<Note> for NoteSet {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a NoteSet {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl fmt::Display for NoteSet {
    /// Names left-aligned in three-character columns
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self.notes.iter().map(|n| format!("{:<3}", n.name())).collect();
        write!(f, "{}", columns.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_set_ops() {
        let triad = PitchClassSet::from_pitch_classes([0, 4, 7]);
        let major = PitchClassSet::from_pitch_classes([0, 2, 4, 5, 7, 9, 11]);
        assert!(triad.is_subset(&major));
        assert!(!major.is_subset(&triad));
        assert_eq!(major.difference(&triad).len(), 4);
        assert_eq!(triad.union(&PitchClassSet::from_pitch_classes([10])).len(), 4);
        assert_eq!(triad.iter().collect::<Vec<_>>(), vec![0, 4, 7]);
        assert_eq!(PitchClassSet::chromatic().len(), 12);
        assert!(PitchClassSet::new().is_subset(&triad));
    }

    #[test]
    fn test_fixed_spelling() {
        let set = PitchClassSet::from_pitch_classes([1, 3, 6, 8, 10]);
        assert_eq!(set.to_note_set().note_names(), vec!["Db", "Eb", "F#", "Ab", "Bb"]);
    }

    #[test]
    fn test_note_set_dedup_and_counts() {
        let set = NoteSet::parse("C Db Ebb C F# Gx").unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.num_flats(), 3);
        assert_eq!(set.num_sharps(), 3);
        assert_eq!(set.num_accidentals(), 6);
        assert_eq!(set.num_letters(), 5);
    }

    #[test]
    fn test_display_columns() {
        let set = NoteSet::parse("C F# Bb").unwrap();
        assert_eq!(set.to_string(), "C   F#  Bb ");
    }

    #[test]
    fn test_pitch_class_filters() {
        let scale = NoteSet::parse("C D E F G A Bb").unwrap();
        let chord = NoteSet::parse("E G Bb").unwrap().pitch_classes();
        assert_eq!(scale.without_pitch_classes(&chord).note_names(), vec!["C", "D", "F", "A"]);
        assert_eq!(scale.with_pitch_classes(&chord).note_names(), vec!["E", "G", "Bb"]);
        assert!(scale.contains_equivalent(&Note::parse("A#").unwrap()));
    }

    #[test]
    fn test_simplified_and_squashed() {
        let set = NoteSet::parse("Fb5 Cbb3").unwrap();
        assert_eq!(set.simplified().note_names(), vec!["E", "Bb"]);
        assert_eq!(set.octave_squashed().pitches(), vec![4, 10]);
    }
}
