// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes.
//!
//! A [`Note`] is a letter, an accidental and an absolute pitch (MIDI
//! numbering, middle C = C4 = 60). The letter and accidental always spell
//! the pitch class of the pitch; constructors refuse anything else.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::accidental::Accidental;
use crate::error::{TheoryError, TheoryResult};

/// Absolute pitch in semitones (60 = middle C)
pub type Pitch = i32;

/// Octave used when a note name carries no octave number
pub const DEFAULT_OCTAVE: i32 = 4;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Letters in ascending order from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within C..B (0-6)
    pub fn index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Letter at a position, wrapping around the seven-letter cycle
    pub fn from_index(index: i32) -> Self {
        Letter::ALL[index.rem_euclid(7) as usize]
    }

    /// Pitch class of the natural note
    pub fn natural_pitch(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Move up (positive) or down (negative) the letter cycle
    pub fn shift(self, steps: i32) -> Self {
        Letter::from_index(self.index() + steps)
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    pub fn from_char(c: char) -> TheoryResult<Self> {
        match c {
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            other => Err(TheoryError::InvalidLetter(other.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled note with an absolute pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    pitch: Pitch,
}

impl Note {
    /// Build a note from a spelling and an octave number.
    ///
    /// The octave is that of the resulting pitch, so `Cb4` is pitch 71
    /// and `B#4` is pitch 60.
    pub fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        let pitch_class = (letter.natural_pitch() + accidental.delta()).rem_euclid(12);
        Self {
            letter,
            accidental,
            pitch: pitch_class + 12 * (octave + 1),
        }
    }

    /// Natural note in the default octave
    pub fn by_letter(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural, DEFAULT_OCTAVE)
    }

    /// Spell `pitch` with `letter`, choosing the accidental that reconciles them.
    pub fn by_letter_and_pitch(letter: Letter, pitch: Pitch) -> TheoryResult<Self> {
        let natural = letter.natural_pitch();
        let delta = (pitch - natural + 6).rem_euclid(12) - 6;
        match Accidental::from_delta(delta) {
            Some(accidental) => Ok(Self {
                letter,
                accidental,
                pitch,
            }),
            None => Err(TheoryError::LetterPitchMismatch {
                letter: letter.as_char(),
                pitch,
                natural,
                delta,
            }),
        }
    }

    /// Every spelling of `pitch`, in letter order from C
    pub fn by_pitch(pitch: Pitch) -> Vec<Self> {
        Letter::ALL
            .iter()
            .filter_map(|&letter| Self::by_letter_and_pitch(letter, pitch).ok())
            .collect()
    }

    /// Parse a name such as "C", "F#3", "Bbb-1" or "Gx5"
    pub fn parse(name: &str) -> TheoryResult<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let first = chars
            .next()
            .ok_or_else(|| TheoryError::InvalidNoteName(name.to_string()))?;
        let letter = Letter::from_char(first)?;

        let rest = chars.as_str();
        let split = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(rest.len());
        let (token, octave_text) = rest.split_at(split);
        let accidental: Accidental = token.parse()?;
        let octave = if octave_text.is_empty() {
            DEFAULT_OCTAVE
        } else {
            octave_text
                .parse::<i32>()
                .map_err(|_| TheoryError::InvalidNoteName(name.to_string()))?
        };

        Ok(Self::new(letter, accidental, octave))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Pitch modulo 12
    pub fn pitch_class(&self) -> u8 {
        self.pitch.rem_euclid(12) as u8
    }

    pub fn octave(&self) -> i32 {
        self.pitch.div_euclid(12) - 1
    }

    /// Same spelling and pitch class, moved into `octave`
    pub fn with_octave(&self, octave: i32) -> Self {
        Self {
            pitch: i32::from(self.pitch_class()) + 12 * (octave + 1),
            ..*self
        }
    }

    /// Same spelling, moved by whole octaves
    pub fn octave_shifted(&self, octaves: i32) -> Self {
        Self {
            pitch: self.pitch + 12 * octaves,
            ..*self
        }
    }

    /// Same spelling with the pitch reduced to 0..12
    pub fn octave_squashed(&self) -> Self {
        Self {
            pitch: i32::from(self.pitch_class()),
            ..*self
        }
    }

    /// Move the pitch by `semitones`, keeping the letter.
    pub fn transposed(&self, semitones: i32) -> TheoryResult<Self> {
        Self::by_letter_and_pitch(self.letter, self.pitch + semitones)
    }

    /// Letter position counting across octaves
    pub fn letter_index(&self) -> i32 {
        self.letter.index() + 7 * self.octave()
    }

    /// Same pitch class, regardless of spelling or octave
    pub fn is_equivalent(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// Same letter and accidental, regardless of octave
    pub fn same_spelling(&self, other: &Note) -> bool {
        self.letter == other.letter && self.accidental == other.accidental
    }

    fn ugly_respelling(&self) -> Option<Letter> {
        match (self.letter, self.accidental) {
            (Letter::E, Accidental::Sharp) => Some(Letter::F),
            (Letter::B, Accidental::Sharp) => Some(Letter::C),
            (Letter::F, Accidental::Flat) => Some(Letter::E),
            (Letter::C, Accidental::Flat) => Some(Letter::B),
            _ => None,
        }
    }

    /// No double accidental and none of E#, B#, Fb, Cb
    pub fn is_simple(&self) -> bool {
        self.accidental.magnitude() < 2 && self.ugly_respelling().is_none()
    }

    /// Respell with the plainest name for the same pitch.
    ///
    /// Double accidentals move to the neighbouring letter, then E#, B#, Fb
    /// and Cb become F, C, E and B.
    pub fn simplify(&self) -> Self {
        let mut note = *self;
        if note.accidental.magnitude() == 2 {
            let step = note.accidental.delta().signum();
            // The neighbouring letter is one or two semitones away, so at
            // most a single accidental remains.
            let respelled = Self::by_letter_and_pitch(note.letter.shift(step), note.pitch);
            debug_assert!(respelled.is_ok(), "{} has no neighbouring spelling", note.name());
            note = respelled.unwrap_or(note);
        }
        if let Some(letter) = note.ugly_respelling() {
            note = Self {
                letter,
                accidental: Accidental::Natural,
                pitch: note.pitch,
            };
        }
        note
    }

    /// Letter and accidental, e.g. "C#"
    pub fn name(&self) -> String {
        format!("{}{}", self.letter, self.accidental.label())
    }

    /// Name with octave number, e.g. "C#4"
    pub fn scientific_name(&self) -> String {
        format!("{}{}", self.name(), self.octave())
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pitch
            .cmp(&other.pitch)
            .then(self.letter.cmp(&other.letter))
            .then(self.accidental.cmp(&other.accidental))
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(name: &str) -> Note {
        Note::parse(name).unwrap()
    }

    #[test]
    fn test_letter_shift_wraps() {
        assert_eq!(Letter::B.shift(1), Letter::C);
        assert_eq!(Letter::A.shift(-1), Letter::G);
        assert_eq!(Letter::C.shift(-8), Letter::B);
    }

    #[test]
    fn test_parse_pitches() {
        assert_eq!(n("C").pitch(), 60);
        assert_eq!(n("C4").pitch(), 60);
        assert_eq!(n("A4").pitch(), 69);
        assert_eq!(n("C#3").pitch(), 49);
        assert_eq!(n("Cb4").pitch(), 71);
        assert_eq!(n("B#4").pitch(), 60);
        assert_eq!(n("Gx").pitch(), 69);
        assert_eq!(n("C-1").pitch(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Note::parse("H"), Err(TheoryError::InvalidLetter(_))));
        assert!(matches!(
            Note::parse("C?"),
            Err(TheoryError::UnrecognisedAccidental(_))
        ));
        assert!(matches!(Note::parse(""), Err(TheoryError::InvalidNoteName(_))));
        assert!(matches!(Note::parse("C4-"), Err(TheoryError::InvalidNoteName(_))));
    }

    #[test]
    fn test_by_letter_and_pitch() {
        let note = Note::by_letter_and_pitch(Letter::E, 66).unwrap();
        assert_eq!(note.name(), "Ex");
        let note = Note::by_letter_and_pitch(Letter::C, 59).unwrap();
        assert_eq!(note.name(), "Cb");
        assert_eq!(note.octave(), 3);
        assert!(matches!(
            Note::by_letter_and_pitch(Letter::C, 64),
            Err(TheoryError::LetterPitchMismatch { delta: 4, .. })
        ));
    }

    #[test]
    fn test_by_pitch() {
        let names: Vec<String> = Note::by_pitch(61).iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["C#", "Db", "Bx"]);
        let names: Vec<String> = Note::by_pitch(68).iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["G#", "Ab"]);
    }

    #[test]
    fn test_simplify() {
        assert_eq!(n("Ex").simplify().name(), "F#");
        assert_eq!(n("Cbb").simplify().name(), "Bb");
        assert_eq!(n("Bx").simplify().name(), "C#");
        assert_eq!(n("Gx").simplify().name(), "A");
        assert_eq!(n("E#").simplify().name(), "F");
        assert_eq!(n("Cb").simplify().name(), "B");
        assert_eq!(n("Fb").simplify().name(), "E");
        assert_eq!(n("Bbb").simplify().name(), "A");
        assert_eq!(n("Db").simplify().name(), "Db");
    }

    #[test]
    fn test_simplify_preserves_pitch() {
        for name in ["Ex", "Cbb", "Bx", "B#3", "Fbb", "Cb5"] {
            let note = n(name);
            let simple = note.simplify();
            assert_eq!(simple.pitch(), note.pitch());
            assert_eq!(simple.simplify(), simple);
            assert!(simple.is_simple());
        }
    }

    #[test]
    fn test_simplify_every_double_accidental() {
        for letter in ["C", "D", "E", "F", "G", "A", "B"] {
            for accidental in ["bb", "x"] {
                let note = n(&format!("{}{}", letter, accidental));
                let simple = note.simplify();
                assert!(simple.is_simple(), "{} -> {}", note.name(), simple.name());
                assert_eq!(simple.pitch(), note.pitch(), "{}", note.name());
                assert_ne!(simple.letter(), note.letter(), "{}", note.name());
            }
        }
    }

    #[test]
    fn test_equality_and_equivalence() {
        assert_ne!(n("C#"), n("Db"));
        assert!(n("C#").is_equivalent(&n("Db")));
        assert!(n("C3").is_equivalent(&n("C5")));
        assert_ne!(n("C3"), n("C5"));
        assert!(!n("C").is_equivalent(&n("D")));
    }

    #[test]
    fn test_octave_helpers() {
        let note = n("F#2");
        assert_eq!(note.with_octave(5).scientific_name(), "F#5");
        assert_eq!(note.octave_shifted(1).pitch(), note.pitch() + 12);
        assert_eq!(note.octave_squashed().pitch(), 6);
        assert_eq!(n("D4").letter_index(), 29);
    }

    #[test]
    fn test_transposed_keeps_letter() {
        let note = n("E").transposed(-1).unwrap();
        assert_eq!(note.name(), "Eb");
        assert!(n("E").transposed(4).is_err());
    }

    #[test]
    fn test_ordering() {
        let mut notes = vec![n("D"), n("C#"), n("Db"), n("C")];
        notes.sort();
        let names: Vec<String> = notes.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["C", "C#", "Db", "D"]);
    }
}
