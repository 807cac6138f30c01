// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals named the way chord symbols spell them ("b9", "#11", "5").

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::accidental::Accidental;
use super::mode::ordinal;
use super::note::Note;
use crate::error::{TheoryError, TheoryResult};

/// Semitones above the root for each degree of the major scale
const MAJOR_OFFSETS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A major-scale degree, optionally altered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    degree: usize,
    accidental: Accidental,
}

impl Interval {
    pub fn new(degree: usize, accidental: Accidental) -> TheoryResult<Self> {
        if degree == 0 {
            return Err(TheoryError::InvalidInterval(format!("{}{}", accidental.label(), degree)));
        }
        Ok(Self { degree, accidental })
    }

    /// Parse "3", "b7", "#11", "bb7" ...
    pub fn parse(name: &str) -> TheoryResult<Self> {
        let invalid = || TheoryError::InvalidInterval(name.to_string());
        let split = name.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (token, digits) = name.split_at(split);
        if digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let accidental: Accidental = token.parse().map_err(|_| invalid())?;
        let degree: usize = digits.parse().map_err(|_| invalid())?;
        Self::new(degree, accidental).map_err(|_| invalid())
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Size in semitones
    pub fn semitones(&self) -> i32 {
        let d = self.degree - 1;
        12 * (d / 7) as i32 + MAJOR_OFFSETS[d % 7] + self.accidental.delta()
    }

    /// The note this interval above `root`
    pub fn from(&self, root: &Note) -> TheoryResult<Note> {
        let letter = root.letter().shift(self.degree as i32 - 1);
        Note::by_letter_and_pitch(letter, root.pitch() + self.semitones())
    }

    /// Chord-symbol name, e.g. "b9"
    pub fn name(&self) -> String {
        format!("{}{}", self.accidental.label(), self.degree)
    }

    /// Quality word: minor, major, dim, perfect or aug
    pub fn adjective(&self) -> &'static str {
        if self.accidental == Accidental::Sharp {
            return "aug";
        }
        let choices: [Option<&'static str>; 2] = match (self.degree - 1) % 7 + 1 {
            1 => [None, Some("")],
            2 | 3 | 6 | 7 => [Some("minor"), Some("major")],
            _ => [Some("dim"), Some("perfect")],
        };
        match self.accidental {
            Accidental::Flat => choices[0],
            Accidental::Natural => choices[1],
            _ => None,
        }
        .unwrap_or("unrecognised")
    }

    /// Spoken name, e.g. "flat 9th" or "major 3rd"
    pub fn long_name(&self) -> String {
        match self.name().as_str() {
            "1" => "unison".to_string(),
            "b9" => "flat 9th".to_string(),
            "#11" => "sharp 11th".to_string(),
            "b13" => "flat 13th".to_string(),
            _ => {
                let size = if self.degree == 1 {
                    "unison".to_string()
                } else {
                    ordinal(self.degree)
                };
                format!("{} {}", self.adjective(), size)
            }
        }
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.degree, self.semitones()).cmp(&(other.degree, other.semitones()))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(name: &str) -> Interval {
        Interval::parse(name).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(iv("b9").degree(), 9);
        assert_eq!(iv("b9").accidental(), Accidental::Flat);
        assert_eq!(iv("#11").name(), "#11");
        assert_eq!(iv("bb7").semitones(), 9);
        for bad in ["", "9b", "b", "123", "q3", "0"] {
            assert!(
                matches!(Interval::parse(bad), Err(TheoryError::InvalidInterval(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_from_note() {
        let c = Note::parse("C").unwrap();
        assert_eq!(iv("b9").from(&c).unwrap().scientific_name(), "Db5");
        assert_eq!(iv("#11").from(&c).unwrap().scientific_name(), "F#5");
        assert_eq!(iv("3").from(&c).unwrap().scientific_name(), "E4");
        let db = Note::parse("Db").unwrap();
        assert_eq!(iv("b7").from(&db).unwrap().scientific_name(), "Cb4");
        assert_eq!(iv("b9").from(&db).unwrap().name(), "Ebb");
    }

    #[test]
    fn test_adjectives_and_long_names() {
        assert_eq!(iv("b3").adjective(), "minor");
        assert_eq!(iv("3").adjective(), "major");
        assert_eq!(iv("5").adjective(), "perfect");
        assert_eq!(iv("b5").adjective(), "dim");
        assert_eq!(iv("#5").adjective(), "aug");
        assert_eq!(iv("1").long_name(), "unison");
        assert_eq!(iv("b9").long_name(), "flat 9th");
        assert_eq!(iv("#11").long_name(), "sharp 11th");
        assert_eq!(iv("b13").long_name(), "flat 13th");
        assert_eq!(iv("3").long_name(), "major 3rd");
        assert_eq!(iv("b7").long_name(), "minor 7th");
        assert_eq!(iv("11").long_name(), "perfect 11th");
    }

    #[test]
    fn test_ordering() {
        let mut intervals = vec![iv("#9"), iv("b7"), iv("b9"), iv("3"), iv("b3")];
        intervals.sort();
        let names: Vec<String> = intervals.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["b3", "3", "b7", "b9", "#9"]);
    }
}
