// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord symbols ("7b9", "min11", "maj7#5") turned into intervals.

use std::fmt;

use super::interval::Interval;
use super::note::Note;
use super::note_set::NoteSet;
use crate::error::{TheoryError, TheoryResult};

/// Quality prefixes, longest match first
const QUALITIES: [(&str, &[&str]); 16] = [
    ("min/maj7", &["b3", "7"]),
    ("minmaj7", &["b3", "7"]),
    ("maj7", &["3", "7"]),
    ("maj9", &["3", "7", "9"]),
    ("maj", &["3"]),
    ("min7", &["b3", "b7"]),
    ("min9", &["b3", "b7", "9"]),
    ("min11", &["b3", "b7", "9", "11"]),
    ("min6", &["b3", "6"]),
    ("min", &["b3"]),
    ("dim7", &["b3", "b5", "bb7"]),
    ("dim", &["b3", "b5"]),
    ("aug", &["3", "#5"]),
    ("13", &["3", "b7", "9", "13"]),
    ("7", &["3", "b7"]),
    ("6", &["3", "6"]),
];

/// Extensions and alterations that may follow the quality
const EXTENSIONS: [&str; 12] = [
    "b13", "#11", "sus4", "sus7", "sus9", "sus2", "add2", "b5", "#5", "b9", "#9", "9",
];

/// Alterations that replace the fifth
const FIFTH_ALTERATIONS: [&str; 4] = ["b5", "b13", "#5", "#11"];

/// Chord symbols known to parse, used for listings
pub const CHORD_TYPE_NAMES: [&str; 40] = [
    "maj", "min", "dim", "dim7", "aug", "6", "min6", "69", "7", "maj7", "min7", "min/maj7",
    "min7b5", "maj7#5", "maj7#11", "maj7#9", "7b5", "7#5", "7b9", "7#9", "7#11", "7b13",
    "7b9b13", "7b9#11", "7#9#11", "7#9b13", "7b9#9#11b13", "9", "maj9", "min9", "9#11", "9b13",
    "min11", "13", "13#11", "sus4", "sus7", "sus9", "sus4add2", "7sus4",
];

/// A chord quality: the intervals above the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordType {
    name: String,
    intervals: Vec<Interval>,
}

impl ChordType {
    /// Parse a chord symbol without its root, e.g. "7b9#11".
    ///
    /// A leading "-" means minor. The fifth is left out unless
    /// [`with_fifth`](Self::with_fifth) asks for it.
    pub fn parse(name: &str) -> TheoryResult<Self> {
        let unknown = || TheoryError::UnknownChordType(name.to_string());
        let normalised = match name.trim().strip_prefix('-') {
            Some(rest) => format!("min{}", rest),
            None => name.trim().to_string(),
        };

        let mut names: Vec<&str> = Vec::new();
        let mut rest = normalised.as_str();
        if let Some((prefix, quality)) = QUALITIES.iter().find(|(p, _)| rest.starts_with(p)) {
            names.extend_from_slice(quality);
            rest = &rest[prefix.len()..];
        } else if rest.is_empty() {
            names.push("3");
        }

        let mut extensions: Vec<&str> = Vec::new();
        while !rest.is_empty() {
            let token = EXTENSIONS
                .iter()
                .copied()
                .find(|t| rest.starts_with(t))
                .ok_or_else(unknown)?;
            extensions.push(token);
            rest = &rest[token.len()..];
        }

        for alteration in FIFTH_ALTERATIONS {
            if extensions.contains(&alteration) {
                names.push(alteration);
            }
        }

        let altered_ninths: Vec<&str> = ["b9", "#9"]
            .into_iter()
            .filter(|t| extensions.contains(t))
            .collect();
        let mut intervals = parse_all(&names)?;
        if !altered_ninths.is_empty() {
            intervals.extend(parse_all(&altered_ninths)?);
        } else if extensions.contains(&"9") || names.contains(&"9") {
            intervals.push(Interval::parse("9")?);
            if !intervals.iter().any(|i| i.degree() == 3) {
                intervals.push(Interval::parse("3")?);
            }
            if !intervals.iter().any(|i| i.degree() == 6 || i.degree() == 7) {
                intervals.push(Interval::parse("b7")?);
            }
        }

        let suspended: &[&str] = if extensions.contains(&"sus4") {
            &["4"]
        } else if extensions.contains(&"sus7") {
            &["4", "b7"]
        } else if extensions.contains(&"sus9") {
            &["4", "b7", "9"]
        } else if extensions.contains(&"sus2") {
            &["2"]
        } else {
            &[]
        };
        if !suspended.is_empty() {
            intervals.retain(|i| i.degree() != 3);
            intervals.extend(parse_all(suspended)?);
        }
        if extensions.contains(&"add2") {
            intervals.push(Interval::parse("2")?);
        }

        if intervals.is_empty() {
            return Err(unknown());
        }
        intervals.sort();
        intervals.dedup();

        Ok(Self {
            name: name.trim().to_string(),
            intervals,
        })
    }

    /// Every chord symbol in [`CHORD_TYPE_NAMES`]
    pub fn all() -> TheoryResult<Vec<ChordType>> {
        CHORD_TYPE_NAMES.iter().map(|name| Self::parse(name)).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Add a perfect fifth unless the symbol alters or replaces it
    pub fn with_fifth(&self) -> Self {
        let replaced = self.intervals.iter().any(|i| {
            let name = i.name();
            i.degree() == 5 || FIFTH_ALTERATIONS.contains(&name.as_str())
        });
        let mut chord = self.clone();
        if !replaced {
            if let Ok(fifth) = Interval::parse("5") {
                chord.intervals.push(fifth);
                chord.intervals.sort();
            }
        }
        chord
    }

    /// Root followed by the chord tones built on it
    pub fn notes(&self, root: &Note) -> TheoryResult<NoteSet> {
        let mut notes = vec![*root];
        for interval in &self.intervals {
            notes.push(interval.from(root)?);
        }
        Ok(NoteSet::new(notes))
    }

    /// Intervals joined by spaces, e.g. "3 b7 b9"
    pub fn interval_names(&self) -> String {
        self.intervals
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn parse_all(names: &[&str]) -> TheoryResult<Vec<Interval>> {
    names.iter().map(|name| Interval::parse(name)).collect()
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(name: &str) -> String {
        ChordType::parse(name).unwrap().interval_names()
    }

    #[test]
    fn test_basic_qualities() {
        assert_eq!(intervals("maj7"), "3 7");
        assert_eq!(intervals("min7"), "b3 b7");
        assert_eq!(intervals("-7"), "b3 b7");
        assert_eq!(intervals("min/maj7"), "b3 7");
        assert_eq!(intervals("7"), "3 b7");
        assert_eq!(intervals("min11"), "b3 b7 9 11");
        assert_eq!(intervals("13"), "3 b7 9 13");
        assert_eq!(intervals("dim7"), "b3 b5 bb7");
        assert_eq!(intervals(""), "3");
    }

    #[test]
    fn test_alterations() {
        assert_eq!(intervals("7b9#11"), "3 b7 b9 #11");
        assert_eq!(intervals("7b9"), "3 b7 b9");
        assert_eq!(intervals("7b9#9#11b13"), "3 b7 b9 #9 #11 b13");
        assert_eq!(intervals("min7b5"), "b3 b5 b7");
        assert_eq!(intervals("maj7#5"), "3 #5 7");
    }

    #[test]
    fn test_ninths_imply_third_and_seventh() {
        assert_eq!(intervals("9"), "3 b7 9");
        assert_eq!(intervals("69"), "3 6 9");
        assert_eq!(intervals("maj9"), "3 7 9");
    }

    #[test]
    fn test_suspensions() {
        assert_eq!(intervals("sus4"), "4");
        assert_eq!(intervals("sus7"), "4 b7");
        assert_eq!(intervals("sus4add2"), "2 4");
        assert_eq!(intervals("7sus4"), "4 b7");
    }

    #[test]
    fn test_with_fifth() {
        let maj7 = ChordType::parse("maj7").unwrap().with_fifth();
        assert_eq!(maj7.interval_names(), "3 5 7");
        let altered = ChordType::parse("7b9#11").unwrap().with_fifth();
        assert_eq!(altered.interval_names(), "3 b7 b9 #11");
    }

    #[test]
    fn test_unknown() {
        assert!(matches!(
            ChordType::parse("7zz"),
            Err(TheoryError::UnknownChordType(_))
        ));
        assert!(ChordType::parse("blah").is_err());
    }

    #[test]
    fn test_all_names_parse() {
        let all = ChordType::all().unwrap();
        assert!(all.len() >= 30);
    }

    #[test]
    fn test_notes() {
        let c = Note::parse("C").unwrap();
        let notes = ChordType::parse("7b9").unwrap().notes(&c).unwrap();
        assert_eq!(notes.scientific_names(), "C4 E4 Bb4 Db5");
        let db = Note::parse("Db").unwrap();
        let notes = ChordType::parse("7#11").unwrap().notes(&db).unwrap();
        assert_eq!(notes.scientific_names(), "Db4 F4 Cb4 G5");
    }
}
