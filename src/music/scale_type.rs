// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale types and the registry that holds them.
//!
//! A scale type is a named cycle of semitone increments plus the rule
//! for which letter each degree is spelled with. Types are built once,
//! stored in a [`ScaleRegistry`] and shared as `Arc<ScaleType>`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::note::Note;
use crate::error::{TheoryError, TheoryResult};

/// Broad grouping used to select parts of the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    Diatonic,
    Pentatonic,
    Symmetrical,
}

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 3] = [
        ScaleFamily::Diatonic,
        ScaleFamily::Pentatonic,
        ScaleFamily::Symmetrical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::Diatonic => "diatonic",
            ScaleFamily::Pentatonic => "pentatonic",
            ScaleFamily::Symmetrical => "symmetrical",
        }
    }
}

impl FromStr for ScaleFamily {
    type Err = TheoryError;

    /// Parse a family name ("diatonic", "pentatonic", "symmetrical")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diatonic" => Ok(ScaleFamily::Diatonic),
            "pentatonic" => Ok(ScaleFamily::Pentatonic),
            "symmetrical" | "symmetric" => Ok(ScaleFamily::Symmetrical),
            _ => Err(TheoryError::UnknownScaleFamily(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-kind spelling behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    /// One letter per degree
    Diatonic,
    /// Letters taken from an explicit degree table
    Pentatonic,
    /// One letter per degree, notes simplified; every mode shares the type name
    WholeTone,
    /// Letter repeated at degrees 6 and 7, notes simplified
    Diminished,
    /// Letter skipped after degree 3
    Augmented,
    /// Letters taken from an explicit degree table
    Custom,
}

impl ScaleKind {
    /// Built-in letter steps for a cycle of `len` degrees, if the kind has them
    fn letter_pattern(self, len: usize) -> Option<Vec<i32>> {
        match self {
            ScaleKind::Diatonic | ScaleKind::WholeTone => Some((0..len as i32).collect()),
            ScaleKind::Diminished => Some(vec![0, 1, 2, 3, 4, 5, 5, 6]),
            ScaleKind::Augmented => Some(vec![0, 1, 2, 4, 5, 6]),
            ScaleKind::Pentatonic | ScaleKind::Custom => None,
        }
    }

    fn simplifies_notes(self) -> bool {
        matches!(self, ScaleKind::WholeTone | ScaleKind::Diminished)
    }
}

/// Declarative description of a scale type, as found in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTypeDefinition {
    pub name: String,
    /// Semitone steps between consecutive degrees, summing to 12
    pub increments: Vec<i32>,
    #[serde(default)]
    pub kind: Option<ScaleKind>,
    #[serde(default)]
    pub family: Option<ScaleFamily>,
    /// 1-based letter degree for each scale degree (e.g. 1 2 3 5 6)
    #[serde(default)]
    pub letter_degrees: Option<Vec<i32>>,
    /// Curated mode names keyed by degree
    #[serde(default)]
    pub mode_names: BTreeMap<usize, String>,
}

impl ScaleTypeDefinition {
    pub fn new(name: &str, increments: &[i32], kind: ScaleKind, family: ScaleFamily) -> Self {
        Self {
            name: name.to_string(),
            increments: increments.to_vec(),
            kind: Some(kind),
            family: Some(family),
            letter_degrees: None,
            mode_names: BTreeMap::new(),
        }
    }

    pub fn with_letter_degrees(mut self, degrees: &[i32]) -> Self {
        self.letter_degrees = Some(degrees.to_vec());
        self
    }

    /// Degrees left out keep no curated name
    pub fn with_mode_names(mut self, names: &[(usize, &str)]) -> Self {
        self.mode_names = names
            .iter()
            .map(|&(degree, name)| (degree, name.to_string()))
            .collect();
        self
    }

    fn invalid(&self, reason: &str) -> TheoryError {
        TheoryError::InvalidScaleType {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }

    /// Check the definition and build the scale type at registry `index`
    pub fn build(&self, index: usize) -> TheoryResult<ScaleType> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name is empty"));
        }
        if self.increments.is_empty() {
            return Err(self.invalid("no increments"));
        }
        if self.increments.iter().any(|&i| i <= 0) {
            return Err(self.invalid("increments must be positive"));
        }
        if self.increments.iter().sum::<i32>() != 12 {
            return Err(self.invalid("increments must sum to 12"));
        }

        let len = self.increments.len();
        let kind = self.kind.unwrap_or(if len == 7 && self.letter_degrees.is_none() {
            ScaleKind::Diatonic
        } else {
            ScaleKind::Custom
        });

        let letter_steps = match &self.letter_degrees {
            Some(degrees) => degrees.iter().map(|d| d - 1).collect::<Vec<_>>(),
            None => kind
                .letter_pattern(len)
                .ok_or_else(|| self.invalid("letter_degrees are required"))?,
        };
        if letter_steps.len() != len {
            return Err(self.invalid("need one letter degree per increment"));
        }
        if letter_steps.first() != Some(&0)
            || letter_steps.windows(2).any(|w| w[1] < w[0])
            || letter_steps.iter().any(|&s| s > 6)
        {
            return Err(self.invalid("letter degrees must rise from 1 to at most 7"));
        }

        let (num_modes, transpositions) = cycle_of(&self.increments);
        let family = self.family.unwrap_or(match kind {
            ScaleKind::Diatonic => ScaleFamily::Diatonic,
            ScaleKind::Pentatonic => ScaleFamily::Pentatonic,
            _ if transpositions < 12 => ScaleFamily::Symmetrical,
            _ => ScaleFamily::Diatonic,
        });

        Ok(ScaleType {
            name: self.name.clone(),
            increments: self.increments.clone(),
            kind,
            family,
            letter_steps,
            num_modes,
            transpositions,
            mode_names: self.mode_names.clone(),
            index,
        })
    }
}

/// Smallest repeating cycle of `increments`: (length, semitones spanned)
fn cycle_of(increments: &[i32]) -> (usize, i32) {
    let n = increments.len();
    for period in 1..=n {
        if n % period == 0 && (0..n).all(|i| increments[i] == increments[i % period]) {
            return (period, increments[..period].iter().sum());
        }
    }
    (n, 12)
}

/// A named interval pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleType {
    name: String,
    increments: Vec<i32>,
    kind: ScaleKind,
    family: ScaleFamily,
    letter_steps: Vec<i32>,
    num_modes: usize,
    transpositions: i32,
    mode_names: BTreeMap<usize, String>,
    index: usize,
}

impl ScaleType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn increments(&self) -> &[i32] {
        &self.increments
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn family(&self) -> ScaleFamily {
        self.family
    }

    /// Number of distinct modes (length of the repeating cycle)
    pub fn num_modes(&self) -> usize {
        self.num_modes
    }

    /// Semitones before the pitch-class set repeats under transposition
    pub fn transpositions(&self) -> i32 {
        self.transpositions
    }

    /// Position in the registry that built this type
    pub fn index(&self) -> usize {
        self.index
    }

    /// Notes per octave
    pub fn len(&self) -> usize {
        self.increments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.increments.is_empty()
    }

    pub fn is_symmetrical(&self) -> bool {
        self.transpositions < 12
    }

    fn check_degree(&self, degree: usize) -> TheoryResult<()> {
        if degree == 0 {
            return Err(TheoryError::InvalidDegree {
                scale_type: self.name.clone(),
                degree,
            });
        }
        Ok(())
    }

    /// Semitones from the key note up to `degree`; degrees past the
    /// octave keep cycling (9, 11, 13 ...)
    pub fn offset_from_key(&self, degree: usize) -> i32 {
        let n = self.increments.len();
        (0..degree.saturating_sub(1))
            .map(|i| self.increments[i % n])
            .sum()
    }

    /// Letters from the key letter up to `degree`
    pub fn letter_shift(&self, degree: usize) -> i32 {
        let n = self.letter_steps.len();
        let d = degree.saturating_sub(1);
        self.letter_steps[d % n] + 7 * (d / n) as i32
    }

    /// The note at `degree` of this scale built on `key`
    pub fn note(&self, key: &Note, degree: usize) -> TheoryResult<Note> {
        self.check_degree(degree)?;
        let letter = key.letter().shift(self.letter_shift(degree));
        let note = Note::by_letter_and_pitch(letter, key.pitch() + self.offset_from_key(degree))?;
        if self.kind.simplifies_notes() {
            Ok(note.simplify())
        } else {
            Ok(note)
        }
    }

    /// The key whose `degree` is `note`
    pub fn key(&self, note: &Note, degree: usize) -> TheoryResult<Note> {
        self.check_degree(degree)?;
        let letter = note.letter().shift(-self.letter_shift(degree));
        Note::by_letter_and_pitch(letter, note.pitch() - self.offset_from_key(degree))
    }

    /// First degree of the scale on `key` whose pitch class matches `note`
    pub fn degree_of(&self, note: &Note, key: &Note) -> Option<usize> {
        (1..=self.len()).find(|&d| {
            (key.pitch() + self.offset_from_key(d) - note.pitch()).rem_euclid(12) == 0
        })
    }

    /// Key pitches that yield the same pitch-class set as `key`
    pub fn equivalent_key_pitches(&self, key: &Note) -> Vec<i32> {
        (0..12 / self.transpositions)
            .map(|i| key.pitch() + i * self.transpositions)
            .collect()
    }

    /// Every simple spelling of every equivalent key pitch
    pub fn equivalent_keys(&self, key: &Note) -> Vec<Note> {
        self.equivalent_key_pitches(key)
            .into_iter()
            .flat_map(Note::by_pitch)
            .filter(|n| n.is_simple())
            .collect()
    }

    /// Curated name of the mode starting on `degree`, if there is one
    pub fn mode_name(&self, degree: usize) -> Option<&str> {
        if self.kind == ScaleKind::WholeTone {
            return Some(&self.name);
        }
        self.mode_names.get(&degree).map(String::as_str)
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered, append-only collection of scale types
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    scale_types: Vec<Arc<ScaleType>>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in diatonic, pentatonic and symmetrical types
    pub fn standard() -> TheoryResult<Self> {
        let mut registry = Self::new();
        for def in standard_definitions() {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Validate and append a scale type
    pub fn register(&mut self, def: ScaleTypeDefinition) -> TheoryResult<Arc<ScaleType>> {
        if self.get(&def.name).is_some() {
            return Err(TheoryError::InvalidScaleType {
                name: def.name.clone(),
                reason: "already registered".to_string(),
            });
        }
        let scale_type = Arc::new(def.build(self.scale_types.len())?);
        tracing::debug!(
            name = %scale_type.name(),
            modes = scale_type.num_modes(),
            transpositions = scale_type.transpositions(),
            "registered scale type"
        );
        self.scale_types.push(Arc::clone(&scale_type));
        Ok(scale_type)
    }

    pub fn all(&self) -> &[Arc<ScaleType>] {
        &self.scale_types
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ScaleType>> {
        self.scale_types.iter().find(|st| st.name() == name)
    }

    /// Scale types of the given families, in registry order
    pub fn in_families(&self, families: &[ScaleFamily]) -> Vec<Arc<ScaleType>> {
        self.scale_types
            .iter()
            .filter(|st| families.contains(&st.family()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scale_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scale_types.is_empty()
    }
}

fn standard_definitions() -> Vec<ScaleTypeDefinition> {
    use ScaleFamily as F;
    use ScaleKind as K;

    vec![
        ScaleTypeDefinition::new("maj", &[2, 2, 1, 2, 2, 2, 1], K::Diatonic, F::Diatonic)
            .with_mode_names(&[
                (1, "ionian"),
                (2, "dorian"),
                (3, "phrygian"),
                (4, "lydian"),
                (5, "mixo"),
                (6, "aeolian"),
                (7, "locrian"),
            ]),
        ScaleTypeDefinition::new("mel min", &[2, 1, 2, 2, 2, 2, 1], K::Diatonic, F::Diatonic)
            .with_mode_names(&[
                (2, "dorian b2"),
                (3, "lydian augmented"),
                (4, "lydian dominant"),
                (5, "dominant b13"),
                (6, "locrian natural 2"),
                (7, "altered"),
            ]),
        ScaleTypeDefinition::new("harm min", &[2, 1, 2, 2, 1, 3, 1], K::Diatonic, F::Diatonic)
            .with_mode_names(&[
                (2, "locrian natural 6"),
                (3, "major #5"),
                (4, "dorian #4"),
                (5, "dominant b9 b13"),
                (6, "lydian #2"),
            ]),
        ScaleTypeDefinition::new("harm maj", &[2, 2, 1, 2, 1, 3, 1], K::Diatonic, F::Diatonic)
            .with_mode_names(&[
                (4, "melodic min #4"),
                (5, "dominant b9"),
                (6, "lydian #2 #5"),
            ]),
        ScaleTypeDefinition::new("major pentatonic", &[2, 2, 3, 2, 3], K::Pentatonic, F::Pentatonic)
            .with_letter_degrees(&[1, 2, 3, 5, 6])
            .with_mode_names(&[
                (2, "suspended pentatonic"),
                (3, "blues minor pentatonic"),
                (4, "blues major"),
                (5, "minor pentatonic"),
            ]),
        ScaleTypeDefinition::new("major b2 pentatonic", &[1, 3, 3, 2, 3], K::Pentatonic, F::Pentatonic)
            .with_letter_degrees(&[1, 2, 3, 5, 6]),
        ScaleTypeDefinition::new("major b6 pentatonic", &[2, 2, 3, 1, 4], K::Pentatonic, F::Pentatonic)
            .with_letter_degrees(&[1, 2, 3, 5, 6]),
        ScaleTypeDefinition::new("minor 6 pentatonic", &[3, 2, 2, 2, 3], K::Pentatonic, F::Pentatonic)
            .with_letter_degrees(&[1, 3, 4, 5, 6]),
        ScaleTypeDefinition::new("whole tone pentatonic", &[2, 2, 2, 4, 2], K::Pentatonic, F::Pentatonic)
            .with_letter_degrees(&[1, 2, 3, 4, 7]),
        ScaleTypeDefinition::new("whole tone", &[2, 2, 2, 2, 2, 2], K::WholeTone, F::Symmetrical),
        ScaleTypeDefinition::new("diminished", &[2, 1, 2, 1, 2, 1, 2, 1], K::Diminished, F::Symmetrical)
            .with_mode_names(&[(2, "auxiliary diminished")]),
        ScaleTypeDefinition::new("augmented", &[3, 1, 3, 1, 3, 1], K::Augmented, F::Symmetrical),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(name: &str) -> Note {
        Note::parse(name).unwrap()
    }

    fn names(notes: &[Note]) -> String {
        notes.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
    }

    fn scale(st: &ScaleType, key: &str) -> String {
        let key = n(key);
        let notes: Vec<Note> = (1..=st.len()).map(|d| st.note(&key, d).unwrap()).collect();
        names(&notes)
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = ScaleRegistry::standard().unwrap();
        let names: Vec<&str> = registry.all().iter().map(|st| st.name()).collect();
        assert_eq!(
            names,
            vec![
                "maj",
                "mel min",
                "harm min",
                "harm maj",
                "major pentatonic",
                "major b2 pentatonic",
                "major b6 pentatonic",
                "minor 6 pentatonic",
                "whole tone pentatonic",
                "whole tone",
                "diminished",
                "augmented",
            ]
        );
        for (i, st) in registry.all().iter().enumerate() {
            assert_eq!(st.index(), i);
        }
    }

    #[test]
    fn test_cycles() {
        let registry = ScaleRegistry::standard().unwrap();
        let check = |name: &str, modes: usize, transpositions: i32| {
            let st = registry.get(name).unwrap();
            assert_eq!(st.num_modes(), modes, "{}", name);
            assert_eq!(st.transpositions(), transpositions, "{}", name);
        };
        check("maj", 7, 12);
        check("harm maj", 7, 12);
        check("major pentatonic", 5, 12);
        check("whole tone", 1, 2);
        check("diminished", 2, 3);
        check("augmented", 2, 4);
    }

    #[test]
    fn test_family_filter() {
        let registry = ScaleRegistry::standard().unwrap();
        assert_eq!(registry.in_families(&[ScaleFamily::Diatonic]).len(), 4);
        assert_eq!(registry.in_families(&[ScaleFamily::Pentatonic]).len(), 5);
        assert_eq!(
            registry
                .in_families(&[ScaleFamily::Diatonic, ScaleFamily::Symmetrical])
                .len(),
            7
        );
    }

    #[test]
    fn test_offsets_and_letter_shifts() {
        let registry = ScaleRegistry::standard().unwrap();
        let maj = registry.get("maj").unwrap();
        assert_eq!(maj.offset_from_key(1), 0);
        assert_eq!(maj.offset_from_key(5), 7);
        assert_eq!(maj.offset_from_key(9), 14);
        assert_eq!(maj.offset_from_key(13), 21);
        assert_eq!(maj.letter_shift(9), 8);

        let dim = registry.get("diminished").unwrap();
        assert_eq!(dim.letter_shift(6), 5);
        assert_eq!(dim.letter_shift(7), 5);
        assert_eq!(dim.letter_shift(9), 7);

        let aug = registry.get("augmented").unwrap();
        assert_eq!(aug.letter_shift(4), 4);
    }

    #[test]
    fn test_scale_notes() {
        let registry = ScaleRegistry::standard().unwrap();
        assert_eq!(scale(registry.get("maj").unwrap(), "C"), "C D E F G A B");
        assert_eq!(scale(registry.get("mel min").unwrap(), "Db"), "Db Eb Fb Gb Ab Bb C");
        assert_eq!(scale(registry.get("harm min").unwrap(), "A"), "A B C D E F G#");
        assert_eq!(scale(registry.get("diminished").unwrap(), "C"), "C D Eb F Gb Ab A B");
        assert_eq!(scale(registry.get("whole tone").unwrap(), "C"), "C D E F# G# A#");
        assert_eq!(scale(registry.get("augmented").unwrap(), "C"), "C D# E G Ab B");
        assert_eq!(scale(registry.get("major pentatonic").unwrap(), "C"), "C D E G A");
        assert_eq!(scale(registry.get("minor 6 pentatonic").unwrap(), "C"), "C Eb F G A");
        assert_eq!(scale(registry.get("whole tone pentatonic").unwrap(), "C"), "C D E F# Bb");
    }

    #[test]
    fn test_note_and_key_invert() {
        let registry = ScaleRegistry::standard().unwrap();
        let maj = registry.get("maj").unwrap();
        let note = maj.note(&n("F"), 5).unwrap();
        assert_eq!(note.scientific_name(), "C5");
        assert_eq!(maj.key(&note, 5).unwrap(), n("F"));
        assert_eq!(maj.key(&n("C"), 2).unwrap().name(), "Bb");
        assert!(matches!(
            maj.note(&n("C"), 0),
            Err(TheoryError::InvalidDegree { degree: 0, .. })
        ));
    }

    #[test]
    fn test_degree_of() {
        let registry = ScaleRegistry::standard().unwrap();
        let dim = registry.get("diminished").unwrap();
        assert_eq!(dim.degree_of(&n("C"), &n("G")), Some(4));
        assert_eq!(dim.degree_of(&n("C#"), &n("C")), None);
    }

    #[test]
    fn test_equivalent_keys() {
        let registry = ScaleRegistry::standard().unwrap();
        let dim = registry.get("diminished").unwrap();
        assert_eq!(dim.equivalent_key_pitches(&n("C")), vec![60, 63, 66, 69]);
        assert_eq!(names(&dim.equivalent_keys(&n("C"))), "C D# Eb F# Gb A");

        let wt = registry.get("whole tone").unwrap();
        assert_eq!(wt.equivalent_key_pitches(&n("C")).len(), 6);
        assert_eq!(names(&wt.equivalent_keys(&n("C"))), "C D E F# Gb G# Ab A# Bb");

        let maj = registry.get("maj").unwrap();
        assert_eq!(maj.equivalent_key_pitches(&n("C")), vec![60]);
    }

    #[test]
    fn test_mode_names() {
        let registry = ScaleRegistry::standard().unwrap();
        assert_eq!(registry.get("maj").unwrap().mode_name(5), Some("mixo"));
        assert_eq!(registry.get("mel min").unwrap().mode_name(1), None);
        assert_eq!(registry.get("mel min").unwrap().mode_name(7), Some("altered"));
        assert_eq!(registry.get("whole tone").unwrap().mode_name(1), Some("whole tone"));
        assert_eq!(
            registry.get("diminished").unwrap().mode_name(2),
            Some("auxiliary diminished")
        );
        assert_eq!(registry.get("augmented").unwrap().mode_name(2), None);
    }

    #[test]
    fn test_register_custom() {
        let mut registry = ScaleRegistry::standard().unwrap();
        let def = ScaleTypeDefinition {
            name: "hungarian minor".to_string(),
            increments: vec![2, 1, 3, 1, 1, 3, 1],
            kind: None,
            family: None,
            letter_degrees: None,
            mode_names: BTreeMap::new(),
        };
        let st = registry.register(def.clone()).unwrap();
        assert_eq!(st.kind(), ScaleKind::Diatonic);
        assert_eq!(st.family(), ScaleFamily::Diatonic);
        assert_eq!(st.index(), 12);
        assert_eq!(scale(&st, "C"), "C D Eb F# G Ab B");

        assert!(matches!(
            registry.register(def),
            Err(TheoryError::InvalidScaleType { .. })
        ));
    }

    #[test]
    fn test_register_rejects_bad_definitions() {
        let mut registry = ScaleRegistry::new();
        let bad_sum = ScaleTypeDefinition::new("bad", &[2, 2, 2], ScaleKind::Custom, ScaleFamily::Diatonic)
            .with_letter_degrees(&[1, 2, 3]);
        assert!(registry.register(bad_sum).is_err());

        let no_letters = ScaleTypeDefinition {
            name: "hexatonic".to_string(),
            increments: vec![2, 2, 1, 2, 2, 3],
            kind: None,
            family: None,
            letter_degrees: None,
            mode_names: BTreeMap::new(),
        };
        assert!(registry.register(no_letters).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_family_names_parse() {
        assert_eq!("diatonic".parse::<ScaleFamily>(), Ok(ScaleFamily::Diatonic));
        assert_eq!(" Pentatonic ".parse::<ScaleFamily>(), Ok(ScaleFamily::Pentatonic));
        assert_eq!("symmetric".parse::<ScaleFamily>(), Ok(ScaleFamily::Symmetrical));
        for family in ScaleFamily::ALL {
            assert_eq!(family.name().parse::<ScaleFamily>(), Ok(family));
        }
        let err = "chromatic".parse::<ScaleFamily>().unwrap_err();
        assert_eq!(err, TheoryError::UnknownScaleFamily("chromatic".to_string()));
        assert_eq!(err.to_string(), "Unknown scale family 'chromatic'");
    }

    #[test]
    fn test_standard_definitions_all_register() {
        let definitions = standard_definitions();
        let registry = ScaleRegistry::standard().unwrap();
        assert_eq!(registry.len(), definitions.len());

        let mut with_duplicate = ScaleRegistry::standard().unwrap();
        let err = with_duplicate.register(definitions[0].clone()).unwrap_err();
        assert!(matches!(err, TheoryError::InvalidScaleType { .. }));
    }
}
