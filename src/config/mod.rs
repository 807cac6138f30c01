// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for batch scale-finding runs.
//!
//! A config file names the key, the chords to analyse and the search
//! options, and may add custom scale types to the built-in registry. Files
//! are YAML (`.yaml`/`.yml`) or TOML (`.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::finder::{FinderOptions, DEFAULT_FAMILIES, DEFAULT_MAX_CHORD_SIZE};
use crate::music::{ChordType, Note, NoteSet, ScaleFamily, ScaleRegistry, ScaleTypeDefinition};

/// Root configuration for a batch run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinderConfig {
    /// Key the chords are built on and the catalogue starts from
    #[serde(default = "default_key")]
    pub key: String,
    /// Chords to analyse, in order
    #[serde(default)]
    pub chords: Vec<ChordSpec>,
    /// Report scale notes in their plainest spelling
    #[serde(default)]
    pub simplify: bool,
    /// Largest chord (fixed notes plus additions) to try
    #[serde(default = "default_max_chord_size")]
    pub max_chord_size: usize,
    /// Scale families in the catalogue
    #[serde(default = "default_families")]
    pub families: Vec<ScaleFamily>,
    /// 0 warn, 1 info, 2 debug, 3 trace
    #[serde(default)]
    pub verbosity: u8,
    /// Append the uniqueness and notes-needed summaries
    #[serde(default)]
    pub report_summaries: bool,
    /// Where to write a LilyPond document per chord, if anywhere
    #[serde(default)]
    pub lilypond_output: Option<PathBuf>,
    /// Extra scale types registered after the built-in ones
    #[serde(default)]
    pub scale_types: Vec<ScaleTypeDefinition>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_max_chord_size() -> usize {
    DEFAULT_MAX_CHORD_SIZE
}
fn default_families() -> Vec<ScaleFamily> {
    DEFAULT_FAMILIES.to_vec()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            chords: Vec::new(),
            simplify: false,
            max_chord_size: default_max_chord_size(),
            families: default_families(),
            verbosity: 0,
            report_summaries: false,
            lilypond_output: None,
            scale_types: Vec::new(),
        }
    }
}

impl FinderConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            Some("yaml") | Some("yml") | None => Self::from_yaml(&contents),
            Some(other) => bail!("Unsupported config format '.{}': {:?}", other, path),
        }
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    pub fn key_note(&self) -> Result<Note> {
        Note::parse(&self.key).with_context(|| format!("Invalid key '{}'", self.key))
    }

    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions {
            simplify: self.simplify,
            max_chord_size: self.max_chord_size,
        }
    }

    /// The standard registry plus this config's scale types
    pub fn build_registry(&self) -> Result<ScaleRegistry> {
        let mut registry = ScaleRegistry::standard()?;
        for def in &self.scale_types {
            registry
                .register(def.clone())
                .with_context(|| format!("Failed to register scale type '{}'", def.name))?;
        }
        Ok(registry)
    }

    /// Every problem found, in human-readable form; empty when valid
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let key = Note::parse(&self.key);
        if let Err(err) = &key {
            problems.push(format!("key: {}", err));
        }
        if self.max_chord_size == 0 || self.max_chord_size > 12 {
            problems.push(format!(
                "max_chord_size: {} is outside 1..=12",
                self.max_chord_size
            ));
        }
        if self.families.is_empty() {
            problems.push("families: at least one scale family is required".to_string());
        }

        match ScaleRegistry::standard() {
            Ok(mut registry) => {
                for def in &self.scale_types {
                    if let Err(err) = registry.register(def.clone()) {
                        problems.push(format!("scale_types: {}", err));
                    }
                }
            }
            Err(err) => problems.push(format!("built-in scale types: {}", err)),
        }

        if let Ok(key) = key {
            for (i, chord) in self.chords.iter().enumerate() {
                if let Err(err) = chord.resolve(&key) {
                    problems.push(format!("chords[{}]: {:#}", i, err));
                }
            }
        }
        problems
    }
}

/// One chord to analyse: a chord type on the key, or explicit notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChordSpec {
    /// Chord type name, e.g. "7b9" or "min11"
    #[serde(default)]
    pub chord_type: Option<String>,
    /// Explicit notes, e.g. "E G Bb"
    #[serde(default)]
    pub notes: Option<String>,
    /// Report heading; defaults to the key plus the chord type
    #[serde(default)]
    pub description: Option<String>,
    /// Add the perfect fifth to a chord type
    #[serde(default)]
    pub with_fifth: bool,
}

/// A chord ready for the finder
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChord {
    pub description: String,
    pub notes: NoteSet,
}

impl ChordSpec {
    pub fn from_type(chord_type: &str) -> Self {
        Self {
            chord_type: Some(chord_type.to_string()),
            ..Default::default()
        }
    }

    pub fn from_notes(notes: &str) -> Self {
        Self {
            notes: Some(notes.to_string()),
            ..Default::default()
        }
    }

    /// Build the fixed notes and the report heading.
    ///
    /// Explicit notes win over a chord type. A description containing '/'
    /// (a slash chord) is used as given; otherwise the key is prefixed.
    pub fn resolve(&self, key: &Note) -> Result<ResolvedChord> {
        let (label, notes) = match (&self.notes, &self.chord_type) {
            (Some(names), _) => {
                let notes = NoteSet::parse(names)
                    .with_context(|| format!("Invalid notes '{}'", names))?;
                let label = self.description.clone().unwrap_or_else(|| names.clone());
                (label, notes)
            }
            (None, Some(name)) => {
                let mut chord_type = ChordType::parse(name)
                    .with_context(|| format!("Invalid chord type '{}'", name))?;
                if self.with_fifth {
                    chord_type = chord_type.with_fifth();
                }
                let notes = chord_type
                    .notes(key)
                    .with_context(|| format!("Cannot build {} on {}", name, key))?;
                let label = self.description.clone().unwrap_or_else(|| name.clone());
                (label, notes)
            }
            (None, None) => bail!("a chord needs either notes or a chord_type"),
        };
        if notes.is_empty() {
            bail!("chord has no notes");
        }

        let description = if label.contains('/') {
            label
        } else {
            format!("{}{}", key, label)
        };
        Ok(ResolvedChord { description, notes })
    }
}
