// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and mode identification.
//!
//! Models Western scales and their modes with correct enharmonic spelling,
//! builds a catalogue of every mode starting on a note, and searches for the
//! smallest chords that single out each mode containing a given chord.

pub mod config;
pub mod error;
pub mod finder;
pub mod music;
pub mod render;

pub use config::{ChordSpec, FinderConfig, ResolvedChord};
pub use error::{TheoryError, TheoryResult};
pub use finder::{Catalogue, CatalogueBuilder, FinderOptions, FinderReport, ScaleFinder};
pub use music::{ChordType, Mode, ModeInKey, Note, NoteSet, ScaleRegistry, SpellingResolver};
