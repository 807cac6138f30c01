// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory model.
//!
//! Spelled notes, note collections, intervals and chord symbols, scale
//! types and their modes, and the enharmonic spelling of symmetric scales.

pub mod accidental;
pub mod chord;
pub mod interval;
pub mod mode;
pub mod note;
pub mod note_set;
pub mod scale_type;
pub mod spelling;

pub use accidental::Accidental;
pub use chord::{ChordType, CHORD_TYPE_NAMES};
pub use interval::Interval;
pub use mode::{Mode, ModeInKey};
pub use note::{Letter, Note, Pitch};
pub use note_set::{NoteSet, PitchClassSet};
pub use scale_type::{ScaleFamily, ScaleKind, ScaleRegistry, ScaleType, ScaleTypeDefinition};
pub use spelling::{Resolution, SpellingResolver};
