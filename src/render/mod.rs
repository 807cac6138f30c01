// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notation output

pub mod lilypond;

pub use lilypond::{chord_to_ly_abs, note_to_ly, note_to_ly_abs, scale_to_ly, MarkupWriter};
