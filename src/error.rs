// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the music theory core.

use thiserror::Error;

/// Errors raised while building notes, intervals, scales and modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("Invalid note letter '{0}'")]
    InvalidLetter(String),

    /// No accidental in the range bb..x spells `pitch` with `letter`.
    #[error("Letter {letter} cannot spell pitch {pitch} (natural {natural}, delta {delta})")]
    LetterPitchMismatch {
        letter: char,
        pitch: i32,
        natural: i32,
        delta: i32,
    },

    #[error("Unrecognised accidental '{0}'")]
    UnrecognisedAccidental(String),

    #[error("Invalid note name '{0}'")]
    InvalidNoteName(String),

    #[error("Invalid interval '{0}'")]
    InvalidInterval(String),

    #[error("'{0}' is not a recognised chord type")]
    UnknownChordType(String),

    #[error("Unknown scale family '{0}'")]
    UnknownScaleFamily(String),

    #[error("Invalid scale type '{name}': {reason}")]
    InvalidScaleType { name: String, reason: String },

    #[error("Degree {degree} is out of range for {scale_type}")]
    InvalidDegree { scale_type: String, degree: usize },

    /// Internal defect: no enharmonic candidate survived spelling.
    #[error("No spelling of {scale_type} degree {degree} satisfies {note}")]
    UnsatisfiableSpelling {
        scale_type: String,
        note: String,
        degree: usize,
    },
}

/// Result alias for the theory core.
pub type TheoryResult<T> = Result<T, TheoryError>;
