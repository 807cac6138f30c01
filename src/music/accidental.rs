// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Accidentals from double flat to double sharp.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// A chromatic alteration of a natural letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// All accidentals from flattest to sharpest
    pub const ALL: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Semitone alteration (-2..=2)
    pub fn delta(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for a semitone alteration, if it is in range
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Text label used in note names ("bb", "b", "", "#", "x")
    pub fn label(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// LilyPond (Dutch) note name suffix
    pub fn ly_suffix(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "ff",
            Accidental::Flat => "f",
            Accidental::Natural => "",
            Accidental::Sharp => "s",
            Accidental::DoubleSharp => "ss",
        }
    }

    /// LilyPond markup glyph for use inside text labels
    pub fn ly_markup(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => r"\raise #0.5 \fontsize #-3 \doubleflat",
            Accidental::Flat => r"\raise #0.5 \fontsize #-3 \flat",
            Accidental::Natural => r"\raise #0.5 \fontsize #-3 \natural",
            Accidental::Sharp => r"\raise #0.5 \fontsize #-3 \sharp",
            Accidental::DoubleSharp => r"\raise #0.5 \fontsize #-3 \doublesharp",
        }
    }

    /// Number of accidental signs (0, 1 or 2)
    pub fn magnitude(self) -> u32 {
        self.delta().unsigned_abs()
    }

    pub fn is_natural(self) -> bool {
        self == Accidental::Natural
    }
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}

impl FromStr for Accidental {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bb" => Ok(Accidental::DoubleFlat),
            "b" => Ok(Accidental::Flat),
            "" => Ok(Accidental::Natural),
            "#" => Ok(Accidental::Sharp),
            "x" => Ok(Accidental::DoubleSharp),
            other => Err(TheoryError::UnrecognisedAccidental(other.to_string())),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_round_trip() {
        for acc in Accidental::ALL {
            assert_eq!(Accidental::from_delta(acc.delta()), Some(acc));
        }
        assert_eq!(Accidental::from_delta(3), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("bb".parse::<Accidental>(), Ok(Accidental::DoubleFlat));
        assert_eq!("x".parse::<Accidental>(), Ok(Accidental::DoubleSharp));
        assert_eq!("".parse::<Accidental>(), Ok(Accidental::Natural));
        assert!(matches!(
            "##".parse::<Accidental>(),
            Err(TheoryError::UnrecognisedAccidental(_))
        ));
    }

    #[test]
    fn test_ly_suffix() {
        assert_eq!(Accidental::Sharp.ly_suffix(), "s");
        assert_eq!(Accidental::DoubleFlat.ly_suffix(), "ff");
        assert_eq!(Accidental::Natural.ly_suffix(), "");
    }
}
