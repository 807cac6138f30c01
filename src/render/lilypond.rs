// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! LilyPond notation output.
//!
//! Notes render in Dutch note names ("bf", "fs"). Text labels get their
//! accidentals replaced with raised, shrunken glyphs so that "C lydian #9"
//! typesets with a real sharp sign.

use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::finder::report::render;
use crate::finder::FinderReport;
use crate::music::{Accidental, ModeInKey, Note, NoteSet};

/// Indentation of label markup inside a score header
const LABEL_INDENT: usize = 12;

/// Note name for use inside `\relative`
pub fn note_to_ly(note: &Note) -> String {
    format!(
        "{}{}",
        note.letter().as_char().to_ascii_lowercase(),
        note.accidental().ly_suffix()
    )
}

/// Note name with absolute octave marks; c' is middle C
pub fn note_to_ly_abs(note: &Note) -> String {
    let marks = note.octave() - 3;
    let suffix = if marks < 0 {
        ",".repeat(marks.unsigned_abs() as usize)
    } else {
        "'".repeat(marks as usize)
    };
    format!("{}{}", note_to_ly(note), suffix)
}

/// Chord body in absolute pitch.
///
/// Naturals sharing a letter with another chord note get a forced
/// accidental ("!") so LilyPond prints the natural sign.
pub fn chord_to_ly_abs(chord: &NoteSet) -> String {
    let mut letter_counts = HashMap::new();
    for note in chord {
        *letter_counts.entry(note.letter()).or_insert(0usize) += 1;
    }
    chord
        .iter()
        .map(|note| {
            let mut ly = note_to_ly_abs(note);
            if note.accidental().is_natural() && letter_counts[&note.letter()] > 1 {
                ly.push('!');
            }
            ly
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scale notes in relative pitch, identifying notes emphasised
pub fn scale_to_ly(notes: &NoteSet, identifying: &NoteSet) -> String {
    let emphasised = identifying.pitch_classes();
    notes
        .iter()
        .map(|note| {
            if emphasised.contains_note(note) {
                format!("\\emphasise {}", note_to_ly(note))
            } else {
                note_to_ly(note)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines().map(|line| format!("{}{}\n", pad, line)).collect()
}

/// Rewrites accidentals in free text as LilyPond markup
#[derive(Debug, Clone)]
pub struct MarkupWriter {
    note_names: Regex,
    degrees: Regex,
}

fn accidental_for(label: &str) -> Accidental {
    match label {
        "bb" => Accidental::DoubleFlat,
        "b" => Accidental::Flat,
        "#" => Accidental::Sharp,
        "x" => Accidental::DoubleSharp,
        _ => Accidental::Natural,
    }
}

impl MarkupWriter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            note_names: Regex::new(r"\b([A-G])(b\b|bb\b|#|x\b)")
                .context("Failed to compile note name pattern")?,
            degrees: Regex::new(r"(b|bb|#|x|natural\s*)(1[13]|[1-79])")
                .context("Failed to compile scale degree pattern")?,
        })
    }

    /// Replace note names ("Bb") and altered degrees ("#11", "natural 2")
    /// with markup glyphs. The result is meant to sit inside a quoted
    /// markup string.
    pub fn accidentals_to_markup(&self, text: &str) -> String {
        let text = self.note_names.replace_all(text, |caps: &Captures| {
            format!(
                "{}\"{} \"",
                &caps[1],
                accidental_for(&caps[2]).ly_markup()
            )
        });

        let source: &str = &text;
        self.degrees
            .replace_all(source, |caps: &Captures| {
                let whole = &caps[0];
                let start = caps.get(0).map_or(0, |m| m.start());
                let follows_non_letter = source[..start]
                    .chars()
                    .next_back()
                    .is_some_and(|c| !c.is_ascii_alphabetic());
                if !follows_non_letter {
                    return whole.to_string();
                }
                let label = caps[1].trim_end();
                format!(
                    "\"{} \"{}",
                    accidental_for(label).ly_markup(),
                    &caps[2]
                )
            })
            .into_owned()
    }

    /// Mode name as score header markup; multi-line names become a column
    pub fn mode_label(&self, mode: &ModeInKey) -> String {
        let name = mode.name();
        let lines: Vec<&str> = name.lines().collect();
        if lines.len() < 2 {
            return indent(&format!("\"{}\"", self.accidentals_to_markup(&name)), LABEL_INDENT);
        }
        let out = render(|f| {
            f.write_str("\\override #'(baseline-skip . 2)\n\\column {\n")?;
            for line in &lines {
                writeln!(f, "  \\line {{ \"{}\" }}", self.accidentals_to_markup(line))?;
            }
            f.write_str("}\n")
        });
        indent(&out, LABEL_INDENT)
    }

    /// A complete .ly document: the fixed chord followed by one score per
    /// identifying chord
    pub fn render_document(&self, description: &str, report: &FinderReport) -> String {
        render(|f| {
            f.write_str("\\version \"2.18.2\"\n\n")?;
            writeln!(
                f,
                "\\header {{\n  title = \\markup {{ \"{}\" }}\n  tagline = ##f\n}}\n",
                self.accidentals_to_markup(description)
            )?;
            f.write_str("emphasise = \\once \\override NoteHead.color = #red\n\n")?;
            writeln!(
                f,
                "\\score {{\n  \\new Staff {{ <{}>1 }}\n  \\layout {{ }}\n}}\n",
                chord_to_ly_abs(&report.fixed)
            )?;

            for found in report.matches() {
                f.write_str("\\score {\n")?;
                f.write_str("  \\new Staff {\n    \\cadenzaOn\n")?;
                writeln!(
                    f,
                    "    \\relative c' {{ {} }}",
                    scale_to_ly(found.notes, found.identifying)
                )?;
                f.write_str("  }\n  \\header {\n    piece = \\markup {\n")?;
                f.write_str(&self.mode_label(found.scale))?;
                f.write_str("    }\n  }\n  \\layout { }\n}\n\n")?;
            }
            Ok(())
        })
    }
}
