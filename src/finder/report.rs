// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text output: search reports and catalogue listings.

use std::collections::BTreeMap;
use std::fmt;

use super::{Catalogue, FinderReport};
use crate::music::ModeInKey;

/// Display adapter over a writer closure
struct Rendered<F>(F);

impl<F> fmt::Display for Rendered<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Run `write` against a formatter and collect the text
pub(crate) fn render<F>(write: F) -> String
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    Rendered(write).to_string()
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn joined(modes: &[&ModeInKey]) -> String {
    modes
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "<description>: <chord>" underlined with '='
pub fn header(description: &str, report: &FinderReport) -> String {
    let chord = report.fixed.note_names().join(" ");
    let header = format!("{}: {}", description, chord);
    format!("{}\n{}\n\n", header, "=".repeat(header.chars().count()))
}

/// Minimal identifying chords for every identified mode
pub fn identifiers(report: &FinderReport) -> String {
    render(|f| {
        for outcome in report.identified() {
            if let Some(size) = outcome.chord_size() {
                writeln!(f, "{} note chords uniquely identifying {}:", size, outcome.scale)?;
            }
            for chord in outcome.chords() {
                writeln!(
                    f,
                    "    {:<14} + {}",
                    chord.identifying.to_string(),
                    chord.alterations
                )?;
            }
        }
        Ok(())
    })
}

/// Modes ordered from easiest to hardest to identify
pub fn uniqueness(report: &FinderReport) -> String {
    render(|f| {
        f.write_str(
            "\n  Modes sorted by \"uniqueness\" (ease of identification)\n  \
             -----------------------------------------------------\n\n",
        )?;
        for ((chord_size, num_chords), modes) in report.distinctiveness() {
            writeln!(
                f,
                "modes uniquely identified by {} {}-note chord{}: {}",
                num_chords,
                chord_size,
                plural(num_chords),
                joined(&modes)
            )?;
        }
        Ok(())
    })
}

/// How many notes each mode needs before it is singled out
pub fn notes_needed(report: &FinderReport) -> String {
    render(|f| {
        f.write_str("\n  How many notes are needed?\n  --------------------------\n\n")?;
        let by_size: BTreeMap<usize, Vec<&ModeInKey>> = report.scales_by_chord_size();
        for (size, modes) in by_size {
            if size == 0 {
                writeln!(f, "modes with no unique identifier found: {}", joined(&modes))?;
            } else {
                writeln!(
                    f,
                    "{} mode{} uniquely identified by {} notes: {}",
                    modes.len(),
                    plural(modes.len()),
                    size,
                    joined(&modes)
                )?;
            }
        }
        Ok(())
    })
}

/// Full report: header, identifiers and, optionally, both summaries
pub fn render_report(description: &str, report: &FinderReport, summaries: bool) -> String {
    let mut out = header(description, report);
    out.push_str(&identifiers(report));
    if summaries {
        out.push_str(&uniqueness(report));
        out.push_str(&notes_needed(report));
    }
    out
}

/// One line per mode ("<degree> <name> <notes>"), a blank line after each
/// scale type. Names are those originally requested.
pub fn render_catalogue(catalogue: &Catalogue) -> String {
    render(|f| {
        for group in catalogue.groups() {
            for mode in group {
                writeln!(
                    f,
                    "{} {:<30} {}",
                    mode.original_mode().degree(),
                    mode.original_label(),
                    mode.notes()
                )?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    })
}

/// Pentatonics and the matched scales that contain them
pub fn render_containment(containment: &BTreeMap<String, Vec<String>>) -> String {
    render(|f| {
        for (pentatonic, scales) in containment {
            writeln!(f, "{} is contained within the following scales:", pentatonic)?;
            for scale in scales {
                writeln!(f, "  {}", scale)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    })
}
