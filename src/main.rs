// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! scalefinder - find the minimal chords that identify each scale

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;

use scalefinder::config::{ChordSpec, FinderConfig};
use scalefinder::finder::{report, CatalogueBuilder, PentatonicMatcher, ScaleFinder};
use scalefinder::music::ScaleFamily;
use scalefinder::render::MarkupWriter;

/// Find the chords that uniquely identify each scale containing a chord
#[derive(Parser)]
#[command(name = "scalefinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key the chord is built on
    #[arg(default_value = "C")]
    key: String,

    /// Chord type, e.g. 7b9, min11, maj7#5
    chord: Option<String>,

    /// Explicit chord notes instead of a chord type, e.g. "E G Bb"
    #[arg(long, conflicts_with = "chord")]
    notes: Option<String>,

    /// Report heading (defaults to key plus chord type)
    #[arg(long)]
    description: Option<String>,

    /// Add the perfect fifth to the chord type
    #[arg(long)]
    with_fifth: bool,

    /// Increase logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print scale notes in their plainest spelling
    #[arg(long)]
    simplify: bool,

    /// Largest chord to try, fixed notes included
    #[arg(long)]
    max_chord_size: Option<usize>,

    /// Report pentatonics contained in the matched scales
    #[arg(long)]
    pentatonics: bool,

    /// Scale families to search (diatonic, pentatonic, symmetrical)
    #[arg(long, value_delimiter = ',', value_parser = parse_family)]
    families: Option<Vec<ScaleFamily>>,

    /// Append the uniqueness and notes-needed summaries
    #[arg(long)]
    summaries: bool,

    /// List every mode starting on the key and exit
    #[arg(long)]
    list_modes: bool,

    /// Write a LilyPond document to this path
    #[arg(long)]
    ly: Option<PathBuf>,

    /// Batch configuration file (YAML or TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_family(name: &str) -> Result<ScaleFamily, String> {
    name.parse::<ScaleFamily>().map_err(|err| err.to_string())
}

impl Cli {
    /// Command line options layered over the batch file, if any
    fn into_config(self) -> Result<FinderConfig> {
        let mut config = match &self.config {
            Some(path) => FinderConfig::load(path)?,
            None => FinderConfig {
                key: self.key.clone(),
                ..Default::default()
            },
        };

        if self.notes.is_some() || self.chord.is_some() {
            config.chords.push(ChordSpec {
                chord_type: self.chord,
                notes: self.notes,
                description: self.description,
                with_fifth: self.with_fifth,
            });
        }
        config.simplify |= self.simplify;
        config.report_summaries |= self.summaries;
        config.verbosity = config.verbosity.max(self.verbose);
        if let Some(size) = self.max_chord_size {
            config.max_chord_size = size;
        }
        if let Some(families) = self.families {
            config.families = families;
        }
        if self.ly.is_some() {
            config.lilypond_output = self.ly;
        }
        Ok(config)
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// `out.ly`, `out-2.ly`, `out-3.ly`, ... for successive chords
fn numbered_path(path: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, index + 1, ext.to_string_lossy()),
        None => format!("{}-{}", stem, index + 1),
    };
    path.with_file_name(name)
}

fn run(config: &FinderConfig, list_modes: bool, pentatonics: bool) -> Result<()> {
    let problems = config.validate();
    if !problems.is_empty() {
        bail!("Invalid configuration:\n  {}", problems.join("\n  "));
    }

    let registry = config.build_registry()?;
    let key = config.key_note()?;
    let mut builder = CatalogueBuilder::new(&registry);
    let catalogue = builder
        .build(&key, &config.families)
        .with_context(|| format!("Failed to build the catalogue on {}", key))?;

    if list_modes {
        print!("{}", report::render_catalogue(&catalogue));
        return Ok(());
    }
    if config.chords.is_empty() {
        bail!("No chord given: pass a chord type, --notes, or a --config file with chords");
    }

    let markup = MarkupWriter::new()?;
    let mut matcher = PentatonicMatcher::new(&registry);
    for (index, spec) in config.chords.iter().enumerate() {
        let chord = spec.resolve(&key)?;
        tracing::info!(chord = %chord.description, notes = %chord.notes, "searching");

        let mut finder = ScaleFinder::new(chord.notes.clone(), catalogue.flatten())
            .with_options(config.finder_options());
        let found = finder.identify_modes();
        print!(
            "{}",
            report::render_report(&chord.description, &found, config.report_summaries)
        );

        if pentatonics {
            let containment = matcher.containment(&found)?;
            println!();
            print!("{}", report::render_containment(&containment));
        }

        if let Some(path) = &config.lilypond_output {
            let path = numbered_path(path, index);
            fs::write(&path, markup.render_document(&chord.description, &found))
                .with_context(|| format!("Failed to write LilyPond file: {:?}", path))?;
            tracing::info!(path = ?path, "wrote LilyPond document");
        }
        println!();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let list_modes = cli.list_modes;
    let pentatonics = cli.pentatonics;
    let config = cli.into_config()?;
    init_logging(config.verbosity);
    run(&config, list_modes, pentatonics)
}
