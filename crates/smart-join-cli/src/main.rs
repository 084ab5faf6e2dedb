//! `smart-join`: join the current or selected lines of a text file.
//!
//! ```bash
//! # Join line 3 with line 4 and print the result
//! smart-join notes.md --cursor 3
//!
//! # Rewrap a hard-wrapped paragraph in place
//! smart-join notes.md --select 10:1-14:80 --in-place
//!
//! # Inspect the edits instead of applying them
//! cat notes.md | smart-join --cursor 1 --cursor 8 --edits
//! ```

mod cli;
mod output;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use smart_join_core::{Document, compute_join_edits, join_selected_lines};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    cli.validate().map_err(anyhow::Error::msg)?;

    let input = read_input(cli.input_path().map(|path| path.as_path()))?;
    let mut doc = Document::new(&input);
    cli.check_line_endings(doc.has_mixed_line_endings())
        .map_err(anyhow::Error::msg)?;
    let line_ending = cli.eol.resolve(doc.line_ending());
    doc.set_line_ending(line_ending);
    if doc.has_mixed_line_endings() {
        log::warn!("input mixes line endings; every line will use {line_ending:?}");
    }

    let selections = cli.selections();
    log::info!(
        "{} line(s), {} selection(s), {:?} line endings",
        input.lines().count(),
        selections.len(),
        line_ending
    );

    if cli.print_edits {
        let edits = compute_join_edits(&doc, &selections, line_ending);
        let json = output::edits_to_json(&edits).context("failed to serialize edits")?;
        println!("{json}");
        return Ok(());
    }

    let applied = join_selected_lines(&mut doc, &selections, line_ending)
        .context("failed to apply edits")?;
    log::info!("applied {applied} edit(s)");

    let text = doc.text_for_saving();
    match cli.input_path() {
        Some(path) if cli.in_place => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?
        }
        _ => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
