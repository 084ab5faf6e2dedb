use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use smart_join_core::{LineEnding, Position, Selection};

/// Join the current or selected lines of a text file.
///
/// Positions are 1-based. Every line of the output uses one terminator, so an input that mixes
/// line endings is only rewritten when `--eol` names the one to use.
#[derive(Parser, Debug)]
#[command(name = "smart-join", about, long_about = None, version)]
pub struct Cli {
    /// Input file (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Place a caret; joins its line with the next one (repeatable)
    #[arg(short = 'c', long = "cursor", value_name = "LINE[:COL]", value_parser = parse_position)]
    pub cursors: Vec<Position>,

    /// Select a span; joins every line it covers (repeatable)
    #[arg(
        short = 's',
        long = "select",
        value_name = "LINE:COL-LINE:COL",
        value_parser = parse_span
    )]
    pub spans: Vec<Selection>,

    /// Line terminator of the input
    #[arg(long, value_enum, default_value_t = EolArg::Auto)]
    pub eol: EolArg,

    /// Write the result back to FILE instead of stdout
    #[arg(short = 'i', long = "in-place", requires = "file")]
    pub in_place: bool,

    /// Print the computed edits as JSON (0-based) instead of the joined text
    #[arg(long = "edits", conflicts_with = "in_place")]
    pub print_edits: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Carets first, then spans, each in command-line order.
    pub fn selections(&self) -> Vec<Selection> {
        self.cursors
            .iter()
            .map(|pos| Selection::caret(*pos))
            .chain(self.spans.iter().cloned())
            .collect()
    }

    /// Reject flag combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.in_place && self.input_path().is_none() {
            return Err("--in-place needs a file path, not stdin".to_string());
        }
        Ok(())
    }

    /// Refuse to rewrite mixed line endings without an explicit `--eol`.
    pub fn check_line_endings(&self, mixed: bool) -> Result<(), String> {
        if mixed && self.eol == EolArg::Auto && !self.print_edits {
            return Err(
                "input mixes line endings; pass --eol lf or --eol crlf to choose one".to_string(),
            );
        }
        Ok(())
    }

    /// `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EolArg {
    /// Detect from the input (CRLF if any line uses it)
    Auto,
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
}

impl EolArg {
    pub fn resolve(self, detected: LineEnding) -> LineEnding {
        match self {
            Self::Auto => detected,
            Self::Lf => LineEnding::Lf,
            Self::Crlf => LineEnding::Crlf,
        }
    }
}

fn parse_one_based(part: &str, what: &str) -> Result<usize, String> {
    let value: usize = part
        .trim()
        .parse()
        .map_err(|_| format!("invalid {what} '{part}'"))?;
    value
        .checked_sub(1)
        .ok_or_else(|| format!("{what} numbers start at 1"))
}

/// Parse `LINE[:COL]` into a 0-based position.
fn parse_position(input: &str) -> Result<Position, String> {
    let (line, column) = match input.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (input, None),
    };
    let line = parse_one_based(line, "line")?;
    let column = match column {
        Some(column) => parse_one_based(column, "column")?,
        None => 0,
    };
    Ok(Position::new(line, column))
}

/// Parse `LINE:COL-LINE:COL` into an anchor/active selection.
fn parse_span(input: &str) -> Result<Selection, String> {
    let (anchor, active) = input
        .split_once('-')
        .ok_or_else(|| format!("expected LINE:COL-LINE:COL, got '{input}'"))?;
    Ok(Selection::new(parse_position(anchor)?, parse_position(active)?))
}
