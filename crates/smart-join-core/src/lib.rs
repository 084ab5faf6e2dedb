#![warn(missing_docs)]
//! Smart Join Core - headless line joining for text editors
//!
//! # Overview
//!
//! `smart-join-core` implements a single editing operation: merge the lines covered by one or
//! more selections into fewer lines. Hard line breaks that only exist for wrapping are
//! collapsed, while word boundaries, numeric hyphens and the spacing conventions of mixed
//! ASCII / wide-script (e.g. CJK) text are preserved.
//!
//! The crate does not own an editor. Hosts provide line access through [`LineReader`] and
//! apply the resulting [`Edit`]s through [`EditSink`]; [`Document`] is a ready-made
//! Rope-backed host.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Join Operation (compute / apply edits)     │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Selection Resolver (expand + dedup)        │  ← Range set
//! ├─────────────────────────────────────────────┤
//! │  Line Joiner (hyphens + script spacing)     │  ← Pure text
//! ├─────────────────────────────────────────────┤
//! │  Host traits (LineReader / EditSink)        │  ← Editor seam
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use smart_join_core::{LineEnding, Position, Selection, compute_join_edits, join_lines};
//!
//! assert_eq!(join_lines(&["exam-", "ple"]), "example");
//! assert_eq!(join_lines(&["page 9-", "10"]), "page 9-10");
//! assert_eq!(join_lines(&["日本語の", "文章"]), "日本語の文章");
//!
//! let lines = ["hello", "world", "again"];
//! let edits = compute_join_edits(
//!     &lines[..],
//!     &[Selection::caret(Position::new(0, 0))],
//!     LineEnding::Lf,
//! );
//! assert_eq!(edits.len(), 1);
//! assert_eq!(edits[0].replacement, "hello world");
//! ```
//!
//! # Module Description
//!
//! - [`joiner`] - the line joining rules
//! - [`selection_set`] - selection expansion and range deduplication
//! - [`command`] - the end-to-end join operation
//! - [`host`] - host capability traits
//! - [`document`] - Rope based reference host
//! - [`line_ending`] - line terminator handling

pub mod command;
pub mod document;
pub mod edit;
pub mod error;
pub mod host;
pub mod joiner;
pub mod line_ending;
pub mod position;
pub mod selection_set;

pub use command::{compute_join_edits, join_selected_lines};
pub use document::Document;
pub use edit::Edit;
pub use error::DocumentError;
pub use host::{EditSink, LineReader};
pub use joiner::{is_narrow_script, join_lines};
pub use line_ending::LineEnding;
pub use position::{Position, Range, Selection};
pub use selection_set::{dedup_ranges, expand_selection, resolve_ranges};
