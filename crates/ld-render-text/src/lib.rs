#![forbid(unsafe_code)]

//! Redraw plain-ASCII line art (`+ - | * ' \ /`) with Unicode box-drawing
//! glyphs, inferring each joint's shape from the neighbours that reach it.
//!
//! ```
//! use ld_render_text::process;
//!
//! assert_eq!(process("+--+\n|  |\n+--+"), "┌──┐\n│  │\n└──┘");
//! ```

pub mod fenced;
pub mod glyphs;
pub mod report;
pub mod rewrite;

pub use fenced::{FencedBlock, FencedOutcome, render_fenced};
pub use glyphs::{GlyphTable, HORIZONTAL, VERTICAL, line_directions};
pub use report::{CellReport, RewriteOutcome, RewriteStats, inspect, process_with_stats};
pub use rewrite::{CellClass, classify_cell, connections, main_lines, process, process_grid};
