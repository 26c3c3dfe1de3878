//! Rewrite statistics and per-joint inspection.

use ld_core::{Directions, Grid};
use serde::Serialize;
use tracing::debug;

use crate::rewrite::{CellClass, classify_cell};

/// Counts gathered while redrawing one piece of line art.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    pub rows: usize,
    pub width: usize,
    /// Plain `|` and `-` redrawn.
    pub strokes: usize,
    /// Joint characters redrawn.
    pub joints: usize,
    /// Joint characters left as typed because nothing reaches them.
    pub isolated_joints: usize,
    /// Diagonals resolved from neighbouring plain strokes.
    pub diagonal_corners: usize,
}

impl RewriteStats {
    /// Cells whose character changed.
    #[must_use]
    pub const fn rewritten(&self) -> usize {
        self.strokes + self.joints
    }

    pub fn merge(&mut self, other: &Self) {
        self.rows += other.rows;
        self.width = self.width.max(other.width);
        self.strokes += other.strokes;
        self.joints += other.joints;
        self.isolated_joints += other.isolated_joints;
        self.diagonal_corners += other.diagonal_corners;
    }
}

/// Rewritten text plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub output: String,
    pub stats: RewriteStats,
}

/// [`process`](crate::process) that also counts what it redrew.
#[must_use]
pub fn process_with_stats(text: &str) -> RewriteOutcome {
    let input = Grid::new(text);
    let mut output = input.clone();
    let mut stats = RewriteStats {
        rows: input.height(),
        width: input.width(),
        ..RewriteStats::default()
    };

    for (row, line) in input.rows().enumerate() {
        for col in 0..line.len() {
            match classify_cell(&input, row, col) {
                CellClass::Passthrough => {}
                CellClass::Isolated => stats.isolated_joints += 1,
                CellClass::Stroke { glyph } => {
                    stats.strokes += 1;
                    output.set(row, col, glyph);
                }
                CellClass::Joint {
                    main_lines, glyph, ..
                } => {
                    stats.joints += 1;
                    if !main_lines.is_empty() {
                        stats.diagonal_corners += 1;
                    }
                    output.set(row, col, glyph);
                }
            }
        }
    }

    debug!(
        rows = stats.rows,
        strokes = stats.strokes,
        joints = stats.joints,
        isolated = stats.isolated_joints,
        "line art rewritten"
    );

    RewriteOutcome {
        output: output.to_string(),
        stats,
    }
}

/// How one joint character was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellReport {
    /// 0-based.
    pub row: usize,
    /// 0-based, in characters.
    pub col: usize,
    pub input: char,
    pub output: char,
    pub connections: Directions,
    pub main_lines: Directions,
    pub isolated: bool,
}

/// Report every joint character in `text`, in reading order.
#[must_use]
pub fn inspect(text: &str) -> Vec<CellReport> {
    let grid = Grid::new(text);
    let mut reports = Vec::new();

    for (row, line) in grid.rows().enumerate() {
        for (col, &input) in line.iter().enumerate() {
            let report = match classify_cell(&grid, row, col) {
                CellClass::Passthrough | CellClass::Stroke { .. } => continue,
                CellClass::Isolated => CellReport {
                    row,
                    col,
                    input,
                    output: input,
                    connections: Directions::EMPTY,
                    main_lines: Directions::EMPTY,
                    isolated: true,
                },
                CellClass::Joint {
                    connections,
                    main_lines,
                    glyph,
                } => CellReport {
                    row,
                    col,
                    input,
                    output: glyph,
                    connections,
                    main_lines,
                    isolated: false,
                },
            };
            reports.push(report);
        }
    }

    reports
}
