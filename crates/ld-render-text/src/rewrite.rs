//! ASCII line-art to box-drawing rewriting.
//!
//! Every decision is made against the untouched input grid and written to a
//! separate output grid, so a cell's glyph never depends on a neighbour that
//! was already redrawn in the same pass.

use ld_core::{Direction, Directions, Grid};
use serde::Serialize;
use tracing::{debug, trace};

use crate::glyphs::{GlyphTable, is_diagonal, is_joint, line_directions, stroke_glyph};

/// What the rewriter does with one input cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellClass {
    /// Not a line character; copied unchanged.
    Passthrough,
    /// Plain `|` or `-`, always redrawn.
    Stroke { glyph: char },
    /// A joint that no neighbour reaches; left as typed.
    Isolated,
    /// A joint redrawn from its confirmed connections.
    Joint {
        connections: Directions,
        /// Plain-stroke neighbours, only computed for `\` and `/`.
        main_lines: Directions,
        glyph: char,
    },
}

impl CellClass {
    /// Glyph written to the output, or `None` when the cell is copied.
    #[must_use]
    pub const fn replacement(self) -> Option<char> {
        match self {
            Self::Stroke { glyph } | Self::Joint { glyph, .. } => Some(glyph),
            Self::Passthrough | Self::Isolated => None,
        }
    }
}

/// Whether `ch` reaches toward `toward`. Characters without a property entry
/// never do.
fn reaches(ch: char, toward: Direction) -> bool {
    line_directions(ch).is_some_and(|directions| directions.contains(toward.flag()))
}

/// Sides of `(row, col)` whose neighbour reaches back into this cell.
///
/// The neighbour above counts only if it reaches down, the one to the left
/// only if it reaches right, and so on.
#[must_use]
pub fn connections(grid: &Grid, row: usize, col: usize) -> Directions {
    Direction::ALL
        .into_iter()
        .filter(|&direction| reaches(grid.neighbor(row, col, direction), direction.opposite()))
        .collect()
}

/// Sides of `(row, col)` touched by a plain `|` (above or below) or a plain
/// `-` (left or right).
#[must_use]
pub fn main_lines(grid: &Grid, row: usize, col: usize) -> Directions {
    Direction::ALL
        .into_iter()
        .filter(|&direction| {
            let stroke = match direction {
                Direction::Up | Direction::Down => '|',
                Direction::Left | Direction::Right => '-',
            };
            grid.neighbor(row, col, direction) == stroke
        })
        .collect()
}

/// Decide how the cell at `(row, col)` of `grid` is redrawn.
#[must_use]
pub fn classify_cell(grid: &Grid, row: usize, col: usize) -> CellClass {
    let ch = grid.get(row, col);

    if let Some(glyph) = stroke_glyph(ch) {
        return CellClass::Stroke { glyph };
    }
    let Some(table) = GlyphTable::for_joint(ch) else {
        return CellClass::Passthrough;
    };
    debug_assert!(is_joint(ch));

    let connections = connections(grid, row, col);
    if connections.is_empty() {
        return CellClass::Isolated;
    }

    // A diagonal sitting between plain strokes is a corner of those strokes.
    let main_lines = if is_diagonal(ch) {
        main_lines(grid, row, col)
    } else {
        Directions::EMPTY
    };
    let index = if main_lines.is_empty() {
        connections
    } else {
        main_lines
    };

    CellClass::Joint {
        connections,
        main_lines,
        glyph: table.glyph(index),
    }
}

/// Redraw every line character of `input` into a fresh grid.
#[must_use]
pub fn process_grid(input: &Grid) -> Grid {
    let mut output = input.clone();

    for (row, line) in input.rows().enumerate() {
        for col in 0..line.len() {
            if let Some(glyph) = classify_cell(input, row, col).replacement() {
                trace!(row, col, from = %line[col], to = %glyph, "redraw");
                output.set(row, col, glyph);
            }
        }
    }

    output
}

/// Redraw ASCII line art in `text` with Unicode box-drawing glyphs.
///
/// The result has the same number of lines as `text` and each line keeps
/// its character count. Never fails; malformed art just renders imperfectly.
#[must_use]
pub fn process(text: &str) -> String {
    let input = Grid::new(text);
    let output = process_grid(&input);
    debug!(
        rows = input.height(),
        width = input.width(),
        "line art rewritten"
    );
    output.to_string()
}
