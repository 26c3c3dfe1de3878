//! Ragged character grid.
//!
//! Rows keep their own length; nothing is padded. Reads outside a row
//! return [`Grid::EMPTY`] and writes outside a row are dropped, so callers
//! never need to special-case edges.

use std::fmt;

use crate::direction::Direction;

/// A character buffer of independently sized rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// One entry per `\n`-separated line, in order.
    rows: Vec<Vec<char>>,
    /// Length of the longest row.
    max_width: usize,
}

impl Grid {
    /// Sentinel returned for any cell outside the grid.
    pub const EMPTY: char = '\0';

    /// Split `text` on line feeds into rows of chars.
    ///
    /// Empty input produces a grid with no rows.
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let rows: Vec<Vec<char>> = text.split('\n').map(|line| line.chars().collect()).collect();
        let max_width = rows.iter().map(Vec::len).max().unwrap_or(0);

        Self { rows, max_width }
    }

    /// Length of the longest row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.max_width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Character at `(row, col)`, or [`Grid::EMPTY`] when that row is
    /// shorter than `col` or does not exist.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(Self::EMPTY)
    }

    /// Overwrite `(row, col)` in place. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = ch;
        }
    }

    /// Character one step from `(row, col)` toward `direction`.
    #[must_use]
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> char {
        let (dr, dc) = direction.offset();
        match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) => self.get(r, c),
            _ => Self::EMPTY,
        }
    }
}

impl From<&str> for Grid {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        for (i, line) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &ch in line {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_has_no_rows() {
        let grid = Grid::new("");
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.get(0, 0), Grid::EMPTY);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn ragged_rows_keep_their_length() {
        let grid = Grid::new("abc\nd\n\nefgh");
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.row(1), Some(&['d'][..]));
        assert_eq!(grid.row(2), Some(&[][..]));
        assert_eq!(grid.get(1, 0), 'd');
        assert_eq!(grid.get(1, 1), Grid::EMPTY);
        assert_eq!(grid.get(3, 3), 'h');
        assert_eq!(grid.get(4, 0), Grid::EMPTY);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let grid = Grid::new("┌─┐\nab");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 1), '─');
    }

    #[test]
    fn trailing_newline_is_an_empty_row() {
        let grid = Grid::new("x\n");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "x\n");
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut grid = Grid::new("ab\nc");
        grid.set(1, 1, 'z');
        grid.set(5, 0, 'z');
        assert_eq!(grid.to_string(), "ab\nc");

        grid.set(1, 0, 'z');
        assert_eq!(grid.to_string(), "ab\nz");
    }

    #[test]
    fn clone_is_independent() {
        let original = Grid::new("+-+");
        let mut copy = original.clone();
        copy.set(0, 1, '=');
        assert_eq!(original.to_string(), "+-+");
        assert_eq!(copy.to_string(), "+=+");
    }

    #[test]
    fn neighbor_stops_at_edges() {
        let grid = Grid::new("ab\ncd");
        assert_eq!(grid.neighbor(0, 0, Direction::Up), Grid::EMPTY);
        assert_eq!(grid.neighbor(0, 0, Direction::Left), Grid::EMPTY);
        assert_eq!(grid.neighbor(0, 0, Direction::Right), 'b');
        assert_eq!(grid.neighbor(0, 0, Direction::Down), 'c');
        assert_eq!(grid.neighbor(1, 1, Direction::Up), 'b');
        assert_eq!(grid.neighbor(1, 1, Direction::Right), Grid::EMPTY);
        assert_eq!(grid.neighbor(1, 1, Direction::Down), Grid::EMPTY);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_display_round_trips(input in "(?s).{0,200}") {
            prop_assert_eq!(Grid::new(&input).to_string(), input);
        }
    }
}
