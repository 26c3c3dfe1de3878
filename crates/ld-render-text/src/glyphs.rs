//! Line-direction properties and replacement glyph tables.
//!
//! Every table is indexed by a [`Directions`] set (`0..16`), with bit order
//! up, down, left, right.

use ld_core::Directions;

const U: u8 = Directions::UP.bits();
const D: u8 = Directions::DOWN.bits();
const L: u8 = Directions::LEFT.bits();
const R: u8 = Directions::RIGHT.bits();

/// First code point of the Unicode box-drawing block.
const BOX_DRAWING_START: u32 = 0x2500;

/// Sides reached by each code point in U+2500..=U+257F.
#[rustfmt::skip]
const BOX_DRAWING: [u8; 128] = [
    // ─ ━ │ ┃ ┄ ┅ ┆ ┇ ┈ ┉ ┊ ┋ ┌ ┍ ┎ ┏
    L | R, L | R, U | D, U | D, L | R, L | R, U | D, U | D,
    L | R, L | R, U | D, U | D, D | R, D | R, D | R, D | R,
    // ┐ ┑ ┒ ┓ └ ┕ ┖ ┗ ┘ ┙ ┚ ┛ ├ ┝ ┞ ┟
    D | L, D | L, D | L, D | L, U | R, U | R, U | R, U | R,
    U | L, U | L, U | L, U | L, U | D | R, U | D | R, U | D | R, U | D | R,
    // ┠ ┡ ┢ ┣ ┤ ┥ ┦ ┧ ┨ ┩ ┪ ┫ ┬ ┭ ┮ ┯
    U | D | R, U | D | R, U | D | R, U | D | R, U | D | L, U | D | L, U | D | L, U | D | L,
    U | D | L, U | D | L, U | D | L, U | D | L, D | L | R, D | L | R, D | L | R, D | L | R,
    // ┰ ┱ ┲ ┳ ┴ ┵ ┶ ┷ ┸ ┹ ┺ ┻ ┼ ┽ ┾ ┿
    D | L | R, D | L | R, D | L | R, D | L | R, U | L | R, U | L | R, U | L | R, U | L | R,
    U | L | R, U | L | R, U | L | R, U | L | R, U | D | L | R, U | D | L | R, U | D | L | R, U | D | L | R,
    // ╀ ╁ ╂ ╃ ╄ ╅ ╆ ╇ ╈ ╉ ╊ ╋ ╌ ╍ ╎ ╏
    U | D | L | R, U | D | L | R, U | D | L | R, U | D | L | R,
    U | D | L | R, U | D | L | R, U | D | L | R, U | D | L | R,
    U | D | L | R, U | D | L | R, U | D | L | R, U | D | L | R,
    L | R, L | R, U | D, U | D,
    // ═ ║ ╒ ╓ ╔ ╕ ╖ ╗ ╘ ╙ ╚ ╛ ╜ ╝ ╞ ╟
    L | R, U | D, D | R, D | R, D | R, D | L, D | L, D | L,
    U | R, U | R, U | R, U | L, U | L, U | L, U | D | R, U | D | R,
    // ╠ ╡ ╢ ╣ ╤ ╥ ╦ ╧ ╨ ╩ ╪ ╫ ╬ ╭ ╮ ╯
    U | D | R, U | D | L, U | D | L, U | D | L, D | L | R, D | L | R, D | L | R, U | L | R,
    U | L | R, U | L | R, U | D | L | R, U | D | L | R, U | D | L | R, D | R, D | L, U | L,
    // ╰ ╱ ╲ ╳ ╴ ╵ ╶ ╷ ╸ ╹ ╺ ╻ ╼ ╽ ╾ ╿
    U | R, 0, 0, 0, L, U, R, D,
    L, U, R, D, L | R, U | D, L | R, U | D,
];

/// Vertical stroke that replaces `|`.
pub const VERTICAL: char = '│';
/// Horizontal stroke that replaces `-`.
pub const HORIZONTAL: char = '─';

/// Sides a line character reaches, or `None` when `ch` is not a line.
///
/// `None` and an empty set differ: the diagonal box-drawing characters
/// (`╱ ╲ ╳`) are known lines that reach no orthogonal side. Neither ever
/// confirms a connection.
#[must_use]
pub fn line_directions(ch: char) -> Option<Directions> {
    match ch {
        '+' | '*' => Some(Directions::ALL),
        '|' => Some(Directions::UP | Directions::DOWN),
        '-' => Some(Directions::LEFT | Directions::RIGHT),
        '\u{2500}'..='\u{257F}' => {
            let offset = (u32::from(ch) - BOX_DRAWING_START) as usize;
            Some(Directions::from_bits_truncate(BOX_DRAWING[offset]))
        }
        _ => None,
    }
}

/// Replacement for a plain stroke, which is redrawn regardless of context.
#[must_use]
pub const fn stroke_glyph(ch: char) -> Option<char> {
    match ch {
        '|' => Some(VERTICAL),
        '-' => Some(HORIZONTAL),
        _ => None,
    }
}

/// Characters whose glyph depends on their neighbours.
#[must_use]
pub const fn is_joint(ch: char) -> bool {
    matches!(ch, '+' | '*' | '\'' | '\\' | '/')
}

/// Characters whose table choice may be overridden by plain strokes.
#[must_use]
pub const fn is_diagonal(ch: char) -> bool {
    matches!(ch, '\\' | '/')
}

/// Sixteen glyphs, one per direction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    pub name: &'static str,
    glyphs: [char; 16],
}

impl GlyphTable {
    /// Square corners and crossings, for `+` and `'`.
    pub const SHARP: Self = Self {
        name: "sharp",
        glyphs: [
            '+',        // (none)
            '\u{2575}', // up                  ╵
            '\u{2577}', // down                ╷
            '\u{2502}', // up down             │
            '\u{2574}', // left                ╴
            '\u{2518}', // up left             ┘
            '\u{2510}', // down left           ┐
            '\u{2524}', // up down left        ┤
            '\u{2576}', // right               ╶
            '\u{2514}', // up right            └
            '\u{250C}', // down right          ┌
            '\u{251C}', // up down right       ├
            '\u{2500}', // left right          ─
            '\u{2534}', // up left right       ┴
            '\u{252C}', // down left right     ┬
            '\u{253C}', // all                 ┼
        ],
    };

    /// Rounded corners, for `*`.
    pub const ROUND: Self = Self {
        name: "round",
        glyphs: [
            '*', '\u{2575}', '\u{2577}', '\u{2502}', '\u{2574}', '\u{256F}', '\u{256E}',
            '\u{2524}', '\u{2576}', '\u{2570}', '\u{256D}', '\u{251C}', '\u{2500}', '\u{2534}',
            '\u{252C}', '\u{253C}',
        ],
    };

    /// Rounded corners for `\`, leaning toward down-right joins. Sets with no
    /// sensible corner keep the backslash.
    pub const BACKSLASH: Self = Self {
        name: "backslash",
        glyphs: [
            '\\',       // (none)
            '\u{2570}', // up                  ╰
            '\u{256E}', // down                ╮
            '\\',       // up down
            '\u{256E}', // left                ╮
            '\u{2518}', // up left             ┘
            '\u{256E}', // down left           ╮
            '\u{2524}', // up down left        ┤
            '\u{2570}', // right               ╰
            '\u{2570}', // up right            ╰
            '\u{250C}', // down right          ┌
            '\u{251C}', // up down right       ├
            '\\',       // left right
            '\u{2534}', // up left right       ┴
            '\u{252C}', // down left right     ┬
            '\u{253C}', // all                 ┼
        ],
    };

    /// Rounded corners for `/`, leaning toward down-left joins.
    pub const SLASH: Self = Self {
        name: "slash",
        glyphs: [
            '/',        // (none)
            '\u{256F}', // up                  ╯
            '\u{256D}', // down                ╭
            '/',        // up down
            '\u{256F}', // left                ╯
            '\u{256F}', // up left             ╯
            '\u{2510}', // down left           ┐
            '\u{2524}', // up down left        ┤
            '\u{256D}', // right               ╭
            '\u{2514}', // up right            └
            '\u{256D}', // down right          ╭
            '\u{251C}', // up down right       ├
            '/',        // left right
            '\u{2534}', // up left right       ┴
            '\u{252C}', // down left right     ┬
            '\u{253C}', // all                 ┼
        ],
    };

    /// Table used to redraw a joint character.
    #[must_use]
    pub const fn for_joint(ch: char) -> Option<Self> {
        match ch {
            '+' | '\'' => Some(Self::SHARP),
            '*' => Some(Self::ROUND),
            '\\' => Some(Self::BACKSLASH),
            '/' => Some(Self::SLASH),
            _ => None,
        }
    }

    #[must_use]
    pub const fn glyph(&self, directions: Directions) -> char {
        self.glyphs[directions.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Directions, char)> + '_ {
        self.glyphs
            .iter()
            .enumerate()
            .map(|(i, &glyph)| (Directions::from_bits_truncate(i as u8), glyph))
    }
}
