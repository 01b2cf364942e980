//! 5-pixel proportional ASCII font (0x20..=0x7E).
//!
//! Capitals and digits are 3x5, lowercase has a 4-pixel x-height with
//! single-pixel descenders, narrow punctuation packs tighter. Advances
//! are width + 1 except for the 2-pixel space.

use super::{Glyph, GlyphTable};

/// The built-in sign font
pub static FONT_5PX: GlyphTable = GlyphTable {
    first: 0x20,
    last: 0x7E,
    glyphs: &GLYPHS,
    bitmap: &BITMAP,
};

/// Packed glyph bitmaps, row-major, MSB-first, byte-aligned per glyph.
const BITMAP: [u8; 172] = [
    0xe8, 0xb4, 0xbe, 0xfa, 0x79, 0x9c, 0xa5, 0x4a, 0x55, 0x56, 0xc0, 0x6a, 0x40, 0x95, 0x80, 0xaa,
    0x80, 0x5d, 0x00, 0x60, 0xe0, 0x80, 0x25, 0x48, 0xf6, 0xde, 0x59, 0x2e, 0xe7, 0xce, 0xe5, 0x9e,
    0xb7, 0x92, 0xf3, 0x9e, 0xf3, 0xde, 0xe5, 0x24, 0xf7, 0xde, 0xf7, 0x9e, 0xa0, 0x46, 0x2a, 0x22,
    0xe3, 0x80, 0x88, 0xa8, 0xc5, 0x04, 0x56, 0xc6, 0x57, 0xda, 0xd7, 0x5c, 0x72, 0x46, 0xd6, 0xdc,
    0xf3, 0xce, 0xf3, 0xc8, 0x72, 0xd6, 0xb7, 0xda, 0xe9, 0x2e, 0x24, 0xd4, 0xba, 0x6a, 0x92, 0x4e,
    0xbf, 0xda, 0xd6, 0xda, 0x56, 0xd4, 0xd7, 0x48, 0x56, 0xa2, 0xd7, 0x5a, 0x71, 0x1c, 0xe9, 0x24,
    0xb6, 0xde, 0xb6, 0xd4, 0xb7, 0xfa, 0xb5, 0x5a, 0xb5, 0x24, 0xe5, 0x4e, 0xea, 0xc0, 0x91, 0x12,
    0xd5, 0xc0, 0x54, 0xe0, 0x90, 0x76, 0xb0, 0x93, 0x5c, 0x72, 0x30, 0x25, 0xd6, 0x7e, 0x30, 0x6e,
    0x80, 0x75, 0x9c, 0x93, 0x5a, 0xb8, 0x45, 0x60, 0x97, 0x5a, 0xf8, 0xfe, 0xd0, 0xd6, 0xd0, 0x56,
    0xa0, 0xd7, 0x48, 0x75, 0x92, 0xea, 0x78, 0xe0, 0x5d, 0x24, 0xb6, 0xb0, 0xb6, 0xa0, 0xb7, 0xf0,
    0xa9, 0x50, 0xb5, 0x9c, 0xea, 0x70, 0x6b, 0x26, 0xf8, 0xc9, 0xac, 0x78,
];

/// Glyph metrics, indexed by `codepoint - 0x20`.
const GLYPHS: [Glyph; 95] = [
    Glyph { bitmap_offset: 0, width: 0, height: 0, x_advance: 2, x_offset: 0, y_offset: 0 }, // ' '
    Glyph { bitmap_offset: 0, width: 1, height: 5, x_advance: 2, x_offset: 0, y_offset: -5 }, // '!'
    Glyph { bitmap_offset: 1, width: 3, height: 2, x_advance: 4, x_offset: 0, y_offset: -5 }, // '"'
    Glyph { bitmap_offset: 2, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '#'
    Glyph { bitmap_offset: 4, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '$'
    Glyph { bitmap_offset: 6, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '%'
    Glyph { bitmap_offset: 8, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '&'
    Glyph { bitmap_offset: 10, width: 1, height: 2, x_advance: 2, x_offset: 0, y_offset: -5 }, // '''
    Glyph { bitmap_offset: 11, width: 2, height: 5, x_advance: 3, x_offset: 0, y_offset: -5 }, // '('
    Glyph { bitmap_offset: 13, width: 2, height: 5, x_advance: 3, x_offset: 0, y_offset: -5 }, // ')'
    Glyph { bitmap_offset: 15, width: 3, height: 3, x_advance: 4, x_offset: 0, y_offset: -4 }, // '*'
    Glyph { bitmap_offset: 17, width: 3, height: 3, x_advance: 4, x_offset: 0, y_offset: -4 }, // '+'
    Glyph { bitmap_offset: 19, width: 2, height: 2, x_advance: 3, x_offset: 0, y_offset: -1 }, // ','
    Glyph { bitmap_offset: 20, width: 3, height: 1, x_advance: 4, x_offset: 0, y_offset: -3 }, // '-'
    Glyph { bitmap_offset: 21, width: 1, height: 1, x_advance: 2, x_offset: 0, y_offset: -1 }, // '.'
    Glyph { bitmap_offset: 22, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '/'
    Glyph { bitmap_offset: 24, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '0'
    Glyph { bitmap_offset: 26, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '1'
    Glyph { bitmap_offset: 28, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '2'
    Glyph { bitmap_offset: 30, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '3'
    Glyph { bitmap_offset: 32, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '4'
    Glyph { bitmap_offset: 34, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '5'
    Glyph { bitmap_offset: 36, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '6'
    Glyph { bitmap_offset: 38, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '7'
    Glyph { bitmap_offset: 40, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '8'
    Glyph { bitmap_offset: 42, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '9'
    Glyph { bitmap_offset: 44, width: 1, height: 3, x_advance: 2, x_offset: 0, y_offset: -4 }, // ':'
    Glyph { bitmap_offset: 45, width: 2, height: 4, x_advance: 3, x_offset: 0, y_offset: -4 }, // ';'
    Glyph { bitmap_offset: 46, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '<'
    Glyph { bitmap_offset: 48, width: 3, height: 3, x_advance: 4, x_offset: 0, y_offset: -4 }, // '='
    Glyph { bitmap_offset: 50, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '>'
    Glyph { bitmap_offset: 52, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '?'
    Glyph { bitmap_offset: 54, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '@'
    Glyph { bitmap_offset: 56, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'A'
    Glyph { bitmap_offset: 58, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'B'
    Glyph { bitmap_offset: 60, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'C'
    Glyph { bitmap_offset: 62, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'D'
    Glyph { bitmap_offset: 64, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'E'
    Glyph { bitmap_offset: 66, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'F'
    Glyph { bitmap_offset: 68, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'G'
    Glyph { bitmap_offset: 70, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'H'
    Glyph { bitmap_offset: 72, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'I'
    Glyph { bitmap_offset: 74, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'J'
    Glyph { bitmap_offset: 76, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'K'
    Glyph { bitmap_offset: 78, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'L'
    Glyph { bitmap_offset: 80, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'M'
    Glyph { bitmap_offset: 82, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'N'
    Glyph { bitmap_offset: 84, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'O'
    Glyph { bitmap_offset: 86, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'P'
    Glyph { bitmap_offset: 88, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'Q'
    Glyph { bitmap_offset: 90, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'R'
    Glyph { bitmap_offset: 92, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'S'
    Glyph { bitmap_offset: 94, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'T'
    Glyph { bitmap_offset: 96, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'U'
    Glyph { bitmap_offset: 98, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'V'
    Glyph { bitmap_offset: 100, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'W'
    Glyph { bitmap_offset: 102, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'X'
    Glyph { bitmap_offset: 104, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'Y'
    Glyph { bitmap_offset: 106, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'Z'
    Glyph { bitmap_offset: 108, width: 2, height: 5, x_advance: 3, x_offset: 0, y_offset: -5 }, // '['
    Glyph { bitmap_offset: 110, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'backslash'
    Glyph { bitmap_offset: 112, width: 2, height: 5, x_advance: 3, x_offset: 0, y_offset: -5 }, // ']'
    Glyph { bitmap_offset: 114, width: 3, height: 2, x_advance: 4, x_offset: 0, y_offset: -5 }, // '^'
    Glyph { bitmap_offset: 115, width: 3, height: 1, x_advance: 4, x_offset: 0, y_offset: 0 }, // '_'
    Glyph { bitmap_offset: 116, width: 2, height: 2, x_advance: 3, x_offset: 0, y_offset: -5 }, // '`'
    Glyph { bitmap_offset: 117, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'a'
    Glyph { bitmap_offset: 119, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'b'
    Glyph { bitmap_offset: 121, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'c'
    Glyph { bitmap_offset: 123, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'd'
    Glyph { bitmap_offset: 125, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'e'
    Glyph { bitmap_offset: 127, width: 2, height: 5, x_advance: 3, x_offset: 0, y_offset: -5 }, // 'f'
    Glyph { bitmap_offset: 129, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'g'
    Glyph { bitmap_offset: 131, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'h'
    Glyph { bitmap_offset: 133, width: 1, height: 5, x_advance: 2, x_offset: 0, y_offset: -5 }, // 'i'
    Glyph { bitmap_offset: 134, width: 2, height: 6, x_advance: 3, x_offset: 0, y_offset: -5 }, // 'j'
    Glyph { bitmap_offset: 136, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 'k'
    Glyph { bitmap_offset: 138, width: 1, height: 5, x_advance: 2, x_offset: 0, y_offset: -5 }, // 'l'
    Glyph { bitmap_offset: 139, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'm'
    Glyph { bitmap_offset: 141, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'n'
    Glyph { bitmap_offset: 143, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'o'
    Glyph { bitmap_offset: 145, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'p'
    Glyph { bitmap_offset: 147, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'q'
    Glyph { bitmap_offset: 149, width: 2, height: 4, x_advance: 3, x_offset: 0, y_offset: -4 }, // 'r'
    Glyph { bitmap_offset: 150, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 's'
    Glyph { bitmap_offset: 152, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // 't'
    Glyph { bitmap_offset: 154, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'u'
    Glyph { bitmap_offset: 156, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'v'
    Glyph { bitmap_offset: 158, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'w'
    Glyph { bitmap_offset: 160, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'x'
    Glyph { bitmap_offset: 162, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'y'
    Glyph { bitmap_offset: 164, width: 3, height: 4, x_advance: 4, x_offset: 0, y_offset: -4 }, // 'z'
    Glyph { bitmap_offset: 166, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '{'
    Glyph { bitmap_offset: 168, width: 1, height: 5, x_advance: 2, x_offset: 0, y_offset: -5 }, // '|'
    Glyph { bitmap_offset: 169, width: 3, height: 5, x_advance: 4, x_offset: 0, y_offset: -5 }, // '}'
    Glyph { bitmap_offset: 171, width: 3, height: 2, x_advance: 4, x_offset: 0, y_offset: -4 }, // '~'
];
