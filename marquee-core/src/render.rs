//! Glyph and text rasterization into a frame.
//!
//! The pen position is the baseline origin of a character cell; glyph
//! bitmaps hang off it via their x/y offsets. Everything clips at the
//! frame edges, so callers are free to draw partially (or entirely)
//! off-panel while scrolling.

use smart_leds::RGB8;

use crate::font::GlyphTable;
use crate::frame::Frame;
use crate::CHAR_GAP;

/// Draw one character at pen position `(x, y)` (baseline).
///
/// Returns the glyph's horizontal advance; unsupported codepoints draw
/// nothing and advance zero.
pub fn draw_glyph<const W: usize, const H: usize>(
    frame: &mut Frame<W, H>,
    font: &GlyphTable,
    codepoint: u8,
    x: i32,
    y: i32,
    color: RGB8,
) -> u8 {
    let Some(glyph) = font.glyph(codepoint) else {
        return 0;
    };

    for (col, row) in font.pixels(glyph) {
        frame.set_pixel(
            x + i32::from(glyph.x_offset) + i32::from(col),
            y + i32::from(glyph.y_offset) + i32::from(row),
            color,
        );
    }

    glyph.x_advance
}

/// Draw a message with the pen starting at `x`, baseline at `y`.
///
/// The pen may start left of the panel; individual pixels clip. Drawing
/// stops once the pen passes the right edge.
pub fn draw_text<const W: usize, const H: usize>(
    frame: &mut Frame<W, H>,
    font: &GlyphTable,
    text: &[u8],
    x: i32,
    y: i32,
    color: RGB8,
) {
    let mut pen = x;
    for &codepoint in text {
        if pen >= W as i32 {
            break;
        }
        let advance = draw_glyph(frame, font, codepoint, pen, y, color);
        pen += i32::from(advance) + CHAR_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_5PX;
    use heapless::Vec;

    const INK: RGB8 = RGB8 {
        r: 0xFF,
        g: 0x88,
        b: 0x00,
    };

    fn lit_pixels<const W: usize, const H: usize>(frame: &Frame<W, H>) -> Vec<(i32, i32), 64> {
        let mut lit = Vec::new();
        for y in 0..H {
            for x in 0..W {
                if frame.pixel(x, y) != Some(RGB8 { r: 0, g: 0, b: 0 }) {
                    lit.push((x as i32, y as i32)).unwrap();
                }
            }
        }
        lit
    }

    #[test]
    fn test_draw_glyph_at_baseline() {
        let mut frame = Frame::<8, 8>::new();
        let advance = draw_glyph(&mut frame, &FONT_5PX, b'T', 0, 6, INK);

        assert_eq!(advance, 4);
        assert_eq!(
            &lit_pixels(&frame)[..],
            &[(0, 1), (1, 1), (2, 1), (1, 2), (1, 3), (1, 4), (1, 5)]
        );
    }

    #[test]
    fn test_unsupported_codepoint_draws_nothing() {
        let mut frame = Frame::<8, 8>::new();
        let advance = draw_glyph(&mut frame, &FONT_5PX, b'\n', 0, 6, INK);

        assert_eq!(advance, 0);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_glyph_clips_at_left_edge() {
        let mut frame = Frame::<8, 8>::new();
        // 'T' at x = -2 keeps only its rightmost column stem pixels
        draw_glyph(&mut frame, &FONT_5PX, b'T', -2, 6, INK);

        assert_eq!(&lit_pixels(&frame)[..], &[(0, 1)]);
    }

    #[test]
    fn test_descender_reaches_baseline_row() {
        let mut frame = Frame::<8, 8>::new();
        draw_glyph(&mut frame, &FONT_5PX, b'j', 0, 6, INK);

        let lit = lit_pixels(&frame);
        assert!(lit.contains(&(0, 6)), "descender tail missing: {lit:?}");
    }

    #[test]
    fn test_draw_text_advances_with_gap() {
        let mut frame = Frame::<16, 8>::new();
        draw_text(&mut frame, &FONT_5PX, b"ll", 0, 6, INK);

        // 'l' is a 1x5 bar advancing 2; second bar starts at x = 3
        assert_eq!(
            &lit_pixels(&frame)[..],
            &[
                (0, 1),
                (3, 1),
                (0, 2),
                (3, 2),
                (0, 3),
                (3, 3),
                (0, 4),
                (3, 4),
                (0, 5),
                (3, 5),
            ]
        );
    }

    #[test]
    fn test_draw_text_stops_past_right_edge() {
        let mut frame = Frame::<4, 8>::new();
        // Long text on a tiny panel: must terminate and stay clipped
        draw_text(&mut frame, &FONT_5PX, b"WWWWWWWWWW", 0, 6, INK);

        for (x, y) in lit_pixels(&frame) {
            assert!(x >= 0 && x < 4 && y >= 0 && y < 8);
        }
    }
}
