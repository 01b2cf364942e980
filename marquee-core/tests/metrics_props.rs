//! Property tests tying text metrics to the renderer.

use marquee_core::font::FONT_5PX;
use marquee_core::render::draw_text;
use marquee_core::{Frame, CHAR_GAP};
use proptest::prelude::*;

fn supported_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0x20u8..=0x7E, 0..64)
}

proptest! {
    /// Concatenation splits the width around exactly one inter-glyph gap.
    #[test]
    fn width_is_additive_around_the_gap(a in supported_text(), b in supported_text()) {
        let mut joined = a.clone();
        joined.extend_from_slice(&b);

        let lhs = FONT_5PX.text_width(&joined);
        let rhs = if a.is_empty() || b.is_empty() {
            FONT_5PX.text_width(&a) + FONT_5PX.text_width(&b)
        } else {
            FONT_5PX.text_width(&a) + CHAR_GAP + FONT_5PX.text_width(&b)
        };
        prop_assert_eq!(lhs, rhs);
    }

    /// Width never goes negative and bounds the per-glyph advances.
    #[test]
    fn width_is_nonnegative(text in supported_text()) {
        prop_assert!(FONT_5PX.text_width(&text) >= 0);
    }

    /// Rendering at any offset stays inside the frame (clipping policy),
    /// and anything lit sits in the vertical text band.
    #[test]
    fn render_clips_at_any_offset(text in supported_text(), offset in -500i32..500) {
        let mut frame = Frame::<40, 8>::new();
        draw_text(&mut frame, &FONT_5PX, &text, offset, 6, RGB);

        for y in 0..8 {
            for x in 0..40 {
                if frame.pixel(x, y) != frame_off() {
                    // Baseline 6, tallest glyph rises 5, descenders drop 1
                    prop_assert!((1..=6).contains(&y));
                }
            }
        }
    }
}

const RGB: smart_leds::RGB8 = smart_leds::RGB8 {
    r: 0xFF,
    g: 0x55,
    b: 0x00,
};

fn frame_off() -> Option<smart_leds::RGB8> {
    Some(smart_leds::RGB8 { r: 0, g: 0, b: 0 })
}
