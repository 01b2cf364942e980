//! Scroll color palette.
//!
//! One full scroll-through advances the palette by one entry, so the
//! color change doubles as a visible "message restarted" cue.

use smart_leds::RGB8;

/// Default sign palette: red through amber, cycled per scroll-through
pub static EMBER: [RGB8; 3] = [
    RGB8 {
        r: 0xFF,
        g: 0x00,
        b: 0x00,
    },
    RGB8 {
        r: 0xFF,
        g: 0x55,
        b: 0x00,
    },
    RGB8 {
        r: 0xFF,
        g: 0x88,
        b: 0x00,
    },
];
