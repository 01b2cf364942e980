//! Compile-time configuration for the sign hardware.
//!
//! All state is volatile: the sign powers up with this default message,
//! speed, and color, and forgets everything on reset.

/// I2C peripheral address the controller writes to
pub const I2C_ADDRESS: u16 = 0x13;

/// Panel width in pixels
pub const MATRIX_WIDTH: usize = 40;

/// Panel height in pixels
pub const MATRIX_HEIGHT: usize = 8;

/// Total LED count on the strip
pub const MATRIX_PIXELS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Global brightness applied at flush time (out of 255); WS2812 panels
/// are painfully bright at close range
pub const PANEL_BRIGHTNESS: u8 = 3;

/// Poll interval while the display is hidden
pub const IDLE_POLL_MS: u64 = 100;

/// Largest write transaction the bus task accepts in one listen
pub const BUS_BUFFER_SIZE: usize = 128;

/// Message shown from power-up until the controller replaces it
pub const DEFAULT_MESSAGE: &[u8] = b"Once upon a midnight dreary, while I pondered, weak and weary, \
over many a quaint and curious volume of forgotten lore. While I nodded, nearly napping, suddenly \
there came a tapping, as of some one gently rapping, rapping at my chamber door. \"Tis some \
visitor,\" I muttered, \"tapping at my chamber door. Only this and nothing more.\"";
