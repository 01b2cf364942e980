//! WS2812 matrix panel driver.
//!
//! Drives the NeoPixel-style matrix over PIO + DMA. The panel is wired
//! row-major but mounted rotated 180 degrees; the layout mapping and
//! the global brightness scaling both happen here, at flush time, so
//! the renderer never has to know.

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::{brightness, RGB8};

use marquee_core::layout::PanelLayout;
use marquee_core::Frame;

use crate::config::{MATRIX_HEIGHT, MATRIX_PIXELS, MATRIX_WIDTH, PANEL_BRIGHTNESS};

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// The physical panel: strip driver plus wiring layout
pub struct MatrixPanel {
    strip: PioWs2812<'static, PIO0, 0, MATRIX_PIXELS>,
    layout: PanelLayout,
    level: u8,
}

impl MatrixPanel {
    /// Wrap a configured strip driver
    pub fn new(strip: PioWs2812<'static, PIO0, 0, MATRIX_PIXELS>) -> Self {
        Self {
            strip,
            layout: PanelLayout::row_major_reversed(MATRIX_WIDTH, MATRIX_HEIGHT),
            level: PANEL_BRIGHTNESS,
        }
    }

    /// Set the global brightness (0-255) applied at flush time
    pub fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    /// Push a frame to the hardware.
    ///
    /// The await covers the DMA transfer and the WS2812 latch time.
    pub async fn flush(&mut self, frame: &Frame<MATRIX_WIDTH, MATRIX_HEIGHT>) {
        let mut leds = [OFF; MATRIX_PIXELS];
        for y in 0..MATRIX_HEIGHT {
            for x in 0..MATRIX_WIDTH {
                if let (Some(index), Some(color)) =
                    (self.layout.led_index(x, y), frame.pixel(x, y))
                {
                    leds[index] = color;
                }
            }
        }

        let mut scaled = [OFF; MATRIX_PIXELS];
        for (slot, color) in scaled
            .iter_mut()
            .zip(brightness(leds.iter().copied(), self.level))
        {
            *slot = color;
        }

        self.strip.write(&scaled).await;
    }
}
