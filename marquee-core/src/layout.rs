//! Logical-to-physical LED index mapping.
//!
//! The matrix is wired row-major, but the panel is mounted rotated 180
//! degrees, so the first LED on the strip sits at the logical
//! bottom-right corner. The mapping keeps that detail out of the
//! renderer: drawing code works in logical coordinates and the flush
//! path asks the layout where each pixel lands on the strip.

/// Maps logical panel coordinates to LED strip indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelLayout {
    width: usize,
    height: usize,
    reversed: bool,
}

impl PanelLayout {
    /// Row-major layout with the first LED at logical (0, 0)
    pub const fn row_major(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            reversed: false,
        }
    }

    /// Row-major layout for a panel mounted rotated 180 degrees:
    /// logical (x, y) lands at physical (width-1-x, height-1-y)
    pub const fn row_major_reversed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            reversed: true,
        }
    }

    /// Total number of LEDs on the strip
    pub const fn led_count(&self) -> usize {
        self.width * self.height
    }

    /// Strip index for a logical coordinate; `None` off-panel
    pub const fn led_index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (x, y) = if self.reversed {
            (self.width - 1 - x, self.height - 1 - y)
        } else {
            (x, y)
        };
        Some(y * self.width + x)
    }
}
