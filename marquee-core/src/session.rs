//! The display session: one owned struct holding everything the bus
//! handler and the render tick share.
//!
//! The session owns the committed message, the in-flight assembler, the
//! frame buffer, and the scroll state (offset, palette color, timing,
//! visibility). The bus side calls [`Marquee::apply`] with decoded
//! commands; the render side calls [`Marquee::tick`] once per interval
//! and flushes the frame. Commits replace the message atomically from
//! the tick's point of view: it always sees the old message or the
//! whole new one.

use marquee_protocol::{BusCommand, Message, MessageAssembler, MAX_MESSAGE_LEN};
use smart_leds::{colors, RGB8};

use crate::font::GlyphTable;
use crate::frame::Frame;
use crate::{render, CHAR_GAP};

/// Fastest supported tick interval (speed 100)
pub const MIN_UPDATE_INTERVAL_MS: u32 = 20;

/// Slowest supported tick interval (speed 0)
pub const MAX_UPDATE_INTERVAL_MS: u32 = 500;

/// Tick interval on power-up
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 40;

/// Map a 0-100 speed value onto the tick interval.
///
/// Inverse-linear: 0 is the slowest (maximum interval), 100 the fastest
/// (minimum interval). Values above 100 clamp.
pub fn scroll_interval_ms(speed: u8) -> u32 {
    let speed = u32::from(speed.min(100));
    MAX_UPDATE_INTERVAL_MS - speed * (MAX_UPDATE_INTERVAL_MS - MIN_UPDATE_INTERVAL_MS) / 100
}

/// Scrolling-sign session for a W x H panel
pub struct Marquee<const W: usize, const H: usize> {
    frame: Frame<W, H>,
    font: &'static GlyphTable,
    palette: &'static [RGB8],
    assembler: MessageAssembler,
    message: Message,
    message_width: i32,
    offset: i32,
    color_index: usize,
    visible: bool,
    interval_ms: u32,
}

impl<const W: usize, const H: usize> Marquee<W, H> {
    /// Create a session with an empty message, scrolled in from the
    /// right edge, visible, at the default speed
    pub const fn new(font: &'static GlyphTable, palette: &'static [RGB8]) -> Self {
        Self {
            frame: Frame::new(),
            font,
            palette,
            assembler: MessageAssembler::new(),
            message: Message::new(),
            message_width: 0,
            offset: W as i32,
            color_index: 0,
            visible: true,
            interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }

    /// Replace the active message and restart the scroll from the right
    /// edge. Oversized input truncates at the message capacity.
    pub fn set_message(&mut self, text: &[u8]) {
        self.message.clear();
        let take = text.len().min(MAX_MESSAGE_LEN);
        let _ = self.message.extend_from_slice(&text[..take]);
        self.message_width = self.font.text_width(&self.message);
        self.offset = W as i32;
    }

    /// Apply one decoded bus command
    pub fn apply(&mut self, command: BusCommand<'_>) {
        match command {
            BusCommand::SetVisibility(on) => self.visible = on,
            BusCommand::SetScrollSpeed(speed) => self.interval_ms = scroll_interval_ms(speed),
            BusCommand::TextChunk(chunk) => {
                if let Some(message) = self.assembler.feed_chunk(chunk) {
                    self.set_message(&message);
                }
            }
        }
    }

    /// Render the current scroll position into the frame and advance the
    /// offset one pixel left.
    ///
    /// When the message has scrolled fully past the left edge the offset
    /// wraps back to the right edge (with a small lead-in gap) and the
    /// palette moves to its next color. An empty message has zero width
    /// and wraps as soon as the offset goes negative; nothing divides by
    /// the message width.
    pub fn tick(&mut self) {
        self.frame.clear();

        let color = self
            .palette
            .get(self.color_index)
            .copied()
            .unwrap_or(colors::WHITE);
        render::draw_text(
            &mut self.frame,
            self.font,
            &self.message,
            self.offset,
            H as i32 - 2,
            color,
        );

        self.offset -= 1;
        if self.offset < -self.message_width {
            self.offset = W as i32 + CHAR_GAP;
            self.color_index = (self.color_index + 1) % self.palette.len().max(1);
        }
    }

    /// Blank the frame without touching scroll state (hidden path)
    pub fn blank(&mut self) {
        self.frame.clear();
    }

    /// The frame to flush to the panel
    pub fn frame(&self) -> &Frame<W, H> {
        &self.frame
    }

    /// Whether rendering is enabled
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current tick interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// The committed message bytes
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Cached pixel width of the committed message
    pub fn message_width(&self) -> i32 {
        self.message_width
    }

    /// Current horizontal scroll offset
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Current palette index
    pub fn color_index(&self) -> usize {
        self.color_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_5PX;
    use crate::palette::EMBER;

    type Session = Marquee<16, 8>;

    fn session() -> Session {
        Session::new(&FONT_5PX, &EMBER)
    }

    #[test]
    fn test_power_up_defaults() {
        let session = session();
        assert!(session.is_visible());
        assert_eq!(session.interval_ms(), DEFAULT_UPDATE_INTERVAL_MS);
        assert_eq!(session.offset(), 16);
        assert_eq!(session.color_index(), 0);
        assert!(session.message().is_empty());
    }

    #[test]
    fn test_set_message_computes_width_and_resets_offset() {
        let mut session = session();
        session.tick();
        session.tick();
        assert_eq!(session.offset(), 14);

        session.set_message(b"Ai");
        assert_eq!(session.message(), b"Ai");
        assert_eq!(session.message_width(), 7);
        assert_eq!(session.offset(), 16);
    }

    #[test]
    fn test_tick_renders_at_current_offset() {
        let mut session = session();
        session.set_message(b"T");

        // Walk the message in until the pen reaches x = 0
        for _ in 0..16 {
            session.tick();
        }
        assert_eq!(session.offset(), 0);
        session.tick();

        // 'T' crossbar at the top text row
        let frame = session.frame();
        assert!(frame.pixel(0, 1).is_some_and(|p| p == EMBER[0]));
        assert!(frame.pixel(1, 1).is_some_and(|p| p == EMBER[0]));
        assert!(frame.pixel(2, 1).is_some_and(|p| p == EMBER[0]));
    }

    #[test]
    fn test_wrap_resets_offset_and_advances_color() {
        let mut session = session();
        session.set_message(b"T");
        assert_eq!(session.message_width(), 4);

        // Offset runs 16 down to -5; the tick that moves past
        // -message_width wraps to the right edge plus the lead-in gap
        for _ in 0..(16 + 4 + 1) {
            session.tick();
        }
        assert_eq!(session.offset(), 16 + CHAR_GAP);
        assert_eq!(session.color_index(), 1);
    }

    #[test]
    fn test_color_cycles_back_to_first() {
        let mut session = session();
        session.set_message(b"T");

        let mut wraps = 0;
        let mut ticks = 0;
        while wraps < EMBER.len() {
            let before = session.color_index();
            session.tick();
            if session.color_index() != before {
                wraps += 1;
            }
            ticks += 1;
            assert!(ticks < 1000, "wrap never happened");
        }
        assert_eq!(session.color_index(), 0);
    }

    #[test]
    fn test_empty_message_wraps_without_stalling() {
        let mut session = session();
        session.set_message(b"");
        assert_eq!(session.message_width(), 0);

        for _ in 0..100 {
            session.tick();
            assert!(session.offset() >= -(session.message_width() + CHAR_GAP));
            assert!(session.offset() <= 16 + CHAR_GAP);
        }
    }

    #[test]
    fn test_visibility_holds_scroll_position() {
        let mut session = session();
        session.set_message(b"Hello");
        session.tick();
        session.tick();
        let held = session.offset();

        session.apply(BusCommand::SetVisibility(false));
        assert!(!session.is_visible());
        // The hidden path blanks the frame but never ticks
        session.blank();
        assert!(session.frame().is_blank());
        assert_eq!(session.offset(), held);

        session.apply(BusCommand::SetVisibility(true));
        assert!(session.is_visible());
        assert_eq!(session.offset(), held);
    }

    #[test]
    fn test_chunked_commit_through_commands() {
        let mut session = session();
        session.tick();

        session.apply(BusCommand::TextChunk(b"AB"));
        assert!(session.message().is_empty());

        session.apply(BusCommand::TextChunk(b"CD\n"));
        assert_eq!(session.message(), b"ABCD");
        assert_eq!(session.offset(), 16);
    }

    #[test]
    fn test_speed_command_maps_to_interval() {
        let mut session = session();

        session.apply(BusCommand::SetScrollSpeed(0));
        assert_eq!(session.interval_ms(), MAX_UPDATE_INTERVAL_MS);

        session.apply(BusCommand::SetScrollSpeed(100));
        assert_eq!(session.interval_ms(), MIN_UPDATE_INTERVAL_MS);

        session.apply(BusCommand::SetScrollSpeed(200));
        assert_eq!(session.interval_ms(), MIN_UPDATE_INTERVAL_MS);
    }

    #[test]
    fn test_speed_mapping_is_monotonic() {
        let mut previous = scroll_interval_ms(0);
        for speed in 1..=100 {
            let interval = scroll_interval_ms(speed);
            assert!(interval <= previous, "speed {speed} got slower");
            assert!((MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS).contains(&interval));
            previous = interval;
        }
    }

    #[test]
    fn test_oversized_set_message_truncates() {
        let mut session = session();
        let big = [b'x'; MAX_MESSAGE_LEN + 10];
        session.set_message(&big);
        assert_eq!(session.message().len(), MAX_MESSAGE_LEN);
    }
}
