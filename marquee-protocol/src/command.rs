//! Bus command parsing and encoding.
//!
//! One delivery (a single bus write transaction) carries one command byte
//! followed by its payload. Parsing never fails loudly: malformed or
//! unknown deliveries decode to `None` and the sign carries on.

/// Command byte: set display visibility (payload: 1 boolean byte).
pub const CMD_SET_VISIBILITY: u8 = 0x00;

/// Command byte: append a text chunk to the in-flight message.
pub const CMD_TEXT_CHUNK: u8 = 0x01;

/// Command byte: set scroll speed (payload: 1 byte, 0-100).
pub const CMD_SET_SCROLL_SPEED: u8 = 0x02;

/// Errors that can occur when encoding a command for transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Destination buffer too small for command byte plus payload
    BufferTooSmall,
}

/// A command decoded from one bus delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusCommand<'a> {
    /// Show or hide the scrolling message (nonzero payload = visible)
    SetVisibility(bool),
    /// One chunk of message text, to be fed to the assembler
    TextChunk(&'a [u8]),
    /// Scroll speed, 0 (slowest) to 100 (fastest); clamped downstream
    SetScrollSpeed(u8),
}

impl<'a> BusCommand<'a> {
    /// Decode a command from the raw bytes of one delivery.
    ///
    /// Returns `None` for deliveries shorter than two bytes (no payload)
    /// and for unknown command bytes. Neither case is an error on the
    /// bus; the delivery is simply dropped.
    pub fn parse(delivery: &'a [u8]) -> Option<Self> {
        if delivery.len() < 2 {
            return None;
        }

        let payload = &delivery[1..];
        match delivery[0] {
            CMD_SET_VISIBILITY => Some(BusCommand::SetVisibility(payload[0] != 0)),
            CMD_TEXT_CHUNK => Some(BusCommand::TextChunk(payload)),
            CMD_SET_SCROLL_SPEED => Some(BusCommand::SetScrollSpeed(payload[0])),
            _ => None,
        }
    }

    /// Encode this command into a delivery buffer (controller side).
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        match self {
            BusCommand::SetVisibility(on) => encode_single(buffer, CMD_SET_VISIBILITY, u8::from(*on)),
            BusCommand::SetScrollSpeed(speed) => encode_single(buffer, CMD_SET_SCROLL_SPEED, *speed),
            BusCommand::TextChunk(chunk) => {
                let len = 1 + chunk.len();
                if buffer.len() < len {
                    return Err(EncodeError::BufferTooSmall);
                }
                buffer[0] = CMD_TEXT_CHUNK;
                buffer[1..len].copy_from_slice(chunk);
                Ok(len)
            }
        }
    }
}

fn encode_single(buffer: &mut [u8], command: u8, value: u8) -> Result<usize, EncodeError> {
    if buffer.len() < 2 {
        return Err(EncodeError::BufferTooSmall);
    }
    buffer[0] = command;
    buffer[1] = value;
    Ok(2)
}
