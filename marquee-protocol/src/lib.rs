//! Marquee Sign Bus Protocol
//!
//! This crate defines the I2C-based protocol between an external controller
//! and the marquee sign. The sign acts as an addressed peripheral; each bus
//! write transaction carries one logical command:
//!
//! ```text
//! ┌─────────┬──────────────┐
//! │ COMMAND │ PAYLOAD      │
//! │ 1B      │ 1..N bytes   │
//! └─────────┴──────────────┘
//! ```
//!
//! | Command | Payload          | Effect                                   |
//! |---------|------------------|------------------------------------------|
//! | `0x00`  | 1 byte boolean   | Set display visibility                   |
//! | `0x01`  | 1..N byte chunk  | Append to the in-flight message          |
//! | `0x02`  | 1 byte, 0-100    | Set scroll speed                         |
//!
//! The sign is a fire-and-forget status display: deliveries shorter than
//! two bytes and unknown command bytes are ignored outright, never
//! answered with an error. Long messages arrive as a sequence of `0x01`
//! chunks and are reassembled by [`MessageAssembler`], committing on a
//! trailing newline or when the buffer fills.

#![no_std]
#![deny(unsafe_code)]

pub mod assembler;
pub mod command;

pub use assembler::{Message, MessageAssembler, MAX_MESSAGE_LEN, MAX_MESSAGE_SIZE, MESSAGE_TERMINATOR};
pub use command::{BusCommand, EncodeError, CMD_SET_SCROLL_SPEED, CMD_SET_VISIBILITY, CMD_TEXT_CHUNK};
