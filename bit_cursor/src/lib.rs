//! # bit_cursor
//!
//! A `no_std` compatible MSB-first bit stream over a byte buffer.
//!
//! [`BitWriter`] appends values of 1 to 32 bits (or whole bytes, words and
//! double words) to a buffer that grows one byte at a time. [`BitReader`]
//! walks a fixed slice with the same byte/bit cursor and pulls the values
//! back out.
//!
//! ```rust
//! use bit_cursor::{BitCursor, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.emit(0b101, 3).unwrap();
//! writer.emit(0x3FF, 10).unwrap();
//! writer.align_to_next_byte();
//! writer.emit_dword(0x1234_5678);
//!
//! let mut reader = writer.reader();
//! assert_eq!(reader.collect(3).unwrap(), 0b101);
//! assert_eq!(reader.collect(10).unwrap(), 0x3FF);
//! reader.align_to_next_byte();
//! assert_eq!(reader.collect_dword().unwrap(), 0x1234_5678);
//! ```
//!
//! ## Wire format
//!
//! The output is raw and unframed: no header, length prefix or magic.
//! Padding bits left by aligning are zero.
//!
//! ```rust
//! use bit_cursor::{BitCursor, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.emit(1, 1).unwrap();
//! writer.align_to_next_byte();
//! writer.emit_word(0xABCD);
//! assert_eq!(writer.into_bytes(), vec![0x80, 0xAB, 0xCD]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{string::String, vec::Vec};

pub mod error;
pub use error::BitCursorError;

mod bit_ops;
pub use bit_ops::MAX_BIT_COUNT;

pub mod position;
pub use position::{BitCursor, Position};

pub mod reader;
pub use reader::BitReader;

pub mod writer;
pub use writer::BitWriter;
