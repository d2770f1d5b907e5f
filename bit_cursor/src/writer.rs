//! Growable MSB-first bit writer.
//!
//! # Examples
//!
//! ```rust
//! use bit_cursor::{BitCursor, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.emit(0b101, 3).unwrap();
//! assert_eq!(writer.buffer(), &[0b1010_0000]);
//!
//! writer.align_to_next_byte();
//! writer.emit_word(0x1234);
//! assert_eq!(writer.buffer(), &[0b1010_0000, 0x12, 0x34]);
//! ```
use crate::bit_ops;
use crate::position::{BitCursor, Position};
use crate::reader::BitReader;
use crate::{BitCursorError, Vec};

/// Write-mode cursor over an owned, growing byte buffer.
///
/// The backing storage always ends in one zero "staging" byte that receives
/// the next bits, so `storage().len() == byte_index() + 1` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitWriter {
    bytes: Vec<u8>,
    pos: Position,
}

type Result<T> = core::result::Result<T, BitCursorError>;

impl BitWriter {
    /// Creates an empty writer holding only the staging byte.
    ///
    /// ```
    /// use bit_cursor::{BitCursor, BitWriter};
    ///
    /// let writer = BitWriter::new();
    /// assert!(writer.buffer().is_empty());
    /// assert_eq!(writer.storage(), &[0]);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty writer with room for `capacity` bytes before the
    /// backing vector has to reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut bytes = Vec::with_capacity(capacity.max(1));
        bytes.push(0);
        BitWriter {
            bytes,
            pos: Position::start(),
        }
    }

    /// The committed content: everything written so far.
    ///
    /// The staging byte is left out at a byte boundary and included while it
    /// holds a partially written byte. Unwritten bits of that byte read as 0.
    pub fn buffer(&self) -> &[u8] {
        let staged = usize::from(self.pos.bit_offset == 0);
        &self.bytes[..self.bytes.len() - staged]
    }

    /// Consumes the writer and returns the committed content.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.pos.bit_offset == 0 {
            self.bytes.pop();
        }
        self.bytes
    }

    /// A reader positioned at the start of the committed content.
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(self.buffer())
    }

    /// Total number of bits written, padding bits included.
    #[inline]
    pub fn bits_written(&self) -> usize {
        self.pos.bit_position()
    }

    /// Appends whole bytes after the committed content.
    ///
    /// # Errors
    ///
    /// Returns [`BitCursorError::Misaligned`] if a byte is partially written;
    /// call [`align_to_next_byte`](BitCursor::align_to_next_byte) first.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.pos.is_aligned() {
            return Err(self.misaligned());
        }
        self.bytes.pop();
        self.bytes.extend_from_slice(bytes);
        self.bytes.push(0);
        self.pos.byte_index += bytes.len();
        Ok(())
    }

    /// Writes the low `num_bits` bits of `value`, most significant first.
    ///
    /// Higher bits of `value` are ignored. A new staging byte is appended
    /// each time a byte fills up.
    ///
    /// # Errors
    ///
    /// Returns [`BitCursorError::InvalidBitCount`] unless `num_bits` is in
    /// `1..=32`. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_cursor::BitWriter;
    ///
    /// let mut writer = BitWriter::new();
    /// writer.emit(0xF, 4).unwrap();
    /// writer.emit(0x0, 4).unwrap();
    /// writer.emit(0x1, 1).unwrap();
    /// assert_eq!(writer.buffer(), &[0xF0, 0x80]);
    /// assert!(writer.emit(1, 0).is_err());
    /// ```
    pub fn emit(&mut self, value: u32, num_bits: u32) -> Result<()> {
        bit_ops::validate_bit_count(num_bits)?;
        for i in (0..num_bits).rev() {
            let slot = &mut self.bytes[self.pos.byte_index];
            bit_ops::set_msb_first(slot, self.pos.bit_offset, bit_ops::bit_of(value, i));
            if self.pos.bump_bit() {
                self.bytes.push(0);
            }
        }
        Ok(())
    }

    /// Stores `value` in the current byte and moves to the next one.
    ///
    /// This does not check alignment. Pending bits of a partially written
    /// byte are overwritten, so align before switching from bit-level
    /// writes to byte writes.
    pub fn emit_byte(&mut self, value: u8) {
        self.bytes[self.pos.byte_index] = value;
        self.bytes.push(0);
        self.pos.byte_index += 1;
        self.pos.bit_offset = 0;
    }

    /// Big-endian: high byte first.
    pub fn emit_word(&mut self, value: u16) {
        self.emit_byte((value >> 8) as u8);
        self.emit_byte(value as u8);
    }

    /// Big-endian: high word first.
    pub fn emit_dword(&mut self, value: u32) {
        self.emit_word((value >> 16) as u16);
        self.emit_word(value as u16);
    }

    fn misaligned(&self) -> BitCursorError {
        BitCursorError::Misaligned {
            len: self.bytes.len(),
            byte_index: self.pos.byte_index,
            bit_offset: self.pos.bit_offset,
        }
    }
}

impl BitCursor for BitWriter {
    #[inline]
    fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    fn storage(&self) -> &[u8] {
        &self.bytes
    }

    /// Leaves the rest of a partial byte as zero padding and stages a new byte.
    fn align_to_next_byte(&mut self) {
        if self.pos.skip_partial_byte() {
            self.bytes.push(0);
        }
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
