//! Cursor position and the interface shared by the writer and the reader.

/// Location of the next bit to be written or read.
///
/// `bit_offset` 0 addresses the most significant bit of the byte at
/// `byte_index`. An offset of 8 means that byte is exhausted; the cursors in
/// this crate normalize it away immediately, so it is only ever observed
/// through [`Position::is_aligned`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub byte_index: usize,
    pub bit_offset: u8,
}

impl Position {
    #[inline]
    pub const fn start() -> Self {
        Position {
            byte_index: 0,
            bit_offset: 0,
        }
    }

    /// True at a byte boundary (offset 0, or the pre-normalization 8).
    #[inline]
    pub const fn is_aligned(self) -> bool {
        self.bit_offset == 0 || self.bit_offset == 8
    }

    /// Number of bits before this position.
    #[inline]
    pub const fn bit_position(self) -> usize {
        self.byte_index * 8 + self.bit_offset as usize
    }

    /// Moves past the current byte. Returns `true` if the cursor actually moved.
    #[inline]
    pub(crate) fn skip_partial_byte(&mut self) -> bool {
        if self.bit_offset == 0 {
            return false;
        }
        self.byte_index += 1;
        self.bit_offset = 0;
        true
    }

    /// Consumes one bit. Returns `true` when that filled the byte and the
    /// cursor wrapped to the next one.
    #[inline]
    pub(crate) fn bump_bit(&mut self) -> bool {
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.byte_index += 1;
            self.bit_offset = 0;
            true
        } else {
            false
        }
    }
}

/// Read-only cursor bookkeeping common to [`BitWriter`](crate::BitWriter)
/// and [`BitReader`](crate::BitReader).
///
/// The two implementations differ in how they align: the writer grows its
/// storage by a fresh staging byte, the reader assumes the bytes exist.
pub trait BitCursor {
    fn position(&self) -> Position;

    /// The full backing bytes, staging byte included for a writer.
    fn storage(&self) -> &[u8];

    /// Skips to the next byte boundary. No-op when already aligned.
    fn align_to_next_byte(&mut self);

    #[inline]
    fn byte_index(&self) -> usize {
        self.position().byte_index
    }

    #[inline]
    fn bit_offset(&self) -> u8 {
        self.position().bit_offset
    }

    #[inline]
    fn is_aligned(&self) -> bool {
        self.position().is_aligned()
    }

    /// `true` while `byte_index < storage().len() - 1`.
    ///
    /// The last byte is treated as a sentinel in both modes: on a writer it
    /// is the staging byte, on a reader wrapping `n` bytes this turns false
    /// once the cursor reaches byte `n - 1`.
    #[inline]
    fn has_more_bytes(&self) -> bool {
        self.byte_index() + 1 < self.storage().len()
    }
}
