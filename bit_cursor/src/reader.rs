//! MSB-first bit reader over a borrowed byte slice.
//!
//! # Examples
//!
//! ```rust
//! use bit_cursor::{BitCursor, BitReader};
//!
//! let bytes = [0b1010_0000, 0x12, 0x34];
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.collect(3).unwrap(), 0b101);
//!
//! reader.align_to_next_byte();
//! assert_eq!(reader.collect_word().unwrap(), 0x1234);
//! ```
use crate::bit_ops;
use crate::position::{BitCursor, Position};
use crate::{BitCursorError, String};

/// Read-mode cursor over a fixed byte sequence.
///
/// Unlike [`BitWriter`](crate::BitWriter) there is no staging byte: every
/// byte of the slice is data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: Position,
}

type Result<T> = core::result::Result<T, BitCursorError>;

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bytes,
            pos: Position::start(),
        }
    }

    /// The whole underlying slice, regardless of the cursor.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bits left between the cursor and the end of the slice.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.pos.bit_position())
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_bits() == 0
    }

    /// Aligns to the next byte and returns everything from there to the end.
    ///
    /// The cursor ends up past the last byte, so a second call yields an
    /// empty slice.
    pub fn collect_all(&mut self) -> &'a [u8] {
        self.align_to_next_byte();
        let bytes = self.bytes;
        let rest = bytes.get(self.pos.byte_index..).unwrap_or(&[]);
        self.pos.byte_index = self.pos.byte_index.max(bytes.len());
        rest
    }

    /// Returns the next `n` bytes and advances past them.
    ///
    /// Expects a byte-aligned cursor; the bit offset is neither checked nor
    /// changed.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain. Callers are expected to know
    /// the layout they are reading.
    pub fn deappend(&mut self, n: usize) -> &'a [u8] {
        let bytes = self.bytes;
        let start = self.pos.byte_index;
        let out = &bytes[start..start + n];
        self.pos.byte_index += n;
        out
    }

    /// Like [`deappend`](Self::deappend), decoding the bytes as text.
    /// Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain.
    pub fn deconcat(&mut self, n: usize) -> String {
        String::from_utf8_lossy(self.deappend(n)).into_owned()
    }

    /// Reads `num_bits` bits, most significant first.
    ///
    /// # Errors
    ///
    /// - [`BitCursorError::InvalidBitCount`] unless `num_bits` is in `1..=32`
    /// - [`BitCursorError::Overrun`] if fewer than `num_bits` bits remain
    ///
    /// The cursor does not move on error.
    pub fn collect(&mut self, num_bits: u32) -> Result<u32> {
        bit_ops::validate_bit_count(num_bits)?;
        if self.remaining_bits() < num_bits as usize {
            return Err(self.overrun(num_bits));
        }

        let mut value = 0u32;
        for i in (0..num_bits).rev() {
            let byte = self.bytes[self.pos.byte_index];
            let bit = bit_ops::get_msb_first(byte, self.pos.bit_offset);
            value |= u32::from(bit) << i;
            self.pos.bump_bit();
        }
        Ok(value)
    }

    /// Reads one whole byte. The cursor must sit on a byte boundary.
    ///
    /// # Errors
    ///
    /// [`BitCursorError::Misaligned`] mid-byte, [`BitCursorError::Overrun`]
    /// past the end. The cursor does not move on error.
    pub fn collect_byte(&mut self) -> Result<u8> {
        if !self.pos.is_aligned() {
            return Err(BitCursorError::Misaligned {
                len: self.bytes.len(),
                byte_index: self.pos.byte_index,
                bit_offset: self.pos.bit_offset,
            });
        }
        let byte = *self
            .bytes
            .get(self.pos.byte_index)
            .ok_or_else(|| self.overrun(8))?;
        self.pos.byte_index += 1;
        Ok(byte)
    }

    /// Big-endian: high byte first. Consumes nothing unless both bytes are read.
    pub fn collect_word(&mut self) -> Result<u16> {
        self.atomically(|r| {
            let high = r.collect_byte()?;
            let low = r.collect_byte()?;
            Ok(u16::from(high) << 8 | u16::from(low))
        })
    }

    /// Big-endian: high word first. Consumes nothing unless all four bytes are read.
    pub fn collect_dword(&mut self) -> Result<u32> {
        self.atomically(|r| {
            let high = r.collect_word()?;
            let low = r.collect_word()?;
            Ok(u32::from(high) << 16 | u32::from(low))
        })
    }

    /// Runs `read`, rewinding the cursor if it fails.
    fn atomically<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.pos;
        read(self).inspect_err(|_| self.pos = saved)
    }

    fn overrun(&self, requested_bits: u32) -> BitCursorError {
        BitCursorError::Overrun {
            len: self.bytes.len(),
            byte_index: self.pos.byte_index,
            bit_offset: self.pos.bit_offset,
            requested_bits,
        }
    }
}

impl BitCursor for BitReader<'_> {
    #[inline]
    fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    fn storage(&self) -> &[u8] {
        self.bytes
    }

    /// Skips the rest of a partially read byte. Never checks the length.
    fn align_to_next_byte(&mut self) {
        self.pos.skip_partial_byte();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_reader() {
        let bytes = [1, 2, 3];
        let r = BitReader::new(&bytes);
        assert_eq!(r.position(), Position::start());
        assert_eq!(r.as_slice(), &bytes);
        assert_eq!(r.storage(), &bytes);
        assert_eq!(r.remaining_bits(), 24);
    }

    #[test]
    fn collect_bits_msb_first() -> Result<()> {
        let bytes = [0b1101_0101, 0b1110_0110, 0b1000_0000];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect(1)?, 1);
        assert_eq!(r.collect(16)?, 0xABCD);
        assert_eq!(r.position(), Position { byte_index: 2, bit_offset: 1 });
        assert_eq!(r.collect(7)?, 0);
        assert!(r.is_exhausted());
        Ok(())
    }

    #[test]
    fn collect_full_width() -> Result<()> {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect(32)?, 0xDEAD_BEEF);
        assert_eq!(r.byte_index(), 4);
        assert_eq!(r.bit_offset(), 0);
        Ok(())
    }

    #[test]
    fn collect_rejects_invalid_bit_count() {
        let bytes = [0xFF];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect(0), Err(BitCursorError::InvalidBitCount(0)));
        assert_eq!(r.collect(33), Err(BitCursorError::InvalidBitCount(33)));
        assert_eq!(r.position(), Position::start());
    }

    #[test]
    fn collect_overrun_does_not_move() -> Result<()> {
        let bytes = [0xFF];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect(5)?, 0b11111);
        assert_eq!(
            r.collect(4),
            Err(BitCursorError::Overrun {
                len: 1,
                byte_index: 0,
                bit_offset: 5,
                requested_bits: 4
            })
        );
        assert_eq!(r.bit_offset(), 5);
        assert_eq!(r.collect(3)?, 0b111);
        assert!(r.collect(1).is_err());
        Ok(())
    }

    #[test]
    fn collect_on_empty_slice() {
        let mut r = BitReader::new(&[]);
        assert!(matches!(r.collect(1), Err(BitCursorError::Overrun { .. })));
        assert!(matches!(r.collect_byte(), Err(BitCursorError::Overrun { .. })));
        assert!(!r.has_more_bytes());
    }

    #[test]
    fn collect_byte_requires_alignment() -> Result<()> {
        let bytes = [0b1110_0000, 0x55];
        let mut r = BitReader::new(&bytes);
        r.collect(3)?;
        assert_eq!(
            r.collect_byte(),
            Err(BitCursorError::Misaligned {
                len: 2,
                byte_index: 0,
                bit_offset: 3
            })
        );
        assert_eq!(r.byte_index(), 0);

        r.align_to_next_byte();
        assert_eq!(r.collect_byte()?, 0x55);
        assert_eq!(r.bit_offset(), 0);
        Ok(())
    }

    #[test]
    fn collect_byte_overrun() -> Result<()> {
        let bytes = [0x01];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect_byte()?, 0x01);
        assert!(matches!(
            r.collect_byte(),
            Err(BitCursorError::Overrun { len: 1, byte_index: 1, .. })
        ));
        assert_eq!(r.byte_index(), 1);
        Ok(())
    }

    #[test]
    fn word_and_dword_are_big_endian() -> Result<()> {
        let bytes = [0x12, 0x34, 0x12, 0x34, 0x56, 0x78];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.collect_word()?, 0x1234);
        assert_eq!(r.collect_dword()?, 0x1234_5678);
        Ok(())
    }

    #[test]
    fn failed_word_consumes_nothing() {
        let bytes = [0x12];
        let mut r = BitReader::new(&bytes);
        assert!(matches!(
            r.collect_word(),
            Err(BitCursorError::Overrun { byte_index: 1, .. })
        ));
        assert_eq!(r.byte_index(), 0);
    }

    #[test]
    fn failed_dword_consumes_nothing() -> Result<()> {
        let bytes = [0x12, 0x34, 0x56];
        let mut r = BitReader::new(&bytes);
        assert!(r.collect_dword().is_err());
        assert_eq!(r.byte_index(), 0);
        assert_eq!(r.collect_word()?, 0x1234);
        Ok(())
    }

    #[test]
    fn misaligned_word_reports_first_failure() -> Result<()> {
        let bytes = [0xFF, 0x00, 0x00];
        let mut r = BitReader::new(&bytes);
        r.collect(1)?;
        assert!(matches!(
            r.collect_word(),
            Err(BitCursorError::Misaligned { bit_offset: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn has_more_bytes_treats_last_byte_as_sentinel() -> Result<()> {
        let bytes = [1, 2, 3, 4];
        let mut r = BitReader::new(&bytes);
        for _ in 0..3 {
            assert!(r.has_more_bytes());
            r.collect_byte()?;
        }
        assert_eq!(r.byte_index(), 3);
        assert!(!r.has_more_bytes());
        Ok(())
    }

    #[test]
    fn align_does_not_check_length() -> Result<()> {
        let bytes = [0xFF];
        let mut r = BitReader::new(&bytes);
        r.align_to_next_byte();
        assert_eq!(r.byte_index(), 0);
        r.collect(2)?;
        r.align_to_next_byte();
        assert_eq!(r.position(), Position { byte_index: 1, bit_offset: 0 });
        Ok(())
    }

    #[test]
    fn collect_all_drains() -> Result<()> {
        let bytes = [0b1000_0000, 7, 8, 9];
        let mut r = BitReader::new(&bytes);
        r.collect(1)?;
        assert_eq!(r.collect_all(), &[7, 8, 9]);
        assert_eq!(r.byte_index(), 4);
        assert!(r.collect_all().is_empty());
        Ok(())
    }

    #[test]
    fn deappend_and_deconcat() {
        let bytes = b"\x02hiabc";
        let mut r = BitReader::new(bytes);
        assert_eq!(r.deappend(1), &[2]);
        assert_eq!(r.deconcat(2), "hi");
        assert_eq!(r.deappend(3), b"abc");
        assert_eq!(r.deappend(0), &[] as &[u8]);
        assert_eq!(r.byte_index(), 6);
    }

    #[test]
    fn deconcat_replaces_invalid_utf8() {
        let bytes = [b'o', 0xFF, b'k'];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.deconcat(3), "o\u{FFFD}k");
    }

    #[test]
    #[should_panic]
    fn deappend_past_end_panics() {
        let bytes = [1, 2];
        let mut r = BitReader::new(&bytes);
        r.deappend(3);
    }
}
