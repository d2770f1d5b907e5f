#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by [`BitWriter`](crate::BitWriter) and [`BitReader`](crate::BitReader).
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitCursorError {
    #[cfg_attr(
        feature = "std",
        error("Bit count must be in the range 1..=32, got {0}")
    )]
    InvalidBitCount(u32),

    /// A whole-byte operation was attempted in the middle of a byte.
    #[cfg_attr(
        feature = "std",
        error("cursor not byte aligned -- len {len}, index {byte_index}, bit offset {bit_offset}")
    )]
    Misaligned {
        len: usize,
        byte_index: usize,
        bit_offset: u8,
    },

    #[cfg_attr(
        feature = "std",
        error(
            "buffer overrun reading {requested_bits} bits -- len {len}, index {byte_index}, bit offset {bit_offset}"
        )
    )]
    Overrun {
        len: usize,
        byte_index: usize,
        bit_offset: u8,
        requested_bits: u32,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitCursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitCursorError::InvalidBitCount(n) => {
                write!(f, "Bit count must be in the range 1..=32, got {}", n)
            }
            BitCursorError::Misaligned {
                len,
                byte_index,
                bit_offset,
            } => write!(
                f,
                "cursor not byte aligned -- len {}, index {}, bit offset {}",
                len, byte_index, bit_offset
            ),
            BitCursorError::Overrun {
                len,
                byte_index,
                bit_offset,
                requested_bits,
            } => write!(
                f,
                "buffer overrun reading {} bits -- len {}, index {}, bit offset {}",
                requested_bits, len, byte_index, bit_offset
            ),
        }
    }
}
