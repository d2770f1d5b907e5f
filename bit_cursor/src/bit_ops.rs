use crate::BitCursorError;

/// Widest value a single bit-level emit or collect may carry.
pub const MAX_BIT_COUNT: u32 = 32;

#[inline(always)]
pub(crate) fn validate_bit_count(num_bits: u32) -> Result<(), BitCursorError> {
    if (1..=MAX_BIT_COUNT).contains(&num_bits) {
        Ok(())
    } else {
        Err(BitCursorError::InvalidBitCount(num_bits))
    }
}

/// Bit `i` of `value`, counted from the least significant end.
#[inline(always)]
pub(crate) fn bit_of(value: u32, i: u32) -> u8 {
    ((value >> i) & 1) as u8
}

/// ORs `bit` into the slot `bit_offset` of `byte`, where slot 0 is the MSB.
#[inline(always)]
pub(crate) fn set_msb_first(byte: &mut u8, bit_offset: u8, bit: u8) {
    debug_assert!(bit_offset < 8);
    *byte |= (bit & 1) << (7 - bit_offset);
}

/// Reads the slot `bit_offset` of `byte`, where slot 0 is the MSB.
#[inline(always)]
pub(crate) fn get_msb_first(byte: u8, bit_offset: u8) -> u8 {
    debug_assert!(bit_offset < 8);
    (byte >> (7 - bit_offset)) & 1
}
