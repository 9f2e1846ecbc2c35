//! Simulator-wide constants.

/// Width of a simulated physical address in bits.
pub const ADDR_BITS: u32 = 32;

/// Mask selecting the low 32 bits of a wider value.
pub const ADDR_MASK: u64 = 0xffff_ffff;
