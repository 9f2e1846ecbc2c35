//! Cache Geometry and Address Decoding.
//!
//! A 32-bit address is split, from most to least significant bit, into
//! `[tag | index | offset]`. The field widths follow from the cache capacity,
//! block size, and associativity and are fixed for the lifetime of a cache.

use crate::common::{ConfigError, ADDR_BITS, ADDR_MASK};

/// Immutable shape of a set-associative cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    capacity: u64,
    block_size: u64,
    associativity: u64,
    sets: u64,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
}

impl CacheGeometry {
    /// Validates the parameters and derives the address field widths.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total data capacity in bytes.
    /// * `block_size` - Line size in bytes.
    /// * `associativity` - Number of ways per set.
    ///
    /// # Errors
    ///
    /// Fails when any parameter is zero or not a power of two, when the
    /// capacity does not hold a whole number of sets, or when the capacity is
    /// larger than the 32-bit address space.
    pub fn new(capacity: u64, block_size: u64, associativity: u64) -> Result<Self, ConfigError> {
        check_pow2("capacity", capacity)?;
        check_pow2("block_size", block_size)?;
        check_pow2("associativity", associativity)?;
        if capacity > 1 << ADDR_BITS {
            return Err(ConfigError::CapacityTooLarge { capacity });
        }

        let set_bytes = block_size
            .checked_mul(associativity)
            .filter(|&bytes| bytes <= capacity && capacity % bytes == 0)
            .ok_or(ConfigError::Indivisible {
                capacity,
                block_size,
                associativity,
            })?;

        let sets = capacity / set_bytes;
        let offset_bits = block_size.trailing_zeros();
        let index_bits = sets.trailing_zeros();

        Ok(Self {
            capacity,
            block_size,
            associativity,
            sets,
            offset_bits,
            index_bits,
            tag_bits: ADDR_BITS - offset_bits - index_bits,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    pub fn associativity(&self) -> usize {
        self.associativity as usize
    }

    pub fn sets(&self) -> usize {
        self.sets as usize
    }

    /// Total number of lines (sets x ways).
    pub fn lines(&self) -> usize {
        (self.sets * self.associativity) as usize
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    pub fn tag_bits(&self) -> u32 {
        self.tag_bits
    }

    /// Returns the tag field of `addr`.
    ///
    /// With 4 bits each of tag, index and offset, `tag(0b1111_0101_0001)`
    /// is `0b1111`.
    pub fn tag(&self, addr: u32) -> u32 {
        ((addr as u64) >> (self.index_bits + self.offset_bits)) as u32
    }

    /// Returns the set index field of `addr`.
    ///
    /// With 4 bits each of tag, index and offset, `index(0b1111_0101_0001)`
    /// is `0b0101`. Always 0 for a fully associative cache.
    pub fn index(&self, addr: u32) -> usize {
        let mask = (1u64 << self.index_bits) - 1;
        (((addr as u64) >> self.offset_bits) & mask) as usize
    }

    /// Returns `addr` with the offset bits cleared.
    pub fn block_address(&self, addr: u32) -> u32 {
        (((addr as u64) >> self.offset_bits) << self.offset_bits & ADDR_MASK) as u32
    }
}

fn check_pow2(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero(field));
    }
    if !value.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Index extraction as a shift-left/shift-right pair on a 64-bit value.
    fn shifted_index(g: &CacheGeometry, addr: u32) -> u64 {
        ((addr as u64) << g.tag_bits() & ADDR_MASK) >> (g.tag_bits() + g.offset_bits())
    }

    #[test]
    fn index_matches_shift_form() {
        let geometries = [
            CacheGeometry::new(64, 16, 1).unwrap(),
            CacheGeometry::new(4096, 64, 4).unwrap(),
            CacheGeometry::new(1 << 16, 4, 2).unwrap(),
            CacheGeometry::new(256, 16, 16).unwrap(),
        ];
        let addrs = [0u32, 1, 0x3f, 0x40, 0xdead_beef, 0x8000_0000, u32::MAX];
        for g in &geometries {
            for &a in &addrs {
                assert_eq!(g.index(a) as u64, shifted_index(g, a), "addr {:#x}", a);
            }
        }
    }

    #[test]
    fn full_width_fields_do_not_overflow() {
        let g = CacheGeometry::new(1 << 32, 1 << 16, 1).unwrap();
        assert_eq!(g.tag_bits(), 0);
        assert_eq!(g.tag(u32::MAX), 0);
        assert_eq!(g.index(u32::MAX), 0xffff);
    }
}
