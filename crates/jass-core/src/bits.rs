//! Checked bit-field primitives over 32- and 64-bit words.
//!
//! Every packed encoding in this crate (cards, card sets, scores, tricks) is
//! built and read exclusively through these functions, which keeps the
//! "unused bits are always zero" invariant true by construction. Arguments
//! are validated eagerly; a bad range or an oversized value is a programming
//! error and panics.

pub mod bits32 {
    /// Mask covering the bits from `start` (inclusive) to `start + size`
    /// (exclusive).
    ///
    /// # Panics
    /// Panics when the range does not fit in a 32-bit word.
    pub const fn mask(start: u32, size: u32) -> u32 {
        assert!(start <= u32::BITS && size <= u32::BITS - start, "bit range exceeds 32-bit word");
        if size == 0 {
            return 0;
        }
        if size == u32::BITS {
            return u32::MAX;
        }
        ((1u32 << size) - 1) << start
    }

    /// The `size`-bit field of `bits` starting at `start`, shifted down to
    /// the low-order bits.
    ///
    /// # Panics
    /// Panics when the range does not fit in a 32-bit word.
    pub const fn extract(bits: u32, start: u32, size: u32) -> u32 {
        if size == 0 {
            let _ = mask(start, size);
            return 0;
        }
        (bits & mask(start, size)) >> start
    }

    /// Packs the given `(value, size)` fields into one word, the first field
    /// in the low-order bits.
    ///
    /// # Panics
    /// Panics when the fields together exceed 32 bits, when a field width is
    /// 0 or 32, or when a value does not fit in its declared width.
    pub const fn pack(fields: &[(u32, u32)]) -> u32 {
        let mut packed = 0u32;
        let mut offset = 0u32;
        let mut i = 0;
        while i < fields.len() {
            let (value, size) = fields[i];
            assert!(size >= 1 && size < u32::BITS, "field width must be in 1..32");
            assert!(u32::BITS - value.leading_zeros() <= size, "value too wide for its field");
            assert!(offset + size <= u32::BITS, "fields exceed 32-bit word");
            packed |= value << offset;
            offset += size;
            i += 1;
        }
        packed
    }
}

pub mod bits64 {
    /// 64-bit variant of [`bits32::mask`](super::bits32::mask).
    ///
    /// # Panics
    /// Panics when the range does not fit in a 64-bit word.
    pub const fn mask(start: u32, size: u32) -> u64 {
        assert!(start <= u64::BITS && size <= u64::BITS - start, "bit range exceeds 64-bit word");
        if size == 0 {
            return 0;
        }
        if size == u64::BITS {
            return u64::MAX;
        }
        ((1u64 << size) - 1) << start
    }

    /// 64-bit variant of [`bits32::extract`](super::bits32::extract).
    ///
    /// # Panics
    /// Panics when the range does not fit in a 64-bit word.
    pub const fn extract(bits: u64, start: u32, size: u32) -> u64 {
        if size == 0 {
            let _ = mask(start, size);
            return 0;
        }
        (bits & mask(start, size)) >> start
    }

    /// 64-bit variant of [`bits32::pack`](super::bits32::pack).
    ///
    /// # Panics
    /// Panics when the fields together exceed 64 bits, when a field width is
    /// 0 or 64, or when a value does not fit in its declared width.
    pub const fn pack(fields: &[(u64, u32)]) -> u64 {
        let mut packed = 0u64;
        let mut offset = 0u32;
        let mut i = 0;
        while i < fields.len() {
            let (value, size) = fields[i];
            assert!(size >= 1 && size < u64::BITS, "field width must be in 1..64");
            assert!(u64::BITS - value.leading_zeros() <= size, "value too wide for its field");
            assert!(offset + size <= u64::BITS, "fields exceed 64-bit word");
            packed |= value << offset;
            offset += size;
            i += 1;
        }
        packed
    }
}

#[cfg(test)]
mod tests {
    use super::{bits32, bits64};

    #[test]
    fn mask_covers_requested_range() {
        assert_eq!(bits32::mask(0, 4), 0b1111);
        assert_eq!(bits32::mask(4, 2), 0b11_0000);
        assert_eq!(bits32::mask(0, 32), u32::MAX);
        assert_eq!(bits32::mask(32, 0), 0);
        assert_eq!(bits64::mask(0, 64), u64::MAX);
        assert_eq!(bits64::mask(60, 4), 0xF000_0000_0000_0000);
    }

    #[test]
    fn extract_reads_back_fields() {
        let word = bits32::pack(&[(0b101, 3), (0b11, 2)]);
        assert_eq!(bits32::extract(word, 0, 3), 0b101);
        assert_eq!(bits32::extract(word, 3, 2), 0b11);
        assert_eq!(bits32::extract(word, 5, 27), 0);
    }

    #[test]
    fn pack_places_first_field_lowest() {
        assert_eq!(bits32::pack(&[(1, 4), (1, 4)]), 0b0001_0001);
        assert_eq!(bits64::pack(&[(0xFF, 8), (1, 1)]), 0x1FF);
    }

    #[test]
    #[should_panic(expected = "bit range exceeds 32-bit word")]
    fn mask_rejects_range_past_word_end() {
        bits32::mask(30, 3);
    }

    #[test]
    #[should_panic(expected = "value too wide for its field")]
    fn pack_rejects_oversized_value() {
        bits32::pack(&[(0b100, 2)]);
    }

    #[test]
    #[should_panic(expected = "field width must be in 1..32")]
    fn pack_rejects_zero_width_field() {
        bits32::pack(&[(0, 0)]);
    }

    #[test]
    #[should_panic(expected = "field width must be in 1..64")]
    fn pack64_rejects_full_width_field() {
        bits64::pack(&[(1, 64)]);
    }
}
