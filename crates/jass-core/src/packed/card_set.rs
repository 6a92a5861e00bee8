//! 64-bit packed card sets: bit `pk_card` is set iff the card is a member.
//!
//! Each color owns a 16-bit segment (9 used bits, 7 that must stay zero) so
//! that the four colors sit at fixed 16-bit boundaries.

use crate::bits::bits64;
use crate::model::color::Color;
use crate::model::rank::Rank;
use crate::packed::card;

pub const EMPTY: u64 = 0;
pub const ALL_CARDS: u64 = all_cards();

const USED_BITS: u32 = 9;
const UNUSED_BITS: u32 = 7;
const SEGMENT_BITS: u32 = USED_BITS + UNUSED_BITS;

const COLOR_MASKS: [u64; Color::COUNT] = color_masks();
const TRUMP_ABOVE: [[u64; Rank::COUNT]; Color::COUNT] = trump_above_table();

/// True iff every must-be-zero bit of the four color segments is clear.
pub const fn is_valid(pk_set: u64) -> bool {
    let mut start = USED_BITS;
    while start < u64::BITS {
        if bits64::extract(pk_set, start, UNUSED_BITS) != 0 {
            return false;
        }
        start += SEGMENT_BITS;
    }
    true
}

/// The set of same-color cards out-ranking `pk_card` under trump ordering.
pub const fn trump_above(pk_card: u32) -> u64 {
    TRUMP_ABOVE[card::color(pk_card).index()][card::rank(pk_card).index()]
}

pub const fn singleton(pk_card: u32) -> u64 {
    debug_assert!(card::is_valid(pk_card));
    1u64 << pk_card
}

pub const fn is_empty(pk_set: u64) -> bool {
    debug_assert!(is_valid(pk_set));
    pk_set == EMPTY
}

/// Number of cards in the set.
pub const fn size(pk_set: u64) -> u32 {
    debug_assert!(is_valid(pk_set));
    pk_set.count_ones()
}

/// The `index`-th member in ascending packed-card order.
pub const fn get(pk_set: u64, index: u32) -> u32 {
    debug_assert!(is_valid(pk_set));
    debug_assert!(index < size(pk_set));
    let mut rest = pk_set;
    let mut i = 0;
    while i < index {
        rest &= rest - 1;
        i += 1;
    }
    rest.trailing_zeros()
}

pub const fn add(pk_set: u64, pk_card: u32) -> u64 {
    union(pk_set, singleton(pk_card))
}

pub const fn remove(pk_set: u64, pk_card: u32) -> u64 {
    intersection(pk_set, complement(singleton(pk_card)))
}

pub const fn contains(pk_set: u64, pk_card: u32) -> bool {
    intersection(pk_set, singleton(pk_card)) != EMPTY
}

/// Complement relative to the 36 real cards, not the full 64-bit word.
pub const fn complement(pk_set: u64) -> u64 {
    debug_assert!(is_valid(pk_set));
    !pk_set & ALL_CARDS
}

pub const fn union(pk_set1: u64, pk_set2: u64) -> u64 {
    debug_assert!(is_valid(pk_set1) && is_valid(pk_set2));
    pk_set1 | pk_set2
}

pub const fn intersection(pk_set1: u64, pk_set2: u64) -> u64 {
    debug_assert!(is_valid(pk_set1) && is_valid(pk_set2));
    pk_set1 & pk_set2
}

/// Members of `pk_set1` that are not in `pk_set2`.
pub const fn difference(pk_set1: u64, pk_set2: u64) -> u64 {
    intersection(pk_set1, complement(pk_set2))
}

pub const fn subset_of_color(pk_set: u64, color: Color) -> u64 {
    intersection(pk_set, COLOR_MASKS[color.index()])
}

const fn all_cards() -> u64 {
    let masks = color_masks();
    masks[0] | masks[1] | masks[2] | masks[3]
}

const fn color_masks() -> [u64; Color::COUNT] {
    let mut masks = [0u64; Color::COUNT];
    let mut c = 0;
    while c < Color::COUNT {
        masks[c] = bits64::mask(c as u32 * SEGMENT_BITS, USED_BITS);
        c += 1;
    }
    masks
}

const fn trump_above_table() -> [[u64; Rank::COUNT]; Color::COUNT] {
    let mut table = [[0u64; Rank::COUNT]; Color::COUNT];
    let mut c = 0;
    while c < Color::COUNT {
        let color = Color::ALL[c];
        let mut r = 0;
        while r < Rank::COUNT {
            let below = card::pack(color, Rank::ALL[r]);
            let mut above = 0u64;
            let mut r2 = 0;
            while r2 < Rank::COUNT {
                let candidate = card::pack(color, Rank::ALL[r2]);
                if card::is_better(color, candidate, below) {
                    above |= 1u64 << candidate;
                }
                r2 += 1;
            }
            table[c][r] = above;
            r += 1;
        }
        c += 1;
    }
    table
}
