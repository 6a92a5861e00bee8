//! 6-bit packed card encoding: rank in the low 4 bits, color in the next 2.

use crate::bits::bits32;
use crate::model::color::Color;
use crate::model::rank::Rank;

/// Reserved 6-bit code for "no card".
pub const INVALID: u32 = 0b11_1111;

const RANK_START: u32 = 0;
const RANK_SIZE: u32 = 4;
const COLOR_START: u32 = RANK_SIZE;
const COLOR_SIZE: u32 = 2;
const UNUSED_START: u32 = RANK_SIZE + COLOR_SIZE;

/// True iff `pk_card` encodes one of the 36 cards: the rank field holds a
/// real rank and every bit above the 6 used ones is zero.
pub const fn is_valid(pk_card: u32) -> bool {
    let rank = bits32::extract(pk_card, RANK_START, RANK_SIZE);
    let rest = bits32::extract(pk_card, UNUSED_START, u32::BITS - UNUSED_START);
    (rank as usize) < Rank::COUNT && rest == 0
}

pub const fn pack(color: Color, rank: Rank) -> u32 {
    bits32::pack(&[(rank.index() as u32, RANK_SIZE), (color.index() as u32, COLOR_SIZE)])
}

pub const fn color(pk_card: u32) -> Color {
    debug_assert!(is_valid(pk_card));
    match Color::from_index(bits32::extract(pk_card, COLOR_START, COLOR_SIZE) as usize) {
        Some(color) => color,
        // a 2-bit field cannot index past Color::COUNT
        None => unreachable!(),
    }
}

pub const fn rank(pk_card: u32) -> Rank {
    debug_assert!(is_valid(pk_card));
    match Rank::from_index(bits32::extract(pk_card, RANK_START, RANK_SIZE) as usize) {
        Some(rank) => rank,
        None => panic!("invalid packed card"),
    }
}

/// True iff `pk_left` beats `pk_right` given the trump color.
///
/// Same color: trump ordering when that color is trump, natural ordering
/// otherwise. Different colors: the left card wins iff it is trump. Two
/// different non-trump colors are not comparable and the left card never
/// wins; callers only rely on this between cards that actually compete for
/// a trick.
pub const fn is_better(trump: Color, pk_left: u32, pk_right: u32) -> bool {
    let left_color = color(pk_left);
    let right_color = color(pk_right);
    let left_is_trump = left_color.index() == trump.index();
    if left_color.index() == right_color.index() {
        if left_is_trump {
            rank(pk_left).trump_ordinal() > rank(pk_right).trump_ordinal()
        } else {
            rank(pk_left).index() > rank(pk_right).index()
        }
    } else {
        left_is_trump
    }
}

/// Point value of a card given the trump color.
///
/// The Ten and King are the only ranks whose value depends on trump; the
/// trump Jack and Nine rank highest but carry no bonus.
pub const fn points(trump: Color, pk_card: u32) -> u32 {
    let is_trump = color(pk_card).index() == trump.index();
    match rank(pk_card) {
        Rank::Six | Rank::Seven | Rank::Eight => 0,
        Rank::Nine => 4,
        Rank::Ten => {
            if is_trump {
                14
            } else {
                0
            }
        }
        Rank::Jack => 11,
        Rank::Queen => 10,
        Rank::King => {
            if is_trump {
                20
            } else {
                2
            }
        }
        Rank::Ace => 3,
    }
}
