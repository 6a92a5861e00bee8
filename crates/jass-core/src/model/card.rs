use std::fmt;

use crate::model::color::Color;
use crate::model::rank::Rank;
use crate::packed::card;

/// A playing card, stored in its packed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u32);

impl Card {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Card(card::pack(color, rank))
    }

    /// Wraps a packed card, or `None` if the bit pattern is not a card.
    pub const fn of_packed(pk_card: u32) -> Option<Self> {
        if card::is_valid(pk_card) { Some(Card(pk_card)) } else { None }
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn color(self) -> Color {
        card::color(self.0)
    }

    pub const fn rank(self) -> Rank {
        card::rank(self.0)
    }

    /// Whether `self` beats `other` when `trump` is the trump color.
    pub const fn is_better(self, trump: Color, other: Card) -> bool {
        card::is_better(trump, self.0, other.0)
    }

    pub const fn points(self, trump: Color) -> u32 {
        card::points(trump, self.0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color(), self.rank())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
