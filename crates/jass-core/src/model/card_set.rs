use std::fmt;

use crate::model::card::Card;
use crate::model::color::Color;
use crate::packed::card_set;

/// A set of cards, stored in its packed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const EMPTY: CardSet = CardSet(card_set::EMPTY);
    pub const ALL: CardSet = CardSet(card_set::ALL_CARDS);

    /// Wraps a packed set, or `None` if any padding bit is set.
    pub const fn of_packed(pk_set: u64) -> Option<Self> {
        if card_set::is_valid(pk_set) { Some(CardSet(pk_set)) } else { None }
    }

    pub const fn packed(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        card_set::is_empty(self.0)
    }

    pub const fn size(self) -> u32 {
        card_set::size(self.0)
    }

    /// The `index`-th card of the set, in increasing packed order.
    pub const fn get(self, index: u32) -> Card {
        match Card::of_packed(card_set::get(self.0, index)) {
            Some(card) => card,
            None => panic!("card set index out of range"),
        }
    }

    #[must_use]
    pub const fn add(self, card: Card) -> Self {
        CardSet(card_set::add(self.0, card.packed()))
    }

    #[must_use]
    pub const fn remove(self, card: Card) -> Self {
        CardSet(card_set::remove(self.0, card.packed()))
    }

    pub const fn contains(self, card: Card) -> bool {
        card_set::contains(self.0, card.packed())
    }

    pub const fn complement(self) -> Self {
        CardSet(card_set::complement(self.0))
    }

    pub const fn union(self, other: Self) -> Self {
        CardSet(card_set::union(self.0, other.0))
    }

    pub const fn intersection(self, other: Self) -> Self {
        CardSet(card_set::intersection(self.0, other.0))
    }

    pub const fn difference(self, other: Self) -> Self {
        CardSet(card_set::difference(self.0, other.0))
    }

    pub const fn subset_of_color(self, color: Color) -> Self {
        CardSet(card_set::subset_of_color(self.0, color))
    }

    pub fn iter(self) -> impl Iterator<Item = Card> {
        (0..self.size()).map(move |i| self.get(i))
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(CardSet::EMPTY, CardSet::add)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
