use std::fmt;

use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::color::Color;
use crate::model::ids::PlayerId;
use crate::packed::trick;

/// A trick in progress, stored in its packed form. A `Trick` always
/// wraps a valid packed trick.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trick(u32);

impl Trick {
    pub const fn first_empty(trump: Color, first_player: PlayerId) -> Self {
        Trick(trick::first_empty(trump, first_player))
    }

    pub const fn of_packed(pk_trick: u32) -> Option<Self> {
        if trick::is_valid(pk_trick) { Some(Trick(pk_trick)) } else { None }
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    /// The empty trick following this full one, or `None` after the
    /// last trick of the turn.
    pub const fn next_empty(self) -> Option<Self> {
        let next = trick::next_empty(self.0);
        if next == trick::INVALID { None } else { Some(Trick(next)) }
    }

    pub const fn is_empty(self) -> bool {
        trick::is_empty(self.0)
    }

    pub const fn is_full(self) -> bool {
        trick::is_full(self.0)
    }

    pub const fn is_last(self) -> bool {
        trick::is_last(self.0)
    }

    pub const fn size(self) -> u32 {
        trick::size(self.0)
    }

    pub const fn trump(self) -> Color {
        trick::trump(self.0)
    }

    pub const fn first_player(self) -> PlayerId {
        trick::first_player(self.0)
    }

    pub const fn player(self, position: u32) -> PlayerId {
        trick::player(self.0, position)
    }

    pub const fn index(self) -> u32 {
        trick::index(self.0)
    }

    pub const fn card(self, position: u32) -> Card {
        match Card::of_packed(trick::card(self.0, position)) {
            Some(card) => card,
            None => panic!("trick position out of range"),
        }
    }

    #[must_use]
    pub const fn with_added_card(self, card: Card) -> Self {
        Trick(trick::with_added_card(self.0, card.packed()))
    }

    pub const fn base_color(self) -> Color {
        trick::base_color(self.0)
    }

    pub const fn playable_cards(self, hand: CardSet) -> CardSet {
        match CardSet::of_packed(trick::playable_cards(self.0, hand.packed())) {
            Some(set) => set,
            None => panic!("playable cards left padding bits set"),
        }
    }

    pub const fn points(self) -> u32 {
        trick::points(self.0)
    }

    pub const fn winning_player(self) -> PlayerId {
        trick::winning_player(self.0)
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trick {} led by {}:", self.index(), self.first_player())?;
        for position in 0..self.size() {
            write!(f, " {}", self.card(position))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Trick;
    use crate::model::card::Card;
    use crate::model::color::Color;
    use crate::model::ids::PlayerId;
    use crate::model::rank::Rank;
    use crate::packed::trick;

    #[test]
    fn of_packed_rejects_invalid_tricks() {
        assert_eq!(Trick::of_packed(trick::INVALID), None);
        let empty = Trick::first_empty(Color::Club, PlayerId::Player2);
        assert_eq!(Trick::of_packed(empty.packed()), Some(empty));
    }

    #[test]
    fn play_through_a_full_trick() {
        let mut t = Trick::first_empty(Color::Spade, PlayerId::Player4);
        for rank in [Rank::Six, Rank::Nine, Rank::Jack, Rank::Ace] {
            t = t.with_added_card(Card::new(Color::Heart, rank));
        }
        assert!(t.is_full());
        assert_eq!(t.base_color(), Color::Heart);
        // no trump played, highest heart wins
        assert_eq!(t.winning_player(), PlayerId::Player3);
        let next = t.next_empty().unwrap();
        assert_eq!(next.index(), 1);
        assert_eq!(next.first_player(), PlayerId::Player3);
    }

    #[test]
    fn display_shows_leader_and_cards() {
        let t = Trick::first_empty(Color::Spade, PlayerId::Player1)
            .with_added_card(Card::new(Color::Heart, Rank::Six));
        assert_eq!(t.to_string(), "trick 0 led by player 1: H6");
    }
}
