use core::fmt;

/// One of the nine card ranks. The declaration order is the *natural*
/// ranking (Six lowest, Ace highest) and fixes the 4-bit packed encoding;
/// [`Rank::trump_ordinal`] gives the alternate ranking used when the card's
/// color is trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Six = 0,
    Seven = 1,
    Eight = 2,
    Nine = 3,
    Ten = 4,
    Jack = 5,
    Queen = 6,
    King = 7,
    Ace = 8,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
    pub const COUNT: usize = 9;

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rank::Six),
            1 => Some(Rank::Seven),
            2 => Some(Rank::Eight),
            3 => Some(Rank::Nine),
            4 => Some(Rank::Ten),
            5 => Some(Rank::Jack),
            6 => Some(Rank::Queen),
            7 => Some(Rank::King),
            8 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position of the rank in the trump ordering
    /// (Jack > Nine > Ace > King > Queen > Ten > Eight > Seven > Six).
    pub const fn trump_ordinal(self) -> u32 {
        match self {
            Rank::Six => 0,
            Rank::Seven => 1,
            Rank::Eight => 2,
            Rank::Nine => 7,
            Rank::Ten => 3,
            Rank::Jack => 8,
            Rank::Queen => 4,
            Rank::King => 5,
            Rank::Ace => 6,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn index_roundtrip() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(Rank::from_index(i), Some(*rank));
            assert_eq!(rank.index(), i);
        }
        assert_eq!(Rank::from_index(9), None);
    }

    #[test]
    fn trump_ordering_puts_jack_then_nine_on_top() {
        assert!(Rank::Jack.trump_ordinal() > Rank::Nine.trump_ordinal());
        assert!(Rank::Nine.trump_ordinal() > Rank::Ace.trump_ordinal());
        assert!(Rank::Ace.trump_ordinal() > Rank::King.trump_ordinal());
        assert_eq!(Rank::Six.trump_ordinal(), 0);
    }

    #[test]
    fn natural_ordering_follows_declaration() {
        assert!(Rank::Six < Rank::Seven);
        assert!(Rank::King < Rank::Ace);
    }
}
