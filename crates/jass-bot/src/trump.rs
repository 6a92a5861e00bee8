//! Trump selection heuristic shared by the simulated player.

use jass_core::game::TrumpChoice;
use jass_core::model::{CardSet, Color};

/// The minimum strength below which a hand should pass the trump
/// decision rather than commit to its best color.
pub const MIN_TRUMP_STRENGTH: u32 = 16;

/// The strength of `color` as a trump candidate: the sum of the trump
/// ordinals of the hand's cards in that color, so that jacks and nines
/// weigh the most.
pub fn color_strength(hand: CardSet, color: Color) -> u32 {
    hand.subset_of_color(color)
        .iter()
        .map(|card| card.rank().trump_ordinal())
        .sum()
}

/// Picks the strongest color of the hand, or passes when allowed and
/// no color is convincing.
pub fn recommend_trump(hand: CardSet, can_pass: bool) -> TrumpChoice {
    let mut best_color = Color::Spade;
    let mut best_strength = color_strength(hand, best_color);
    for color in [Color::Heart, Color::Diamond, Color::Club] {
        let strength = color_strength(hand, color);
        if strength > best_strength {
            best_color = color;
            best_strength = strength;
        }
    }
    if can_pass && best_strength < MIN_TRUMP_STRENGTH {
        TrumpChoice::Pass
    } else {
        TrumpChoice::Trump(best_color)
    }
}

#[cfg(test)]
mod tests {
    use super::{color_strength, recommend_trump};
    use jass_core::game::TrumpChoice;
    use jass_core::model::{Card, CardSet, Color, Rank};

    fn hand(cards: &[(Color, Rank)]) -> CardSet {
        cards.iter().map(|&(c, r)| Card::new(c, r)).collect()
    }

    #[test]
    fn jack_and_nine_dominate_the_strength() {
        let strong = hand(&[(Color::Heart, Rank::Jack), (Color::Heart, Rank::Nine)]);
        assert_eq!(color_strength(strong, Color::Heart), 15);
        assert_eq!(color_strength(strong, Color::Spade), 0);
    }

    #[test]
    fn a_strong_color_is_chosen_outright() {
        let cards = hand(&[
            (Color::Club, Rank::Jack),
            (Color::Club, Rank::Nine),
            (Color::Club, Rank::Ace),
            (Color::Heart, Rank::Six),
        ]);
        assert_eq!(recommend_trump(cards, true), TrumpChoice::Trump(Color::Club));
    }

    #[test]
    fn a_weak_hand_passes_when_it_may() {
        let cards = hand(&[
            (Color::Spade, Rank::Six),
            (Color::Heart, Rank::Seven),
            (Color::Diamond, Rank::Eight),
            (Color::Club, Rank::Ten),
        ]);
        assert_eq!(recommend_trump(cards, true), TrumpChoice::Pass);
        // forced to choose, it still names its best color
        let TrumpChoice::Trump(_) = recommend_trump(cards, false) else {
            panic!("a forced choice must name a color");
        };
    }
}
