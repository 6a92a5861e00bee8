//! 32-bit packed tricks: four 6-bit card slots, then the trick index
//! (4 bits), the first player (2 bits) and the trump color (2 bits).

use crate::bits::bits32;
use crate::model::color::Color;
use crate::model::ids::PlayerId;
use crate::model::rank::Rank;
use crate::packed::{card, card_set};
use crate::rules;

pub const INVALID: u32 = 0xFFFF_FFFF;

const CARD_SIZE: u32 = 6;
const CARD_SLOTS: u32 = 4;
const INDEX_START: u32 = CARD_SIZE * CARD_SLOTS;
const INDEX_SIZE: u32 = 4;
const PLAYER_START: u32 = INDEX_START + INDEX_SIZE;
const PLAYER_SIZE: u32 = 2;
const TRUMP_START: u32 = PLAYER_START + PLAYER_SIZE;
const TRUMP_SIZE: u32 = 2;

const MAX_INDEX: u32 = rules::TRICKS_PER_TURN - 1;

/// A trick is valid when its index is in range and its card slots hold
/// valid cards up to some point, invalid markers from there on.
pub const fn is_valid(pk_trick: u32) -> bool {
    if bits32::extract(pk_trick, INDEX_START, INDEX_SIZE) > MAX_INDEX {
        return false;
    }
    let mut slot = 0;
    let mut empty_seen = false;
    while slot < CARD_SLOTS {
        let pk_card = bits32::extract(pk_trick, slot * CARD_SIZE, CARD_SIZE);
        if pk_card == card::INVALID {
            empty_seen = true;
        } else if empty_seen || !card::is_valid(pk_card) {
            return false;
        }
        slot += 1;
    }
    true
}

const fn empty(trump: Color, first_player: PlayerId, index: u32) -> u32 {
    bits32::pack(&[
        (card::INVALID, CARD_SIZE),
        (card::INVALID, CARD_SIZE),
        (card::INVALID, CARD_SIZE),
        (card::INVALID, CARD_SIZE),
        (index, INDEX_SIZE),
        (first_player.index() as u32, PLAYER_SIZE),
        (trump.index() as u32, TRUMP_SIZE),
    ])
}

/// The empty first trick of a turn.
pub const fn first_empty(trump: Color, first_player: PlayerId) -> u32 {
    empty(trump, first_player, 0)
}

/// The empty trick following a full one, led by its winner, or
/// [`INVALID`] after the last trick of the turn.
pub const fn next_empty(pk_trick: u32) -> u32 {
    debug_assert!(is_valid(pk_trick) && is_full(pk_trick));
    if is_last(pk_trick) {
        INVALID
    } else {
        empty(trump(pk_trick), winning_player(pk_trick), index(pk_trick) + 1)
    }
}

pub const fn is_last(pk_trick: u32) -> bool {
    debug_assert!(is_valid(pk_trick));
    index(pk_trick) == MAX_INDEX
}

pub const fn is_empty(pk_trick: u32) -> bool {
    debug_assert!(is_valid(pk_trick));
    size(pk_trick) == 0
}

pub const fn is_full(pk_trick: u32) -> bool {
    debug_assert!(is_valid(pk_trick));
    size(pk_trick) == CARD_SLOTS
}

pub const fn size(pk_trick: u32) -> u32 {
    debug_assert!(is_valid(pk_trick));
    let mut slot = 0;
    while slot < CARD_SLOTS {
        if bits32::extract(pk_trick, slot * CARD_SIZE, CARD_SIZE) == card::INVALID {
            break;
        }
        slot += 1;
    }
    slot
}

pub const fn trump(pk_trick: u32) -> Color {
    match Color::from_index(bits32::extract(pk_trick, TRUMP_START, TRUMP_SIZE) as usize) {
        Some(color) => color,
        // a 2-bit field cannot index past Color::COUNT
        None => unreachable!(),
    }
}

pub const fn first_player(pk_trick: u32) -> PlayerId {
    debug_assert!(is_valid(pk_trick));
    match PlayerId::from_index(bits32::extract(pk_trick, PLAYER_START, PLAYER_SIZE) as usize) {
        Some(player) => player,
        None => unreachable!(),
    }
}

/// The player sitting `position` seats after the leader.
pub const fn player(pk_trick: u32, position: u32) -> PlayerId {
    debug_assert!(is_valid(pk_trick) && position < CARD_SLOTS);
    let first = first_player(pk_trick).index() as u32;
    match PlayerId::from_index(((first + position) % CARD_SLOTS) as usize) {
        Some(player) => player,
        None => unreachable!(),
    }
}

pub const fn index(pk_trick: u32) -> u32 {
    bits32::extract(pk_trick, INDEX_START, INDEX_SIZE)
}

pub const fn card(pk_trick: u32, position: u32) -> u32 {
    debug_assert!(is_valid(pk_trick) && position < size(pk_trick));
    bits32::extract(pk_trick, position * CARD_SIZE, CARD_SIZE)
}

pub const fn with_added_card(pk_trick: u32, pk_card: u32) -> u32 {
    debug_assert!(is_valid(pk_trick) && !is_full(pk_trick) && card::is_valid(pk_card));
    let slot = size(pk_trick);
    let cleared = pk_trick & !bits32::mask(slot * CARD_SIZE, CARD_SIZE);
    cleared | (pk_card << (slot * CARD_SIZE))
}

pub const fn base_color(pk_trick: u32) -> Color {
    debug_assert!(is_valid(pk_trick) && !is_empty(pk_trick));
    card::color(card(pk_trick, 0))
}

/// The subset of `pk_hand` that may legally be played into the trick.
///
/// When the trick is empty everything is playable. When trump was led the
/// hand must follow, unless its only trump is the jack. Otherwise the hand
/// may follow the base color or overtrump; it may undertrump only when it
/// holds nothing else.
pub const fn playable_cards(pk_trick: u32, pk_hand: u64) -> u64 {
    debug_assert!(is_valid(pk_trick) && !is_full(pk_trick) && card_set::is_valid(pk_hand));
    if is_empty(pk_trick) {
        return pk_hand;
    }
    let trump = trump(pk_trick);
    let base = base_color(pk_trick);
    let base_cards = card_set::subset_of_color(pk_hand, base);
    let trump_cards = card_set::subset_of_color(pk_hand, trump);

    if base.index() == trump.index() {
        let trump_jack = card_set::singleton(card::pack(trump, Rank::Jack));
        if card_set::is_empty(base_cards) || base_cards == trump_jack {
            return pk_hand;
        }
        return base_cards;
    }

    // trumps strictly above every trump already played
    let mut winning_trumps = trump_cards;
    let mut position = 0;
    while position < size(pk_trick) {
        let pk_card = card(pk_trick, position);
        if card::color(pk_card).index() == trump.index() {
            winning_trumps = card_set::intersection(winning_trumps, card_set::trump_above(pk_card));
        }
        position += 1;
    }

    if card_set::is_empty(base_cards) {
        let playable =
            card_set::union(card_set::difference(pk_hand, trump_cards), winning_trumps);
        if card_set::is_empty(playable) { trump_cards } else { playable }
    } else {
        card_set::union(base_cards, winning_trumps)
    }
}

/// The trick's point value, including the last-trick bonus.
pub const fn points(pk_trick: u32) -> u32 {
    debug_assert!(is_valid(pk_trick));
    let trump = trump(pk_trick);
    let mut total = 0;
    let mut position = 0;
    while position < size(pk_trick) {
        total += card::points(trump, card(pk_trick, position));
        position += 1;
    }
    if is_last(pk_trick) {
        total += rules::LAST_TRICK_BONUS;
    }
    total
}

pub const fn winning_player(pk_trick: u32) -> PlayerId {
    debug_assert!(is_valid(pk_trick) && !is_empty(pk_trick));
    let trump = trump(pk_trick);
    let mut best_position = 0;
    let mut position = 1;
    while position < size(pk_trick) {
        if card::is_better(trump, card(pk_trick, position), card(pk_trick, best_position)) {
            best_position = position;
        }
        position += 1;
    }
    player(pk_trick, best_position)
}

#[cfg(test)]
mod tests {
    use super::{
        INVALID, base_color, card, first_empty, first_player, index, is_empty, is_full, is_last,
        is_valid, next_empty, playable_cards, player, points, size, trump, winning_player,
        with_added_card,
    };
    use crate::model::color::Color;
    use crate::model::ids::PlayerId;
    use crate::model::rank::Rank;
    use crate::packed::{card as pc, card_set as cs};

    fn set(cards: &[(Color, Rank)]) -> u64 {
        let mut out = cs::EMPTY;
        for &(c, r) in cards {
            out = cs::add(out, pc::pack(c, r));
        }
        out
    }

    fn trick_of(trump: Color, leader: PlayerId, cards: &[(Color, Rank)]) -> u32 {
        let mut trick = first_empty(trump, leader);
        for &(c, r) in cards {
            trick = with_added_card(trick, pc::pack(c, r));
        }
        trick
    }

    #[test]
    fn first_empty_round_trips_its_fields() {
        let trick = first_empty(Color::Heart, PlayerId::Player3);
        assert!(is_valid(trick));
        assert!(is_empty(trick));
        assert_eq!(trump(trick), Color::Heart);
        assert_eq!(first_player(trick), PlayerId::Player3);
        assert_eq!(index(trick), 0);
        assert_eq!(player(trick, 0), PlayerId::Player3);
        assert_eq!(player(trick, 1), PlayerId::Player4);
        assert_eq!(player(trick, 2), PlayerId::Player1);
    }

    #[test]
    fn cards_fill_slots_in_order() {
        let mut trick = first_empty(Color::Spade, PlayerId::Player1);
        let played = [
            (Color::Club, Rank::Nine),
            (Color::Club, Rank::King),
            (Color::Spade, Rank::Six),
            (Color::Club, Rank::Ace),
        ];
        for (i, &(c, r)) in played.iter().enumerate() {
            assert!(!is_full(trick));
            trick = with_added_card(trick, pc::pack(c, r));
            assert_eq!(size(trick), i as u32 + 1);
            assert_eq!(card(trick, i as u32), pc::pack(c, r));
        }
        assert!(is_full(trick));
        assert_eq!(base_color(trick), Color::Club);
    }

    #[test]
    fn gaps_in_the_card_slots_are_invalid() {
        // slot 0 empty, slot 1 filled
        let trick = first_empty(Color::Spade, PlayerId::Player1)
            & !(0x3F << 6)
            | ((pc::pack(Color::Heart, Rank::Six)) << 6);
        assert!(!is_valid(trick));
        assert!(!is_valid(INVALID));
    }

    #[test]
    fn winner_is_the_highest_trump_else_highest_base() {
        let trick = trick_of(
            Color::Spade,
            PlayerId::Player1,
            &[
                (Color::Heart, Rank::Ace),
                (Color::Heart, Rank::Six),
                (Color::Spade, Rank::Six),
                (Color::Heart, Rank::King),
            ],
        );
        assert_eq!(winning_player(trick), PlayerId::Player3);

        let no_trump = trick_of(
            Color::Club,
            PlayerId::Player2,
            &[
                (Color::Heart, Rank::Ten),
                (Color::Heart, Rank::Queen),
                (Color::Diamond, Rank::Ace),
                (Color::Heart, Rank::Seven),
            ],
        );
        assert_eq!(winning_player(no_trump), PlayerId::Player3);
    }

    #[test]
    fn next_empty_is_led_by_the_winner() {
        let trick = trick_of(
            Color::Spade,
            PlayerId::Player1,
            &[
                (Color::Heart, Rank::Ace),
                (Color::Spade, Rank::Jack),
                (Color::Heart, Rank::Six),
                (Color::Heart, Rank::King),
            ],
        );
        let next = next_empty(trick);
        assert!(is_empty(next));
        assert_eq!(index(next), 1);
        assert_eq!(first_player(next), PlayerId::Player2);
        assert_eq!(trump(next), Color::Spade);
    }

    #[test]
    fn last_trick_has_no_successor() {
        let mut trick = first_empty(Color::Heart, PlayerId::Player1);
        for _ in 0..8 {
            for rank in [Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine] {
                trick = with_added_card(trick, pc::pack(Color::Diamond, rank));
            }
            trick = next_empty(trick);
        }
        assert!(is_last(trick));
        for rank in [Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine] {
            trick = with_added_card(trick, pc::pack(Color::Diamond, rank));
        }
        assert_eq!(next_empty(trick), INVALID);
    }

    #[test]
    fn trick_points_include_the_last_trick_bonus() {
        let cards = [
            (Color::Heart, Rank::Ace),
            (Color::Heart, Rank::King),
            (Color::Heart, Rank::Ten),
            (Color::Spade, Rank::Jack),
        ];
        // trump Spade: 3 + 2 + 0 + 11
        let trick = trick_of(Color::Spade, PlayerId::Player1, &cards);
        assert_eq!(points(trick), 16);

        let mut last = first_empty(Color::Spade, PlayerId::Player1);
        for _ in 0..8 {
            for rank in [Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine] {
                last = with_added_card(last, pc::pack(Color::Diamond, rank));
            }
            last = next_empty(last);
        }
        for &(c, r) in &cards {
            last = with_added_card(last, pc::pack(c, r));
        }
        assert_eq!(points(last), 16 + 5);
    }

    #[test]
    fn empty_trick_allows_the_whole_hand() {
        let hand = set(&[(Color::Spade, Rank::Six), (Color::Club, Rank::Ace)]);
        let trick = first_empty(Color::Heart, PlayerId::Player1);
        assert_eq!(playable_cards(trick, hand), hand);
    }

    #[test]
    fn base_color_must_be_followed() {
        let trick = trick_of(Color::Spade, PlayerId::Player1, &[(Color::Heart, Rank::Six)]);
        let hand = set(&[
            (Color::Heart, Rank::Ace),
            (Color::Heart, Rank::Nine),
            (Color::Club, Rank::King),
        ]);
        let expected = set(&[(Color::Heart, Rank::Ace), (Color::Heart, Rank::Nine)]);
        assert_eq!(playable_cards(trick, hand), expected);
    }

    #[test]
    fn overtrumping_is_always_allowed() {
        let trick = trick_of(
            Color::Spade,
            PlayerId::Player1,
            &[(Color::Heart, Rank::Six), (Color::Spade, Rank::Ten)],
        );
        let hand = set(&[
            (Color::Heart, Rank::Ace),
            (Color::Spade, Rank::Jack),
            (Color::Spade, Rank::Seven),
        ]);
        // must follow hearts, may overtrump with the jack, not the seven
        let expected = set(&[(Color::Heart, Rank::Ace), (Color::Spade, Rank::Jack)]);
        assert_eq!(playable_cards(trick, hand), expected);
    }

    #[test]
    fn undertrumping_requires_an_otherwise_empty_hand() {
        let trick = trick_of(
            Color::Spade,
            PlayerId::Player1,
            &[(Color::Heart, Rank::Six), (Color::Spade, Rank::Ten)],
        );
        let dominated = set(&[(Color::Spade, Rank::Seven), (Color::Spade, Rank::Eight)]);
        assert_eq!(playable_cards(trick, dominated), dominated);

        let mixed = set(&[(Color::Spade, Rank::Seven), (Color::Club, Rank::Six)]);
        assert_eq!(playable_cards(trick, mixed), set(&[(Color::Club, Rank::Six)]));
    }

    #[test]
    fn trump_lead_must_be_followed_except_with_a_lone_jack() {
        let trick = trick_of(Color::Spade, PlayerId::Player1, &[(Color::Spade, Rank::Six)]);
        let follows = set(&[(Color::Spade, Rank::Nine), (Color::Heart, Rank::Ace)]);
        assert_eq!(playable_cards(trick, follows), set(&[(Color::Spade, Rank::Nine)]));

        let lone_jack = set(&[(Color::Spade, Rank::Jack), (Color::Heart, Rank::Ace)]);
        assert_eq!(playable_cards(trick, lone_jack), lone_jack);

        let no_trumps = set(&[(Color::Heart, Rank::Ace), (Color::Club, Rank::Six)]);
        assert_eq!(playable_cards(trick, no_trumps), no_trumps);
    }
}
