//! A Monte Carlo tree search player.
//!
//! The search only knows its own hand. The other three hands are
//! modelled as a single shared pool: whenever an opponent is to move,
//! every unplayed card outside the searcher's hand is a candidate.

use std::error::Error;
use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use jass_core::game::{Player, PlayerError, TrumpChoice};
use jass_core::model::{Card, CardSet, PlayerId, Score, TeamId, TurnState};
use jass_core::rules;

use crate::trump;

const EXPLORATION_FACTOR: f64 = 40.0;

/// Errors raised when constructing a player with a bad configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MctsError {
    /// Fewer iterations than cards in a hand cannot expand the root.
    BudgetTooSmall { iterations: u32 },
}

impl fmt::Display for MctsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MctsError::BudgetTooSmall { iterations } => write!(
                f,
                "at least {} iterations are needed, got {iterations}",
                rules::HAND_SIZE
            ),
        }
    }
}

impl Error for MctsError {}

struct Node {
    state: TurnState,
    untried: CardSet,
    children: Vec<usize>,
    total_points: u64,
    visits: u32,
}

impl Node {
    fn new(state: TurnState, untried: CardSet) -> Self {
        Node { state, untried, children: Vec::new(), total_points: 0, visits: 0 }
    }

    fn value(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploitation = self.total_points as f64 / self.visits as f64;
        exploitation
            + exploration * (2.0 * f64::ln(parent_visits as f64) / self.visits as f64).sqrt()
    }
}

/// A simulated player that searches with a fixed iteration budget.
pub struct MctsPlayer {
    own_id: PlayerId,
    rng: SmallRng,
    iterations: u32,
}

impl MctsPlayer {
    pub fn new(own_id: PlayerId, rng_seed: u64, iterations: u32) -> Result<Self, MctsError> {
        if (iterations as usize) < rules::HAND_SIZE {
            return Err(MctsError::BudgetTooSmall { iterations });
        }
        Ok(MctsPlayer { own_id, rng: SmallRng::seed_from_u64(rng_seed), iterations })
    }

    /// The cards the next player could put down, under the shared-pool
    /// model of the hidden hands.
    fn candidate_cards(&self, state: &TurnState, hand: CardSet) -> CardSet {
        if state.is_terminal() {
            return CardSet::EMPTY;
        }
        let trick = state.trick().expect("a non-terminal state has a trick");
        let next = state.next_player().expect("stored states never hold a full trick");
        let pool = if next == self.own_id {
            state.unplayed_cards().intersection(hand)
        } else {
            state.unplayed_cards().difference(hand)
        };
        trick.playable_cards(pool)
    }

    /// Plays random cards to the end of the turn.
    fn simulate(&mut self, mut state: TurnState, hand: CardSet) -> Score {
        while !state.is_terminal() {
            let candidates = self.candidate_cards(&state, hand);
            let card = candidates.get(self.rng.gen_range(0..candidates.size()));
            state = state
                .with_new_card_played_and_trick_collected(card)
                .expect("a candidate card can be played");
        }
        state.score()
    }

    /// Runs one iteration: walk down, expand one node, simulate from
    /// it and credit the result along the path.
    fn grow(&mut self, tree: &mut Vec<Node>, hand: CardSet) {
        let mut path = vec![0usize];
        loop {
            let index = *path.last().expect("the path starts at the root");
            if !tree[index].untried.is_empty() {
                let card = tree[index].untried.get(0);
                tree[index].untried = tree[index].untried.remove(card);
                let state = tree[index]
                    .state
                    .with_new_card_played_and_trick_collected(card)
                    .expect("untried cards are playable");
                let untried = self.candidate_cards(&state, hand);
                let child = tree.len();
                tree.push(Node::new(state, untried));
                tree[index].children.push(child);
                path.push(child);
                break;
            }
            if tree[index].children.is_empty() {
                break;
            }
            let next = Self::best_child(tree, index, EXPLORATION_FACTOR);
            path.push(next);
        }

        let leaf = *path.last().expect("the path is never empty");
        let outcome = self.simulate(tree[leaf].state, hand);

        for (depth, &index) in path.iter().enumerate() {
            let team = if depth == 0 {
                self.own_id.team().other()
            } else {
                Self::mover_team(&tree[path[depth - 1]])
            };
            tree[index].visits += 1;
            tree[index].total_points += u64::from(outcome.turn_points(team));
        }
    }

    /// The team of the player about to move in `parent`, whose move
    /// each of its children represents.
    fn mover_team(parent: &Node) -> TeamId {
        parent
            .state
            .next_player()
            .expect("expanded nodes have a next player")
            .team()
    }

    fn best_child(tree: &[Node], parent: usize, exploration: f64) -> usize {
        let parent_visits = tree[parent].visits;
        let mut best = tree[parent].children[0];
        let mut best_value = tree[best].value(parent_visits, exploration);
        for &child in &tree[parent].children[1..] {
            let value = tree[child].value(parent_visits, exploration);
            if value > best_value {
                best = child;
                best_value = value;
            }
        }
        best
    }
}

impl Player for MctsPlayer {
    fn card_to_play(&mut self, state: &TurnState, hand: CardSet) -> Result<Card, PlayerError> {
        let playable = self.candidate_cards(state, hand);
        let mut tree = vec![Node::new(*state, playable)];
        for _ in 0..self.iterations {
            self.grow(&mut tree, hand);
        }
        // children were expanded smallest card first
        let best = Self::best_child(&tree, 0, 0.0);
        let slot = tree[0]
            .children
            .iter()
            .position(|&child| child == best)
            .expect("the best child belongs to the root");
        let card = playable.get(slot as u32);
        debug!(player = %self.own_id, %card, visits = tree[best].visits, "card chosen");
        Ok(card)
    }

    fn choose_trump(&mut self, hand: CardSet, can_pass: bool) -> Result<TrumpChoice, PlayerError> {
        let choice = trump::recommend_trump(hand, can_pass);
        debug!(player = %self.own_id, ?choice, "trump chosen");
        Ok(choice)
    }

    /// Adopts the announced seat, so a search constructed before the
    /// game starts (as the remote server does) models the right hand.
    fn set_players(&mut self, own_id: PlayerId, _names: &[String; 4]) {
        self.own_id = own_id;
    }
}

#[cfg(test)]
mod tests {
    use super::{MctsError, MctsPlayer};
    use jass_core::game::Player;
    use jass_core::model::{Card, CardSet, Color, PlayerId, Rank, Score, TurnState};

    #[test]
    fn too_small_a_budget_is_rejected() {
        assert_eq!(
            MctsPlayer::new(PlayerId::Player1, 0, 8).err(),
            Some(MctsError::BudgetTooSmall { iterations: 8 })
        );
        assert!(MctsPlayer::new(PlayerId::Player1, 0, 9).is_ok());
    }

    // nine cards, as a hand holds at the start of a turn
    fn full_hand(first: Card, fillers: &[(Color, Rank)]) -> CardSet {
        let hand: CardSet = std::iter::once(first)
            .chain(fillers.iter().map(|&(c, r)| Card::new(c, r)))
            .collect();
        assert_eq!(hand.size(), 9);
        hand
    }

    #[test]
    fn a_forced_card_is_played() {
        let mut player = MctsPlayer::new(PlayerId::Player2, 0, 9).unwrap();
        let state = TurnState::initial(Color::Spade, Score::INITIAL, PlayerId::Player1)
            .with_new_card_played(Card::new(Color::Heart, Rank::Six))
            .unwrap();
        // the lone heart is the only card that follows, and with no
        // spades in the hand there is nothing to overtrump with
        let hand = full_hand(
            Card::new(Color::Heart, Rank::Ten),
            &[
                (Color::Diamond, Rank::Six),
                (Color::Diamond, Rank::Seven),
                (Color::Diamond, Rank::Eight),
                (Color::Diamond, Rank::Nine),
                (Color::Diamond, Rank::Ten),
                (Color::Club, Rank::Six),
                (Color::Club, Rank::Seven),
                (Color::Club, Rank::Eight),
            ],
        );
        let card = player.card_to_play(&state, hand).unwrap();
        assert_eq!(card, Card::new(Color::Heart, Rank::Ten));
    }

    #[test]
    fn the_same_seed_picks_the_same_card() {
        let state = TurnState::initial(Color::Spade, Score::INITIAL, PlayerId::Player1)
            .with_new_card_played(Card::new(Color::Club, Rank::Ten))
            .unwrap();
        let hand = full_hand(
            Card::new(Color::Club, Rank::Jack),
            &[
                (Color::Club, Rank::Six),
                (Color::Spade, Rank::Nine),
                (Color::Spade, Rank::Jack),
                (Color::Heart, Rank::Ace),
                (Color::Heart, Rank::Six),
                (Color::Diamond, Rank::King),
                (Color::Diamond, Rank::Six),
                (Color::Club, Rank::Ace),
            ],
        );
        let mut a = MctsPlayer::new(PlayerId::Player2, 123, 200).unwrap();
        let mut b = MctsPlayer::new(PlayerId::Player2, 123, 200).unwrap();
        assert_eq!(a.card_to_play(&state, hand).unwrap(), b.card_to_play(&state, hand).unwrap());
    }

    #[test]
    fn a_small_endgame_is_searched_to_the_bottom() {
        let mut state = TurnState::initial(Color::Spade, Score::INITIAL, PlayerId::Player1);
        let kept = [
            Card::new(Color::Spade, Rank::Jack),
            Card::new(Color::Spade, Rank::Nine),
        ];
        let kept_set: CardSet = kept.into_iter().collect();
        // burn seven full tricks without touching the kept cards
        for _ in 0..7 {
            for _ in 0..4 {
                let trick = state.trick().unwrap();
                let card = trick
                    .playable_cards(state.unplayed_cards().difference(kept_set))
                    .get(0);
                state = state.with_new_card_played_and_trick_collected(card).unwrap();
            }
        }
        assert_eq!(state.unplayed_cards().size(), 8);
        let seat = state.next_player().unwrap();
        let mut player = MctsPlayer::new(seat, 1, 1000).unwrap();
        let card = player.card_to_play(&state, kept_set).unwrap();
        assert!(kept_set.contains(card));
    }
}
