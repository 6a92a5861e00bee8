use std::error::Error;
use std::fmt;

use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::color::Color;
use crate::model::ids::{PlayerId, TeamId};
use crate::model::score::Score;
use crate::model::trick::Trick;
use crate::model::turn_state::TurnState;

/// A failure to obtain a decision from a player, typically because a
/// remote connection broke. It aborts the match.
#[derive(Debug)]
pub struct PlayerError(Box<dyn Error + Send + Sync>);

impl PlayerError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        PlayerError(source.into())
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player failed: {}", self.0)
    }
}

impl Error for PlayerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// A trump decision: a color, or a pass to the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrumpChoice {
    Trump(Color),
    Pass,
}

/// A participant in a game, local or remote.
///
/// The two decision methods return errors; the notification methods
/// must handle their own failures, since the game does not depend on
/// their outcome.
pub trait Player {
    /// The card to play given the turn so far and the player's hand.
    fn card_to_play(&mut self, state: &TurnState, hand: CardSet) -> Result<Card, PlayerError>;

    /// The trump for the turn. Passing is only allowed when `can_pass`
    /// is true; the partner then decides without the option to pass.
    fn choose_trump(&mut self, hand: CardSet, can_pass: bool) -> Result<TrumpChoice, PlayerError>;

    /// Called once before the first turn.
    fn set_players(&mut self, _own_id: PlayerId, _names: &[String; 4]) {}

    fn update_hand(&mut self, _hand: CardSet) {}

    fn set_trump(&mut self, _trump: Color) {}

    fn update_trick(&mut self, _trick: Trick) {}

    fn update_score(&mut self, _score: Score) {}

    /// Signals that another player is deciding and this one should wait.
    fn set_waiting(&mut self, _waiting: bool) {}

    /// Called once, when a team reaches the winning point total.
    fn set_winning_team(&mut self, _team: TeamId) {}
}
