use std::thread;
use std::time::{Duration, Instant};

use crate::game::player::{Player, PlayerError, TrumpChoice};
use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::color::Color;
use crate::model::ids::{PlayerId, TeamId};
use crate::model::score::Score;
use crate::model::trick::Trick;
use crate::model::turn_state::TurnState;

/// Wraps a player so that its card decisions take at least `min_time`,
/// keeping fast simulated players watchable at the table.
pub struct PacedPlayer<P> {
    inner: P,
    min_time: Duration,
}

impl<P: Player> PacedPlayer<P> {
    pub fn new(inner: P, min_time: Duration) -> Self {
        PacedPlayer { inner, min_time }
    }
}

impl<P: Player> Player for PacedPlayer<P> {
    fn card_to_play(&mut self, state: &TurnState, hand: CardSet) -> Result<Card, PlayerError> {
        let started = Instant::now();
        let card = self.inner.card_to_play(state, hand)?;
        if let Some(remaining) = self.min_time.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
        Ok(card)
    }

    fn choose_trump(&mut self, hand: CardSet, can_pass: bool) -> Result<TrumpChoice, PlayerError> {
        self.inner.choose_trump(hand, can_pass)
    }

    fn set_players(&mut self, own_id: PlayerId, names: &[String; 4]) {
        self.inner.set_players(own_id, names);
    }

    fn update_hand(&mut self, hand: CardSet) {
        self.inner.update_hand(hand);
    }

    fn set_trump(&mut self, trump: Color) {
        self.inner.set_trump(trump);
    }

    fn update_trick(&mut self, trick: Trick) {
        self.inner.update_trick(trick);
    }

    fn update_score(&mut self, score: Score) {
        self.inner.update_score(score);
    }

    fn set_waiting(&mut self, waiting: bool) {
        self.inner.set_waiting(waiting);
    }

    fn set_winning_team(&mut self, team: TeamId) {
        self.inner.set_winning_team(team);
    }
}
