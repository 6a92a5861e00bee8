use std::fmt;

use crate::model::ids::TeamId;
use crate::packed::score;

/// The running score of a game, stored in its packed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score(u64);

impl Score {
    pub const INITIAL: Score = Score(score::INITIAL);

    pub const fn of_packed(pk_score: u64) -> Option<Self> {
        if score::is_valid(pk_score) { Some(Score(pk_score)) } else { None }
    }

    pub const fn packed(self) -> u64 {
        self.0
    }

    /// Tricks won by `team` in the current turn.
    pub const fn turn_tricks(self, team: TeamId) -> u32 {
        score::turn_tricks(self.0, team)
    }

    /// Points collected by `team` in the current turn.
    pub const fn turn_points(self, team: TeamId) -> u32 {
        score::turn_points(self.0, team)
    }

    /// Points collected by `team` in previous turns.
    pub const fn game_points(self, team: TeamId) -> u32 {
        score::game_points(self.0, team)
    }

    pub const fn total_points(self, team: TeamId) -> u32 {
        score::total_points(self.0, team)
    }

    #[must_use]
    pub const fn with_additional_trick(self, winning_team: TeamId, trick_points: u32) -> Self {
        Score(score::with_additional_trick(self.0, winning_team, trick_points))
    }

    #[must_use]
    pub const fn next_turn(self) -> Self {
        Score(score::next_turn(self.0))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t1 = TeamId::Team1;
        let t2 = TeamId::Team2;
        write!(
            f,
            "({},{},{})/({},{},{})",
            self.turn_tricks(t1),
            self.turn_points(t1),
            self.game_points(t1),
            self.turn_tricks(t2),
            self.turn_points(t2),
            self.game_points(t2),
        )
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
