use std::error::Error;
use std::fmt;

use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::color::Color;
use crate::model::ids::PlayerId;
use crate::model::score::Score;
use crate::model::trick::Trick;
use crate::packed::{card_set, score, trick};

/// Errors raised by [`TurnState`] transitions applied in the wrong phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStateError {
    /// The turn is over, no trick is in progress.
    TerminalState,
    /// The current trick already holds four cards.
    TrickFull,
    /// The current trick does not hold four cards yet.
    TrickNotFull,
    /// The card is no longer in the unplayed set.
    CardAlreadyPlayed,
}

impl fmt::Display for TurnStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnStateError::TerminalState => write!(f, "the turn is over"),
            TurnStateError::TrickFull => write!(f, "the current trick is full"),
            TurnStateError::TrickNotFull => write!(f, "the current trick is not full"),
            TurnStateError::CardAlreadyPlayed => write!(f, "the card was already played"),
        }
    }
}

impl Error for TurnStateError {}

/// The state of a single turn: the score so far, the cards nobody has
/// played yet and the trick in progress.
///
/// After the ninth trick is collected the state becomes terminal and
/// every transition fails with [`TurnStateError::TerminalState`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pk_score: u64,
    pk_unplayed: u64,
    pk_trick: u32,
}

impl TurnState {
    /// The state at the start of a turn, before any card is played.
    pub const fn initial(trump: Color, score: Score, first_player: PlayerId) -> Self {
        TurnState {
            pk_score: score.packed(),
            pk_unplayed: card_set::ALL_CARDS,
            pk_trick: trick::first_empty(trump, first_player),
        }
    }

    /// Rebuilds a state from packed components, or `None` if any of
    /// them is malformed. An invalid trick is accepted only as the
    /// terminal sentinel.
    pub const fn of_packed_components(pk_score: u64, pk_unplayed: u64, pk_trick: u32) -> Option<Self> {
        if score::is_valid(pk_score)
            && card_set::is_valid(pk_unplayed)
            && (pk_trick == trick::INVALID || trick::is_valid(pk_trick))
        {
            Some(TurnState { pk_score, pk_unplayed, pk_trick })
        } else {
            None
        }
    }

    pub const fn packed_score(self) -> u64 {
        self.pk_score
    }

    pub const fn packed_unplayed_cards(self) -> u64 {
        self.pk_unplayed
    }

    pub const fn packed_trick(self) -> u32 {
        self.pk_trick
    }

    pub const fn score(self) -> Score {
        match Score::of_packed(self.pk_score) {
            Some(score) => score,
            None => panic!("turn state holds an invalid score"),
        }
    }

    pub const fn unplayed_cards(self) -> CardSet {
        match CardSet::of_packed(self.pk_unplayed) {
            Some(set) => set,
            None => panic!("turn state holds an invalid card set"),
        }
    }

    pub const fn trick(self) -> Result<Trick, TurnStateError> {
        match Trick::of_packed(self.pk_trick) {
            Some(trick) => Ok(trick),
            None => Err(TurnStateError::TerminalState),
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.pk_trick == trick::INVALID
    }

    /// The player expected to play the next card.
    pub const fn next_player(self) -> Result<PlayerId, TurnStateError> {
        if self.is_terminal() {
            return Err(TurnStateError::TerminalState);
        }
        if trick::is_full(self.pk_trick) {
            return Err(TurnStateError::TrickFull);
        }
        Ok(trick::player(self.pk_trick, trick::size(self.pk_trick)))
    }

    /// Plays `card` into the current trick.
    pub const fn with_new_card_played(self, card: Card) -> Result<Self, TurnStateError> {
        if self.is_terminal() {
            return Err(TurnStateError::TerminalState);
        }
        if trick::is_full(self.pk_trick) {
            return Err(TurnStateError::TrickFull);
        }
        if !card_set::contains(self.pk_unplayed, card.packed()) {
            return Err(TurnStateError::CardAlreadyPlayed);
        }
        Ok(TurnState {
            pk_score: self.pk_score,
            pk_unplayed: card_set::remove(self.pk_unplayed, card.packed()),
            pk_trick: trick::with_added_card(self.pk_trick, card.packed()),
        })
    }

    /// Collects the full current trick: credits its points to the
    /// winning team and opens the next trick.
    pub const fn with_trick_collected(self) -> Result<Self, TurnStateError> {
        if self.is_terminal() {
            return Err(TurnStateError::TerminalState);
        }
        if !trick::is_full(self.pk_trick) {
            return Err(TurnStateError::TrickNotFull);
        }
        let winning_team = trick::winning_player(self.pk_trick).team();
        Ok(TurnState {
            pk_score: score::with_additional_trick(
                self.pk_score,
                winning_team,
                trick::points(self.pk_trick),
            ),
            pk_unplayed: self.pk_unplayed,
            pk_trick: trick::next_empty(self.pk_trick),
        })
    }

    /// Plays `card`, then collects the trick if that filled it.
    pub const fn with_new_card_played_and_trick_collected(
        self,
        card: Card,
    ) -> Result<Self, TurnStateError> {
        let played = match self.with_new_card_played(card) {
            Ok(state) => state,
            Err(e) => return Err(e),
        };
        if trick::is_full(played.pk_trick) {
            played.with_trick_collected()
        } else {
            Ok(played)
        }
    }
}

impl fmt::Debug for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnState")
            .field("score", &self.score())
            .field("unplayed", &self.unplayed_cards())
            .field("trick", &self.trick().ok())
            .finish()
    }
}
