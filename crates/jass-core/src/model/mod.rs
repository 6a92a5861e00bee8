//! Typed views over the packed representations, plus the player and
//! team identifiers and the turn state machine.

pub mod card;
pub mod card_set;
pub mod color;
pub mod ids;
pub mod rank;
pub mod score;
pub mod trick;
pub mod turn_state;

pub use card::Card;
pub use card_set::CardSet;
pub use color::Color;
pub use ids::{PlayerId, TeamId};
pub use rank::Rank;
pub use score::Score;
pub use trick::Trick;
pub use turn_state::{TurnState, TurnStateError};
