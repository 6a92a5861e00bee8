//! The game loop and the player abstraction it drives.

pub mod paced;
pub mod player;
pub mod session;

pub use paced::PacedPlayer;
pub use player::{Player, PlayerError, TrumpChoice};
pub use session::{FIRST_CARD, GameError, JassSession};
