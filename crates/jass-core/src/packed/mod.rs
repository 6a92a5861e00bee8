//! Bit-packed value representations of cards, card sets, scores and
//! tricks, used directly by the simulation code in `jass-bot` and
//! wrapped by the types in [`crate::model`].

pub mod card;
pub mod card_set;
pub mod score;
pub mod trick;
