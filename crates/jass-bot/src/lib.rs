#![deny(warnings)]
pub mod mcts;
pub mod trump;

pub use mcts::{MctsError, MctsPlayer};
pub use trump::{MIN_TRUMP_STRENGTH, color_strength, recommend_trump};
