//! Fixed constants of the 36-card, four-player Jass ruleset.

/// Cards dealt to each seat at the start of a turn.
pub const HAND_SIZE: usize = 9;

/// Tricks played before a turn ends.
pub const TRICKS_PER_TURN: u32 = 9;

/// Card points available in a turn before any bonus.
pub const TURN_BASE_POINTS: u32 = 157;

/// Bonus for winning all nine tricks of a turn.
pub const MATCH_BONUS: u32 = 100;

/// Bonus for winning the last trick of a turn.
pub const LAST_TRICK_BONUS: u32 = 5;

/// Total points a team needs to win the game.
pub const WINNING_POINTS: u32 = 1000;
