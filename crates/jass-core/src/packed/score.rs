//! 64-bit packed scores: one 32-bit half per team, each holding the trick
//! count (4 bits), turn points (9 bits), game points (11 bits) and 8 bits
//! of zero padding.

use crate::bits::{bits32, bits64};
use crate::model::ids::TeamId;
use crate::rules;

pub const INITIAL: u64 = 0;

const MAX_TURN_POINTS: u32 = 257;
const MAX_GAME_POINTS: u32 = rules::WINNING_POINTS * 2;

const TRICKS_START: u32 = 0;
const TRICKS_SIZE: u32 = 4;
const TURN_START: u32 = TRICKS_START + TRICKS_SIZE;
const TURN_SIZE: u32 = 9;
const GAME_START: u32 = TURN_START + TURN_SIZE;
const GAME_SIZE: u32 = 11;
const PADDING_START: u32 = GAME_START + GAME_SIZE;
const PADDING_SIZE: u32 = 8;
const TEAM2_START: u32 = PADDING_START + PADDING_SIZE;

pub const fn is_valid(pk_score: u64) -> bool {
    is_half_valid(pk_score as u32) && is_half_valid((pk_score >> TEAM2_START) as u32)
}

const fn is_half_valid(half: u32) -> bool {
    let tricks = bits32::extract(half, TRICKS_START, TRICKS_SIZE);
    let turn = bits32::extract(half, TURN_START, TURN_SIZE);
    let game = bits32::extract(half, GAME_START, GAME_SIZE);
    let padding = bits32::extract(half, PADDING_START, PADDING_SIZE);
    tricks <= rules::TRICKS_PER_TURN && turn <= MAX_TURN_POINTS && game <= MAX_GAME_POINTS && padding == 0
}

/// Packs both teams' (tricks, turn points, game points) triples.
pub const fn pack(
    turn_tricks_1: u32,
    turn_points_1: u32,
    game_points_1: u32,
    turn_tricks_2: u32,
    turn_points_2: u32,
    game_points_2: u32,
) -> u64 {
    let half1 = half(turn_tricks_1, turn_points_1, game_points_1);
    let half2 = half(turn_tricks_2, turn_points_2, game_points_2);
    half1 | (half2 << TEAM2_START)
}

const fn half(turn_tricks: u32, turn_points: u32, game_points: u32) -> u64 {
    bits32::pack(&[
        (turn_tricks, TRICKS_SIZE),
        (turn_points, TURN_SIZE),
        (game_points, GAME_SIZE),
    ]) as u64
}

const fn team_start(team: TeamId) -> u32 {
    match team {
        TeamId::Team1 => 0,
        TeamId::Team2 => TEAM2_START,
    }
}

pub const fn turn_tricks(pk_score: u64, team: TeamId) -> u32 {
    debug_assert!(is_valid(pk_score));
    bits64::extract(pk_score, team_start(team) + TRICKS_START, TRICKS_SIZE) as u32
}

pub const fn turn_points(pk_score: u64, team: TeamId) -> u32 {
    debug_assert!(is_valid(pk_score));
    bits64::extract(pk_score, team_start(team) + TURN_START, TURN_SIZE) as u32
}

pub const fn game_points(pk_score: u64, team: TeamId) -> u32 {
    debug_assert!(is_valid(pk_score));
    bits64::extract(pk_score, team_start(team) + GAME_START, GAME_SIZE) as u32
}

pub const fn total_points(pk_score: u64, team: TeamId) -> u32 {
    game_points(pk_score, team) + turn_points(pk_score, team)
}

/// Credits a collected trick to `winning_team`: one more trick, plus the
/// trick's points, plus the match bonus when that was the ninth trick.
pub const fn with_additional_trick(pk_score: u64, winning_team: TeamId, trick_points: u32) -> u64 {
    let tricks = turn_tricks(pk_score, winning_team) + 1;
    let mut turn = turn_points(pk_score, winning_team) + trick_points;
    if tricks == rules::TRICKS_PER_TURN {
        turn += rules::MATCH_BONUS;
    }
    let start = team_start(winning_team);
    let cleared = pk_score & !bits64::mask(start, TRICKS_SIZE + TURN_SIZE);
    cleared | ((tricks as u64) << start) | ((turn as u64) << (start + TURN_START))
}

/// Carries both teams' totals into game points and resets the turn fields.
pub const fn next_turn(pk_score: u64) -> u64 {
    pack(
        0,
        0,
        total_points(pk_score, TeamId::Team1),
        0,
        0,
        total_points(pk_score, TeamId::Team2),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        INITIAL, game_points, is_valid, next_turn, pack, total_points, turn_points, turn_tricks,
        with_additional_trick,
    };
    use crate::model::ids::TeamId;

    #[test]
    fn pack_reads_back_both_halves() {
        let score = pack(3, 47, 120, 1, 12, 999);
        assert!(is_valid(score));
        assert_eq!(turn_tricks(score, TeamId::Team1), 3);
        assert_eq!(turn_points(score, TeamId::Team1), 47);
        assert_eq!(game_points(score, TeamId::Team1), 120);
        assert_eq!(turn_tricks(score, TeamId::Team2), 1);
        assert_eq!(turn_points(score, TeamId::Team2), 12);
        assert_eq!(game_points(score, TeamId::Team2), 999);
        assert_eq!(total_points(score, TeamId::Team2), 1011);
    }

    #[test]
    fn padding_bits_invalidate_the_score() {
        assert!(is_valid(INITIAL));
        assert!(!is_valid(1u64 << 24));
        assert!(!is_valid(1u64 << 56));
        // a trick count of 10 is out of range
        assert!(!is_valid(10));
    }

    #[test]
    fn nine_tricks_totalling_157_earn_the_match_bonus() {
        let mut score = INITIAL;
        let trick_points = [20, 15, 30, 10, 5, 25, 12, 18, 22];
        assert_eq!(trick_points.iter().sum::<u32>(), 157);
        for points in trick_points {
            score = with_additional_trick(score, TeamId::Team1, points);
        }
        assert_eq!(turn_tricks(score, TeamId::Team1), 9);
        assert_eq!(turn_points(score, TeamId::Team1), 157 + 100);
        assert_eq!(turn_points(score, TeamId::Team2), 0);
    }

    #[test]
    fn with_additional_trick_leaves_the_other_team_alone() {
        let score = pack(2, 30, 400, 4, 60, 500);
        let updated = with_additional_trick(score, TeamId::Team2, 17);
        assert_eq!(turn_tricks(updated, TeamId::Team1), 2);
        assert_eq!(turn_points(updated, TeamId::Team1), 30);
        assert_eq!(turn_tricks(updated, TeamId::Team2), 5);
        assert_eq!(turn_points(updated, TeamId::Team2), 77);
        assert_eq!(game_points(updated, TeamId::Team2), 500);
    }

    #[test]
    fn next_turn_moves_totals_into_game_points() {
        let score = pack(5, 80, 300, 4, 77, 250);
        let carried = next_turn(score);
        for team in TeamId::ALL {
            assert_eq!(turn_tricks(carried, team), 0);
            assert_eq!(turn_points(carried, team), 0);
        }
        assert_eq!(game_points(carried, TeamId::Team1), 380);
        assert_eq!(game_points(carried, TeamId::Team2), 327);
    }
}
