use std::error::Error;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::player::{Player, PlayerError, TrumpChoice};
use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::color::Color;
use crate::model::ids::{PlayerId, TeamId};
use crate::model::rank::Rank;
use crate::model::score::Score;
use crate::model::turn_state::TurnState;
use crate::rules;

/// The card whose holder leads the first trick of a game.
pub const FIRST_CARD: Card = Card::new(Color::Diamond, Rank::Seven);

/// Errors that abort a game.
#[derive(Debug)]
pub enum GameError {
    /// A player failed to answer a decision query.
    Player { player: PlayerId, source: PlayerError },
    /// A player answered with a card it does not hold or may not play.
    IllegalCard { player: PlayerId, card: Card },
    /// A player passed the trump decision when passing was not allowed.
    TrumpNotChosen { player: PlayerId },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Player { player, source } => write!(f, "{player}: {source}"),
            GameError::IllegalCard { player, card } => {
                write!(f, "{player} played {card}, which is not a legal card")
            }
            GameError::TrumpNotChosen { player } => {
                write!(f, "{player} passed the trump decision but had to choose")
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Player { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A game of four players, driven one trick at a time.
pub struct JassSession {
    rng: StdRng,
    players: [Box<dyn Player>; 4],
    player_names: [String; 4],
    hands: [CardSet; 4],
    turn_state: Option<TurnState>,
    turn_first_player: Option<PlayerId>,
    winning_team: Option<TeamId>,
}

impl JassSession {
    pub fn new(seed: u64, players: [Box<dyn Player>; 4], player_names: [String; 4]) -> Self {
        JassSession {
            rng: StdRng::seed_from_u64(seed),
            players,
            player_names,
            hands: [CardSet::EMPTY; 4],
            turn_state: None,
            turn_first_player: None,
            winning_team: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.winning_team.is_some()
    }

    pub fn winning_team(&self) -> Option<TeamId> {
        self.winning_team
    }

    pub fn current_score(&self) -> Score {
        self.turn_state.map_or(Score::INITIAL, TurnState::score)
    }

    /// Plays up to the end of the next trick, starting turns and the
    /// game itself as needed. Does nothing once the game is over.
    pub fn advance_to_end_of_next_trick(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Ok(());
        }
        match self.turn_state {
            None => self.start_game()?,
            Some(state) => {
                let collected = state
                    .with_trick_collected()
                    .expect("the previous call left a full trick");
                self.turn_state = Some(collected);
                for player in &mut self.players {
                    player.update_score(collected.score());
                }
                if self.check_game_over() {
                    return Ok(());
                }
                if collected.is_terminal() {
                    self.start_turn(collected.score().next_turn())?;
                }
            }
        }
        self.play_trick()
    }

    fn start_game(&mut self) -> Result<(), GameError> {
        for (index, player) in self.players.iter_mut().enumerate() {
            let own_id = PlayerId::from_index(index).expect("player index in range");
            player.set_players(own_id, &self.player_names);
        }
        self.deal_hands();
        let first_player = PlayerId::ALL
            .into_iter()
            .find(|p| self.hands[p.index()].contains(FIRST_CARD))
            .expect("some hand holds the first card");
        self.start_turn_with_leader(Score::INITIAL, first_player)
    }

    fn start_turn(&mut self, score: Score) -> Result<(), GameError> {
        self.deal_hands();
        let leader = self
            .turn_first_player
            .expect("a turn was played before")
            .next();
        self.start_turn_with_leader(score, leader)
    }

    fn start_turn_with_leader(&mut self, score: Score, leader: PlayerId) -> Result<(), GameError> {
        self.turn_first_player = Some(leader);
        for player in &mut self.players {
            player.set_waiting(true);
        }
        let trump = self.select_trump(leader)?;
        for player in &mut self.players {
            player.set_waiting(false);
            player.set_trump(trump);
        }
        let state = TurnState::initial(trump, score, leader);
        self.turn_state = Some(state);
        let trick = state.trick().expect("a fresh turn has a trick");
        for player in &mut self.players {
            player.update_trick(trick);
        }
        Ok(())
    }

    fn deal_hands(&mut self) {
        let mut deck: Vec<Card> = CardSet::ALL.iter().collect();
        deck.shuffle(&mut self.rng);
        for (index, cards) in deck.chunks(rules::HAND_SIZE).enumerate() {
            let hand: CardSet = cards.iter().copied().collect();
            self.hands[index] = hand;
            self.players[index].update_hand(hand);
        }
    }

    /// Asks the leader for a trump; on a pass, the partner decides.
    fn select_trump(&mut self, leader: PlayerId) -> Result<Color, GameError> {
        let choice = self.ask_trump(leader, true)?;
        match choice {
            TrumpChoice::Trump(color) => Ok(color),
            TrumpChoice::Pass => {
                let partner = leader.partner();
                match self.ask_trump(partner, false)? {
                    TrumpChoice::Trump(color) => Ok(color),
                    TrumpChoice::Pass => Err(GameError::TrumpNotChosen { player: partner }),
                }
            }
        }
    }

    fn ask_trump(&mut self, player: PlayerId, can_pass: bool) -> Result<TrumpChoice, GameError> {
        let hand = self.hands[player.index()];
        self.players[player.index()]
            .choose_trump(hand, can_pass)
            .map_err(|source| GameError::Player { player, source })
    }

    fn play_trick(&mut self) -> Result<(), GameError> {
        loop {
            let state = self.turn_state.expect("a turn is in progress");
            let player = match state.next_player() {
                Ok(player) => player,
                Err(_) => return Ok(()),
            };
            let hand = self.hands[player.index()];
            let card = self.players[player.index()]
                .card_to_play(&state, hand)
                .map_err(|source| GameError::Player { player, source })?;
            let playable = state
                .trick()
                .expect("the trick is not full")
                .playable_cards(hand);
            if !playable.contains(card) {
                return Err(GameError::IllegalCard { player, card });
            }
            let hand = hand.remove(card);
            self.hands[player.index()] = hand;
            self.players[player.index()].update_hand(hand);
            let played = state
                .with_new_card_played(card)
                .expect("the trick has room for a card");
            self.turn_state = Some(played);
            let trick = played.trick().expect("the turn is not over");
            for other in &mut self.players {
                other.update_trick(trick);
            }
            if trick.is_full() {
                return Ok(());
            }
        }
    }

    fn check_game_over(&mut self) -> bool {
        let score = self.current_score();
        let winner = TeamId::ALL
            .into_iter()
            .find(|&team| score.total_points(team) >= rules::WINNING_POINTS);
        if let Some(team) = winner {
            self.winning_team = Some(team);
            for player in &mut self.players {
                player.set_winning_team(team);
            }
        }
        self.winning_team.is_some()
    }
}
