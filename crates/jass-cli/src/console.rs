//! The interactive player: prompts on stdout, answers from stdin.
//!
//! Stdin is owned by a dedicated input thread. The game thread hands a
//! prompt over a rendezvous channel and blocks on a single-slot answer
//! channel, so at most one decision is ever in flight.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use jass_core::game::{Player, PlayerError, TrumpChoice};
use jass_core::model::{Card, CardSet, Color, PlayerId, Rank, Score, TeamId, Trick, TurnState};

pub struct ConsolePlayer {
    prompts: SyncSender<String>,
    answers: Receiver<String>,
    own_name: String,
}

impl ConsolePlayer {
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Builds a console player reading answers from `input`.
    pub fn with_input(input: impl BufRead + Send + 'static) -> Self {
        let (prompt_tx, prompt_rx) = mpsc::sync_channel::<String>(0);
        let (answer_tx, answer_rx) = mpsc::sync_channel::<String>(1);
        thread::spawn(move || {
            let mut lines = input.lines();
            while let Ok(prompt) = prompt_rx.recv() {
                print!("{prompt}");
                io::stdout().flush().ok();
                match lines.next() {
                    Some(Ok(line)) => {
                        if answer_tx.send(line).is_err() {
                            break;
                        }
                    }
                    _ => break,
                }
            }
        });
        ConsolePlayer {
            prompts: prompt_tx,
            answers: answer_rx,
            own_name: String::new(),
        }
    }

    fn ask(&mut self, prompt: String) -> Result<String, PlayerError> {
        self.prompts.send(prompt).map_err(PlayerError::new)?;
        self.answers.recv().map_err(PlayerError::new)
    }
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a card token such as `S6` or `h10`.
pub fn parse_card(text: &str) -> Option<Card> {
    let text = text.trim().to_ascii_uppercase();
    let color = Color::ALL
        .into_iter()
        .find(|color| text.starts_with(&color.to_string()))?;
    let rank = match &text[1..] {
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => return None,
    };
    Some(Card::new(color, rank))
}

fn parse_trump(text: &str, can_pass: bool) -> Option<TrumpChoice> {
    let text = text.trim().to_ascii_uppercase();
    if can_pass && text == "P" {
        return Some(TrumpChoice::Pass);
    }
    Color::ALL
        .into_iter()
        .find(|color| text == color.to_string())
        .map(TrumpChoice::Trump)
}

impl Player for ConsolePlayer {
    fn card_to_play(&mut self, state: &TurnState, hand: CardSet) -> Result<Card, PlayerError> {
        let trick = state.trick().map_err(PlayerError::new)?;
        let playable = trick.playable_cards(hand);
        let mut prompt =
            format!("{trick}\nyour hand: {hand}\nplayable: {playable}\ncard to play? ");
        loop {
            let answer = self.ask(prompt)?;
            match parse_card(&answer) {
                Some(card) if playable.contains(card) => return Ok(card),
                _ => prompt = format!("{} is not a playable card, try again: ", answer.trim()),
            }
        }
    }

    fn choose_trump(&mut self, hand: CardSet, can_pass: bool) -> Result<TrumpChoice, PlayerError> {
        let pass_hint = if can_pass { ", P to pass" } else { "" };
        let mut prompt = format!("your hand: {hand}\ntrump? (S, H, D, C{pass_hint}) ");
        loop {
            let answer = self.ask(prompt)?;
            match parse_trump(&answer, can_pass) {
                Some(choice) => return Ok(choice),
                None => prompt = format!("{} is not a trump choice, try again: ", answer.trim()),
            }
        }
    }

    fn set_players(&mut self, own_id: PlayerId, names: &[String; 4]) {
        self.own_name = names[own_id.index()].clone();
        println!("you are {} ({})", self.own_name, own_id);
        for player in PlayerId::ALL {
            if player != own_id {
                let side = if player.team() == own_id.team() { "partner" } else { "opponent" };
                println!("  {} is {} ({side})", player, names[player.index()]);
            }
        }
    }

    fn update_hand(&mut self, hand: CardSet) {
        println!("your hand: {hand}");
    }

    fn set_trump(&mut self, trump: Color) {
        println!("trump is {trump}");
    }

    fn update_trick(&mut self, trick: Trick) {
        println!("{trick}");
    }

    fn update_score(&mut self, score: Score) {
        println!("score: {score}");
    }

    fn set_waiting(&mut self, waiting: bool) {
        if waiting {
            println!("waiting for the trump choice...");
        }
    }

    fn set_winning_team(&mut self, team: TeamId) {
        println!("{team} wins the game");
    }
}
