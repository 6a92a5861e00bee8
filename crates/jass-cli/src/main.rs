#![deny(warnings)]

use std::net::TcpListener;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::info;

use jass_bot::MctsPlayer;
use jass_cli::config::{MIN_ITERATIONS, SeatConfig, SeatKind};
use jass_cli::console::ConsolePlayer;
use jass_cli::logging;
use jass_core::game::{JassSession, PacedPlayer, Player};
use jass_core::model::{PlayerId, TeamId};
use jass_net::{DEFAULT_PORT, RemotePlayerClient, RemotePlayerServer};

/// Minimum thinking time before a simulated player answers.
const SIMULATED_PACE: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "jass", about = "Swiss Jass at the console, with search-based opponents")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Run a game with four configured seats at this process.
    Local {
        /// Seat specs, in seating order: h[:name], s[:name[:iterations]]
        /// or r[:name[:host]].
        #[arg(num_args = 4, value_name = "SEAT")]
        seats: Vec<String>,

        /// Seed for dealing and the simulated players.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },

    /// Serve a simulated player to a game on another machine.
    Remote {
        /// Iteration budget of the served player.
        #[arg(long, value_name = "N", default_value_t = jass_cli::config::DEFAULT_ITERATIONS)]
        iterations: u32,

        /// Port to listen on.
        #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Debug, Serialize)]
struct MatchSummary<'a> {
    seed: u64,
    winner: TeamId,
    points: [u32; 2],
    players: &'a [String; 4],
}

fn main() -> Result<()> {
    logging::init();
    match Cli::parse().command {
        CliCommand::Local { seats, seed } => run_local(&seats, seed),
        CliCommand::Remote { iterations, port } => run_remote(iterations, port),
    }
}

fn run_local(seats: &[String], seed: Option<u64>) -> Result<()> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(base_seed);
    let game_seed = rng.next_u64();

    let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(4);
    let mut names: Vec<String> = Vec::with_capacity(4);
    for (index, spec) in seats.iter().enumerate() {
        let config = SeatConfig::parse(index, spec)?;
        // every seat draws a seed so the layout does not disturb the others
        let seat_seed = rng.next_u64();
        let seat = PlayerId::from_index(index).expect("seat index in range");
        players.push(build_player(seat, &config, seat_seed)?);
        names.push(config.name);
    }
    let players: [Box<dyn Player>; 4] = players
        .try_into()
        .unwrap_or_else(|_| unreachable!("clap enforces four seat specs"));
    let names: [String; 4] = names
        .try_into()
        .expect("one name per seat");

    info!(seed = base_seed, "starting game");
    let mut session = JassSession::new(game_seed, players, names.clone());
    while !session.is_game_over() {
        session.advance_to_end_of_next_trick()?;
    }

    let winner = session
        .winning_team()
        .expect("a finished game has a winner");
    let score = session.current_score();
    let summary = MatchSummary {
        seed: base_seed,
        winner,
        points: [
            score.total_points(TeamId::Team1),
            score.total_points(TeamId::Team2),
        ],
        players: &names,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn build_player(
    id: PlayerId,
    config: &SeatConfig,
    seat_seed: u64,
) -> Result<Box<dyn Player>> {
    Ok(match &config.kind {
        SeatKind::Human => Box::new(ConsolePlayer::new()),
        SeatKind::Simulated { iterations } => Box::new(PacedPlayer::new(
            MctsPlayer::new(id, seat_seed, *iterations)?,
            SIMULATED_PACE,
        )),
        SeatKind::Remote { host } => Box::new(
            RemotePlayerClient::connect(host)
                .with_context(|| format!("connecting to the remote player at {host}"))?,
        ),
    })
}

fn run_remote(iterations: u32, port: u16) -> Result<()> {
    if iterations < MIN_ITERATIONS {
        bail!("a simulated player needs at least {MIN_ITERATIONS} iterations, got {iterations}");
    }
    // the seat is adopted from the game's identify command
    let player = MctsPlayer::new(PlayerId::Player1, rand::random(), iterations)?;
    let listener = TcpListener::bind(("0.0.0.0", port))
        .with_context(|| format!("listening on port {port}"))?;
    info!(port, iterations, "waiting for a game");
    RemotePlayerServer::new(player).run(listener)?;
    Ok(())
}
