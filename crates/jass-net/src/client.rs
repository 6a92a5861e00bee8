//! The proxy standing in for a player whose decisions are made by a
//! [`crate::server::RemotePlayerServer`] in another process.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

use tracing::error;

use jass_core::game::{Player, PlayerError, TrumpChoice};
use jass_core::model::{Card, CardSet, Color, PlayerId, Score, TeamId, Trick, TurnState};

use crate::codec::{
    self, CodecError, Command, serialize_bool, serialize_u32, serialize_u64,
};

/// The port a remote player's server listens on by default.
pub const DEFAULT_PORT: u16 = 5108;

/// A [`Player`] whose every call is forwarded over a TCP connection.
///
/// Notification failures are logged and swallowed; a failed decision
/// query is reported as a [`PlayerError`] and aborts the match.
pub struct RemotePlayerClient {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl RemotePlayerClient {
    /// Connects to `host` on the default port.
    pub fn connect(host: &str) -> io::Result<Self> {
        Self::connect_to((host, DEFAULT_PORT))
    }

    pub fn connect_to(addr: impl ToSocketAddrs) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        Ok(RemotePlayerClient {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    fn send(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    fn request(&mut self, line: &str) -> io::Result<String> {
        self.send(line)?;
        let mut response = String::new();
        if self.reader.read_line(&mut response)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "the remote player hung up",
            ));
        }
        Ok(response.trim_end().to_owned())
    }

    fn notify(&mut self, command: Command, line: &str) {
        if let Err(e) = self.send(line) {
            error!(command = command.token(), "notification lost: {e}");
        }
    }
}

impl Player for RemotePlayerClient {
    fn card_to_play(&mut self, state: &TurnState, hand: CardSet) -> Result<Card, PlayerError> {
        let line = format!(
            "{} {},{},{} {}",
            Command::Card.token(),
            serialize_u64(state.packed_score()),
            serialize_u64(state.packed_unplayed_cards()),
            serialize_u32(state.packed_trick()),
            serialize_u64(hand.packed()),
        );
        let response = self.request(&line).map_err(PlayerError::new)?;
        let packed = codec::deserialize_u32(&response).map_err(PlayerError::new)?;
        Card::of_packed(packed)
            .ok_or_else(|| PlayerError::new(CodecError::InvalidNumber(response)))
    }

    fn choose_trump(&mut self, hand: CardSet, can_pass: bool) -> Result<TrumpChoice, PlayerError> {
        let line = format!(
            "{} {} {}",
            Command::ChooseTrump.token(),
            serialize_u64(hand.packed()),
            serialize_bool(can_pass),
        );
        let response = self.request(&line).map_err(PlayerError::new)?;
        let index = codec::deserialize_u32(&response).map_err(PlayerError::new)? as usize;
        if index == Color::COUNT {
            Ok(TrumpChoice::Pass)
        } else if index < Color::COUNT {
            Ok(TrumpChoice::Trump(Color::from_index(index).expect("trump index in range")))
        } else {
            Err(PlayerError::new(CodecError::InvalidNumber(response)))
        }
    }

    fn set_players(&mut self, own_id: PlayerId, names: &[String; 4]) {
        let encoded: Vec<String> = names.iter().map(|n| codec::serialize_name(n)).collect();
        let line = format!(
            "{} {} {}",
            Command::Players.token(),
            serialize_u32(own_id.index() as u32),
            encoded.join(","),
        );
        self.notify(Command::Players, &line);
    }

    fn update_hand(&mut self, hand: CardSet) {
        let line = format!("{} {}", Command::Hand.token(), serialize_u64(hand.packed()));
        self.notify(Command::Hand, &line);
    }

    fn set_trump(&mut self, trump: Color) {
        let line = format!("{} {}", Command::Trump.token(), serialize_u32(trump.index() as u32));
        self.notify(Command::Trump, &line);
    }

    fn update_trick(&mut self, trick: Trick) {
        let line = format!("{} {}", Command::Trick.token(), serialize_u32(trick.packed()));
        self.notify(Command::Trick, &line);
    }

    fn update_score(&mut self, score: Score) {
        let line = format!("{} {}", Command::Score.token(), serialize_u64(score.packed()));
        self.notify(Command::Score, &line);
    }

    fn set_waiting(&mut self, waiting: bool) {
        let line = format!("{} {}", Command::Waiting.token(), serialize_bool(waiting));
        self.notify(Command::Waiting, &line);
    }

    fn set_winning_team(&mut self, team: TeamId) {
        let line = format!("{} {}", Command::Winner.token(), serialize_u32(team.index() as u32));
        self.notify(Command::Winner, &line);
    }
}
