//! The side that hosts the actual player: it answers one connected
//! game loop, line by line, until the connection closes.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpListener;

use thiserror::Error;
use tracing::{debug, info};

use jass_core::game::{Player, PlayerError, TrumpChoice};
use jass_core::model::{CardSet, Color, PlayerId, Score, TeamId, Trick, TurnState};

use crate::codec::{self, CodecError, Command, serialize_u32};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("connection failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad field: {0}")]
    Codec(#[from] CodecError),
    #[error("malformed command line: {0:?}")]
    MalformedLine(String),
    #[error("local player failed: {0}")]
    Player(#[from] PlayerError),
}

/// Serves a local [`Player`] to a remote game loop.
pub struct RemotePlayerServer<P> {
    local: P,
}

impl<P: Player> RemotePlayerServer<P> {
    pub fn new(local: P) -> Self {
        RemotePlayerServer { local }
    }

    /// Accepts one connection and serves it until the peer hangs up.
    pub fn run(mut self, listener: TcpListener) -> Result<(), NetError> {
        let (stream, peer) = listener.accept()?;
        info!(%peer, "game connected");
        let mut reader = BufReader::new(stream.try_clone()?);
        let mut writer = BufWriter::new(stream);
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                info!("game disconnected");
                return Ok(());
            }
            if let Some(response) = self.execute(line.trim_end())? {
                writer.write_all(response.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
    }

    /// Dispatches one command line to the local player, returning the
    /// response line for the two query commands.
    fn execute(&mut self, line: &str) -> Result<Option<String>, NetError> {
        let malformed = || NetError::MalformedLine(line.to_owned());
        let mut tokens = line.split(' ');
        let command = Command::from_token(tokens.next().ok_or_else(malformed)?)?;
        debug!(command = command.token(), "command received");
        let mut next_token = || tokens.next().ok_or_else(malformed);
        match command {
            Command::Players => {
                let own_index = codec::deserialize_u32(next_token()?)? as usize;
                let own_id = PlayerId::from_index(own_index).ok_or_else(malformed)?;
                let mut names: [String; 4] = Default::default();
                let mut fields = next_token()?.split(',');
                for name in &mut names {
                    *name = codec::deserialize_name(fields.next().ok_or_else(malformed)?)?;
                }
                self.local.set_players(own_id, &names);
                Ok(None)
            }
            Command::Hand => {
                let hand = CardSet::of_packed(codec::deserialize_u64(next_token()?)?)
                    .ok_or_else(malformed)?;
                self.local.update_hand(hand);
                Ok(None)
            }
            Command::Trump => {
                let index = codec::deserialize_u32(next_token()?)? as usize;
                let trump = Color::from_index(index).ok_or_else(malformed)?;
                self.local.set_trump(trump);
                Ok(None)
            }
            Command::Trick => {
                let trick = Trick::of_packed(codec::deserialize_u32(next_token()?)?)
                    .ok_or_else(malformed)?;
                self.local.update_trick(trick);
                Ok(None)
            }
            Command::Card => {
                let mut components = next_token()?.split(',');
                let mut component = || components.next().ok_or_else(malformed);
                let score = codec::deserialize_u64(component()?)?;
                let unplayed = codec::deserialize_u64(component()?)?;
                let trick = codec::deserialize_u32(component()?)?;
                let state = TurnState::of_packed_components(score, unplayed, trick)
                    .ok_or_else(malformed)?;
                let hand = CardSet::of_packed(codec::deserialize_u64(next_token()?)?)
                    .ok_or_else(malformed)?;
                let card = self.local.card_to_play(&state, hand)?;
                Ok(Some(serialize_u32(card.packed())))
            }
            Command::Score => {
                let score = Score::of_packed(codec::deserialize_u64(next_token()?)?)
                    .ok_or_else(malformed)?;
                self.local.update_score(score);
                Ok(None)
            }
            Command::Winner => {
                let index = codec::deserialize_u32(next_token()?)? as usize;
                let winner = TeamId::from_index(index).ok_or_else(malformed)?;
                self.local.set_winning_team(winner);
                Ok(None)
            }
            Command::ChooseTrump => {
                let hand = CardSet::of_packed(codec::deserialize_u64(next_token()?)?)
                    .ok_or_else(malformed)?;
                let can_pass = codec::deserialize_bool(next_token()?)?;
                let choice = self.local.choose_trump(hand, can_pass)?;
                let index = match choice {
                    TrumpChoice::Trump(color) => color.index() as u32,
                    TrumpChoice::Pass => Color::COUNT as u32,
                };
                Ok(Some(serialize_u32(index)))
            }
            Command::Waiting => {
                self.local.set_waiting(codec::deserialize_bool(next_token()?)?);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NetError, RemotePlayerServer};
    use jass_core::game::{Player, PlayerError, TrumpChoice};
    use jass_core::model::{Card, CardSet};

    struct Stub;

    impl Player for Stub {
        fn card_to_play(&mut self, _: &jass_core::model::TurnState, hand: CardSet) -> Result<Card, PlayerError> {
            Ok(hand.get(0))
        }

        fn choose_trump(&mut self, _: CardSet, _: bool) -> Result<TrumpChoice, PlayerError> {
            Ok(TrumpChoice::Pass)
        }
    }

    #[test]
    fn bad_lines_are_rejected() {
        let mut server = RemotePlayerServer::new(Stub);
        assert!(matches!(server.execute("NOPE 1"), Err(NetError::Codec(_))));
        assert!(matches!(server.execute("HAND"), Err(NetError::MalformedLine(_))));
        // padding bit set in the card set
        assert!(matches!(server.execute("HAND 200"), Err(NetError::MalformedLine(_))));
        assert!(matches!(server.execute("TRMP 7"), Err(NetError::MalformedLine(_))));
    }

    #[test]
    fn queries_produce_a_response_and_notifications_none() {
        let mut server = RemotePlayerServer::new(Stub);
        assert_eq!(server.execute("HAND 1ff").unwrap(), None);
        assert_eq!(server.execute("PLSW 1").unwrap(), None);
        // pass is encoded as the color count
        assert_eq!(server.execute("CHTR 1ff 1").unwrap(), Some("4".to_owned()));
        // empty first trick, all cards unplayed, a hand of spades; the
        // stub answers with its lowest card, the six of spades
        assert_eq!(
            server.execute("CARD 0,1ff01ff01ff01ff,ffffff 1ff").unwrap(),
            Some("0".to_owned())
        );
    }
}
