//! Wire encoding of protocol fields: unsigned lowercase hex for packed
//! values, Base64 for display names, `1`/`0` for booleans.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("not a hex number: {0:?}")]
    InvalidNumber(String),
    #[error("not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("name is not utf-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

/// The protocol's command words, one per [`jass_core::game::Player`]
/// method. Only [`Command::Card`] and [`Command::ChooseTrump`] expect
/// a response line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Identities and names, sent once.
    Players,
    /// A hand update.
    Hand,
    /// The trump chosen for the turn.
    Trump,
    /// A trick update.
    Trick,
    /// A card request; answered with a packed card.
    Card,
    /// A score update.
    Score,
    /// The winning team, sent once.
    Winner,
    /// A trump choice request; answered with a color index, or the
    /// color count for a pass.
    ChooseTrump,
    /// The waiting flag.
    Waiting,
}

impl Command {
    pub const fn token(self) -> &'static str {
        match self {
            Command::Players => "PLRS",
            Command::Hand => "HAND",
            Command::Trump => "TRMP",
            Command::Trick => "TRCK",
            Command::Card => "CARD",
            Command::Score => "SCOR",
            Command::Winner => "WINR",
            Command::ChooseTrump => "CHTR",
            Command::Waiting => "PLSW",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, CodecError> {
        match token {
            "PLRS" => Ok(Command::Players),
            "HAND" => Ok(Command::Hand),
            "TRMP" => Ok(Command::Trump),
            "TRCK" => Ok(Command::Trick),
            "CARD" => Ok(Command::Card),
            "SCOR" => Ok(Command::Score),
            "WINR" => Ok(Command::Winner),
            "CHTR" => Ok(Command::ChooseTrump),
            "PLSW" => Ok(Command::Waiting),
            other => Err(CodecError::UnknownCommand(other.to_owned())),
        }
    }
}

pub fn serialize_u32(value: u32) -> String {
    format!("{value:x}")
}

pub fn deserialize_u32(text: &str) -> Result<u32, CodecError> {
    u32::from_str_radix(text, 16).map_err(|_| CodecError::InvalidNumber(text.to_owned()))
}

pub fn serialize_u64(value: u64) -> String {
    format!("{value:x}")
}

pub fn deserialize_u64(text: &str) -> Result<u64, CodecError> {
    u64::from_str_radix(text, 16).map_err(|_| CodecError::InvalidNumber(text.to_owned()))
}

pub fn serialize_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

pub fn deserialize_bool(text: &str) -> Result<bool, CodecError> {
    Ok(deserialize_u32(text)? == 1)
}

pub fn serialize_name(name: &str) -> String {
    STANDARD.encode(name.as_bytes())
}

pub fn deserialize_name(text: &str) -> Result<String, CodecError> {
    Ok(String::from_utf8(STANDARD.decode(text)?)?)
}

#[cfg(test)]
mod tests {
    use super::{
        Command, deserialize_bool, deserialize_name, deserialize_u32, deserialize_u64,
        serialize_bool, serialize_name, serialize_u32, serialize_u64,
    };

    #[test]
    fn numbers_use_unsigned_lowercase_hex() {
        assert_eq!(serialize_u32(0xFFFF_FFFF), "ffffffff");
        assert_eq!(serialize_u64(0x01FF_01FF_01FF_01FF), "1ff01ff01ff01ff");
        assert_eq!(deserialize_u32("ffffffff").unwrap(), 0xFFFF_FFFF);
        assert_eq!(deserialize_u64("1ff01ff01ff01ff").unwrap(), 0x01FF_01FF_01FF_01FF);
        assert!(deserialize_u32("zz").is_err());
    }

    #[test]
    fn bools_are_one_and_zero() {
        assert_eq!(serialize_bool(true), "1");
        assert_eq!(serialize_bool(false), "0");
        assert!(deserialize_bool("1").unwrap());
        assert!(!deserialize_bool("0").unwrap());
    }

    #[test]
    fn names_round_trip_through_base64() {
        assert_eq!(serialize_name("Aline"), "QWxpbmU=");
        assert_eq!(deserialize_name("QWxpbmU=").unwrap(), "Aline");
        assert_eq!(deserialize_name(&serialize_name("Gaëlle")).unwrap(), "Gaëlle");
        assert!(deserialize_name("!!").is_err());
    }

    #[test]
    fn every_token_round_trips() {
        for command in [
            Command::Players,
            Command::Hand,
            Command::Trump,
            Command::Trick,
            Command::Card,
            Command::Score,
            Command::Winner,
            Command::ChooseTrump,
            Command::Waiting,
        ] {
            assert_eq!(Command::from_token(command.token()).unwrap(), command);
        }
        assert!(Command::from_token("NOPE").is_err());
    }
}
