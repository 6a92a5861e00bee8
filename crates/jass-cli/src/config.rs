//! Seat specifications of the form `kind[:name[:detail]]`.

use thiserror::Error;

pub const DEFAULT_NAMES: [&str; 4] = ["Aline", "Bastien", "Colette", "David"];
pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const MIN_ITERATIONS: u32 = 10;
pub const DEFAULT_HOST: &str = "localhost";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown player kind in seat spec {0:?} (expected h, s or r)")]
    UnknownKind(String),
    #[error("not a number of iterations: {0:?}")]
    BadIterations(String),
    #[error("a simulated player needs at least {MIN_ITERATIONS} iterations, got {0}")]
    TooFewIterations(u32),
    #[error("too many fields in seat spec {0:?}")]
    TooManyFields(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatKind {
    /// An interactive player at this console.
    Human,
    /// A search player with a fixed iteration budget.
    Simulated { iterations: u32 },
    /// A player served by another process.
    Remote { host: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub kind: SeatKind,
}

impl SeatConfig {
    /// Parses one seat spec: `h[:name]`, `s[:name[:iterations]]` or
    /// `r[:name[:host]]`. An empty or missing name falls back to the
    /// seat's default name.
    pub fn parse(seat_index: usize, spec: &str) -> Result<Self, ConfigError> {
        let fields: Vec<&str> = spec.split(':').collect();
        let name = match fields.get(1) {
            Some(name) if !name.is_empty() => (*name).to_owned(),
            _ => DEFAULT_NAMES[seat_index].to_owned(),
        };
        let max_fields = if fields[0] == "h" { 2 } else { 3 };
        if fields.len() > max_fields {
            return Err(ConfigError::TooManyFields(spec.to_owned()));
        }
        let kind = match fields[0] {
            "h" => SeatKind::Human,
            "s" => {
                let iterations = match fields.get(2) {
                    Some(text) => text
                        .parse()
                        .map_err(|_| ConfigError::BadIterations((*text).to_owned()))?,
                    None => DEFAULT_ITERATIONS,
                };
                if iterations < MIN_ITERATIONS {
                    return Err(ConfigError::TooFewIterations(iterations));
                }
                SeatKind::Simulated { iterations }
            }
            "r" => {
                let host = match fields.get(2) {
                    Some(host) if !host.is_empty() => (*host).to_owned(),
                    _ => DEFAULT_HOST.to_owned(),
                };
                SeatKind::Remote { host }
            }
            other => return Err(ConfigError::UnknownKind(other.to_owned())),
        };
        Ok(SeatConfig { name, kind })
    }
}
