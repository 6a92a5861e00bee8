#![deny(warnings)]
//! Line protocol letting one player sit in another process: a client
//! proxy that speaks for a distant player, and a server that answers
//! for a local one.

pub mod client;
pub mod codec;
pub mod server;

pub use client::{DEFAULT_PORT, RemotePlayerClient};
pub use codec::{CodecError, Command};
pub use server::{NetError, RemotePlayerServer};
