#![deny(warnings)]
pub mod bits;
pub mod game;
pub mod model;
pub mod packed;
pub mod rules;
