//! Domain records shared by the gateway and the state units.

mod author;
pub mod seed;
mod watersource;

pub use author::Author;
pub use watersource::{Stage, WaterSource, COMPLETE};
