//! Command-line front end: builds the environment from configuration,
//! drives the root store, and prints what a screen would show.

mod args;
pub mod render;
mod run;

pub use args::{Cli, Command, GatewayArg, StageArg};
pub use run::{build_gateway, run};
