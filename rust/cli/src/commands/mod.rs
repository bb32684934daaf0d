//! Command handler modules for the unosim CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via `CliError` and reported once by [`crate::run`]

pub mod cfg;
pub mod deal;
pub mod replay;
pub mod sim;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use replay::handle_replay_command;
pub use sim::handle_sim_command;
pub use verify::handle_verify_command;
