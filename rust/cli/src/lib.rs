//! # unosim CLI Library
//!
//! Command-line front end for the `unosim-engine` match simulator. It plays
//! matches, saves their round traces as JSON, and reads traces back for
//! narration and consistency checks.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["unosim", "sim", "--players", "3", "--seed", "7"];
//! let code = unosim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play one match and save the round trace
//! - `deal`: Deal the opening table for inspection
//! - `replay`: Narrate a saved trace
//! - `verify`: Check a saved trace for consistency
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{COMMANDS, Commands, UnosimCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_replay_command, handle_sim_command,
    handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["unosim", "deal", "--seed", "42"];
/// let code = unosim_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match UnosimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "unosim: UNO-style match simulator");
                    write_or_exit!(err, "Usage: unosim <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: unosim --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Sim {
            players,
            hand_size,
            seed,
            output,
        } => handle_sim_command(players, hand_size, seed, output, out, err),
        Commands::Deal {
            players,
            hand_size,
            seed,
        } => handle_deal_command(players, hand_size, seed, out),
        Commands::Replay { input } => handle_replay_command(input, out, err),
        Commands::Verify { input } => {
            let Some(path) = input else {
                let _ = ui::write_error(err, "input required");
                return exit_code::ERROR;
            };
            handle_verify_command(path, out, err)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
