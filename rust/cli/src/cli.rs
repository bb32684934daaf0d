//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "unosim",
    version,
    about = "Simulates UNO-style matches and inspects their round traces"
)]
pub struct UnosimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one match and save its round trace as JSON
    Sim {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        hand_size: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Trace file; defaults to Round-YYYYMMDD_HHMMSS.json in the output directory
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal the opening table and print it
    Deal {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        hand_size: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Narrate a saved trace round by round
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Check a saved trace for consistency
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Subcommand names as typed on the command line.
pub const COMMANDS: &[&str] = &["sim", "deal", "replay", "verify", "cfg"];

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_list_matches_parser() {
        let cmd = UnosimCli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, COMMANDS);
    }

    #[test]
    fn hand_size_flag_is_kebab_case() {
        let cli = UnosimCli::try_parse_from(["unosim", "deal", "--hand-size", "3"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Commands::Deal {
                hand_size: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn verify_cli_asserts() {
        UnosimCli::command().debug_assert();
    }
}
