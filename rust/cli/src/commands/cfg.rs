//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "output_dir": {
            "value": config.output_dir,
            "source": sources.output_dir,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
