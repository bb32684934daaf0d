//! Verify command handler module.
//!
//! Checks that a saved trace is one consistent match: contiguous round
//! numbers, a constant opening, a discard stack that only ever grows by one
//! card on top, and exactly one emptied hand in the final round belonging
//! to the recorded winner. See [`crate::validation::validate_trace`].

use std::collections::HashSet;
use std::io::Write;

use crate::error::CliError;
use crate::io_utils::load_trace;
use crate::validation::validate_trace;

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if all checks pass, otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use unosim_cli::commands::handle_verify_command;
/// let input = "Round-20240101_120000.json".to_string();
/// let result = handle_verify_command(input, &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_trace(&input).map_err(CliError::InvalidInput)?;
    let rounds = records.len();
    let errors = validate_trace(&records);

    if errors.is_empty() {
        writeln!(out, "Verify: OK (rounds={})", rounds)?;
        return Ok(());
    }

    writeln!(out, "Verify: FAIL (rounds={})", rounds)?;
    writeln!(err)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  round {}", error)?;
    }
    writeln!(err)?;
    let invalid_rounds: HashSet<u64> = errors.iter().map(|e| e.item_context).collect();
    writeln!(
        err,
        "Summary: {} error(s) in {} rounds ({} invalid rounds)",
        errors.len(),
        rounds,
        invalid_rounds.len()
    )?;
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}
