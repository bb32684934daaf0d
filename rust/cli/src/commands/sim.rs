//! Simulation command handler.
//!
//! Plays one match from the deal to the first emptied hand and saves the
//! round trace as a single JSON array. Without `--output` the trace lands
//! in the configured output directory as `Round-YYYYMMDD_HHMMSS.json`.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;
use unosim_engine::engine::Engine;

use crate::config;
use crate::error::CliError;
use crate::io_utils::{trace_file_name, write_trace};
use crate::ui;

/// Handle the sim command.
///
/// Command-line values win over the resolved configuration. The seed in use
/// is always printed so the match can be reproduced.
///
/// # Errors
///
/// `CliError::Config` for an impossible table, `CliError::Io` when the
/// trace cannot be written.
pub fn handle_sim_command(
    players: Option<usize>,
    hand_size: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let table = cfg.match_config(players, hand_size);
    let engine = Engine::new(table, seed.or(cfg.seed))?;
    let seed = engine.seed();

    let records = engine.run()?;
    let last = records
        .last()
        .ok_or_else(|| CliError::Engine("match produced no rounds".into()))?;
    let winner = last.current_player_index;

    let path = match output {
        Some(p) => PathBuf::from(p),
        None => Path::new(&cfg.output_dir).join(trace_file_name(&Local::now())),
    };
    if path.exists() {
        ui::display_warning(err, &format!("overwriting {}", path.display()))?;
    }
    write_trace(&path, &records)?;
    info!(path = %path.display(), rounds = records.len(), "trace saved");

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Winner: {} after {} rounds",
        ui::seat_label(winner),
        records.len()
    )?;
    writeln!(out, "Saved: {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_utils::load_trace;

    fn sim(seed: u64, path: &Path) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(
            Some(3),
            Some(5),
            Some(seed),
            Some(path.to_string_lossy().into_owned()),
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_sim_writes_trace_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let (out, err) = sim(8, &path);

        let records = load_trace(path.to_str().unwrap()).unwrap();
        assert!(!records.is_empty());
        assert_eq!(records[0].player_hands.len(), 3);
        assert!(out.starts_with("Seed: 8\n"));
        assert!(out.contains(&format!("after {} rounds", records.len())));
        assert!(out.contains("Saved: "));
        assert!(err.is_empty());
    }

    #[test]
    fn test_sim_same_seed_same_trace() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        sim(77, &a);
        sim(77, &b);
        assert_eq!(
            std::fs::read_to_string(&a).unwrap(),
            std::fs::read_to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_sim_warns_before_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        sim(1, &path);
        let (_, err) = sim(2, &path);
        assert!(err.starts_with("WARNING: overwriting"));
    }

    #[test]
    fn test_sim_rejects_single_player() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(Some(1), None, Some(1), None, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
    }
}
