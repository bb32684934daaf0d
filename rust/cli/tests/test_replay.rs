use unosim_cli::io_utils::load_trace;
use unosim_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn replay_narrates_a_simulated_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.json");
    let p = path.to_string_lossy().into_owned();
    let (code, _, _) = run_cli(&[
        "unosim", "sim", "--players", "3", "--seed", "11", "--output", p.as_str(),
    ]);
    assert_eq!(code, 0);

    let (code, stdout, stderr) = run_cli(&["unosim", "replay", "--input", p.as_str()]);
    assert_eq!(code, 0, "{stderr}");

    let records = load_trace(&p).unwrap();
    let last = records.last().unwrap();
    assert!(stdout.contains(&format!("Round {}:", records.len())));
    assert!(stdout.contains(&format!(
        "Player {} has no more cards and has won after {} rounds!",
        last.current_player_index + 1,
        records.len()
    )));
    assert_eq!(
        stdout.matches("  standings: ").count(),
        records.len(),
        "one standings line per round"
    );
}

#[test]
fn replay_missing_file_fails() {
    let (code, stdout, stderr) =
        run_cli(&["unosim", "replay", "--input", "/nonexistent/trace.json"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Invalid input: Failed to read"));
}

#[test]
fn replay_requires_input_flag() {
    let (code, _, stderr) = run_cli(&["unosim", "replay"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--input"));
}
