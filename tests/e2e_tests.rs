use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_terminal(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_verb_practice"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start verb_practice");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write answers");

    child.wait_with_output().expect("Failed to wait for verb_practice")
}

#[test]
fn test_terminal_session_with_rounds() {
    let output = run_terminal(
        &["--terminal", "--no-color", "--seed", "5", "--rounds", "2"],
        "1\n2\n",
    );

    assert!(
        output.status.success(),
        "verb_practice failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Passato Prossimo - Recent past"));
    assert_eq!(stdout.matches("Complete the sentence:").count(), 2);
    assert!(stdout.contains("Session complete:"));
    assert!(stdout.contains("/2 correct"));
}

#[test]
fn test_terminal_session_ends_when_input_closes() {
    let output = run_terminal(&["--terminal", "--no-color", "--level", "b2"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Session complete: 0/0 correct (0.0%), best streak 0"));
}

#[test]
fn test_same_seed_gives_same_session() {
    let args = ["--terminal", "--no-color", "--seed", "42", "--rounds", "3"];
    let first = run_terminal(&args, "1\n1\n1\n");
    let second = run_terminal(&args, "1\n1\n1\n");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_invalid_tense_is_rejected() {
    let output = run_terminal(&["--terminal", "--tense", "aoristo"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid value for --tense: 'aoristo'"));
}

#[test]
fn test_tense_without_verbs_is_reported() {
    let output = run_terminal(&["--terminal", "--tense", "trapassato"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no verb in the table supports tense 'trapassato'"));
}

#[test]
fn test_exercise_sampler_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_exercise_sampler"))
        .args(["passatoProssimo", "2", "9"])
        .output()
        .expect("Failed to execute exercise_sampler");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sample exercises for: tense=passatoProssimo, count=2, seed=9"));
    assert!(stdout.contains("1. "));
    assert!(stdout.contains("2. "));
    assert_eq!(stdout.matches("[avere]").count(), 6);
    assert_eq!(stdout.matches("[essere]").count(), 6);
}

#[test]
fn test_exercise_sampler_rejects_unknown_tense() {
    let output = Command::new(env!("CARGO_BIN_EXE_exercise_sampler"))
        .arg("aoristo")
        .output()
        .expect("Failed to execute exercise_sampler");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown tense 'aoristo'"));
}
