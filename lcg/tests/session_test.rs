/// Integration tests driving whole sessions through in-memory input and output.
use clap::Parser;
use lcg_cli::prompt::{COUNT_PROMPT, SEED_PROMPT};
use lcg_cli::{run_session, Args, CliError, BANNER, STATUS};
use lcgrandom::{LcgError, OutputMode};
use std::io::Cursor;

fn session(argv: &[&str], mode: OutputMode, input: &str) -> (Result<(), CliError>, String) {
    let args = Args::try_parse_from(argv).unwrap_or_else(|e| panic!("{:?}: {}", argv, e));
    let mut reader = Cursor::new(input.as_bytes());
    let mut out = Vec::new();
    let result = run_session(&args, mode, &mut reader, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_materialized_from_arguments() {
    let (result, out) = session(&["lcg", "15", "1"], OutputMode::Materialized, "");
    assert!(result.is_ok());
    assert_eq!(
        out,
        format!(
            "{}{}\n14212996 790583 -11990498 4094057 13179272 9990699 -3361726 -8844803 570572 4960351\n",
            BANNER, STATUS
        )
    );
}

#[test]
fn test_streaming_from_arguments() {
    let (result, out) = session(&["lcg-np", "5", "42"], OutputMode::Streaming, "");
    assert!(result.is_ok());
    assert_eq!(out, format!("{}{}\n-1552882\n", BANNER, STATUS));
}

#[test]
fn test_negative_seed_argument() {
    let (result, out) = session(&["lcg-np", "3", "-7"], OutputMode::Streaming, "");
    assert!(result.is_ok());
    assert!(out.ends_with("\n7910971\n"), "Unexpected output: {:?}", out);
}

#[test]
fn test_short_materialized_run() {
    let (result, out) = session(&["lcg", "1", "9"], OutputMode::Materialized, "");
    assert!(result.is_ok());
    assert!(out.ends_with(&format!("{}\n9\n", STATUS)));
}

#[test]
fn test_zero_count_argument_is_validation_error() {
    let (result, out) = session(&["lcg", "0", "1"], OutputMode::Materialized, "");
    match result {
        Err(CliError::Generate(LcgError::NonPositiveLength(0))) => {}
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert!(!out.contains(STATUS));
}

#[test]
fn test_negative_count_argument_is_validation_error() {
    let (result, _) = session(&["lcg", "-3", "1"], OutputMode::Streaming, "");
    assert!(matches!(
        result,
        Err(CliError::Generate(LcgError::NonPositiveLength(-3)))
    ));
}

#[test]
fn test_interactive_session() {
    let (result, out) = session(&["lcg"], OutputMode::Streaming, "five\n5\n42\n");
    assert!(result.is_ok());
    assert!(out.starts_with(&format!("{}{}\n", BANNER, COUNT_PROMPT)));
    assert_eq!(out.matches(COUNT_PROMPT).count(), 2);
    assert_eq!(out.matches(SEED_PROMPT).count(), 1);
    assert!(out.ends_with(&format!("{}\n-1552882\n", STATUS)));
}

#[test]
fn test_interactive_sentinel_quits() {
    let (result, out) = session(&["lcg"], OutputMode::Materialized, "0\n");
    assert!(result.is_ok());
    assert!(!out.contains(SEED_PROMPT));
    assert!(!out.contains(STATUS));
}

#[test]
fn test_interactive_end_of_input_quits() {
    let (result, out) = session(&["lcg"], OutputMode::Materialized, "");
    assert!(result.is_ok());
    assert!(!out.contains(STATUS));
}

#[test]
fn test_one_argument_prompts() {
    let (result, out) = session(&["lcg", "10"], OutputMode::Streaming, "5\n42\n");
    assert!(result.is_ok());
    assert!(out.starts_with(&format!("{}{}\n", BANNER, COUNT_PROMPT)));
    assert_eq!(out.matches(SEED_PROMPT).count(), 1);
    assert!(out.ends_with(&format!("{}\n-1552882\n", STATUS)));
}

#[test]
fn test_three_arguments_prompt() {
    let (result, out) = session(&["lcg", "1", "2", "3"], OutputMode::Materialized, "1\n9\n");
    assert!(result.is_ok());
    assert_eq!(out.matches(COUNT_PROMPT).count(), 1);
    assert!(out.ends_with(&format!("{}\n9\n", STATUS)));
}

#[test]
fn test_extra_arguments_quit_on_sentinel() {
    let (result, out) = session(&["lcg-np", "abc"], OutputMode::Streaming, "0\n");
    assert!(result.is_ok());
    assert!(!out.contains(STATUS));
}

#[test]
fn test_usage_errors() {
    for argv in [
        ["lcg", "abc", "1"],
        ["lcg", "10", "x"],
        ["lcg", "10", "2147483648"],
        ["lcg", "1.5", "3"],
    ] {
        let args = Args::try_parse_from(argv).unwrap();
        assert!(args.request().is_err(), "{:?} should be a usage error", argv);
    }

    let (result, out) = session(&["lcg", "abc", "1"], OutputMode::Materialized, "5\n42\n");
    assert!(matches!(result, Err(CliError::Usage(_))));
    assert!(!out.contains(COUNT_PROMPT));
}

#[test]
fn test_verbose_flag() {
    let args = Args::try_parse_from(["lcg", "-v", "10", "-5"]).unwrap();
    assert!(args.verbose);
    assert_eq!(args.request().unwrap(), Some((10, -5)));
}
