//! Integration tests for trace parsing.

use coherence_cache_sim::common::{Action, TraceError};
use coherence_cache_sim::sim::trace::{load_trace, parse_trace, TraceRecord};

/// Tests parsing of three-field records.
#[test]
fn test_parse_core_records() {
    let records = parse_trace("0 0 0x1000\n1 1 2040\n").unwrap();

    assert_eq!(
        records,
        vec![
            TraceRecord {
                line: 1,
                core: 0,
                addr: 0x1000,
                action: Action::Load,
            },
            TraceRecord {
                line: 2,
                core: 1,
                addr: 0x2040,
                action: Action::Store,
            },
        ]
    );
}

/// Tests two-field records default to core 0.
#[test]
fn test_parse_single_core_records() {
    let records = parse_trace("L 0x10\nstore 0x20\nR 30\nW 0X40\n").unwrap();

    let actions: Vec<Action> = records.iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        [Action::Load, Action::Store, Action::Load, Action::Store]
    );
    assert!(records.iter().all(|r| r.core == 0));
    assert_eq!(records[2].addr, 0x30);
    assert_eq!(records[3].addr, 0x40);
}

/// Tests that blank lines and comments are skipped.
#[test]
fn test_skips_blank_and_comments() {
    let trace = "# header\n\n0 0 0x0   # first\n   \n0 1 0x4\n";
    let records = parse_trace(trace).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, 3);
    assert_eq!(records[1].line, 5);
}

/// Tests truncation of wide addresses to 32 bits.
#[test]
fn test_address_truncated() {
    let records = parse_trace("0 0 0x100000040").unwrap();
    assert_eq!(records[0].addr, 0x40);
}

/// Tests that addresses wider than 64 bits are truncated, not rejected.
#[test]
fn test_very_long_address_truncated() {
    let text = "0 0 0xffffffffffffffff12345678\n1 1 00000000000000000000dead\n";
    let records = parse_trace(text).unwrap();
    assert_eq!(records[0].addr, 0x1234_5678);
    assert_eq!(records[1].addr, 0xdead);
}

/// Tests that signed and doubly prefixed addresses are rejected.
#[test]
fn test_rejects_malformed_address_prefix() {
    for text in ["0 0 +1f\n", "0 0 -1f\n", "0 0 0x0x10\n", "0 0 0x\n", "0 0 0X+1\n"] {
        assert!(
            matches!(parse_trace(text), Err(TraceError::Parse { line: 1, .. })),
            "{:?}",
            text
        );
    }
    assert_eq!(parse_trace("0 0 0X1f").unwrap()[0].addr, 0x1f);
    assert_eq!(parse_trace("0 0 1f").unwrap()[0].addr, 0x1f);
}

/// Tests error reporting for malformed lines.
#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_trace("0 0 0x0\n0 X 0x4\n"),
        Err(TraceError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        parse_trace("0 0 zz\n"),
        Err(TraceError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_trace("a 0 0x0\n"),
        Err(TraceError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_trace("0 0 0x0 extra\n"),
        Err(TraceError::Parse { line: 1, .. })
    ));
}

/// Tests an empty trace.
#[test]
fn test_empty_trace() {
    assert!(parse_trace("").unwrap().is_empty());
}

/// Tests loading a trace from disk.
#[test]
fn test_load_trace_file() {
    let path = std::env::temp_dir().join(format!("cachesim-trace-{}.txt", std::process::id()));
    std::fs::write(&path, "0 1 0xabc\n").unwrap();

    let records = load_trace(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].action, Action::Store);
    assert_eq!(records[0].addr, 0xabc);
}

/// Tests the error for a missing file.
#[test]
fn test_load_trace_missing_file() {
    assert!(matches!(
        load_trace("/nonexistent/cachesim/trace.txt"),
        Err(TraceError::Io { .. })
    ));
}
