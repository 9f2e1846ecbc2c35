//! Memory Trace Loader.
//!
//! Reads text traces of processor memory references. Each non-blank line is
//! either `<core> <op> <address>` or `<op> <address>` (core 0). `#` starts a
//! comment. Operations are `0`/`l`/`load`/`r`/`read` for loads and
//! `1`/`s`/`store`/`w`/`write` for stores, in any case. Addresses are
//! hexadecimal, with or without `0x`, and are truncated to 32 bits.

use std::fs;

use crate::common::{Action, TraceError, ADDR_BITS};

const ADDR_HEX_DIGITS: usize = (ADDR_BITS / 4) as usize;

/// One processor reference from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// 1-based line number in the source trace.
    pub line: usize,
    pub core: usize,
    pub addr: u32,
    pub action: Action,
}

/// Reads and parses a trace file.
pub fn load_trace(path: &str) -> Result<Vec<TraceRecord>, TraceError> {
    let content = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_trace(&content)
}

/// Parses trace text, failing on the first malformed line.
pub fn parse_trace(content: &str) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        let (core, op, addr) = match fields.as_slice() {
            [op, addr] => (0, *op, *addr),
            [core, op, addr] => {
                let core = core.parse::<usize>().map_err(|_| TraceError::Parse {
                    line,
                    reason: format!("invalid core id '{}'", core),
                })?;
                (core, *op, *addr)
            }
            _ => {
                return Err(TraceError::Parse {
                    line,
                    reason: format!("expected 2 or 3 fields, found {}", fields.len()),
                })
            }
        };

        records.push(TraceRecord {
            line,
            core,
            action: parse_op(op).ok_or_else(|| TraceError::Parse {
                line,
                reason: format!("unknown operation '{}'", op),
            })?,
            addr: parse_addr(addr).ok_or_else(|| TraceError::Parse {
                line,
                reason: format!("invalid address '{}'", addr),
            })?,
        });
    }
    Ok(records)
}

fn parse_op(op: &str) -> Option<Action> {
    match op.to_ascii_lowercase().as_str() {
        "0" | "l" | "load" | "r" | "read" => Some(Action::Load),
        "1" | "s" | "store" | "w" | "write" => Some(Action::Store),
        _ => None,
    }
}

/// Parses a hex address, keeping only its low 32 bits. Signs, a repeated
/// prefix, and non-hex characters are rejected.
fn parse_addr(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let low = &digits[digits.len().saturating_sub(ADDR_HEX_DIGITS)..];
    u32::from_str_radix(low, 16).ok()
}
