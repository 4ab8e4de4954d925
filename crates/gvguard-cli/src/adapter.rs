// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard JSON Adapter
// ─────────────────────────────────────────────────────────────────────
//! Stream adapters between host JSON and the guard/Sentinel.
//!
//! The core never sees I/O failures; everything that can go wrong with
//! the input stream surfaces here as `GuardError::Input`.

use std::io::{BufRead, Read, Write};

use indexmap::IndexMap;
use serde::Serialize;

use gvguard_core::{RiskAccumulator, Sentinel};
use gvguard_types::{
    Decision, GuardConfig, GuardError, GuardResult, SentinelConfig, SentinelRecord,
    TelemetrySample,
};

fn read_document<R: Read>(mut reader: R) -> GuardResult<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| GuardError::Input(format!("reading stdin: {e}")))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GuardError::Input("expected JSON on stdin".to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_sample(raw: &str) -> GuardResult<TelemetrySample> {
    serde_json::from_str(raw).map_err(|e| GuardError::Input(format!("invalid JSON: {e}")))
}

fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T, pretty: bool) -> GuardResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| GuardError::Serialization(e.to_string()))?;
    writeln!(writer, "{rendered}")
        .and_then(|()| writer.flush())
        .map_err(|e| GuardError::Serialization(format!("writing output: {e}")))
}

/// Read one telemetry object, step a fresh guard, write pretty JSON.
pub fn step_once<R: Read, W: Write>(
    config: GuardConfig,
    reader: R,
    writer: W,
) -> GuardResult<Decision> {
    let raw = read_document(reader)?;
    let sample = parse_sample(&raw)?;
    let mut guard = RiskAccumulator::new(config);
    let decision = guard.step(&sample);
    write_json(writer, &decision, true)?;
    Ok(decision)
}

/// Step one guard per non-blank input line, writing one compact JSON
/// decision per line. Returns the number of steps taken.
///
/// A malformed line stops the stream; decisions already written stay.
pub fn step_lines<R: BufRead, W: Write>(
    config: GuardConfig,
    reader: R,
    mut writer: W,
) -> GuardResult<u64> {
    let mut guard = RiskAccumulator::new(config);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GuardError::Input(format!("reading stdin: {e}")))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let sample = parse_sample(line)
            .map_err(|e| GuardError::Input(format!("line {}: {e}", idx + 1)))?;
        let decision = guard.step(&sample);
        write_json(&mut writer, &decision, false)?;
    }
    if guard.step_count() == 0 {
        return Err(GuardError::Input("expected JSON on stdin".to_string()));
    }
    Ok(guard.step_count())
}

/// Read one JSON map of signal name → value and write the Sentinel record.
pub fn sentinel_once<R: Read, W: Write>(
    config: SentinelConfig,
    system_id: &str,
    reader: R,
    writer: W,
) -> GuardResult<SentinelRecord> {
    let raw = read_document(reader)?;
    let signals: IndexMap<String, f64> =
        serde_json::from_str(&raw).map_err(|e| GuardError::Input(format!("invalid JSON: {e}")))?;
    let mut sentinel = Sentinel::new(system_id, config);
    let record = sentinel.evaluate(signals);
    write_json(writer, &record, true)?;
    Ok(record)
}
