//! Streaming trace document writer.
//!
//! Trace documents routinely serialize past the practical in-memory
//! string limit (~256MB observed), so the whole document must never be
//! materialized as one string. Everything except the `traceEvents` array
//! is assumed bounded and serialized normally; `traceEvents` is streamed
//! one element at a time, so peak memory for it is one event plus the
//! write buffer regardless of total output size.

use crate::artifacts::schema::TraceDocument;
use crate::utils::config::TRACE_EVENTS_KEY;
use crate::utils::error::OutputError;
use log::debug;
use serde_json::Value;
use std::io::{BufWriter, Write};

/// Serialize a trace document incrementally to a byte sink
///
/// **Public** - main entry point for trace serialization
///
/// Top-level keys are written in their original order. The `traceEvents`
/// array is streamed in place at its key's position, which keeps the
/// parsed output deep-equal to the input (key order included) while
/// still bounding memory; every other value goes through ordinary
/// nested serialization.
///
/// # Arguments
/// * `trace` - Trace document to serialize
/// * `sink` - Writable byte sink (e.g. an open file)
///
/// # Returns
/// Ok once the full document has been written and flushed
///
/// # Errors
/// * `OutputError::WriteFailed` - the sink rejected a write
/// * `OutputError::SerializationFailed` - a value is not representable
///   as JSON; the state of already-written output is undefined
///
/// The sink is dropped (closed) on every exit path, including a failure
/// mid-stream.
pub fn write_trace_document<W: Write>(trace: &TraceDocument, sink: W) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(sink);

    writer.write_all(b"{")?;

    let mut first = true;
    for (key, value) in trace {
        if !first {
            writer.write_all(b",")?;
        }
        first = false;

        serde_json::to_writer(&mut writer, key)?;
        writer.write_all(b":")?;

        match value {
            Value::Array(events) if key == TRACE_EVENTS_KEY => {
                write_event_array(&mut writer, events)?;
            }
            other => serde_json::to_writer(&mut writer, other)?,
        }
    }

    writer.write_all(b"}")?;
    writer.flush()?;

    Ok(())
}

/// Stream the trace event array element by element
///
/// **Private** - internal helper for write_trace_document
fn write_event_array<W: Write>(writer: &mut W, events: &[Value]) -> Result<(), OutputError> {
    debug!("Streaming {} trace events", events.len());

    writer.write_all(b"[")?;
    for (index, event) in events.iter().enumerate() {
        if index > 0 {
            writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut *writer, event)?;
    }
    writer.write_all(b"]")?;

    Ok(())
}
