//! Data model for audit artifacts and prepared asset bundles.
//!
//! Trace documents are deliberately dynamic: the instrumentation layer
//! attaches top-level keys we do not interpret, and all of them must
//! survive a write/read round-trip with key order and numeric precision
//! intact. We therefore model the document as an ordered string-to-value
//! map rather than a fixed struct (serde_json is built with
//! `preserve_order` for exactly this reason).

use crate::artifacts::screenshots::ScreenshotSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A trace document: ordered top-level keys, `traceEvents` among them
pub type TraceDocument = serde_json::Map<String, serde_json::Value>;

/// One opaque trace event record
pub type TraceEvent = serde_json::Value;

/// Ordered sequence of opaque instrumentation-protocol messages
pub type DevtoolsLog = Vec<serde_json::Value>;

/// Audit/metric results keyed by audit id; values may be non-numeric
pub type AuditResults = HashMap<String, serde_json::Value>;

/// One screenshot frame with its capture timestamp (milliseconds)
///
/// Field order matters: `timestamp` is declared first so serialized
/// frames start with `{"timestamp":...`, which downstream viewers key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Capture time
    pub timestamp: f64,

    /// Image payload as a data URI
    pub datauri: String,
}

/// Time-ordered sequence of screenshot frames
pub type Filmstrip = Vec<Frame>;

/// Raw artifacts produced by one gathering run
///
/// `traces` is an ordered sequence of `(pass_name, trace)` pairs; the
/// position of a pass here determines its zero-based index in output
/// file names. A pass without an entry in `devtools_logs` is treated as
/// having an empty log.
#[derive(Clone)]
pub struct Artifacts {
    /// Per-pass trace documents, in pass order
    pub traces: Vec<(String, TraceDocument)>,

    /// Per-pass protocol logs
    pub devtools_logs: HashMap<String, DevtoolsLog>,

    /// Capability for retrieving the screenshot filmstrip
    pub screenshots: Arc<dyn ScreenshotSource>,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("traces", &self.traces.iter().map(|(p, _)| p).collect::<Vec<_>>())
            .field("devtools_logs", &self.devtools_logs.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Prepared per-pass outputs, ready to persist
///
/// Created once per gathering pass by the preparer and immutable
/// thereafter; the persister writes it to disk and drops it.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    /// Name of the gathering pass this bundle belongs to
    pub pass_name: String,

    /// Trace document, marker-augmented for the default pass
    pub trace_data: TraceDocument,

    /// Protocol log for the pass (empty if none was gathered)
    pub devtools_log: DevtoolsLog,

    /// Rendered HTML filmstrip page
    pub screenshots_html: String,

    /// Raw filmstrip frames
    pub screenshots_json: Filmstrip,
}
