//! Audit Asset Saver
//!
//! Trace and asset capture/serialization for performance audits.
//!
//! Turns in-memory audit artifacts (execution trace, protocol log,
//! screenshot filmstrip) into durable, exactly-reproducible on-disk
//! files. Trace documents are streamed so serialization never needs the
//! whole document as one in-memory string, and round-trips preserve key
//! order and exact numeric precision.
//!
//! ## Usage
//!
//! ```ignore
//! use audit_asset_saver::{save_assets, save_trace};
//!
//! save_assets(&artifacts, &audits, "out/run").await?;
//! save_trace(&trace, "out/run.trace.json")?;
//! ```

pub mod artifacts;
pub mod assets;
pub mod markers;
pub mod output;
pub mod utils;

pub use artifacts::{
    Artifacts, AssetBundle, AuditResults, DevtoolsLog, Filmstrip, Frame, ScreenshotSource,
    StaticScreenshots, TraceDocument, TraceEvent,
};
pub use assets::{prepare_assets, save_assets, save_trace};
pub use markers::{inject_markers, marker_definitions, MarkerDefinition};
pub use output::{render_filmstrip_html, write_trace_document};
pub use utils::error::{AssetError, OutputError};
