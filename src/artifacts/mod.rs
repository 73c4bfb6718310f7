//! Artifact data model and collaborator capabilities.

pub mod schema;
pub mod screenshots;

pub use schema::{
    Artifacts, AssetBundle, AuditResults, DevtoolsLog, Filmstrip, Frame, TraceDocument, TraceEvent,
};
pub use screenshots::{ScreenshotSource, StaticScreenshots};
