//! File output: streaming trace serialization and filmstrip rendering.

pub mod html;
pub mod stream;

pub use html::render_filmstrip_html;
pub use stream::write_trace_document;
