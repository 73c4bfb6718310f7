//! Configuration and constants shared across the crate.

/// Name of the gathering pass that receives marker injection
pub const DEFAULT_PASS: &str = "defaultPass";

/// Top-level trace document key holding the event array
pub const TRACE_EVENTS_KEY: &str = "traceEvents";

/// Trace timestamps are microseconds; audit metric values are milliseconds
pub const MICROS_PER_MS: f64 = 1000.0;

/// Category assigned to synthetic marker events
pub const USER_TIMING_CATEGORY: &str = "blink.user_timing";

// Output file suffixes, appended as `{base}-{index}.{suffix}`
pub const TRACE_SUFFIX: &str = "trace.json";
pub const DEVTOOLS_LOG_SUFFIX: &str = "devtoolslog.json";
pub const SCREENSHOTS_HTML_SUFFIX: &str = "screenshots.html";
pub const SCREENSHOTS_JSON_SUFFIX: &str = "screenshots.json";
