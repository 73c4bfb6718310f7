//! Marker definitions and synthetic marker injection.

pub mod injector;

pub use injector::inject_markers;

/// One entry of the marker/metric definition list
///
/// `audit_id` keys into the audit results; `name` is both the label
/// written into synthetic events and, for the navigation-start entry,
/// the trace event name used as the timestamp anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDefinition {
    /// Human-readable metric name, used as the synthetic event name
    pub name: String,

    /// Key into the audit results mapping
    pub audit_id: String,

    /// Anchor entry: excluded from injection, names the anchor event
    pub navigation_start: bool,
}

impl MarkerDefinition {
    pub fn new(name: impl Into<String>, audit_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audit_id: audit_id.into(),
            navigation_start: false,
        }
    }

    /// The designated navigation-start entry
    pub fn navigation_start() -> Self {
        Self {
            name: "navigationStart".to_string(),
            audit_id: "navigation-start".to_string(),
            navigation_start: true,
        }
    }
}

/// Built-in ordered marker definition list
///
/// **Public** - default configuration for marker injection; callers with
/// custom metric sets pass their own list instead.
pub fn marker_definitions() -> Vec<MarkerDefinition> {
    vec![
        MarkerDefinition::navigation_start(),
        MarkerDefinition::new("First Contentful Paint", "first-contentful-paint"),
        MarkerDefinition::new("First Meaningful Paint", "first-meaningful-paint"),
        MarkerDefinition::new("Speed Index", "speed-index"),
        MarkerDefinition::new("First CPU Idle", "first-cpu-idle"),
        MarkerDefinition::new("Interactive", "interactive"),
    ]
}
