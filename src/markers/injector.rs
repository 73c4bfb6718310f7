//! Synthetic marker event injection.
//!
//! Audit metrics are computed in milliseconds relative to navigation
//! start; trace events carry absolute microsecond timestamps. For each
//! metric with a numeric result we synthesize a user-timing mark and a
//! measure spanning from navigation start, so trace viewers show where
//! each metric landed on the timeline.

use crate::artifacts::schema::{AuditResults, TraceDocument, TraceEvent};
use crate::markers::MarkerDefinition;
use crate::utils::config::{MICROS_PER_MS, TRACE_EVENTS_KEY, USER_TIMING_CATEGORY};
use log::{debug, warn};
use serde_json::{json, Value};

/// Inject marker events for every metric with a numeric audit result
///
/// **Public** - main entry point for marker injection
///
/// Appends exactly two events per qualifying definition: an
/// instantaneous mark and a complete measure from the anchor timestamp.
/// Definitions flagged as navigation start are never injected; missing
/// or non-numeric audit values are skipped silently. Injected events are
/// appended after the existing events, not re-sorted.
///
/// # Arguments
/// * `trace` - Trace document to augment
/// * `definitions` - Ordered marker definitions (see [`marker_definitions`])
/// * `audits` - Audit results keyed by audit id, values in milliseconds
///
/// # Returns
/// A new trace document with markers appended to `traceEvents`
///
/// [`marker_definitions`]: crate::markers::marker_definitions
pub fn inject_markers(
    trace: &TraceDocument,
    definitions: &[MarkerDefinition],
    audits: &AuditResults,
) -> TraceDocument {
    let mut augmented = trace.clone();
    let anchor_ts = find_anchor_timestamp(trace, definitions);

    let events = match augmented.get_mut(TRACE_EVENTS_KEY) {
        Some(Value::Array(events)) => events,
        _ => {
            warn!("Trace has no {} array, skipping marker injection", TRACE_EVENTS_KEY);
            return augmented;
        }
    };

    for definition in definitions {
        if definition.navigation_start {
            continue;
        }

        let value_ms = match audits.get(&definition.audit_id).and_then(Value::as_f64) {
            Some(value) => value,
            None => {
                debug!("No numeric audit result for {}, skipping marker", definition.audit_id);
                continue;
            }
        };

        let marker_ts = anchor_ts + value_ms * MICROS_PER_MS;
        debug!("Injecting marker {} at ts {}", definition.name, marker_ts);

        events.push(make_mark(&definition.name, marker_ts));
        events.push(make_measure(&definition.name, anchor_ts, marker_ts));
    }

    augmented
}

/// Resolve the absolute timestamp markers are offset from
///
/// **Private** - internal helper for inject_markers
///
/// Prefers the first event named like the navigation-start definition;
/// falls back to the smallest event timestamp, then to zero.
fn find_anchor_timestamp(trace: &TraceDocument, definitions: &[MarkerDefinition]) -> f64 {
    let events = match trace.get(TRACE_EVENTS_KEY).and_then(Value::as_array) {
        Some(events) => events,
        None => return 0.0,
    };

    let anchor_name = definitions
        .iter()
        .find(|d| d.navigation_start)
        .map(|d| d.name.as_str());

    if let Some(name) = anchor_name {
        let named = events
            .iter()
            .find(|e| e.get("name").and_then(Value::as_str) == Some(name))
            .and_then(|e| e.get("ts").and_then(Value::as_f64));
        if let Some(ts) = named {
            return ts;
        }
    }

    events
        .iter()
        .filter_map(|e| e.get("ts").and_then(Value::as_f64))
        .fold(None, |min: Option<f64>, ts| {
            Some(min.map_or(ts, |m| m.min(ts)))
        })
        .unwrap_or(0.0)
}

/// Build the instantaneous mark event
///
/// **Private** - internal event constructor
fn make_mark(name: &str, ts: f64) -> TraceEvent {
    json!({
        "name": name,
        "ts": ts,
        "ph": "R",
        "cat": USER_TIMING_CATEGORY,
        "pid": 0,
        "tid": 0,
        "args": {}
    })
}

/// Build the complete measure event spanning from the anchor
///
/// **Private** - internal event constructor
fn make_measure(name: &str, anchor_ts: f64, ts: f64) -> TraceEvent {
    json!({
        "name": name,
        "ts": anchor_ts,
        "dur": ts - anchor_ts,
        "ph": "X",
        "cat": USER_TIMING_CATEGORY,
        "pid": 0,
        "tid": 0,
        "args": {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{marker_definitions, MarkerDefinition};
    use serde_json::json;

    fn trace_with_events(events: serde_json::Value) -> TraceDocument {
        match json!({ "traceEvents": events }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn event_count(trace: &TraceDocument) -> usize {
        trace["traceEvents"].as_array().unwrap().len()
    }

    fn audits_of(pairs: &[(&str, serde_json::Value)]) -> AuditResults {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_two_events_per_qualifying_definition() {
        let trace = trace_with_events(json!([
            {"name": "navigationStart", "ts": 1000.0}
        ]));
        let definitions = marker_definitions();
        let injectable = definitions.iter().filter(|d| !d.navigation_start).count();
        let audits: AuditResults = definitions
            .iter()
            .map(|d| (d.audit_id.clone(), json!(100.0)))
            .collect();

        let augmented = inject_markers(&trace, &definitions, &audits);

        assert_eq!(event_count(&augmented), 1 + 2 * injectable);
    }

    #[test]
    fn test_navigation_start_never_injected() {
        let trace = trace_with_events(json!([
            {"name": "navigationStart", "ts": 0.0}
        ]));
        let audits = audits_of(&[("navigation-start", json!(0.0))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        assert_eq!(event_count(&augmented), 1);
    }

    #[test]
    fn test_missing_and_non_numeric_results_skipped() {
        let trace = trace_with_events(json!([
            {"name": "navigationStart", "ts": 0.0}
        ]));
        // One metric missing entirely, one carrying an error string
        let audits = audits_of(&[("interactive", json!("NO_NAVSTART"))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        assert_eq!(event_count(&augmented), 1);
    }

    #[test]
    fn test_marker_timestamp_math() {
        let trace = trace_with_events(json!([
            {"name": "navigationStart", "ts": 674089419919.0}
        ]));
        let audits = audits_of(&[("first-contentful-paint", json!(2.5))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        let events = augmented["traceEvents"].as_array().unwrap();
        let mark = &events[1];
        assert_eq!(mark["ph"], json!("R"));
        assert_eq!(mark["ts"].as_f64(), Some(674089419919.0 + 2500.0));
        let measure = &events[2];
        assert_eq!(measure["ph"], json!("X"));
        assert_eq!(measure["ts"].as_f64(), Some(674089419919.0));
        assert_eq!(measure["dur"].as_f64(), Some(2500.0));
    }

    #[test]
    fn test_anchor_falls_back_to_min_timestamp() {
        let trace = trace_with_events(json!([
            {"name": "other", "ts": 500.0},
            {"name": "earlier", "ts": 200.0}
        ]));
        let audits = audits_of(&[("interactive", json!(1.0))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        let events = augmented["traceEvents"].as_array().unwrap();
        assert_eq!(events[2]["ts"].as_f64(), Some(200.0));
        assert_eq!(events[2]["dur"].as_f64(), Some(1000.0));
    }

    #[test]
    fn test_empty_trace_uses_zero_anchor() {
        let trace = trace_with_events(json!([]));
        let audits = audits_of(&[("interactive", json!(3.0))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        let events = augmented["traceEvents"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["ts"].as_f64(), Some(3000.0));
    }

    #[test]
    fn test_trace_without_event_array_passes_through() {
        let trace = TraceDocument::new();
        let audits = audits_of(&[("interactive", json!(3.0))]);

        let augmented = inject_markers(&trace, &marker_definitions(), &audits);

        assert!(augmented.is_empty());
    }

    #[test]
    fn test_existing_events_unchanged_and_markers_appended() {
        let trace = trace_with_events(json!([
            {"name": "navigationStart", "ts": 10.0},
            {"name": "work", "ts": 20.0}
        ]));
        let definitions = vec![
            MarkerDefinition::navigation_start(),
            MarkerDefinition::new("My Metric", "my-metric"),
        ];
        let audits = audits_of(&[("my-metric", json!(1.0))]);

        let augmented = inject_markers(&trace, &definitions, &audits);

        let events = augmented["traceEvents"].as_array().unwrap();
        assert_eq!(events[0]["name"], json!("navigationStart"));
        assert_eq!(events[1]["name"], json!("work"));
        assert_eq!(events[2]["name"], json!("My Metric"));
        assert_eq!(events[2]["cat"], json!("blink.user_timing"));
    }
}
