//! Per-pass asset bundle preparation.
//!
//! One bundle per gathering pass: the pass trace (marker-augmented for
//! the default pass), its protocol log, and the filmstrip in both raw
//! and rendered-HTML form. Screenshot retrieval is async and issued for
//! every pass up front; each pass's bundle is composed once its own
//! retrieval resolves.

use crate::artifacts::schema::{Artifacts, AssetBundle, AuditResults, TraceDocument};
use crate::markers::{inject_markers, marker_definitions};
use crate::output::render_filmstrip_html;
use crate::utils::config::DEFAULT_PASS;
use crate::utils::error::AssetError;
use futures::future::try_join_all;
use log::{debug, info};

/// Prepare one asset bundle per gathering pass, in pass order
///
/// **Public** - main entry point for asset preparation
///
/// # Arguments
/// * `artifacts` - Raw artifacts from the gathering run
/// * `audits` - Audit results; `None` disables marker injection entirely
///
/// # Returns
/// Bundles in the same order as `artifacts.traces`
///
/// # Errors
/// * `AssetError::ScreenshotFetch` - filmstrip retrieval failed
/// * `AssetError::FilmstripRender` - filmstrip not representable as JSON
pub async fn prepare_assets(
    artifacts: &Artifacts,
    audits: Option<&AuditResults>,
) -> Result<Vec<AssetBundle>, AssetError> {
    info!("Preparing assets for {} pass(es)", artifacts.traces.len());

    let definitions = marker_definitions();

    let pending = artifacts.traces.iter().map(|(pass_name, trace)| {
        let definitions = &definitions;
        async move {
            let filmstrip = artifacts.screenshots.request_screenshots().await?;
            debug!("Retrieved {} screenshot frame(s) for {}", filmstrip.len(), pass_name);

            let trace_data = augment_trace(pass_name, trace, definitions, audits);

            let devtools_log = artifacts
                .devtools_logs
                .get(pass_name)
                .cloned()
                .unwrap_or_default();

            let screenshots_html = render_filmstrip_html(&filmstrip).map_err(|source| {
                AssetError::FilmstripRender {
                    pass: pass_name.clone(),
                    source,
                }
            })?;

            Ok(AssetBundle {
                pass_name: pass_name.clone(),
                trace_data,
                devtools_log,
                screenshots_html,
                screenshots_json: filmstrip,
            })
        }
    });

    try_join_all(pending).await
}

/// Apply marker injection for the default pass only
///
/// **Private** - internal helper for prepare_assets
fn augment_trace(
    pass_name: &str,
    trace: &TraceDocument,
    definitions: &[crate::markers::MarkerDefinition],
    audits: Option<&AuditResults>,
) -> TraceDocument {
    match audits {
        Some(audits) if pass_name == DEFAULT_PASS => inject_markers(trace, definitions, audits),
        _ => trace.clone(),
    }
}
