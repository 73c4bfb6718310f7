//! Asset persistence: per-pass file writes with the documented naming
//! scheme.
//!
//! Each pass produces four files under `{base}-{index}.*`. Writes are
//! independent: a failure on one file never rolls back or skips the
//! others, and every failure is reported with its pass index and path
//! once all writes have settled.

use crate::artifacts::schema::{Artifacts, AssetBundle, AuditResults, TraceDocument};
use crate::assets::prepare::prepare_assets;
use crate::output::write_trace_document;
use crate::utils::config::{
    DEVTOOLS_LOG_SUFFIX, SCREENSHOTS_HTML_SUFFIX, SCREENSHOTS_JSON_SUFFIX, TRACE_SUFFIX,
};
use crate::utils::error::{AssetError, OutputError};
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Prepare and persist every asset bundle under the given base path
///
/// **Public** - main entry point for asset persistence
///
/// For the pass at zero-based index `i`, writes:
/// * `{base}-{i}.trace.json` - streamed trace document
/// * `{base}-{i}.devtoolslog.json` - pretty-printed protocol log
/// * `{base}-{i}.screenshots.html` - rendered filmstrip page
/// * `{base}-{i}.screenshots.json` - compact filmstrip frames
///
/// # Errors
/// * `AssetError::ScreenshotFetch` / `AssetError::FilmstripRender` -
///   preparation failed; nothing was written
/// * `AssetError::Aggregate` - one or more files failed to write; every
///   failure names its pass and path. A file already written stays on
///   disk.
pub async fn save_assets(
    artifacts: &Artifacts,
    audits: &AuditResults,
    base_path: impl AsRef<Path>,
) -> Result<(), AssetError> {
    let base_path = base_path.as_ref();
    let bundles = prepare_assets(artifacts, Some(audits)).await?;

    let mut failures = Vec::new();
    for (index, bundle) in bundles.iter().enumerate() {
        for (path, result) in write_bundle(bundle, base_path, index) {
            if let Err(source) = result {
                failures.push(AssetError::FileWrite {
                    pass_index: index,
                    path,
                    source,
                });
            }
        }
    }

    if failures.is_empty() {
        info!("Saved assets for {} pass(es) under {}", bundles.len(), base_path.display());
        Ok(())
    } else {
        Err(AssetError::Aggregate(failures))
    }
}

/// Stream a trace document to a file
///
/// **Public** - standalone wrapper around the streaming writer
///
/// Creates missing parent directories. After a reported failure the
/// partially written file is left on disk and must not be trusted.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - value not representable
/// * `OutputError::InvalidPath` - path empty or a directory
pub fn save_trace(trace: &TraceDocument, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();

    info!("Writing trace to: {}", path.display());
    let file = create_destination(path)?;
    write_trace_document(trace, file)?;

    info!("Trace written successfully ({} bytes)", file_size(path));
    Ok(())
}

/// Write the four files of one bundle, returning per-file outcomes
///
/// **Private** - internal helper for save_assets
fn write_bundle(
    bundle: &AssetBundle,
    base_path: &Path,
    index: usize,
) -> Vec<(PathBuf, Result<(), OutputError>)> {
    debug!("Writing assets for pass {} ({})", index, bundle.pass_name);

    let trace_path = asset_path(base_path, index, TRACE_SUFFIX);
    let log_path = asset_path(base_path, index, DEVTOOLS_LOG_SUFFIX);
    let html_path = asset_path(base_path, index, SCREENSHOTS_HTML_SUFFIX);
    let json_path = asset_path(base_path, index, SCREENSHOTS_JSON_SUFFIX);

    let trace_result = save_trace(&bundle.trace_data, &trace_path);
    let log_result = write_json_pretty(&bundle.devtools_log, &log_path);
    let html_result = write_string(&bundle.screenshots_html, &html_path);
    let json_result = write_json_compact(&bundle.screenshots_json, &json_path);

    vec![
        (trace_path, trace_result),
        (log_path, log_result),
        (html_path, html_result),
        (json_path, json_result),
    ]
}

/// Build `{base}-{index}.{suffix}`
///
/// **Private** - naming scheme for asset files
fn asset_path(base_path: &Path, index: usize, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}-{}.{}", base_path.display(), index, suffix))
}

/// Pretty-print a value to a JSON file, preserving field order
///
/// **Private** - whole-buffer writer for devtools logs
fn write_json_pretty<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    let file = create_destination(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    debug!("Wrote {} ({} bytes)", path.display(), file_size(path));
    Ok(())
}

/// Write a value to a JSON file in compact form
///
/// **Private** - whole-buffer writer for filmstrip frames
fn write_json_compact<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    let file = create_destination(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;

    debug!("Wrote {} ({} bytes)", path.display(), file_size(path));
    Ok(())
}

/// Write string content to a file as UTF-8
///
/// **Private** - whole-buffer writer for HTML
fn write_string(content: &str, path: &Path) -> Result<(), OutputError> {
    let file = create_destination(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Validate the destination and open it for writing
///
/// **Private** - creates missing parent directories
fn create_destination(path: &Path) -> Result<File, OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    File::create(path).map_err(OutputError::WriteFailed)
}

/// File size in bytes, zero if unreadable
///
/// **Private** - internal utility for logging
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
