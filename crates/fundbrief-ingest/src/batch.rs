//! Batch orchestration: fan one blocking extraction task out per report
//! file, collect records in completion order, isolate per-file failures.
//!
//! Ordering is restored by the aggregator afterwards, so collecting in
//! completion order is safe. The orchestrator returns only after every
//! submitted file has either produced a record or been excluded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::task::{Id, JoinSet};

use fundbrief_core::{ReportRecord, ResultSet};

use crate::{IngestError, build_record, is_report_path};

/// Cap on in-flight extraction tasks. 0 (the default) spawns one task per
/// file; per-file work is I/O-bound, so unbounded is acceptable.
fn worker_cap() -> usize {
    std::env::var("FUNDBRIEF_WORKERS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Enumerate immediate child files of `folder` with a supported extension.
fn discover(folder: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let entries = std::fs::read_dir(folder).map_err(|source| IngestError::Folder {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::Folder {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_report_path(&path) {
            candidates.push(path);
        }
    }
    Ok(candidates)
}

/// Extract a record from every supported report file in `folder`,
/// concurrently.
///
/// Returns the unordered batch (completion order). A task that fails
/// outright (panics) is logged with its path and excluded; the batch
/// continues. The only error this function returns is the fatal
/// folder-enumeration failure. An empty or report-free folder yields
/// `Ok(vec![])`.
pub async fn scan_folder(folder: &Path) -> Result<Vec<ReportRecord>, IngestError> {
    let candidates = discover(folder)?;
    tracing::info!(folder = %folder.display(), files = candidates.len(), "scanning report folder");

    let cap = worker_cap();
    let mut tasks: JoinSet<ReportRecord> = JoinSet::new();
    let mut in_flight: HashMap<Id, PathBuf> = HashMap::new();
    let mut records = Vec::with_capacity(candidates.len());

    for path in candidates {
        if cap > 0 && tasks.len() >= cap {
            collect_next(&mut tasks, &mut in_flight, &mut records).await;
        }
        let task_path = path.clone();
        let handle = tasks.spawn_blocking(move || build_record(&task_path));
        in_flight.insert(handle.id(), path);
    }

    while !tasks.is_empty() {
        collect_next(&mut tasks, &mut in_flight, &mut records).await;
    }

    Ok(records)
}

/// Join the next settled task: push its record, or log and exclude the file
/// if the task failed.
async fn collect_next(
    tasks: &mut JoinSet<ReportRecord>,
    in_flight: &mut HashMap<Id, PathBuf>,
    records: &mut Vec<ReportRecord>,
) {
    match tasks.join_next_with_id().await {
        Some(Ok((id, record))) => {
            in_flight.remove(&id);
            records.push(record);
        }
        Some(Err(join_err)) => {
            let path = in_flight
                .remove(&join_err.id())
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unknown>".into());
            tracing::error!(path = %path, error = %join_err, "report task failed, excluding file");
        }
        None => {}
    }
}

/// Run the full pipeline: scan `folder`, then sort the batch into the
/// canonical chronological [`ResultSet`].
pub async fn run_pipeline(folder: &Path) -> Result<ResultSet, IngestError> {
    let records = scan_folder(folder).await?;
    Ok(ResultSet::from_records(records))
}
