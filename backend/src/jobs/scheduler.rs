use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::AppState;
use crate::utils::images;

/// Uploaded scan images are only kept for 24 hours (the analysis itself
/// stays). An hourly sweep removes files past the cutoff and clears the
/// image_path on the affected rows.
const IMAGE_RETENTION_SECS: i32 = 24 * 60 * 60;

pub async fn start_scheduler(state: Arc<AppState>) {
    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create job scheduler: {}", e);
            return;
        }
    };

    let sweep_state = state.clone();
    let sweep = Job::new_async("0 12 * * * *", move |_uuid, _lock| {
        let state = sweep_state.clone();
        Box::pin(async move {
            sweep_stale_images(&state);
        })
    });

    match sweep {
        Ok(job) => {
            if let Err(e) = scheduler.add(job).await {
                tracing::error!("Failed to add retention sweep job: {}", e);
                return;
            }
        }
        Err(e) => {
            tracing::error!("Failed to create retention sweep job: {}", e);
            return;
        }
    }

    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start job scheduler: {}", e);
    } else {
        tracing::info!("Retention scheduler started");
    }
}

pub fn sweep_stale_images(state: &Arc<AppState>) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i32;
    let cutoff = now - IMAGE_RETENTION_SECS;

    let stale = match state.scan_repository.scans_with_stale_images(cutoff) {
        Ok(stale) => stale,
        Err(e) => {
            tracing::error!("Retention sweep query failed: {}", e);
            return;
        }
    };

    if stale.is_empty() {
        return;
    }

    tracing::info!("Retention sweep removing {} stale scan images", stale.len());
    for (scan_id, file_name) in stale {
        images::remove_upload(&state.upload_dir, &file_name);
        if let Err(e) = state.scan_repository.clear_image(scan_id) {
            tracing::error!("Failed to clear image for scan {}: {}", scan_id, e);
        }
    }
}
