use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::TrashBin;

/// Reference cadence for the recurring purge.
pub const PURGE_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Recurring purge pass over a shared trash bin. The first tick fires
/// immediately, covering the session-start purge point; later ticks follow
/// the configured cadence. Runs until the owning task is dropped.
pub async fn run_purge_timer(trash: Arc<Mutex<TrashBin>>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        let removed = trash.lock().await.purge_expired(Utc::now());
        debug!("Purge tick removed {} item(s)", removed);
    }
}
