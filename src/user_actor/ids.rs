use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use crate::domain::UserId;

/// Id generator for locally created users.
///
/// Ids are the current time in milliseconds, bumped past the last issued id
/// so two creations within the same millisecond still get distinct values.
pub fn timestamp_ids() -> impl Fn() -> UserId + Send + Sync + 'static {
    let last = AtomicU64::new(0);
    move || {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let previous = last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(now.max(prev + 1)))
            .unwrap_or_default();
        now.max(previous + 1)
    }
}
