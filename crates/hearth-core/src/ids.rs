//! ID prefix constants and formatting helpers.
//!
//! Request and workflow IDs are time-based (`REQ1705312800000-a3f8b2c1`): the
//! creation instant in epoch milliseconds followed by 8 random hex characters,
//! so two records created in the same millisecond still differ. Attachment
//! and message IDs only need to be unique within one transcript and use the
//! shorter `att-a3f8b2c1` form.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};

pub const PREFIX_REQUEST: &str = "REQ";
pub const PREFIX_WORKFLOW: &str = "WF";
pub const PREFIX_ATTACHMENT: &str = "att";
pub const PREFIX_MESSAGE: &str = "msg";

/// Whether `prefix` can start a time-based id: one or more ASCII letters, so
/// the millisecond timestamp that follows is unambiguous.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Fallback entropy when the OS source is unavailable.
static FALLBACK_COUNTER: AtomicU32 = AtomicU32::new(0x5eed_0000);

/// Eight lowercase hex characters.
#[must_use]
pub fn random_suffix() -> String {
    let mut bytes = [0u8; 4];
    if let Err(error) = getrandom::fill(&mut bytes) {
        tracing::warn!(%error, "OS randomness unavailable, using counter-based id suffix");
        let nanos = Utc::now().timestamp_subsec_nanos();
        bytes = (FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed) ^ nanos).to_be_bytes();
    }
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// `{prefix}{epoch_millis}-{suffix}`.
#[must_use]
pub fn time_based_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}{}-{}", now.timestamp_millis(), random_suffix())
}

/// `{prefix}-{suffix}`.
#[must_use]
pub fn short_id(prefix: &str) -> String {
    format!("{prefix}-{}", random_suffix())
}
