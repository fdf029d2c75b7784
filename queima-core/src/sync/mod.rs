//! Sync payloads and queue bookkeeping.
//!
//! Recorders capture a [`ProgressUpdate`] per user action. The update is
//! stored in a [`SyncQueueItem`] and, when delivered, turned into the
//! partial-field JSON body the remote endpoint understands
//! ([`ProgressRequest`]). The remote merges a [`DailyPatch`] into the stored
//! [`crate::DailyProgress`] field by field, so delivering the same body
//! twice, or two bodies out of order, converges on the last value sent for
//! each field.

mod error;
mod protocol;
mod queue;

pub use error::ProgressError;
pub use protocol::{
    DailyChanges, DailyPatch, DailyTag, ProgressRequest, ProgressUpdate, RecordKind, RecordRef,
    WeeklyPatch, WeeklyTag,
};
pub use queue::{SyncOperation, SyncQueueItem, SyncStatus, FAILED_RETENTION_MS, MAX_RETRIES};
