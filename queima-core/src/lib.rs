//! Queima Core Library
//!
//! Shared types for the Queima fasting tracker: the local day records,
//! fasting timer math, the sync queue item state machine and the progress
//! payloads exchanged with the remote endpoint.

pub mod models;
pub mod sync;

pub use models::{
    DailyProgress, Energy, FastingLog, FastingPhase, FastingProgress, FastingState, Mood, Sleep,
    TaskCompletion, TaskType, WaterLog, WeeklyReflection, FASTING_DURATION_MS, ML_PER_CUP,
    WATER_TARGET,
};
pub use sync::{
    DailyChanges, DailyPatch, ProgressError, ProgressRequest, ProgressUpdate, RecordKind,
    RecordRef, SyncOperation, SyncQueueItem, SyncStatus, WeeklyPatch, FAILED_RETENTION_MS,
    MAX_RETRIES,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
