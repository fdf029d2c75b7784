use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::protocol::ProgressUpdate;

/// Delivery attempts allowed before an item is parked as failed.
pub const MAX_RETRIES: u32 = 5;

/// How long failed items are kept before the cleanup sweep drops them (7 days).
pub const FAILED_RETENTION_MS: i64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Pending,
    Syncing,
    Synced,
    Failed,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Pending => "pending",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Synced => "synced",
            SyncStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SyncStatus::Pending),
            "syncing" => Ok(SyncStatus::Syncing),
            "synced" => Ok(SyncStatus::Synced),
            "failed" => Ok(SyncStatus::Failed),
            _ => Err(format!("Invalid sync status '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOperation {
    Upsert,
    Update,
}

impl SyncOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncOperation::Upsert => "upsert",
            SyncOperation::Update => "update",
        }
    }
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upsert" => Ok(SyncOperation::Upsert),
            "update" => Ok(SyncOperation::Update),
            _ => Err(format!("Invalid sync operation '{}'", s)),
        }
    }
}

/// A pending remote mutation.
///
/// The payload is a snapshot taken at enqueue time; later edits to the same
/// day produce new items rather than rewriting this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncQueueItem {
    pub id: i64,
    /// Logical remote table, e.g. `daily_progress`.
    pub table: String,
    pub operation: SyncOperation,
    pub payload: ProgressUpdate,
    pub status: SyncStatus,
    pub retry_count: u32,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl SyncQueueItem {
    /// True once the item has used up its delivery attempts.
    pub fn is_exhausted(&self, max_retries: u32) -> bool {
        self.retry_count >= max_retries
    }

    /// Returns the item to the queue after a failed attempt.
    pub fn record_failure(&mut self) {
        self.status = SyncStatus::Pending;
        self.retry_count += 1;
    }
}
