use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the daily fast (16 hours), in milliseconds.
pub const FASTING_DURATION_MS: i64 = 16 * 60 * 60 * 1000;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// One fasting attempt for a (user, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastingLog {
    pub id: Option<i64>,
    pub user_id: String,
    pub date: NaiveDate,
    /// Epoch milliseconds.
    pub started_at: i64,
    /// Epoch milliseconds, `None` while the fast is running.
    pub ended_at: Option<i64>,
    pub synced: bool,
}

impl FastingLog {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, started_at: i64) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            date,
            started_at,
            ended_at: None,
            synced: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FastingState {
    #[default]
    Idle,
    Fasting,
    Eating,
}

impl fmt::Display for FastingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastingState::Idle => write!(f, "idle"),
            FastingState::Fasting => write!(f, "fasting"),
            FastingState::Eating => write!(f, "eating"),
        }
    }
}

impl FromStr for FastingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(FastingState::Idle),
            "fasting" => Ok(FastingState::Fasting),
            "eating" => Ok(FastingState::Eating),
            _ => Err(format!("Invalid fasting state '{}'", s)),
        }
    }
}

/// Body phase shown while fasting, keyed on whole elapsed hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FastingPhase {
    Digesting,
    DigestivePause,
    BurningReserves,
    ActiveFasting,
}

impl FastingPhase {
    /// Phase for the given elapsed hours. Anything past 16 hours stays in
    /// the last phase.
    pub fn for_elapsed_hours(hours: i64) -> Self {
        match hours {
            h if h < 4 => FastingPhase::Digesting,
            h if h < 8 => FastingPhase::DigestivePause,
            h if h < 12 => FastingPhase::BurningReserves,
            _ => FastingPhase::ActiveFasting,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FastingPhase::Digesting => "Digesting",
            FastingPhase::DigestivePause => "Digestive pause",
            FastingPhase::BurningReserves => "Burning reserves",
            FastingPhase::ActiveFasting => "Active fasting",
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            FastingPhase::Digesting => "Drink water",
            FastingPhase::DigestivePause => "Avoid intense exercise",
            FastingPhase::BurningReserves => "You may feel more focused",
            FastingPhase::ActiveFasting => "Almost time to eat!",
        }
    }
}

/// Timer readout for a running fast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FastingProgress {
    pub elapsed_ms: i64,
    pub remaining_ms: i64,
    /// Fraction of the 16-hour target, clamped to 1.0.
    pub progress: f64,
    pub is_complete: bool,
}

impl FastingProgress {
    pub fn new(started_at: i64, now: i64) -> Self {
        let elapsed_ms = (now - started_at).max(0);
        let remaining_ms = (FASTING_DURATION_MS - elapsed_ms).max(0);
        let progress = (elapsed_ms as f64 / FASTING_DURATION_MS as f64).min(1.0);

        Self {
            elapsed_ms,
            remaining_ms,
            progress,
            is_complete: elapsed_ms >= FASTING_DURATION_MS,
        }
    }

    pub fn elapsed_hours(&self) -> i64 {
        self.elapsed_ms / HOUR_MS
    }

    /// Remaining time split into (hours, minutes, seconds).
    pub fn remaining_hms(&self) -> (i64, i64, i64) {
        let hours = self.remaining_ms / HOUR_MS;
        let minutes = (self.remaining_ms % HOUR_MS) / (60 * 1000);
        let seconds = (self.remaining_ms % (60 * 1000)) / 1000;
        (hours, minutes, seconds)
    }

    pub fn phase(&self) -> FastingPhase {
        FastingPhase::for_elapsed_hours(self.elapsed_hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_open() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let log = FastingLog::new("user1", date, 1_000);
        assert!(log.is_open());
        assert!(!log.synced);
    }

    #[test]
    fn test_remaining_at_start() {
        let p = FastingProgress::new(0, 0);
        assert_eq!(p.remaining_ms, FASTING_DURATION_MS);
        assert_eq!(p.progress, 0.0);
        assert!(!p.is_complete);
    }

    #[test]
    fn test_remaining_after_four_hours() {
        let p = FastingProgress::new(0, 4 * HOUR_MS);
        assert_eq!(p.remaining_ms, 12 * HOUR_MS);
        assert_eq!(p.elapsed_hours(), 4);
    }

    #[test]
    fn test_remaining_is_zero_past_target() {
        let p = FastingProgress::new(0, 17 * HOUR_MS);
        assert_eq!(p.remaining_ms, 0);
        assert!(p.is_complete);
    }

    #[test]
    fn test_progress_halfway_and_clamped() {
        assert!((FastingProgress::new(0, 8 * HOUR_MS).progress - 0.5).abs() < f64::EPSILON);
        assert_eq!(FastingProgress::new(0, 20 * HOUR_MS).progress, 1.0);
    }

    #[test]
    fn test_remaining_hms() {
        let elapsed = FASTING_DURATION_MS - (5 * HOUR_MS + 30 * 60 * 1000 + 45 * 1000);
        let p = FastingProgress::new(0, elapsed);
        assert_eq!(p.remaining_hms(), (5, 30, 45));
    }

    #[test]
    fn test_clock_skew_does_not_go_negative() {
        let p = FastingProgress::new(10_000, 5_000);
        assert_eq!(p.elapsed_ms, 0);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(FastingPhase::for_elapsed_hours(0), FastingPhase::Digesting);
        assert_eq!(FastingPhase::for_elapsed_hours(2), FastingPhase::Digesting);
        assert_eq!(FastingPhase::for_elapsed_hours(4), FastingPhase::DigestivePause);
        assert_eq!(FastingPhase::for_elapsed_hours(8), FastingPhase::BurningReserves);
        assert_eq!(FastingPhase::for_elapsed_hours(12), FastingPhase::ActiveFasting);
        assert_eq!(FastingPhase::for_elapsed_hours(15), FastingPhase::ActiveFasting);
        assert_eq!(FastingPhase::for_elapsed_hours(30), FastingPhase::ActiveFasting);
    }

    #[test]
    fn test_fasting_state_roundtrip_str() {
        assert_eq!("Fasting".parse::<FastingState>().unwrap(), FastingState::Fasting);
        assert_eq!(FastingState::default(), FastingState::Idle);
        assert!("starving".parse::<FastingState>().is_err());
    }
}
