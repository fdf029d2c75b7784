use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily water goal, in cups.
pub const WATER_TARGET: u32 = 8;

pub const ML_PER_CUP: u32 = 250;

/// Cumulative cups drunk by a user on a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: Option<i64>,
    pub user_id: String,
    pub date: NaiveDate,
    pub cups: u32,
    pub synced: bool,
}

impl WaterLog {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, cups: u32) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            date,
            cups,
            synced: false,
        }
    }

    pub fn millilitres(&self) -> u32 {
        self.cups * ML_PER_CUP
    }

    pub fn target_reached(&self) -> bool {
        self.cups >= WATER_TARGET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_log_volume() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let log = WaterLog::new("user1", date, 3);
        assert_eq!(log.millilitres(), 750);
        assert!(!log.target_reached());
        assert!(WaterLog::new("user1", date, WATER_TARGET).target_reached());
    }
}
