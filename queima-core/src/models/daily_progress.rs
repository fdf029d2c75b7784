use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::task_type::TaskType;
use crate::sync::DailyChanges;

/// The remote system of record for one user's day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub user_id: String,
    pub date: NaiveDate,
    pub week: u32,
    pub day_number: u32,
    pub water_cups: u32,
    pub fasting_started_at: Option<DateTime<Utc>>,
    pub fasting_ended_at: Option<DateTime<Utc>>,
    pub breakfast_done: bool,
    pub lunch_done: bool,
    pub dinner_done: bool,
    pub exercise_done: bool,
    pub completed: bool,
}

impl DailyProgress {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, week: u32, day_number: u32) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            week,
            day_number,
            water_cups: 0,
            fasting_started_at: None,
            fasting_ended_at: None,
            breakfast_done: false,
            lunch_done: false,
            dinner_done: false,
            exercise_done: false,
            completed: false,
        }
    }

    pub fn task_done(&self, task: TaskType) -> bool {
        match task {
            TaskType::Breakfast => self.breakfast_done,
            TaskType::Lunch => self.lunch_done,
            TaskType::Dinner => self.dinner_done,
            TaskType::Exercise => self.exercise_done,
        }
    }

    fn task_done_mut(&mut self, task: TaskType) -> &mut bool {
        match task {
            TaskType::Breakfast => &mut self.breakfast_done,
            TaskType::Lunch => &mut self.lunch_done,
            TaskType::Dinner => &mut self.dinner_done,
            TaskType::Exercise => &mut self.exercise_done,
        }
    }

    /// Merges a partial update: every field present in `changes` overwrites
    /// the stored value, every absent field is kept. Applying the same
    /// changes again leaves the record unchanged.
    pub fn apply(&mut self, changes: &DailyChanges) {
        if let Some(cups) = changes.water_cups {
            self.water_cups = cups;
        }
        if let Some(started_at) = changes.fasting_started_at {
            self.fasting_started_at = started_at;
        }
        if let Some(ended_at) = changes.fasting_ended_at {
            self.fasting_ended_at = ended_at;
        }
        for (task, done) in TaskType::ALL.iter().zip(changes.tasks.iter()) {
            if let Some(done) = done {
                *self.task_done_mut(*task) = *done;
            }
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(week) = changes.week {
            self.week = week;
        }
        if let Some(day_number) = changes.day_number {
            self.day_number = day_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{ProgressRequest, ProgressUpdate};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn changes(update: ProgressUpdate) -> DailyChanges {
        match update.to_request() {
            ProgressRequest::Daily(patch) => patch.validate().unwrap(),
            ProgressRequest::Weekly(_) => panic!("expected a daily patch"),
        }
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut progress = DailyProgress::new("user1", day(), 1, 3);
        progress.apply(&changes(ProgressUpdate::Water {
            date: day(),
            cups: 4,
        }));
        progress.apply(&changes(ProgressUpdate::TaskToggle {
            date: day(),
            task: TaskType::Dinner,
            completed: true,
        }));

        assert_eq!(progress.water_cups, 4);
        assert!(progress.dinner_done);
        assert!(!progress.lunch_done);
        assert_eq!(progress.day_number, 3);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let update = changes(ProgressUpdate::Water {
            date: day(),
            cups: 5,
        });

        let mut once = DailyProgress::new("user1", day(), 1, 1);
        once.apply(&update);

        let mut twice = once.clone();
        twice.apply(&update);

        assert_eq!(once, twice);
        assert_eq!(twice.water_cups, 5);
    }

    #[test]
    fn test_disjoint_fields_merge_in_any_order() {
        let water = changes(ProgressUpdate::Water {
            date: day(),
            cups: 6,
        });
        let lunch = changes(ProgressUpdate::TaskToggle {
            date: day(),
            task: TaskType::Lunch,
            completed: true,
        });

        let mut a = DailyProgress::new("user1", day(), 1, 1);
        a.apply(&water);
        a.apply(&lunch);

        let mut b = DailyProgress::new("user1", day(), 1, 1);
        b.apply(&lunch);
        b.apply(&water);

        assert_eq!(a, b);
    }

    #[test]
    fn test_same_field_last_write_wins() {
        let mut progress = DailyProgress::new("user1", day(), 1, 1);
        for cups in [3, 8, 5] {
            progress.apply(&changes(ProgressUpdate::Water { date: day(), cups }));
        }
        assert_eq!(progress.water_cups, 5);
    }
}
