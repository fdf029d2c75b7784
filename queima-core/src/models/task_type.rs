use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four daily checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Breakfast,
    Lunch,
    Dinner,
    Exercise,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [
        TaskType::Breakfast,
        TaskType::Lunch,
        TaskType::Dinner,
        TaskType::Exercise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Breakfast => "breakfast",
            TaskType::Lunch => "lunch",
            TaskType::Dinner => "dinner",
            TaskType::Exercise => "exercise",
        }
    }

    /// Name of the remote daily progress column holding this task's flag.
    pub fn done_field(&self) -> &'static str {
        match self {
            TaskType::Breakfast => "breakfast_done",
            TaskType::Lunch => "lunch_done",
            TaskType::Dinner => "dinner_done",
            TaskType::Exercise => "exercise_done",
        }
    }

    /// Position in [`TaskType::ALL`].
    pub fn index(&self) -> usize {
        match self {
            TaskType::Breakfast => 0,
            TaskType::Lunch => 1,
            TaskType::Dinner => 2,
            TaskType::Exercise => 3,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(TaskType::Breakfast),
            "lunch" => Ok(TaskType::Lunch),
            "dinner" => Ok(TaskType::Dinner),
            "exercise" => Ok(TaskType::Exercise),
            _ => Err(format!(
                "Invalid task type '{}'. Valid options: breakfast, lunch, dinner, exercise",
                s
            )),
        }
    }
}

/// Whether a checklist item was done on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub id: Option<i64>,
    pub user_id: String,
    pub date: NaiveDate,
    pub task_type: TaskType,
    pub completed: bool,
    pub synced: bool,
}

impl TaskCompletion {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, task_type: TaskType) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            date,
            task_type,
            completed: false,
            synced: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_display() {
        assert_eq!(format!("{}", TaskType::Breakfast), "breakfast");
        assert_eq!(format!("{}", TaskType::Exercise), "exercise");
    }

    #[test]
    fn test_task_type_from_str() {
        assert_eq!(TaskType::from_str("LUNCH").unwrap(), TaskType::Lunch);
        assert_eq!(TaskType::from_str("Dinner").unwrap(), TaskType::Dinner);
        assert!(TaskType::from_str("snack").is_err());
        assert!(TaskType::from_str("").is_err());
    }

    #[test]
    fn test_done_field_names() {
        let fields: Vec<&str> = TaskType::ALL.iter().map(|t| t.done_field()).collect();
        assert_eq!(
            fields,
            vec!["breakfast_done", "lunch_done", "dinner_done", "exercise_done"]
        );
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, task) in TaskType::ALL.iter().enumerate() {
            assert_eq!(task.index(), i);
        }
    }
}
