//! Progress payloads: the closed local union and its partial-field wire form.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::error::ProgressError;
use crate::models::{Energy, Mood, Sleep, TaskType};

const MAX_WATER_CUPS: i64 = 15;

/// A single captured change, as stored in the sync queue.
///
/// Values are absolute (the cup count after the action, not a delta), so
/// delivering an update more than once is harmless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressUpdate {
    Water {
        date: NaiveDate,
        cups: u32,
    },
    FastingStart {
        date: NaiveDate,
        started_at: DateTime<Utc>,
    },
    FastingStop {
        date: NaiveDate,
        ended_at: DateTime<Utc>,
    },
    TaskToggle {
        date: NaiveDate,
        task: TaskType,
        completed: bool,
    },
    WeeklyReflection {
        week_number: u32,
        energy: Energy,
        sleep: Sleep,
        mood: Mood,
    },
}

impl ProgressUpdate {
    /// Builds the body sent to the remote endpoint.
    pub fn to_request(&self) -> ProgressRequest {
        match self {
            ProgressUpdate::Water { date, cups } => ProgressRequest::Daily(DailyPatch {
                date: date.to_string(),
                water_cups: Some(i64::from(*cups)),
                ..Default::default()
            }),
            ProgressUpdate::FastingStart { date, started_at } => {
                ProgressRequest::Daily(DailyPatch {
                    date: date.to_string(),
                    fasting_started_at: Some(Some(iso_timestamp(started_at))),
                    ..Default::default()
                })
            }
            ProgressUpdate::FastingStop { date, ended_at } => ProgressRequest::Daily(DailyPatch {
                date: date.to_string(),
                fasting_ended_at: Some(Some(iso_timestamp(ended_at))),
                ..Default::default()
            }),
            ProgressUpdate::TaskToggle {
                date,
                task,
                completed,
            } => {
                let mut patch = DailyPatch {
                    date: date.to_string(),
                    ..Default::default()
                };
                *patch.task_field_mut(*task) = Some(*completed);
                ProgressRequest::Daily(patch)
            }
            ProgressUpdate::WeeklyReflection {
                week_number,
                energy,
                sleep,
                mood,
            } => ProgressRequest::Weekly(WeeklyPatch {
                kind: WeeklyTag::Weekly,
                week_number: i64::from(*week_number),
                energy: *energy,
                sleep: *sleep,
                mood: *mood,
            }),
        }
    }

    /// Updates with the same key write the same remote record and have to
    /// arrive in the order they were captured.
    pub fn ordering_key(&self) -> String {
        if let ProgressUpdate::WeeklyReflection { week_number, .. } = self {
            return format!("reflection/{}", week_number);
        }
        self.target().map(|t| t.to_string()).unwrap_or_default()
    }

    /// The local record this update mirrors, if any.
    pub fn target(&self) -> Option<RecordRef> {
        match self {
            ProgressUpdate::Water { date, .. } => Some(RecordRef::new(RecordKind::Water, *date)),
            ProgressUpdate::FastingStart { date, .. } | ProgressUpdate::FastingStop { date, .. } => {
                Some(RecordRef::new(RecordKind::Fasting, *date))
            }
            ProgressUpdate::TaskToggle { date, task, .. } => {
                Some(RecordRef::new(RecordKind::Task(*task), *date))
            }
            ProgressUpdate::WeeklyReflection { .. } => None,
        }
    }
}

fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Which local table a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Fasting,
    Water,
    Task(TaskType),
}

/// Points at one local record of the device's user, e.g. `task/2025-01-15/lunch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub date: NaiveDate,
}

impl RecordRef {
    pub fn new(kind: RecordKind, date: NaiveDate) -> Self {
        Self { kind, date }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecordKind::Fasting => write!(f, "fasting/{}", self.date),
            RecordKind::Water => write!(f, "water/{}", self.date),
            RecordKind::Task(task) => write!(f, "task/{}/{}", self.date, task),
        }
    }
}

/// Request body accepted by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProgressRequest {
    Daily(DailyPatch),
    Weekly(WeeklyPatch),
}

impl ProgressRequest {
    /// Routes a JSON body on its `type` field: `"weekly"` is a reflection,
    /// anything else (including no `type`) a daily patch.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ProgressError> {
        let is_weekly = value.get("type").and_then(|t| t.as_str()) == Some("weekly");

        if is_weekly {
            serde_json::from_value(value)
                .map(ProgressRequest::Weekly)
                .map_err(|e| ProgressError::Malformed(e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(ProgressRequest::Daily)
                .map_err(|e| ProgressError::Malformed(e.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DailyTag {
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTag {
    Weekly,
}

/// Partial update of one day's progress. Absent fields are left alone by
/// the remote; `null` fasting timestamps clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DailyTag>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_cups: Option<i64>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fasting_started_at: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fasting_ended_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast_done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner_done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<i64>,
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// A validated [`DailyPatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChanges {
    pub date: NaiveDate,
    pub water_cups: Option<u32>,
    pub fasting_started_at: Option<Option<DateTime<Utc>>>,
    pub fasting_ended_at: Option<Option<DateTime<Utc>>>,
    /// Indexed like [`TaskType::ALL`].
    pub tasks: [Option<bool>; 4],
    pub completed: Option<bool>,
    pub week: Option<u32>,
    pub day_number: Option<u32>,
}

impl DailyPatch {
    fn task_field_mut(&mut self, task: TaskType) -> &mut Option<bool> {
        match task {
            TaskType::Breakfast => &mut self.breakfast_done,
            TaskType::Lunch => &mut self.lunch_done,
            TaskType::Dinner => &mut self.dinner_done,
            TaskType::Exercise => &mut self.exercise_done,
        }
    }

    pub fn validate(&self) -> Result<DailyChanges, ProgressError> {
        let date = parse_day(&self.date)?;

        let water_cups = self
            .water_cups
            .map(|v| check_range("water_cups", v, 0, MAX_WATER_CUPS))
            .transpose()?;
        let week = self
            .week
            .map(|v| check_range("week", v, 1, i64::from(u32::MAX)))
            .transpose()?;
        let day_number = self
            .day_number
            .map(|v| check_range("day_number", v, 1, 7))
            .transpose()?;

        let fasting_started_at =
            parse_nullable_timestamp("fasting_started_at", &self.fasting_started_at)?;
        let fasting_ended_at = parse_nullable_timestamp("fasting_ended_at", &self.fasting_ended_at)?;

        Ok(DailyChanges {
            date,
            water_cups,
            fasting_started_at,
            fasting_ended_at,
            tasks: [
                self.breakfast_done,
                self.lunch_done,
                self.dinner_done,
                self.exercise_done,
            ],
            completed: self.completed,
            week,
            day_number,
        })
    }
}

/// End-of-week reflection body (`"type": "weekly"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklyPatch {
    #[serde(rename = "type")]
    pub kind: WeeklyTag,
    pub week_number: i64,
    pub energy: Energy,
    pub sleep: Sleep,
    pub mood: Mood,
}

impl WeeklyPatch {
    /// Returns the validated week number.
    pub fn validate(&self) -> Result<u32, ProgressError> {
        check_range("week_number", self.week_number, 1, i64::from(u32::MAX))
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<u32, ProgressError> {
    if value < min || value > max {
        return Err(ProgressError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as u32)
}

/// Parses a strict `YYYY-MM-DD` date.
fn parse_day(raw: &str) -> Result<NaiveDate, ProgressError> {
    let well_formed = raw.len() == 10
        && raw.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ProgressError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ProgressError::InvalidDate(raw.to_string()))
}

fn parse_nullable_timestamp(
    field: &'static str,
    raw: &Option<Option<String>>,
) -> Result<Option<Option<DateTime<Utc>>>, ProgressError> {
    match raw {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(value)) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(Some(dt.with_timezone(&Utc))))
            .map_err(|_| ProgressError::InvalidTimestamp {
                field,
                value: value.clone(),
            }),
    }
}
