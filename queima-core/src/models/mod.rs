mod daily_progress;
mod fasting;
mod reflection;
mod task_type;
mod water;

pub use daily_progress::DailyProgress;
pub use fasting::{FastingLog, FastingPhase, FastingProgress, FastingState, FASTING_DURATION_MS};
pub use reflection::{Energy, Mood, Sleep, WeeklyReflection};
pub use task_type::{TaskCompletion, TaskType};
pub use water::{WaterLog, ML_PER_CUP, WATER_TARGET};
