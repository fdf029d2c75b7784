use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Great,
    Good,
    Ok,
    Low,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sleep {
    Great,
    Good,
    Ok,
    Bad,
    Terrible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Ok,
    Tired,
    Bad,
}

impl Energy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Great => "great",
            Energy::Good => "good",
            Energy::Ok => "ok",
            Energy::Low => "low",
            Energy::Bad => "bad",
        }
    }
}

impl Sleep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sleep::Great => "great",
            Sleep::Good => "good",
            Sleep::Ok => "ok",
            Sleep::Bad => "bad",
            Sleep::Terrible => "terrible",
        }
    }
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Ok => "ok",
            Mood::Tired => "tired",
            Mood::Bad => "bad",
        }
    }
}

impl FromStr for Energy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(Energy::Great),
            "good" => Ok(Energy::Good),
            "ok" => Ok(Energy::Ok),
            "low" => Ok(Energy::Low),
            "bad" => Ok(Energy::Bad),
            _ => Err(format!(
                "Invalid energy '{}'. Valid options: great, good, ok, low, bad",
                s
            )),
        }
    }
}

impl FromStr for Sleep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(Sleep::Great),
            "good" => Ok(Sleep::Good),
            "ok" => Ok(Sleep::Ok),
            "bad" => Ok(Sleep::Bad),
            "terrible" => Ok(Sleep::Terrible),
            _ => Err(format!(
                "Invalid sleep '{}'. Valid options: great, good, ok, bad, terrible",
                s
            )),
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "ok" => Ok(Mood::Ok),
            "tired" => Ok(Mood::Tired),
            "bad" => Ok(Mood::Bad),
            _ => Err(format!(
                "Invalid mood '{}'. Valid options: great, good, ok, tired, bad",
                s
            )),
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sleep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// End-of-week check-in, one per (user, week_number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReflection {
    pub user_id: String,
    pub week_number: u32,
    pub energy: Energy,
    pub sleep: Sleep,
    pub mood: Mood,
}
