//! Per-user streak state.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StreakType {
    /// At least one transaction registered on the day.
    DailyRegistration,
    /// Stayed within the planned budget for the day.
    BudgetControl,
    /// Put money aside on the day.
    Savings,
}

impl StreakType {
    pub fn as_str(self) -> &'static str {
        match self {
            StreakType::DailyRegistration => "daily-registration",
            StreakType::BudgetControl => "budget-control",
            StreakType::Savings => "savings",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    #[serde(rename = "type")]
    pub streak_type: StreakType,
    #[serde(default)]
    pub current_days: u32,
    #[serde(default)]
    pub longest_days: u32,
    #[serde(default = "Streak::base_multiplier")]
    pub multiplier: f64,
    /// Calendar day of the last qualifying activity. Unreadable values load as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_activity_date: Option<NaiveDate>,
    #[serde(default)]
    pub freezes_available: u32,
}

impl Streak {
    pub fn new(streak_type: StreakType) -> Self {
        Self {
            streak_type,
            current_days: 0,
            longest_days: 0,
            multiplier: Self::base_multiplier(),
            last_activity_date: None,
            freezes_available: 0,
        }
    }

    pub fn with_freezes(mut self, freezes: u32) -> Self {
        self.freezes_available = freezes;
        self
    }

    pub fn base_multiplier() -> f64 {
        1.0
    }
}

/// Visual tier of a streak's flame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlameIntensity {
    None,
    Spark,
    Flame,
    Blaze,
    Inferno,
}

impl fmt::Display for FlameIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlameIntensity::None => "none",
            FlameIntensity::Spark => "spark",
            FlameIntensity::Flame => "flame",
            FlameIntensity::Blaze => "blaze",
            FlameIntensity::Inferno => "inferno",
        };
        f.write_str(label)
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value = value.trim();
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .or_else(|| crate::domain::transaction::parse_timestamp(value).map(|ts| ts.date()))
    }))
}
