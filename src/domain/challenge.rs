//! Weekly challenge templates and per-week instances.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{CatalogKey, Displayable, Progress};

/// Identifies the rule a weekly challenge is measured by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    /// Net weekly savings of at least the target.
    #[serde(rename = "save_200")]
    Save200,
    /// A transaction registered on every day of the week.
    #[serde(rename = "streak_7")]
    Streak7,
    /// Leisure spending stays at or under the cap.
    CategoryLimit,
    /// Investments reach the target.
    Invest,
    /// No debt payments during the week.
    NoDebt,
}

impl ChallengeKind {
    pub const ALL: [ChallengeKind; 5] = [
        ChallengeKind::Save200,
        ChallengeKind::Streak7,
        ChallengeKind::CategoryLimit,
        ChallengeKind::Invest,
        ChallengeKind::NoDebt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeKind::Save200 => "save_200",
            ChallengeKind::Streak7 => "streak_7",
            ChallengeKind::CategoryLimit => "category_limit",
            ChallengeKind::Invest => "invest",
            ChallengeKind::NoDebt => "no_debt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Epic => "epic",
        };
        f.write_str(label)
    }
}

/// Static blueprint a weekly challenge is stamped from.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeTemplate {
    pub kind: ChallengeKind,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub xp_reward: u64,
    pub target: f64,
    pub icon: &'static str,
    pub color: &'static str,
}

impl CatalogKey for ChallengeTemplate {
    fn key(&self) -> &str {
        self.kind.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyChallenge {
    /// `{week}_{template key}`.
    pub id: String,
    /// ISO week in `YYYY-Www` form.
    pub week: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub xp_reward: u64,
    /// Recomputed on every refresh; may flip back when the week's numbers change.
    #[serde(default)]
    pub is_completed: bool,
    /// Set the first time the challenge completes. Its XP is recommended once.
    #[serde(default)]
    pub rewarded: bool,
    pub progress: Progress,
    pub expires_at: NaiveDateTime,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl WeeklyChallenge {
    /// Template this instance was stamped from, recovered from the id suffix.
    pub fn kind(&self) -> Option<ChallengeKind> {
        let prefix = format!("{}_", self.week);
        let key = self.id.strip_prefix(prefix.as_str())?;
        ChallengeKind::from_key(key)
    }
}

impl Displayable for WeeklyChallenge {
    fn display_label(&self) -> String {
        let mark = if self.is_completed { "x" } else { " " };
        format!(
            "[{mark}] {} {} ({}, {}, +{} XP)",
            self.icon, self.title, self.difficulty, self.progress, self.xp_reward
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn challenge(id: &str, week: &str) -> WeeklyChallenge {
        WeeklyChallenge {
            id: id.into(),
            week: week.into(),
            title: "t".into(),
            description: "d".into(),
            difficulty: Difficulty::Easy,
            xp_reward: 10,
            is_completed: false,
            rewarded: false,
            progress: Progress::new(0.0, 1.0),
            expires_at: NaiveDate::from_ymd_opt(2024, 1, 7)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
            icon: String::new(),
            color: String::new(),
        }
    }

    #[test]
    fn kind_is_recovered_from_id_suffix() {
        assert_eq!(
            challenge("2024-W01_category_limit", "2024-W01").kind(),
            Some(ChallengeKind::CategoryLimit)
        );
        assert_eq!(
            challenge("2024-W01_save_200", "2024-W01").kind(),
            Some(ChallengeKind::Save200)
        );
    }

    #[test]
    fn unknown_suffix_has_no_kind() {
        assert_eq!(challenge("2024-W01_marathon", "2024-W01").kind(), None);
        assert_eq!(challenge("invest", "2024-W01").kind(), None);
    }
}
