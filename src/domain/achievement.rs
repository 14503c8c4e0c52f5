//! Achievement catalog entries and the per-user unlock overlay.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{CatalogKey, Displayable, Progress};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Economic,
    Consistency,
    Goals,
    Progress,
    Special,
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AchievementCategory::Economic => "economic",
            AchievementCategory::Consistency => "consistency",
            AchievementCategory::Goals => "goals",
            AchievementCategory::Progress => "progress",
            AchievementCategory::Special => "special",
        };
        f.write_str(label)
    }
}

/// Display tier. Not used by unlock logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(label)
    }
}

/// Data an achievement needs that the progression inputs do not carry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalRequirement {
    DebtsSettled,
    StreakDays(u32),
    GoalsCreated(u32),
    GoalsCompleted(u32),
    EarlyAccount,
    Referrals(u32),
    MissionsCompleted(u32),
}

/// Unlock condition attached to a catalog entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", tag = "rule")]
pub enum AchievementRule {
    /// Ledger holds at least this many transactions.
    TransactionCount { min: usize },
    /// Lifetime income minus lifetime expense reaches the threshold.
    SavingsAtLeast { threshold: f64 },
    /// Any transaction is tagged with this category.
    UsesCategory { category: &'static str },
    /// Profile XP reaches the threshold.
    XpAtLeast { threshold: u64 },
    /// The last `window` dated transactions all land within `tolerance_hours`
    /// of their mean hour of day.
    ConsistentHour { window: usize, tolerance_hours: f64 },
    /// Transactions dated in the evaluation month reach the threshold.
    MonthlyTransactions { min: usize },
    /// Depends on data owned elsewhere; never satisfied by the evaluator.
    External { requirement: ExternalRequirement },
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub xp_reward: u64,
    pub rule: AchievementRule,
}

impl CatalogKey for Achievement {
    fn key(&self) -> &str {
        self.id
    }
}

impl Displayable for Achievement {
    fn display_label(&self) -> String {
        format!("{} {} ({}, +{} XP)", self.icon, self.name, self.rarity, self.xp_reward)
    }
}

/// Per-user overlay recording when an achievement was unlocked. Once written it
/// is never cleared or re-stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedAchievement {
    pub id: String,
    pub unlocked_at: NaiveDateTime,
}

/// Catalog entry joined with the user's overlay, for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked_at: Option<NaiveDateTime>,
    pub progress: Option<Progress>,
}

impl AchievementStatus {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}
