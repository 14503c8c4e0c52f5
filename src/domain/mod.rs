//! Pure progression models. No I/O, only data types and core enums.

pub mod achievement;
pub mod challenge;
pub mod common;
pub mod level;
pub mod profile;
pub mod state;
pub mod streak;
pub mod transaction;

pub use achievement::{
    Achievement, AchievementCategory, AchievementRule, AchievementStatus, ExternalRequirement,
    Rarity, UnlockedAchievement,
};
pub use challenge::{ChallengeKind, ChallengeTemplate, Difficulty, WeeklyChallenge};
pub use common::{CatalogKey, Displayable, Progress};
pub use level::{ContentItem, ContentKind, EducationalLevel, LevelContent};
pub use profile::UserProfile;
pub use state::ProgressState;
pub use streak::{FlameIntensity, Streak, StreakType};
pub use transaction::{Transaction, TransactionKind};
