//! The progression engines and their host-side composition.

pub mod achievement_service;
pub mod challenge_service;
pub mod level_service;
pub mod progression_service;
pub mod streak_service;

pub use achievement_service::AchievementService;
pub use challenge_service::{ChallengeRefresh, ChallengeService};
pub use level_service::LevelService;
pub use progression_service::{
    EvaluationOptions, ProgressionDelta, ProgressionOutcome, ProgressionService,
};
pub use streak_service::StreakService;
