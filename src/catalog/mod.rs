//! Process-wide immutable catalogs: achievements, challenge templates and the
//! educational ladder with its learning content.

pub mod achievements;
pub mod challenges;
pub mod levels;

pub use achievements::{achievement, ACHIEVEMENTS, INVESTMENT_CATEGORY};
pub use challenges::{template, CHALLENGE_TEMPLATES, DEBT_CATEGORY, LEISURE_CATEGORY};
pub use levels::{LEVELS, LEVEL_CONTENT};
