use crate::catalog::{LEVELS, LEVEL_CONTENT};
use crate::domain::{EducationalLevel, LevelContent, Progress};

/// Lookups over the educational ladder.
pub struct LevelService;

impl LevelService {
    /// Highest level whose threshold `xp` has reached. Falls back to the first
    /// level when nothing matches.
    pub fn get_current_level(xp: u64) -> &'static EducationalLevel {
        LEVELS
            .iter()
            .rev()
            .find(|level| level.min_xp <= xp)
            .unwrap_or(&LEVELS[0])
    }

    /// The level after `current` by table position, `None` at the top.
    pub fn get_next_level(current: &EducationalLevel) -> Option<&'static EducationalLevel> {
        let index = LEVELS.iter().position(|level| level.id == current.id)?;
        LEVELS.get(index + 1)
    }

    pub fn level_by_id(id: u32) -> Option<&'static EducationalLevel> {
        LEVELS.iter().find(|level| level.id == id)
    }

    /// Learning material for `level_id`, or the first level's bundle when the
    /// id is unknown.
    pub fn content_for(level_id: u32) -> &'static LevelContent {
        LEVEL_CONTENT
            .iter()
            .find(|content| content.level_id == level_id)
            .unwrap_or(&LEVEL_CONTENT[0])
    }

    /// XP earned inside the current level against the span to the next one.
    /// At the top level the bar is reported full.
    pub fn progress_to_next(xp: u64) -> Progress {
        let current = Self::get_current_level(xp);
        match Self::get_next_level(current) {
            Some(next) => {
                let span = next.min_xp.saturating_sub(current.min_xp) as f64;
                let earned = xp.saturating_sub(current.min_xp) as f64;
                Progress::clamped(earned, span)
            }
            None => Progress::new(1.0, 1.0),
        }
    }

    pub fn xp_to_next(xp: u64) -> Option<u64> {
        let current = Self::get_current_level(xp);
        Self::get_next_level(current).map(|next| next.min_xp.saturating_sub(xp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_select_levels() {
        assert_eq!(LevelService::get_current_level(0).name, "Primeiro Dia");
        assert_eq!(LevelService::get_current_level(999).name, "Primeiro Dia");
        assert_eq!(LevelService::get_current_level(1_000).name, "Consciência");
        assert_eq!(LevelService::get_current_level(14_999).name, "Investidor");
        assert_eq!(LevelService::get_current_level(15_000).name, "Liberdade");
        assert_eq!(LevelService::get_current_level(u64::MAX).name, "Liberdade");
    }

    #[test]
    fn next_level_walks_the_table() {
        let first = LevelService::get_current_level(0);
        assert_eq!(
            LevelService::get_next_level(first).map(|l| l.name),
            Some("Consciência")
        );
        let top = LevelService::get_current_level(20_000);
        assert!(LevelService::get_next_level(top).is_none());
    }

    #[test]
    fn unknown_content_falls_back_to_first_bundle() {
        assert_eq!(LevelService::content_for(3).level_id, 3);
        assert_eq!(LevelService::content_for(42).level_id, 0);
        assert!(LevelService::content_for(4).videos().count() >= 1);
    }

    #[test]
    fn progress_within_level() {
        assert_eq!(LevelService::progress_to_next(1_750), Progress::new(750.0, 1_500.0));
        assert_eq!(LevelService::xp_to_next(1_750), Some(750));
        assert_eq!(LevelService::progress_to_next(30_000), Progress::new(1.0, 1.0));
        assert_eq!(LevelService::xp_to_next(30_000), None);
    }
}
