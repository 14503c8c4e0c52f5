use serde::{Deserialize, Serialize};

use super::{Streak, StreakType, UnlockedAchievement, UserProfile, WeeklyChallenge};

/// Everything the host persists per user between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub streaks: Vec<Streak>,
    #[serde(default)]
    pub achievements: Vec<UnlockedAchievement>,
    #[serde(default)]
    pub challenges: Vec<WeeklyChallenge>,
}

impl ProgressState {
    pub fn streak(&self, streak_type: StreakType) -> Option<&Streak> {
        self.streaks.iter().find(|s| s.streak_type == streak_type)
    }

    /// Replaces the stored streak of the same type, or appends it.
    pub fn upsert_streak(&mut self, streak: Streak) {
        match self
            .streaks
            .iter_mut()
            .find(|existing| existing.streak_type == streak.streak_type)
        {
            Some(existing) => *existing = streak,
            None => self.streaks.push(streak),
        }
    }

    pub fn is_unlocked(&self, achievement_id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == achievement_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_keeps_one_streak_per_type() {
        let mut state = ProgressState::default();
        state.upsert_streak(Streak::new(StreakType::Savings));
        let mut longer = Streak::new(StreakType::Savings);
        longer.current_days = 3;
        state.upsert_streak(longer);
        state.upsert_streak(Streak::new(StreakType::DailyRegistration));
        assert_eq!(state.streaks.len(), 2);
        assert_eq!(state.streak(StreakType::Savings).map(|s| s.current_days), Some(3));
    }

    #[test]
    fn empty_document_loads_defaults() {
        let state: ProgressState = serde_json::from_str("{}").expect("empty state");
        assert_eq!(state, ProgressState::default());
    }
}
