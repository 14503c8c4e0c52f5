//! Host-side composition of the four engines.
//!
//! The engines never call each other; this service runs them in sequence over
//! one consistent snapshot and reports what changed so the host can notify the
//! user and award XP.

use serde::Serialize;
use tracing::info;

use crate::catalog::ACHIEVEMENTS;
use crate::config::Config;
use crate::core::random::RandomSource;
use crate::core::services::{
    AchievementService, ChallengeService, LevelService, StreakService,
};
use crate::core::time::Clock;
use crate::domain::{
    ProgressState, Streak, StreakType, UnlockedAchievement, WeeklyChallenge,
};
use crate::ledger::{self, LedgerView};

/// Knobs the host supplies for an evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationOptions {
    /// Freezes granted to a streak created by this evaluation.
    pub starting_freezes: u32,
}

impl From<&Config> for EvaluationOptions {
    fn from(config: &Config) -> Self {
        Self {
            starting_freezes: config.starting_freezes,
        }
    }
}

/// The "progression changed" delta handed to notification and XP logic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionDelta {
    pub streak: Streak,
    pub streak_extended: bool,
    pub freeze_used: bool,
    pub newly_unlocked: Vec<UnlockedAchievement>,
    pub newly_completed: Vec<WeeklyChallenge>,
    pub challenges_renewed: bool,
    /// Base XP earned by the unlocks and completions above. Applying it, and
    /// whether to scale it by `streak.multiplier`, is up to the host.
    pub xp_recommended: u64,
    pub level_before: u32,
    /// Level the profile reaches once `xp_recommended` is applied.
    pub level_after: u32,
}

impl ProgressionDelta {
    pub fn is_empty(&self) -> bool {
        !self.streak_extended
            && !self.freeze_used
            && self.newly_unlocked.is_empty()
            && self.newly_completed.is_empty()
            && !self.challenges_renewed
    }

    pub fn levelled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

#[derive(Debug, Clone)]
pub struct ProgressionOutcome {
    pub state: ProgressState,
    pub delta: ProgressionDelta,
}

pub struct ProgressionService;

impl ProgressionService {
    /// Runs the daily-registration streak, achievements, weekly challenges and
    /// level ladder against `ledger` as of `clock.now()`. Streak-length
    /// achievements are granted from the updated daily-registration streak.
    pub fn evaluate<L, C, R>(
        state: &ProgressState,
        ledger: &L,
        clock: &C,
        rng: &mut R,
        options: EvaluationOptions,
    ) -> ProgressionOutcome
    where
        L: LedgerView + ?Sized,
        C: Clock + ?Sized,
        R: RandomSource,
    {
        let now = clock.now();
        let today = now.date();
        let profile = &state.profile;

        let previous = state
            .streak(StreakType::DailyRegistration)
            .cloned()
            .unwrap_or_else(|| {
                Streak::new(StreakType::DailyRegistration).with_freezes(options.starting_freezes)
            });
        let has_activity = ledger::has_activity_on(ledger, today);
        let streak = StreakService::update_streak(&previous, has_activity, today);

        let mut newly_unlocked =
            AchievementService::check_achievements(profile, ledger, &state.achievements, now);
        newly_unlocked.extend(AchievementService::check_streak_achievements(
            &streak,
            &state.achievements,
            now,
        ));
        newly_unlocked.sort_by_key(|entry| {
            ACHIEVEMENTS
                .iter()
                .position(|achievement| achievement.id == entry.id)
        });
        let achievements = AchievementService::merge_unlocked(&state.achievements, &newly_unlocked);

        let (challenges, challenges_renewed) =
            ChallengeService::ensure_current(&state.challenges, now, rng);
        let refresh = ChallengeService::refresh_challenges(&challenges, profile, ledger, now);

        let xp_recommended = AchievementService::xp_reward(&newly_unlocked)
            + refresh
                .newly_completed
                .iter()
                .map(|challenge| challenge.xp_reward)
                .sum::<u64>();
        let level_before = LevelService::get_current_level(profile.xp).id;
        let level_after =
            LevelService::get_current_level(profile.xp.saturating_add(xp_recommended)).id;

        let delta = ProgressionDelta {
            streak_extended: streak.current_days > previous.current_days,
            freeze_used: streak.freezes_available < previous.freezes_available,
            streak: streak.clone(),
            newly_unlocked,
            newly_completed: refresh.newly_completed,
            challenges_renewed,
            xp_recommended,
            level_before,
            level_after,
        };

        let mut next = state.clone();
        next.profile.level = level_before;
        next.upsert_streak(streak);
        next.achievements = achievements;
        next.challenges = refresh.challenges;

        if !delta.is_empty() {
            info!(
                unlocked = delta.newly_unlocked.len(),
                completed = delta.newly_completed.len(),
                xp = delta.xp_recommended,
                streak_days = delta.streak.current_days,
                "progression changed"
            );
        }

        ProgressionOutcome { state: next, delta }
    }

    /// Applies `delta.xp_recommended` to the profile and re-derives its level.
    pub fn apply_rewards(state: &ProgressState, delta: &ProgressionDelta) -> ProgressState {
        let mut next = state.clone();
        next.profile.award_xp(delta.xp_recommended);
        next.profile.level = LevelService::get_current_level(next.profile.xp).id;
        next
    }
}
