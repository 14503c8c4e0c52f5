//! Streak state machine.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::calendar;
use crate::domain::{FlameIntensity, Streak};

/// Streak lengths that earn a celebration.
pub const MILESTONES: [u32; 5] = [7, 14, 30, 60, 100];

/// Advances per-type streaks one evaluation at a time.
pub struct StreakService;

impl StreakService {
    /// Returns `streak` advanced to `today`.
    ///
    /// Activity when the last recorded date is not today extends the streak if
    /// that date was yesterday and restarts it at 1 otherwise. Without activity,
    /// a gap of two or more days either consumes a freeze or resets the streak
    /// to zero. Any other call is a no-op, so repeating a call on the same day
    /// never double counts. A reset also records today, so activity later that
    /// day is not counted until tomorrow.
    pub fn update_streak(streak: &Streak, has_activity_today: bool, today: NaiveDate) -> Streak {
        let mut next = streak.clone();
        let yesterday = calendar::yesterday(today);
        let last = streak.last_activity_date;
        if has_activity_today && last != Some(today) {
            let consecutive = last == Some(yesterday);
            next.current_days = if consecutive {
                streak.current_days.saturating_add(1)
            } else {
                1
            };
            next.longest_days = streak.longest_days.max(next.current_days);
            next.multiplier = Self::multiplier_for(next.current_days);
            next.last_activity_date = Some(today);
            debug!(
                streak = %streak.streak_type,
                days = next.current_days,
                consecutive,
                "streak extended"
            );
        } else if last.map_or(true, |day| day != today && day != yesterday) {
            // A missing date means no prior activity: nothing to protect.
            if last.is_some() && streak.freezes_available > 0 {
                next.freezes_available -= 1;
                // The freeze covers every missed day up to yesterday, so the
                // next activity counts as consecutive and a repeat call today
                // finds nothing left to protect.
                next.last_activity_date = Some(yesterday);
                debug!(
                    streak = %streak.streak_type,
                    freezes_left = next.freezes_available,
                    "streak protected by freeze"
                );
            } else {
                next.current_days = 0;
                next.multiplier = Streak::base_multiplier();
                next.last_activity_date = Some(today);
                debug!(streak = %streak.streak_type, "streak reset");
            }
        }

        next
    }

    /// Reward multiplier for a streak of `days`.
    pub fn multiplier_for(days: u32) -> f64 {
        match days {
            0..=6 => 1.0,
            7..=13 => 1.5,
            14..=29 => 2.0,
            30..=59 => 2.5,
            60..=99 => 3.0,
            _ => 5.0,
        }
    }

    pub fn flame_intensity(streak: &Streak) -> FlameIntensity {
        match streak.current_days {
            0 => FlameIntensity::None,
            1..=6 => FlameIntensity::Spark,
            7..=29 => FlameIntensity::Flame,
            30..=99 => FlameIntensity::Blaze,
            _ => FlameIntensity::Inferno,
        }
    }

    /// A live streak whose last activity was yesterday breaks tomorrow unless
    /// something happens today.
    pub fn is_at_risk(streak: &Streak, today: NaiveDate) -> bool {
        streak.current_days > 0 && streak.last_activity_date == Some(calendar::yesterday(today))
    }

    pub fn next_milestone(days: u32) -> Option<u32> {
        MILESTONES.into_iter().find(|&milestone| milestone > days)
    }

    /// Days left until the next milestone, `None` once the last one is passed.
    pub fn days_to_next_milestone(streak: &Streak) -> Option<u32> {
        Self::next_milestone(streak.current_days).map(|milestone| milestone - streak.current_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StreakType;
    use chrono::Duration;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn streak(current: u32, last: Option<NaiveDate>, freezes: u32) -> Streak {
        Streak {
            streak_type: StreakType::DailyRegistration,
            current_days: current,
            longest_days: current,
            multiplier: StreakService::multiplier_for(current),
            last_activity_date: last,
            freezes_available: freezes,
        }
    }

    #[test]
    fn multiplier_boundaries() {
        let cases = [
            (6, 1.0),
            (7, 1.5),
            (13, 1.5),
            (14, 2.0),
            (29, 2.0),
            (30, 2.5),
            (59, 2.5),
            (60, 3.0),
            (99, 3.0),
            (100, 5.0),
        ];
        for (days, expected) in cases {
            assert_eq!(StreakService::multiplier_for(days), expected, "days={days}");
        }
    }

    #[test]
    fn activity_after_yesterday_reaches_first_milestone() {
        let today = day(10);
        let before = streak(6, Some(day(9)), 1);
        let after = StreakService::update_streak(&before, true, today);
        assert_eq!(after.current_days, 7);
        assert_eq!(after.multiplier, 1.5);
        assert_eq!(after.last_activity_date, Some(today));
        assert_eq!(after.longest_days, 7);
        assert_eq!(after.freezes_available, 1);
    }

    #[test]
    fn activity_after_gap_restarts_at_one() {
        let after = StreakService::update_streak(&streak(12, Some(day(5)), 0), true, day(10));
        assert_eq!(after.current_days, 1);
        assert_eq!(after.multiplier, 1.0);
        assert_eq!(after.longest_days, 12);
    }

    #[test]
    fn same_day_updates_are_idempotent() {
        let today = day(10);
        for activity in [true, false] {
            let first = StreakService::update_streak(&streak(3, Some(day(9)), 2), activity, today);
            let second = StreakService::update_streak(&first, activity, today);
            assert_eq!(first, second, "activity={activity}");
        }
    }

    #[test]
    fn gap_without_freeze_resets() {
        let today = day(10);
        let after = StreakService::update_streak(&streak(20, Some(day(7)), 0), false, today);
        assert_eq!(after.current_days, 0);
        assert_eq!(after.multiplier, 1.0);
        assert_eq!(after.last_activity_date, Some(today));
        assert_eq!(after.longest_days, 20);
    }

    #[test]
    fn gap_with_freeze_is_protected_once_per_day() {
        let today = day(10);
        let before = streak(20, Some(day(7)), 2);
        let after = StreakService::update_streak(&before, false, today);
        assert_eq!(after.current_days, 20);
        assert_eq!(after.multiplier, 2.0);
        assert_eq!(after.freezes_available, 1);

        let repeated = StreakService::update_streak(&after, false, today);
        assert_eq!(repeated.freezes_available, 1);

        let resumed = StreakService::update_streak(&repeated, true, today);
        assert_eq!(resumed.current_days, 21);
        assert_eq!(resumed.last_activity_date, Some(today));
    }

    #[test]
    fn missing_last_activity_forces_reset() {
        let today = day(10);
        let after = StreakService::update_streak(&streak(5, None, 3), false, today);
        assert_eq!(after.current_days, 0);
        assert_eq!(after.freezes_available, 3);
        assert_eq!(after.last_activity_date, Some(today));
    }

    #[test]
    fn activity_later_on_reset_day_waits_for_tomorrow() {
        let today = day(10);
        let reset = StreakService::update_streak(&streak(5, Some(day(1)), 0), false, today);
        let same_day = StreakService::update_streak(&reset, true, today);
        assert_eq!(same_day, reset);
        assert_eq!(same_day.current_days, 0);

        let tomorrow = StreakService::update_streak(&same_day, true, day(11));
        assert_eq!(tomorrow.current_days, 1);
        assert_eq!(tomorrow.last_activity_date, Some(day(11)));
    }

    #[test]
    fn gap_on_empty_streak_still_spends_freeze() {
        let today = day(10);
        let after = StreakService::update_streak(&streak(0, Some(day(5)), 1), false, today);
        assert_eq!(after.freezes_available, 0);
        assert_eq!(after.current_days, 0);
        assert_eq!(after.last_activity_date, Some(day(9)));
    }

    #[test]
    fn quiet_day_after_yesterday_is_noop() {
        let before = streak(4, Some(day(9)), 0);
        assert_eq!(StreakService::update_streak(&before, false, day(10)), before);
    }

    #[test]
    fn longest_never_decreases() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut current = Streak::new(StreakType::DailyRegistration).with_freezes(3);
        let mut today = day(1);
        let mut longest = 0;
        for _ in 0..400 {
            today += Duration::days(rng.gen_range(0..3));
            current = StreakService::update_streak(&current, rng.gen_bool(0.7), today);
            assert!(current.longest_days >= longest);
            assert!(current.longest_days >= current.current_days);
            longest = current.longest_days;
        }
    }

    #[test]
    fn helpers_describe_streak() {
        let today = day(10);
        let live = streak(12, Some(day(9)), 0);
        assert!(StreakService::is_at_risk(&live, today));
        assert!(!StreakService::is_at_risk(&streak(0, Some(day(9)), 0), today));
        assert_eq!(StreakService::flame_intensity(&live), FlameIntensity::Flame);
        assert_eq!(StreakService::days_to_next_milestone(&live), Some(2));
        assert_eq!(StreakService::days_to_next_milestone(&streak(100, None, 0)), None);
        assert_eq!(StreakService::days_to_next_milestone(&streak(0, None, 0)), Some(7));
    }
}
