//! Achievement rule evaluation over (profile, ledger).

use std::collections::HashSet;

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, info};

use crate::catalog::{self, ACHIEVEMENTS};
use crate::domain::{
    AchievementRule, AchievementStatus, ExternalRequirement, Progress, Streak,
    UnlockedAchievement, UserProfile,
};
use crate::ledger::{self, LedgerView};

pub struct AchievementService;

impl AchievementService {
    /// Evaluates every catalog entry not yet unlocked and returns the ones whose
    /// rule now holds, stamped with `now`, in catalog order.
    pub fn check_achievements<L>(
        profile: &UserProfile,
        ledger: &L,
        already_unlocked: &[UnlockedAchievement],
        now: NaiveDateTime,
    ) -> Vec<UnlockedAchievement>
    where
        L: LedgerView + ?Sized,
    {
        let unlocked: HashSet<&str> = already_unlocked.iter().map(|a| a.id.as_str()).collect();

        let newly: Vec<UnlockedAchievement> = ACHIEVEMENTS
            .iter()
            .filter(|achievement| !unlocked.contains(achievement.id))
            .filter(|achievement| Self::is_satisfied(&achievement.rule, profile, ledger, now))
            .map(|achievement| {
                info!(
                    achievement = achievement.id,
                    xp_reward = achievement.xp_reward,
                    "achievement unlocked"
                );
                UnlockedAchievement {
                    id: achievement.id.to_string(),
                    unlocked_at: now,
                }
            })
            .collect();

        debug!(
            already_unlocked = unlocked.len(),
            newly_unlocked = newly.len(),
            "achievements checked"
        );
        newly
    }

    /// Streak-length achievements reached by `streak.longest_days`. These sit
    /// outside (profile, ledger), so the host calls this with the streak it
    /// just updated.
    pub fn check_streak_achievements(
        streak: &Streak,
        already_unlocked: &[UnlockedAchievement],
        now: NaiveDateTime,
    ) -> Vec<UnlockedAchievement> {
        ACHIEVEMENTS
            .iter()
            .filter(|achievement| match achievement.rule {
                AchievementRule::External {
                    requirement: ExternalRequirement::StreakDays(days),
                } => streak.longest_days >= days,
                _ => false,
            })
            .filter(|achievement| !already_unlocked.iter().any(|a| a.id == achievement.id))
            .map(|achievement| {
                info!(
                    achievement = achievement.id,
                    streak_days = streak.longest_days,
                    "streak achievement unlocked"
                );
                UnlockedAchievement {
                    id: achievement.id.to_string(),
                    unlocked_at: now,
                }
            })
            .collect()
    }

    pub fn is_satisfied<L>(
        rule: &AchievementRule,
        profile: &UserProfile,
        ledger: &L,
        now: NaiveDateTime,
    ) -> bool
    where
        L: LedgerView + ?Sized,
    {
        match *rule {
            AchievementRule::TransactionCount { min } => ledger.len() >= min,
            AchievementRule::SavingsAtLeast { threshold } => {
                ledger::net_savings(ledger.all_transactions()) >= threshold
            }
            AchievementRule::UsesCategory { category } => ledger
                .all_transactions()
                .iter()
                .any(|txn| txn.in_category(category)),
            AchievementRule::XpAtLeast { threshold } => profile.xp >= threshold,
            AchievementRule::ConsistentHour {
                window,
                tolerance_hours,
            } => consistent_hour(ledger, window, tolerance_hours),
            AchievementRule::MonthlyTransactions { min } => {
                ledger::count_in_month(ledger, now.date()) >= min
            }
            // Debts, goals, referrals, missions, account age and streak length
            // live outside (profile, ledger); the host grants these itself.
            AchievementRule::External { .. } => false,
        }
    }

    /// Partial progress for threshold achievements (savings, XP, monthly
    /// volume). `None` for boolean-only or unknown ids.
    pub fn get_progress<L>(
        id: &str,
        profile: &UserProfile,
        ledger: &L,
        now: NaiveDateTime,
    ) -> Option<Progress>
    where
        L: LedgerView + ?Sized,
    {
        let achievement = catalog::achievement(id)?;
        match achievement.rule {
            AchievementRule::SavingsAtLeast { threshold } => Some(Progress::clamped(
                ledger::net_savings(ledger.all_transactions()),
                threshold,
            )),
            AchievementRule::XpAtLeast { threshold } => Some(Progress::clamped(
                profile.xp as f64,
                threshold as f64,
            )),
            AchievementRule::MonthlyTransactions { min } => Some(Progress::clamped(
                ledger::count_in_month(ledger, now.date()) as f64,
                min as f64,
            )),
            AchievementRule::TransactionCount { .. }
            | AchievementRule::UsesCategory { .. }
            | AchievementRule::ConsistentHour { .. }
            | AchievementRule::External { .. } => None,
        }
    }

    /// Appends `newly` to `existing` without touching entries already present.
    pub fn merge_unlocked(
        existing: &[UnlockedAchievement],
        newly: &[UnlockedAchievement],
    ) -> Vec<UnlockedAchievement> {
        let mut merged = existing.to_vec();
        let mut seen: HashSet<String> = existing.iter().map(|a| a.id.clone()).collect();
        for entry in newly {
            if seen.insert(entry.id.clone()) {
                merged.push(entry.clone());
            }
        }
        merged
    }

    /// XP the host should grant for `unlocked`. Ids missing from the catalog
    /// grant nothing.
    pub fn xp_reward(unlocked: &[UnlockedAchievement]) -> u64 {
        unlocked
            .iter()
            .filter_map(|entry| catalog::achievement(&entry.id))
            .map(|achievement| achievement.xp_reward)
            .sum()
    }

    /// Catalog joined with the user's overlay and current progress.
    pub fn board<L>(
        profile: &UserProfile,
        ledger: &L,
        unlocked: &[UnlockedAchievement],
        now: NaiveDateTime,
    ) -> Vec<AchievementStatus>
    where
        L: LedgerView + ?Sized,
    {
        ACHIEVEMENTS
            .iter()
            .map(|achievement| {
                let unlocked_at = unlocked
                    .iter()
                    .find(|entry| entry.id == achievement.id)
                    .map(|entry| entry.unlocked_at);
                let progress = match unlocked_at {
                    Some(_) => None,
                    None => Self::get_progress(achievement.id, profile, ledger, now),
                };
                AchievementStatus {
                    achievement,
                    unlocked_at,
                    progress,
                }
            })
            .collect()
    }
}

/// The latest `window` dated transactions all fall within `tolerance_hours` of
/// their mean hour of day.
fn consistent_hour<L>(ledger: &L, window: usize, tolerance_hours: f64) -> bool
where
    L: LedgerView + ?Sized,
{
    let stamps = ledger::dated_chronological(ledger);
    if window == 0 || stamps.len() < window {
        return false;
    }
    let hours: Vec<f64> = stamps[stamps.len() - window..]
        .iter()
        .map(|ts| f64::from(ts.hour()))
        .collect();
    let mean = hours.iter().sum::<f64>() / window as f64;
    hours.iter().all(|hour| (hour - mean).abs() <= tolerance_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transaction;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn at(day: u32, hour: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 6, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
    }

    fn ids(unlocked: &[UnlockedAchievement]) -> Vec<&str> {
        unlocked.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn savings_below_first_threshold_reports_progress() {
        let ledger = vec![
            Transaction::income(100.0, "Salário", None),
            Transaction::expense(40.0, "Mercado", None),
            Transaction::expense(10.0, "Lazer", None),
        ];
        let profile = UserProfile::default();
        let newly = AchievementService::check_achievements(&profile, &ledger, &[], now());
        assert!(!ids(&newly).contains(&"saver_beginner"));
        assert_eq!(
            AchievementService::get_progress("saver_beginner", &profile, &ledger, now()),
            Some(Progress::new(50.0, 100.0))
        );
    }

    #[test]
    fn unlocks_follow_catalog_order_and_carry_now() {
        let ledger = vec![
            Transaction::income(1_500.0, "Salário", at(1, 9)),
            Transaction::expense(200.0, "Investimentos", at(2, 9)),
        ];
        let profile = UserProfile::with_xp(12_000);
        let newly = AchievementService::check_achievements(&profile, &ledger, &[], now());
        assert_eq!(
            ids(&newly),
            vec![
                "first_transaction",
                "saver_beginner",
                "saver_intermediate",
                "investor",
                "level_up",
                "xp_master",
            ]
        );
        assert!(newly.iter().all(|a| a.unlocked_at == now()));
    }

    #[test]
    fn already_unlocked_entries_are_skipped() {
        let ledger = vec![Transaction::income(10.0, "Salário", None)];
        let earlier = now() - Duration::days(30);
        let existing = vec![UnlockedAchievement {
            id: "first_transaction".into(),
            unlocked_at: earlier,
        }];
        let newly =
            AchievementService::check_achievements(&UserProfile::default(), &ledger, &existing, now());
        assert!(newly.is_empty());

        let merged = AchievementService::merge_unlocked(&existing, &newly);
        assert_eq!(merged, existing);
    }

    #[test]
    fn merge_never_restamps_existing_unlocks() {
        let earlier = now() - Duration::days(3);
        let existing = vec![UnlockedAchievement {
            id: "level_up".into(),
            unlocked_at: earlier,
        }];
        let newly = vec![
            UnlockedAchievement {
                id: "level_up".into(),
                unlocked_at: now(),
            },
            UnlockedAchievement {
                id: "legend".into(),
                unlocked_at: now(),
            },
        ];
        let merged = AchievementService::merge_unlocked(&existing, &newly);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].unlocked_at, earlier);
        assert_eq!(merged[1].id, "legend");
    }

    #[test]
    fn externally_sourced_achievements_never_unlock_here() {
        let ledger: Vec<Transaction> = (0..150)
            .map(|i| Transaction::income(100.0, "Salário", at(1 + (i % 19), 10)))
            .collect();
        let newly =
            AchievementService::check_achievements(&UserProfile::with_xp(99_999), &ledger, &[], now());
        for id in [
            "debt_free",
            "streak_7",
            "streak_30",
            "streak_100",
            "dreamer",
            "achiever",
            "ambitious",
            "conqueror",
            "early_adopter",
            "evangelist",
            "perfectionist",
        ] {
            assert!(!ids(&newly).contains(&id), "{id} must stay locked");
        }
    }

    #[test]
    fn punctual_requires_seven_clustered_hours() {
        let clustered: Vec<Transaction> = (1..=7)
            .map(|d| Transaction::expense(5.0, "Café", at(d, 8 + d % 3)))
            .collect();
        let profile = UserProfile::default();
        assert!(ids(&AchievementService::check_achievements(&profile, &clustered, &[], now()))
            .contains(&"punctual"));

        let short = clustered[..6].to_vec();
        assert!(!ids(&AchievementService::check_achievements(&profile, &short, &[], now()))
            .contains(&"punctual"));

        let mut scattered = clustered.clone();
        scattered.push(Transaction::expense(5.0, "Café", at(8, 23)));
        assert!(!ids(&AchievementService::check_achievements(&profile, &scattered, &[], now()))
            .contains(&"punctual"));
    }

    #[test]
    fn punctual_ignores_undated_records() {
        let mut ledger: Vec<Transaction> = (1..=6)
            .map(|d| Transaction::expense(5.0, "Café", at(d, 9)))
            .collect();
        ledger.push(Transaction::expense(5.0, "Café", None));
        let newly =
            AchievementService::check_achievements(&UserProfile::default(), &ledger, &[], now());
        assert!(!ids(&newly).contains(&"punctual"));
    }

    #[test]
    fn workaholic_counts_current_month_only() {
        let mut ledger: Vec<Transaction> = (0..99)
            .map(|i| Transaction::expense(1.0, "Mercado", at(1 + (i % 20), 12)))
            .collect();
        let may = NaiveDate::from_ymd_opt(2024, 5, 31).and_then(|d| d.and_hms_opt(12, 0, 0));
        ledger.push(Transaction::expense(1.0, "Mercado", may));
        let profile = UserProfile::default();
        assert!(!ids(&AchievementService::check_achievements(&profile, &ledger, &[], now()))
            .contains(&"workaholic"));
        assert_eq!(
            AchievementService::get_progress("workaholic", &profile, &ledger, now()),
            Some(Progress::new(99.0, 100.0))
        );

        ledger.push(Transaction::expense(1.0, "Mercado", at(20, 8)));
        assert!(ids(&AchievementService::check_achievements(&profile, &ledger, &[], now()))
            .contains(&"workaholic"));
    }

    #[test]
    fn progress_is_clamped_and_limited_to_threshold_families() {
        let profile = UserProfile::with_xp(70_000);
        let ledger = vec![Transaction::expense(500.0, "Mercado", None)];
        assert_eq!(
            AchievementService::get_progress("legend", &profile, &ledger, now()),
            Some(Progress::new(50_000.0, 50_000.0))
        );
        assert_eq!(
            AchievementService::get_progress("saver_advanced", &profile, &ledger, now()),
            Some(Progress::new(0.0, 10_000.0))
        );
        assert_eq!(
            AchievementService::get_progress("investor", &profile, &ledger, now()),
            None
        );
        assert_eq!(
            AchievementService::get_progress("unknown", &profile, &ledger, now()),
            None
        );
    }

    #[test]
    fn board_and_rewards_reflect_overlay() {
        let ledger = vec![Transaction::income(10.0, "Salário", None)];
        let unlocked = vec![UnlockedAchievement {
            id: "first_transaction".into(),
            unlocked_at: now(),
        }];
        let board = AchievementService::board(&UserProfile::default(), &ledger, &unlocked, now());
        assert_eq!(board.len(), ACHIEVEMENTS.len());
        assert!(board[0].is_unlocked());
        assert!(board.iter().filter(|s| s.is_unlocked()).count() == 1);
        assert_eq!(AchievementService::xp_reward(&unlocked), 50);
    }

    #[test]
    fn streak_achievements_follow_longest_streak() {
        use crate::domain::StreakType;

        let mut streak = Streak::new(StreakType::DailyRegistration);
        streak.current_days = 3;
        streak.longest_days = 31;
        let unlocked = AchievementService::check_streak_achievements(&streak, &[], now());
        assert_eq!(ids(&unlocked), ["streak_7", "streak_30"]);
        assert!(unlocked.iter().all(|entry| entry.unlocked_at == now()));

        let again = AchievementService::check_streak_achievements(&streak, &unlocked, now());
        assert!(again.is_empty());
    }
}
