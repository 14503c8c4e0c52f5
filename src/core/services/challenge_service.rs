//! Weekly challenge generation, renewal and progress tracking.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::catalog::{
    self, CHALLENGE_TEMPLATES, DEBT_CATEGORY, INVESTMENT_CATEGORY, LEISURE_CATEGORY,
};
use crate::core::calendar::{self, IsoWeek};
use crate::core::random::RandomSource;
use crate::domain::{
    ChallengeKind, ChallengeTemplate, Progress, Transaction, UserProfile, WeeklyChallenge,
};
use crate::ledger::{self, LedgerView};

pub const MIN_WEEKLY_CHALLENGES: usize = 3;
pub const MAX_WEEKLY_CHALLENGES: usize = 4;

/// Result of recomputing a challenge set.
#[derive(Debug, Clone, Default)]
pub struct ChallengeRefresh {
    pub challenges: Vec<WeeklyChallenge>,
    /// Challenges that went from open to completed during this refresh.
    pub newly_completed: Vec<WeeklyChallenge>,
}

pub struct ChallengeService;

impl ChallengeService {
    /// Draws three or four distinct templates for `week`.
    pub fn generate_weekly_challenges<R>(week: IsoWeek, rng: &mut R) -> Vec<WeeklyChallenge>
    where
        R: RandomSource,
    {
        let mut pool: Vec<&'static ChallengeTemplate> = CHALLENGE_TEMPLATES.iter().collect();
        rng.shuffle(&mut pool);

        let spread = (MAX_WEEKLY_CHALLENGES - MIN_WEEKLY_CHALLENGES + 1) as f64;
        let extra = (rng.next_f64() * spread).floor() as usize;
        let count = (MIN_WEEKLY_CHALLENGES + extra).min(MAX_WEEKLY_CHALLENGES);

        let challenges: Vec<WeeklyChallenge> = pool
            .into_iter()
            .take(count)
            .map(|template| Self::instantiate(template, week))
            .collect();
        info!(week = %week, count = challenges.len(), "weekly challenges generated");
        challenges
    }

    /// Stamps a fresh, open challenge for `week` from `template`.
    pub fn instantiate(template: &ChallengeTemplate, week: IsoWeek) -> WeeklyChallenge {
        WeeklyChallenge {
            id: format!("{week}_{}", template.kind),
            week: week.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            difficulty: template.difficulty,
            xp_reward: template.xp_reward,
            is_completed: false,
            rewarded: false,
            progress: Progress::new(0.0, template.target),
            expires_at: week.end(),
            icon: template.icon.to_string(),
            color: template.color.to_string(),
        }
    }

    /// True when the set is empty or was generated for another week.
    pub fn should_renew_challenges(challenges: &[WeeklyChallenge], current: IsoWeek) -> bool {
        let current = current.to_string();
        challenges.is_empty() || challenges.iter().any(|c| c.week != current)
    }

    /// Keeps `challenges` when they belong to the week of `now`, otherwise
    /// replaces them with a new draw. The flag reports whether a draw happened.
    pub fn ensure_current<R>(
        challenges: &[WeeklyChallenge],
        now: NaiveDateTime,
        rng: &mut R,
    ) -> (Vec<WeeklyChallenge>, bool)
    where
        R: RandomSource,
    {
        let week = calendar::current_week(now);
        if Self::should_renew_challenges(challenges, week) {
            debug!(week = %week, stale = challenges.len(), "renewing weekly challenges");
            (Self::generate_weekly_challenges(week, rng), true)
        } else {
            (challenges.to_vec(), false)
        }
    }

    /// Recomputes progress and completion from transactions dated between
    /// Monday 00:00:00 of the current week and `now`. Challenges whose id does
    /// not name a known template come back unchanged.
    pub fn update_challenge_progress<L>(
        challenge: &WeeklyChallenge,
        _profile: &UserProfile,
        ledger: &L,
        now: NaiveDateTime,
    ) -> WeeklyChallenge
    where
        L: LedgerView + ?Sized,
    {
        let Some(kind) = challenge.kind() else {
            debug!(challenge = %challenge.id, "unknown challenge template; left unchanged");
            return challenge.clone();
        };
        let target = catalog::template(kind).target;
        let weekly = ledger.transactions_between(calendar::week_start(now), now);
        let weekly = weekly.iter().copied();

        let (current, total, completed) = match kind {
            ChallengeKind::Save200 => {
                let saved = ledger::net_savings(weekly).max(0.0);
                (saved, target, saved >= target)
            }
            ChallengeKind::Streak7 => {
                let days = ledger::active_days(weekly).len() as f64;
                (days, target, days >= target)
            }
            ChallengeKind::CategoryLimit => {
                let spent = ledger::category_total(weekly, LEISURE_CATEGORY);
                (spent, target, spent <= target)
            }
            ChallengeKind::Invest => {
                let invested = ledger::category_total(weekly, INVESTMENT_CATEGORY);
                (invested, target, invested >= target)
            }
            ChallengeKind::NoDebt => {
                let paid_debt = weekly
                    .filter(|txn| txn.is_expense())
                    .any(|txn: &Transaction| txn.in_category(DEBT_CATEGORY));
                let current = if paid_debt { 0.0 } else { 1.0 };
                (current, 1.0, !paid_debt)
            }
        };

        WeeklyChallenge {
            progress: Progress::new(current, total),
            is_completed: completed,
            ..challenge.clone()
        }
    }

    /// Recomputes every challenge and reports the ones completing for the first
    /// time this week. A challenge that drops out of completion and comes back
    /// is not reported again.
    pub fn refresh_challenges<L>(
        challenges: &[WeeklyChallenge],
        profile: &UserProfile,
        ledger: &L,
        now: NaiveDateTime,
    ) -> ChallengeRefresh
    where
        L: LedgerView + ?Sized,
    {
        let mut refresh = ChallengeRefresh::default();
        for challenge in challenges {
            let mut updated = Self::update_challenge_progress(challenge, profile, ledger, now);
            if updated.is_completed && !updated.rewarded {
                updated.rewarded = true;
                info!(
                    challenge = %updated.id,
                    xp_reward = updated.xp_reward,
                    "weekly challenge completed"
                );
                refresh.newly_completed.push(updated.clone());
            }
            refresh.challenges.push(updated);
        }
        refresh
    }
}
