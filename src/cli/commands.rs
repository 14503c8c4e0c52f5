use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::cli::output;
use crate::config::Config;
use crate::core::calendar::{end_of_day, IsoWeek};
use crate::core::services::{
    AchievementService, EvaluationOptions, LevelService, ProgressionDelta, ProgressionService,
    StreakService,
};
use crate::core::time::{Clock, FixedClock, SystemClock};
use crate::domain::{Displayable, ProgressState, StreakType, Transaction};
use crate::errors::Result;
use crate::storage::{load_ledger_from_path, JsonStateStore, ProgressStore};
use crate::utils::build_info;

/// Resolved environment shared by every subcommand.
pub struct CommandContext {
    pub base: PathBuf,
    pub config: Config,
}

impl CommandContext {
    pub fn state_store(&self, explicit: Option<&Path>) -> JsonStateStore {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.resolve_state_file(&self.base));
        JsonStateStore::new(path)
    }

    fn rng(&self) -> StdRng {
        match self.config.challenge_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub struct EvaluateArgs {
    pub ledger: PathBuf,
    pub state: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub dry_run: bool,
    pub apply_xp: bool,
    pub json: bool,
}

fn clock_for(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(day) => Box::new(FixedClock(day.and_time(end_of_day()))),
        None => Box::new(SystemClock),
    }
}

pub fn evaluate(context: &CommandContext, args: &EvaluateArgs) -> Result<()> {
    let ledger = load_ledger_from_path(&args.ledger)?;
    let store = context.state_store(args.state.as_deref());
    let state = store.load()?;
    let clock = clock_for(args.today);
    let mut rng = context.rng();

    debug!(
        transactions = ledger.len(),
        state = %store.path().display(),
        "evaluating progression"
    );
    let outcome = ProgressionService::evaluate(
        &state,
        &ledger,
        clock.as_ref(),
        &mut rng,
        EvaluationOptions::from(&context.config),
    );

    let next = if args.apply_xp {
        ProgressionService::apply_rewards(&outcome.state, &outcome.delta)
    } else {
        outcome.state
    };

    if !args.dry_run {
        store.save(&next)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.delta)?);
        return Ok(());
    }

    print_delta(&outcome.delta, &next, args.apply_xp);
    if args.dry_run {
        output::warning("Dry run: state not saved.");
    } else {
        output::info(format!("State saved to {}", store.path().display()));
    }
    Ok(())
}

fn print_delta(delta: &ProgressionDelta, state: &ProgressState, applied: bool) {
    output::section("Streak");
    let streak = &delta.streak;
    output::field("Days", streak.current_days);
    output::field("Longest", streak.longest_days);
    output::field("Multiplier", format!("{:.1}x", streak.multiplier));
    output::field("Flame", StreakService::flame_intensity(streak));
    output::field("Freezes", streak.freezes_available);
    if let Some(days) = StreakService::days_to_next_milestone(streak) {
        output::field("Next milestone in", format!("{days} day(s)"));
    }
    if delta.freeze_used {
        output::warning("A streak freeze was used to keep the streak alive.");
    }

    output::section("Achievements");
    if delta.newly_unlocked.is_empty() {
        output::info("No new achievements.");
    }
    for unlocked in &delta.newly_unlocked {
        match crate::catalog::achievement(&unlocked.id) {
            Some(achievement) => output::success(achievement.display_label()),
            None => output::success(&unlocked.id),
        }
    }

    output::section("Weekly challenges");
    if delta.challenges_renewed {
        output::info("New challenges for this week.");
    }
    for challenge in &state.challenges {
        if delta.newly_completed.iter().any(|done| done.id == challenge.id) {
            output::success(challenge.display_label());
        } else {
            output::info(challenge.display_label());
        }
    }

    output::section("Experience");
    output::field("Earned", format!("{} XP", delta.xp_recommended));
    if applied {
        output::field("Total", format!("{} XP", state.profile.xp));
    }
    if let Some(level) = LevelService::level_by_id(delta.level_after) {
        output::field("Level", level.display_label());
    }
    if delta.levelled_up() {
        output::success("Level up!");
    }
}

pub fn level(xp: u64) -> Result<()> {
    let level = LevelService::get_current_level(xp);
    output::section(level.display_label());
    output::field("Name", level.name);
    output::field("About", level.description);
    output::field("Concepts", level.concepts.join(", "));
    output::field("Unlocks", level.unlocks.join(", "));
    match (LevelService::get_next_level(level), LevelService::xp_to_next(xp)) {
        (Some(next), Some(missing)) => {
            output::field("Progress", LevelService::progress_to_next(xp));
            output::field("Next", format!("{} in {missing} XP", next.name));
        }
        _ => output::success("Top level reached."),
    }

    let content = LevelService::content_for(level.id);
    for item in content.articles() {
        output::info(format!("Article: {} ({} min)", item.title, item.minutes));
    }
    for item in content.videos() {
        output::info(format!("Video: {} ({} min)", item.title, item.minutes));
    }
    Ok(())
}

pub fn week(date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| SystemClock.today());
    let week = IsoWeek::from_date(date);
    output::section(&week);
    output::field("Date", date);
    output::field("Starts", week.monday());
    output::field("Ends", week.sunday());
    Ok(())
}

pub fn achievements(
    context: &CommandContext,
    ledger: Option<&Path>,
    state: Option<&Path>,
) -> Result<()> {
    let transactions: Vec<Transaction> = match ledger {
        Some(path) => load_ledger_from_path(path)?,
        None => Vec::new(),
    };
    let state = context.state_store(state).load()?;
    let now = SystemClock.now();
    let board =
        AchievementService::board(&state.profile, &transactions, &state.achievements, now);

    output::section("Achievements");
    for status in &board {
        let label = status.achievement.display_label();
        match (status.unlocked_at, status.progress) {
            (Some(at), _) => output::success(format!("{label} unlocked {}", at.date())),
            (None, Some(progress)) => output::info(format!("{label} {progress}")),
            (None, None) => output::info(format!("{label} locked")),
        }
    }
    let unlocked = board.iter().filter(|status| status.is_unlocked()).count();
    output::separator();
    output::field("Unlocked", format!("{unlocked}/{}", board.len()));

    if let Some(streak) = state.streak(StreakType::DailyRegistration) {
        output::field("Streak", format!("{} day(s)", streak.current_days));
    }
    Ok(())
}

pub fn version() -> Result<()> {
    let meta = build_info::current();
    output::section(format!("Progression Core {}", meta.version));
    output::field("Build hash", meta.git_hash);
    output::field("Built at", meta.timestamp);
    output::field("Target", meta.target);
    output::field("Profile", meta.profile);
    Ok(())
}
