#![doc(test(attr(deny(warnings))))]

//! Progression Core turns a stream of personal-finance transactions into
//! engagement state: daily streaks, catalog achievements, rotating weekly
//! challenges and an XP-driven educational level ladder.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use errors::{ProgressionError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Progression Core tracing initialized.");
    });
}
