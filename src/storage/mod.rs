pub mod json_backend;

use crate::{domain::ProgressState, errors::Result};

/// Persistence of the per-user overlays the engines produce.
pub trait ProgressStore: Send + Sync {
    /// Returns the stored state, or a fresh one when nothing was saved yet.
    fn load(&self) -> Result<ProgressState>;
    fn save(&self, state: &ProgressState) -> Result<()>;
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonStateStore};
