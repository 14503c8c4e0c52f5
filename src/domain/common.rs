//! Shared traits and value types for progression primitives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exposes the stable string key under which catalog entries are persisted.
pub trait CatalogKey {
    fn key(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Partial completion toward a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Progress {
    pub current: f64,
    pub total: f64,
}

impl Progress {
    pub fn new(current: f64, total: f64) -> Self {
        Self { current, total }
    }

    /// Builds a progress pair with `current` clamped into `[0, total]`.
    pub fn clamped(current: f64, total: f64) -> Self {
        let current = if current.is_finite() {
            current.clamp(0.0, total.max(0.0))
        } else {
            0.0
        };
        Self { current, total }
    }

    /// Completion ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total <= 0.0 {
            return 1.0;
        }
        (self.current / self.total).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}/{:.0}", self.current, self.total)
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
