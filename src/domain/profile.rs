use serde::{Deserialize, Deserializer, Serialize};

/// The slice of a user's profile that drives progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Accumulated experience. Never decreases. Negative or non-numeric stored
    /// values load as 0.
    #[serde(default, deserialize_with = "lenient_xp")]
    pub xp: u64,
    /// Display-only level index, derived from `xp` by the level ladder.
    #[serde(default)]
    pub level: u32,
}

impl UserProfile {
    pub fn with_xp(xp: u64) -> Self {
        Self { xp, level: 0 }
    }

    /// Adds `amount` XP, saturating at `u64::MAX`.
    pub fn award_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_add(amount);
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawXp {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Other(serde::de::IgnoredAny),
}

fn lenient_xp<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawXp::deserialize(deserializer)? {
        RawXp::Unsigned(xp) => xp,
        RawXp::Signed(xp) => u64::try_from(xp).unwrap_or(0),
        RawXp::Float(xp) if xp.is_finite() && xp > 0.0 => xp as u64,
        RawXp::Float(_) | RawXp::Other(_) => 0,
    })
}
