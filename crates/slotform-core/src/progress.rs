//! XP and level arithmetic.
//!
//! One home for the leveling formula, shared by every hook that publishes
//! progress updates. Advancing from `level` costs `level * 100` XP; surplus
//! XP carries into the next level.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// XP counter with its derived level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    xp: u32,
    level: u32,
}

impl Progress {
    /// Fresh progress: level 1, no XP.
    #[must_use]
    pub fn new() -> Self {
        Self { xp: 0, level: 1 }
    }

    /// XP accumulated toward the next level.
    #[inline]
    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Current level (starts at 1).
    #[inline]
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// XP still required to reach the next level.
    #[must_use]
    pub fn xp_to_next(&self) -> u32 {
        Self::threshold(self.level) - self.xp
    }

    /// Award XP, carrying surplus across level thresholds.
    ///
    /// Returns the number of levels gained (0 for most awards).
    pub fn award(&mut self, amount: u32) -> u32 {
        self.xp += amount;
        let mut gained = 0;
        while self.xp >= Self::threshold(self.level) {
            self.xp -= Self::threshold(self.level);
            self.level += 1;
            gained += 1;
        }
        gained
    }

    /// Payload shape for `progress/*` publish commands.
    #[must_use]
    pub fn as_payload(&self) -> Value {
        json!({ "xp": self.xp, "level": self.level })
    }

    fn threshold(level: u32) -> u32 {
        level * 100
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
