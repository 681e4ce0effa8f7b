//! Shared configuration types for powertick
//!
//! This crate contains serializable configuration types that are shared between
//! the timer library (powertick-core) and the interactive frontend (powertick-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Timer Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted settings for a wakeable interval timer.
///
/// All durations are stored in milliseconds so the config file stays readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Steady-state tick interval. Must be non-zero.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// One-shot delay before the first tick when auto-starting (0 = tick immediately)
    #[serde(default)]
    pub start_delay_ms: u64,

    /// Lower bound for the remaining time armed after a resume
    #[serde(default = "default_resume_floor_ms")]
    pub resume_floor_ms: u64,

    /// Start the timer as soon as the frontend launches
    #[serde(default)]
    pub auto_start: bool,
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_resume_floor_ms() -> u64 {
    1
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            start_delay_ms: 0,
            resume_floor_ms: default_resume_floor_ms(),
            auto_start: false,
        }
    }
}

impl TimerSettings {
    /// Returns true if the settings describe a usable timer
    pub fn is_valid(&self) -> bool {
        self.interval_ms > 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timer: TimerSettings,
}
