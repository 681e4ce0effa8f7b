//! Observable timer state

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// Lifecycle state of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Stopped,
    Running,
    /// Paused by a system suspend while otherwise running
    Suspended,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerState::Stopped => "stopped",
            TimerState::Running => "running",
            TimerState::Suspended => "suspended",
        };
        f.write_str(label)
    }
}

/// Last power transition the timer observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerMode {
    #[default]
    Resume,
    Suspend,
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerMode::Resume => f.write_str("resume"),
            PowerMode::Suspend => f.write_str("suspend"),
        }
    }
}

/// Point-in-time view of a timer, as seen by its actor
#[derive(Debug, Clone)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub power_mode: PowerMode,
    pub interval: Duration,
    /// When subscribers were last published to (None until the first tick)
    pub last_executed: Option<Instant>,
    /// Time until the next tick while running, or the stored remainder while
    /// suspended. None when stopped.
    pub pending: Option<Duration>,
    pub subscribers: usize,
}

impl TimerSnapshot {
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Running
    }
}
