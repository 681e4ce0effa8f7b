use std::time::Duration;

use powertick_types::TimerSettings;

use super::TimerError;

const DEFAULT_RESUME_FLOOR: Duration = Duration::from_millis(1);
const DEFAULT_COMMAND_BUFFER: usize = 32;

/// Construction parameters for a [`super::WakeableTimer`]
#[derive(Debug, Clone)]
pub struct TimerOptions {
    pub(crate) interval: Duration,
    pub(crate) resume_floor: Duration,
    pub(crate) command_buffer: usize,
}

impl TimerOptions {
    pub fn new(interval: Duration) -> Result<Self, TimerError> {
        if interval.is_zero() {
            return Err(TimerError::InvalidInterval);
        }

        Ok(Self {
            interval,
            resume_floor: DEFAULT_RESUME_FLOOR,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        })
    }

    /// Build options from persisted settings
    pub fn from_settings(settings: &TimerSettings) -> Result<Self, TimerError> {
        Ok(Self::new(Duration::from_millis(settings.interval_ms))?
            .resume_floor(Duration::from_millis(settings.resume_floor_ms)))
    }

    /// Lower bound on the remainder stored at suspend and armed on resume.
    /// A zero floor is raised to 1ms.
    pub fn resume_floor(mut self, floor: Duration) -> Self {
        self.resume_floor = floor.max(DEFAULT_RESUME_FLOOR);
        self
    }

    /// Capacity of the command channel between handle and actor
    pub fn command_buffer(mut self, capacity: usize) -> Self {
        self.command_buffer = capacity.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
