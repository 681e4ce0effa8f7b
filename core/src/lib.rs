pub mod context;
pub mod power;
pub mod timer;

// Re-exports for convenience
pub use context::{AppConfig, AppConfigExt, ConfigError, TimerSettings};
pub use power::{ManualPowerSource, NullPowerSource, PowerEvent, PowerEventSource, PowerEvents};
pub use timer::{
    PowerMode, Subscriber, SubscriberList, TimerError, TimerOptions, TimerSnapshot, TimerState,
    WakeableTimer,
};
