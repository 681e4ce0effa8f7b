//! Power-state notifications
//!
//! The timer never binds to a process-wide power broadcast directly. Anything
//! that can produce a stream of [`PowerEvent`]s implements [`PowerEventSource`]
//! and is handed to the timer at construction:
//!
//! - [`ManualPowerSource`]: in-process broadcaster, driven by tests and the CLI
//! - [`NullPowerSource`]: never emits; for timers that ignore power transitions
//!
//! An OS backend (logind `PrepareForSleep`, `WM_POWERBROADCAST`, ...) plugs in
//! the same way by forwarding into a [`ManualPowerSource`].

mod source;

pub use source::{ManualPowerSource, NullPowerSource, PowerEvent, PowerEventSource, PowerEvents};
