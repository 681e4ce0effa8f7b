//! Wakeable interval timer
//!
//! This module provides:
//! - **Timer handle**: [`WakeableTimer`], the public start/stop/subscribe API
//! - **Actor**: a single task that owns the state machine, the countdown and
//!   the subscriber list, so ticks, commands and power events never race
//! - **Power monitor**: suspend pauses a running timer and remembers what was
//!   left of the interval; resume fires once after exactly that remainder
//!
//! # State machine
//!
//! ```text
//!            start()                 Suspending
//!  Stopped ───────────▶ Running ─────────────────▶ Suspended
//!     ▲                  │  ▲                          │
//!     │     stop()       │  └──────── Resuming ────────┘
//!     ├──────────────────┘       (arm remaining time)   │
//!     └──────────────────────── stop() ─────────────────┘
//! ```
//!
//! The countdown is armed if and only if the state is `Running`.

mod actor;
mod error;
mod handle;
mod options;
mod state;
mod subscribers;


pub use error::TimerError;
pub use handle::WakeableTimer;
pub use options::TimerOptions;
pub use state::{PowerMode, TimerSnapshot, TimerState};
pub use subscribers::{Subscriber, SubscriberList};
