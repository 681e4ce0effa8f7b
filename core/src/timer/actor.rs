//! Timer actor
//!
//! Owns every piece of mutable timer state. The handle talks to it over a
//! command channel; power events arrive on their own stream; the countdown is
//! a single optional deadline. All three are multiplexed in one `select!`
//! loop, so transitions are applied one at a time.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};

use super::options::TimerOptions;
use super::state::{PowerMode, TimerSnapshot, TimerState};
use super::subscribers::{Subscriber, SubscriberList};
use crate::power::{PowerEvent, PowerEvents};

pub(crate) type Reply<T> = oneshot::Sender<T>;

/// Requests from a [`super::WakeableTimer`] handle
pub(crate) enum TimerCommand {
    Start { delay: Duration, reply: Reply<()> },
    Stop { reply: Reply<()> },
    Reset { reply: Reply<()> },
    SetInterval { interval: Duration, reply: Reply<()> },
    Subscribe { callback: Subscriber, reply: Reply<()> },
    Snapshot { reply: Reply<TimerSnapshot> },
    Dispose { reply: Reply<()> },
}

pub(crate) struct TimerActor {
    /// Canonical steady-state interval
    interval: Duration,

    /// Period the countdown was last armed with. Differs from `interval`
    /// after a delayed start, a resume, or an interval change.
    period: Duration,

    /// When the armed countdown fires. None unless running, or when the
    /// period is too large to schedule.
    deadline: Option<Instant>,

    last_executed: Option<Instant>,

    /// Time left of the interval when the system suspended
    remaining: Option<Duration>,

    state: TimerState,
    power_mode: PowerMode,
    resume_floor: Duration,
    subscribers: SubscriberList,
}

impl TimerActor {
    pub(crate) fn new(options: &TimerOptions) -> Self {
        Self {
            interval: options.interval,
            period: options.interval,
            deadline: None,
            last_executed: None,
            remaining: None,
            state: TimerState::Stopped,
            power_mode: PowerMode::Resume,
            resume_floor: options.resume_floor,
            subscribers: SubscriberList::new(),
        }
    }

    pub(crate) async fn run(
        mut self,
        mut commands: mpsc::Receiver<TimerCommand>,
        mut power: PowerEvents,
    ) {
        loop {
            let deadline = self.deadline;

            tokio::select! {
                biased;

                event = power.recv() => self.handle_power_event(event),

                command = commands.recv() => match command {
                    Some(command) => {
                        if self.handle_command(command).is_break() {
                            break;
                        }
                    }
                    // Every handle is gone
                    None => break,
                },

                _ = wait_for(deadline) => self.publish(),
            }
        }

        tracing::debug!(state = %self.state, "Timer actor stopped");
    }

    fn handle_command(&mut self, command: TimerCommand) -> ControlFlow<()> {
        match command {
            TimerCommand::Start { delay, reply } => {
                self.start(delay);
                let _ = reply.send(());
            }
            TimerCommand::Stop { reply } => {
                self.stop();
                let _ = reply.send(());
            }
            TimerCommand::Reset { reply } => {
                self.reset();
                let _ = reply.send(());
            }
            TimerCommand::SetInterval { interval, reply } => {
                tracing::debug!(?interval, "Timer interval changed");
                self.interval = interval;
                let _ = reply.send(());
            }
            TimerCommand::Subscribe { callback, reply } => {
                self.subscribers.push(callback);
                let _ = reply.send(());
            }
            TimerCommand::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
            TimerCommand::Dispose { reply } => {
                let _ = reply.send(());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    fn start(&mut self, delay: Duration) {
        if self.state != TimerState::Stopped {
            return;
        }

        self.state = TimerState::Running;
        self.last_executed = None;
        self.remaining = None;

        if delay.is_zero() {
            tracing::debug!(interval = ?self.interval, "Timer started");
            self.period = self.interval;
            self.publish();
        } else {
            tracing::debug!(?delay, interval = ?self.interval, "Timer started with delay");
            self.arm(delay, Instant::now());
        }
    }

    fn stop(&mut self) {
        if self.state == TimerState::Stopped {
            return;
        }

        tracing::debug!(from = %self.state, "Timer stopped");
        self.state = TimerState::Stopped;
        self.deadline = None;
        self.remaining = None;
    }

    fn reset(&mut self) {
        self.period = self.interval;
        if self.state == TimerState::Running {
            self.deadline = Instant::now().checked_add(self.interval);
        }
    }

    /// A period too large to represent as an instant never fires
    fn arm(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.deadline = now.checked_add(period);
    }

    /// One tick: record it, fall back to the canonical interval, then run
    /// every subscriber in order.
    fn publish(&mut self) {
        let now = Instant::now();
        self.last_executed = Some(now);

        if self.period != self.interval {
            tracing::debug!(from = ?self.period, to = ?self.interval, "Rearming to interval");
        }
        self.arm(self.interval, now);

        if let Err(index) = self.subscribers.publish() {
            tracing::error!(
                subscriber = index,
                skipped = self.subscribers.len() - index - 1,
                "Timer subscriber panicked, remaining subscribers skipped for this tick"
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Power Monitor
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_power_event(&mut self, event: PowerEvent) {
        match event {
            PowerEvent::Suspending => {
                self.power_mode = PowerMode::Suspend;
                if self.state == TimerState::Running {
                    self.suspend(Instant::now());
                }
            }
            PowerEvent::Resuming => {
                self.power_mode = PowerMode::Resume;
                if self.state == TimerState::Suspended {
                    self.resume(Instant::now());
                }
            }
            PowerEvent::Other(status) => {
                tracing::trace!(%status, "Ignoring power status change");
            }
        }
    }

    fn suspend(&mut self, now: Instant) {
        let remaining = match (self.last_executed, self.deadline) {
            (Some(last), _) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            // First tick of a delayed start is still pending
            (None, Some(deadline)) => deadline.saturating_duration_since(now),
            (None, None) => self.interval,
        };
        let remaining = remaining.max(self.resume_floor);

        tracing::debug!(?remaining, "Timer suspended");
        self.state = TimerState::Suspended;
        self.deadline = None;
        self.remaining = Some(remaining);
    }

    fn resume(&mut self, now: Instant) {
        let remaining = self.remaining.take().unwrap_or(self.resume_floor);

        tracing::debug!(?remaining, "Timer resumed");
        self.state = TimerState::Running;
        self.arm(remaining, now);
    }

    fn snapshot(&self) -> TimerSnapshot {
        let pending = match self.state {
            TimerState::Running => self
                .deadline
                .map(|deadline| deadline.saturating_duration_since(Instant::now())),
            TimerState::Suspended => self.remaining,
            TimerState::Stopped => None,
        };

        TimerSnapshot {
            state: self.state,
            power_mode: self.power_mode,
            interval: self.interval,
            last_executed: self.last_executed,
            pending,
            subscribers: self.subscribers.len(),
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
