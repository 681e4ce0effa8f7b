use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::actor::{Reply, TimerActor, TimerCommand};
use super::{Subscriber, TimerError, TimerOptions, TimerSnapshot};
use crate::power::PowerEventSource;

/// Handle to a power-aware interval timer.
///
/// Each call is forwarded to the timer's actor task and returns once the
/// actor has applied it. In particular `start()` returns only after the
/// immediate tick's subscribers have run.
///
/// Must be created inside a tokio runtime. Release it with [`dispose`];
/// dropping an undisposed timer aborts the actor and logs a warning.
///
/// [`dispose`]: WakeableTimer::dispose
#[derive(Debug)]
pub struct WakeableTimer {
    tx: mpsc::Sender<TimerCommand>,
    task: Option<JoinHandle<()>>,
}

impl WakeableTimer {
    /// Create a stopped timer listening to `power` for suspend/resume
    pub fn new(options: TimerOptions, power: &impl PowerEventSource) -> Self {
        let (tx, rx) = mpsc::channel(options.command_buffer);
        let actor = TimerActor::new(&options);
        let task = tokio::spawn(actor.run(rx, power.subscribe()));

        Self {
            tx,
            task: Some(task),
        }
    }

    /// Start ticking now. Subscribers run once before this returns.
    pub async fn start(&self) -> Result<(), TimerError> {
        self.start_with_delay(Duration::ZERO).await
    }

    /// Start ticking, with the first tick after `delay` instead of now.
    /// No-op unless stopped.
    pub async fn start_with_delay(&self, delay: Duration) -> Result<(), TimerError> {
        self.request(|reply| TimerCommand::Start { delay, reply })
            .await
    }

    /// Disarm the timer. No-op if already stopped.
    pub async fn stop(&self) -> Result<(), TimerError> {
        self.request(|reply| TimerCommand::Stop { reply }).await
    }

    /// Rearm the countdown to a full interval from now, keeping the state
    pub async fn reset(&self) -> Result<(), TimerError> {
        self.request(|reply| TimerCommand::Reset { reply }).await
    }

    /// Append a tick callback. Callbacks run in registration order.
    pub async fn subscribe<F>(&self, callback: F) -> Result<(), TimerError>
    where
        F: FnMut() + Send + 'static,
    {
        let callback: Subscriber = Box::new(callback);
        self.request(|reply| TimerCommand::Subscribe { callback, reply })
            .await
    }

    pub async fn interval(&self) -> Result<Duration, TimerError> {
        Ok(self.snapshot().await?.interval)
    }

    /// Change the interval. An already armed countdown keeps its deadline;
    /// the new value applies from the next rearm.
    pub async fn set_interval(&self, interval: Duration) -> Result<(), TimerError> {
        if interval.is_zero() {
            return Err(TimerError::InvalidInterval);
        }
        self.request(|reply| TimerCommand::SetInterval { interval, reply })
            .await
    }

    pub async fn snapshot(&self) -> Result<TimerSnapshot, TimerError> {
        self.request(|reply| TimerCommand::Snapshot { reply }).await
    }

    /// Stop the actor and unregister from the power source. Idempotent.
    pub async fn dispose(&mut self) -> Result<(), TimerError> {
        if self.task.is_none() {
            return Ok(());
        }

        // The actor may already be gone; either way it's done after this
        let _ = self
            .request(|reply| TimerCommand::Dispose { reply })
            .await;
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "Timer actor ended abnormally");
        }
        Ok(())
    }

    pub fn is_disposed(&self) -> bool {
        self.task.is_none()
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> TimerCommand,
    ) -> Result<T, TimerError> {
        if self.task.is_none() {
            return Err(TimerError::Disposed);
        }

        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| TimerError::Disposed)?;
        rx.await.map_err(|_| TimerError::Disposed)
    }
}

impl Drop for WakeableTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::warn!("WakeableTimer dropped without dispose()");
            task.abort();
        }
    }
}
