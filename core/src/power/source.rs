use tokio::sync::broadcast::{self, error::RecvError};

/// Default number of undelivered events a lagging receiver may fall behind by
const DEFAULT_CAPACITY: usize = 16;

/// A system power transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerEvent {
    /// The system is about to suspend
    Suspending,
    /// The system has resumed from suspend
    Resuming,
    /// Any status-only change (battery level, AC line, ...). Ignored by timers.
    Other(String),
}

/// Something that can be subscribed to for power transitions
pub trait PowerEventSource {
    /// Register a new listener. Dropping the returned stream unregisters it.
    fn subscribe(&self) -> PowerEvents;
}

/// A listener's stream of power events
#[derive(Debug)]
pub struct PowerEvents {
    rx: Option<broadcast::Receiver<PowerEvent>>,
}

impl PowerEvents {
    pub fn new(rx: broadcast::Receiver<PowerEvent>) -> Self {
        Self { rx: Some(rx) }
    }

    /// A stream that never yields
    pub fn closed() -> Self {
        Self { rx: None }
    }

    pub fn is_closed(&self) -> bool {
        self.rx.is_none()
    }

    /// Wait for the next event.
    ///
    /// Never resolves once the source has gone away, so it can sit in a
    /// `select!` next to other branches without special casing.
    pub async fn recv(&mut self) -> PowerEvent {
        loop {
            let Some(rx) = self.rx.as_mut() else {
                return std::future::pending().await;
            };

            match rx.recv().await {
                Ok(event) => return event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Power event listener lagged, events dropped");
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("Power event source closed");
                    self.rx = None;
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Manual Source
// ─────────────────────────────────────────────────────────────────────────────

/// In-process power event broadcaster.
///
/// Cloning yields another handle to the same broadcast, so one clone can be
/// handed to timers while another raises transitions.
#[derive(Debug, Clone)]
pub struct ManualPowerSource {
    tx: broadcast::Sender<PowerEvent>,
}

impl Default for ManualPowerSource {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ManualPowerSource {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Broadcast an event. Returns how many listeners received it.
    pub fn notify(&self, event: PowerEvent) -> usize {
        tracing::debug!(?event, "Broadcasting power event");
        self.tx.send(event).unwrap_or(0)
    }

    pub fn suspend(&self) -> usize {
        self.notify(PowerEvent::Suspending)
    }

    pub fn resume(&self) -> usize {
        self.notify(PowerEvent::Resuming)
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl PowerEventSource for ManualPowerSource {
    fn subscribe(&self) -> PowerEvents {
        PowerEvents::new(self.tx.subscribe())
    }
}

/// A source that never emits
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPowerSource;

impl PowerEventSource for NullPowerSource {
    fn subscribe(&self) -> PowerEvents {
        PowerEvents::closed()
    }
}
