//! Error types for timer operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("timer interval must be greater than zero")]
    InvalidInterval,

    #[error("timer has been disposed")]
    Disposed,
}
