mod config;
mod error;

pub use config::{APP_NAME, AppConfig, AppConfigExt, CONFIG_NAME, TimerSettings};
pub use error::ConfigError;
