use powertick_core::{AppConfig, ManualPowerSource, TimerOptions, WakeableTimer};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the timer and power source.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub timer: Arc<Mutex<WakeableTimer>>,
    /// Stands in for the OS power broadcast; driven by `suspend`/`resume`
    pub power: ManualPowerSource,
    pub ticks: Arc<AtomicU64>,
}

impl CliContext {
    /// Build a stopped timer from config and attach the tick printer
    pub async fn new(config: AppConfig) -> Result<Self, String> {
        let options = TimerOptions::from_settings(&config.timer).map_err(|e| e.to_string())?;
        let power = ManualPowerSource::default();
        let timer = WakeableTimer::new(options, &power);

        let ticks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&ticks);
        timer
            .subscribe(move || {
                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                println!(
                    "[{}] tick #{}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    count
                );
            })
            .await
            .map_err(|e| e.to_string())?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            timer: Arc::new(Mutex::new(timer)),
            power,
            ticks,
        })
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Dispose the timer. Safe to call more than once.
    pub async fn shutdown(&self) {
        if let Err(e) = self.timer.lock().await.dispose().await {
            tracing::warn!(error = %e, "Failed to dispose timer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;

    #[tokio::test(start_paused = true)]
    async fn test_start_counts_immediate_tick() {
        let ctx = CliContext::new(AppConfig::default()).await.unwrap();
        assert_eq!(ctx.tick_count(), 0);

        commands::start(&ctx, None).await;
        assert_eq!(ctx.tick_count(), 1);

        ctx.shutdown().await;
        ctx.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_command_updates_config() {
        let ctx = CliContext::new(AppConfig::default()).await.unwrap();

        commands::set_interval(&ctx, 250).await;
        assert_eq!(ctx.config.read().await.timer.interval_ms, 250);

        // Rejected values leave the config alone
        commands::set_interval(&ctx, 0).await;
        assert_eq!(ctx.config.read().await.timer.interval_ms, 250);

        ctx.shutdown().await;
    }
}
