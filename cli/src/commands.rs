use powertick_core::{AppConfigExt, PowerEvent, TimerState};
use std::io::Write;
use std::time::Duration;

use crate::CliContext;

pub async fn start(ctx: &CliContext, delay_ms: Option<u64>) {
    let timer = ctx.timer.lock().await;
    let state = match timer.snapshot().await {
        Ok(snapshot) => snapshot.state,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    if state != TimerState::Stopped {
        println!("Timer already {}", state);
        return;
    }

    let delay = Duration::from_millis(delay_ms.unwrap_or(0));
    match timer.start_with_delay(delay).await {
        Ok(()) if delay.is_zero() => println!("Timer started"),
        Ok(()) => println!("Timer started, first tick in {}ms", delay.as_millis()),
        Err(e) => println!("Error: {}", e),
    }
}

pub async fn stop(ctx: &CliContext) {
    match ctx.timer.lock().await.stop().await {
        Ok(()) => println!("Timer stopped"),
        Err(e) => println!("Error: {}", e),
    }
}

pub async fn reset(ctx: &CliContext) {
    match ctx.timer.lock().await.reset().await {
        Ok(()) => println!("Timer countdown reset"),
        Err(e) => println!("Error: {}", e),
    }
}

pub async fn set_interval(ctx: &CliContext, interval_ms: u64) {
    let interval = Duration::from_millis(interval_ms);
    if let Err(e) = ctx.timer.lock().await.set_interval(interval).await {
        println!("Update failed. {}", e);
        return;
    }

    ctx.config.write().await.timer.interval_ms = interval_ms;
    println!("Interval set to {}ms (applies from the next tick)", interval_ms);
}

pub fn suspend(ctx: &CliContext) {
    let listeners = ctx.power.notify(PowerEvent::Suspending);
    println!("Suspend broadcast to {} listener(s)", listeners);
}

pub fn resume(ctx: &CliContext) {
    let listeners = ctx.power.notify(PowerEvent::Resuming);
    println!("Resume broadcast to {} listener(s)", listeners);
}

pub async fn show_status(ctx: &CliContext) {
    let snapshot = match ctx.timer.lock().await.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    println!("{:<16} {}", "State", snapshot.state);
    println!("{:<16} {}", "Power mode", snapshot.power_mode);
    println!("{:<16} {}ms", "Interval", snapshot.interval.as_millis());
    match snapshot.pending {
        Some(pending) if snapshot.state == TimerState::Suspended => {
            println!("{:<16} {}ms (on resume)", "Remaining", pending.as_millis())
        }
        Some(pending) => println!("{:<16} {}ms", "Next tick in", pending.as_millis()),
        None => println!("{:<16} -", "Next tick in"),
    }
    match snapshot.last_executed {
        Some(last) => println!("{:<16} {}ms ago", "Last tick", last.elapsed().as_millis()),
        None => println!("{:<16} never", "Last tick"),
    }
    println!("{:<16} {}", "Ticks", ctx.tick_count());
    println!("{:<16} {}", "Subscribers", snapshot.subscribers);
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    let settings = &config.timer;

    match powertick_core::AppConfig::config_path() {
        Ok(path) => println!("Config file: {}", path.display()),
        Err(e) => println!("Config file: unavailable ({})", e),
    }
    println!("{}", "-".repeat(40));
    println!("{:<16} {}ms", "interval", settings.interval_ms);
    println!("{:<16} {}ms", "start delay", settings.start_delay_ms);
    println!("{:<16} {}ms", "resume floor", settings.resume_floor_ms);
    println!("{:<16} {}", "auto start", settings.auto_start);
}

pub async fn save_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    match config.save() {
        Ok(()) => println!("Configuration saved"),
        Err(e) => println!("Failed to save configuration: {}", e),
    }
}

pub async fn exit(ctx: &CliContext) -> Result<(), String> {
    ctx.shutdown().await;
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
