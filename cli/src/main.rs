use clap::{Parser, Subcommand};
use powertick_cli::CliContext;
use powertick_cli::commands;
use powertick_cli::logging;
use powertick_cli::readline;
use powertick_core::{AppConfig, AppConfigExt};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();

    let config = AppConfig::load();
    let settings = config.timer.clone();
    let ctx = CliContext::new(config).await?;

    if settings.auto_start {
        commands::start(&ctx, Some(settings.start_delay_ms)).await;
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "power-aware interval timer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start ticking (immediately, or after --delay milliseconds)
    Start {
        #[arg(short, long)]
        delay: Option<u64>,
    },
    Stop,
    /// Rearm the countdown to a full interval from now
    Reset,
    Interval {
        #[arg(short, long)]
        ms: u64,
    },
    /// Simulate a system suspend
    Suspend,
    /// Simulate a system resume
    Resume,
    Status,
    Config,
    Save,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "powertick".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Start { delay }) => commands::start(ctx, *delay).await,
        Some(Commands::Stop) => commands::stop(ctx).await,
        Some(Commands::Reset) => commands::reset(ctx).await,
        Some(Commands::Interval { ms }) => commands::set_interval(ctx, *ms).await,
        Some(Commands::Suspend) => commands::suspend(ctx),
        Some(Commands::Resume) => commands::resume(ctx),
        Some(Commands::Status) => commands::show_status(ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::Save) => commands::save_config(ctx).await,
        Some(Commands::Exit) => {
            commands::exit(ctx).await?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
