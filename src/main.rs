//! squad CLI - Squonk2 admin dashboard

use clap::{Parser, Subcommand};
use colored::Colorize;

use squad::environment::Environment;
use squad::error::{FixSuggestion, SquadError};
use squad::topic::Topic;

#[derive(Parser)]
#[command(name = "squad")]
#[command(about = "Terminal dashboard for a Squonk2 Account Server / Data Manager pair")]
#[command(version)]
struct Cli {
    /// Refresh period in seconds (overrides SQUAD_REFRESH_SECONDS)
    #[arg(short, long)]
    interval: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported topics and their key bindings
    Topics,
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Some(Commands::Topics) = cli.command {
        list_topics();
        return;
    }

    if let Err(e) = run_dashboard(cli.interval).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e
            .downcast_ref::<SquadError>()
            .and_then(FixSuggestion::fix_suggestion)
        {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

async fn run_dashboard(interval: Option<u64>) -> anyhow::Result<()> {
    let mut environment = Environment::from_env()?;
    if let Some(secs) = interval {
        anyhow::ensure!(secs > 0, "--interval must be at least 1 second");
        environment = environment.with_refresh_period(std::time::Duration::from_secs(secs));
    }

    init_tracing(&environment)?;

    squad::tui::run(environment).await
}

/// The TUI owns the terminal, so logs go to SQUAD_LOGFILE when set and
/// nowhere otherwise; writing to stdout or stderr would corrupt the
/// display.
fn init_tracing(environment: &Environment) -> Result<(), SquadError> {
    let Some(path) = environment.logfile() else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn list_topics() {
    println!("{}", "Supported topics".bold());
    for topic in Topic::ALL {
        println!(
            "  {}  {:<26} {}",
            format!("[{}]", topic.key()).cyan(),
            topic.name(),
            topic.service().to_string().dimmed()
        );
    }
}
