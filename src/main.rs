use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use jobwatch::config::MonitorConfig;
use jobwatch::model::job::format_countdown;
use jobwatch::model::{Execution, JobSnapshot};
use jobwatch::provider::{HttpProvider, JobProvider};
use jobwatch::shutdown::shutdown_token;
use jobwatch::sync::Poller;
use jobwatch::view::MonitorState;

#[derive(Parser, Debug)]
#[command(name = "jobwatch")]
#[command(version)]
#[command(about = "Client-side monitor for remotely scheduled background jobs")]
#[command(propagate_version = true)]
struct Args {
    #[command(flatten)]
    client: ClientArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
struct ClientArgs {
    /// Provider address
    #[arg(long, short = 'a', default_value = "http://127.0.0.1:8090")]
    addr: String,

    /// Output format for one-shot commands
    #[arg(long, short = 'o', default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Poll the provider continuously and render the job-status board
    Watch {
        /// Milliseconds between poll ticks
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },

    /// List the current job snapshots once
    Jobs,

    /// List the execution history once
    Executions {
        /// Only show executions of this job
        #[arg(long)]
        job: Option<String>,
    },

    /// Request an out-of-band run of a job
    Trigger {
        /// The job name
        name: String,
    },

    /// Ask the provider to clear a job's error state
    ClearError {
        /// The job name
        name: String,
    },

    /// Print the provider's settings object
    Settings,
}

// =============================================================================
// Rendering
// =============================================================================

fn render_board(state: &MonitorState) {
    // Clear the terminal and repaint from the top.
    print!("\x1b[2J\x1b[H");

    let now = chrono::Utc::now().timestamp();
    println!("{:<28} {:<12} {:<12} {:<9} ERROR", "JOB", "STATE", "NEXT RUN", "PROGRESS");
    println!("{}", "-".repeat(78));

    for job in state.jobs() {
        let job_state = if state.job_is_executing(&job.name) {
            "executing"
        } else if job.running {
            "running"
        } else {
            "paused"
        };
        let next_run = if state.job_is_executing(&job.name) {
            "(0s)".to_string()
        } else {
            format_countdown(job.seconds_until_next(now))
        };
        let marker = if state.has_new_error(&job.name) {
            "! "
        } else if job.has_error() {
            "  "
        } else {
            ""
        };
        println!(
            "{:<28} {:<12} {:<12} {:<9} {}{}",
            job.name,
            job_state,
            next_run,
            format!("{:.0}%", job.progress_percent(now)),
            marker,
            truncate(&job.err, 24),
        );
    }

    println!();
    println!(
        "{} jobs, {} executions tracked",
        state.jobs().len(),
        state.executions().len()
    );
}

fn print_jobs_table(jobs: &[JobSnapshot]) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }
    let now = chrono::Utc::now().timestamp();
    println!("{:<28} {:<10} {:<10} {:<12} ERROR", "JOB", "STATE", "INTERVAL", "NEXT RUN");
    println!("{}", "-".repeat(78));
    for job in jobs {
        let job_state = if job.is_executing {
            "executing"
        } else if job.running {
            "running"
        } else {
            "paused"
        };
        println!(
            "{:<28} {:<10} {:<10} {:<12} {}",
            job.name,
            job_state,
            format!("{}s", job.interval),
            format_countdown(job.seconds_until_next(now)),
            truncate(&job.err, 24),
        );
    }
}

fn print_executions_table(executions: &[Execution]) {
    if executions.is_empty() {
        println!("No executions found.");
        return;
    }
    println!("{:<36} {:<24} {:<10} {:<20} DURATION", "ID", "JOB", "STATUS", "STARTED");
    println!("{}", "-".repeat(100));
    for exec in executions {
        let duration = match exec.duration_secs() {
            Some(secs) => format_countdown(secs),
            None => "-".to_string(),
        };
        println!(
            "{:<36} {:<24} {:<10} {:<20} {}",
            truncate(&exec.id, 36),
            truncate(&exec.job_name, 24),
            exec.status.to_string(),
            exec.start_time.format("%Y-%m-%d %H:%M:%S"),
            duration,
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

// =============================================================================
// Command handlers
// =============================================================================

async fn run_watch(
    provider: Arc<dyn JobProvider>,
    interval_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = MonitorConfig::default().with_poll_interval_ms(interval_ms);
    let state = Arc::new(RwLock::new(MonitorState::new(config.clone())));

    let shutdown = shutdown_token();
    let poller = Poller::new(provider, state.clone(), config.poll_interval());
    let poller_handle = tokio::spawn(poller.run(shutdown.clone()));

    // Repaint at the poll cadence; the poller publishes independently.
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(250)));
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                let state = state.read().await;
                render_board(&state);
            }
        }
    }

    poller_handle.await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let provider = Arc::new(HttpProvider::new(args.client.addr.clone()));

    match args.command {
        Commands::Watch { interval_ms } => {
            run_watch(provider, interval_ms).await?;
        }
        Commands::Jobs => {
            let mut jobs = provider.list_jobs().await?;
            jobs.sort_by(|a, b| a.name.cmp(&b.name));
            match args.client.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&jobs)?),
                OutputFormat::Table => print_jobs_table(&jobs),
            }
        }
        Commands::Executions { job } => {
            let mut executions = provider.list_executions().await?;
            if let Some(job) = job {
                executions.retain(|e| e.job_name == job);
            }
            executions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
            match args.client.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&executions)?),
                OutputFormat::Table => print_executions_table(&executions),
            }
        }
        Commands::Trigger { name } => {
            provider.trigger(&name).await?;
            println!("Triggered {}. Outcome shows up in the next poll.", name);
        }
        Commands::ClearError { name } => {
            provider.clear_error(&name).await?;
            println!("Cleared error state of {}.", name);
        }
        Commands::Settings => {
            let settings = provider.load_settings().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
