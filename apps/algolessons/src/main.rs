//! # algolessons
//!
//! Browse algorithm lessons and quizzes from the command line.
//!
//! ```text
//! algolessons lessons                      # grouped lessons page
//! algolessons group lessons.json           # group a local payload
//! algolessons quizzes                      # list quizzes
//! algolessons quiz <id>                    # one quiz
//! algolessons save-progress progress.json  # POST progress (needs a token)
//! ```

use algolessons::cli::{
    CliError, client_config, cmd_group, cmd_lessons, cmd_quiz, cmd_quizzes, cmd_save_progress,
};
use algolessons_sdk::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algolessons")]
#[command(about = "Algorithm lessons and quizzes client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, global = true, env = "ALGOLESSONS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long, global = true, env = "ALGOLESSONS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch lessons and show them grouped by category
    Lessons,

    /// Group a lessons JSON file offline
    Group {
        /// File containing a JSON array of lessons
        file: PathBuf,
    },

    /// List quizzes
    Quizzes,

    /// Show one quiz
    Quiz {
        /// Quiz ID
        id: String,
    },

    /// Save quiz progress from a JSON file
    SaveProgress {
        /// File containing the progress record (must have `quizId`)
        file: PathBuf,

        /// Bearer token for the API
        #[arg(long, env = "ALGOLESSONS_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config = client_config(&cli.base_url, cli.timeout_secs);
    match cli.command {
        Commands::Lessons => cmd_lessons(&config, cli.json).await,
        Commands::Group { file } => cmd_group(&file, cli.json),
        Commands::Quizzes => cmd_quizzes(&config, cli.json).await,
        Commands::Quiz { id } => cmd_quiz(&config, &id, cli.json).await,
        Commands::SaveProgress { file, token } => {
            cmd_save_progress(&config, &file, token.as_deref()).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
