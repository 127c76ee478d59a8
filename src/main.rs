use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use addiscreen::cli::{run_assessment, run_classifier};
use addiscreen::server::{join_http_server, spawn_http_server};
use addiscreen::{AppState, DatasetConfig, DatasetLoader, KeywordSentiment, LabeledDataset, ServerConfig};

/// Addiction-risk screening from questionnaire answers
#[derive(Parser, Debug)]
#[command(name = "addiscreen")]
#[command(about = "Addiction-risk screening by similarity to a labeled dataset", long_about = None)]
struct Args {
    /// Path to the labeled CSV dataset
    #[arg(
        short,
        long,
        env = "ADDISCREEN_DATASET",
        default_value = "student_addiction_dataset_train.csv",
        global = true
    )]
    dataset: PathBuf,

    /// Name of the label column (defaults to the last column)
    #[arg(long, env = "ADDISCREEN_LABEL_COLUMN", global = true)]
    label_column: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer every dataset question and get a prediction
    Assess,
    /// Classify text as positive or negative, one line at a time
    Classify,
    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "ADDISCREEN_HOST", default_value = "0.0.0.0")]
        host: String,

        /// HTTP API port
        #[arg(long, env = "ADDISCREEN_HTTP_PORT", default_value_t = 5000)]
        http_port: u16,
    },
}

fn load_dataset(args: &Args) -> anyhow::Result<LabeledDataset> {
    let loader = DatasetLoader::new(DatasetConfig {
        label_column: args.label_column.clone(),
    });
    loader
        .load_path(&args.dataset)
        .with_context(|| format!("failed to load dataset {:?}", args.dataset))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stderr keeps logs out of the interactive prompts on stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Assess => {
            let dataset = load_dataset(&args)?;
            tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                run_assessment(&dataset, stdin.lock(), std::io::stdout()).map(|_| ())
            })
            .await??;
        }
        Command::Classify => {
            let classified = tokio::task::spawn_blocking(|| {
                let stdin = std::io::stdin();
                run_classifier(&KeywordSentiment::default(), stdin.lock(), std::io::stdout())
            })
            .await??;
            info!("Classified {} texts", classified);
        }
        Command::Serve { ref host, http_port } => {
            info!("Starting addiscreen v{}", env!("CARGO_PKG_VERSION"));
            info!("Dataset: {:?}", args.dataset);

            let dataset = Arc::new(load_dataset(&args)?);
            let state = Arc::new(AppState::new(dataset));
            let config = ServerConfig {
                host: host.clone(),
                port: http_port,
            };

            let http_handle = spawn_http_server(state, config);

            info!("HTTP API: http://{}:{}/", host, http_port);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
                joined = tokio::task::spawn_blocking(move || join_http_server(http_handle)) => {
                    joined??;
                    info!("HTTP server stopped");
                }
            }

            info!("Shutting down...");
        }
    }

    Ok(())
}
