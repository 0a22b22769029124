use clap::Parser;
use crossword_import::cli::{describe_failure, run, Cli};

const LOG_ENV: &str = "CROSSWORD_IMPORT_LOG";

#[tokio::main]
async fn main() {
    // Load environment
    dotenv::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("[WARN] {e:#}");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    tracing::info!("CLI arguments parsed, invoking run");

    match run(cli).await {
        Ok(outcome) => tracing::info!(?outcome, "CLI completed successfully"),
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            eprintln!("[ERROR] {}", describe_failure(&e));
            std::process::exit(1);
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
