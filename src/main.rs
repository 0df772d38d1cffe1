use pastebin::cli::{run, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs are opt-in via RUST_LOG and go to stderr; stdout carries only the
    // paste URL and a failure is reported once, by the eprintln below.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised");

    let cli = Cli::parse_args(std::env::args_os());
    tracing::info!("CLI arguments parsed, invoking run");
    match run(cli).await {
        Ok(url) => {
            tracing::info!("CLI completed successfully");
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pastebin: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
