use radonhal::types::EXIT_LAUNCH_FAILURE;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    // Usage and cancellation come back as outcomes; anything else means the
    // analyzer never ran to completion.
    match radonhal::cli::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_LAUNCH_FAILURE);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
