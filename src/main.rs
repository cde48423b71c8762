use std::process::ExitCode;

use feed_fetcher::cli::parse_args;
use feed_fetcher::{run, FeedError, FetchConfig};

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => {
            // --help / --version
            return match error.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => report(FeedError::Output(error)),
            };
        }
        Err(error) => return report(FeedError::from(error)),
    };

    let config = match FetchConfig::from_env() {
        Ok(config) => config,
        Err(error) => return report(error.into()),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => return report(FeedError::Runtime(error)),
    };

    let stdout = std::io::stdout();
    match runtime.block_on(run(&cli.url, &config, stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report(error: FeedError) -> ExitCode {
    tracing::debug!(?error, "exiting with failure");
    eprintln!("{error}");
    ExitCode::from(1)
}
