//! `nasa-apod`: print NASA's Astronomy Picture of the Day.
//!
//! ```text
//! nasa-apod [--api-key KEY] [QUERY...]    today's picture from api.nasa.gov
//! nasa-apod [--api-key KEY] --stdio       same, query text read from stdin
//! nasa-apod --proxy [YYYY-MM-DD]          a picture from the local proxy
//! ```

mod cli;

use std::process::ExitCode;

use apod_core::today_apod;
use clap::Parser;
use nasa_apod::{
    format_apod_record, ApiError, ApodConfig, NasaMcpClient, Transport, UreqTransport,
};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Exit codes:
/// - 0: success
/// - 1: usage or input validation error
/// - 2: runtime error (network, remote status, bad response)
#[derive(Debug, Clone, Copy)]
enum AppExitCode {
    Success = 0,
    UsageError = 1,
    RuntimeError = 2,
}

impl From<AppExitCode> for ExitCode {
    fn from(code: AppExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Today's picture as text; `--api-key` wins over the configured key.
fn run_today<T: Transport>(
    transport: &T,
    config: &ApodConfig,
    cli: &Cli,
    query: &str,
) -> Result<String, ApiError> {
    today_apod(transport, config, query, cli.api_key.as_deref())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                AppExitCode::UsageError.into()
            } else {
                AppExitCode::Success.into()
            };
        }
    };

    let config = ApodConfig::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&config.log_level))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    let result = match cli.proxy_date() {
        Some(date) => {
            let client = NasaMcpClient::from_config(&config);
            debug!(base_url = client.base_url(), "using proxy");
            client
                .get_apod(date)
                .map(|record| format_apod_record(&record))
        }
        None => {
            let query = match cli.query_text(std::io::stdin().lock()) {
                Ok(query) => query,
                Err(e) => {
                    error!("failed to read query from stdin: {e}");
                    eprintln!("failed to read query from stdin: {e}");
                    return AppExitCode::RuntimeError.into();
                }
            };
            run_today(&UreqTransport::new(), &config, &cli, &query)
        }
    };

    match result {
        Ok(text) => {
            println!("{text}");
            AppExitCode::Success.into()
        }
        Err(e @ ApiError::InvalidDate(_)) => {
            eprintln!("{e}");
            AppExitCode::UsageError.into()
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            AppExitCode::RuntimeError.into()
        }
    }
}
