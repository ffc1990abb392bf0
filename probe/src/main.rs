use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use endpoint_probe::{EndpointProbe, UreqTransport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "endpoint-probe", about = "Probe the backend's auth endpoints and classify the answers")]
struct Args {
    /// Base URL of the backend (e.g. http://10.0.2.2:8000)
    #[arg(long, env = "PROBE_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Per-request timeout in seconds; a call exceeding it counts as unreachable
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let transport = UreqTransport::new(Duration::from_secs(args.timeout_secs));
    let probe = EndpointProbe::new(&args.base_url);

    let rendered = probe.run(&transport).and_then(|report| {
        let text = match args.format {
            Format::Text => report.to_string(),
            Format::Json => report.to_json()?,
        };
        Ok((report.summary, text))
    });

    match rendered {
        Ok((summary, text)) => {
            println!("{text}");
            if summary.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "probe run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
