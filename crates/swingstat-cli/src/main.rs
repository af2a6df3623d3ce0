mod cli;
mod error;
mod output;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use swingstat_core::analyze_history;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;
use crate::error::CliError;
use crate::settings::RunSettings;

// A single-threaded runtime keeps the local-offset lookup for `--end` sound.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = RunSettings::from_cli(cli, settings::local_today())?;
    let adapter = settings.adapter();

    let report = analyze_history(&adapter, &settings.request, &settings.analysis).await?;
    output::render(&report, cli.format, cli.pretty)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {error}");
    }
}
