use clap::Parser;
use std::error::Error as _;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::debug;
use urlsync::cli::{Cli, EXIT_USAGE};
use urlsync::logging;
use urlsync::{Outcome, ProgressBarOpts, SyncerBuilder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) if !cli.help => cli,
        _ => {
            Cli::print_usage();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    logging::init_logging(cli.debug);
    debug!("{:?}", cli);

    let result = run(cli).await;

    match result {
        Ok(outcome) => {
            debug!("{}", outcome);
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {}", cause));
                source = cause.source();
            }
            eprintln!("urlsync error: {}", message);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> urlsync::Result<Outcome> {
    let progress = if std::io::stderr().is_terminal() {
        ProgressBarOpts::default()
    } else {
        ProgressBarOpts::hidden()
    };

    let request = cli.into_request()?;
    let syncer = SyncerBuilder::new().progress(progress).build()?;
    syncer.sync(&request).await
}
