mod aggregate;
mod cli;
mod github;
mod link;
mod report;
mod types;
mod version;

use aggregate::AggregateOptions;
use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use github::{FetchError, ReleaseClient};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    let (org, repo) = cli::split_org_repo(&cli.org, cli.repo.as_deref()).map_err(|e| anyhow!(e))?;

    let client = ReleaseClient::new(cli.username.clone(), cli.token.clone())?;
    let options = AggregateOptions {
        include_prereleases: cli.prerelease,
        group: cli.group,
        match_mode: cli.match_mode,
    };

    tracing::info!("Collecting release downloads for {}/{}", org, repo);

    let aggregate = match client.collect_downloads(&org, &repo, &options).await {
        Ok(aggregate) => aggregate,
        Err(FetchError::Status { status, body }) => {
            eprintln!("Error: {} {}", status.as_u16(), body);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let report = aggregate.into_report();

    let mut stdout = io::stdout().lock();
    if cli.csv {
        report::write_csv(&mut stdout, &report)?;
    } else {
        report::write_plain(&mut stdout, &report)?;
    }
    stdout.flush()?;

    if cli.debug {
        report::write_matched_files(&mut io::stderr().lock(), &report)?;
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "warn"
    } else if cli.verbose == 1 {
        "info"
    } else {
        "debug"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}
