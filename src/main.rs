use std::path::PathBuf;
use std::process::ExitCode;

use cfjail::{Source, SubmissionScraper, config::ScrapingConfig, requests::RequestClient};
use clap::Parser;
use dotenv::dotenv;

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::error;

/// Scrape a Codeforces submission page and optionally keep its code.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Saved HTML file or submission URL. Defaults to $SUBMISSION_URL.
    source: Option<String>,

    /// Write the code under <ROOT>/submissions/contests/...
    #[arg(long)]
    save: bool,

    /// Output root, overrides $CFJAIL_ROOT.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Print the record as JSON.
    #[arg(long)]
    json: bool,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let scraping_config = ScrapingConfig::new()?;
    let request_client = RequestClient::new(&scraping_config.user_agent)?;

    let source = Source::from_arg(
        args.source
            .as_deref()
            .unwrap_or(&scraping_config.submission_url),
    );
    let mut scraper = SubmissionScraper::new(source);
    if args.save {
        scraper = scraper.saving_to(args.root.unwrap_or(scraping_config.root));
    }

    let submission = scraper.scrape(&request_client).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
    } else {
        println!("{:#?}", submission);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
