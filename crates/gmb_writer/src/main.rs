//! gmb_writer CLI binary.
//!
//! Generates Google My Business listing content from the command line:
//! - Posts, descriptions, review replies and Q&A
//! - Rate-limit status
//! - API key and theme preferences

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    gmb_writer::telemetry::init_console_telemetry(cli.verbose)?;

    if !cli::run(cli).await? {
        std::process::exit(1);
    }
    Ok(())
}
