//! Command-line interface module.

mod commands;
mod context;
mod generate;
mod preferences;
mod status;

pub use commands::{Cli, Commands};

use gmb_writer::GmbResult;

/// Run the parsed command. `Ok(false)` means the command ran but did not
/// produce what was asked for.
pub async fn run(cli: Cli) -> GmbResult<bool> {
    let context = context::AppContext::open(cli.config.as_deref(), cli.profile.clone())?;

    match cli.command {
        Commands::Generate(cmd) => generate::handle_generate_command(&context, cmd).await,
        Commands::Status => status::show_status(&context).map(|_| true),
        Commands::Key(cmd) => preferences::handle_key_command(&context, cmd).map(|_| true),
        Commands::Theme(cmd) => preferences::handle_theme_command(&context, cmd).map(|_| true),
    }
}
