//! API key and theme handlers.

use super::commands::{KeyCommands, ThemeCommands};
use super::context::AppContext;
use gmb_writer::{ConfigError, GmbResult};

const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Handle `key` subcommands.
pub fn handle_key_command(context: &AppContext, cmd: KeyCommands) -> GmbResult<()> {
    match cmd {
        KeyCommands::Set { key, from_env } => {
            let key = match (key, from_env) {
                (Some(key), _) => key,
                (None, _) => std::env::var(API_KEY_ENV).map_err(|e| {
                    ConfigError::new(format!("{} not set: {}", API_KEY_ENV, e))
                })?,
            };
            context.profile.set_api_key(&key)?;
            if context.profile.has_api_key()? {
                println!("API key saved.");
            } else {
                println!("Blank key given, API key cleared.");
            }
        }
        KeyCommands::Clear => {
            context.profile.clear_api_key()?;
            println!("API key cleared.");
        }
        KeyCommands::Show => match context.profile.api_key()? {
            Some(key) => println!("{}", mask_key(&key)),
            None => println!("No API key set."),
        },
    }
    Ok(())
}

/// Handle `theme` subcommands.
pub fn handle_theme_command(context: &AppContext, cmd: ThemeCommands) -> GmbResult<()> {
    let theme = match cmd {
        ThemeCommands::Show => context.profile.theme()?,
        ThemeCommands::Set { theme } => {
            context.profile.set_theme(theme)?;
            theme
        }
        ThemeCommands::Toggle => context.profile.toggle_theme()?,
    };
    println!("{}", theme);
    Ok(())
}

/// Keep the first and last four characters of long keys.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

#[cfg(test)]
mod tests {
    use super::mask_key;

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_key("abc"), "***");
    }

    #[test]
    fn long_keys_keep_edges() {
        assert_eq!(mask_key("AIzaSyExample1234"), "AIza*********1234");
    }
}
