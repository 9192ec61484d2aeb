//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gmb_writer::{BuilderError, BusinessInfo, GmbResult, Language, PostKind, ReviewKind, Theme, Tone};
use std::path::PathBuf;

/// gmb_writer - rate-limited listing content for Google My Business
#[derive(Parser, Debug)]
#[command(name = "gmb_writer")]
#[command(about = "Generate Google My Business posts, descriptions, review replies and Q&A", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profile file holding the API key, theme and rate limits
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Configuration file, replacing the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate listing content
    #[command(subcommand)]
    Generate(GenerateCommands),

    /// Show remaining quota and countdowns
    Status,

    /// Manage the Gemini API key
    #[command(subcommand)]
    Key(KeyCommands),

    /// Manage the theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),
}

/// Business facts shared by every generate command.
#[derive(Args, Debug, Clone)]
pub struct BusinessArgs {
    /// Business name (required)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Business category, e.g. "Bakery" (required)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Street address (required)
    #[arg(long, default_value = "")]
    pub address: String,

    /// Website URL
    #[arg(long, default_value = "")]
    pub website: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Opening hours
    #[arg(long, default_value = "")]
    pub hours: String,
}

impl BusinessArgs {
    /// Collect the flags into a [`BusinessInfo`].
    pub fn to_business_info(&self) -> GmbResult<BusinessInfo> {
        let business = BusinessInfo::builder()
            .name(self.name.as_str())
            .category(self.category.as_str())
            .address(self.address.as_str())
            .website(self.website.as_str())
            .phone(self.phone.as_str())
            .hours(self.hours.as_str())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        Ok(business)
    }
}

/// Tone, language and output format.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Writing tone
    #[arg(long, default_value_t = Tone::Friendly)]
    pub tone: Tone,

    /// Output language (pt-BR, en-US, es-ES)
    #[arg(long, default_value_t = Language::PtBr)]
    pub language: Language,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Content generation subcommands
#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Listing posts
    Post {
        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Post kind
        #[arg(long, default_value_t = PostKind::Update)]
        kind: PostKind,
    },

    /// Business description
    Description {
        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Feature to highlight (repeatable)
        #[arg(long = "highlight")]
        highlights: Vec<String>,
    },

    /// Reply to a customer review
    ReviewReply {
        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Text of the review
        #[arg(long)]
        review_text: String,

        /// Sentiment of the review
        #[arg(long, default_value_t = ReviewKind::General)]
        review_kind: ReviewKind,
    },

    /// Frequently asked questions
    Qa {
        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Topic to cover (repeatable)
        #[arg(long = "topic")]
        topics: Vec<String>,
    },
}

/// API key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Store an API key
    Set {
        /// The key; omit with --from-env
        #[arg(required_unless_present = "from_env", conflicts_with = "from_env")]
        key: Option<String>,

        /// Read the key from GEMINI_API_KEY
        #[arg(long)]
        from_env: bool,
    },

    /// Remove the stored key
    Clear,

    /// Show the stored key, masked
    Show,
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,

    /// Set the theme
    Set {
        /// light or dark
        theme: Theme,
    },

    /// Switch between light and dark
    Toggle,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
