//! Writing tones.

use serde::{Deserialize, Serialize};

/// Tone requested for the generated copy.
///
/// The prompt embeds the tone's lowercase name as-is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Warm and approachable
    #[default]
    Friendly,
    /// Neutral and businesslike
    Professional,
    /// Sales-focused
    Promotional,
    /// Humorous
    Funny,
    /// Short
    Brief,
    /// Descriptive
    Detailed,
    /// Emoji-heavy
    Emoji,
    /// Thankful (review replies)
    Grateful,
    /// Apologetic (review replies)
    Apologetic,
    /// Helpful (review replies)
    Helpful,
    /// Informative (Q&A)
    Informative,
    /// Confident (Q&A)
    Confident,
    /// Authoritative (descriptions)
    Authoritative,
    /// Persuasive (descriptions)
    Persuasive,
}
