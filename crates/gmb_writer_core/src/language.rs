//! Output languages.

use serde::{Deserialize, Serialize};

/// Language the generated content is written in.
///
/// Parsed from and displayed as a BCP 47 tag.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::Language;
/// use std::str::FromStr;
///
/// let lang = Language::from_str("en-US").unwrap();
/// assert_eq!(lang, Language::EnUs);
/// assert_eq!(lang.label(), "English (US)");
/// assert_eq!(lang.to_string(), "en-US");
/// ```
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
pub enum Language {
    /// Brazilian Portuguese
    #[default]
    #[strum(serialize = "pt-BR")]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// American English
    #[strum(serialize = "en-US")]
    #[serde(rename = "en-US")]
    EnUs,
    /// Spanish
    #[strum(serialize = "es-ES")]
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    /// Human-readable label declared in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Language::PtBr => "Portuguese (Brazil)",
            Language::EnUs => "English (US)",
            Language::EsEs => "Spanish",
        }
    }

    /// BCP 47 tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    /// Shown when a live response contained nothing usable.
    pub fn empty_result_placeholder(&self) -> &'static str {
        match self {
            Language::PtBr => "Não foi possível gerar conteúdo. Por favor, tente novamente.",
            Language::EnUs => "Could not generate content. Please try again.",
            Language::EsEs => "No fue posible generar contenido. Por favor, inténtalo de nuevo.",
        }
    }
}
