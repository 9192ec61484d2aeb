//! Presentation theme preference.

use serde::{Deserialize, Serialize};

/// Light or dark presentation, persisted independently of everything else.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::Theme;
///
/// assert_eq!(Theme::default(), Theme::Light);
/// assert_eq!(Theme::Light.toggled(), Theme::Dark);
/// assert_eq!(Theme::Dark.to_string(), "dark");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
