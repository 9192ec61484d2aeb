//! Business facts collected from the user.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Facts about the business a piece of content is written for.
///
/// `name`, `category` and `address` must be filled in before generation is
/// allowed; the remaining fields are optional and default to empty.
///
/// # Examples
///
/// ```
/// use gmb_writer_core::BusinessInfo;
///
/// let info = BusinessInfo::builder()
///     .name("Mercadinho Bela Vista")
///     .category("Supermarket")
///     .address("Rua das Flores, 123")
///     .build()
///     .unwrap();
///
/// assert!(info.missing_required_fields().is_empty());
/// assert_eq!(info.website(), "");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters,
)]
#[builder(setter(into), default)]
pub struct BusinessInfo {
    /// Business name as shown on the listing
    name: String,
    /// Business category (e.g. "Bakery")
    category: String,
    /// Website URL
    website: String,
    /// Street address
    address: String,
    /// Phone number
    phone: String,
    /// Operating hours, free-form
    hours: String,
}

impl BusinessInfo {
    /// Creates a new builder for `BusinessInfo`.
    pub fn builder() -> BusinessInfoBuilder {
        BusinessInfoBuilder::default()
    }

    /// Names of required fields that are blank.
    ///
    /// Whitespace-only values count as blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Whether every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_required_fields().is_empty()
    }
}
