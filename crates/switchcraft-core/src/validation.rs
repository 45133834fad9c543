// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Custom endpoint entry: normalization, validation and text-field state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::endpoint::Endpoint;
use crate::error::SwitchcraftError;

/// Accepted custom endpoint shape: scheme, dotted or slashed word segments, optional port.
static ENDPOINT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((https|http)://)((\w|-)+)(([.]|[/])((\w|-)+))+(:[0-9]+)?$")
        .unwrap_or_else(|err| unreachable!("endpoint url pattern is valid: {err}"))
});

/// Prepend `https://` unless the text already names an http(s) scheme.
pub fn normalize_custom_url(text: &str) -> String {
    let text = text.trim();
    if text.contains("http://") || text.contains("https://") {
        text.to_owned()
    } else {
        format!("https://{text}")
    }
}

/// Whether `url` is an acceptable endpoint URL.
pub fn is_valid_endpoint_url(url: &str) -> bool {
    ENDPOINT_URL.is_match(url)
}

/// State of the custom-URL text field.
///
/// Edits are never rejected; the confirm action is enabled only while the
/// normalized text validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomEntry {
    text: String,
    confirm_enabled: bool,
}

impl CustomEntry {
    /// Start a field pre-filled with `text` (typically the current url).
    pub fn new(text: impl Into<String>) -> Self {
        let mut entry = Self::default();
        entry.edit(text);
        entry
    }

    /// Replace the field contents and re-evaluate the confirm action.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.confirm_enabled =
            !self.text.trim().is_empty() && is_valid_endpoint_url(&normalize_custom_url(&self.text));
    }

    /// Raw field contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the confirm action is currently enabled.
    pub fn is_confirm_enabled(&self) -> bool {
        self.confirm_enabled
    }

    /// Turn the field into a custom endpoint.
    pub fn confirm(&self) -> Result<Endpoint, SwitchcraftError> {
        if !self.confirm_enabled {
            return Err(SwitchcraftError::InvalidCustomUrl(self.text.clone()));
        }
        Ok(Endpoint::custom(normalize_custom_url(&self.text)))
    }
}
