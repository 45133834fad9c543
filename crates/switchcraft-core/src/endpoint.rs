// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selectable endpoints and host-defined picker actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title given to endpoints entered through the custom-URL field.
pub const CUSTOM_ENDPOINT_TITLE: &str = "Custom URL";

/// A named URL the host application can target.
///
/// Equality compares `title` and `url` pairwise; two endpoints that only
/// share a display [`name`](Self::name) are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// Optional label shown instead of the URL.
    pub title: Option<String>,
    /// Target URL.
    pub url: String,
}

impl Endpoint {
    /// Create an endpoint from an optional title and a URL.
    pub fn new(title: Option<String>, url: impl Into<String>) -> Self {
        Self {
            title,
            url: url.into(),
        }
    }

    /// Create an endpoint with a display title.
    pub fn titled(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(Some(title.into()), url)
    }

    /// Create an endpoint displayed by its URL.
    pub fn untitled(url: impl Into<String>) -> Self {
        Self::new(None, url)
    }

    /// Create the endpoint produced by the custom-URL field.
    pub fn custom(url: impl Into<String>) -> Self {
        Self::titled(CUSTOM_ENDPOINT_TITLE, url)
    }

    /// User-facing name: the title if set, else the URL without its scheme.
    pub fn name(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.url.replace("https://", "").replace("http://", ""),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name(), self.url)
    }
}

/// Extra host-defined entry shown in the picker.
///
/// Tapping an action is reported to observers and never changes the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Label shown in the picker.
    pub title: String,
}

impl Action {
    /// Create an action with the given label.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
