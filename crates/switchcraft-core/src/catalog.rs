// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered, non-empty set of selectable endpoints with a default entry.

use tracing::warn;

use crate::endpoint::Endpoint;
use crate::error::SwitchcraftError;

/// The configured, ordered set of selectable endpoints.
///
/// Invariants: never empty, and `default_index` always addresses an entry.
/// Entries are unique by position only; duplicates are allowed and lookups
/// return the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
    default_index: usize,
}

impl Catalog {
    /// Build a catalog.
    ///
    /// An empty list is a configuration error. An out-of-range
    /// `default_index` is replaced by 0 and logged.
    pub fn new(endpoints: Vec<Endpoint>, default_index: usize) -> Result<Self, SwitchcraftError> {
        if endpoints.is_empty() {
            return Err(SwitchcraftError::EmptyCatalog);
        }
        let default_index = if default_index < endpoints.len() {
            default_index
        } else {
            warn!(
                default_index,
                len = endpoints.len(),
                "default endpoint index out of range; using the first endpoint"
            );
            0
        };
        Ok(Self {
            endpoints,
            default_index,
        })
    }

    /// Effective default index (after clamping).
    pub fn default_index(&self) -> usize {
        self.default_index
    }

    /// The default endpoint.
    pub fn default_endpoint(&self) -> &Endpoint {
        &self.endpoints[self.default_index]
    }

    /// Number of endpoints (always at least one).
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Endpoint at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Endpoint> {
        self.endpoints.get(index)
    }

    /// All endpoints in display order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Iterate endpoints in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }

    /// First endpoint whose display name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name() == name)
    }

    /// First endpoint whose url equals `url`.
    pub fn find_by_url(&self, url: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.url == url)
    }

    /// Whether an entry equal to `endpoint` exists.
    pub fn contains(&self, endpoint: &Endpoint) -> bool {
        self.endpoints.contains(endpoint)
    }

    /// Position of the first entry equal to `endpoint`.
    pub fn position(&self, endpoint: &Endpoint) -> Option<usize> {
        self.endpoints.iter().position(|e| e == endpoint)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
