// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for switcher operations.

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised while configuring or driving a switcher.
#[derive(Debug, Error)]
pub enum SwitchcraftError {
    /// The catalog has no endpoints, so no default can be established.
    #[error("endpoint catalog is empty; at least one endpoint is required")]
    EmptyCatalog,
    /// An endpoint or action index does not address an entry.
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries available.
        len: usize,
    },
    /// Custom entry was submitted while disabled in the config.
    #[error("custom endpoint entry is not enabled")]
    CustomEntryDisabled,
    /// Custom entry text does not form an acceptable endpoint URL.
    #[error("not a valid endpoint url: {0:?}")]
    InvalidCustomUrl(String),
    /// Persisting the selection failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
