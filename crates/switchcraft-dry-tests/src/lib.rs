// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Switchcraft crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`store`] - In-memory key-value store fake for testing without filesystem
//! - [`observer`] - Observer that records every notification it receives
//! - [`fixtures`] - Canned endpoints, catalogs and configs

pub mod fixtures;
pub mod observer;
pub mod store;

// Re-export commonly used items at crate root for convenience
pub use fixtures::{
    prod, seeded_store, staging, staging_and_production, three_tier_config, FIXTURE_KEY,
};
pub use observer::{Notification, RecordingObserver};
pub use store::InMemoryStore;
