// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canned endpoints and configs.

use switchcraft_core::{Config, Endpoint};

use crate::store::InMemoryStore;

/// Storage key used by the fixture configs.
pub const FIXTURE_KEY: &str = "switchcraftEndpoint";

/// `Staging <https://staging.example.com>`.
pub fn staging() -> Endpoint {
    Endpoint::titled("Staging", "https://staging.example.com")
}

/// `Prod <https://api.example.com>`.
pub fn prod() -> Endpoint {
    Endpoint::titled("Prod", "https://api.example.com")
}

/// Staging + production, production is the default.
pub fn staging_and_production() -> Config {
    Config::new(FIXTURE_KEY, vec![staging(), prod()]).with_default_index(1)
}

/// Dev, staging and production, dev is the default.
pub fn three_tier_config() -> Config {
    Config::new(
        FIXTURE_KEY,
        vec![
            Endpoint::titled("Dev", "https://dev.example.com"),
            staging(),
            prod(),
        ],
    )
}

/// Store already holding `endpoint` under [`FIXTURE_KEY`].
pub fn seeded_store(endpoint: &Endpoint) -> InMemoryStore {
    let store = InMemoryStore::new();
    store.seed_endpoint(FIXTURE_KEY, endpoint);
    store
}
