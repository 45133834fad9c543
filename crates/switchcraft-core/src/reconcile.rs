// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Resolve a persisted selection against a freshly installed catalog.
//!
//! Catalogs change over an app's lifetime: URLs get fixed and endpoints get
//! renamed. A prior selection that still identifies a catalog entry by name or
//! by url follows that entry; one that matches nothing falls back to the
//! catalog default. Rules are evaluated in order and the first match wins:
//!
//! 1. no prior selection: [`Reconciliation::Initialized`] with the default;
//! 2. an entry with the same display name but another url:
//!    [`Reconciliation::UrlMigrated`];
//! 3. an entry with the same url but another display name:
//!    [`Reconciliation::Renamed`];
//! 4. an entry equal to the prior selection: [`Reconciliation::Unchanged`];
//! 5. no entry shares the name or the url: [`Reconciliation::Reset`];
//! 6. otherwise an entry shares both name and url but spells the title
//!    differently (`None` vs. the display text): [`Reconciliation::Renamed`].
//!
//! [`ReconcilePolicy::UrlFirst`] swaps rules 2 and 3.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::endpoint::Endpoint;

/// Precedence between name matching and url matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcilePolicy {
    /// Follow a renamed-url entry before a renamed-title entry.
    #[default]
    NameFirst,
    /// Follow a renamed-title entry before a renamed-url entry.
    UrlFirst,
}

/// Outcome of reconciling a prior selection with a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing was persisted; the default endpoint becomes the selection.
    Initialized(Endpoint),
    /// Same logical endpoint, its url changed.
    UrlMigrated(Endpoint),
    /// Same logical endpoint, its title changed.
    Renamed(Endpoint),
    /// The prior selection is gone from the catalog; back to the default.
    Reset(Endpoint),
    /// The prior selection is still a catalog entry.
    Unchanged,
}

impl Reconciliation {
    /// The endpoint to persist, or `None` when the selection stays as is.
    pub fn selection(&self) -> Option<&Endpoint> {
        match self {
            Self::Initialized(e) | Self::UrlMigrated(e) | Self::Renamed(e) | Self::Reset(e) => {
                Some(e)
            }
            Self::Unchanged => None,
        }
    }

    /// Consume the outcome, returning the endpoint to persist.
    pub fn into_selection(self) -> Option<Endpoint> {
        match self {
            Self::Initialized(e) | Self::UrlMigrated(e) | Self::Renamed(e) | Self::Reset(e) => {
                Some(e)
            }
            Self::Unchanged => None,
        }
    }

    /// Whether the selection must be rewritten (and observers notified).
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Decide the selection for `catalog` given the previously persisted `prior`.
pub fn reconcile(
    catalog: &Catalog,
    prior: Option<&Endpoint>,
    policy: ReconcilePolicy,
) -> Reconciliation {
    let outcome = decide(catalog, prior, policy);
    debug!(?outcome, ?policy, "reconciled endpoint selection");
    outcome
}

fn decide(catalog: &Catalog, prior: Option<&Endpoint>, policy: ReconcilePolicy) -> Reconciliation {
    let Some(prior) = prior else {
        return Reconciliation::Initialized(catalog.default_endpoint().clone());
    };

    let prior_name = prior.name();
    let by_name = catalog.find_by_name(&prior_name);
    let by_url = catalog.find_by_url(&prior.url);

    let url_migration = by_name
        .filter(|e| e.url != prior.url)
        .map(|e| Reconciliation::UrlMigrated(e.clone()));
    let rename = by_url
        .filter(|e| e.name() != prior_name)
        .map(|e| Reconciliation::Renamed(e.clone()));

    let followed = match policy {
        ReconcilePolicy::NameFirst => url_migration.or(rename),
        ReconcilePolicy::UrlFirst => rename.or(url_migration),
    };
    if let Some(outcome) = followed {
        return outcome;
    }

    if catalog.contains(prior) {
        return Reconciliation::Unchanged;
    }

    // Any surviving match agrees on both name and url.
    match by_name.or(by_url) {
        Some(entry) => Reconciliation::Renamed(entry.clone()),
        None => Reconciliation::Reset(catalog.default_endpoint().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, &str)], default_index: usize) -> Catalog {
        let endpoints = entries
            .iter()
            .map(|(t, u)| Endpoint::titled(*t, *u))
            .collect();
        Catalog::new(endpoints, default_index).unwrap()
    }

    #[test]
    fn no_prior_selects_default() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("Prod", "https://x.com")], 1);
        assert_eq!(
            reconcile(&c, None, ReconcilePolicy::NameFirst),
            Reconciliation::Initialized(Endpoint::titled("Prod", "https://x.com"))
        );
    }

    #[test]
    fn same_name_new_url_migrates() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("Prod", "https://new.example.com")], 0);
        let prior = Endpoint::titled("Prod", "https://old.example.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::UrlMigrated(Endpoint::titled("Prod", "https://new.example.com"))
        );
    }

    #[test]
    fn same_url_new_name_follows_rename() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("B", "https://x.com")], 0);
        let prior = Endpoint::titled("A", "https://x.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::Renamed(Endpoint::titled("B", "https://x.com"))
        );
    }

    #[test]
    fn vanished_selection_resets_to_default() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("Prod", "https://x.com")], 1);
        let prior = Endpoint::titled("Gone", "https://gone.example.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::Reset(Endpoint::titled("Prod", "https://x.com"))
        );
    }

    #[test]
    fn exact_match_is_unchanged() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("Prod", "https://x.com")], 0);
        let prior = Endpoint::titled("Prod", "https://x.com");
        let outcome = reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst);
        assert_eq!(outcome, Reconciliation::Unchanged);
        assert!(!outcome.is_change());
        assert!(outcome.selection().is_none());
    }

    #[test]
    fn earlier_same_name_entry_wins_over_exact_match() {
        let c = catalog(&[("Prod", "https://new.x.com"), ("Prod", "https://old.x.com")], 0);
        let prior = Endpoint::titled("Prod", "https://old.x.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::UrlMigrated(Endpoint::titled("Prod", "https://new.x.com"))
        );
    }

    #[test]
    fn policy_decides_between_name_and_url_matches() {
        // prior's name points at one entry, prior's url at another
        let c = catalog(&[("Prod", "https://new.x.com"), ("Legacy", "https://x.com")], 0);
        let prior = Endpoint::titled("Prod", "https://x.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::UrlMigrated(Endpoint::titled("Prod", "https://new.x.com"))
        );
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::UrlFirst),
            Reconciliation::Renamed(Endpoint::titled("Legacy", "https://x.com"))
        );
    }

    #[test]
    fn title_spelled_out_for_untitled_prior_realigns() {
        let c = catalog(&[("Dev", "https://dev.x.com"), ("x.com", "https://x.com")], 0);
        let prior = Endpoint::untitled("https://x.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::Renamed(Endpoint::titled("x.com", "https://x.com"))
        );
    }

    #[test]
    fn untitled_entries_reconcile_by_display_name() {
        let c = Catalog::new(vec![Endpoint::untitled("http://x.com")], 0).unwrap();
        // display names agree ("x.com"), urls differ by scheme
        let prior = Endpoint::untitled("https://x.com");
        assert_eq!(
            reconcile(&c, Some(&prior), ReconcilePolicy::NameFirst),
            Reconciliation::UrlMigrated(Endpoint::untitled("http://x.com"))
        );
    }
}
