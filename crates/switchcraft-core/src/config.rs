// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configuration surface for a switcher instance.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::endpoint::{Action, Endpoint};
use crate::error::SwitchcraftError;
use crate::reconcile::ReconcilePolicy;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "switchcraftEndpoint";
/// Event name used when none is configured.
pub const DEFAULT_NOTIFICATION_NAME: &str = "switchcraftDidChangeEndpoint";

/// Options for one switcher. Every field has a default, so partial JSON
/// documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the selection is persisted under.
    pub storage_key: String,
    /// Picker title.
    pub alert_title: String,
    /// Optional picker message.
    pub alert_message: Option<String>,
    /// Placeholder of the custom-URL field.
    pub text_field_placeholder: String,
    /// Label of the custom-URL confirm action.
    pub text_field_done_title: String,
    /// Label of the cancel action.
    pub cancel_title: String,
    /// Whether the picker offers free-text endpoint entry.
    pub allow_custom: bool,
    /// Selectable endpoints in display order.
    pub endpoints: Vec<Endpoint>,
    /// Index of the default endpoint; out-of-range values fall back to 0.
    pub default_endpoint_index: usize,
    /// Whether selection changes are sent to broadcast listeners.
    pub should_broadcast_endpoint_change: bool,
    /// Name carried by broadcast events.
    pub notification_name: String,
    /// Extra entries shown below the endpoints.
    pub actions: Vec<Action>,
    /// Whether a new selection only takes effect after a restart.
    pub change_requires_restart: bool,
    /// Precedence of name vs. url matching during reconciliation.
    pub reconcile_policy: ReconcilePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            alert_title: "Select an Endpoint".to_owned(),
            alert_message: None,
            text_field_placeholder: "Enter Value".to_owned(),
            text_field_done_title: "Use Custom".to_owned(),
            cancel_title: "Cancel".to_owned(),
            allow_custom: false,
            endpoints: Vec::new(),
            default_endpoint_index: 0,
            should_broadcast_endpoint_change: true,
            notification_name: DEFAULT_NOTIFICATION_NAME.to_owned(),
            actions: Vec::new(),
            change_requires_restart: false,
            reconcile_policy: ReconcilePolicy::default(),
        }
    }
}

impl Config {
    /// Config for `endpoints` stored under `storage_key`, other fields default.
    pub fn new(storage_key: impl Into<String>, endpoints: Vec<Endpoint>) -> Self {
        Self {
            storage_key: storage_key.into(),
            endpoints,
            ..Self::default()
        }
    }

    /// Set the default endpoint index.
    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_endpoint_index = index;
        self
    }

    /// Enable or disable custom entry.
    pub fn with_allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = allow;
        self
    }

    /// Set the picker title and message.
    pub fn with_alert(mut self, title: impl Into<String>, message: Option<String>) -> Self {
        self.alert_title = title.into();
        self.alert_message = message;
        self
    }

    /// Append a picker action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Enable or disable broadcast events.
    pub fn with_broadcast(mut self, enabled: bool) -> Self {
        self.should_broadcast_endpoint_change = enabled;
        self
    }

    /// Mark selections as requiring a restart.
    pub fn with_restart_required(mut self, required: bool) -> Self {
        self.change_requires_restart = required;
        self
    }

    /// Set the reconciliation policy.
    pub fn with_reconcile_policy(mut self, policy: ReconcilePolicy) -> Self {
        self.reconcile_policy = policy;
        self
    }

    /// Build the catalog described by this config.
    pub fn catalog(&self) -> Result<Catalog, SwitchcraftError> {
        Catalog::new(self.endpoints.clone(), self.default_endpoint_index)
    }
}
