// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Caller-owned endpoint switcher: catalog + persisted selection + observers.

use std::sync::mpsc::Receiver;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::endpoint::{Action, Endpoint};
use crate::error::SwitchcraftError;
use crate::observer::{Observers, SelectionEvent, SelectionObserver, SubscriptionId};
use crate::picker::{PickerChoice, PickerItem, PickerOutcome, PickerSheet, PickerStyle};
use crate::reconcile::{reconcile, Reconciliation};
use crate::store::{KeyValueStore, SelectionStore};
use crate::validation::CustomEntry;

/// Switches between the endpoints of one [`Config`], persisting the choice
/// in a [`KeyValueStore`].
///
/// Several switchers may coexist as long as their storage keys differ.
pub struct Switchcraft<S> {
    config: Config,
    catalog: Catalog,
    selection: SelectionStore<S>,
    observers: Observers,
    reconciliation: Reconciliation,
}

impl<S> Switchcraft<S>
where
    S: KeyValueStore,
{
    /// Install `config`, reconciling whatever `store` holds for its key.
    pub fn new(config: Config, store: S) -> Result<Self, SwitchcraftError> {
        Self::with_observers(config, store, Observers::new())
    }

    /// Like [`new`](Self::new), with observers that should already see the
    /// reconciliation result.
    pub fn with_observers(
        config: Config,
        store: S,
        observers: Observers,
    ) -> Result<Self, SwitchcraftError> {
        let catalog = config.catalog()?;
        let selection = SelectionStore::new(store, config.storage_key.clone());
        let mut switcher = Self {
            config,
            catalog,
            selection,
            observers,
            reconciliation: Reconciliation::Unchanged,
        };
        switcher.install()?;
        Ok(switcher)
    }

    fn install(&mut self) -> Result<(), SwitchcraftError> {
        let prior = self.selection.load();
        let outcome = reconcile(&self.catalog, prior.as_ref(), self.config.reconcile_policy);
        if let Some(endpoint) = outcome.selection() {
            self.select_and_store(endpoint.clone())?;
        }
        self.reconciliation = outcome;
        Ok(())
    }

    /// How the persisted selection was reconciled when the config was installed.
    pub fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// The active config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The installed catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.selection.store()
    }

    /// The current selection, read through the store.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.selection.load()
    }

    /// The catalog default.
    pub fn default_endpoint(&self) -> &Endpoint {
        self.catalog.default_endpoint()
    }

    /// Whether the current selection is the catalog default.
    pub fn is_default_endpoint(&self) -> bool {
        self.endpoint().as_ref() == Some(self.default_endpoint())
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Open a broadcast channel for selection events.
    pub fn listen(&mut self) -> Receiver<SelectionEvent> {
        self.observers.listen()
    }

    /// Persist `endpoint` as the selection and notify.
    ///
    /// The endpoint need not be part of the catalog (custom entries are not).
    pub fn select(&mut self, endpoint: Endpoint) -> Result<(), SwitchcraftError> {
        self.select_and_store(endpoint)
    }

    /// Select the catalog entry at `index`.
    pub fn select_index(&mut self, index: usize) -> Result<&Endpoint, SwitchcraftError> {
        let endpoint = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(SwitchcraftError::IndexOutOfRange {
                index,
                len: self.catalog.len(),
            })?;
        self.select_and_store(endpoint)?;
        Ok(&self.catalog.endpoints()[index])
    }

    /// Re-send the current selection to observers, e.g. after late subscription.
    ///
    /// Returns the announced endpoint, if any is persisted.
    pub fn announce(&mut self) -> Option<Endpoint> {
        let current = self.endpoint()?;
        self.notify(&current);
        Some(current)
    }

    /// Report a tap on the configured action at `index`.
    pub fn tap_action(&self, index: usize) -> Result<&Action, SwitchcraftError> {
        let action = self
            .config
            .actions
            .get(index)
            .ok_or(SwitchcraftError::IndexOutOfRange {
                index,
                len: self.config.actions.len(),
            })?;
        self.observers.notify_action(action);
        Ok(action)
    }

    /// Custom-entry field state, pre-filled with the current url.
    pub fn custom_entry(&self) -> CustomEntry {
        CustomEntry::new(self.endpoint().map(|e| e.url).unwrap_or_default())
    }

    /// Describe the picker for the current state.
    pub fn picker(&self) -> PickerSheet {
        let current = self.endpoint();
        let checked = current.as_ref().and_then(|e| self.catalog.position(e));
        let mut items: Vec<PickerItem> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, endpoint)| PickerItem::Endpoint {
                index,
                label: endpoint.name(),
                checked: checked == Some(index),
            })
            .collect();
        if self.config.allow_custom {
            items.push(PickerItem::Custom {
                placeholder: self.config.text_field_placeholder.clone(),
                done_title: self.config.text_field_done_title.clone(),
                prefill: current.map(|e| e.url),
            });
        }
        items.extend(
            self.config
                .actions
                .iter()
                .enumerate()
                .map(|(index, action)| PickerItem::Action {
                    index,
                    title: action.title.clone(),
                }),
        );
        items.push(PickerItem::Cancel {
            title: self.config.cancel_title.clone(),
        });
        PickerSheet {
            title: self.config.alert_title.clone(),
            message: self.config.alert_message.clone(),
            style: if self.config.allow_custom {
                PickerStyle::Alert
            } else {
                PickerStyle::ActionSheet
            },
            items,
        }
    }

    /// Apply what the user did with the picker.
    ///
    /// Invalid custom text is rejected before it reaches the store.
    pub fn handle_choice(&mut self, choice: PickerChoice) -> Result<PickerOutcome, SwitchcraftError> {
        let endpoint = match choice {
            PickerChoice::Endpoint(index) => self.select_index(index)?.clone(),
            PickerChoice::Custom(text) => {
                if !self.config.allow_custom {
                    return Err(SwitchcraftError::CustomEntryDisabled);
                }
                let endpoint = CustomEntry::new(text).confirm()?;
                self.select_and_store(endpoint.clone())?;
                endpoint
            }
            PickerChoice::Action(index) => {
                return self
                    .tap_action(index)
                    .map(|action| PickerOutcome::ActionTapped(action.clone()));
            }
            PickerChoice::Cancel => return Ok(PickerOutcome::Dismissed),
        };
        Ok(PickerOutcome::Selected {
            endpoint,
            restart_required: self.config.change_requires_restart,
        })
    }

    fn select_and_store(&mut self, endpoint: Endpoint) -> Result<(), SwitchcraftError> {
        self.selection.save(&endpoint)?;
        info!(key = %self.selection.key(), endpoint = %endpoint, "endpoint selected");
        self.notify(&endpoint);
        Ok(())
    }

    fn notify(&mut self, endpoint: &Endpoint) {
        let broadcast = self
            .config
            .should_broadcast_endpoint_change
            .then_some(self.config.notification_name.as_str());
        self.observers.notify_selection(endpoint, broadcast);
    }
}

impl<S> std::fmt::Debug for Switchcraft<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switchcraft")
            .field("storage_key", &self.config.storage_key)
            .field("catalog", &self.catalog)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
