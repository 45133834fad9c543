// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selection-change notification: delegate-style observers plus an optional
//! broadcast channel.
//!
//! Observers are registered with [`Observers::subscribe`] and receive every
//! selection and action tap. Broadcast listeners obtained from
//! [`Observers::listen`] receive a [`SelectionEvent`] per selection, but only
//! when the switcher's config enables broadcasting. Listeners whose receiver
//! was dropped are pruned on the next send.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::endpoint::{Action, Endpoint};

/// Receiver of selection changes.
pub trait SelectionObserver {
    /// Called after `endpoint` has been persisted as the selection.
    fn did_select_endpoint(&self, endpoint: &Endpoint);

    /// Called when a picker action is tapped. Default: no-op.
    fn did_tap_action(&self, _action: &Action) {}
}

impl<F> SelectionObserver for F
where
    F: Fn(&Endpoint),
{
    fn did_select_endpoint(&self, endpoint: &Endpoint) {
        self(endpoint);
    }
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Broadcast payload for a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Configured event name.
    pub name: String,
    /// Newly selected endpoint.
    pub endpoint: Endpoint,
}

/// Registered observers and broadcast listeners.
#[derive(Default)]
pub struct Observers {
    observers: Vec<(SubscriptionId, Box<dyn SelectionObserver>)>,
    listeners: Vec<Sender<SelectionEvent>>,
    next_id: u64,
}

impl Observers {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Open a broadcast channel.
    pub fn listen(&mut self) -> Receiver<SelectionEvent> {
        let (tx, rx) = channel();
        self.listeners.push(tx);
        rx
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver a selection to observers, and to broadcast listeners under
    /// `broadcast` when given.
    pub fn notify_selection(&mut self, endpoint: &Endpoint, broadcast: Option<&str>) {
        for (_, observer) in &self.observers {
            observer.did_select_endpoint(endpoint);
        }
        if let Some(name) = broadcast {
            self.listeners.retain(|tx| {
                tx.send(SelectionEvent {
                    name: name.to_owned(),
                    endpoint: endpoint.clone(),
                })
                .is_ok()
            });
        }
    }

    /// Deliver an action tap to observers.
    pub fn notify_action(&self, action: &Action) {
        for (_, observer) in &self.observers {
            observer.did_tap_action(action);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("observers", &self.observers.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
