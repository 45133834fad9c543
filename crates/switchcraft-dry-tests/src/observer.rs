// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Observer fake that records every notification.

use std::sync::{Arc, Mutex};

use switchcraft_core::{Action, Endpoint, SelectionObserver};

/// One recorded callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `did_select_endpoint` was called.
    Selected(Endpoint),
    /// `did_tap_action` was called.
    ActionTapped(Action),
}

/// [`SelectionObserver`] that appends every callback to a shared log.
///
/// Clones share the log: subscribe one clone, assert on the other.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingObserver {
    /// Create an observer with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Only the selected endpoints, in order.
    pub fn selections(&self) -> Vec<Endpoint> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Selected(e) => Some(e),
                Notification::ActionTapped(_) => None,
            })
            .collect()
    }

    /// Number of recorded selections.
    pub fn selection_count(&self) -> usize {
        self.selections().len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn record(&self, notification: Notification) {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

impl SelectionObserver for RecordingObserver {
    fn did_select_endpoint(&self, endpoint: &Endpoint) {
        self.record(Notification::Selected(endpoint.clone()));
    }

    fn did_tap_action(&self, action: &Action) {
        self.record(Notification::ActionTapped(action.clone()));
    }
}
