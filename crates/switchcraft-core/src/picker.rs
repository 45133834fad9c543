// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Framework-agnostic model of the endpoint picker.
//!
//! A presentation layer renders a [`PickerSheet`], then reports what the user
//! did as a [`PickerChoice`]; the switcher turns that into a
//! [`PickerOutcome`]. Nothing here depends on a UI toolkit.

use crate::endpoint::{Action, Endpoint};

/// How the picker should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStyle {
    /// Centered alert; required when a text field is shown.
    Alert,
    /// Bottom action sheet.
    ActionSheet,
}

/// One row of the picker, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerItem {
    /// A catalog endpoint.
    Endpoint {
        /// Catalog index, reported back through [`PickerChoice::Endpoint`].
        index: usize,
        /// Display label.
        label: String,
        /// Whether this is the current selection.
        checked: bool,
    },
    /// Free-text endpoint entry.
    Custom {
        /// Field placeholder.
        placeholder: String,
        /// Confirm action label.
        done_title: String,
        /// Initial field contents (current url, if any).
        prefill: Option<String>,
    },
    /// A host-defined action.
    Action {
        /// Index into the configured actions.
        index: usize,
        /// Display label.
        title: String,
    },
    /// Dismiss without changes.
    Cancel {
        /// Display label.
        title: String,
    },
}

/// Everything a presentation layer needs to render the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSheet {
    /// Title line.
    pub title: String,
    /// Optional message under the title.
    pub message: Option<String>,
    /// Presentation style.
    pub style: PickerStyle,
    /// Rows in display order.
    pub items: Vec<PickerItem>,
}

impl PickerSheet {
    /// The checked endpoint row's catalog index, if the selection is listed.
    pub fn checked_index(&self) -> Option<usize> {
        self.items.iter().find_map(|item| match item {
            PickerItem::Endpoint {
                index,
                checked: true,
                ..
            } => Some(*index),
            _ => None,
        })
    }
}

/// What the user did with the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerChoice {
    /// Picked the catalog endpoint at this index.
    Endpoint(usize),
    /// Confirmed the custom field with this text.
    Custom(String),
    /// Tapped the action at this index.
    Action(usize),
    /// Dismissed the picker.
    Cancel,
}

/// Result of handling a [`PickerChoice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// A new selection was persisted.
    Selected {
        /// The selected endpoint.
        endpoint: Endpoint,
        /// Whether the host should show the [`RestartNotice`].
        restart_required: bool,
    },
    /// An action was tapped.
    ActionTapped(Action),
    /// The picker was dismissed; nothing changed.
    Dismissed,
}

/// Notice shown after a selection when changes need a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartNotice {
    /// Title line.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the action that keeps the app running.
    pub decline_title: &'static str,
    /// Label of the action that terminates the app.
    pub accept_title: &'static str,
}

/// Restart notice texts.
pub const RESTART_NOTICE: RestartNotice = RestartNotice {
    title: "Restart Required",
    message: "An endpoint change requires a restart to take effect. Force quit now?",
    decline_title: "Don't Restart",
    accept_title: "Force Restart",
};
