// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Picker sheet layout and choice handling against an in-memory store.
use switchcraft_core::picker::RESTART_NOTICE;
use switchcraft_core::{
    Action, Config, Endpoint, PickerChoice, PickerItem, PickerOutcome, PickerStyle,
    Switchcraft, SwitchcraftError,
};
use switchcraft_dry_tests::{
    prod, staging, staging_and_production, InMemoryStore, Notification, RecordingObserver,
    FIXTURE_KEY,
};

#[test]
fn action_sheet_lists_endpoints_then_cancel() {
    let switcher = Switchcraft::new(staging_and_production(), InMemoryStore::new()).unwrap();
    let sheet = switcher.picker();

    assert_eq!(sheet.title, "Select an Endpoint");
    assert_eq!(sheet.message, None);
    assert_eq!(sheet.style, PickerStyle::ActionSheet);
    assert_eq!(
        sheet.items,
        vec![
            PickerItem::Endpoint {
                index: 0,
                label: "Staging".into(),
                checked: false,
            },
            PickerItem::Endpoint {
                index: 1,
                label: "Prod".into(),
                checked: true,
            },
            PickerItem::Cancel {
                title: "Cancel".into(),
            },
        ]
    );
    assert_eq!(sheet.checked_index(), Some(1));
}

#[test]
fn custom_entry_and_actions_are_listed_in_order() {
    let config = staging_and_production()
        .with_allow_custom(true)
        .with_alert("Backend", Some("Pick one".into()))
        .with_action(Action::new("Clear cache"));
    let switcher = Switchcraft::new(config, InMemoryStore::new()).unwrap();
    let sheet = switcher.picker();

    assert_eq!(sheet.style, PickerStyle::Alert);
    assert_eq!(sheet.title, "Backend");
    assert_eq!(sheet.message.as_deref(), Some("Pick one"));
    assert_eq!(
        &sheet.items[2..],
        &[
            PickerItem::Custom {
                placeholder: "Enter Value".into(),
                done_title: "Use Custom".into(),
                prefill: Some("https://api.example.com".into()),
            },
            PickerItem::Action {
                index: 0,
                title: "Clear cache".into(),
            },
            PickerItem::Cancel {
                title: "Cancel".into(),
            },
        ]
    );
}

#[test]
fn duplicate_entries_check_only_the_first_row() {
    let config = Config::new(FIXTURE_KEY, vec![staging(), prod(), staging()]);
    let switcher = Switchcraft::new(config, InMemoryStore::new()).unwrap();
    let checked: Vec<usize> = switcher
        .picker()
        .items
        .iter()
        .filter_map(|item| match item {
            PickerItem::Endpoint {
                index,
                checked: true,
                ..
            } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(checked, vec![0]);
}

#[test]
fn choosing_an_endpoint_selects_it() {
    let store = InMemoryStore::new();
    let mut switcher = Switchcraft::new(staging_and_production(), store.clone()).unwrap();
    let outcome = switcher.handle_choice(PickerChoice::Endpoint(0)).unwrap();
    assert_eq!(
        outcome,
        PickerOutcome::Selected {
            endpoint: staging(),
            restart_required: false,
        }
    );
    assert_eq!(store.endpoint(FIXTURE_KEY), Some(staging()));
    assert_eq!(switcher.picker().checked_index(), Some(0));
}

#[test]
fn restart_flag_is_reported_with_selection() {
    let config = staging_and_production().with_restart_required(true);
    let mut switcher = Switchcraft::new(config, InMemoryStore::new()).unwrap();
    let outcome = switcher.handle_choice(PickerChoice::Endpoint(0)).unwrap();
    assert!(matches!(
        outcome,
        PickerOutcome::Selected {
            restart_required: true,
            ..
        }
    ));
    assert_eq!(RESTART_NOTICE.title, "Restart Required");
}

#[test]
fn cancel_changes_nothing() {
    let store = InMemoryStore::new();
    let mut switcher = Switchcraft::new(staging_and_production(), store.clone()).unwrap();
    let recorder = RecordingObserver::new();
    switcher.subscribe(recorder.clone());
    let saves = store.save_count();

    assert_eq!(
        switcher.handle_choice(PickerChoice::Cancel).unwrap(),
        PickerOutcome::Dismissed
    );
    assert_eq!(store.save_count(), saves);
    assert!(recorder.notifications().is_empty());
    assert_eq!(switcher.endpoint(), Some(prod()));
}

#[test]
fn custom_url_is_normalized_and_selected() {
    let config = staging_and_production().with_allow_custom(true);
    let mut switcher = Switchcraft::new(config, InMemoryStore::new()).unwrap();
    let outcome = switcher
        .handle_choice(PickerChoice::Custom("example.com".into()))
        .unwrap();
    let custom = Endpoint::custom("https://example.com");
    assert_eq!(
        outcome,
        PickerOutcome::Selected {
            endpoint: custom.clone(),
            restart_required: false,
        }
    );
    assert_eq!(switcher.endpoint(), Some(custom));
    // custom endpoints are not catalog entries, so nothing is checked
    assert_eq!(switcher.picker().checked_index(), None);
}

#[test]
fn invalid_custom_url_never_reaches_the_store() {
    let store = InMemoryStore::new();
    let config = staging_and_production().with_allow_custom(true);
    let mut switcher = Switchcraft::new(config, store.clone()).unwrap();
    let saves = store.save_count();

    let result = switcher.handle_choice(PickerChoice::Custom("not a url".into()));
    assert!(matches!(result, Err(SwitchcraftError::InvalidCustomUrl(_))));
    assert_eq!(store.save_count(), saves);
    assert_eq!(switcher.endpoint(), Some(prod()));
}

#[test]
fn custom_url_requires_allow_custom() {
    let mut switcher = Switchcraft::new(staging_and_production(), InMemoryStore::new()).unwrap();
    assert!(matches!(
        switcher.handle_choice(PickerChoice::Custom("example.com".into())),
        Err(SwitchcraftError::CustomEntryDisabled)
    ));
}

#[test]
fn custom_entry_starts_from_current_url() {
    let switcher = Switchcraft::new(staging_and_production(), InMemoryStore::new()).unwrap();
    let mut entry = switcher.custom_entry();
    assert_eq!(entry.text(), "https://api.example.com");
    assert!(entry.is_confirm_enabled());
    entry.edit("nope");
    assert!(!entry.is_confirm_enabled());
}

#[test]
fn tapping_an_action_notifies_without_selecting() {
    let store = InMemoryStore::new();
    let config = staging_and_production().with_action(Action::new("Clear cache"));
    let mut switcher = Switchcraft::new(config, store.clone()).unwrap();
    let recorder = RecordingObserver::new();
    switcher.subscribe(recorder.clone());
    let saves = store.save_count();

    let outcome = switcher.handle_choice(PickerChoice::Action(0)).unwrap();
    assert_eq!(outcome, PickerOutcome::ActionTapped(Action::new("Clear cache")));
    assert_eq!(
        recorder.notifications(),
        vec![Notification::ActionTapped(Action::new("Clear cache"))]
    );
    assert_eq!(store.save_count(), saves);

    assert!(matches!(
        switcher.handle_choice(PickerChoice::Action(1)),
        Err(SwitchcraftError::IndexOutOfRange { index: 1, len: 1 })
    ));
}
