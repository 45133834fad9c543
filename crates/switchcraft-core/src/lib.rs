// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Runtime endpoint switching for host applications.
//! Keeps the selection logic framework-agnostic; storage and presentation are
//! ports the host plugs in.
//!
//! ```
//! use switchcraft_core::{Config, Endpoint, Switchcraft};
//! # use std::cell::RefCell;
//! # use std::collections::HashMap;
//! # use switchcraft_core::store::{KeyValueStore, StoreError};
//! # #[derive(Default)]
//! # struct Mem(RefCell<HashMap<String, Vec<u8>>>);
//! # impl KeyValueStore for Mem {
//! #     fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
//! #         self.0.borrow().get(key).cloned().ok_or(StoreError::NotFound)
//! #     }
//! #     fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
//! #         self.0.borrow_mut().insert(key.into(), data.to_vec());
//! #         Ok(())
//! #     }
//! # }
//!
//! let config = Config::new(
//!     "apiEndpoint",
//!     vec![
//!         Endpoint::titled("Staging", "https://staging.example.com"),
//!         Endpoint::titled("Production", "https://api.example.com"),
//!     ],
//! )
//! .with_default_index(1);
//!
//! let mut switcher = Switchcraft::new(config, Mem::default())?;
//! assert!(switcher.is_default_endpoint());
//!
//! switcher.select_index(0)?;
//! assert_eq!(switcher.endpoint().map(|e| e.name()), Some("Staging".to_owned()));
//! # Ok::<(), switchcraft_core::SwitchcraftError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod observer;
pub mod picker;
pub mod reconcile;
pub mod store;
pub mod switcher;
pub mod validation;

pub use catalog::Catalog;
pub use config::Config;
pub use endpoint::{Action, Endpoint};
pub use error::SwitchcraftError;
pub use observer::{Observers, SelectionEvent, SelectionObserver, SubscriptionId};
pub use picker::{PickerChoice, PickerItem, PickerOutcome, PickerSheet, PickerStyle};
pub use reconcile::{reconcile, ReconcilePolicy, Reconciliation};
pub use store::{KeyValueStore, SelectionStore, StoreError, StoreService};
pub use switcher::Switchcraft;
pub use validation::{is_valid_endpoint_url, normalize_custom_url, CustomEntry};
