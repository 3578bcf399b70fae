//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod preference_keys;
mod preferences_store;

pub use preference_keys::{PreferenceMap, PreferenceValue, keys, snapshot_from_preferences};
pub use preferences_store::{InMemoryPreferencesStore, JsonPreferencesStore};
