//! Local preference store

mod store;

pub use store::{PreferenceStore, Preferences, PreferencesError, Theme};
