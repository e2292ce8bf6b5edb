//! Preference port — small persistent key-value settings.
//!
//! Only auxiliary fields live here (the selected location label). Cart
//! contents are never persisted.

use std::future::Future;

use servicebay_domain::error::ServiceBayError;

/// Persistent string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, ServiceBayError>> + Send;

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), ServiceBayError>> + Send;
}

impl<T: PreferenceStore + Send + Sync> PreferenceStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, ServiceBayError>> + Send {
        (**self).get(key)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), ServiceBayError>> + Send {
        (**self).set(key, value)
    }
}
