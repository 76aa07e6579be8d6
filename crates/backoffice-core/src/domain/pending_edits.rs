//! Handle for text edits that have not been committed to the form yet.
//!
//! The editor owns one handle and hands clones to whichever input owns the
//! text. The input writes on every keystroke; the save path drains it
//! synchronously before validating.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::role_form::RoleField;

#[derive(Debug, Clone, Default)]
pub struct PendingEdits {
    inner: Arc<Mutex<HashMap<RoleField, String>>>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, field: RoleField, value: impl Into<String>) {
        self.inner.lock().insert(field, value.into());
    }

    pub fn get(&self, field: RoleField) -> Option<String> {
        self.inner.lock().get(&field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Current edits, leaving them in place.
    pub fn snapshot(&self) -> Vec<(RoleField, String)> {
        let mut edits: Vec<_> = self
            .inner
            .lock()
            .iter()
            .map(|(field, value)| (*field, value.clone()))
            .collect();
        edits.sort_by_key(|(field, _)| *field as u8);
        edits
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
