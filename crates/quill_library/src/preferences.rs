use std::sync::Arc;

use quill_core::{KeyValueStore, Preferences, StoreExt};
use tracing::warn;

use crate::{ChangeListener, PREFS_KEY};

const SIDEBAR_MIN: u32 = 200;
const SIDEBAR_MAX: u32 = 600;

/// Persisted UI preference bag. No relational constraints with the article
/// data; it only shares the persistence mechanism.
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    prefs: Preferences,
    listeners: Vec<ChangeListener>,
}

impl PreferenceStore {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let prefs = store.load_or(PREFS_KEY, Preferences::default());
        Self {
            store,
            prefs,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn get(&self) -> &Preferences {
        &self.prefs
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.prefs.dark_mode = on;
        self.committed();
    }

    /// Width is clamped to the resizable range.
    pub fn set_sidebar_width(&mut self, width: u32) {
        self.prefs.sidebar_width = width.clamp(SIDEBAR_MIN, SIDEBAR_MAX);
        self.committed();
    }

    pub fn set_authenticated(&mut self, on: bool) {
        self.prefs.authenticated = on;
        self.committed();
    }

    fn committed(&self) {
        if let Err(e) = self.store.save(PREFS_KEY, &self.prefs) {
            warn!("Failed to persist preferences: {}", e);
        }
        for listener in &self.listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::MemoryStore;

    #[test]
    fn sidebar_width_is_clamped() {
        let mut prefs = PreferenceStore::load(Arc::new(MemoryStore::new()));
        prefs.set_sidebar_width(50);
        assert_eq!(prefs.get().sidebar_width, 200);
        prefs.set_sidebar_width(900);
        assert_eq!(prefs.get().sidebar_width, 600);
        prefs.set_sidebar_width(300);
        assert_eq!(prefs.get().sidebar_width, 300);
    }

    #[test]
    fn preferences_survive_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut prefs = PreferenceStore::load(store.clone());
            prefs.set_dark_mode(true);
        }

        let prefs = PreferenceStore::load(store);
        assert!(prefs.get().dark_mode);
    }
}
