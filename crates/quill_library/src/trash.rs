use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use quill_core::{Article, Error, KeyValueStore, Result, StoreExt, TrashItem};
use tracing::{info, warn};

use crate::{ChangeListener, TRASH_KEY};

/// How long a trashed article may linger before the purge removes it.
pub const RETENTION_DAYS: i64 = 3;

/// Time-limited holding area for soft-deleted articles, most recently
/// deleted first.
pub struct TrashBin {
    store: Arc<dyn KeyValueStore>,
    items: Vec<TrashItem>,
    listeners: Vec<ChangeListener>,
}

impl TrashBin {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = store.load_or(TRASH_KEY, Vec::new());
        Self {
            store,
            items,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn list(&self) -> &[TrashItem] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Soft delete: stamps the deletion time and prepends.
    pub fn move_in(&mut self, article: Article) -> TrashItem {
        self.move_in_at(article, Utc::now())
    }

    pub fn move_in_at(&mut self, article: Article, now: DateTime<Utc>) -> TrashItem {
        let item = TrashItem::new(article, now);
        self.items.insert(0, item.clone());
        self.committed();
        item
    }

    /// Takes the item back out of the trash, stripping the deletion stamp.
    /// The caller re-inserts the returned article into the repository.
    pub fn restore(&mut self, id: &str) -> Result<Article> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let article = self.items.remove(index).into_article();
        self.committed();
        Ok(article)
    }

    /// Permanent delete. Idempotent: purging an id that is already gone is
    /// not an error.
    pub fn purge(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() != before {
            self.committed();
        }
    }

    /// Drops every item older than the retention window. Idempotent; runs
    /// once at session start and again on the recurring timer.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let retention = Duration::days(RETENTION_DAYS);
        let before = self.items.len();
        self.items.retain(|item| now - item.deleted_at <= retention);
        let removed = before - self.items.len();
        if removed > 0 {
            info!("Purged {} expired trash item(s)", removed);
            self.committed();
        }
        removed
    }

    fn committed(&self) {
        if let Err(e) = self.store.save(TRASH_KEY, &self.items) {
            warn!("Failed to persist trash: {}", e);
        }
        for listener in &self.listeners {
            listener();
        }
    }
}
