use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use quill_core::{Article, Error, KeyValueStore, Result, StoreExt};
use tracing::warn;

use crate::{ChangeListener, ARTICLES_KEY};

/// Partial field change for an active article.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticlePatch {
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            title: Some(text.into()),
            content: None,
        }
    }

    pub fn content(html: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(html.into()),
        }
    }
}

/// The active article collection, most recently created first, persisted
/// through the key-value store after every mutation.
pub struct ArticleRepository {
    store: Arc<dyn KeyValueStore>,
    articles: Vec<Article>,
    listeners: Vec<ChangeListener>,
}

impl ArticleRepository {
    /// Loads the active collection, seeding the reference articles when the
    /// key has never been written.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let articles = store.load_or(ARTICLES_KEY, crate::seed::seed_articles());
        Self {
            store,
            articles,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn create(&mut self) -> Article {
        self.create_at(Utc::now().date_naive())
    }

    pub fn create_at(&mut self, today: NaiveDate) -> Article {
        let article = Article::new(today);
        self.articles.insert(0, article.clone());
        self.committed();
        article
    }

    /// Front-to-back snapshot in insertion order.
    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Applies a partial change to an active article. Trashed articles are
    /// unreachable from here, so they can never be mutated.
    pub fn update(&mut self, id: &str, patch: ArticlePatch) -> Result<()> {
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            article.title = title;
        }
        if let Some(content) = patch.content {
            article.content = content;
        }

        self.committed();
        Ok(())
    }

    /// Removes and returns the article; the caller routes it onward
    /// (normally into the trash).
    pub fn remove(&mut self, id: &str) -> Result<Article> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let article = self.articles.remove(index);
        self.committed();
        Ok(article)
    }

    /// Re-entry point for restored articles: prepend, like everything else.
    pub fn insert_front(&mut self, article: Article) {
        self.articles.insert(0, article);
        self.committed();
    }

    fn committed(&self) {
        // In-memory state stays authoritative when the write fails; the
        // change just isn't durable for this session.
        if let Err(e) = self.store.save(ARTICLES_KEY, &self.articles) {
            warn!("Failed to persist articles: {}", e);
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
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn repo() -> ArticleRepository {
        ArticleRepository::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn empty_store_seeds_reference_articles() {
        let repo = repo();
        let titles: Vec<_> = repo.list().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Getting Started with React",
                "Understanding TypeScript",
                "Mastering Tailwind CSS",
            ]
        );
    }

    #[test]
    fn create_prepends() {
        let mut repo = repo();
        let x = repo.create();
        let y = repo.create();

        let ids: Vec<_> = repo.list().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids[0], y.id);
        assert_eq!(ids[1], x.id);
    }

    #[test]
    fn create_defaults() {
        let mut repo = repo();
        let article = repo.create();
        assert_eq!(article.title, "New Article");
        assert!(article.content.is_empty());
        assert!(article.summary.is_empty());
    }

    #[test]
    fn update_patches_title_and_content() {
        let mut repo = repo();
        let article = repo.create();

        repo.update(&article.id, ArticlePatch::title("Hello")).unwrap();
        repo.update(&article.id, ArticlePatch::content("<p>hi</p>"))
            .unwrap();

        let stored = repo.get(&article.id).unwrap();
        assert_eq!(stored.title, "Hello");
        assert_eq!(stored.content, "<p>hi</p>");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut repo = repo();
        let err = repo.update("missing", ArticlePatch::title("x")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn remove_returns_the_article() {
        let mut repo = repo();
        let article = repo.create();

        let removed = repo.remove(&article.id).unwrap();
        assert_eq!(removed.id, article.id);
        assert!(repo.get(&article.id).is_none());
        assert!(matches!(
            repo.remove(&article.id),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn mutations_survive_reload() {
        let store = Arc::new(MemoryStore::new());
        let id = {
            let mut repo = ArticleRepository::load(store.clone());
            let article = repo.create();
            repo.update(&article.id, ArticlePatch::title("Persisted"))
                .unwrap();
            article.id
        };

        let repo = ArticleRepository::load(store);
        assert_eq!(repo.get(&id).unwrap().title, "Persisted");
    }

    #[test]
    fn listeners_fire_on_every_mutation() {
        static FIRED: AtomicUsize = AtomicUsize::new(0);

        let mut repo = repo();
        repo.subscribe(Box::new(|| {
            FIRED.fetch_add(1, Ordering::SeqCst);
        }));

        let article = repo.create();
        repo.update(&article.id, ArticlePatch::title("x")).unwrap();
        repo.remove(&article.id).unwrap();

        assert_eq!(FIRED.load(Ordering::SeqCst), 3);
    }
}
