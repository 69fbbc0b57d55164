use chrono::{DateTime, Duration, Utc};
use quill_core::{Article, EditorSurface, Error, Result};
use quill_library::{ArticlePatch, ArticleRepository, TrashBin};
use tracing::{debug, warn};

use crate::route::Route;

/// How long the "Saved" acknowledgment stays visible.
const SAVED_NOTICE_SECS: i64 = 2;

pub const SAVED_NOTICE: &str = "Saved";

#[derive(Debug, Clone)]
struct OpenDocument {
    id: String,
    title: String,
}

/// Runtime association between one article and the open editor view.
///
/// Two states: no selection, or editing one document. Content edits are
/// buffered into a pending holder and only reach the repository on an
/// explicit save; switching documents discards whatever was never saved.
/// Title edits commit immediately.
pub struct DocumentSession<E: EditorSurface> {
    editor: E,
    current: Option<OpenDocument>,
    pending: Option<String>,
    notice_until: Option<DateTime<Utc>>,
}

impl<E: EditorSurface> DocumentSession<E> {
    pub fn new(editor: E) -> Self {
        Self {
            editor,
            current: None,
            pending: None,
            notice_until: None,
        }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|doc| doc.id.as_str())
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current.as_ref().map(|doc| doc.title.as_str())
    }

    pub fn is_editing(&self) -> bool {
        self.current.is_some()
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// The host pushes keystrokes through this handle, then reports them
    /// via [`DocumentSession::content_edited`].
    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// Opens an article: loads its content into the editor and records the
    /// selection. Pending edits from the previous document are discarded.
    pub fn select(&mut self, repo: &ArticleRepository, id: &str) -> Result<Route> {
        let article = repo
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let route = Route::Article(article.id.clone());
        self.open(article);
        Ok(route)
    }

    /// Creates a fresh article and makes it the open document.
    pub fn create_new(&mut self, repo: &mut ArticleRepository) -> Route {
        let article = repo.create();
        let route = Route::Article(article.id.clone());
        self.open(&article);
        route
    }

    /// Immediate repository update; titles are not buffered. Quiet no-op
    /// with nothing open.
    pub fn edit_title(&mut self, repo: &mut ArticleRepository, text: &str) -> Result<()> {
        let doc = match self.current.as_mut() {
            Some(doc) => doc,
            None => return Ok(()),
        };
        doc.title = text.to_string();
        repo.update(&doc.id, ArticlePatch::title(text))
    }

    /// Change notification from the editor collaborator: captures the
    /// current markup into the pending holder only.
    pub fn content_edited(&mut self) {
        if self.current.is_some() {
            self.pending = Some(self.editor.content());
        }
    }

    /// Flushes pending content for the open document and arms the saved
    /// notice. Returns whether anything was written; nothing pending is a
    /// quiet no-op and never an error.
    pub fn save(&mut self, repo: &mut ArticleRepository, now: DateTime<Utc>) -> bool {
        let doc = match &self.current {
            Some(doc) => doc,
            None => return false,
        };
        let content = match self.pending.take() {
            Some(content) => content,
            None => return false,
        };

        if let Err(e) = repo.update(&doc.id, ArticlePatch::content(content)) {
            warn!("Dropping save for vanished article {}: {}", doc.id, e);
            return false;
        }

        self.notice_until = Some(now + Duration::seconds(SAVED_NOTICE_SECS));
        true
    }

    /// The transient "Saved" acknowledgment; visible for two seconds after
    /// a successful save, then clears on its own.
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&'static str> {
        match self.notice_until {
            Some(until) if now < until => Some(SAVED_NOTICE),
            _ => None,
        }
    }

    /// Moves the open document to the trash and clears editor and
    /// selection.
    pub fn delete_current(
        &mut self,
        repo: &mut ArticleRepository,
        trash: &mut TrashBin,
    ) -> Result<Route> {
        let doc = self
            .current
            .take()
            .ok_or_else(|| Error::NotFound("no open document".to_string()))?;
        let article = repo.remove(&doc.id)?;
        trash.move_in(article);
        self.editor.set_content("");
        self.pending = None;
        Ok(Route::Root)
    }

    /// Navigating away without deleting.
    pub fn close(&mut self) -> Route {
        self.current = None;
        self.pending = None;
        self.editor.set_content("");
        Route::Root
    }

    /// Resolves a deep-link address, at startup or on back/forward
    /// navigation. Unresolvable ids quietly land on the root address.
    pub fn open_path(&mut self, repo: &ArticleRepository, path: &str) -> Route {
        match Route::parse(path) {
            Route::Article(id) => match repo.get(&id) {
                Some(article) => {
                    let route = Route::Article(article.id.clone());
                    self.open(article);
                    route
                }
                None => {
                    debug!("Unknown article id '{}' in address, redirecting to root", id);
                    self.close()
                }
            },
            Route::Root => self.close(),
        }
    }

    fn open(&mut self, article: &Article) {
        self.editor.set_content(&article.content);
        self.current = Some(OpenDocument {
            id: article.id.clone(),
            title: article.title.clone(),
        });
        self.pending = None;
    }
}
