pub mod preferences;
pub mod purge;
pub mod repository;
pub mod seed;
pub mod trash;

pub use preferences::PreferenceStore;
pub use purge::run_purge_timer;
pub use repository::{ArticlePatch, ArticleRepository};
pub use trash::TrashBin;

/// Persisted key names. Each key is an independent value in the store; no
/// write spans more than one of them.
pub const ARTICLES_KEY: &str = "articles";
pub const TRASH_KEY: &str = "trash";
pub const PREFS_KEY: &str = "prefs";

/// State-changed notification hook. Core state emits after every committed
/// mutation; rendering (or any other observer) subscribes.
pub type ChangeListener = Box<dyn Fn() + Send>;

pub mod prelude {
    pub use super::{ArticlePatch, ArticleRepository, PreferenceStore, TrashBin};
    pub use quill_core::{Article, Error, Result, TrashItem};
}
