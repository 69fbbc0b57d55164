pub mod editor;
pub mod error;
pub mod store;
pub mod summarize;
pub mod types;

pub use editor::{EditorSurface, MemoryEditor};
pub use error::Error;
pub use store::{KeyValueStore, StoreExt};
pub use summarize::Summarizer;
pub use types::{Article, ExportedPost, Preferences, TrashItem};

pub type Result<T> = std::result::Result<T, Error>;
