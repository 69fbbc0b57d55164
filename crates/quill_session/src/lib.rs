pub mod export;
pub mod route;
pub mod session;

pub use export::{export, strip_tags, ExportArtifact, FALLBACK_SUMMARY};
pub use route::Route;
pub use session::DocumentSession;

pub mod prelude {
    pub use super::{DocumentSession, Route};
    pub use quill_core::{EditorSurface, MemoryEditor};
}
