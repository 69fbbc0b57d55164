/// Seam to the rich-text editor collaborator.
///
/// The session only ever pushes markup in and pulls the current markup
/// back out. Change notifications flow the other way: the host forwards
/// the editor's update callback to the session.
pub trait EditorSurface {
    fn set_content(&mut self, html: &str);

    fn content(&self) -> String;
}

/// Plain in-memory editor surface, used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct MemoryEditor {
    buffer: String,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorSurface for MemoryEditor {
    fn set_content(&mut self, html: &str) {
        self.buffer = html.to_string();
    }

    fn content(&self) -> String {
        self.buffer.clone()
    }
}
