//! Bookkeeping the hub derives from lifecycle events.

use tracing::debug;

use workbench_common::{Event, EventKind, IdAllocator, LanguageId};

/// Ids in use and the last language seen, kept in sync by listening to
/// open/close and language-change events.
#[derive(Debug)]
pub(super) struct SessionState {
    pub(super) editors: IdAllocator,
    pub(super) compilers: IdAllocator,
    pub(super) last_opened_language: Option<LanguageId>,
}

impl SessionState {
    pub(super) const OBSERVED: [EventKind; 5] = [
        EventKind::EditorOpen,
        EventKind::EditorClose,
        EventKind::CompilerOpen,
        EventKind::CompilerClose,
        EventKind::LanguageChange,
    ];

    pub(super) fn new(id_ceiling: u32) -> Self {
        Self {
            editors: IdAllocator::with_ceiling(id_ceiling),
            compilers: IdAllocator::with_ceiling(id_ceiling),
            last_opened_language: None,
        }
    }

    pub(super) fn observe(&mut self, event: &Event) {
        match event {
            Event::EditorOpen(id) => self.editors.add(id.0),
            Event::EditorClose(id) => self.editors.remove(id.0),
            Event::CompilerOpen(id) => self.compilers.add(id.0),
            Event::CompilerClose(id) => self.compilers.remove(id.0),
            Event::LanguageChange { editor, language } => {
                debug!(%editor, %language, "language changed");
                self.last_opened_language = Some(language.clone());
            }
            Event::Initialised => {}
        }
    }
}
