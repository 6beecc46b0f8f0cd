use serde::{Deserialize, Serialize};

use crate::types::{CompilerId, EditorId, LanguageId};

/// Notifications exchanged between panes through the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    EditorOpen(EditorId),
    EditorClose(EditorId),
    CompilerOpen(CompilerId),
    CompilerClose(CompilerId),
    LanguageChange {
        editor: EditorId,
        language: LanguageId,
    },
    /// Sent once, after every startup pane exists and the deferred queue has drained.
    Initialised,
}

/// Payload-free discriminant of [`Event`], used as a subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    EditorOpen,
    EditorClose,
    CompilerOpen,
    CompilerClose,
    LanguageChange,
    Initialised,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::EditorOpen(_) => EventKind::EditorOpen,
            Event::EditorClose(_) => EventKind::EditorClose,
            Event::CompilerOpen(_) => EventKind::CompilerOpen,
            Event::CompilerClose(_) => EventKind::CompilerClose,
            Event::LanguageChange { .. } => EventKind::LanguageChange,
            Event::Initialised => EventKind::Initialised,
        }
    }
}

impl EventKind {
    /// Wire name of the event, as used by the layout engine's channel.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::EditorOpen => "editorOpen",
            EventKind::EditorClose => "editorClose",
            EventKind::CompilerOpen => "compilerOpen",
            EventKind::CompilerClose => "compilerClose",
            EventKind::LanguageChange => "languageChange",
            EventKind::Initialised => "initialised",
        }
    }
}
