use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a source editor pane. Allocated by the hub, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EditorId(pub u32);

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "editor-{}", self.0)
    }
}

/// Identifier of a compiler pane. Allocated by the hub, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompilerId(pub u32);

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compiler-{}", self.0)
    }
}

/// Language key such as `c++` or `rust`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Every kind of pane the workbench can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneKind {
    Editor,
    Compiler,
    Output,
    Diff,
    Opt,
    Ast,
    GccDump,
    Cfg,
    Ir,
    Conformance,
}

impl PaneKind {
    pub const ALL: [PaneKind; 10] = [
        PaneKind::Editor,
        PaneKind::Compiler,
        PaneKind::Output,
        PaneKind::Diff,
        PaneKind::Opt,
        PaneKind::Ast,
        PaneKind::GccDump,
        PaneKind::Cfg,
        PaneKind::Ir,
        PaneKind::Conformance,
    ];

    /// Human-readable label used for pane titles.
    pub fn label(&self) -> &'static str {
        match self {
            PaneKind::Editor => "Editor",
            PaneKind::Compiler => "Compiler",
            PaneKind::Output => "Output",
            PaneKind::Diff => "Diff Viewer",
            PaneKind::Opt => "Opt Viewer",
            PaneKind::Ast => "AST Viewer",
            PaneKind::GccDump => "GCC Tree/RTL Viewer",
            PaneKind::Cfg => "Graph Viewer",
            PaneKind::Ir => "IR Viewer",
            PaneKind::Conformance => "Conformance Viewer",
        }
    }

    /// Analysis views hang off a compiler rather than an editor.
    pub fn is_compiler_view(&self) -> bool {
        matches!(
            self,
            PaneKind::Output
                | PaneKind::Opt
                | PaneKind::Ast
                | PaneKind::GccDump
                | PaneKind::Cfg
                | PaneKind::Ir
        )
    }
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of the pane coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubPhase {
    /// Panes are being built; emissions are queued.
    Initializing,
    /// The startup queue has been flushed; emissions are delivered directly.
    Ready,
}
