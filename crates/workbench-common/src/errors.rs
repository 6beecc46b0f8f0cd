use crate::types::PaneKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("ran out of ids (ceiling {ceiling})")]
    CapacityExceeded { ceiling: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown layout node {0}")]
    UnknownNode(usize),

    #[error("layout node {0} is a pane and cannot hold children")]
    NotAContainer(usize),

    #[error("layout node {0} is already attached to the tree")]
    AlreadyAttached(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("no component registered for {0:?} panes")]
    UnregisteredComponent(PaneKind),

    #[error("invalid state for {kind:?} pane: {reason}")]
    InvalidState { kind: PaneKind, reason: String },
}
