pub mod allocator;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use allocator::{IdAllocator, DEFAULT_ID_CEILING};
pub use errors::{ConfigError, HubError, IdError, LayoutError};
pub use events::{Event, EventKind};
pub use id::{new_id, SessionId};
pub use types::{CompilerId, EditorId, HubPhase, LanguageId, PaneKind};
