//! The pane coordinator.

mod operations;
mod session;
mod settings;
mod startup;
mod types;

pub use settings::HubSettings;
pub use types::Hub;
