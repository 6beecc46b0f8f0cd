mod config;
mod insert;
mod operations;
mod traversal;
mod types;

pub use config::ItemConfig;
pub use types::*;

#[cfg(test)]
mod tests;
