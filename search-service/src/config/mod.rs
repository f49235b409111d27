//! Configuration and dependency wiring for the search service.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::Settings;
