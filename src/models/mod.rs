// ABOUTME: Data models for the project wizard: configuration, phases, and option catalogs

pub mod catalog;
pub mod phase;
pub mod project;

pub use catalog::{ModelOption, TechOption};
pub use phase::BuildPhase;
pub use project::{ProjectConfig, SubmitError};
