// ABOUTME: Project configuration collected by the wizard form

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a form submission cannot start a build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("An API key is required to start generation")]
    MissingApiKey,
}

/// Configuration for a single generation run, captured verbatim from the form.
///
/// Replaced wholesale on every successful submission; there are no merge
/// semantics and no persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    /// Ordered set of technology tokens (e.g. "next", "postgres").
    pub tech_stack: Vec<String>,
    /// Model identifier, e.g. "claude-3-7-sonnet-20250219".
    pub model: String,
    pub api_key: String,
}

impl ProjectConfig {
    /// Validate the configuration before it is allowed into the store.
    ///
    /// The form enforces only what the original form enforced: a name and a
    /// credential. Description and tech stack may be empty.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::EmptyName);
        }
        if self.api_key.trim().is_empty() {
            return Err(SubmitError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ProjectConfig {
        ProjectConfig {
            name: "my-saas-app".to_string(),
            description: "A test app".to_string(),
            tech_stack: vec!["next".to_string(), "supabase".to_string()],
            model: "claude-3-7-sonnet-20250219".to_string(),
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = valid_config();
        config.name = "   ".to_string();
        assert_eq!(config.validate(), Err(SubmitError::EmptyName));
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let mut config = valid_config();
        config.api_key = String::new();
        assert_eq!(config.validate(), Err(SubmitError::MissingApiKey));
    }

    #[test]
    fn test_empty_description_and_stack_allowed() {
        let mut config = valid_config();
        config.description = String::new();
        config.tech_stack.clear();
        assert!(config.validate().is_ok());
    }
}
