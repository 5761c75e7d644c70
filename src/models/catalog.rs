// ABOUTME: Option catalogs offered by the form: AI models and tech-stack tokens

use serde::{Deserialize, Serialize};

/// AI models the generator can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelOption {
    ClaudeSonnet,
    Gpt41,
    GeminiPro,
}

impl ModelOption {
    /// All selectable models, default first
    pub fn all() -> &'static [ModelOption] {
        &[Self::ClaudeSonnet, Self::Gpt41, Self::GeminiPro]
    }

    pub fn default_model() -> Self {
        Self::ClaudeSonnet
    }

    /// Model identifier sent to the generator backend
    pub fn id(&self) -> &'static str {
        match self {
            Self::ClaudeSonnet => "claude-3-7-sonnet-20250219",
            Self::Gpt41 => "gpt-4.1",
            Self::GeminiPro => "gemini-2.5-pro-preview-03-25",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ClaudeSonnet => "Claude 3.7 Sonnet",
            Self::Gpt41 => "GPT-4.1",
            Self::GeminiPro => "Gemini 2.5 Pro",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClaudeSonnet => "High quality code with excellent documentation",
            Self::Gpt41 => "Fast and reliable code generation",
            Self::GeminiPro => "Advanced reasoning and error-free code",
        }
    }

    /// Resolve a model from its identifier, if known
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }
}

/// A selectable technology token for the project's tech stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechOption {
    /// Token stored in the project config (e.g. "next")
    pub token: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl TechOption {
    /// All stack tokens offered by the form, in display order
    pub fn all() -> &'static [TechOption] {
        &[
            TechOption {
                token: "next",
                label: "Next.js",
                description: "Modern full-stack React framework",
            },
            TechOption {
                token: "supabase",
                label: "Supabase",
                description: "Serverless backend with auth and realtime",
            },
            TechOption {
                token: "firebase",
                label: "Firebase",
                description: "Scalable app platform with Firestore",
            },
            TechOption {
                token: "mongodb",
                label: "MongoDB",
                description: "Document database with REST API",
            },
            TechOption {
                token: "postgres",
                label: "PostgreSQL",
                description: "Relational database",
            },
            TechOption {
                token: "tailwind",
                label: "Tailwind CSS",
                description: "Utility-first styling",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_claude() {
        assert_eq!(ModelOption::default_model(), ModelOption::ClaudeSonnet);
        assert_eq!(ModelOption::all()[0], ModelOption::ClaudeSonnet);
    }

    #[test]
    fn test_model_id_round_trip() {
        for model in ModelOption::all() {
            assert_eq!(ModelOption::from_id(model.id()), Some(*model));
        }
        assert_eq!(ModelOption::from_id("gpt-3"), None);
    }

    #[test]
    fn test_tech_tokens_unique() {
        let options = TechOption::all();
        for (i, a) in options.iter().enumerate() {
            for b in &options[i + 1..] {
                assert_ne!(a.token, b.token);
            }
        }
    }
}
