// ABOUTME: Command-line arguments for the saasforge binary

use clap::Parser;

/// Terminal front-end for AI-assisted SaaS project generation.
///
/// All flags are optional pre-fills for the wizard form; the binary always
/// launches the TUI.
#[derive(Debug, Parser)]
#[command(name = "saasforge", version, about)]
pub struct Cli {
    /// Pre-fill the project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Pre-fill the project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Pre-select the AI model by identifier (e.g. "gpt-4.1")
    #[arg(short, long)]
    pub model: Option<String>,

    /// Log level filter (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_parse() {
        let cli = Cli::parse_from(["saasforge"]);
        assert!(cli.name.is_none());
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_prefill_flags() {
        let cli = Cli::parse_from(["saasforge", "-n", "Foo", "-d", "Bar", "-m", "gpt-4.1"]);
        assert_eq!(cli.name.as_deref(), Some("Foo"));
        assert_eq!(cli.description.as_deref(), Some("Bar"));
        assert_eq!(cli.model.as_deref(), Some("gpt-4.1"));
    }
}
