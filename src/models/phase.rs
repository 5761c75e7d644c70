// ABOUTME: Build pipeline phases shown in the progress sidebar

/// The five phases of a generation run, in display order.
///
/// The sidebar renders all of them every frame; no per-phase completion is
/// tracked because the front-end never receives progress updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Init,
    Ui,
    Auth,
    Data,
    Server,
}

impl BuildPhase {
    /// Get all phases in fixed display order
    pub fn all() -> &'static [BuildPhase] {
        &[Self::Init, Self::Ui, Self::Auth, Self::Data, Self::Server]
    }

    /// Get the display icon for this phase
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Init => "◎",
            Self::Ui => "▤",
            Self::Auth => "⚿",
            Self::Data => "◫",
            Self::Server => "⇅",
        }
    }

    /// Get the display label for this phase
    pub fn label(&self) -> &'static str {
        match self {
            Self::Init => "Project Initialization",
            Self::Ui => "UI Generation",
            Self::Auth => "Authentication",
            Self::Data => "Data Layer",
            Self::Server => "Development Server",
        }
    }

    /// Get the one-line description for this phase
    pub fn description(&self) -> &'static str {
        match self {
            Self::Init => "Setting up project structure",
            Self::Ui => "Creating components and layouts",
            Self::Auth => "Implementing auth system",
            Self::Data => "Setting up database and models",
            Self::Server => "Starting local environment",
        }
    }
}
