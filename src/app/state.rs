// ABOUTME: Application state for the wizard: step controller, project store, and notifications

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{error, info};

use crate::components::{PreviewState, ProjectFormState};
use crate::config::AppConfig;
use crate::models::{ModelOption, ProjectConfig, SubmitError};

/// The two wizard steps gating which content panel is shown.
///
/// There is deliberately no terminal "done"/"failed" state: the front-end
/// never receives a completion signal, so `Building` persists until quit or
/// until a failed submission reverts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Form,
    Building,
}

/// Toast message severity. Durations and icons are keyed off the type so
/// every toast of a kind behaves the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationType {
    /// How long a toast of this type stays on screen. Errors linger longest
    /// since they carry the validation detail.
    pub fn display_duration(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(3),
            Self::Error => Duration::from_secs(6),
            Self::Info => Duration::from_secs(4),
            Self::Warning => Duration::from_secs(5),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓ ",
            Self::Error => "✗ ",
            Self::Info => "ℹ ",
            Self::Warning => "⚠ ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.notification_type.display_duration()
    }
}

/// Actions queued by event handlers and processed on the next tick.
///
/// The build start is declared async for parity with a future backend hookup
/// even though it currently awaits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncAction {
    StartBuild,
}

/// All wizard state. Single writer (the event loop), no locking needed.
#[derive(Debug)]
pub struct AppState {
    pub wizard_step: WizardStep,
    /// Latest submitted configuration; `None` before the first submission
    project: Option<ProjectConfig>,
    pub form_state: ProjectFormState,
    pub preview_state: PreviewState,
    pub notifications: Vec<Notification>,
    pub pending_async_action: Option<AsyncAction>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            wizard_step: WizardStep::Form,
            project: None,
            form_state: ProjectFormState::new(),
            preview_state: PreviewState::new(),
            notifications: Vec::new(),
            pending_async_action: None,
            should_quit: false,
        }
    }

    /// The latest submitted project configuration
    pub fn project(&self) -> Option<&ProjectConfig> {
        self.project.as_ref()
    }

    /// Replace the stored configuration wholesale. No merge semantics.
    pub fn set_project(&mut self, config: ProjectConfig) {
        self.project = Some(config);
    }

    /// Submit the form: validate, flip the step, write the store, and queue
    /// the build start.
    ///
    /// Validation runs before the store is written, so a failed submission
    /// leaves any previously stored project untouched.
    pub fn submit_project(&mut self) -> Result<(), SubmitError> {
        let config = self.form_state.to_config();
        if let Err(e) = config.validate() {
            self.form_state.error_message = Some(e.to_string());
            self.add_error_notification(format!("Failed to start project creation: {e}"));
            return Err(e);
        }

        info!(project = %config.name, model = %config.model, "Submitting project configuration");

        // Step flips before the async work starts, as the original does
        self.wizard_step = WizardStep::Building;
        self.set_project(config);
        self.pending_async_action = Some(AsyncAction::StartBuild);
        self.add_info_notification(
            "Project creation started: your project is being generated...".to_string(),
        );
        Ok(())
    }

    /// Revert to the form after a failed build start. The store retains the
    /// last attempted write; intent in the source is unclear, so it is not
    /// rolled back.
    pub fn revert_failed_build(&mut self, reason: &str) {
        error!(reason = %reason, "Build start failed, reverting to form");
        self.wizard_step = WizardStep::Form;
        self.add_error_notification("Failed to start project creation".to_string());
    }

    /// Apply CLI pre-fill values to the form
    pub fn apply_prefill(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
        model: Option<&str>,
    ) {
        if let Some(name) = name {
            self.form_state.name = name.to_string();
        }
        if let Some(description) = description {
            self.form_state.description = description.to_string();
        }
        if let Some(model) = model {
            match ModelOption::from_id(model) {
                Some(option) => {
                    self.form_state.selected_model_index = ModelOption::all()
                        .iter()
                        .position(|m| *m == option)
                        .unwrap_or(0);
                }
                None => {
                    self.add_warning_notification(format!("Unknown model '{model}', using default"));
                }
            }
        }
    }

    /// Add a notification to the notification queue
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn add_success_notification(&mut self, message: String) {
        self.add_notification(Notification::success(message));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        self.add_notification(Notification::info(message));
    }

    pub fn add_warning_notification(&mut self, message: String) {
        self.add_notification(Notification::warning(message));
    }

    /// Notifications still within their display window
    pub fn current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }

    /// Drop expired notifications from the queue
    pub fn prune_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application wrapper owning the state and configuration.
pub struct App {
    pub state: AppState,
    pub config: AppConfig,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            config: AppConfig::default(),
        }
    }

    /// Load configuration and apply its defaults to the initial form
    pub async fn init(&mut self) {
        match AppConfig::load() {
            Ok(config) => {
                if let Some(option) = ModelOption::from_id(&config.generator.default_model) {
                    self.state.form_state.selected_model_index = ModelOption::all()
                        .iter()
                        .position(|m| *m == option)
                        .unwrap_or(0);
                }
                self.config = config;
            }
            Err(e) => {
                info!("Using default configuration: {e:#}");
            }
        }

        // First run: write the defaults so users have a file to edit
        if !AppConfig::config_path().exists() {
            if let Err(e) = self.config.save() {
                info!("Could not write default config: {e:#}");
            }
        }
    }

    /// Process queued async actions and housekeeping for one tick
    pub async fn tick(&mut self) -> Result<()> {
        if let Some(action) = self.state.pending_async_action.take() {
            match action {
                AsyncAction::StartBuild => {
                    if let Err(e) = self.start_build().await {
                        self.state.revert_failed_build(&format!("{e:#}"));
                    }
                }
            }
        }

        self.state.prune_expired_notifications();
        Ok(())
    }

    /// Start the (notional) build.
    ///
    /// Declared async for the future backend hookup; today it populates the
    /// mock preview structure and returns without awaiting anything.
    async fn start_build(&mut self) -> Result<()> {
        let name = self
            .state
            .project()
            .map_or_else(|| "<unnamed>".to_string(), |p| p.name.clone());
        info!(project = %name, "Starting build");

        self.state.preview_state.load_mock_files();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
