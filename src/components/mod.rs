// ABOUTME: UI components for the TUI interface: header, sidebar, form, and code preview

pub mod code_preview;
pub mod header;
pub mod layout;
pub mod project_form;
pub mod sidebar;

pub use code_preview::{CodePreviewComponent, FileEntry, PreviewState};
pub use header::HeaderComponent;
pub use layout::LayoutComponent;
pub use project_form::{FormField, ProjectFormComponent, ProjectFormState};
pub use sidebar::SidebarComponent;
