// ABOUTME: Main layout component arranging header, sidebar, content panel, and notifications

use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::{CodePreviewComponent, HeaderComponent, ProjectFormComponent, SidebarComponent};
use crate::app::state::{AppState, NotificationType, WizardStep};
use crate::config::AppConfig;

// Premium color palette (TUI Style Guide)
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const ERROR_RED: Color = Color::Rgb(230, 100, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);

pub struct LayoutComponent {
    header: HeaderComponent,
    sidebar: SidebarComponent,
    project_form: ProjectFormComponent,
    code_preview: CodePreviewComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            sidebar: SidebarComponent::new(),
            project_form: ProjectFormComponent::new(),
            code_preview: CodePreviewComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState, config: &AppConfig) {
        let area = frame.size();
        frame.render_widget(
            Block::default().style(Style::default().bg(DARK_BG)),
            area,
        );

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HeaderComponent::height()),
                Constraint::Min(0),
            ])
            .split(area);

        self.header.render(frame, vertical[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SidebarComponent::recommended_width()),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        self.sidebar.render(
            frame,
            body[0],
            state.wizard_step,
            config.ui_preferences.show_phase_descriptions,
        );

        // The content panel swaps between the form and the preview
        match state.wizard_step {
            WizardStep::Form => {
                self.project_form.render(frame, body[1], &state.form_state);
            }
            WizardStep::Building => {
                self.code_preview.render(frame, body[1], &state.preview_state);
            }
        }

        self.render_notifications(frame, area, state);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Stack notifications in the top-right corner
        let notification_width = 50u16.min(area.width.saturating_sub(2));
        for (index, notification) in notifications.iter().enumerate() {
            let y_offset = index as u16 * 3;
            if y_offset + 3 > area.height.saturating_sub(1) {
                break;
            }

            let toast_area = Rect {
                x: area.width.saturating_sub(notification_width + 2),
                y: 1 + y_offset,
                width: notification_width,
                height: 3,
            };

            let color = match notification.notification_type {
                NotificationType::Success => SELECTION_GREEN,
                NotificationType::Error => ERROR_RED,
                NotificationType::Warning => WARNING_ORANGE,
                NotificationType::Info => CORNFLOWER_BLUE,
            };

            let toast = Paragraph::new(Line::from(vec![
                Span::styled(
                    notification.notification_type.icon(),
                    Style::default().fg(color),
                ),
                Span::styled(
                    notification.message.as_str(),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(DARK_BG)),
            );

            frame.render_widget(Clear, toast_area);
            frame.render_widget(toast, toast_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
