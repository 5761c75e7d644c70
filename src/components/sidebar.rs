// ABOUTME: Build progress sidebar listing the five generation phases

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::WizardStep;
use crate::models::BuildPhase;

// Color palette from TUI style guide
const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Sidebar component rendering the phase list.
///
/// A pure function of the wizard step: all five phases render every frame,
/// and the labels take the muted style while a build is in flight. There is
/// no per-phase completion tracking.
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Recommended width for the sidebar pane
    pub fn recommended_width() -> u16 {
        34
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        step: WizardStep,
        show_descriptions: bool,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let phases = BuildPhase::all();
        let phase_height = if show_descriptions { 3 } else { 2 };
        let mut constraints = vec![Constraint::Length(2)]; // Section header
        constraints.extend(phases.iter().map(|_| Constraint::Length(phase_height)));
        constraints.push(Constraint::Min(0));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        self.render_section_header(frame, layout[0]);

        for (index, phase) in phases.iter().enumerate() {
            self.render_phase(frame, layout[index + 1], *phase, step, show_descriptions);
        }
    }

    fn render_section_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                "BUILD PROGRESS",
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::DIM),
            ),
        ]))
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(header, area);
    }

    fn render_phase(
        &self,
        frame: &mut Frame,
        area: Rect,
        phase: BuildPhase,
        step: WizardStep,
        show_description: bool,
    ) {
        // Mirrors the original: every label mutes while building
        let (icon_style, label_style) = if step == WizardStep::Building {
            (
                Style::default().fg(MUTED_GRAY),
                Style::default().fg(MUTED_GRAY),
            )
        } else {
            (
                Style::default().fg(GOLD),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(phase.icon(), icon_style),
            Span::styled("  ", Style::default()),
            Span::styled(phase.label(), label_style),
        ])];
        if show_description {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(phase.description(), Style::default().fg(MUTED_GRAY)),
            ]));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(DARK_BG));
        frame.render_widget(paragraph, area);
    }

    /// The phase lines the sidebar would render, used by tests and kept in
    /// sync with `render_phase`.
    pub fn phase_labels() -> Vec<&'static str> {
        BuildPhase::all().iter().map(BuildPhase::label).collect()
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_lists_five_phases_in_fixed_order() {
        let labels = SidebarComponent::phase_labels();
        assert_eq!(
            labels,
            vec![
                "Project Initialization",
                "UI Generation",
                "Authentication",
                "Data Layer",
                "Development Server",
            ]
        );
    }

}
