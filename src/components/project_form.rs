// ABOUTME: Project configuration form with text inputs, tech-stack toggles, and model selector

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{ModelOption, ProjectConfig, TechOption};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const INPUT_BG: Color = Color::Rgb(35, 35, 45);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(255, 100, 100);
const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);

/// Fields of the form, in focus-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    TechStack,
    Model,
    ApiKey,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            Self::Name,
            Self::Description,
            Self::TechStack,
            Self::Model,
            Self::ApiKey,
        ]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::TechStack,
            Self::TechStack => Self::Model,
            Self::Model => Self::ApiKey,
            Self::ApiKey => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::ApiKey,
            Self::Description => Self::Name,
            Self::TechStack => Self::Description,
            Self::Model => Self::TechStack,
            Self::ApiKey => Self::Model,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Project Name",
            Self::Description => "Description",
            Self::TechStack => "Tech Stack",
            Self::Model => "AI Model",
            Self::ApiKey => "API Key",
        }
    }

    /// Whether this field takes character input
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Description | Self::ApiKey)
    }
}

/// State for the project form.
#[derive(Debug)]
pub struct ProjectFormState {
    pub focused_field: FormField,
    pub name: String,
    pub description: String,
    pub api_key: String,
    /// Cursor position within the focused text field
    pub cursor_position: usize,
    /// Tokens toggled on, in toggle order
    pub selected_tech: Vec<String>,
    /// Highlighted row in the tech stack list
    pub tech_cursor: usize,
    pub selected_model_index: usize,
    /// Validation message shown under the form
    pub error_message: Option<String>,
}

impl ProjectFormState {
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Name,
            name: String::new(),
            description: String::new(),
            api_key: String::new(),
            cursor_position: 0,
            selected_tech: Vec::new(),
            tech_cursor: 0,
            selected_model_index: 0,
            error_message: None,
        }
    }

    fn focused_text(&self) -> Option<&String> {
        match self.focused_field {
            FormField::Name => Some(&self.name),
            FormField::Description => Some(&self.description),
            FormField::ApiKey => Some(&self.api_key),
            _ => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::ApiKey => Some(&mut self.api_key),
            _ => None,
        }
    }

    /// Move focus to the next field, placing the cursor at the end of its text
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.cursor_position = self.focused_text().map_or(0, String::len);
    }

    /// Move focus to the previous field
    pub fn previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
        self.cursor_position = self.focused_text().map_or(0, String::len);
    }

    /// Handle text input character for the focused field
    pub fn input_char(&mut self, c: char) {
        let position = self.cursor_position;
        if let Some(text) = self.focused_text_mut() {
            if position <= text.len() && text.is_char_boundary(position) {
                text.insert(position, c);
                self.cursor_position = position + c.len_utf8();
            }
        }
        self.error_message = None;
    }

    /// Handle backspace in the focused field
    pub fn backspace(&mut self) {
        let position = self.cursor_position;
        if position == 0 {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            let prev = text[..position]
                .char_indices()
                .next_back()
                .map(|(i, _)| i);
            if let Some(prev) = prev {
                text.remove(prev);
                self.cursor_position = prev;
            }
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(text) = self.focused_text() {
            if let Some((i, _)) = text[..self.cursor_position].char_indices().next_back() {
                self.cursor_position = i;
            }
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(text) = self.focused_text() {
            if self.cursor_position < text.len() {
                let next = text[self.cursor_position..]
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);
                self.cursor_position += next;
            }
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.focused_text().map_or(0, String::len);
    }

    /// Move the tech-stack highlight up
    pub fn tech_cursor_up(&mut self) {
        self.tech_cursor = self.tech_cursor.saturating_sub(1);
    }

    /// Move the tech-stack highlight down
    pub fn tech_cursor_down(&mut self) {
        if self.tech_cursor + 1 < TechOption::all().len() {
            self.tech_cursor += 1;
        }
    }

    /// Toggle the highlighted tech token on or off
    pub fn toggle_tech(&mut self) {
        let token = TechOption::all()[self.tech_cursor].token;
        if let Some(index) = self.selected_tech.iter().position(|t| t == token) {
            self.selected_tech.remove(index);
        } else {
            self.selected_tech.push(token.to_string());
        }
    }

    pub fn is_tech_selected(&self, token: &str) -> bool {
        self.selected_tech.iter().any(|t| t == token)
    }

    pub fn next_model(&mut self) {
        self.selected_model_index = (self.selected_model_index + 1) % ModelOption::all().len();
    }

    pub fn previous_model(&mut self) {
        let count = ModelOption::all().len();
        self.selected_model_index = (self.selected_model_index + count - 1) % count;
    }

    pub fn selected_model(&self) -> ModelOption {
        ModelOption::all()[self.selected_model_index]
    }

    /// Build the project configuration exactly as entered, no transformation
    pub fn to_config(&self) -> ProjectConfig {
        ProjectConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            tech_stack: self.selected_tech.clone(),
            model: self.selected_model().id().to_string(),
            api_key: self.api_key.clone(),
        }
    }
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Component rendering the form panel.
pub struct ProjectFormComponent;

impl ProjectFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ProjectFormState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .title(Span::styled(
                " Configure Your Project ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(DARK_BG));
        frame.render_widget(block.clone(), area);

        let inner = block.inner(area);
        let error_height = u16::from(state.error_message.is_some());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),            // Name
                Constraint::Length(3),            // Description
                Constraint::Min(8),               // Tech stack list
                Constraint::Length(3),            // Model selector
                Constraint::Length(3),            // API key
                Constraint::Length(error_height), // Validation error
                Constraint::Length(2),            // Footer
            ])
            .split(inner);

        self.render_text_input(
            frame,
            chunks[0],
            state,
            FormField::Name,
            &state.name,
            "my-saas-app...",
            false,
        );
        self.render_text_input(
            frame,
            chunks[1],
            state,
            FormField::Description,
            &state.description,
            "What should this application do?",
            false,
        );
        self.render_tech_stack(frame, chunks[2], state);
        self.render_model_selector(frame, chunks[3], state);
        self.render_text_input(
            frame,
            chunks[4],
            state,
            FormField::ApiKey,
            &state.api_key,
            "sk-...",
            true,
        );

        if let Some(ref error) = state.error_message {
            let error_line = Paragraph::new(Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(ERROR_RED)),
                Span::styled(error.as_str(), Style::default().fg(ERROR_RED)),
            ]));
            frame.render_widget(error_line, chunks[5]);
        }

        self.render_footer(frame, chunks[6]);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_text_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &ProjectFormState,
        field: FormField,
        value: &str,
        placeholder: &str,
        masked: bool,
    ) {
        let is_focused = state.focused_field == field;
        let border_color = if is_focused { SELECTION_GREEN } else { SUBDUED_BORDER };

        let display: String = if masked {
            value.chars().map(|_| '•').collect()
        } else {
            value.to_string()
        };

        let text = if display.is_empty() && !is_focused {
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
                ),
            ])
        } else if is_focused {
            // Block cursor inserted at the editing position; the masked
            // display uses one glyph per char so split by char count
            let cursor_chars = value
                .get(..state.cursor_position)
                .map_or(0, |s| s.chars().count());
            let before: String = display.chars().take(cursor_chars).collect();
            let after: String = display.chars().skip(cursor_chars).collect();
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(before, Style::default().fg(SOFT_WHITE)),
                Span::styled("█", Style::default().fg(SELECTION_GREEN)),
                Span::styled(after, Style::default().fg(SOFT_WHITE)),
            ])
        } else {
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(display, Style::default().fg(SOFT_WHITE)),
            ])
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    format!(" {} ", field.label()),
                    Style::default().fg(border_color),
                ))
                .style(Style::default().bg(INPUT_BG)),
        );
        frame.render_widget(input, area);
    }

    fn render_tech_stack(&self, frame: &mut Frame, area: Rect, state: &ProjectFormState) {
        let is_focused = state.focused_field == FormField::TechStack;
        let border_color = if is_focused { SELECTION_GREEN } else { SUBDUED_BORDER };

        let items: Vec<ListItem> = TechOption::all()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let highlighted = is_focused && index == state.tech_cursor;
                let checked = state.is_tech_selected(option.token);

                let indicator = if highlighted { " ▶ " } else { "   " };
                let checkbox = if checked { "◉" } else { "○" };

                let label_style = if checked {
                    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)
                } else if highlighted {
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };

                let line = Line::from(vec![
                    Span::styled(indicator, Style::default().fg(SELECTION_GREEN)),
                    Span::styled(
                        format!("{checkbox} "),
                        Style::default().fg(if checked { SELECTION_GREEN } else { MUTED_GRAY }),
                    ),
                    Span::styled(option.label, label_style),
                    Span::styled(" — ", Style::default().fg(MUTED_GRAY)),
                    Span::styled(option.description, Style::default().fg(MUTED_GRAY)),
                ]);

                if highlighted {
                    ListItem::new(line).style(Style::default().bg(LIST_HIGHLIGHT_BG))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let title = Line::from(vec![
            Span::styled(" Tech Stack ", Style::default().fg(border_color)),
            Span::styled(
                format!("({} selected) ", state.selected_tech.len()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]);

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(title)
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(list, area);
    }

    fn render_model_selector(&self, frame: &mut Frame, area: Rect, state: &ProjectFormState) {
        let is_focused = state.focused_field == FormField::Model;
        let border_color = if is_focused { SELECTION_GREEN } else { SUBDUED_BORDER };

        let mut spans = vec![Span::styled(" ", Style::default())];
        for (index, model) in ModelOption::all().iter().enumerate() {
            let is_selected = index == state.selected_model_index;

            if index > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(MUTED_GRAY)));
            }

            if is_selected {
                spans.push(Span::styled("◀ ", Style::default().fg(SELECTION_GREEN)));
                spans.push(Span::styled(
                    model.display_name(),
                    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(" ▶", Style::default().fg(SELECTION_GREEN)));
            } else {
                spans.push(Span::styled(
                    model.display_name(),
                    Style::default().fg(SOFT_WHITE),
                ));
            }
        }

        let selector = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(" AI Model ", Style::default().fg(border_color)))
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(selector, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer_spans = vec![
            Span::styled("Tab", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" Next field", Style::default().fg(MUTED_GRAY)),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Space", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" Toggle", Style::default().fg(MUTED_GRAY)),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Enter", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
            Span::styled(" Generate", Style::default().fg(MUTED_GRAY)),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Esc", Style::default().fg(ERROR_RED)),
            Span::styled(" Quit", Style::default().fg(MUTED_GRAY)),
        ];

        let footer = Paragraph::new(Line::from(footer_spans)).alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}

impl Default for ProjectFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
