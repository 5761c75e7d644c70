// ABOUTME: Code preview pane showing generated files with a single-selection browser

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Placeholder shown in the content pane when nothing is selected
const NO_SELECTION_PLACEHOLDER: &str = "Select a file";

/// A single generated file: path plus contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub contents: String,
}

/// State for the preview pane: an insertion-ordered file map and a selection.
///
/// Backed by a `Vec` so the "first file" default is deterministic by
/// construction rather than by map iteration order.
#[derive(Debug, Default)]
pub struct PreviewState {
    files: Vec<FileEntry>,
    selected: Option<usize>,
    /// Vertical scroll offset of the content pane
    pub content_scroll: u16,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file map and select the first entry.
    pub fn set_files(&mut self, files: Vec<FileEntry>) {
        self.selected = if files.is_empty() { None } else { Some(0) };
        self.files = files;
        self.content_scroll = 0;
    }

    /// Populate the mock structure shown until real generation output exists.
    pub fn load_mock_files(&mut self) {
        let package_json = serde_json::json!({
            "name": "my-saas-app",
            "version": "0.1.0",
            "private": true,
        });
        // to_string_pretty on a literal cannot fail
        let package_json = serde_json::to_string_pretty(&package_json)
            .unwrap_or_else(|_| String::from("{}"));

        self.set_files(vec![
            FileEntry {
                path: "package.json".to_string(),
                contents: package_json,
            },
            FileEntry {
                path: "src/app/page.tsx".to_string(),
                contents: "export default function Home() {\n  return <div>Hello World</div>;\n}"
                    .to_string(),
            },
        ]);
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Path of the currently selected file, if any
    pub fn selected_path(&self) -> Option<&str> {
        self.selected.and_then(|i| self.files.get(i)).map(|f| f.path.as_str())
    }

    /// Contents of the currently selected file, if any
    pub fn selected_contents(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.files.get(i))
            .map(|f| f.contents.as_str())
    }

    /// Select a file by path. Unknown paths leave the selection unchanged.
    pub fn select(&mut self, path: &str) {
        if let Some(index) = self.files.iter().position(|f| f.path == path) {
            self.selected = Some(index);
            self.content_scroll = 0;
        }
    }

    /// Move the selection to the next file
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.files.len() {
                self.selected = Some(index + 1);
                self.content_scroll = 0;
            }
        }
    }

    /// Move the selection to the previous file
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            if index > 0 {
                self.selected = Some(index - 1);
                self.content_scroll = 0;
            }
        }
    }

    pub fn scroll_content_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn scroll_content_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }
}

/// Component rendering the two-pane file browser.
pub struct CodePreviewComponent {
    file_list_state: ListState,
}

impl CodePreviewComponent {
    pub fn new() -> Self {
        Self {
            file_list_state: ListState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &PreviewState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(area);

        self.render_file_list(frame, chunks[0], state);
        self.render_contents(frame, chunks[1], state);
    }

    fn render_file_list(&mut self, frame: &mut Frame, area: Rect, state: &PreviewState) {
        let items: Vec<ListItem> = state
            .files()
            .iter()
            .map(|file| {
                let is_selected = state.selected_path() == Some(file.path.as_str());
                if is_selected {
                    ListItem::new(Line::from(vec![
                        Span::styled(" ▶ ", Style::default().fg(SELECTION_GREEN)),
                        Span::styled(
                            file.path.as_str(),
                            Style::default()
                                .fg(SELECTION_GREEN)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::styled("   ", Style::default()),
                        Span::styled(file.path.as_str(), Style::default().fg(SOFT_WHITE)),
                    ]))
                }
            })
            .collect();

        let title = Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                format!("Files ({})", state.files().len()),
                Style::default().fg(CORNFLOWER_BLUE),
            ),
            Span::styled(" ", Style::default()),
        ]);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .title(title)
                    .style(Style::default().bg(DARK_BG)),
            )
            .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG));

        let selected_index = state
            .selected_path()
            .and_then(|path| state.files().iter().position(|f| f.path == path));
        self.file_list_state.select(selected_index);
        frame.render_stateful_widget(list, area, &mut self.file_list_state);
    }

    fn render_contents(&self, frame: &mut Frame, area: Rect, state: &PreviewState) {
        let title = match state.selected_path() {
            Some(path) => Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(path, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" ", Style::default()),
            ]),
            None => Line::from(Span::styled(" Preview ", Style::default().fg(MUTED_GRAY))),
        };

        let body = state
            .selected_contents()
            .unwrap_or(NO_SELECTION_PLACEHOLDER);

        let lines: Vec<Line> = body
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(SOFT_WHITE))))
            .collect();

        let contents = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .title(title)
                    .style(Style::default().bg(PANEL_BG)),
            )
            .wrap(Wrap { trim: false })
            .scroll((state.content_scroll, 0));
        frame.render_widget(contents, area);
    }
}

impl Default for CodePreviewComponent {
    fn default() -> Self {
        Self::new()
    }
}
