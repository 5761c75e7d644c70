// ABOUTME: Integration tests for the code preview file browser

use pretty_assertions::assert_eq;
use saasforge::components::{FileEntry, PreviewState};

#[test]
fn test_initial_selection_is_literal_first_key() {
    let mut state = PreviewState::new();
    state.load_mock_files();

    // Pinned to the literal first insertion, independent of any map
    // iteration order
    assert_eq!(state.selected_path(), Some("package.json"));
}

#[test]
fn test_selecting_absent_path_does_not_change_selection() {
    let mut state = PreviewState::new();
    state.load_mock_files();
    state.select("src/app/page.tsx");

    state.select("src/missing.ts");
    assert_eq!(state.selected_path(), Some("src/app/page.tsx"));
}

#[test]
fn test_placeholder_when_nothing_selected() {
    let state = PreviewState::new();
    assert_eq!(state.selected_contents(), None);
}

#[test]
fn test_custom_file_map_preserves_insertion_order() {
    let mut state = PreviewState::new();
    state.set_files(vec![
        FileEntry {
            path: "README.md".to_string(),
            contents: "# hello".to_string(),
        },
        FileEntry {
            path: "Cargo.toml".to_string(),
            contents: "[package]".to_string(),
        },
    ]);

    assert_eq!(state.selected_path(), Some("README.md"));
    let paths: Vec<&str> = state.files().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["README.md", "Cargo.toml"]);
}

#[test]
fn test_keyboard_navigation_moves_selection() {
    let mut state = PreviewState::new();
    state.load_mock_files();

    state.select_next();
    assert_eq!(state.selected_path(), Some("src/app/page.tsx"));
    state.select_previous();
    assert_eq!(state.selected_path(), Some("package.json"));
}
