//! Keyboard input handling for the figure viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::Viewer;

/// Maps a key event to a viewer action.
///
/// Only [`KeyEventKind::Press`] events act; releases and repeats are ignored.
pub fn handle_key(viewer: &mut Viewer, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => viewer.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => viewer.quit = true,
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => viewer.next_page(),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => viewer.prev_page(),
        _ => {}
    }
}
