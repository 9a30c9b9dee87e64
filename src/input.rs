use crate::app::{App, InputMode};
use crate::fetch::FetchRequest;
use crate::ui::picker::PickerResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key press. Returns the request to dispatch, if the key caused one.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    if let Some(picker) = app.picker.as_mut() {
        return match picker.handle_key(key) {
            Some(PickerResult::Chosen(value)) => Some(app.choose(value)),
            Some(PickerResult::Cancel) => {
                app.picker = None;
                None
            }
            None => None,
        };
    }

    if app.input_mode == InputMode::Editing {
        return handle_search_input(app, key);
    }

    // Help toggle (global)
    if key.code == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return None;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return None;
    }

    handle_browser_key(app, key)
}

fn handle_search_input(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    match key.code {
        KeyCode::Enter => return Some(app.submit_search()),
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
        }
        _ => {}
    }
    None
}

fn handle_browser_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('s') => app.open_sort_picker(),
        KeyCode::Char('g') => app.open_genre_picker(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        _ => {}
    }
    None
}
