use crate::tmdb::{Genre, SortKey};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Value carried by a picker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerValue {
    Sort(SortKey),
    Genre(Option<u64>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    pub value: PickerValue,
}

/// Result of picker input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
    /// User chose an entry
    Chosen(PickerValue),
    /// User closed the picker without choosing
    Cancel,
}

/// Modal list used for the sort and genre selectors
#[derive(Debug, Clone)]
pub struct PickerOverlay {
    title: &'static str,
    options: Vec<PickerOption>,
    selected: usize,
}

impl PickerOverlay {
    /// Sort selector with the current order highlighted
    pub fn sort(current: SortKey) -> Self {
        let options: Vec<PickerOption> = SortKey::ALL
            .iter()
            .map(|&key| PickerOption {
                label: key.label().to_string(),
                value: PickerValue::Sort(key),
            })
            .collect();
        Self::with_current(" Sort By ", options, PickerValue::Sort(current))
    }

    /// Genre selector: "All Genres" followed by the catalog in TMDB order
    pub fn genre(genres: &[Genre], current: Option<u64>) -> Self {
        let mut options = vec![PickerOption {
            label: ALL_GENRES_LABEL.to_string(),
            value: PickerValue::Genre(None),
        }];
        options.extend(genres.iter().map(|g| PickerOption {
            label: g.name.clone(),
            value: PickerValue::Genre(Some(g.id)),
        }));
        Self::with_current(" Genre ", options, PickerValue::Genre(current))
    }

    fn with_current(title: &'static str, options: Vec<PickerOption>, current: PickerValue) -> Self {
        let selected = options
            .iter()
            .position(|o| o.value == current)
            .unwrap_or(0);
        Self {
            title,
            options,
            selected,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Option<PickerResult> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Enter => self
                .options
                .get(self.selected)
                .map(|o| PickerResult::Chosen(o.value)),
            KeyCode::Esc | KeyCode::Char('q') => Some(PickerResult::Cancel),
            _ => None,
        }
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

/// Render the picker as a popup in the middle of the screen
pub fn render(picker: &PickerOverlay, frame: &mut Frame) {
    let height = (picker.options().len() as u16 + 2).min(frame.area().height);
    let area = super::centered_box(40, height, frame.area());

    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = picker
        .options()
        .iter()
        .map(|o| ListItem::new(format!(" {}", o.label)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(picker.title)
                .title_bottom(
                    Line::from(" Enter select · Esc cancel ").style(Style::default().fg(Color::DarkGray)),
                ),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸");

    let mut state = ListState::default();
    state.select(Some(picker.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
