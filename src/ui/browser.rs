use crate::app::{App, Body, EMPTY_LIST_MESSAGE, InputMode, NO_RESULTS_MESSAGE};
use crate::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEARCH_PLACEHOLDER: &str = "Search Movies...";

// Border plus highlight symbol on each side of a card.
const CARD_MARGIN: u16 = 4;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(3) + search(3) + filters(3) + movies(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Cinema Sphere",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{} movies]", app.movies.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[0]);

    render_search_bar(app, frame, chunks[1]);
    render_filters(app, frame, chunks[2]);

    // ── Movies ──
    match app.body() {
        Body::NoResults => render_message(frame, chunks[3], NO_RESULTS_MESSAGE, Color::Red),
        Body::Empty => render_message(frame, chunks[3], EMPTY_LIST_MESSAGE, Color::DarkGray),
        Body::Movies => {
            let items = movie_cards(app, chunks[3].width.saturating_sub(CARD_MARGIN));
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(" Movies ")
                        .title_bottom(
                            Line::from(format!(" {} of {} ", app.selected + 1, app.movies.len()))
                                .alignment(Alignment::Right),
                        ),
                )
                .highlight_style(Style::default().bg(Color::Rgb(30, 30, 40)))
                .highlight_symbol("▸ ");

            let mut list_state = ListState::default();
            list_state.select(Some(app.selected));
            frame.render_stateful_widget(list, chunks[3], &mut list_state);
        }
    }

    // ── Status bar ──
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" /", key_style),
        Span::raw(" Search  "),
        Span::styled("s", key_style),
        Span::raw(" Sort  "),
        Span::styled("g", key_style),
        Span::raw(" Genre  "),
        Span::styled("Space", key_style),
        Span::raw(" Read more  "),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[4]);
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = if editing {
        " Search (Enter to go, Esc to cancel): "
    } else {
        " Search (/): "
    };

    let query = if app.search_query.is_empty() && !editing {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.search_query.as_str(), Style::default().fg(Color::White))
    };

    let bar = Paragraph::new(Line::from(vec![Span::styled(label, style), query])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(" Search "),
    );
    frame.render_widget(bar, area);

    if editing {
        frame.set_cursor_position((search_cursor_x(area, label, &app.search_query), area.y + 1));
    }
}

/// Column just past the typed query, kept inside the bar's border.
fn search_cursor_x(area: Rect, label: &str, query: &str) -> u16 {
    let columns = |text: &str| u16::try_from(text.width()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(columns(label))
        .saturating_add(columns(query))
        .min(area.right().saturating_sub(2))
}

fn render_filters(app: &App, frame: &mut Frame, area: Rect) {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" Sort By (s): ", label_style),
        Span::styled(app.sort_by.label(), value_style),
        Span::raw("     "),
        Span::styled("Genre (g): ", label_style),
        Span::styled(app.genre_label(), value_style),
    ]);
    let filters = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filters "),
    );
    frame.render_widget(filters, area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Movies "),
        );
    frame.render_widget(paragraph, area);
}

/// One list item per movie, overview wrapped to `width` columns.
pub fn movie_cards(app: &App, width: u16) -> Vec<ListItem<'static>> {
    app.movies
        .iter()
        .map(|movie| ListItem::new(Text::from(card_lines(app, movie, width))))
        .collect()
}

fn card_lines(app: &App, movie: &Movie, width: u16) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        movie.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = movie.release_year() {
        title.push(Span::styled(
            format!("  ({})", year),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let poster = match movie.poster_url(&app.image_base_url) {
        Some(url) => Span::styled(
            url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::styled("no poster", Style::default().fg(Color::DarkGray)),
    };

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("Rating: {}", movie.vote_average),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(Color::DarkGray)),
            poster,
        ]),
    ];

    lines.extend(
        wrap_text(&app.overview_text(movie), width as usize)
            .into_iter()
            .map(Line::from),
    );

    let toggle = if app.is_expanded(movie.id) {
        "[Show less]"
    } else {
        "[Read more]"
    };
    lines.push(Line::from(Span::styled(
        toggle,
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));
    lines
}

/// Greedy word wrap by display width. Words wider than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
