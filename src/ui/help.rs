use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit application"),
            ("Ctrl+C", "Quit from anywhere"),
        ],
    ),
    (
        "Movies",
        &[
            ("↑/k ↓/j", "Move between movies"),
            ("Space", "Read more / show less"),
            ("/", "Edit the search text"),
            ("s", "Choose sort order"),
            ("g", "Choose genre"),
        ],
    ),
    (
        "Search Bar",
        &[
            ("Enter", "Search TMDB"),
            ("Esc", "Stop editing"),
        ],
    ),
    (
        "Pickers",
        &[
            ("↑/↓", "Move"),
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
        ],
    ),
];

const HELP_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame) {
    let mut help_text = vec![Line::from("")];
    for (section, keys) in BINDINGS {
        help_text.push(Line::from(Span::styled(
            format!("  {}", section),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {:<10}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let area = super::centered_box(HELP_WIDTH, help_text.len() as u16 + 2, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help · Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
