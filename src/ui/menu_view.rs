use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Mode selection screen.
pub fn render(frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let option = Style::default().fg(Color::Red);

    let lines = vec![
        Line::styled("Connect 4", title),
        Line::from(""),
        Line::styled("1. Two Players", option),
        Line::styled("2. Play vs AI", option),
        Line::from(""),
        Line::styled("Q: Quit", Style::default().fg(Color::DarkGray)),
    ];

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(menu, chunks[1]);
}
