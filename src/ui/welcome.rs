use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);

    let config = app.config();
    let question_count = config.count.min(app.pool_size());
    let time_limit = match (config.study_mode, config.time_limit) {
        (true, _) => "Study mode, no timer".to_string(),
        (false, 0) => "No limit".to_string(),
        (false, secs) => format!("{} seconds per question", secs),
    };
    let sound = if app.sound_enabled() { "on" } else { "off" };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SMARTME TEST",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(app.category_name().fg(Color::White)),
        Line::from(
            format!("{} Questions · {}", question_count, config.difficulty)
                .fg(Color::DarkGray),
        ),
        Line::from(config.difficulty.description().fg(Color::DarkGray)),
        Line::from(time_limit.fg(Color::DarkGray)),
        Line::from(
            format!("Player: {} · Sound {}", config.player, sound).fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  b leaderboard  ·  q quit".fg(Color::DarkGray)),
        Line::from(
            "c subject  ·  d difficulty  ·  n questions  ·  t timer  ·  m study  ·  s sound"
                .fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
