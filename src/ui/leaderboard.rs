use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Line::from(Span::styled(
        "LEADERBOARD",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if app.leaderboard().is_empty() {
        let empty = Line::from("No quizzes recorded yet".fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_table(frame, chunks[1], app);
    }

    let controls =
        Line::from("esc back  ·  q quit".fg(Color::DarkGray)).alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.config().player.as_str();

    let rows = app.leaderboard().iter().map(|entry| {
        let style = if entry.player == player {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        Row::new(vec![
            Cell::from(format!("#{}", entry.rank)),
            Cell::from(entry.player.clone()),
            Cell::from(entry.total_score.to_string()),
            Cell::from(entry.quizzes_taken.to_string()),
            Cell::from(format!("{}%", entry.average_percentage)),
        ])
        .style(style)
    });

    let header = Row::new(vec!["Rank", "Player", "Score", "Quizzes", "Average"])
        .style(Style::default().fg(Color::DarkGray).bold());

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, area);
}
