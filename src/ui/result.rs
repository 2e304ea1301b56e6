use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::grade::{is_pass, share_text, Grade};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let percentage = session.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], app, app.result_scroll());
    render_share(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn get_grade_color(percentage: u32) -> Color {
    match Grade::from_percentage(percentage) {
        Grade::Outstanding => Color::Green,
        Grade::Great => Color::Cyan,
        Grade::Good => Color::Yellow,
        Grade::KeepPracticing => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    percentage: u32,
    grade_color: Color,
) {
    let session = app.session();
    let title = if is_pass(percentage) {
        "QUIZ COMPLETED!"
    } else {
        "QUIZ COMPLETED"
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                session.score(),
                session.total_questions(),
                percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Grade::from_percentage(percentage).message().fg(Color::Gray)),
        Line::from(
            format!("{} · {}", app.category_name(), app.config().difficulty)
                .fg(Color::DarkGray),
        ),
    ];
    if let Some(notice) = app.notice() {
        content.push(Line::from(notice.fg(Color::Red)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let session = app.session();
    let lines: Vec<Line> = session
        .answers()
        .iter()
        .zip(session.questions().iter())
        .enumerate()
        .map(|(index, (answer, question))| {
            let (symbol, color) = match answer {
                Some(record) if record.correct => ("+", Color::Green),
                Some(record) if record.timed_out => ("t", Color::Yellow),
                _ => ("-", Color::Red),
            };

            let preview = truncate_question(&question.text);

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_share(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let text = share_text(
        session.score(),
        session.total_questions(),
        &app.category_name(),
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
        .italic();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r new quiz  ·  b leaderboard  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("short"), "short");
        let long = "x".repeat(60);
        let truncated = truncate_question(&long);
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }
}
