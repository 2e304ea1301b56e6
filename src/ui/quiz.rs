use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, Feedback};
use crate::models::Question;
use crate::quiz::grade::{format_time, URGENT_SECONDS};

const OPTION_LABELS: [char; 6] = ['1', '2', '3', '4', '5', '6'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &question.text);
    render_options(frame, chunks[3], question, app);
    if let Some(feedback) = app.feedback() {
        render_feedback(frame, chunks[4], &feedback, question.explanation.as_deref());
    }
    render_controls(frame, chunks[5], app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let position = format!(
        "Question {} of {}",
        session.current_question_number(),
        session.total_questions()
    );
    frame.render_widget(Paragraph::new(position).fg(Color::White).bold(), columns[0]);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .alignment(Alignment::Center)
        .fg(Color::Cyan);
    frame.render_widget(score, columns[1]);

    if session.time_limit() > 0 {
        let remaining = session.time_remaining();
        let style = if remaining < URGENT_SECONDS {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let timer = Paragraph::new(format_time(remaining))
            .alignment(Alignment::Right)
            .style(style);
        frame.render_widget(timer, columns[2]);
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let ratio = if session.total_questions() == 0 {
        0.0
    } else {
        session.current_index() as f64 / session.total_questions() as f64
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .label("")
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let session = app.session();
    let submitted = session.is_submitted();
    let selected = session.selected_answer();

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let is_correct = submitted && question.is_correct(option);
        let is_wrong = submitted && is_selected && !is_correct;

        let style = if is_correct {
            Style::default().fg(Color::Green).bold()
        } else if is_wrong {
            Style::default().fg(Color::Red).bold()
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if app.cursor() == Some(index) { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(
                format!("{}. ", OPTION_LABELS[index.min(OPTION_LABELS.len() - 1)]),
                style,
            ),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(
    frame: &mut Frame,
    area: Rect,
    feedback: &Feedback,
    explanation: Option<&str>,
) {
    let color = if feedback.correct { Color::Green } else { Color::Red };

    let mut lines = vec![
        Line::from(Span::styled(feedback.title, Style::default().fg(color).bold())),
        Line::from(feedback.detail.as_str().fg(Color::Gray)),
    ];
    if let Some(explanation) = explanation {
        lines.push(Line::from(explanation.fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.session().is_submitted() {
        "enter next  ·  h/l or drag back/forward  ·  s sound  ·  q quit"
    } else {
        "j/k choose  ·  enter submit  ·  s sound  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
