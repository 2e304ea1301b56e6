//! Terminal event loop.
//!
//! Everything runs on one task: key and mouse events, the one-second
//! countdown tick and the delayed advance after a submission are multiplexed
//! with `tokio::select!`, so session transitions never interleave.

use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use futures_util::StreamExt;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tracing::debug;

use crate::app::App;
use crate::models::AppState;
use crate::quiz::{NavIntent, Point, ADVANCE_DELAY};
use crate::terminal::AppTerminal;
use crate::ui;
use crate::QuizError;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Approximate pixel size of a terminal cell, for swipe thresholds.
const CELL_WIDTH_PX: f32 = 8.0;
const CELL_HEIGHT_PX: f32 = 16.0;

pub async fn run(terminal: &mut AppTerminal, app: &mut App) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut pending_advance: Option<(Instant, usize)> = None;
    let mut timer_epoch = app.timer_epoch();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let advance_at = pending_advance.map(|(at, _)| at);

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if handle_event(app, event) {
                        break;
                    }
                }
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            _ = ticker.tick(), if app.timer_running() => {
                app.tick();
            }
            _ = sleep_until(advance_at.unwrap_or_else(Instant::now)), if advance_at.is_some() => {
                if let Some((_, index)) = pending_advance.take() {
                    app.complete_advance(index);
                }
            }
        }

        if let Some(index) = app.take_advance_request() {
            debug!(question = index + 1, "advance scheduled");
            pending_advance = Some((Instant::now() + ADVANCE_DELAY, index));
        }

        // A fresh question gets a full second before its first tick.
        if app.timer_epoch() != timer_epoch {
            timer_epoch = app.timer_epoch();
            ticker.reset();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
        Event::Mouse(mouse) => {
            if app.state == AppState::Quiz {
                handle_mouse(app, mouse);
            }
            false
        }
        _ => false,
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::Leaderboard => handle_leaderboard_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.show_leaderboard();
            false
        }
        KeyCode::Char('c') => {
            app.cycle_category();
            false
        }
        KeyCode::Char('d') => {
            app.cycle_difficulty();
            false
        }
        KeyCode::Char('n') => {
            app.cycle_count();
            false
        }
        KeyCode::Char('t') => {
            app.cycle_time_limit();
            false
        }
        KeyCode::Char('m') => {
            app.toggle_study_mode();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_sound();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ '1'..='6') => app.select_option(c as usize - '1' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Left | KeyCode::Char('h') => app.navigate(NavIntent::Retreat),
        KeyCode::Right | KeyCode::Char('l') => app.navigate(NavIntent::Advance),
        KeyCode::Char('s') | KeyCode::Char('S') => app.toggle_sound(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('b') | KeyCode::Char('B') => app.show_leaderboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_leaderboard_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.close_leaderboard();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let point = Point::new(
        f32::from(mouse.column) * CELL_WIDTH_PX,
        f32::from(mouse.row) * CELL_HEIGHT_PX,
    );

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.touch_start(point),
        MouseEventKind::Drag(MouseButton::Left) => app.touch_move(point),
        MouseEventKind::Up(MouseButton::Left) => app.touch_end(),
        _ => {}
    }
}
