use std::cell::Cell;
use std::rc::Rc;

use clap::ValueEnum;
use tracing::{info, warn};

use crate::config::{Difficulty, QuizConfig, QUESTION_COUNTS, TIME_LIMITS};
use crate::history::{HistoryStore, LeaderboardEntry, QuizRecord};
use crate::models::category::display_name;
use crate::models::{AppState, Question, CATEGORIES};
use crate::quiz::{
    Chime, EventLog, NavIntent, Phase, Point, QuestionBank, QuizSession, SwipeTracker, TickOutcome,
};

const LEADERBOARD_SIZE: usize = 10;

/// Banner shown under an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub title: &'static str,
    pub detail: String,
    pub correct: bool,
}

pub struct App {
    pub state: AppState,
    config: QuizConfig,
    bank: QuestionBank,
    session: QuizSession,
    cursor: Option<usize>,
    swipe: SwipeTracker,
    sound: Rc<Cell<bool>>,
    history: Option<HistoryStore>,
    leaderboard: Vec<LeaderboardEntry>,
    result_scroll: usize,
    advance_request: Option<usize>,
    timer_epoch: u64,
    notice: Option<String>,
}

impl App {
    pub fn new(config: QuizConfig, bank: QuestionBank, history: Option<HistoryStore>) -> Self {
        let sound = Rc::new(Cell::new(config.sound));
        Self {
            state: AppState::Welcome,
            session: QuizSession::start(Vec::new(), config.effective_time_limit()),
            config,
            bank,
            cursor: None,
            swipe: SwipeTracker::new(),
            sound,
            history,
            leaderboard: Vec::new(),
            result_scroll: 0,
            advance_request: None,
            timer_epoch: 0,
            notice: None,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Display name of the category questions are actually drawn from.
    pub fn category_name(&self) -> String {
        display_name(self.bank.resolve(&self.config.category))
    }

    pub fn pool_size(&self) -> usize {
        let category = self.bank.resolve(&self.config.category);
        self.bank.pool_size(category).unwrap_or(0)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.get()
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn timer_running(&self) -> bool {
        self.state == AppState::Quiz && self.session.is_timer_running()
    }

    /// Changes whenever the countdown is re-armed for a new question.
    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    pub fn cycle_category(&mut self) {
        let ids: Vec<&str> = CATEGORIES.iter().map(|category| category.id).collect();
        let current = self.config.category.as_str();
        self.config.category = next_choice(&ids, current).to_string();
    }

    pub fn cycle_difficulty(&mut self) {
        self.config.difficulty = next_choice(Difficulty::value_variants(), self.config.difficulty);
    }

    pub fn cycle_count(&mut self) {
        self.config.count = next_choice(&QUESTION_COUNTS, self.config.count);
    }

    pub fn cycle_time_limit(&mut self) {
        self.config.time_limit = next_choice(&TIME_LIMITS, self.config.time_limit);
    }

    pub fn toggle_study_mode(&mut self) {
        self.config.study_mode = !self.config.study_mode;
    }

    pub fn start_quiz(&mut self) {
        let category = self.bank.resolve(&self.config.category).to_string();
        let questions = self
            .bank
            .generate(&self.config.category, self.config.difficulty, self.config.count);

        info!(
            category = %category,
            difficulty = %self.config.difficulty,
            questions = questions.len(),
            time_limit = self.config.effective_time_limit(),
            "starting quiz"
        );

        let mut session = QuizSession::start(questions, self.config.effective_time_limit());
        session.subscribe(EventLog);
        session.subscribe(Chime::new(Rc::clone(&self.sound)));

        self.session = session;
        self.cursor = None;
        self.swipe = SwipeTracker::new();
        self.advance_request = None;
        self.result_scroll = 0;
        self.notice = None;
        self.timer_epoch += 1;
        self.state = AppState::Quiz;

        if self.session.is_completed() {
            self.finish();
        }
    }

    pub fn select_next_option(&mut self) {
        let Some(len) = self.option_count() else {
            return;
        };
        let next = match self.cursor {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.select_option(next);
    }

    pub fn select_previous_option(&mut self) {
        let Some(len) = self.option_count() else {
            return;
        };
        let previous = match self.cursor {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.select_option(previous);
    }

    pub fn select_option(&mut self, index: usize) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return;
        };

        if self.session.select(&option) {
            self.cursor = Some(index);
        }
    }

    /// Submits the selection, or moves on when the answer is already in.
    pub fn submit_answer(&mut self) {
        if self.session.is_submitted() {
            self.navigate(NavIntent::Advance);
            return;
        }

        if self.session.submit(None).is_some() {
            self.advance_request = Some(self.session.current_index());
        }
    }

    pub fn tick(&mut self) {
        if let TickOutcome::TimedOut(_) = self.session.tick() {
            self.advance_request = Some(self.session.current_index());
        }
    }

    /// Takes the pending request for a delayed advance, if a submission made one.
    pub fn take_advance_request(&mut self) -> Option<usize> {
        self.advance_request.take()
    }

    /// Runs a delayed advance scheduled for question `index`. Does nothing if
    /// the user already navigated away from it.
    pub fn complete_advance(&mut self, index: usize) {
        if self.state == AppState::Quiz && self.session.current_index() == index {
            self.navigate(NavIntent::Advance);
        }
    }

    pub fn navigate(&mut self, intent: NavIntent) {
        if self.state != AppState::Quiz || !self.session.navigate(intent) {
            return;
        }

        self.cursor = None;
        self.advance_request = None;
        self.timer_epoch += 1;

        if self.session.is_completed() {
            self.finish();
        }
    }

    pub fn touch_start(&mut self, point: Point) {
        self.swipe.touch_start(point);
    }

    pub fn touch_move(&mut self, point: Point) {
        self.swipe.touch_move(point);
    }

    pub fn touch_end(&mut self) {
        if let Some(intent) = self.swipe.touch_end().and_then(|swipe| swipe.intent()) {
            self.navigate(intent);
        }
    }

    pub fn toggle_sound(&mut self) {
        self.sound.set(!self.sound.get());
    }

    pub fn feedback(&self) -> Option<Feedback> {
        let question = self.session.current_question()?;
        match self.session.phase() {
            Phase::Answered { correct: true, .. } => Some(Feedback {
                title: "Correct!",
                detail: "Well done!".to_string(),
                correct: true,
            }),
            Phase::Answered {
                correct: false,
                timed_out,
            } => Some(Feedback {
                title: if timed_out {
                    "Time's up, marked incorrect"
                } else {
                    "Incorrect"
                },
                detail: format!("The correct answer was: {}", question.correct_answer),
                correct: false,
            }),
            Phase::Unanswered | Phase::Completed => None,
        }
    }

    fn finish(&mut self) {
        self.state = AppState::Result;
        self.advance_request = None;

        let Some(history) = self.history.as_mut() else {
            return;
        };

        let category = self.bank.resolve(&self.config.category);
        let record = QuizRecord::from_session(
            &self.session,
            &self.config.player,
            category,
            self.config.difficulty,
        );
        if let Err(err) = history.record(record) {
            warn!(%err, "could not save quiz result");
            self.notice = Some(format!("Result not saved: {}", err));
        }
        self.leaderboard = history.leaderboard(LEADERBOARD_SIZE);
    }

    pub fn show_leaderboard(&mut self) {
        if let Some(history) = &self.history {
            self.leaderboard = history.leaderboard(LEADERBOARD_SIZE);
        }
        self.state = AppState::Leaderboard;
    }

    pub fn close_leaderboard(&mut self) {
        self.state = if self.session.is_completed() && self.session.total_questions() > 0 {
            AppState::Result
        } else {
            AppState::Welcome
        };
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.cursor = None;
        self.advance_request = None;
        self.result_scroll = 0;
    }

    fn option_count(&self) -> Option<usize> {
        self.session
            .current_question()
            .map(|question| question.options.len())
            .filter(|len| *len > 0)
    }
}

/// The choice after `current`, wrapping around. Unknown values restart at the first choice.
fn next_choice<T: Copy + PartialEq>(choices: &[T], current: T) -> T {
    match choices.iter().position(|choice| *choice == current) {
        Some(index) => choices[(index + 1) % choices.len()],
        None => choices[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> QuizConfig {
        QuizConfig {
            category: "jhs-science".to_string(),
            count: 3,
            time_limit: 0,
            sound: false,
            ..QuizConfig::default()
        }
    }

    fn answer_correctly(app: &mut App) {
        let question = app.current_question().unwrap().clone();
        let index = question
            .options
            .iter()
            .position(|option| *option == question.correct_answer)
            .unwrap();
        app.select_option(index);
        app.submit_answer();
    }

    #[test]
    fn test_full_quiz_with_history() {
        let dir = tempfile::tempdir().unwrap();
        let history = HistoryStore::open(dir.path().join("history.json")).unwrap();
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), Some(history));

        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        for _ in 0..3 {
            answer_correctly(&mut app);
            let index = app.take_advance_request().unwrap();
            app.complete_advance(index);
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().score(), 3);
        assert_eq!(app.leaderboard().len(), 1);
        assert_eq!(app.leaderboard()[0].total_score, 3);
    }

    #[test]
    fn test_stale_advance_is_ignored() {
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), None);
        app.start_quiz();

        answer_correctly(&mut app);
        let index = app.take_advance_request().unwrap();

        // User pressed enter again before the delay fired.
        app.submit_answer();
        assert_eq!(app.session().current_index(), 1);

        app.complete_advance(index);
        assert_eq!(app.session().current_index(), 1);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), None);
        app.start_quiz();

        app.select_previous_option();
        assert_eq!(app.cursor(), Some(3));
        app.select_next_option();
        assert_eq!(app.cursor(), Some(0));
        assert!(app.session().selected_answer().is_some());
    }

    #[test]
    fn test_setup_cycles_wrap() {
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), None);

        app.cycle_count();
        assert_eq!(app.config().count, 5);
        app.cycle_time_limit();
        assert_eq!(app.config().time_limit, 30);
        for _ in 0..TIME_LIMITS.len() {
            app.cycle_time_limit();
        }
        assert_eq!(app.config().time_limit, 30);

        app.cycle_difficulty();
        assert_eq!(app.config().difficulty, Difficulty::Hard);

        app.cycle_category();
        assert_eq!(app.config().category, "jhs-english");
        for _ in 0..CATEGORIES.len() {
            app.cycle_category();
        }
        assert_eq!(app.config().category, "jhs-english");

        app.toggle_study_mode();
        assert_eq!(app.config().effective_time_limit(), 0);
    }

    #[test]
    fn test_swipe_left_before_submit_is_noop() {
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), None);
        app.start_quiz();

        app.touch_start(Point::new(300.0, 100.0));
        app.touch_move(Point::new(100.0, 100.0));
        app.touch_end();

        assert_eq!(app.session().current_index(), 0);
        assert!(!app.session().is_submitted());
    }

    #[test]
    fn test_feedback_after_wrong_answer() {
        let mut app = App::new(quiet_config(), QuestionBank::builtin(), None);
        app.start_quiz();

        let question = app.current_question().unwrap().clone();
        let wrong = question
            .options
            .iter()
            .position(|option| *option != question.correct_answer)
            .unwrap();
        app.select_option(wrong);
        app.submit_answer();

        let feedback = app.feedback().unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.title, "Incorrect");
        assert!(feedback.detail.ends_with(&question.correct_answer));
    }
}
