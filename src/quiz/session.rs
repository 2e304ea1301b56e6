//! Quiz session state machine.
//!
//! ```text
//! Unanswered --submit/timeout--> Answered --advance--> Unanswered (next)
//!                                   |  \--retreat--> Unanswered (previous)
//!                                   \--advance on last--> Completed
//! ```
//!
//! Every operation is total: a call that is not legal in the current phase
//! leaves the session untouched and reports that nothing happened.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use super::countdown::{Countdown, Tick};
use super::events::{SessionEvent, SessionObserver};
use super::gesture::NavIntent;
use super::grade::percentage;
use crate::models::Question;

/// How long answer feedback stays on screen before the automatic advance.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered { correct: bool, timed_out: bool },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub is_correct: bool,
    pub timed_out: bool,
}

/// Latest answer given for a question, kept for the results breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub chosen: Option<String>,
    pub correct: bool,
    pub timed_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Running(u32),
    TimedOut(SubmitOutcome),
}

pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    phase: Phase,
    score: usize,
    countdown: Countdown,
    answers: Vec<Option<AnswerRecord>>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl QuizSession {
    /// Starts a session; `time_limit` is seconds per question, `0` for untimed.
    pub fn start(questions: Vec<Question>, time_limit: u32) -> Self {
        let mut countdown = Countdown::new(time_limit);
        let phase = if questions.is_empty() {
            countdown.stop();
            Phase::Completed
        } else {
            Phase::Unanswered
        };

        debug!(questions = questions.len(), time_limit, "session started");

        Self {
            answers: vec![None; questions.len()],
            questions,
            current_index: 0,
            selected_answer: None,
            phase,
            score: 0,
            countdown,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<O: SessionObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question on screen, `None` once the session is completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Completed => None,
            _ => self.questions.get(self.current_index),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Answered { .. })
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.questions.len())
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn time_limit(&self) -> u32 {
        self.countdown.limit()
    }

    pub fn is_timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn answers(&self) -> &[Option<AnswerRecord>] {
        &self.answers
    }

    /// Chooses an answer for the current question without submitting it.
    pub fn select(&mut self, answer: &str) -> bool {
        if self.phase != Phase::Unanswered {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };
        if !question.has_option(answer) {
            return false;
        }

        self.selected_answer = Some(answer.to_string());
        true
    }

    /// Submits `answer`, or the current selection when `answer` is `None`.
    ///
    /// Returns `None` when there is nothing to submit or the question was
    /// already answered.
    pub fn submit(&mut self, answer: Option<&str>) -> Option<SubmitOutcome> {
        if self.phase != Phase::Unanswered {
            return None;
        }
        if let Some(answer) = answer {
            self.select(answer);
        }

        let chosen = self.selected_answer.clone()?;
        let correct = self.questions[self.current_index].is_correct(&chosen);
        Some(self.record(Some(chosen), correct, false))
    }

    /// Submission forced by the countdown. Always counts as incorrect, and a
    /// highlighted but unsubmitted option is discarded.
    fn submit_timed_out(&mut self) -> Option<SubmitOutcome> {
        if self.phase != Phase::Unanswered {
            return None;
        }
        self.selected_answer = None;
        Some(self.record(None, false, true))
    }

    fn record(&mut self, chosen: Option<String>, correct: bool, timed_out: bool) -> SubmitOutcome {
        let index = self.current_index;

        self.countdown.stop();
        self.phase = Phase::Answered { correct, timed_out };
        if correct {
            self.score += 1;
        }
        self.answers[index] = Some(AnswerRecord {
            chosen,
            correct,
            timed_out,
        });

        debug!(
            question = index + 1,
            correct,
            timed_out,
            score = self.score,
            "answer recorded"
        );

        let event = if correct {
            SessionEvent::Correct { index }
        } else {
            SessionEvent::Incorrect {
                index,
                correct_answer: self.questions[index].correct_answer.clone(),
                timed_out,
            }
        };
        self.emit(&event);

        SubmitOutcome {
            is_correct: correct,
            timed_out,
        }
    }

    /// Moves past an answered question, completing the session after the last one.
    pub fn advance(&mut self) -> bool {
        if !self.is_submitted() {
            return false;
        }

        if self.current_index + 1 >= self.questions.len() {
            self.phase = Phase::Completed;
            self.countdown.stop();
            self.selected_answer = None;
            debug!(
                score = self.score,
                total = self.questions.len(),
                "session completed"
            );
            self.emit(&SessionEvent::Completed {
                score: self.score,
                total: self.questions.len(),
            });
        } else {
            self.current_index += 1;
            self.reset_question_state();
        }
        true
    }

    /// Steps back from an answered question. The score is left as it is.
    pub fn retreat(&mut self) -> bool {
        if !self.is_submitted() || self.current_index == 0 {
            return false;
        }

        self.current_index -= 1;
        self.reset_question_state();
        true
    }

    pub fn navigate(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Advance => self.advance(),
            NavIntent::Retreat => self.retreat(),
        }
    }

    /// One second of wall time has passed.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Unanswered {
            return TickOutcome::Idle;
        }

        match self.countdown.tick() {
            Tick::Idle => TickOutcome::Idle,
            Tick::Running(remaining) => TickOutcome::Running(remaining),
            Tick::Expired => match self.submit_timed_out() {
                Some(outcome) => TickOutcome::TimedOut(outcome),
                None => TickOutcome::Idle,
            },
        }
    }

    fn reset_question_state(&mut self) {
        self.selected_answer = None;
        self.phase = Phase::Unanswered;
        self.countdown.reset();
    }

    fn emit(&mut self, event: &SessionEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("selected_answer", &self.selected_answer)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("countdown", &self.countdown)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question::new(format!("Question {i}"), ["right", "wrong"], "right"))
            .collect()
    }

    #[test]
    fn test_select_does_not_advance() {
        let mut session = QuizSession::start(questions(2), 0);
        assert!(session.select("wrong"));
        assert!(session.select("right"));
        assert_eq!(session.selected_answer(), Some("right"));
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_select_ignores_unknown_option() {
        let mut session = QuizSession::start(questions(1), 0);
        assert!(!session.select("maybe"));
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let mut session = QuizSession::start(questions(2), 30);
        assert_eq!(session.submit(None), None);
        assert!(!session.is_submitted());
        assert!(session.is_timer_running());
    }

    #[test]
    fn test_double_submit_does_not_rescore() {
        let mut session = QuizSession::start(questions(2), 0);
        let outcome = session.submit(Some("right")).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(session.submit(Some("right")), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_select_after_submit_is_ignored() {
        let mut session = QuizSession::start(questions(2), 0);
        session.submit(Some("wrong"));
        assert!(!session.select("right"));
        assert_eq!(session.selected_answer(), Some("wrong"));
    }

    #[test]
    fn test_advance_requires_submission() {
        let mut session = QuizSession::start(questions(3), 0);
        assert!(!session.advance());
        assert_eq!(session.current_index(), 0);

        session.submit(Some("right"));
        assert!(session.advance());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_advance_on_last_question_completes() {
        let mut session = QuizSession::start(questions(1), 10);
        session.submit(Some("right"));
        assert!(session.advance());
        assert!(session.is_completed());
        assert_eq!(session.current_question(), None);
        assert_eq!(session.percentage(), 100);
        assert!(!session.advance());
    }

    #[test]
    fn test_retreat_keeps_score() {
        let mut session = QuizSession::start(questions(3), 20);
        session.submit(Some("right"));
        session.advance();
        session.submit(Some("wrong"));
        assert!(session.retreat());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 1);
        assert!(!session.is_submitted());
        assert_eq!(session.time_remaining(), 20);
    }

    #[test]
    fn test_retreat_at_first_question_is_noop() {
        let mut session = QuizSession::start(questions(3), 0);
        session.submit(Some("right"));
        assert!(!session.retreat());
        assert_eq!(session.current_index(), 0);
        assert!(session.is_submitted());
    }

    #[test]
    fn test_tick_times_out_as_incorrect() {
        let mut session = QuizSession::start(questions(2), 2);
        session.select("right");
        assert_eq!(session.tick(), TickOutcome::Running(1));
        let outcome = session.tick();
        assert_eq!(
            outcome,
            TickOutcome::TimedOut(SubmitOutcome {
                is_correct: false,
                timed_out: true,
            })
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.answers()[0].as_ref().unwrap().chosen, None);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_submit_stops_timer_and_advance_rearms() {
        let mut session = QuizSession::start(questions(2), 5);
        session.tick();
        session.submit(Some("right"));
        assert!(!session.is_timer_running());
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.time_remaining(), 4);

        session.advance();
        assert!(session.is_timer_running());
        assert_eq!(session.time_remaining(), 5);
    }

    #[test]
    fn test_untimed_session_never_forces_submission() {
        let mut session = QuizSession::start(questions(1), 0);
        for _ in 0..1000 {
            assert_eq!(session.tick(), TickOutcome::Idle);
        }
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_empty_session_is_completed() {
        let session = QuizSession::start(Vec::new(), 30);
        assert!(session.is_completed());
        assert_eq!(session.percentage(), 0);
        assert!(!session.is_timer_running());
    }

    #[test]
    fn test_observers_receive_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut session = QuizSession::start(questions(2), 0);
        session.subscribe(move |event: &SessionEvent| sink.borrow_mut().push(event.clone()));

        session.submit(Some("right"));
        session.advance();
        session.submit(Some("wrong"));
        session.advance();

        assert_eq!(
            *events.borrow(),
            vec![
                SessionEvent::Correct { index: 0 },
                SessionEvent::Incorrect {
                    index: 1,
                    correct_answer: "right".to_string(),
                    timed_out: false,
                },
                SessionEvent::Completed { score: 1, total: 2 },
            ]
        );
    }

    #[test]
    fn test_navigate_dispatches_intents() {
        let mut session = QuizSession::start(questions(2), 0);
        assert!(!session.navigate(NavIntent::Advance));
        session.submit(Some("right"));
        assert!(!session.navigate(NavIntent::Retreat));
        assert!(session.navigate(NavIntent::Advance));
        assert_eq!(session.current_index(), 1);
    }
}
