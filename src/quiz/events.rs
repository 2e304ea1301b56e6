//! Feedback notifications emitted by a session.
//!
//! Sound cues, logging and anything else that reacts to answers subscribe
//! here instead of being called from inside the session's transitions.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Correct {
        index: usize,
    },
    Incorrect {
        index: usize,
        correct_answer: String,
        timed_out: bool,
    },
    Completed {
        score: usize,
        total: usize,
    },
}

pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// Logs every session event through `tracing`.
#[derive(Debug, Default)]
pub struct EventLog;

impl SessionObserver for EventLog {
    fn notify(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Correct { index } => info!(question = index + 1, "answered correctly"),
            SessionEvent::Incorrect {
                index, timed_out, ..
            } => info!(question = index + 1, timed_out, "answered incorrectly"),
            SessionEvent::Completed { score, total } => info!(score, total, "quiz completed"),
        }
    }
}

/// Which sound a cue stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Incorrect,
    Complete,
}

impl Cue {
    pub fn for_event(event: &SessionEvent) -> Self {
        match event {
            SessionEvent::Correct { .. } => Cue::Correct,
            SessionEvent::Incorrect { .. } => Cue::Incorrect,
            SessionEvent::Completed { .. } => Cue::Complete,
        }
    }

    /// Terminal bells rung for this cue.
    pub fn bells(self) -> usize {
        match self {
            Cue::Correct => 1,
            Cue::Incorrect => 2,
            Cue::Complete => 3,
        }
    }
}

/// Sound cue subscriber. Rings the terminal bell while its shared toggle is on.
pub struct Chime<W: Write = io::Stdout> {
    enabled: Rc<Cell<bool>>,
    out: W,
}

impl Chime {
    pub fn new(enabled: Rc<Cell<bool>>) -> Self {
        Self::with_writer(enabled, io::stdout())
    }
}

impl<W: Write> Chime<W> {
    pub fn with_writer(enabled: Rc<Cell<bool>>, out: W) -> Self {
        Self { enabled, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionObserver for Chime<W> {
    fn notify(&mut self, event: &SessionEvent) {
        if !self.enabled.get() {
            return;
        }
        let bells = "\x07".repeat(Cue::for_event(event).bells());
        // A terminal that cannot ring is not worth failing an answer over.
        let _ = self.out.write_all(bells.as_bytes()).and_then(|_| self.out.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_respects_toggle() {
        let enabled = Rc::new(Cell::new(true));
        let mut chime = Chime::with_writer(Rc::clone(&enabled), Vec::new());

        chime.notify(&SessionEvent::Correct { index: 0 });
        enabled.set(false);
        chime.notify(&SessionEvent::Completed { score: 1, total: 1 });
        enabled.set(true);
        chime.notify(&SessionEvent::Incorrect {
            index: 1,
            correct_answer: "x".to_string(),
            timed_out: false,
        });

        assert_eq!(chime.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &SessionEvent| seen.push(Cue::for_event(event));
            observer.notify(&SessionEvent::Completed { score: 0, total: 0 });
        }
        assert_eq!(seen, vec![Cue::Complete]);
    }
}
