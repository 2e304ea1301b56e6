//! Quiz runtime: question source, session state machine, countdown and
//! gesture handling. Nothing in here touches the terminal.

pub mod countdown;
pub mod events;
pub mod gesture;
pub mod grade;
pub mod session;
pub mod source;

pub use countdown::{Countdown, Tick};
pub use events::{Chime, Cue, EventLog, SessionEvent, SessionObserver};
pub use gesture::{NavIntent, Point, Swipe, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use session::{AnswerRecord, Phase, QuizSession, SubmitOutcome, TickOutcome, ADVANCE_DELAY};
pub use source::{QuestionBank, UnknownCategory};
