use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smartme_test::config::Difficulty;
use smartme_test::models::CATEGORIES;
use smartme_test::quiz::{
    NavIntent, Point, QuestionBank, QuizSession, SessionEvent, SwipeTracker, TickOutcome,
};
use smartme_test::Question;

fn wrong_answer(question: &Question) -> String {
    question
        .options
        .iter()
        .find(|option| **option != question.correct_answer)
        .cloned()
        .unwrap()
}

#[test]
fn untimed_all_correct_scores_full_marks() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("shs-mathematics", Difficulty::Medium, 5);
    assert_eq!(questions.len(), 5);

    let mut session = QuizSession::start(questions, 0);
    while let Some(question) = session.current_question().cloned() {
        assert_eq!(session.tick(), TickOutcome::Idle);
        session.select(&question.correct_answer);
        assert!(session.submit(None).unwrap().is_correct);
        session.advance();
    }

    assert!(session.is_completed());
    assert_eq!(session.score(), 5);
    assert_eq!(session.percentage(), 100);
}

#[test]
fn timeout_on_second_question_counts_as_wrong() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("jhs-english", Difficulty::Easy, 4);
    let mut session = QuizSession::start(questions, 3);

    let timeouts = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&timeouts);
    session.subscribe(move |event: &SessionEvent| {
        if let SessionEvent::Incorrect { timed_out: true, .. } = event {
            *counter.borrow_mut() += 1;
        }
    });

    let mut question_number = 0;
    while let Some(question) = session.current_question().cloned() {
        question_number += 1;
        if question_number == 2 {
            let mut outcome = TickOutcome::Idle;
            for _ in 0..3 {
                outcome = session.tick();
            }
            assert!(matches!(outcome, TickOutcome::TimedOut(result) if !result.is_correct));
        } else {
            session.submit(Some(&question.correct_answer));
        }
        session.advance();
    }

    assert_eq!(*timeouts.borrow(), 1);
    assert_eq!(session.score(), 3);
    assert!(session.answers()[1].as_ref().unwrap().timed_out);
    assert_eq!(session.percentage(), 75);
}

#[test]
fn unknown_category_serves_default_pool() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("unknown-category", Difficulty::Hard, 10);
    assert_eq!(questions.len(), 5);
}

#[test]
fn swipe_left_before_submit_changes_nothing() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("shs-arts", Difficulty::Medium, 5);
    let mut session = QuizSession::start(questions, 30);
    let first = session.current_question().unwrap().options[0].clone();
    session.select(&first);

    let mut tracker = SwipeTracker::new();
    tracker.touch_start(Point::new(400.0, 200.0));
    tracker.touch_move(Point::new(100.0, 210.0));
    let intent = tracker.touch_end().and_then(|swipe| swipe.intent());
    assert_eq!(intent, Some(NavIntent::Advance));

    let before = format!("{:?}", session);
    assert!(!session.navigate(NavIntent::Advance));
    assert_eq!(format!("{:?}", session), before);
}

#[test]
fn retreat_at_first_question_changes_nothing() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("shs-history", Difficulty::Medium, 5);
    let mut session = QuizSession::start(questions, 0);
    let answer = wrong_answer(session.current_question().unwrap());
    session.submit(Some(&answer));

    let before = format!("{:?}", session);
    assert!(!session.retreat());
    assert_eq!(format!("{:?}", session), before);
}

#[test]
fn generated_sets_are_well_formed() {
    let bank = QuestionBank::builtin();
    let mut rng = StdRng::seed_from_u64(2024);

    for category in CATEGORIES.iter() {
        for count in [1, 3, 5, 10, 20] {
            let questions = bank.generate_with_rng(category.id, Difficulty::Mixed, count, &mut rng);
            assert_eq!(questions.len(), count.min(5));

            let texts: HashSet<_> = questions.iter().map(|q| q.text.as_str()).collect();
            assert_eq!(texts.len(), questions.len());
            assert!(questions.iter().all(|q| q.has_option(&q.correct_answer)));
        }
    }
}

#[test]
fn score_is_monotonic_and_bounded_by_submissions() {
    let bank = QuestionBank::builtin();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let questions =
            bank.generate_with_rng("jhs-social-studies", Difficulty::Medium, 5, &mut rng);
        let mut session = QuizSession::start(questions, 2);
        let mut submissions = 0;
        let mut last_score = 0;

        for _ in 0..200 {
            if session.is_completed() {
                break;
            }
            match rng.gen_range(0..6) {
                0 => {
                    let question = session.current_question().unwrap().clone();
                    let pick = rng.gen_range(0..question.options.len());
                    session.select(&question.options[pick]);
                }
                1 => {
                    if session.submit(None).is_some() {
                        submissions += 1;
                    }
                }
                2 => {
                    if let TickOutcome::TimedOut(_) = session.tick() {
                        submissions += 1;
                    }
                }
                3 => {
                    session.advance();
                }
                4 => {
                    session.retreat();
                }
                _ => {
                    // A repeated submit never scores twice.
                    let score = session.score();
                    if session.is_submitted() {
                        assert_eq!(session.submit(None), None);
                        assert_eq!(session.score(), score);
                    }
                }
            }

            assert!(session.score() >= last_score);
            assert!(session.score() <= submissions);
            last_score = session.score();
        }
    }
}

#[test]
fn forward_play_never_scores_ahead_of_position() {
    let bank = QuestionBank::builtin();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let questions = bank.generate_with_rng("shs-science", Difficulty::Hard, 5, &mut rng);
        let mut session = QuizSession::start(questions, 2);

        for _ in 0..200 {
            if session.is_completed() {
                break;
            }
            match rng.gen_range(0..4) {
                0 => {
                    let question = session.current_question().unwrap().clone();
                    let pick = rng.gen_range(0..question.options.len());
                    session.select(&question.options[pick]);
                }
                1 => {
                    session.submit(None);
                }
                2 => {
                    session.tick();
                }
                _ => {
                    session.advance();
                }
            }

            assert!(session.score() <= session.current_index() + 1);
        }
    }
}

#[test]
fn index_change_clears_selection_and_rearms_timer() {
    let bank = QuestionBank::builtin();
    let questions = bank.generate("shs-languages", Difficulty::Medium, 3);
    let mut session = QuizSession::start(questions, 45);

    session.tick();
    session.tick();
    let answer = session.current_question().unwrap().correct_answer.clone();
    session.submit(Some(&answer));
    assert_eq!(session.time_remaining(), 43);

    session.advance();
    assert_eq!(session.selected_answer(), None);
    assert!(!session.is_submitted());
    assert_eq!(session.time_remaining(), 45);

    let answer = wrong_answer(session.current_question().unwrap());
    session.submit(Some(&answer));
    session.retreat();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.selected_answer(), None);
    assert_eq!(session.time_remaining(), 45);
}

#[test]
fn sample_question_file_extends_builtin_pools() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/questions.json");
    let bank = QuestionBank::from_json(path).unwrap();

    assert_eq!(bank.pool_size("jhs-science"), Some(3));
    assert_eq!(bank.pool_size("jhs-ict"), Some(2));
    assert_eq!(bank.pool_size("shs-arts"), Some(5));

    let questions = bank.generate("jhs-ict", Difficulty::Easy, 10);
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().any(|q| q.explanation.is_some()));
}
