// Integration tests for the quiz session state machine

use quiztty::quiz::{Phase, Question, QuestionSet, QuizSession, Transition, builtin};

fn three_questions() -> QuestionSet {
    QuestionSet::new(
        "Flow",
        vec![
            Question::new(1, "First?", &["a", "b", "c", "d"], 0),
            Question::new(2, "Second?", &["a", "b", "c", "d"], 0),
            Question::new(3, "Third?", &["a", "b", "c", "d"], 3),
        ],
    )
    .expect("valid question set")
}

#[test]
fn test_full_playthrough() {
    let set = three_questions();
    let mut session = QuizSession::new(&set);

    session.start().expect("start");
    assert!(matches!(
        session.phase(),
        Phase::InProgress { current: 0, selected: None }
    ));

    session.select_answer(0).expect("answer 1");
    assert!(session.is_answered());
    assert_eq!(session.score(), 1);
    assert_eq!(session.user_answers(), &[0]);

    session.advance().expect("advance 1");
    assert_eq!(session.current_index(), Some(1));
    assert!(!session.is_answered());

    session.select_answer(2).expect("answer 2");
    assert!(session.is_answered());
    assert_eq!(session.score(), 1);
    assert_eq!(session.user_answers(), &[0, 2]);

    session.advance().expect("advance 2");
    assert_eq!(session.current_index(), Some(2));
    assert!(!session.is_answered());

    session.select_answer(3).expect("answer 3");
    assert_eq!(session.score(), 2);
    assert_eq!(session.user_answers(), &[0, 2, 3]);

    let transition = session.advance().expect("finish");
    assert_eq!(transition, Transition::Finished { score: 2 });
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.score(), 2);
    assert_eq!(session.user_answers(), &[0, 2, 3]);
}

#[test]
fn test_bundled_questions_playthrough() {
    let set = builtin::ai_basics().expect("bundled set");
    let mut session = QuizSession::new(&set);

    session.start().unwrap();
    for answer in [0, 2, 3] {
        session.select_answer(answer).unwrap();
        session.advance().unwrap();
    }

    assert!(session.is_finished());
    assert_eq!(session.score(), 2);

    let review = session.review();
    assert_eq!(review.len(), 3);
    assert!(review[0].is_correct());
    assert!(!review[1].is_correct());
    assert_eq!(
        review[1].correct_text(),
        "教師あり学習、教師なし学習、強化学習"
    );
    assert_eq!(review[2].answer_text(), Some("すべて正解"));
}

#[test]
fn test_restart_after_finish_allows_replay() {
    let set = three_questions();
    let mut session = QuizSession::new(&set);

    session.start().unwrap();
    for _ in 0..set.len() {
        session.select_answer(1).unwrap();
        session.advance().unwrap();
    }
    assert!(session.is_finished());
    assert_eq!(session.score(), 0);

    session.restart().unwrap();
    assert_eq!(session, QuizSession::new(&set));

    // A second run is independent of the first
    session.start().unwrap();
    session.select_answer(0).unwrap();
    assert_eq!(session.score(), 1);
    assert_eq!(session.user_answers(), &[0]);
}

#[test]
fn test_rejected_calls_are_no_ops() {
    let set = three_questions();
    let mut session = QuizSession::new(&set);

    assert!(session.advance().is_err());
    assert!(session.select_answer(0).is_err());
    assert_eq!(session, QuizSession::new(&set));

    session.start().unwrap();
    let fresh = session.clone();
    assert!(session.advance().unwrap_err().is_rejection());
    assert!(session.select_answer(99).unwrap_err().is_rejection());
    assert_eq!(session, fresh);
}

#[test]
fn test_sessions_share_questions_independently() {
    let set = three_questions();
    let mut first = QuizSession::new(&set);
    let mut second = QuizSession::new(&set);

    first.start().unwrap();
    first.select_answer(0).unwrap();
    second.start().unwrap();

    assert_eq!(first.score(), 1);
    assert_eq!(second.score(), 0);
    assert!(second.user_answers().is_empty());
}
