use amara_core::models::{AnswerSet, QuestionnaireType};
use amara_screening::attempt::{Attempt, AttemptState, submit_assessment};
use amara_screening::error::ScreeningError;
use uuid::Uuid;

fn now() -> jiff::Timestamp {
    jiff::Timestamp::now()
}

#[test]
fn attempt_walks_through_the_states() {
    let mut attempt = Attempt::new(QuestionnaireType::Phq9);
    assert_eq!(attempt.state(), AttemptState::NotStarted);

    attempt.record_answer(1, 2).unwrap();
    assert_eq!(attempt.state(), AttemptState::InProgress);

    for id in 2..=9u8 {
        attempt.record_answer(id, 1).unwrap();
    }
    assert_eq!(attempt.state(), AttemptState::Completed);
}

#[test]
fn re_answering_replaces_the_prior_value() {
    let mut attempt = Attempt::new(QuestionnaireType::Epds);
    attempt.record_answer(4, 3).unwrap();
    attempt.record_answer(4, 1).unwrap();
    assert_eq!(attempt.answers().len(), 1);
    assert_eq!(attempt.progress_score(), 1);
}

#[test]
fn clearing_an_answer_moves_back_to_not_started() {
    let mut attempt = Attempt::new(QuestionnaireType::Epds);
    attempt.record_answer(1, 2).unwrap();
    assert_eq!(attempt.clear_answer(1), Some(2));
    assert_eq!(attempt.state(), AttemptState::NotStarted);
}

#[test]
fn unknown_question_is_rejected() {
    let mut attempt = Attempt::new(QuestionnaireType::Phq9);
    let err = attempt.record_answer(10, 1).unwrap_err();
    assert_eq!(
        err,
        ScreeningError::UnknownQuestion {
            questionnaire: QuestionnaireType::Phq9,
            question_id: 10,
        }
    );
}

#[test]
fn invalid_answer_value_is_rejected() {
    let mut attempt = Attempt::new(QuestionnaireType::Epds);
    let err = attempt.record_answer(1, 4).unwrap_err();
    assert_eq!(
        err,
        ScreeningError::InvalidAnswerValue {
            question_id: 1,
            value: 4,
        }
    );
}

// A partial sum must never be scored as final.
#[test]
fn submitting_nine_of_ten_epds_answers_fails() {
    let answers: AnswerSet = (1..=9u8).map(|id| (id, 1u8)).collect();
    let err = submit_assessment(QuestionnaireType::Epds, answers, Uuid::new_v4(), now());
    assert_eq!(
        err.unwrap_err(),
        ScreeningError::IncompleteAssessment {
            answered: 9,
            expected: 10,
        }
    );
}

#[test]
fn finalize_rejects_an_in_progress_attempt() {
    let mut attempt = Attempt::new(QuestionnaireType::Epds);
    attempt.record_answer(1, 1).unwrap();
    let err = attempt.finalize(Uuid::new_v4(), now()).unwrap_err();
    assert!(matches!(err, ScreeningError::IncompleteAssessment { .. }));
}

#[test]
fn completed_epds_attempt_produces_a_full_result() {
    let values = [1u8, 1, 2, 1, 1, 1, 2, 1, 1, 0];
    let user_id = Uuid::new_v4();

    let mut attempt = Attempt::new(QuestionnaireType::Epds);
    for (i, &value) in values.iter().enumerate() {
        attempt.record_answer(i as u8 + 1, value).unwrap();
    }

    let result = attempt.finalize(user_id, now()).unwrap();
    assert_eq!(result.user_id, user_id);
    assert_eq!(result.score, 11);
    assert_eq!(result.severity, "Moderate Risk");
    assert_eq!(result.color_tag, "warning");
    assert!(!result.self_harm_risk);
    assert_eq!(result.answers.len(), 10);
}

#[test]
fn elevated_risk_item_survives_finalization() {
    let mut answers: AnswerSet = (1..=10u8).map(|id| (id, 0u8)).collect();
    answers.insert(10, 2);
    let result =
        submit_assessment(QuestionnaireType::Epds, answers, Uuid::new_v4(), now()).unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.severity, "Low Risk");
    assert!(result.self_harm_risk);
}
