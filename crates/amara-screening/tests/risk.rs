use amara_core::models::{AnswerSet, QuestionnaireType};
use amara_screening::is_self_harm_risk;

fn epds_answers(values: [u8; 10]) -> AnswerSet {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as u8 + 1, v))
        .collect()
}

// A low aggregate score must not mask an elevated answer to the self-harm
// item: all zeros except item 10 = 1 totals 1 ("Low Risk") but still flags.
#[test]
fn flag_is_independent_of_total_score() {
    let answers = epds_answers([0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert!(is_self_harm_risk(QuestionnaireType::Epds, &answers));
}

#[test]
fn zero_on_the_risk_item_does_not_flag() {
    let answers = epds_answers([3, 3, 3, 3, 3, 3, 3, 3, 3, 0]);
    assert!(!is_self_harm_risk(QuestionnaireType::Epds, &answers));
}

#[test]
fn unanswered_risk_item_does_not_flag() {
    let mut answers = AnswerSet::new();
    answers.insert(1, 2);
    answers.insert(2, 2);
    assert!(!is_self_harm_risk(QuestionnaireType::Epds, &answers));
}

#[test]
fn phq9_flags_on_item_nine() {
    let mut answers: AnswerSet = (1..=9u8).map(|id| (id, 0u8)).collect();
    assert!(!is_self_harm_risk(QuestionnaireType::Phq9, &answers));
    answers.insert(9, 2);
    assert!(is_self_harm_risk(QuestionnaireType::Phq9, &answers));
}
