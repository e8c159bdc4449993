use amara_core::models::QuestionnaireType;
use amara_screening::{Questionnaire, all_questionnaires, get_questions, questionnaire};

#[test]
fn question_counts_are_fixed() {
    assert_eq!(get_questions(QuestionnaireType::Epds).len(), 10);
    assert_eq!(get_questions(QuestionnaireType::Phq9).len(), 9);
}

#[test]
fn max_scores_follow_counts() {
    assert_eq!(questionnaire(QuestionnaireType::Epds).max_score(), 30);
    assert_eq!(questionnaire(QuestionnaireType::Phq9).max_score(), 27);
}

#[test]
fn repeated_lookups_return_equal_questions() {
    let first = get_questions(QuestionnaireType::Epds);
    let second = get_questions(QuestionnaireType::Epds);
    assert_eq!(first, second);
}

#[test]
fn ids_are_one_based_and_sequential() {
    for q in all_questionnaires() {
        for (i, question) in q.questions().iter().enumerate() {
            assert_eq!(question.id as usize, i + 1, "{}", q.name());
        }
    }
}

#[test]
fn every_question_has_a_permutation_of_values() {
    for q in all_questionnaires() {
        for question in q.questions() {
            assert_eq!(question.options.len(), 4);
            let mut values: Vec<u8> = question.options.iter().map(|o| o.value).collect();
            values.sort_unstable();
            assert_eq!(values, vec![0, 1, 2, 3], "{} item {}", q.name(), question.id);
        }
    }
}

// Items 3, 5, 6, 7, 8, 9, 10 of the EPDS present options descending; the
// value-to-label pairing is what front ends must trust.
#[test]
fn epds_display_order_matches_instrument() {
    let descending = [3u8, 5, 6, 7, 8, 9, 10];
    for question in get_questions(QuestionnaireType::Epds) {
        let displayed: Vec<u8> = question.options.iter().map(|o| o.value).collect();
        if descending.contains(&question.id) {
            assert_eq!(displayed, vec![3, 2, 1, 0], "item {}", question.id);
        } else {
            assert_eq!(displayed, vec![0, 1, 2, 3], "item {}", question.id);
        }
    }
}

#[test]
fn phq9_items_share_the_frequency_scale() {
    let labels = [
        "Not at all",
        "Several days",
        "More than half the days",
        "Nearly every day",
    ];
    for question in get_questions(QuestionnaireType::Phq9) {
        for (option, expected) in question.options.iter().zip(labels) {
            assert_eq!(option.label, expected);
        }
    }
}

#[test]
fn risk_items_are_the_last_items() {
    assert_eq!(questionnaire(QuestionnaireType::Epds).risk_item(), 10);
    assert_eq!(questionnaire(QuestionnaireType::Phq9).risk_item(), 9);
}
