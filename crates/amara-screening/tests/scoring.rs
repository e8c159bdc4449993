use amara_core::models::AnswerSet;
use amara_screening::scoring::compute_score;

#[test]
fn empty_answer_set_scores_zero() {
    assert_eq!(compute_score(&AnswerSet::new()), 0);
}

#[test]
fn score_is_the_sum_of_values() {
    let mut answers = AnswerSet::new();
    for (id, value) in [(1u8, 1u8), (2, 1), (3, 2), (4, 1), (5, 3)] {
        answers.insert(id, value);
    }
    assert_eq!(compute_score(&answers), 8);
}

#[test]
fn insertion_order_does_not_matter() {
    let entries = [(1u8, 2u8), (2, 0), (3, 3), (4, 1), (5, 2)];

    let mut forward = AnswerSet::new();
    for (id, value) in entries {
        forward.insert(id, value);
    }
    let mut backward = AnswerSet::new();
    for (id, value) in entries.iter().rev() {
        backward.insert(*id, *value);
    }

    assert_eq!(compute_score(&forward), compute_score(&backward));
}

#[test]
fn partial_coverage_still_scores() {
    let mut answers = AnswerSet::new();
    answers.insert(7, 3);
    assert_eq!(compute_score(&answers), 3);
}
