use amara_core::models::{AnswerSet, AssessmentResult, QuestionnaireType};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ScreeningError;
use crate::{questionnaire, scoring};

/// Where an in-flight attempt stands. Derived from answer coverage, never
/// stored separately, so it cannot drift from the answers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AttemptState {
    NotStarted,
    InProgress,
    Completed,
}

/// One in-flight pass through a questionnaire.
///
/// Answers may be overwritten in place while navigating back and forth;
/// finalizing consumes the attempt and emits an immutable
/// [`AssessmentResult`]. A retake is a fresh `Attempt`, never a resumed one.
#[derive(Debug, Clone)]
pub struct Attempt {
    questionnaire: QuestionnaireType,
    answers: AnswerSet,
}

impl Attempt {
    pub fn new(questionnaire: QuestionnaireType) -> Self {
        Self {
            questionnaire,
            answers: AnswerSet::new(),
        }
    }

    pub fn questionnaire(&self) -> QuestionnaireType {
        self.questionnaire
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record an answer, replacing any prior value for the same question.
    pub fn record_answer(&mut self, question_id: u8, value: u8) -> Result<(), ScreeningError> {
        questionnaire(self.questionnaire).validate_answer(question_id, value)?;
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Withdraw an answer (backward navigation). Returns the prior value.
    pub fn clear_answer(&mut self, question_id: u8) -> Option<u8> {
        self.answers.remove(&question_id)
    }

    pub fn state(&self) -> AttemptState {
        let expected = questionnaire(self.questionnaire).question_count();
        match self.answers.len() {
            0 => AttemptState::NotStarted,
            n if n < expected => AttemptState::InProgress,
            _ => AttemptState::Completed,
        }
    }

    /// Running total over the answers recorded so far, for live display.
    pub fn progress_score(&self) -> u16 {
        scoring::compute_score(&self.answers)
    }

    /// Finalize the attempt: requires full coverage, then computes score,
    /// interpretation, and the self-harm flag atomically.
    pub fn finalize(
        self,
        user_id: Uuid,
        completed_at: jiff::Timestamp,
    ) -> Result<AssessmentResult, ScreeningError> {
        submit_assessment(self.questionnaire, self.answers, user_id, completed_at)
    }
}

/// One-shot submission for callers that already hold a full answer set
/// (e.g., the API server receiving a completed form).
///
/// Validates every answer and requires full coverage before anything is
/// computed; an incomplete set is rejected rather than scored as a partial
/// sum.
pub fn submit_assessment(
    ty: QuestionnaireType,
    answers: AnswerSet,
    user_id: Uuid,
    completed_at: jiff::Timestamp,
) -> Result<AssessmentResult, ScreeningError> {
    let q = questionnaire(ty);
    q.validate_answers(&answers)?;

    let expected = q.question_count();
    if answers.len() < expected {
        return Err(ScreeningError::IncompleteAssessment {
            answered: answers.len(),
            expected,
        });
    }

    let score = scoring::compute_score(&answers);
    let interpretation = q.interpret(score)?;
    let self_harm_risk = q.is_self_harm_risk(&answers);

    Ok(AssessmentResult {
        id: Uuid::new_v4(),
        user_id,
        questionnaire: ty,
        score,
        answers,
        severity: interpretation.severity,
        description: interpretation.description,
        color_tag: interpretation.color_tag,
        self_harm_risk,
        completed_at,
    })
}
