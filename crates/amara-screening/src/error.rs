use amara_core::models::QuestionnaireType;
use thiserror::Error;

/// Validation failures detected before any score or interpretation is
/// computed. None of these is retryable; they indicate caller error, and a
/// partially computed result never escapes past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("unknown question {question_id} for questionnaire '{questionnaire}'")]
    UnknownQuestion {
        questionnaire: QuestionnaireType,
        question_id: u8,
    },

    #[error("invalid answer value {value} for question {question_id}")]
    InvalidAnswerValue { question_id: u8, value: u8 },

    #[error("incomplete assessment: {answered} of {expected} questions answered")]
    IncompleteAssessment { answered: usize, expected: usize },

    #[error("score {score} is out of range for questionnaire '{questionnaire}'")]
    ScoreOutOfRange {
        questionnaire: QuestionnaireType,
        score: u16,
    },
}
