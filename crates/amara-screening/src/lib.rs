//! amara-screening
//!
//! The assessment engine: questionnaire definitions, scoring, severity
//! interpretation, self-harm risk flagging, and care plan derivation.
//! Pure, synchronous computation with no shared state, safe to call from
//! any number of concurrent request handlers.

pub mod attempt;
pub mod care_plan;
pub mod error;
pub mod questionnaires;
pub mod scoring;

use amara_core::models::{AnswerSet, Interpretation, Question, QuestionnaireType};

use error::ScreeningError;
use scoring::SeverityBand;

pub use attempt::submit_assessment;
pub use care_plan::generate_care_plan;
pub use scoring::compute_score;

/// Trait implemented by each screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Which enum variant this questionnaire backs.
    fn questionnaire_type(&self) -> QuestionnaireType;

    /// Human-readable name (e.g., "EPDS", "PHQ-9").
    fn name(&self) -> &str;

    /// The ordered question set. Fixed at process start, never mutated.
    fn questions(&self) -> &[Question];

    /// Severity bands in ascending score order. Contiguous and exhaustive
    /// over `0..=max_score()`.
    fn bands(&self) -> &[SeverityBand];

    /// The item probing self-harm/suicidal ideation (the last item in both
    /// supported instruments).
    fn risk_item(&self) -> u8;

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Highest achievable total: every item scored 3.
    fn max_score(&self) -> u16 {
        self.question_count() as u16 * 3
    }

    /// Check one answer against this questionnaire's items and their
    /// option values.
    fn validate_answer(&self, question_id: u8, value: u8) -> Result<(), ScreeningError> {
        let question = self
            .questions()
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(ScreeningError::UnknownQuestion {
                questionnaire: self.questionnaire_type(),
                question_id,
            })?;
        if !question.options.iter().any(|o| o.value == value) {
            return Err(ScreeningError::InvalidAnswerValue { question_id, value });
        }
        Ok(())
    }

    /// Check every entry in an answer set. Partial coverage is fine here;
    /// completeness is enforced at finalization, not per answer.
    fn validate_answers(&self, answers: &AnswerSet) -> Result<(), ScreeningError> {
        for (&question_id, &value) in answers {
            self.validate_answer(question_id, value)?;
        }
        Ok(())
    }

    /// Map a total score to its severity band, first match ascending.
    /// Out-of-range scores are rejected, never clamped.
    fn interpret(&self, score: u16) -> Result<Interpretation, ScreeningError> {
        self.bands()
            .iter()
            .find(|band| score >= band.min && score <= band.max)
            .map(|band| Interpretation {
                severity: band.severity.to_string(),
                description: band.description.to_string(),
                color_tag: band.color_tag.to_string(),
            })
            .ok_or(ScreeningError::ScoreOutOfRange {
                questionnaire: self.questionnaire_type(),
                score,
            })
    }

    /// True iff the dedicated self-harm item was answered with any non-zero
    /// value. Evaluated independently of the total score: a low aggregate
    /// must not mask an elevated answer to this item.
    fn is_self_harm_risk(&self, answers: &AnswerSet) -> bool {
        answers.get(&self.risk_item()).is_some_and(|&v| v > 0)
    }
}

/// Look up the (static) questionnaire backing an enum variant. Total: the
/// argument is a closed enum, so there is no unknown-type path here.
pub fn questionnaire(ty: QuestionnaireType) -> &'static dyn Questionnaire {
    match ty {
        QuestionnaireType::Epds => &questionnaires::epds::Epds,
        QuestionnaireType::Phq9 => &questionnaires::phq9::Phq9,
    }
}

/// All registered questionnaires, in display order.
pub fn all_questionnaires() -> [&'static dyn Questionnaire; 2] {
    [
        questionnaire(QuestionnaireType::Epds),
        questionnaire(QuestionnaireType::Phq9),
    ]
}

/// The ordered question set for a questionnaire type.
pub fn get_questions(ty: QuestionnaireType) -> &'static [Question] {
    questionnaire(ty).questions()
}

/// Map `(type, score)` to a severity band.
pub fn interpret(ty: QuestionnaireType, score: u16) -> Result<Interpretation, ScreeningError> {
    questionnaire(ty).interpret(score)
}

/// Whether an answer set trips the self-harm risk flag for a questionnaire.
pub fn is_self_harm_risk(ty: QuestionnaireType, answers: &AnswerSet) -> bool {
    questionnaire(ty).is_self_harm_risk(answers)
}
