use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::questionnaire::{AnswerSet, QuestionnaireType};

/// A severity band lookup result: what the client renders next to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub severity: String,
    pub description: String,
    pub color_tag: String,
}

/// A finalized screening attempt. Immutable once created; a retake produces
/// a new result and never touches a prior one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub questionnaire: QuestionnaireType,
    pub score: u16,
    pub answers: AnswerSet,
    pub severity: String,
    pub description: String,
    pub color_tag: String,
    pub self_harm_risk: bool,
    pub completed_at: jiff::Timestamp,
}
