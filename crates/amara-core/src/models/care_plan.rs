use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::questionnaire::QuestionnaireType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationCategory {
    Mind,
    Body,
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
}

/// A suggested goal carried on a care plan. Separate from a persisted
/// [`super::goal::Goal`], which additionally tracks completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalTemplate {
    pub title: String,
    pub description: String,
}

/// Structured self-care recommendations derived from a screening score.
/// Regenerated whenever a new assessment completes; `source` and
/// `source_score` record which result produced it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source: QuestionnaireType,
    pub source_score: u16,
    pub mind_and_emotions: Vec<Recommendation>,
    pub body_and_rest: Vec<Recommendation>,
    pub support_and_connection: Vec<Recommendation>,
    pub goals: Vec<GoalTemplate>,
    pub generated_at: jiff::Timestamp,
}
