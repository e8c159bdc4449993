pub mod assessment;
pub mod care_plan;
pub mod goal;
pub mod questionnaire;

pub use assessment::{AssessmentResult, Interpretation};
pub use care_plan::{CarePlan, GoalTemplate, Recommendation, RecommendationCategory};
pub use goal::Goal;
pub use questionnaire::{AnswerOption, AnswerSet, Question, QuestionnaireType};
