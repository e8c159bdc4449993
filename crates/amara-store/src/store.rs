use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use amara_core::models::{AssessmentResult, CarePlan, Goal, GoalTemplate};
use amara_screening::care_plan::generate_care_plan;

use crate::error::StoreError;

#[derive(Default)]
struct State {
    /// Per-user assessment history, oldest first.
    assessments: HashMap<Uuid, Vec<AssessmentResult>>,
    care_plans: HashMap<Uuid, CarePlan>,
    goals: HashMap<Uuid, Vec<Goal>>,
}

impl State {
    /// Create goals from templates unless the user already has goals.
    /// Goals carry user progress, so a retake must never recreate them.
    fn goals_from_templates(
        &mut self,
        user_id: Uuid,
        templates: &[GoalTemplate],
        now: jiff::Timestamp,
    ) -> Vec<Goal> {
        self.goals
            .entry(user_id)
            .or_insert_with(|| {
                templates
                    .iter()
                    .map(|t| Goal {
                        id: Uuid::new_v4(),
                        user_id,
                        title: t.title.clone(),
                        description: t.description.clone(),
                        completed: false,
                        created_at: now,
                        updated_at: now,
                    })
                    .collect()
            })
            .clone()
    }
}

/// In-memory store shared across request handlers. All bookkeeping that
/// must not race (assessment insert, care plan replacement, first-time goal
/// creation) happens under a single write lock in [`record_submission`].
///
/// [`record_submission`]: MemoryStore::record_submission
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized assessment without touching the care plan.
    pub async fn save_assessment(&self, result: AssessmentResult) -> Uuid {
        let id = result.id;
        let mut state = self.state.write().await;
        info!(
            user_id = %result.user_id,
            questionnaire = %result.questionnaire,
            score = result.score,
            self_harm_risk = result.self_harm_risk,
            "assessment saved"
        );
        state.assessments.entry(result.user_id).or_default().push(result);
        id
    }

    /// Record a completed submission: append the assessment, regenerate the
    /// user's care plan from its score, and create goals from the plan's
    /// templates if the user has none yet. One write lock for the whole
    /// step, so two concurrent first-time submissions cannot leave two
    /// plans or two goal sets.
    pub async fn record_submission(&self, result: AssessmentResult) -> CarePlan {
        let mut state = self.state.write().await;

        let plan = generate_care_plan(
            result.questionnaire,
            result.score,
            result.user_id,
            result.completed_at,
        );
        state.goals_from_templates(result.user_id, &plan.goals, result.completed_at);
        state.care_plans.insert(result.user_id, plan.clone());

        info!(
            user_id = %result.user_id,
            questionnaire = %result.questionnaire,
            score = result.score,
            severity = %result.severity,
            self_harm_risk = result.self_harm_risk,
            care_plan_id = %plan.id,
            "submission recorded"
        );
        state.assessments.entry(result.user_id).or_default().push(result);

        plan
    }

    pub async fn latest_assessment(&self, user_id: Uuid) -> Option<AssessmentResult> {
        let state = self.state.read().await;
        state
            .assessments
            .get(&user_id)
            .and_then(|history| history.last().cloned())
    }

    /// Full assessment history, newest first.
    pub async fn assessments_for(&self, user_id: Uuid) -> Vec<AssessmentResult> {
        let state = self.state.read().await;
        state
            .assessments
            .get(&user_id)
            .map(|history| history.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Replace a user's care plan directly. Most callers want
    /// [`record_submission`](Self::record_submission) instead.
    pub async fn save_care_plan(&self, plan: CarePlan) -> Uuid {
        let id = plan.id;
        let mut state = self.state.write().await;
        info!(user_id = %plan.user_id, care_plan_id = %id, "care plan saved");
        state.care_plans.insert(plan.user_id, plan);
        id
    }

    pub async fn latest_care_plan(&self, user_id: Uuid) -> Option<CarePlan> {
        let state = self.state.read().await;
        state.care_plans.get(&user_id).cloned()
    }

    /// Create goals from templates, unless the user already has goals
    /// (create-if-absent keyed by user id). Returns the user's goals either
    /// way.
    pub async fn create_goals_from_templates(
        &self,
        user_id: Uuid,
        templates: &[GoalTemplate],
    ) -> Vec<Goal> {
        let now = jiff::Timestamp::now();
        let mut state = self.state.write().await;
        state.goals_from_templates(user_id, templates, now)
    }

    pub async fn goals_for(&self, user_id: Uuid) -> Vec<Goal> {
        let state = self.state.read().await;
        state.goals.get(&user_id).cloned().unwrap_or_default()
    }

    /// Flip a goal's completion state and bump its `updated_at`.
    pub async fn toggle_goal(&self, user_id: Uuid, goal_id: Uuid) -> Result<Goal, StoreError> {
        let mut state = self.state.write().await;
        let goal = state
            .goals
            .get_mut(&user_id)
            .and_then(|goals| goals.iter_mut().find(|g| g.id == goal_id))
            .ok_or(StoreError::GoalNotFound { user_id, goal_id })?;

        goal.completed = !goal.completed;
        goal.updated_at = jiff::Timestamp::now();
        info!(user_id = %user_id, goal_id = %goal_id, completed = goal.completed, "goal toggled");
        Ok(goal.clone())
    }
}
