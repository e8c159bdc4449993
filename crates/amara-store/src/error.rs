use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("goal not found: {goal_id} for user {user_id}")]
    GoalNotFound { user_id: Uuid, goal_id: Uuid },
}
