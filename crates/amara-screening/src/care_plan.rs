use amara_core::models::{
    CarePlan, GoalTemplate, QuestionnaireType, Recommendation, RecommendationCategory,
};
use uuid::Uuid;

use RecommendationCategory::{Body, Mind, Support};

/// Derive a care plan from a screening result: a fixed self-care baseline,
/// plus severity-specific items layered on top. Deterministic in
/// `(ty, score)` apart from the id and timestamps stamped in.
pub fn generate_care_plan(
    ty: QuestionnaireType,
    score: u16,
    user_id: Uuid,
    generated_at: jiff::Timestamp,
) -> CarePlan {
    let mut mind = vec![
        item(
            Mind,
            "Mindfulness Practice",
            "Spend ten minutes a day on a guided mindfulness or breathing exercise.",
        ),
        item(
            Mind,
            "Thought Journal",
            "Write down difficult thoughts as they come up and note what triggered them.",
        ),
    ];
    let mut body = vec![
        item(
            Body,
            "Sleep Optimization",
            "Protect a consistent wind-down routine and rest when the baby rests where you can.",
        ),
        item(
            Body,
            "Gentle Movement",
            "Aim for light daily movement, such as stretching or a short walk.",
        ),
    ];
    let mut support = vec![
        item(
            Support,
            "Weekly Support Group",
            "Join a weekly group for new parents to share experiences and feel less alone.",
        ),
        item(
            Support,
            "Communication Templates",
            "Use ready-made phrases to tell your partner or family what help you need.",
        ),
    ];

    match ty {
        QuestionnaireType::Epds => {
            if score > 13 {
                support.push(item(
                    Support,
                    "Professional Therapy",
                    "Schedule regular sessions with a perinatal mental health professional.",
                ));
                mind.push(item(
                    Mind,
                    "Structured Self-Care Plan",
                    "Work through a structured daily self-care checklist with your provider.",
                ));
            } else if score > 9 {
                mind.push(item(
                    Mind,
                    "Mood Monitoring",
                    "Track your mood daily and re-screen in two weeks to watch for changes.",
                ));
            }
        }
        QuestionnaireType::Phq9 => {
            if score >= 20 {
                support.push(item(
                    Support,
                    "Urgent Mental Health Support",
                    "Contact a mental health professional or crisis line as soon as possible.",
                ));
                mind.push(item(
                    Mind,
                    "Crisis Response Plan",
                    "Write down warning signs, coping steps, and who to call when things escalate.",
                ));
            } else if score >= 15 {
                support.push(item(
                    Support,
                    "Professional Therapy",
                    "Schedule regular sessions with a mental health professional.",
                ));
                body.push(item(
                    Body,
                    "Regular Physical Activity",
                    "Build up to thirty minutes of moderate activity most days.",
                ));
            } else if score >= 10 {
                mind.push(item(
                    Mind,
                    "Structured Daily Routine",
                    "Anchor each day with fixed wake, meal, and rest times.",
                ));
            }
        }
    }

    CarePlan {
        id: Uuid::new_v4(),
        user_id,
        source: ty,
        source_score: score,
        mind_and_emotions: mind,
        body_and_rest: body,
        support_and_connection: support,
        goals: goal_templates(),
        generated_at,
    }
}

/// The three baseline goal templates every plan carries, regardless of score.
pub fn goal_templates() -> Vec<GoalTemplate> {
    [
        (
            "Walk Outside",
            "Take a short walk outside once a day, even just around the block.",
        ),
        (
            "Deep Breathing",
            "Practice five minutes of slow, deep breathing when you feel overwhelmed.",
        ),
        (
            "Connect With Someone",
            "Reach out to a friend or family member you trust, once a day.",
        ),
    ]
    .iter()
    .map(|&(title, description)| GoalTemplate {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn item(category: RecommendationCategory, title: &str, description: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}
