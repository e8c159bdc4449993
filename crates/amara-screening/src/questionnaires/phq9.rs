use amara_core::models::{AnswerOption, Question, QuestionnaireType};

use crate::Questionnaire;
use crate::scoring::SeverityBand;

/// PHQ-9: Patient Health Questionnaire.
/// 9 items, each scored 0–3 on a shared frequency scale ("over the last two
/// weeks, how often have you been bothered by..."). Total 0–27. Item 9
/// probes self-harm/suicidal ideation.
pub struct Phq9;

const BANDS: &[SeverityBand] = &[
    SeverityBand {
        min: 0,
        max: 4,
        severity: "Minimal",
        color_tag: "success",
        description: "Your responses suggest minimal symptoms of depression. \
            Keep up the routines that are working for you.",
    },
    SeverityBand {
        min: 5,
        max: 9,
        severity: "Mild",
        color_tag: "success-light",
        description: "Your responses suggest mild symptoms of depression. \
            Keep an eye on how you feel and consider re-screening in a couple of weeks.",
    },
    SeverityBand {
        min: 10,
        max: 14,
        severity: "Moderate",
        color_tag: "warning",
        description: "Your responses suggest moderate symptoms of depression. \
            Talking with a healthcare provider about how you have been feeling is recommended.",
    },
    SeverityBand {
        min: 15,
        max: 19,
        severity: "Moderately Severe",
        color_tag: "warning-dark",
        description: "Your responses suggest moderately severe symptoms of depression. \
            Please consider contacting a mental health professional for support and treatment.",
    },
    SeverityBand {
        min: 20,
        max: 27,
        severity: "Severe",
        color_tag: "destructive",
        description: "Your responses suggest severe symptoms of depression. \
            Please seek professional help promptly. Support is available and treatment works.",
    },
];

impl Questionnaire for Phq9 {
    fn questionnaire_type(&self) -> QuestionnaireType {
        QuestionnaireType::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself, or that you are a failure, \
                 or have let yourself or your family down",
                "Trouble concentrating on things, such as reading or watching television",
                "Moving or speaking so slowly that other people could have noticed, \
                 or the opposite: being so fidgety or restless that you have been \
                 moving around a lot more than usual",
                "Thoughts that you would be better off dead, \
                 or of hurting yourself in some way",
            ];

            items
                .iter()
                .enumerate()
                .map(|(i, text)| Question {
                    id: i as u8 + 1,
                    text: text.to_string(),
                    options: frequency_options(),
                })
                .collect()
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        BANDS
    }

    fn risk_item(&self) -> u8 {
        9
    }
}

/// The shared PHQ-9 response scale, ascending for every item.
fn frequency_options() -> Vec<AnswerOption> {
    [
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ]
    .iter()
    .map(|&(value, label)| AnswerOption {
        value,
        label: label.to_string(),
    })
    .collect()
}
