use amara_core::models::{AnswerOption, Question, QuestionnaireType};

use crate::Questionnaire;
use crate::scoring::SeverityBand;

/// EPDS: Edinburgh Postnatal Depression Scale.
/// 10 items, each scored 0–3. Total 0–30. Item 10 probes self-harm.
///
/// Options are listed in the validated instrument's display order: items
/// 3, 5, 6, 7, 8, 9 and 10 present their options descending (3,2,1,0).
pub struct Epds;

const BANDS: &[SeverityBand] = &[
    SeverityBand {
        min: 0,
        max: 8,
        severity: "Low Risk",
        color_tag: "success",
        description: "Your responses suggest a low likelihood of postnatal depression. \
            Keep looking after yourself and check in again in a few weeks.",
    },
    SeverityBand {
        min: 9,
        max: 12,
        severity: "Moderate Risk",
        color_tag: "warning",
        description: "Your responses suggest you may be experiencing some symptoms of \
            postnatal depression. Consider talking with your midwife, health visitor, \
            or doctor about how you have been feeling.",
    },
    SeverityBand {
        min: 13,
        max: 30,
        severity: "High Risk",
        color_tag: "destructive",
        description: "Your responses suggest a high likelihood of postnatal depression. \
            Please reach out to your doctor or a mental health professional soon. \
            You do not have to manage this alone.",
    },
];

impl Questionnaire for Epds {
    fn questionnaire_type(&self) -> QuestionnaireType {
        QuestionnaireType::Epds
    }

    fn name(&self) -> &str {
        "EPDS"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                question(
                    1,
                    "I have been able to laugh and see the funny side of things",
                    [
                        (0, "As much as I always could"),
                        (1, "Not quite so much now"),
                        (2, "Definitely not so much now"),
                        (3, "Not at all"),
                    ],
                ),
                question(
                    2,
                    "I have looked forward with enjoyment to things",
                    [
                        (0, "As much as I ever did"),
                        (1, "Rather less than I used to"),
                        (2, "Definitely less than I used to"),
                        (3, "Hardly at all"),
                    ],
                ),
                question(
                    3,
                    "I have blamed myself unnecessarily when things went wrong",
                    [
                        (3, "Yes, most of the time"),
                        (2, "Yes, some of the time"),
                        (1, "Not very often"),
                        (0, "No, never"),
                    ],
                ),
                question(
                    4,
                    "I have been anxious or worried for no good reason",
                    [
                        (0, "No, not at all"),
                        (1, "Hardly ever"),
                        (2, "Yes, sometimes"),
                        (3, "Yes, very often"),
                    ],
                ),
                question(
                    5,
                    "I have felt scared or panicky for no very good reason",
                    [
                        (3, "Yes, quite a lot"),
                        (2, "Yes, sometimes"),
                        (1, "No, not much"),
                        (0, "No, not at all"),
                    ],
                ),
                question(
                    6,
                    "Things have been getting on top of me",
                    [
                        (3, "Yes, most of the time I haven't been able to cope at all"),
                        (2, "Yes, sometimes I haven't been coping as well as usual"),
                        (1, "No, most of the time I have coped quite well"),
                        (0, "No, I have been coping as well as ever"),
                    ],
                ),
                question(
                    7,
                    "I have been so unhappy that I have had difficulty sleeping",
                    [
                        (3, "Yes, most of the time"),
                        (2, "Yes, sometimes"),
                        (1, "Not very often"),
                        (0, "No, not at all"),
                    ],
                ),
                question(
                    8,
                    "I have felt sad or miserable",
                    [
                        (3, "Yes, most of the time"),
                        (2, "Yes, quite often"),
                        (1, "Not very often"),
                        (0, "No, not at all"),
                    ],
                ),
                question(
                    9,
                    "I have been so unhappy that I have been crying",
                    [
                        (3, "Yes, most of the time"),
                        (2, "Yes, quite often"),
                        (1, "Only occasionally"),
                        (0, "No, never"),
                    ],
                ),
                question(
                    10,
                    "The thought of harming myself has occurred to me",
                    [
                        (3, "Yes, quite often"),
                        (2, "Sometimes"),
                        (1, "Hardly ever"),
                        (0, "Never"),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        BANDS
    }

    fn risk_item(&self) -> u8 {
        10
    }
}

fn question(id: u8, text: &str, options: [(u8, &str); 4]) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options
            .iter()
            .map(|&(value, label)| AnswerOption {
                value,
                label: label.to_string(),
            })
            .collect(),
    }
}
