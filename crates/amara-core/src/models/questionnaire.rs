use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The two screening instruments the system administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionnaireType {
    /// Edinburgh Postnatal Depression Scale, 10 items, total 0–30.
    Epds,
    /// Patient Health Questionnaire, 9 items, total 0–27.
    Phq9,
}

impl fmt::Display for QuestionnaireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epds => write!(f, "epds"),
            Self::Phq9 => write!(f, "phq9"),
        }
    }
}

impl FromStr for QuestionnaireType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epds" => Ok(Self::Epds),
            "phq9" => Ok(Self::Phq9),
            other => Err(CoreError::InvalidQuestionnaireType(other.to_string())),
        }
    }
}

/// One selectable response to a question.
///
/// Options are stored in UI display order; `value` is the scoring value
/// attached to the label and is canonical regardless of position. EPDS items
/// 3, 5, 6, 7, 8, 9 and 10 display their options in descending value order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

/// A single questionnaire item. `id` is 1-based and order-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u8,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Question id → selected option value.
pub type AnswerSet = BTreeMap<u8, u8>;
