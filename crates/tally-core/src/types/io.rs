use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionRef {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_id: String,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub answer: String,
}

/// Submission payload. Clients send either one question at a time (a yes/no
/// tap) or the whole checklist in one batch; both shapes land in the same
/// handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SubmitInput {
    #[serde(rename_all = "camelCase")]
    Batch {
        area: String,
        checklist_id: String,
        answers: Vec<AnswerInput>,
    },
    #[serde(rename_all = "camelCase")]
    Single {
        area: String,
        checklist_id: String,
        question: QuestionRef,
        #[serde(default)]
        answer: String,
    },
}

/// A validated submission, normalized to the batch shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub area: String,
    pub checklist_id: String,
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubmitOutcome {
    pub appended: usize,
    pub updated: usize,
}
