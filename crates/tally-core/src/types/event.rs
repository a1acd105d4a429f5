use crate::types::ids::RowId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One answer in the log. `date` is derived from `timestamp` at write time
/// and never recomputed, so a row stays attributed to the day it was
/// submitted on even if it is read back in another timezone or year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerEvent {
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub area: String,
    pub checklist_id: String,
    pub question_id: String,
    pub question_text: String,
    pub answer: String,
    pub user: String,
}

/// An answer event together with its position in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredAnswer {
    pub row: RowId,
    pub event: AnswerEvent,
}
