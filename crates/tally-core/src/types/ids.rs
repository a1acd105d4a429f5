use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Position of a row in the answer log. Assigned by the store on append;
/// stable for the lifetime of the row, so it doubles as the deterministic
/// tie-break when two events carry the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct RowId(i64);

impl RowId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
