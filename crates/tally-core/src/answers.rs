use crate::error::LogError;
use crate::types::{AnswerEvent, RowId, StoredAnswer};
use chrono::{DateTime, Utc};

/// The answer log boundary: an ordered table that supports appending rows,
/// overwriting a row at a known position, and reading everything back in
/// insertion order. Date filtering happens client-side; the log itself has
/// no query surface.
pub trait AnswerRepository {
    fn append(&self, events: &[AnswerEvent]) -> Result<(), LogError>;

    /// Overwrite the answer at `row` in place. Timestamp, answer and user
    /// all move to the new event; the key columns stay untouched.
    fn update(
        &self,
        row: RowId,
        timestamp: DateTime<Utc>,
        answer: &str,
        user: &str,
    ) -> Result<(), LogError>;

    fn read_all(&self) -> Result<Vec<StoredAnswer>, LogError>;
}
