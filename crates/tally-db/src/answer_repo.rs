use crate::util::{DbError, from_rfc3339, from_ymd, to_rfc3339, to_ymd};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tally_core::answers::AnswerRepository;
use tally_core::error::LogError;
use tally_core::types::{AnswerEvent, RowId, StoredAnswer};

pub struct AnswerRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AnswerRepository for AnswerRepo<'_> {
    fn append(&self, events: &[AnswerEvent]) -> Result<(), LogError> {
        let sql = "INSERT INTO answers (ts, date, area, checklist_id, question_id, question_text, answer, user) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
        let mut stmt = self.conn.prepare(sql).map_err(persistence)?;
        for event in events {
            stmt.execute((
                to_rfc3339(&event.timestamp),
                to_ymd(event.date),
                event.area.as_str(),
                event.checklist_id.as_str(),
                event.question_id.as_str(),
                event.question_text.as_str(),
                event.answer.as_str(),
                event.user.as_str(),
            ))
            .map_err(persistence)?;
        }
        Ok(())
    }

    fn update(
        &self,
        row: RowId,
        timestamp: DateTime<Utc>,
        answer: &str,
        user: &str,
    ) -> Result<(), LogError> {
        let sql = "UPDATE answers SET ts = ?1, answer = ?2, user = ?3 WHERE id = ?4";
        let changed = self
            .conn
            .execute(sql, (to_rfc3339(&timestamp), answer, user, row.value()))
            .map_err(persistence)?;
        if changed == 0 {
            return Err(LogError::Persistence {
                message: format!("answer row {row} does not exist"),
            });
        }
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<StoredAnswer>, LogError> {
        let sql = "SELECT id, ts, date, area, checklist_id, question_id, question_text, answer, user FROM answers ORDER BY id ASC";
        let mut stmt = self.conn.prepare(sql).map_err(persistence)?;
        let mut rows = stmt.query([]).map_err(persistence)?;
        let mut answers = Vec::new();
        while let Some(row) = rows.next().map_err(persistence)? {
            answers.push(map_answer_row(row)?);
        }
        Ok(answers)
    }
}

fn map_answer_row(row: &rusqlite::Row<'_>) -> Result<StoredAnswer, LogError> {
    let id: i64 = row.get(0).map_err(persistence)?;
    let ts: String = row.get(1).map_err(persistence)?;
    let date: String = row.get(2).map_err(persistence)?;
    let area: String = row.get(3).map_err(persistence)?;
    let checklist_id: String = row.get(4).map_err(persistence)?;
    let question_id: String = row.get(5).map_err(persistence)?;
    let question_text: String = row.get(6).map_err(persistence)?;
    let answer: String = row.get(7).map_err(persistence)?;
    let user: String = row.get(8).map_err(persistence)?;
    Ok(StoredAnswer {
        row: RowId::new(id),
        event: AnswerEvent {
            timestamp: from_rfc3339(&ts).map_err(decode)?,
            date: from_ymd(&date).map_err(decode)?,
            area,
            checklist_id,
            question_id,
            question_text,
            answer,
            user,
        },
    })
}

fn persistence(err: rusqlite::Error) -> LogError {
    LogError::Persistence {
        message: err.to_string(),
    }
}

fn decode(err: DbError) -> LogError {
    LogError::Persistence {
        message: err.to_string(),
    }
}
