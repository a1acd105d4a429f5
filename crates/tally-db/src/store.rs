use crate::answer_repo::AnswerRepo;
use rusqlite::Connection;
use tally_core::store::Store;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for DbStore {
    type Answers<'a>
        = AnswerRepo<'a>
    where
        Self: 'a;

    fn answers(&self) -> Self::Answers<'_> {
        AnswerRepo::new(&self.conn)
    }
}
