use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unreadable: {message}")]
    Read { message: String },
    #[error("catalog malformed: {message}")]
    Parse { message: String },
    #[error("unknown area: {area}")]
    UnknownArea { area: String },
    #[error("checklist not found: {area}/{checklist_id}")]
    NotFound { area: String, checklist_id: String },
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("answer log unavailable: {message}")]
    Persistence { message: String },
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
