use crate::answers::AnswerRepository;
use crate::catalog::Catalog;
use crate::completion;
use crate::dashboard;
use crate::error::TrackerError;
use crate::store::Store;
use crate::types::{AnswerEvent, DashboardStats, SubmitInput, SubmitOutcome, WeeklyReport};
use crate::validation::validate_submit;
use crate::weekly;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user: Option<String>,
    pub correlation_id: Option<String>,
}

impl RequestContext {
    pub fn new(user: Option<String>, correlation_id: Option<String>) -> Self {
        Self {
            user,
            correlation_id,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None, None)
    }

    pub fn user_or_unknown(&self) -> &str {
        self.user
            .as_deref()
            .filter(|user| !user.is_empty())
            .unwrap_or("unknown")
    }
}

/// Entry point to the domain: owns the immutable catalog and a store handle,
/// hands out one sub-API per operation.
pub struct Tracker<S: Store> {
    store: S,
    catalog: Catalog,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    pub fn submissions(&self) -> SubmissionsApi<'_, S> {
        SubmissionsApi { core: self }
    }

    pub fn completion(&self) -> CompletionApi<'_, S> {
        CompletionApi { core: self }
    }

    pub fn weekly(&self) -> WeeklyApi<'_, S> {
        WeeklyApi { core: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_, S> {
        DashboardApi { core: self }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub struct SubmissionsApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> SubmissionsApi<'_, S> {
    /// Upsert-by-key write path: one write per question. Rows matching
    /// (`date`, `area`, `checklist_id`, `question_id`) are overwritten in
    /// place (the last matching row when re-answers already piled up);
    /// everything else is appended in one batch with a shared timestamp.
    /// Rows written before a failure stay written.
    pub fn submit(
        &self,
        ctx: &RequestContext,
        input: SubmitInput,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, TrackerError> {
        let submission = validate_submit(input)?;
        let user = ctx.user_or_unknown().to_string();
        let date = now.date_naive();

        let repo = self.core.store.answers();
        let existing = repo.read_all()?;

        let mut appends: Vec<AnswerEvent> = Vec::new();
        let mut updated = 0;
        for answer in submission.answers {
            let hit = existing.iter().rev().find(|stored| {
                stored.event.date == date
                    && stored.event.area == submission.area
                    && stored.event.checklist_id == submission.checklist_id
                    && stored.event.question_id == answer.question_id
            });
            match hit {
                Some(stored) => {
                    repo.update(stored.row, now, &answer.answer, &user)?;
                    updated += 1;
                }
                None => appends.push(AnswerEvent {
                    timestamp: now,
                    date,
                    area: submission.area.clone(),
                    checklist_id: submission.checklist_id.clone(),
                    question_id: answer.question_id,
                    question_text: answer.question_text,
                    answer: answer.answer,
                    user: user.clone(),
                }),
            }
        }

        let appended = appends.len();
        if !appends.is_empty() {
            repo.append(&appends)?;
        }
        Ok(SubmitOutcome { appended, updated })
    }
}

pub struct CompletionApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> CompletionApi<'_, S> {
    pub fn completed_ids(&self, area: &str, date: NaiveDate) -> Result<Vec<String>, TrackerError> {
        let rows = self.core.store.answers().read_all()?;
        Ok(completion::completed_checklist_ids(
            &self.core.catalog,
            &rows,
            area,
            date,
        ))
    }
}

pub struct WeeklyApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> WeeklyApi<'_, S> {
    pub fn aggregate(&self, reference: NaiveDate) -> Result<WeeklyReport, TrackerError> {
        let rows = self.core.store.answers().read_all()?;
        Ok(weekly::aggregate_week(&self.core.catalog, &rows, reference))
    }
}

pub struct DashboardApi<'a, S: Store> {
    core: &'a Tracker<S>,
}

impl<S: Store> DashboardApi<'_, S> {
    pub fn snapshot(&self, date: NaiveDate) -> Result<DashboardStats, TrackerError> {
        let rows = self.core.store.answers().read_all()?;
        Ok(dashboard::snapshot(&rows, date))
    }
}
