use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Yesno,
    Boolean,
    Number,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// The static checklist catalog: area -> ordered checklists. Loaded once
/// at startup and passed by value into queries; nothing mutates it at
/// runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Catalog {
    areas: BTreeMap<String, Vec<Checklist>>,
}

impl Catalog {
    pub fn new(areas: BTreeMap<String, Vec<Checklist>>) -> Self {
        Self { areas }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|err| CatalogError::Read {
            message: format!("{}: {err}", path.display()),
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|err| CatalogError::Parse {
            message: err.to_string(),
        })
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.areas.keys().map(String::as_str)
    }

    pub fn checklists(&self, area: &str) -> Option<&[Checklist]> {
        self.areas.get(area).map(Vec::as_slice)
    }

    pub fn checklist(&self, area: &str, checklist_id: &str) -> Option<&Checklist> {
        self.areas
            .get(area)?
            .iter()
            .find(|list| list.id == checklist_id)
    }

    pub fn checklist_count(&self, area: &str) -> usize {
        self.areas.get(area).map_or(0, Vec::len)
    }

    pub fn expected_questions(&self, area: &str, checklist_id: &str) -> Option<usize> {
        self.checklist(area, checklist_id)
            .map(|list| list.questions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
