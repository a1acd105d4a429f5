use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Weekly aggregate over the rolling 7-day window ending on the reference
/// date. Field names follow the dashboard's wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub window: WeekWindow,
    pub by_area: BTreeMap<String, AreaWeekly>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AreaWeekly {
    pub daily: Vec<DailyStats>,
    /// user -> number of checklists that user closed this week.
    pub users: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total: u32,
    pub done: u32,
    pub pending: u32,
}

/// Checklists already fully answered for one (area, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletedChecklists {
    pub checklist_ids: Vec<String>,
}

/// Single-day submission snapshot for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_answers: u32,
    pub by_area: BTreeMap<String, u32>,
    pub completed_checklists: u32,
    pub timeline: Vec<DateTime<Utc>>,
}
