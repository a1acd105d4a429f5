use crate::types::{DashboardStats, StoredAnswer};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Single-day snapshot: raw answer volume per area, how many distinct
/// checklists were touched, and the submission timeline in log order.
pub fn snapshot(rows: &[StoredAnswer], date: NaiveDate) -> DashboardStats {
    let mut by_area: BTreeMap<String, u32> = BTreeMap::new();
    let mut checklists: HashSet<&str> = HashSet::new();
    let mut timeline = Vec::new();
    let mut total_answers = 0;

    for stored in rows {
        let event = &stored.event;
        if event.date != date {
            continue;
        }
        total_answers += 1;
        *by_area.entry(event.area.clone()).or_insert(0) += 1;
        checklists.insert(event.checklist_id.as_str());
        timeline.push(event.timestamp);
    }

    DashboardStats {
        total_answers,
        by_area,
        completed_checklists: u32::try_from(checklists.len()).unwrap_or(u32::MAX),
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerEvent, RowId};
    use chrono::{DateTime, Utc};

    fn row(id: i64, ts: &str, area: &str, checklist: &str, question: &str) -> StoredAnswer {
        let timestamp: DateTime<Utc> = ts.parse().unwrap();
        StoredAnswer {
            row: RowId::new(id),
            event: AnswerEvent {
                timestamp,
                date: timestamp.date_naive(),
                area: area.to_string(),
                checklist_id: checklist.to_string(),
                question_id: question.to_string(),
                question_text: String::new(),
                answer: "TAK".to_string(),
                user: "alice".to_string(),
            },
        }
    }

    #[test]
    fn counts_answers_per_area_for_the_day() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:05:00Z", "Hotel", "H1", "q2"),
            row(3, "2026-08-03T10:00:00Z", "Kiosks", "K1", "q1"),
            row(4, "2026-08-02T09:00:00Z", "Hotel", "H1", "q1"),
        ];
        let stats = snapshot(&rows, "2026-08-03".parse().unwrap());
        assert_eq!(stats.total_answers, 3);
        assert_eq!(stats.by_area["Hotel"], 2);
        assert_eq!(stats.by_area["Kiosks"], 1);
    }

    #[test]
    fn distinct_checklists_touched_not_answers() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:05:00Z", "Hotel", "H1", "q2"),
            row(3, "2026-08-03T10:00:00Z", "Kiosks", "K1", "q1"),
        ];
        let stats = snapshot(&rows, "2026-08-03".parse().unwrap());
        assert_eq!(stats.completed_checklists, 2);
    }

    #[test]
    fn timeline_keeps_log_order() {
        let rows = vec![
            row(1, "2026-08-03T11:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:00:00Z", "Hotel", "H1", "q2"),
        ];
        let stats = snapshot(&rows, "2026-08-03".parse().unwrap());
        let expected: Vec<DateTime<Utc>> = vec![
            "2026-08-03T11:00:00Z".parse().unwrap(),
            "2026-08-03T09:00:00Z".parse().unwrap(),
        ];
        assert_eq!(stats.timeline, expected);
    }

    #[test]
    fn empty_day_is_all_zeroes() {
        let stats = snapshot(&[], "2026-08-03".parse().unwrap());
        assert_eq!(stats.total_answers, 0);
        assert!(stats.by_area.is_empty());
        assert_eq!(stats.completed_checklists, 0);
        assert!(stats.timeline.is_empty());
    }
}
