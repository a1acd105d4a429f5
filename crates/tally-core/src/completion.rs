use crate::catalog::Catalog;
use crate::types::StoredAnswer;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Checklist ids fully answered for (`area`, `date`), in catalog order.
///
/// Completion compares the number of distinct answered question ids against
/// the catalog's expected count; re-answers count once. Ids that never
/// collected an answer group that day stay pending, and an unknown area
/// yields an empty result rather than an error.
pub fn completed_checklist_ids(
    catalog: &Catalog,
    rows: &[StoredAnswer],
    area: &str,
    date: NaiveDate,
) -> Vec<String> {
    let Some(checklists) = catalog.checklists(area) else {
        return Vec::new();
    };

    let mut answered: HashMap<&str, HashSet<&str>> = HashMap::new();
    for stored in rows {
        let event = &stored.event;
        if event.date != date || event.area != area {
            continue;
        }
        answered
            .entry(event.checklist_id.as_str())
            .or_default()
            .insert(event.question_id.as_str());
    }

    checklists
        .iter()
        .filter(|list| {
            answered
                .get(list.id.as_str())
                .is_some_and(|questions| questions.len() >= list.questions.len())
        })
        .map(|list| list.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerEvent, RowId};
    use chrono::{DateTime, Utc};

    fn catalog() -> Catalog {
        Catalog::parse(
            r#"{
                "Hotel": [
                    {"id": "H1", "title": "Morning", "questions": [
                        {"id": "q1", "text": "a", "type": "yesno"},
                        {"id": "q2", "text": "b", "type": "yesno"},
                        {"id": "q3", "text": "c", "type": "yesno"}
                    ]},
                    {"id": "H2", "title": "Evening", "questions": [
                        {"id": "q1", "text": "a", "type": "yesno"}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

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

    fn day(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    #[test]
    fn complete_checklist_is_included() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:01:00Z", "Hotel", "H1", "q2"),
            row(3, "2026-08-03T09:02:00Z", "Hotel", "H1", "q3"),
        ];
        let ids = completed_checklist_ids(&catalog(), &rows, "Hotel", day("2026-08-03"));
        assert_eq!(ids, vec!["H1".to_string()]);
    }

    #[test]
    fn below_threshold_is_excluded() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:01:00Z", "Hotel", "H1", "q2"),
        ];
        let ids = completed_checklist_ids(&catalog(), &rows, "Hotel", day("2026-08-03"));
        assert!(ids.is_empty());
    }

    #[test]
    fn reanswering_the_same_question_counts_once() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H1", "q1"),
            row(2, "2026-08-03T09:01:00Z", "Hotel", "H1", "q1"),
            row(3, "2026-08-03T09:02:00Z", "Hotel", "H1", "q1"),
        ];
        let ids = completed_checklist_ids(&catalog(), &rows, "Hotel", day("2026-08-03"));
        assert!(ids.is_empty());
    }

    #[test]
    fn other_days_and_areas_do_not_leak_in() {
        let rows = vec![
            row(1, "2026-08-02T20:00:00Z", "Hotel", "H2", "q1"),
            row(2, "2026-08-03T09:00:00Z", "Kiosks", "H2", "q1"),
        ];
        let ids = completed_checklist_ids(&catalog(), &rows, "Hotel", day("2026-08-03"));
        assert!(ids.is_empty());
    }

    #[test]
    fn unknown_area_yields_empty_result() {
        let rows = vec![row(1, "2026-08-03T09:00:00Z", "Spa", "S1", "q1")];
        let ids = completed_checklist_ids(&catalog(), &rows, "Spa", day("2026-08-03"));
        assert!(ids.is_empty());
    }

    #[test]
    fn results_follow_catalog_order() {
        let rows = vec![
            row(1, "2026-08-03T09:00:00Z", "Hotel", "H2", "q1"),
            row(2, "2026-08-03T09:01:00Z", "Hotel", "H1", "q1"),
            row(3, "2026-08-03T09:02:00Z", "Hotel", "H1", "q2"),
            row(4, "2026-08-03T09:03:00Z", "Hotel", "H1", "q3"),
        ];
        let ids = completed_checklist_ids(&catalog(), &rows, "Hotel", day("2026-08-03"));
        assert_eq!(ids, vec!["H1".to_string(), "H2".to_string()]);
    }
}
