use crate::catalog::Catalog;
use crate::types::{AreaWeekly, DailyStats, RowId, StoredAnswer, WeekWindow, WeeklyReport};
use chrono::{DateTime, Days, NaiveDate, Utc};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

struct Latest<'a> {
    timestamp: DateTime<Utc>,
    row: RowId,
    user: &'a str,
}

/// Per (date, area, checklist) group: for every question answered that day,
/// the latest event. The key set of the map is the distinct-question set
/// the completion test counts.
struct Group<'a> {
    latest_by_question: HashMap<&'a str, Latest<'a>>,
}

/// The rolling 7-day window ending on `reference`, inclusive.
pub fn window_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = reference - Days::new(6);
    start.iter_days().take(7).collect()
}

/// Aggregate a week of answer events into per-area daily completion counts
/// and a per-area tally of who closed each completed checklist.
///
/// A checklist is done on a day iff at least one answer group exists for it
/// and the group's distinct-question count reaches the catalog's expected
/// count. The count is not checked against the actual question-id set, so a
/// stray id from another checklist can complete a list early. Known gap,
/// kept for compatibility with the historical log.
pub fn aggregate_week(
    catalog: &Catalog,
    rows: &[StoredAnswer],
    reference: NaiveDate,
) -> WeeklyReport {
    let days = window_days(reference);
    let start = days[0];
    let end = reference;

    let mut groups: HashMap<(NaiveDate, &str, &str), Group<'_>> = HashMap::new();
    for stored in rows {
        let event = &stored.event;
        if event.date < start || event.date > end {
            continue;
        }
        let group = groups
            .entry((event.date, event.area.as_str(), event.checklist_id.as_str()))
            .or_insert_with(|| Group {
                latest_by_question: HashMap::new(),
            });
        let candidate = Latest {
            timestamp: event.timestamp,
            row: stored.row,
            user: event.user.as_str(),
        };
        match group.latest_by_question.entry(event.question_id.as_str()) {
            Entry::Occupied(mut entry) => {
                // Strictly greater: on equal timestamps the earlier row wins.
                if candidate.timestamp > entry.get().timestamp {
                    entry.insert(candidate);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
        }
    }

    let mut by_area = BTreeMap::new();
    for area in catalog.areas() {
        let checklists = catalog.checklists(area).unwrap_or(&[]);
        let total = u32::try_from(checklists.len()).unwrap_or(u32::MAX);
        let mut daily = Vec::with_capacity(days.len());
        let mut users: BTreeMap<String, u32> = BTreeMap::new();

        for day in &days {
            let mut done = 0;
            for list in checklists {
                let Some(group) = groups.get(&(*day, area, list.id.as_str())) else {
                    continue;
                };
                if group.latest_by_question.len() < list.questions.len() {
                    continue;
                }
                done += 1;
                if let Some(closer) = closer_of(group) {
                    *users.entry(closer.to_string()).or_insert(0) += 1;
                }
            }
            daily.push(DailyStats {
                date: *day,
                total,
                done,
                pending: total.saturating_sub(done),
            });
        }

        by_area.insert(area.to_string(), AreaWeekly { daily, users });
    }

    WeeklyReport {
        window: WeekWindow { start, end, days },
        by_area,
    }
}

/// The user whose answer was the last among the checklist's questions that
/// day: max over each question's latest event, ties broken toward the
/// earliest appended row.
fn closer_of<'a>(group: &Group<'a>) -> Option<&'a str> {
    let mut best: Option<&Latest<'a>> = None;
    for candidate in group.latest_by_question.values() {
        let replace = match best {
            None => true,
            Some(current) => {
                candidate.timestamp > current.timestamp
                    || (candidate.timestamp == current.timestamp && candidate.row < current.row)
            }
        };
        if replace {
            best = Some(candidate);
        }
    }
    best.map(|latest| {
        if latest.user.is_empty() {
            "unknown"
        } else {
            latest.user
        }
    })
}
