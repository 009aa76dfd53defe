//! Persistence Round Trip
//!
//! The backend stores a schedule as a flat list of rows, each pairing a
//! subject id with a `"<Day> <HH:MM> - <HH:MM>"` label. The format keeps
//! no slot or break identity, so loading re-derives the template: the
//! distinct class intervals actually used, sorted by start, with a break
//! slot inferred for every strict gap between them. Both directions live
//! here as transforms on [`ScheduleGrid`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::day::Day;
use crate::grid::{GridError, ScheduleGrid};
use crate::slot::{format_time, parse_time, SlotId, SlotKind, TimeSlot};
use crate::subject::Subject;

/// The `HH:MM - HH:MM` portion of a time label.
static INTERVAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}:\d{2})\s*-\s*(\d{2}:\d{2})").unwrap());

/// The leading `<Day> <HH:MM>` portion of a time label.
static DAY_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d{2}:\d{2})").unwrap());

/// One persisted schedule row.
///
/// `subject_name` is the read-side enrichment the backend adds to its
/// responses; it is only used as a fallback display name and is never
/// sent back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedItem {
    pub subject_id: i64,
    pub time_label: String,
    pub subject_name: Option<String>,
}

impl PersistedItem {
    pub fn new(subject_id: i64, time_label: impl Into<String>) -> Self {
        Self {
            subject_id,
            time_label: time_label.into(),
            subject_name: None,
        }
    }
}

fn interval_of(label: &str) -> Option<(NaiveTime, NaiveTime)> {
    let caps = INTERVAL_RE.captures(label)?;
    let start = parse_time(caps.get(1)?.as_str())?;
    let end = parse_time(caps.get(2)?.as_str())?;
    Some((start, end))
}

fn day_and_start_of(label: &str) -> Option<(Day, NaiveTime)> {
    let caps = DAY_START_RE.captures(label)?;
    let day = Day::from_name(caps.get(1)?.as_str().trim())?;
    let start = parse_time(caps.get(2)?.as_str())?;
    Some((day, start))
}

impl ScheduleGrid {
    /// Rebuild a grid from persisted rows and the current catalog.
    ///
    /// Rows whose label does not match the wire pattern are skipped
    /// silently; a subject id missing from the catalog degrades to a
    /// placeholder instead of failing the load; when two rows land on the
    /// same cell the later row wins. Returns `None` when the rows contain
    /// nothing reconstructable, so the caller can fall back to a base
    /// template.
    pub fn from_persisted(items: &[PersistedItem], catalog: &[Subject]) -> Option<ScheduleGrid> {
        if items.is_empty() {
            return None;
        }

        // Distinct (start, end) intervals across all days, sorted by start.
        let intervals: BTreeSet<(NaiveTime, NaiveTime)> = items
            .iter()
            .filter_map(|item| interval_of(&item.time_label))
            .collect();
        if intervals.is_empty() {
            return None;
        }

        let intervals: Vec<(NaiveTime, NaiveTime)> = intervals.into_iter().collect();
        let mut slots: Vec<TimeSlot> = Vec::new();
        let mut next_id = 1u32;
        for (i, &(start, end)) in intervals.iter().enumerate() {
            slots.push(TimeSlot {
                id: SlotId::Class(next_id),
                start,
                end,
                kind: SlotKind::Class,
            });
            next_id += 1;
            // A strict gap before the next interval is an inferred break.
            if let Some(&(next_start, _)) = intervals.get(i + 1) {
                if end < next_start {
                    slots.push(TimeSlot {
                        id: SlotId::Break(next_id),
                        start: end,
                        end: next_start,
                        kind: SlotKind::Break,
                    });
                    next_id += 1;
                }
            }
        }

        let mut cells: BTreeMap<(Day, SlotId), Subject> = BTreeMap::new();
        for item in items {
            let Some((day, start)) = day_and_start_of(&item.time_label) else {
                continue;
            };
            let Some(slot) = slots
                .iter()
                .find(|s| s.kind == SlotKind::Class && s.start == start)
            else {
                continue;
            };
            let subject = catalog
                .iter()
                .find(|m| m.id == item.subject_id)
                .cloned()
                .unwrap_or_else(|| Subject::placeholder(item.subject_id, item.subject_name.clone()));
            cells.insert((day, slot.id), subject);
        }

        Some(ScheduleGrid {
            slots,
            cells,
            next_id,
        })
    }

    /// Flatten the grid back into persisted rows, one per occupied cell.
    /// Empty cells are omitted; an entirely empty grid is a validation
    /// error so the caller never issues a pointless save.
    pub fn serialize_for_persistence(&self) -> Result<Vec<PersistedItem>, GridError> {
        let mut items = Vec::new();
        for (&(day, slot_id), subject) in &self.cells {
            let Some(slot) = self.slot(slot_id) else {
                continue;
            };
            items.push(PersistedItem::new(
                subject.id,
                format!(
                    "{} {} - {}",
                    day.as_str(),
                    format_time(slot.start),
                    format_time(slot.end)
                ),
            ));
        }
        if items.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        Ok(items)
    }
}
