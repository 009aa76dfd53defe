//! Time Slots
//!
//! The rows of the weekly template: class periods and break periods, plus
//! the `HH:MM` helpers shared by the template walk and the wire labels.

use chrono::{Duration, NaiveTime};

/// First minute covered by a generated template.
pub fn day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap()
}

/// The template walk stops once the cursor reaches this time.
pub fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap()
}

/// Parse a wall-clock `HH:MM` string.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Format a time the way it appears on the wire and in the grid labels.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minute addition that wraps around midnight.
pub(crate) fn add_minutes(t: NaiveTime, minutes: i64) -> NaiveTime {
    t.overflowing_add_signed(Duration::minutes(minutes)).0
}

/// What a slot is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Class,
    Break,
}

/// Slot identifier, unique within one editing session.
///
/// Class and break slots share one counter namespace but stay distinct
/// variants, so a break id can never be mistaken for a class id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    Class(u32),
    Break(u32),
}

/// One row of the weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: SlotId,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: SlotKind,
}

/// A Monday–Friday break interval used when generating a base template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakSpec {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("07:00"), NaiveTime::from_hms_opt(7, 0, 0));
        assert_eq!(parse_time("21:45"), NaiveTime::from_hms_opt(21, 45, 0));
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert_eq!(parse_time("27:99"), None);
        assert_eq!(parse_time("7:00 am"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn test_format_time_zero_pads() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(7, 0, 0).unwrap()), "07:00");
        assert_eq!(format_time(NaiveTime::from_hms_opt(13, 5, 0).unwrap()), "13:05");
    }

    #[test]
    fn test_add_minutes_wraps_midnight() {
        let late = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        assert_eq!(add_minutes(late, 60), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_slot_ids_distinct_across_kinds() {
        assert_ne!(SlotId::Class(1), SlotId::Break(1));
    }
}
