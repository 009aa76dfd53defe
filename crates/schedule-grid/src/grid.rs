//! Schedule Grid
//!
//! The in-memory weekly grid: an ordered slot list shared by all seven
//! days plus the sparse (day, slot) → subject assignments. One grid value
//! exists per editing session and is only ever mutated by that session's
//! own interactive operations.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;

use crate::day::Day;
use crate::slot::{add_minutes, day_end, day_start, BreakSpec, SlotId, SlotKind, TimeSlot};
use crate::subject::Subject;

/// Errors surfaced by grid mutations and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Serialization found no occupied cell.
    EmptyGrid,
    /// Weekday break slots never hold assignments.
    BreakAssignment,
    /// The slot id does not exist in the current template.
    UnknownSlot,
    /// Template generation needs at least one minute per class.
    InvalidDuration,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "The schedule is empty."),
            GridError::BreakAssignment => write!(f, "Weekday break slots cannot hold a class."),
            GridError::UnknownSlot => write!(f, "That time slot no longer exists."),
            GridError::InvalidDuration => write!(f, "Class duration must be at least one minute."),
        }
    }
}

impl std::error::Error for GridError {}

/// The weekly schedule grid for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGrid {
    pub(crate) slots: Vec<TimeSlot>,
    pub(crate) cells: BTreeMap<(Day, SlotId), Subject>,
    /// Next value of the shared class/break id counter.
    pub(crate) next_id: u32,
}

impl Default for ScheduleGrid {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            cells: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl ScheduleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the base weekly template: walk from 07:00 to 22:00 in
    /// `class_duration_minutes` steps, emitting a break slot wherever a
    /// configured break begins at the cursor and truncating a class slot
    /// that would otherwise overshoot into one. The final slot is capped
    /// at 22:00, so the template covers the day contiguously with no
    /// overlaps. The returned grid has no cell assignments.
    pub fn base_template(
        class_duration_minutes: u32,
        breaks: &[BreakSpec],
    ) -> Result<ScheduleGrid, GridError> {
        if class_duration_minutes == 0 {
            return Err(GridError::InvalidDuration);
        }

        let mut sorted: Vec<BreakSpec> = breaks.iter().copied().filter(|b| b.start < b.end).collect();
        sorted.sort_by_key(|b| b.start);

        let mut slots = Vec::new();
        let mut next_id = 1u32;
        let mut cursor = day_start();

        while cursor < day_end() {
            if let Some(b) = sorted.iter().find(|b| b.start == cursor) {
                let end = b.end.min(day_end());
                slots.push(TimeSlot {
                    id: SlotId::Break(next_id),
                    start: cursor,
                    end,
                    kind: SlotKind::Break,
                });
                next_id += 1;
                cursor = end;
                continue;
            }

            let (stepped, overflow) =
                cursor.overflowing_add_signed(chrono::Duration::minutes(class_duration_minutes as i64));
            let mut end = if overflow != 0 || stepped > day_end() {
                day_end()
            } else {
                stepped
            };
            // A break starting inside the tentative slot cuts it short.
            if let Some(b) = sorted.iter().find(|b| b.start > cursor && b.start < end) {
                end = b.start;
            }
            slots.push(TimeSlot {
                id: SlotId::Class(next_id),
                start: cursor,
                end,
                kind: SlotKind::Class,
            });
            next_id += 1;
            cursor = end;
        }

        Ok(ScheduleGrid {
            slots,
            cells: BTreeMap::new(),
            next_id,
        })
    }

    /// The ordered slot list shared by all days.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn subject_at(&self, day: Day, slot_id: SlotId) -> Option<&Subject> {
        self.cells.get(&(day, slot_id))
    }

    /// Number of occupied cells.
    pub fn assignment_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Assign a subject to a cell. Weekday break slots reject the
    /// assignment; weekend cells accept it even in a break slot.
    pub fn assign(&mut self, day: Day, slot_id: SlotId, subject: Subject) -> Result<(), GridError> {
        let slot = self.slot(slot_id).ok_or(GridError::UnknownSlot)?;
        if slot.kind == SlotKind::Break && !day.is_weekend() {
            return Err(GridError::BreakAssignment);
        }
        self.cells.insert((day, slot_id), subject);
        Ok(())
    }

    pub fn clear(&mut self, day: Day, slot_id: SlotId) {
        self.cells.remove(&(day, slot_id));
    }

    /// Overwrite one slot's times in place. Ordering against neighboring
    /// slots is deliberately not re-checked: a manual edit is treated as
    /// an override of the generated template.
    pub fn edit_slot_times(
        &mut self,
        slot_id: SlotId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), GridError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or(GridError::UnknownSlot)?;
        slot.start = start;
        slot.end = end;
        Ok(())
    }

    /// Append a one-hour class slot after the current last slot (07:00
    /// when the template is empty). Ids come from the session counter, so
    /// the new id never collides with an existing class or break id.
    pub fn add_trailing_slot(&mut self) -> SlotId {
        let start = self.slots.last().map(|s| s.end).unwrap_or_else(day_start);
        let end = add_minutes(start, 60);
        let id = SlotId::Class(self.next_id);
        self.next_id += 1;
        self.slots.push(TimeSlot {
            id,
            start,
            end,
            kind: SlotKind::Class,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::parse_time;

    fn t(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    fn spec(start: &str, end: &str) -> BreakSpec {
        BreakSpec {
            start: t(start),
            end: t(end),
        }
    }

    fn subject() -> Subject {
        Subject::new(1, "Calculus", "#ffadad")
    }

    fn assert_contiguous(grid: &ScheduleGrid) {
        let slots = grid.slots();
        assert!(!slots.is_empty());
        assert_eq!(slots[0].start, t("07:00"));
        assert_eq!(slots.last().unwrap().end, t("22:00"));
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap or overlap at {:?}", pair);
        }
        for slot in slots {
            assert!(slot.start < slot.end, "inverted slot {:?}", slot);
        }
    }

    #[test]
    fn test_template_covers_day_without_breaks() {
        let grid = ScheduleGrid::base_template(60, &[]).unwrap();
        assert_contiguous(&grid);
        assert_eq!(grid.slots().len(), 15);
        assert!(grid.slots().iter().all(|s| s.kind == SlotKind::Class));
    }

    #[test]
    fn test_template_emits_break_at_cursor() {
        let grid = ScheduleGrid::base_template(90, &[spec("10:00", "10:30")]).unwrap();
        assert_contiguous(&grid);
        let brk = grid
            .slots()
            .iter()
            .find(|s| s.kind == SlotKind::Break)
            .unwrap();
        assert_eq!((brk.start, brk.end), (t("10:00"), t("10:30")));
        // The slot after the break resumes at its end.
        let after = grid.slots().iter().find(|s| s.start == t("10:30")).unwrap();
        assert_eq!(after.kind, SlotKind::Class);
    }

    #[test]
    fn test_template_truncates_class_before_break() {
        let grid = ScheduleGrid::base_template(60, &[spec("10:30", "11:00")]).unwrap();
        assert_contiguous(&grid);
        let short = grid.slots().iter().find(|s| s.start == t("10:00")).unwrap();
        assert_eq!(short.end, t("10:30"));
        assert_eq!(short.kind, SlotKind::Class);
    }

    #[test]
    fn test_template_caps_final_slot_at_day_end() {
        // 90-minute classes land exactly on 22:00; 40-minute ones do not.
        let grid = ScheduleGrid::base_template(40, &[]).unwrap();
        assert_contiguous(&grid);
        let last = grid.slots().last().unwrap();
        assert_eq!(last.end, t("22:00"));
        assert!(last.end.signed_duration_since(last.start).num_minutes() < 40);
    }

    #[test]
    fn test_template_ignores_inverted_breaks() {
        let grid = ScheduleGrid::base_template(60, &[spec("11:00", "10:00")]).unwrap();
        assert_contiguous(&grid);
        assert!(grid.slots().iter().all(|s| s.kind == SlotKind::Class));
    }

    #[test]
    fn test_template_rejects_zero_duration() {
        assert_eq!(
            ScheduleGrid::base_template(0, &[]),
            Err(GridError::InvalidDuration)
        );
    }

    #[test]
    fn test_template_has_no_assignments() {
        let grid = ScheduleGrid::base_template(60, &[]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.assignment_count(), 0);
    }

    #[test]
    fn test_assign_weekday_break_rejected() {
        let mut grid = ScheduleGrid::base_template(90, &[spec("10:00", "10:30")]).unwrap();
        let brk = grid
            .slots()
            .iter()
            .find(|s| s.kind == SlotKind::Break)
            .unwrap()
            .id;
        assert_eq!(
            grid.assign(Day::Monday, brk, subject()),
            Err(GridError::BreakAssignment)
        );
        assert!(grid.subject_at(Day::Monday, brk).is_none());
    }

    #[test]
    fn test_assign_weekend_break_allowed() {
        let mut grid = ScheduleGrid::base_template(90, &[spec("10:00", "10:30")]).unwrap();
        let brk = grid
            .slots()
            .iter()
            .find(|s| s.kind == SlotKind::Break)
            .unwrap()
            .id;
        assert!(grid.assign(Day::Saturday, brk, subject()).is_ok());
        assert_eq!(grid.subject_at(Day::Saturday, brk), Some(&subject()));
    }

    #[test]
    fn test_assign_unknown_slot() {
        let mut grid = ScheduleGrid::base_template(60, &[]).unwrap();
        assert_eq!(
            grid.assign(Day::Monday, SlotId::Class(999), subject()),
            Err(GridError::UnknownSlot)
        );
    }

    #[test]
    fn test_clear_removes_assignment() {
        let mut grid = ScheduleGrid::base_template(60, &[]).unwrap();
        let first = grid.slots()[0].id;
        grid.assign(Day::Tuesday, first, subject()).unwrap();
        grid.clear(Day::Tuesday, first);
        assert!(grid.subject_at(Day::Tuesday, first).is_none());
    }

    #[test]
    fn test_edit_slot_times_overwrites_in_place() {
        let mut grid = ScheduleGrid::base_template(60, &[]).unwrap();
        let first = grid.slots()[0].id;
        grid.edit_slot_times(first, t("06:30"), t("07:45")).unwrap();
        let slot = grid.slot(first).unwrap();
        assert_eq!((slot.start, slot.end), (t("06:30"), t("07:45")));
        // Neighbors are left untouched, even if the edit now overlaps them.
        assert_eq!(grid.slots()[1].start, t("08:00"));
    }

    #[test]
    fn test_add_trailing_slot_extends_template() {
        let mut grid = ScheduleGrid::base_template(60, &[]).unwrap();
        let last_end = grid.slots().last().unwrap().end;
        let id = grid.add_trailing_slot();
        let added = grid.slot(id).unwrap();
        assert_eq!(added.kind, SlotKind::Class);
        assert_eq!(added.start, last_end);
        assert_eq!(added.end, add_minutes(last_end, 60));
        // Fresh id, not a reuse of any existing one.
        assert_eq!(grid.slots().iter().filter(|s| s.id == id).count(), 1);
    }

    #[test]
    fn test_add_trailing_slot_on_empty_grid() {
        let mut grid = ScheduleGrid::new();
        let id = grid.add_trailing_slot();
        let added = grid.slot(id).unwrap();
        assert_eq!(added.start, t("07:00"));
        assert_eq!(added.end, t("08:00"));
    }

    #[test]
    fn test_trailing_ids_unique_after_breaks() {
        let mut grid = ScheduleGrid::base_template(90, &[spec("10:00", "10:30")]).unwrap();
        let before: Vec<SlotId> = grid.slots().iter().map(|s| s.id).collect();
        let id = grid.add_trailing_slot();
        assert!(!before.contains(&id));
    }
}
