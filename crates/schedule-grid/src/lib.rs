//! Schedule Grid Engine
//!
//! The weekly schedule grid behind the portal's drag-and-drop schedule
//! builder: the ordered list of class/break time slots, the (day, slot)
//! cell assignments, base template generation, and the round trip between
//! the grid and the flat day/time-label rows the backend stores.
//!
//! Everything here is plain synchronous data manipulation with no UI or
//! network dependency, so it runs (and is tested) on the host as well as
//! in WASM.

mod day;
mod grid;
mod persist;
mod slot;
mod subject;

pub use day::Day;
pub use grid::{GridError, ScheduleGrid};
pub use persist::PersistedItem;
pub use slot::{day_end, day_start, format_time, parse_time, BreakSpec, SlotId, SlotKind, TimeSlot};
pub use subject::Subject;
