//! Application Context
//!
//! Cross-component signals shared via the Leptos Context API: the drag
//! state and the template configuration.

use leptos::prelude::*;

use schedule_grid::{BreakSpec, Subject};

/// Default class duration in minutes for a fresh template
pub const DEFAULT_CLASS_DURATION: u32 = 60;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ScheduleContext {
    /// Subject currently being dragged from the sidebar - read
    pub dragged: ReadSignal<Option<Subject>>,
    set_dragged: WriteSignal<Option<Subject>>,
    /// Whether the configuration overlay is open - read
    pub show_config: ReadSignal<bool>,
    set_show_config: WriteSignal<bool>,
    /// Class duration in minutes used when regenerating the template
    pub class_duration: ReadSignal<u32>,
    pub set_class_duration: WriteSignal<u32>,
    /// Monday-Friday break intervals used when regenerating the template
    pub breaks: ReadSignal<Vec<BreakSpec>>,
    pub set_breaks: WriteSignal<Vec<BreakSpec>>,
}

impl ScheduleContext {
    pub fn new() -> Self {
        let (dragged, set_dragged) = signal(None::<Subject>);
        let (show_config, set_show_config) = signal(false);
        let (class_duration, set_class_duration) = signal(DEFAULT_CLASS_DURATION);
        let (breaks, set_breaks) = signal(Vec::<BreakSpec>::new());
        Self {
            dragged,
            set_dragged,
            show_config,
            set_show_config,
            class_duration,
            set_class_duration,
            breaks,
            set_breaks,
        }
    }

    /// A sidebar card started a drag
    pub fn start_drag(&self, subject: Subject) {
        self.set_dragged.set(Some(subject));
    }

    /// Consume the dragged subject on drop (or on an abandoned drag)
    pub fn take_dragged(&self) -> Option<Subject> {
        let dragged = self.dragged.get_untracked();
        self.set_dragged.set(None);
        dragged
    }

    pub fn toggle_config(&self) {
        self.set_show_config.update(|open| *open = !*open);
    }

    pub fn close_config(&self) {
        self.set_show_config.set(false);
    }
}

/// Get the schedule context
pub fn use_schedule_context() -> ScheduleContext {
    expect_context::<ScheduleContext>()
}
