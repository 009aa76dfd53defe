//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use schedule_grid::{BreakSpec, ScheduleGrid, Subject};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Subject catalog with display colors, in backend order
    pub subjects: Vec<Subject>,
    /// First name of the logged-in user, when a session exists
    pub user: Option<String>,
    /// Database id of the currently persisted schedule, if any
    pub schedule_id: Option<i64>,
    /// The weekly grid being edited
    pub grid: ScheduleGrid,
    /// True while the initial catalog/schedule load is running
    pub loading: bool,
    /// True while a save round trip is outstanding
    pub saving: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the grid wholesale (template regeneration, reconstruction)
pub fn store_replace_grid(store: &AppStore, grid: ScheduleGrid) {
    *store.grid().write() = grid;
}

/// Log the user out of the UI state
pub fn store_clear_user(store: &AppStore) {
    *store.user().write() = None;
}

/// Regenerate the base template from the current configuration and
/// discard all placements
pub fn store_regenerate(store: &AppStore, class_duration_minutes: u32, breaks: &[BreakSpec]) {
    match ScheduleGrid::base_template(class_duration_minutes, breaks) {
        Ok(grid) => store_replace_grid(store, grid),
        Err(e) => crate::dialog::alert(&e.to_string()),
    }
}
