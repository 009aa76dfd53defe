//! UI Components
//!
//! The schedule builder page, split the same way the layout is: header
//! actions, configuration overlay, subject sidebar, and the grid itself.

mod config_panel;
mod header_bar;
mod schedule_grid_view;
mod subject_sidebar;

pub use config_panel::ConfigPanel;
pub use header_bar::HeaderBar;
pub use schedule_grid_view::ScheduleGridView;
pub use subject_sidebar::SubjectSidebar;
