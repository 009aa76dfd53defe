//! Schedule Builder App
//!
//! Root component: provides the store, the session, and the shared
//! signals, runs the initial load, and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use schedule_grid::ScheduleGrid;

use crate::api;
use crate::components::{ConfigPanel, HeaderBar, ScheduleGridView, SubjectSidebar};
use crate::context::ScheduleContext;
use crate::models::{persisted_items, subjects_with_colors};
use crate::session::{first_name, BrowserSession, SharedSession};
use crate::store::{store_regenerate, store_replace_grid, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let session = SharedSession::new(Rc::new(BrowserSession));
    provide_context(session);

    let ctx = ScheduleContext::new();
    provide_context(ctx);

    // Session is read once at startup, like the rest of the portal pages.
    let token = session.token();
    if let Some(name) = session.user_name() {
        *store.user().write() = Some(first_name(&name));
    }

    // Initial load: catalog first, then the most recently saved schedule.
    // Anything unrecoverable falls back to a fresh base template.
    Effect::new(move |_| {
        let token = token.clone();
        spawn_local(async move {
            let subjects = match api::list_subjects(token.as_deref()).await {
                Ok(records) => subjects_with_colors(records),
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] catalog load failed: {}", e).into());
                    Vec::new()
                }
            };
            *store.subjects().write() = subjects.clone();

            let latest = match api::list_schedules(token.as_deref()).await {
                Ok(schedules) => schedules.into_iter().last(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] schedule load failed: {}", e).into());
                    None
                }
            };

            let mut restored = false;
            if let Some(record) = latest {
                let items = persisted_items(&record);
                if let Some(grid) = ScheduleGrid::from_persisted(&items, &subjects) {
                    web_sys::console::log_1(
                        &format!("[App] restored schedule {} ({} rows)", record.id, items.len())
                            .into(),
                    );
                    *store.schedule_id().write() = Some(record.id);
                    store_replace_grid(&store, grid);
                    restored = true;
                }
            }
            if !restored {
                web_sys::console::log_1(&"[App] no saved schedule, generating base template".into());
                store_regenerate(
                    &store,
                    ctx.class_duration.get_untracked(),
                    &ctx.breaks.get_untracked(),
                );
            }
            *store.loading().write() = false;
        });
    });

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! {
                <div class="page-container loading-screen">
                    <p>"Loading your schedule..."</p>
                </div>
            }
        >
            <div class="page-container">
                <HeaderBar />
                <Show when=move || ctx.show_config.get()>
                    <ConfigPanel />
                </Show>
                <div class="main-dashboard">
                    <SubjectSidebar />
                    <ScheduleGridView />
                </div>
                <footer class="footer-bar">
                    <a href="/menu"><button class="btn-volver">"Back to the main menu"</button></a>
                </footer>
            </div>
        </Show>
    }
}
