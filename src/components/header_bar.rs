//! Header Bar Component
//!
//! Page title, the save/config/regenerate actions, and the session widget.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_schedule_context;
use crate::dialog;
use crate::models::{payload_items, SchedulePayload};
use crate::session::use_session;
use crate::store::{store_clear_user, store_regenerate, use_app_store, AppStateStoreFields};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_schedule_context();
    let session = use_session();

    // Replace-not-merge: the previous persisted schedule is deleted
    // before the new one is created, and only one save can be in flight.
    let save = move |_| {
        if store.saving().get_untracked() {
            return;
        }
        if store.user().read().is_none() {
            dialog::alert("Log in to save your schedule.");
            return;
        }
        let items = match store.grid().read().serialize_for_persistence() {
            Ok(items) => items,
            Err(e) => {
                dialog::alert(&e.to_string());
                return;
            }
        };
        let Some(name) = dialog::prompt("Name for your schedule:", "My Semester Schedule") else {
            return;
        };

        let token = session.token();
        let previous_id = store.schedule_id().get_untracked();
        *store.saving().write() = true;
        spawn_local(async move {
            let result = async {
                if let Some(id) = previous_id {
                    api::delete_schedule(token.as_deref(), id).await?;
                }
                let payload = SchedulePayload {
                    name,
                    items: payload_items(items),
                };
                api::create_schedule(token.as_deref(), &payload).await
            }
            .await;

            match result {
                Ok(record) => {
                    web_sys::console::log_1(
                        &format!("[Header] schedule saved with id {}", record.id).into(),
                    );
                    *store.schedule_id().write() = Some(record.id);
                    dialog::alert("Schedule saved.");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Header] save failed: {}", e).into());
                    dialog::alert("Something went wrong while saving.");
                }
            }
            *store.saving().write() = false;
        });
    };

    let regenerate = move |_| {
        store_regenerate(
            &store,
            ctx.class_duration.get_untracked(),
            &ctx.breaks.get_untracked(),
        );
    };

    let logout = move |_| {
        session.clear();
        store_clear_user(&store);
    };

    view! {
        <header class="fixed-header">
            <h1 class="page-title">"Schedule Builder"</h1>
            <div class="top-buttons">
                <button class="btn-top btn-config" on:click=move |_| ctx.toggle_config()>
                    "Settings"
                </button>
                <button
                    class="btn-top btn-filled"
                    disabled=move || store.saving().get()
                    on:click=save
                >
                    {move || if store.saving().get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn-top btn-config" title="Reset template" on:click=regenerate>
                    "Regenerate"
                </button>
                {move || match store.user().get() {
                    Some(name) => view! {
                        <div class="user-widget-mini">
                            <span>"Hi, " <strong>{name}</strong></span>
                            <button class="logout-mini" title="Log out" on:click=logout>
                                "Log out"
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <a href="/login" class="login-btn-mini">"Log in"</a>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
