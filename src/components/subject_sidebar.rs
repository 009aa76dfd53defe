//! Subject Sidebar Component
//!
//! Searchable catalog list; cards are dragged from here onto the grid.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_schedule_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// At most this many cards are rendered for one search.
const MAX_VISIBLE_SUBJECTS: usize = 50;

#[component]
pub fn SubjectSidebar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_schedule_context();
    let (filter, set_filter) = signal(String::new());

    let filtered = move || {
        let needle = filter.get().to_lowercase();
        store
            .subjects()
            .get()
            .into_iter()
            .filter(|subject| subject.name.to_lowercase().contains(&needle))
            .take(MAX_VISIBLE_SUBJECTS)
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar-tools">
            <div class="sidebar-header">
                <h2 class="section-label">"Available Subjects"</h2>
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search subjects..."
                        prop:value=filter
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="draggable-list">
                <Show when=move || store.subjects().read().is_empty()>
                    <p class="hint-text">"Loading subjects..."</p>
                </Show>
                <For
                    each=filtered
                    key=|subject| subject.id
                    children=move |subject| {
                        let card_style = format!("border-left: 4px solid {}", subject.color);
                        let name = subject.name.clone();
                        view! {
                            <div
                                class="draggable-item"
                                draggable="true"
                                style=card_style
                                on:dragstart=move |ev: DragEvent| {
                                    if let Some(dt) = ev.data_transfer() {
                                        dt.set_effect_allowed("copy");
                                    }
                                    ctx.start_drag(subject.clone());
                                }
                            >
                                <span class="subject-name">{name}</span>
                            </div>
                        }
                    }
                />
            </div>
        </aside>
    }
}
