//! Schedule Grid Component
//!
//! The weekly grid: one row per time slot, one column per day. Hour
//! labels support inline editing; cells take drops from the sidebar.
//! Weekday break cells are static; weekend cells accept drops even in a
//! break row (the engine enforces the same rule).

use leptos::prelude::*;
use web_sys::DragEvent;

use schedule_grid::{format_time, parse_time, Day, SlotId, SlotKind};

use crate::context::use_schedule_context;
use crate::dialog;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ScheduleGridView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_schedule_context();
    let (editing_slot, set_editing_slot) = signal(None::<SlotId>);
    let (temp_start, set_temp_start) = signal(String::new());
    let (temp_end, set_temp_end) = signal(String::new());

    let slot_ids = move || {
        store
            .grid()
            .read()
            .slots()
            .iter()
            .map(|slot| slot.id)
            .collect::<Vec<_>>()
    };

    let grid_style = move || {
        format!(
            "grid-template-rows: 40px repeat({}, minmax(60px, auto))",
            slot_ids().len()
        )
    };

    let save_slot = move |slot_id: SlotId| {
        let (Some(start), Some(end)) = (
            parse_time(&temp_start.get_untracked()),
            parse_time(&temp_end.get_untracked()),
        ) else {
            dialog::alert("Times must use the HH:MM format.");
            return;
        };
        if let Err(e) = store.grid().write().edit_slot_times(slot_id, start, end) {
            web_sys::console::warn_1(&format!("[Grid] slot edit failed: {}", e).into());
        }
        set_editing_slot.set(None);
    };

    view! {
        <main class="schedule-panel">
            <div class="schedule-grid-wrapper">
                <div class="schedule-grid" style=grid_style>
                    <div class="grid-header-corner">"Time"</div>
                    {Day::ALL
                        .iter()
                        .map(|day| {
                            let header_class = if day.is_weekend() {
                                "grid-header-day weekend"
                            } else {
                                "grid-header-day"
                            };
                            view! { <div class=header_class>{day.as_str()}</div> }
                        })
                        .collect_view()}
                    <For each=slot_ids key=|id| *id children=move |slot_id| {
                        let is_editing = move || editing_slot.get() == Some(slot_id);
                        let is_break = move || {
                            store
                                .grid()
                                .read()
                                .slot(slot_id)
                                .map(|slot| slot.kind == SlotKind::Break)
                                .unwrap_or(false)
                        };
                        let label_class = move || {
                            if is_break() {
                                "grid-hour-label break-label"
                            } else {
                                "grid-hour-label"
                            }
                        };
                        let time_text = move || {
                            store
                                .grid()
                                .read()
                                .slot(slot_id)
                                .map(|slot| {
                                    format!(
                                        "{} - {}",
                                        format_time(slot.start),
                                        format_time(slot.end)
                                    )
                                })
                                .unwrap_or_default()
                        };
                        let begin_edit = move |_| {
                            if let Some(slot) = store.grid().read().slot(slot_id).copied() {
                                set_temp_start.set(format_time(slot.start));
                                set_temp_end.set(format_time(slot.end));
                                set_editing_slot.set(Some(slot_id));
                            }
                        };

                        let label = view! {
                            <div class=label_class>
                                <Show
                                    when=is_editing
                                    fallback=move || view! {
                                        <span>{time_text}</span>
                                        <Show when=is_break>
                                            <span class="break-tag">"BREAK"</span>
                                        </Show>
                                        <button class="edit-h-btn" on:click=begin_edit>"Edit"</button>
                                    }
                                >
                                    <div class="hour-edit-form">
                                        <input
                                            type="text"
                                            class="mini-input"
                                            prop:value=temp_start
                                            on:input=move |ev| set_temp_start.set(event_target_value(&ev))
                                        />
                                        <input
                                            type="text"
                                            class="mini-input"
                                            prop:value=temp_end
                                            on:input=move |ev| set_temp_end.set(event_target_value(&ev))
                                        />
                                        <button class="mini-btn-save" on:click=move |_| save_slot(slot_id)>
                                            "OK"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        };

                        let cells = Day::ALL
                            .iter()
                            .copied()
                            .map(|day| {
                                let cell = move || {
                                    let grid = store.grid().read();
                                    let Some(slot) = grid.slot(slot_id).copied() else {
                                        return view! { <div class="grid-cell"></div> }.into_any();
                                    };
                                    if slot.kind == SlotKind::Break && !day.is_weekend() {
                                        return view! {
                                            <div class="grid-cell break-cell"><span>"BREAK"</span></div>
                                        }
                                        .into_any();
                                    }
                                    let subject = grid.subject_at(day, slot_id).cloned();
                                    drop(grid);

                                    let mut cell_class = String::from("grid-cell");
                                    if subject.is_some() {
                                        cell_class.push_str(" filled");
                                    }
                                    if day.is_weekend() {
                                        cell_class.push_str(" weekend-bg");
                                    }
                                    let cell_style = subject
                                        .as_ref()
                                        .map(|m| {
                                            format!(
                                                "background-color: {}33; border-left: 3px solid {}",
                                                m.color, m.color
                                            )
                                        })
                                        .unwrap_or_default();

                                    view! {
                                        <div
                                            class=cell_class
                                            style=cell_style
                                            on:dragover=move |ev: DragEvent| {
                                                ev.prevent_default();
                                                if let Some(dt) = ev.data_transfer() {
                                                    dt.set_drop_effect("copy");
                                                }
                                            }
                                            on:drop=move |ev: DragEvent| {
                                                ev.prevent_default();
                                                if let Some(subject) = ctx.take_dragged() {
                                                    if let Err(e) =
                                                        store.grid().write().assign(day, slot_id, subject)
                                                    {
                                                        web_sys::console::log_1(
                                                            &format!("[Grid] drop rejected: {}", e).into(),
                                                        );
                                                    }
                                                }
                                            }
                                        >
                                            {subject.map(|m| {
                                                let name = m.name.clone();
                                                view! {
                                                    <div class="cell-content">
                                                        <span class="cell-text">{name}</span>
                                                        <button
                                                            class="btn-del"
                                                            on:click=move |_| store.grid().write().clear(day, slot_id)
                                                        >
                                                            "×"
                                                        </button>
                                                    </div>
                                                }
                                            })}
                                        </div>
                                    }
                                    .into_any()
                                };
                                view! { {cell} }
                            })
                            .collect_view();

                        view! { {label} {cells} }
                    } />
                </div>
                <div class="add-row-bar">
                    <button
                        class="btn-add-row"
                        on:click=move |_| {
                            store.grid().write().add_trailing_slot();
                        }
                    >
                        "+ Add extra hour row"
                    </button>
                </div>
                <p class="item-count">
                    {move || format!("{} cells filled", store.grid().read().assignment_count())}
                </p>
            </div>
        </main>
    }
}
