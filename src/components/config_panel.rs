//! Configuration Panel Component
//!
//! Overlay for the template settings: class duration and the
//! Monday-Friday break list. Applying regenerates the base template and
//! discards all placements.

use leptos::prelude::*;

use schedule_grid::{format_time, parse_time, BreakSpec};

use crate::context::use_schedule_context;
use crate::dialog;
use crate::store::{store_regenerate, use_app_store};

#[component]
pub fn ConfigPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_schedule_context();
    let (new_start, set_new_start) = signal(String::new());
    let (new_end, set_new_end) = signal(String::new());

    let add_break = move |_| {
        let (Some(start), Some(end)) = (
            parse_time(&new_start.get_untracked()),
            parse_time(&new_end.get_untracked()),
        ) else {
            return;
        };
        if start >= end {
            dialog::alert("A break must start before it ends.");
            return;
        }
        ctx.set_breaks.update(|breaks| breaks.push(BreakSpec { start, end }));
        set_new_start.set(String::new());
        set_new_end.set(String::new());
    };

    let apply = move |_| {
        store_regenerate(
            &store,
            ctx.class_duration.get_untracked(),
            &ctx.breaks.get_untracked(),
        );
        ctx.close_config();
    };

    let breaks_enumerated =
        move || ctx.breaks.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="config-panel-overlay">
            <div class="config-panel">
                <div class="config-header">
                    <h3>"Schedule Settings"</h3>
                    <button class="close-config" on:click=move |_| ctx.close_config()>"×"</button>
                </div>
                <div class="config-body">
                    <div class="config-item">
                        <label>"Class duration"</label>
                        <div class="input-with-unit">
                            <input
                                type="number"
                                class="clean-input number-input"
                                prop:value=move || ctx.class_duration.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                        ctx.set_class_duration.set(minutes);
                                    }
                                }
                            />
                            <span>"minutes"</span>
                        </div>
                    </div>
                    <div class="config-item">
                        <label>"Add a break (Mon - Fri)"</label>
                        <div class="break-inputs">
                            <input
                                type="time"
                                class="clean-input time-input"
                                prop:value=new_start
                                on:input=move |ev| set_new_start.set(event_target_value(&ev))
                            />
                            <span class="separator">"to"</span>
                            <input
                                type="time"
                                class="clean-input time-input"
                                prop:value=new_end
                                on:input=move |ev| set_new_end.set(event_target_value(&ev))
                            />
                            <button class="btn-add-break" on:click=add_break>"Add"</button>
                        </div>
                        <Show when=move || !ctx.breaks.read().is_empty()>
                            <div class="breaks-chip-list">
                                <For
                                    each=breaks_enumerated
                                    key=|(index, _)| *index
                                    children=move |(index, brk)| {
                                        view! {
                                            <div class="break-chip">
                                                {format!("{} - {}", format_time(brk.start), format_time(brk.end))}
                                                <button on:click=move |_| {
                                                    ctx.set_breaks.update(|breaks| {
                                                        if index < breaks.len() {
                                                            breaks.remove(index);
                                                        }
                                                    });
                                                }>"×"</button>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
                <div class="config-footer">
                    <button class="btn-apply-large" on:click=apply>
                        "Apply and regenerate"
                    </button>
                </div>
            </div>
        </div>
    }
}
