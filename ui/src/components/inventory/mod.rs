//! Application Inventory
//!
//! Table of the synthetic application catalogue with:
//! - Substring filters combined with AND
//! - Row and select-all checkboxes
//! - Hand-off of the selected rows to the publish task wizard

use leptos::*;
use patchtune_shared::{ApplicationRecord, InventoryField, Notification};

use crate::components::common::{
    inventory_status_badge, publish_status_badge, CloseIcon, FilterIcon, PlusIcon, BADGE_CLASS,
    INPUT_CLASS, PRIMARY_BUTTON,
};
use crate::state::AppState;

#[component]
pub fn InventoryView() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let inventory = app_state.inventory;

    let selected_count = move || inventory.with(|inv| inv.selected_records().len());

    let on_create_task = move |_| match inventory.with_untracked(|inv| inv.create_publish_task()) {
        Ok(applications) => app_state.start_wizard(applications),
        Err(err) => app_state.notify(Notification::from(&err)),
    };

    view! {
        <div class="p-6 space-y-4">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-white">"Applications"</h1>
                    <p class="text-slate-400 mt-1">
                        {move || format!(
                            "{} of {} applications shown, {} selected",
                            inventory.with(|inv| inv.visible().len()),
                            inventory.with(|inv| inv.records().len()),
                            selected_count(),
                        )}
                    </p>
                </div>
                <button class=PRIMARY_BUTTON on:click=on_create_task>
                    <span class="flex items-center gap-2">
                        <PlusIcon class="w-4 h-4" />
                        "Create Publish Task"
                    </span>
                </button>
            </div>

            <FilterBar />
            <InventoryTable />
        </div>
    }
}

/// Field picker, value input and active filter chips
#[component]
fn FilterBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let inventory = app_state.inventory;

    let (field, set_field) = create_signal(InventoryField::Name);
    let (value, set_value) = create_signal(String::new());

    let add_filter = move || {
        let text = value.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        inventory.update(|inv| inv.add_filter(field.get_untracked(), text.trim()));
        set_value.set(String::new());
    };

    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl p-4 space-y-3">
            <div class="flex items-center gap-3">
                <FilterIcon class="w-4 h-4 text-slate-400 flex-shrink-0" />
                <select
                    class=format!("{} max-w-[12rem]", INPUT_CLASS)
                    on:change=move |e| {
                        if let Some(f) = InventoryField::from_label(&event_target_value(&e)) {
                            set_field.set(f);
                        }
                    }
                >
                    {InventoryField::all()
                        .iter()
                        .map(|f| view! {
                            <option value=f.label() selected=move || field.get() == *f>{f.label()}</option>
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    class=INPUT_CLASS
                    placeholder="Contains..."
                    prop:value=move || value.get()
                    on:input=move |e| set_value.set(event_target_value(&e))
                    on:keydown=move |e| {
                        if e.key() == "Enter" {
                            add_filter();
                        }
                    }
                />
                <button class=PRIMARY_BUTTON on:click=move |_| add_filter()>"Add filter"</button>
            </div>

            <Show when=move || inventory.with(|inv| !inv.filters().is_empty())>
                <div class="flex flex-wrap items-center gap-2">
                    {move || inventory.with(|inv| {
                        inv.filters()
                            .iter()
                            .enumerate()
                            .map(|(index, filter)| {
                                view! {
                                    <span class="flex items-center gap-1 px-2 py-1 rounded-full bg-blue-500/20 text-blue-300 text-xs">
                                        {format!("{} contains \"{}\"", filter.field.label(), filter.value)}
                                        <button
                                            class="hover:text-white"
                                            on:click=move |_| inventory.update(|inv| inv.remove_filter(index))
                                        >
                                            <CloseIcon class="w-3 h-3" />
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    })}
                    <button
                        class="text-xs text-slate-400 hover:text-white"
                        on:click=move |_| inventory.update(|inv| inv.clear_filters())
                    >
                        "Clear all"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn InventoryTable() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let inventory = app_state.inventory;

    let rows = move || {
        inventory.with(|inv| {
            inv.visible()
                .into_iter()
                .map(|(index, record)| (index, record.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl overflow-hidden">
            <table class="w-full text-sm">
                <thead class="bg-slate-900/50 text-slate-400 text-left">
                    <tr>
                        <th class="px-4 py-3 w-10">
                            <input
                                type="checkbox"
                                class="accent-blue-500"
                                prop:checked=move || inventory.with(|inv| inv.is_all_selected())
                                on:change=move |e| {
                                    let checked = event_target_checked(&e);
                                    inventory.update(|inv| inv.select_all(checked));
                                }
                            />
                        </th>
                        {InventoryField::all()
                            .iter()
                            .map(|f| view! { <th class="px-4 py-3 font-medium">{f.label()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-700">
                    <For
                        each=rows
                        key=|(index, _)| *index
                        children=move |(index, record)| view! { <InventoryRow index=index record=record /> }
                    />
                </tbody>
            </table>
            <Show when=move || inventory.with(|inv| inv.visible().is_empty())>
                <p class="px-4 py-8 text-center text-slate-400">"No applications match the current filters."</p>
            </Show>
        </div>
    }
}

#[component]
fn InventoryRow(index: usize, record: ApplicationRecord) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let inventory = app_state.inventory;

    view! {
        <tr class="hover:bg-slate-700/40">
            <td class="px-4 py-2">
                <input
                    type="checkbox"
                    class="accent-blue-500"
                    prop:checked=move || inventory.with(|inv| inv.is_selected(index))
                    on:change=move |_| inventory.update(|inv| inv.toggle_row(index))
                />
            </td>
            <td class="px-4 py-2 text-white font-medium">{record.name.clone()}</td>
            <td class="px-4 py-2 text-slate-300">{record.vendor.clone()}</td>
            <td class="px-4 py-2 text-slate-300 font-mono">{record.version.clone()}</td>
            <td class="px-4 py-2 text-slate-300">{InventoryField::ReleaseDate.value_of(&record)}</td>
            <td class="px-4 py-2 text-slate-300">{record.category.clone()}</td>
            <td class="px-4 py-2">
                <span class=format!("{} {}", BADGE_CLASS, inventory_status_badge(record.inventory_status))>
                    {record.inventory_status.label()}
                </span>
            </td>
            <td class="px-4 py-2">
                <span class=format!("{} {}", BADGE_CLASS, publish_status_badge(record.publish_status))>
                    {record.publish_status.label()}
                </span>
            </td>
            <td class="px-4 py-2 text-slate-400">{record.publish_task.clone().unwrap_or_else(|| "-".to_string())}</td>
        </tr>
    }
}
