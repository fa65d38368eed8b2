use leptos::*;
use patchtune_shared::{ApplicationRecord, DialogResult, Inventory, InventoryField};

use crate::components::common::{Modal, INPUT_CLASS, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::state::AppState;

/// Pick more catalogue applications for the task. Keeps its own filter and
/// selection so the inventory page is left untouched.
#[component]
pub fn ApplicationPicker() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let picker = create_rw_signal(Inventory::new(
        app_state.inventory.with_untracked(|inv| inv.records().to_vec()),
    ));
    let (search, set_search) = create_signal(String::new());

    let on_search = move |text: String| {
        picker.update(|p| {
            p.clear_filters();
            if !text.trim().is_empty() {
                p.add_filter(InventoryField::Name, text.trim());
            }
        });
        set_search.set(text);
    };

    let resolve = move |result: DialogResult<Vec<ApplicationRecord>>| {
        app_state.update_wizard(|w| w.resolve_application_dialog(result));
    };
    let on_close = Callback::new(move |_| resolve(DialogResult::Cancelled));
    let on_add = move |_| resolve(DialogResult::Saved(picker.with_untracked(|p| p.selected_records())));

    let rows = move || {
        picker.with(|p| {
            p.visible()
                .into_iter()
                .map(|(index, record)| (index, record.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Modal
            title="Add Applications"
            on_close=on_close
            width="max-w-2xl"
            footer=move || view! {
                <button class=SECONDARY_BUTTON on:click=move |_| on_close.call(())>"Cancel"</button>
                <button
                    class=PRIMARY_BUTTON
                    disabled=move || picker.with(|p| p.selected().is_empty())
                    on:click=on_add
                >
                    {move || format!("Add {} selected", picker.with(|p| p.selected().len()))}
                </button>
            }
        >
            <input
                type="text"
                class=INPUT_CLASS
                placeholder="Search by name..."
                prop:value=move || search.get()
                on:input=move |e| on_search(event_target_value(&e))
            />
            <div class="max-h-80 overflow-y-auto divide-y divide-slate-700">
                <For
                    each=rows
                    key=|(index, _)| *index
                    children=move |(index, record)| view! {
                        <label class="flex items-center gap-3 px-2 py-2 text-sm cursor-pointer hover:bg-slate-700/40">
                            <input
                                type="checkbox"
                                class="accent-blue-500"
                                prop:checked=move || picker.with(|p| p.is_selected(index))
                                on:change=move |_| picker.update(|p| p.toggle_row(index))
                            />
                            <span class="text-white">{record.name}</span>
                            <span class="text-slate-400">{record.vendor}</span>
                            <span class="ml-auto text-slate-500 font-mono">{record.version}</span>
                        </label>
                    }
                />
            </div>
        </Modal>
    }
}
