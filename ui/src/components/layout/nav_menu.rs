//! Navigation Menu Component
//!
//! Two-level menu: collapsible sections containing items. Selecting an item
//! switches the dashboard view and discards an open wizard.

use leptos::*;

use crate::components::common::ChevronIcon;
use crate::state::AppState;

#[component]
pub fn NavMenu() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let sections = app_state.menu.with_untracked(|m| m.sections().to_vec());

    view! {
        <aside class="w-64 bg-slate-800 border-r border-slate-700 flex flex-col overflow-hidden flex-shrink-0">
            // Logo
            <div class="h-14 flex items-center gap-2 px-4 border-b border-slate-700">
                <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-indigo-600 rounded-lg flex items-center justify-center">
                    <span class="text-white text-sm font-bold">"P"</span>
                </div>
                <span class="text-lg font-bold text-white">"PatchTune"</span>
            </div>

            <nav class="flex-1 overflow-y-auto p-2 space-y-1">
                {sections
                    .into_iter()
                    .enumerate()
                    .map(|(section_index, section)| {
                        let label = section.label;
                        let items = section.items;
                        let expanded = Signal::derive(move || {
                            app_state.menu.with(|m| m.is_expanded(section_index))
                        });
                        view! {
                            <div>
                                <button
                                    class="w-full flex items-center gap-2 px-3 py-2 text-xs font-semibold uppercase \
                                           tracking-wider text-slate-400 hover:text-white rounded-lg transition-colors"
                                    on:click=move |_| app_state.menu.update(|m| m.toggle_section(section_index))
                                >
                                    <ChevronIcon rotated=expanded />
                                    {label}
                                </button>
                                <Show when=move || expanded.get()>
                                    <div class="ml-4 mt-1 space-y-0.5">
                                        {items
                                            .iter()
                                            .enumerate()
                                            .map(|(item_index, item)| {
                                                view! {
                                                    <MenuEntry
                                                        label=item.label
                                                        section=section_index
                                                        item=item_index
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn MenuEntry(label: &'static str, section: usize, item: usize) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <button
            class=move || {
                let base = "w-full text-left px-3 py-2 rounded-lg text-sm transition-colors";
                if app_state.menu.with(|m| m.is_selected(section, item)) {
                    format!("{} bg-blue-500 text-white", base)
                } else {
                    format!("{} text-slate-300 hover:text-white hover:bg-slate-700", base)
                }
            }
            on:click=move |_| app_state.select_menu(section, item)
        >
            {label}
        </button>
    }
}
