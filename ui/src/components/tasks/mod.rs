//! Published Tasks
//!
//! Table over the `publishedTasks` storage key. Enable/Disable and Delete
//! write the whole list back; View and Modify only raise a toast.

use leptos::*;
use patchtune_shared::{Notification, PublishTaskSummary, PublishedTaskList, StorageError};

use crate::components::common::{
    task_status_badge, EditIcon, EyeIcon, PowerIcon, TrashIcon, BADGE_CLASS,
};
use crate::state::AppState;

#[component]
pub fn PublishedTasksView() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let list = store_value(PublishedTaskList::load(app_state.store()));
    let rows = create_rw_signal(list.with_value(|l| l.tasks().to_vec()));

    // Refresh the table after a write and surface storage failures
    let after_write = move |result: Option<Result<(), StorageError>>| {
        rows.set(list.with_value(|l| l.tasks().to_vec()));
        if let Some(Err(e)) = result {
            tracing::warn!("Failed to save published tasks: {}", e);
            app_state.notify(Notification::error("Could not save tasks", e.to_string()));
        }
    };

    let on_toggle = Callback::new(move |id: String| {
        after_write(list.try_update_value(|l| l.toggle_status(&id).map(|_| ())));
    });
    let on_delete = Callback::new(move |id: String| {
        after_write(list.try_update_value(|l| l.delete(&id)));
    });
    let on_view = Callback::new(move |id: String| {
        app_state.notify(list.with_value(|l| l.view(&id)));
    });
    let on_modify = Callback::new(move |id: String| {
        app_state.notify(list.with_value(|l| l.modify(&id)));
    });

    view! {
        <div class="p-6 space-y-4">
            <div>
                <h1 class="text-2xl font-bold text-white">"Published Tasks"</h1>
                <p class="text-slate-400 mt-1">
                    {move || format!("{} tasks", rows.with(Vec::len))}
                </p>
            </div>

            <div class="bg-slate-800 border border-slate-700 rounded-xl overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-slate-900/50 text-slate-400 text-left">
                        <tr>
                            <th class="px-4 py-3 font-medium">"Title"</th>
                            <th class="px-4 py-3 font-medium">"Type"</th>
                            <th class="px-4 py-3 font-medium">"Applications"</th>
                            <th class="px-4 py-3 font-medium">"Groups"</th>
                            <th class="px-4 py-3 font-medium">"Created by"</th>
                            <th class="px-4 py-3 font-medium">"Created on"</th>
                            <th class="px-4 py-3 font-medium">"Status"</th>
                            <th class="px-4 py-3 font-medium text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-700">
                        // Keyed on status too so a toggle re-renders the row
                        <For
                            each=move || rows.get()
                            key=|task| (task.id.clone(), task.status)
                            children=move |task| view! {
                                <TaskRow
                                    task=task
                                    on_toggle=on_toggle
                                    on_delete=on_delete
                                    on_view=on_view
                                    on_modify=on_modify
                                />
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <p class="px-4 py-8 text-center text-slate-400">"No published tasks."</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TaskRow(
    task: PublishTaskSummary,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
    on_view: Callback<String>,
    on_modify: Callback<String>,
) -> impl IntoView {
    let id = store_value(task.id.clone());
    let action = "p-1.5 text-slate-400 hover:text-white rounded transition-colors";

    view! {
        <tr class="hover:bg-slate-700/40">
            <td class="px-4 py-2 text-white font-medium">{task.title}</td>
            <td class="px-4 py-2 text-slate-300">{task.task_type}</td>
            <td class="px-4 py-2 text-slate-300">{task.application_count}</td>
            <td class="px-4 py-2 text-slate-300">{task.group_count}</td>
            <td class="px-4 py-2 text-slate-300">{task.created_by}</td>
            <td class="px-4 py-2 text-slate-300">{task.created_on}</td>
            <td class="px-4 py-2">
                <span class=format!("{} {}", BADGE_CLASS, task_status_badge(task.status))>
                    {task.status.label()}
                </span>
            </td>
            <td class="px-4 py-2">
                <div class="flex justify-end gap-1">
                    <button class=action title="View" on:click=move |_| on_view.call(id.get_value())>
                        <EyeIcon class="w-4 h-4" />
                    </button>
                    <button class=action title="Modify" on:click=move |_| on_modify.call(id.get_value())>
                        <EditIcon class="w-4 h-4" />
                    </button>
                    <button
                        class=action
                        title=task.status.toggle_action()
                        on:click=move |_| on_toggle.call(id.get_value())
                    >
                        <PowerIcon class="w-4 h-4" />
                    </button>
                    <button
                        class="p-1.5 text-slate-400 hover:text-red-400 rounded transition-colors"
                        title="Delete"
                        on:click=move |_| on_delete.call(id.get_value())
                    >
                        <TrashIcon class="w-4 h-4" />
                    </button>
                </div>
            </td>
        </tr>
    }
}
