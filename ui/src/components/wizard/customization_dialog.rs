use leptos::*;
use patchtune_shared::{ApplicationCustomization, CustomizationEditor, DialogResult};

use crate::components::common::{
    yes_no, Field, Modal, PlusIcon, TextArea, TextField, TrashIcon, INPUT_CLASS, PRIMARY_BUTTON,
    SECONDARY_BUTTON,
};
use crate::state::AppState;

/// Edit the display metadata of the application at `index`. Saving only logs
/// the values; the wizard's application list is left as it was.
#[component]
pub fn CustomizationDialog(index: usize) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let Some(record) = app_state
        .wizard
        .with_untracked(|w| w.as_ref().and_then(|w| w.applications.get(index).cloned()))
    else {
        tracing::warn!("No application at position {} to customize", index);
        app_state.update_wizard(|w| w.resolve_customization_dialog(DialogResult::Cancelled));
        return ().into_view();
    };

    let editor = create_rw_signal(CustomizationEditor::new(&record));

    let resolve = move |result: DialogResult<ApplicationCustomization>| {
        app_state.update_wizard(|w| w.resolve_customization_dialog(result));
    };
    let on_close = Callback::new(move |_| resolve(DialogResult::Cancelled));
    let on_save = move |_| resolve(editor.get_untracked().save());

    // Text inputs over one field of the editor's current values
    let text = move |get: fn(&ApplicationCustomization) -> &String| {
        Signal::derive(move || editor.with(|e| get(&e.current).clone()))
    };

    view! {
        <Modal
            title=format!("Customize {}", record.name)
            on_close=on_close
            width="max-w-2xl"
            footer=move || view! {
                <button
                    class=format!("{} mr-auto", SECONDARY_BUTTON)
                    disabled=move || !editor.with(|e| e.is_modified())
                    on:click=move |_| editor.update(|e| e.reset())
                >
                    "Reset to default"
                </button>
                <button class=SECONDARY_BUTTON on:click=move |_| on_close.call(())>"Cancel"</button>
                <button class=PRIMARY_BUTTON on:click=on_save>"Save"</button>
            }
        >
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Name"
                    value=text(|c| &c.name)
                    on_input=move |v: String| editor.update(|e| e.current.name = v)
                />
                <TextField
                    label="Publisher"
                    value=text(|c| &c.publisher)
                    on_input=move |v: String| editor.update(|e| e.current.publisher = v)
                />
            </div>
            <TextArea
                label="Description"
                value=text(|c| &c.description)
                on_input=move |v: String| editor.update(|e| e.current.description = v)
            />
            <div class="grid grid-cols-2 gap-4">
                <TextField
                    label="Information URL"
                    input_type="url"
                    value=text(|c| &c.information_url)
                    on_input=move |v: String| editor.update(|e| e.current.information_url = v)
                />
                <TextField
                    label="Privacy URL"
                    input_type="url"
                    value=text(|c| &c.privacy_url)
                    on_input=move |v: String| editor.update(|e| e.current.privacy_url = v)
                />
                <TextField
                    label="Developer"
                    value=text(|c| &c.developer)
                    on_input=move |v: String| editor.update(|e| e.current.developer = v)
                />
                <TextField
                    label="Owner"
                    value=text(|c| &c.owner)
                    on_input=move |v: String| editor.update(|e| e.current.owner = v)
                />
            </div>
            <TextArea
                label="Notes"
                value=text(|c| &c.notes)
                on_input=move |v: String| editor.update(|e| e.current.notes = v)
            />

            <Field label="Categories">
                <div class="space-y-2">
                    {move || editor.with(|e| e.current.categories.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(i, category)| view! {
                            <div class="flex items-center gap-2">
                                <input
                                    type="text"
                                    class=INPUT_CLASS
                                    prop:value=category
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        editor.update(|e| e.set_category(i, value));
                                    }
                                />
                                <button
                                    class="p-1.5 text-slate-400 hover:text-red-400 rounded transition-colors"
                                    on:click=move |_| editor.update(|e| e.remove_category(i))
                                >
                                    <TrashIcon class="w-4 h-4" />
                                </button>
                            </div>
                        })
                        .collect_view()}
                    <button
                        class="flex items-center gap-1 text-sm text-blue-400 hover:text-blue-300"
                        on:click=move |_| editor.update(|e| e.add_category())
                    >
                        <PlusIcon class="w-4 h-4" />
                        "Add category"
                    </button>
                </div>
            </Field>

            <Field label="Show as featured app">
                {yes_no(
                    "featured",
                    move || editor.with(|e| e.current.featured),
                    move |featured| editor.update(|e| e.current.featured = featured),
                )}
            </Field>
        </Modal>
    }
    .into_view()
}
