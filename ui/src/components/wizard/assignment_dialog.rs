use leptos::*;
use patchtune_shared::{AssignmentGroupForm, AssignmentType, Choice, DialogResult};

use crate::components::common::{
    choice_select, radio_group, Field, Modal, TextField, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::state::AppState;

/// Editor for a new assignment group of type `kind`. The form starts from
/// fixed defaults every time it opens.
#[component]
pub fn AssignmentDialog(kind: AssignmentType) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = create_rw_signal(AssignmentGroupForm::default());

    let resolve = move |result: DialogResult<AssignmentGroupForm>| {
        app_state.update_wizard(|w| {
            w.resolve_assignment_dialog(result);
        });
    };
    let on_close = Callback::new(move |_| resolve(DialogResult::Cancelled));

    view! {
        <Modal
            title=format!("Add {} group", kind.label())
            on_close=on_close
            footer=move || view! {
                <button class=SECONDARY_BUTTON on:click=move |_| on_close.call(())>"Cancel"</button>
                <button
                    class=PRIMARY_BUTTON
                    on:click=move |_| resolve(DialogResult::Saved(form.get_untracked()))
                >
                    "Save"
                </button>
            }
        >
            <TextField
                label="Group name"
                value=Signal::derive(move || form.with(|f| f.group_name.clone()))
                on_input=move |name: String| form.update(|f| f.group_name = name)
            />
            <Field label="Mode">
                {radio_group(
                    "group-mode",
                    move || form.with(|f| f.mode),
                    move |mode| form.update(|f| f.mode = mode),
                )}
            </Field>
            <Field label="Filter">
                {choice_select(
                    move || form.with(|f| f.filter_mode),
                    move |mode| form.update(|f| f.filter_mode = mode),
                )}
            </Field>
            <Show when=move || form.with(|f| f.uses_filter())>
                <TextField
                    label="Filter name"
                    value=Signal::derive(move || form.with(|f| f.filter_name.clone()))
                    on_input=move |name: String| form.update(|f| f.filter_name = name)
                />
            </Show>
            <Field label="Availability">
                {choice_select(
                    move || form.with(|f| f.availability),
                    move |availability| form.update(|f| f.availability = availability),
                )}
            </Field>
            <Field label="Installation deadline">
                {choice_select(
                    move || form.with(|f| f.deadline),
                    move |deadline| form.update(|f| f.deadline = deadline),
                )}
            </Field>
            <Field label="Restart grace period">
                {radio_group(
                    "grace-period",
                    move || form.with(|f| f.grace_period),
                    move |grace| form.update(|f| f.grace_period = grace),
                )}
            </Field>
        </Modal>
    }
}
