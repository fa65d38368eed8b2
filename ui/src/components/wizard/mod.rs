//! Publish Task Wizard
//!
//! Five-step flow over the `PublishTaskWizard` held in [`AppState`]. The step
//! bodies live in `steps`; the dialogs report back with a `DialogResult` that
//! the wizard resolves.

mod application_picker;
mod assignment_dialog;
mod customization_dialog;
mod steps;

use leptos::*;
use patchtune_shared::{Notification, WizardDialog, WizardOutcome, WizardStep};

use crate::components::common::{PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::state::AppState;
use application_picker::ApplicationPicker;
use assignment_dialog::AssignmentDialog;
use customization_dialog::CustomizationDialog;
use steps::{AssignmentStep, InstallationStep, PublishStep, ReviewStep, SelectApplicationsStep};

#[component]
pub fn PublishWizardView() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let step = create_memo(move |_| app_state.with_wizard(|w| Some(w.step())));
    let dialog = create_memo(move |_| app_state.with_wizard(|w| w.active_dialog()));

    view! {
        <Show
            when=move || step.get().is_some()
            fallback=|| view! {
                <p class="p-6 text-slate-400">"No publish task in progress."</p>
            }
        >
            <div class="p-6 max-w-5xl mx-auto space-y-6">
                <StepHeader step=step />

                <div class="bg-slate-800 border border-slate-700 rounded-xl p-6">
                    {move || match step.get() {
                        Some(WizardStep::SelectApplications) => view! { <SelectApplicationsStep /> }.into_view(),
                        Some(WizardStep::AssignmentSettings) => view! { <AssignmentStep /> }.into_view(),
                        Some(WizardStep::InstallationSettings) => view! { <InstallationStep /> }.into_view(),
                        Some(WizardStep::PublishSettings) => view! { <PublishStep /> }.into_view(),
                        Some(WizardStep::Review) => view! { <ReviewStep /> }.into_view(),
                        None => ().into_view(),
                    }}
                </div>

                <WizardFooter step=step />
            </div>

            {move || match dialog.get() {
                Some(WizardDialog::AddApplication) => view! { <ApplicationPicker /> }.into_view(),
                Some(WizardDialog::AssignmentGroup(kind)) => view! { <AssignmentDialog kind=kind /> }.into_view(),
                Some(WizardDialog::Customization(index)) => view! { <CustomizationDialog index=index /> }.into_view(),
                None => ().into_view(),
            }}
        </Show>
    }
}

/// Step indicator: one pill per step, the current one highlighted
#[component]
fn StepHeader(step: Memo<Option<WizardStep>>) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-white">"Create Publish Task"</h1>
            <p class="text-slate-400 mt-1">
                {move || step.get().map(|s| format!(
                    "Step {} of {}: {}",
                    s.step_number(),
                    WizardStep::total_steps(),
                    s.display_name()
                ))}
            </p>
            <ol class="flex gap-2 mt-4">
                {WizardStep::ALL
                    .iter()
                    .copied()
                    .map(|s| {
                        let class = move || {
                            let current = step.get().map(|c| c.step_number()).unwrap_or(0);
                            let base = "flex-1 px-3 py-2 rounded-lg text-xs font-medium text-center";
                            if s.step_number() == current {
                                format!("{} bg-blue-500 text-white", base)
                            } else if s.step_number() < current {
                                format!("{} bg-blue-500/20 text-blue-300", base)
                            } else {
                                format!("{} bg-slate-800 text-slate-500", base)
                            }
                        };
                        view! { <li class=class>{format!("{}. {}", s.step_number(), s.display_name())}</li> }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn WizardFooter(step: Memo<Option<WizardStep>>) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let is_first = move || step.get().map(|s| s.is_first()).unwrap_or(true);
    let is_last = move || step.get().map(|s| s.is_last()).unwrap_or(false);

    let on_cancel = move |_| {
        if let Some(WizardOutcome::Cancelled) = app_state.wizard.with_untracked(|w| w.as_ref().map(|w| w.cancel())) {
            app_state.close_wizard();
        }
    };

    let on_create = move |_| {
        let outcome = app_state.wizard.with_untracked(|w| w.as_ref().and_then(|w| w.finish()));
        if let Some(WizardOutcome::Created(preview)) = outcome {
            let title = if preview.task_title.is_empty() {
                "Untitled task".to_string()
            } else {
                preview.task_title
            };
            app_state.notify(Notification::info(
                "Publish task created",
                format!("{} with {} applications", title, preview.applications.len()),
            ));
            app_state.close_wizard();
        }
    };

    view! {
        <div class="flex items-center justify-between">
            <button class=SECONDARY_BUTTON on:click=on_cancel>"Cancel"</button>
            <div class="flex gap-3">
                <button
                    class=SECONDARY_BUTTON
                    disabled=is_first
                    on:click=move |_| app_state.update_wizard(|w| {
                        w.previous();
                    })
                >
                    "Previous"
                </button>
                <Show
                    when=is_last
                    fallback=move || view! {
                        <button
                            class=PRIMARY_BUTTON
                            on:click=move |_| app_state.update_wizard(|w| {
                                w.next();
                            })
                        >
                            "Next"
                        </button>
                    }
                >
                    <button class=PRIMARY_BUTTON on:click=on_create>"Create Task"</button>
                </Show>
            </div>
        </div>
    }
}
