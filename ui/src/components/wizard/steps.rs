//! Wizard step bodies
//!
//! Each step reads and writes the wizard through `AppState::with_wizard` /
//! `AppState::update_wizard`; none of them validates before Next.

use leptos::*;
use patchtune_shared::{AssignmentGroup, AssignmentType, Choice, Language, WizardDialog};

use crate::components::common::{
    choice_select, radio_group, yes_no, EditIcon, Field, PackageIcon, PlusIcon, TextArea, TextField,
    TrashIcon, INPUT_CLASS,
};
use crate::state::AppState;

const TABLE_HEAD: &str = "bg-slate-900/50 text-slate-400 text-left";
const ICON_BUTTON: &str = "p-1.5 text-slate-400 hover:text-white rounded transition-colors";

// ----------------------------------------------------------------------------
// Step 1: applications
// ----------------------------------------------------------------------------

#[component]
pub fn SelectApplicationsStep() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let applications = move || app_state.with_wizard(|w| w.applications.clone());

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-white">"Applications"</h2>
                <button
                    class="flex items-center gap-2 px-3 py-2 text-sm text-blue-400 hover:text-blue-300"
                    on:click=move |_| app_state.update_wizard(|w| w.open_dialog(WizardDialog::AddApplication))
                >
                    <PlusIcon class="w-4 h-4" />
                    "Add Applications"
                </button>
            </div>

            <Show
                when=move || !applications().is_empty()
                fallback=|| view! {
                    <p class="text-sm text-slate-400">"No applications in this task yet."</p>
                }
            >
                <table class="w-full text-sm">
                    <thead class=TABLE_HEAD>
                        <tr>
                            <th class="px-3 py-2">"Name"</th>
                            <th class="px-3 py-2">"Vendor"</th>
                            <th class="px-3 py-2">"Version"</th>
                            <th class="px-3 py-2 w-24"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-700">
                        // Positions shift on removal, so rows are rebuilt wholesale
                        {move || applications()
                            .into_iter()
                            .enumerate()
                            .map(|(index, app)| view! {
                                <tr>
                                    <td class="px-3 py-2 text-white">
                                        <span class="flex items-center gap-2">
                                            <PackageIcon class="w-4 h-4 text-slate-400" />
                                            {app.name}
                                        </span>
                                    </td>
                                    <td class="px-3 py-2 text-slate-300">{app.vendor}</td>
                                    <td class="px-3 py-2 text-slate-300 font-mono">{app.version}</td>
                                    <td class="px-3 py-2 text-right">
                                        <button
                                            class=ICON_BUTTON
                                            title="Customize"
                                            on:click=move |_| app_state.update_wizard(|w| {
                                                w.open_dialog(WizardDialog::Customization(index))
                                            })
                                        >
                                            <EditIcon class="w-4 h-4" />
                                        </button>
                                        <button
                                            class=ICON_BUTTON
                                            title="Remove"
                                            on:click=move |_| app_state.update_wizard(|w| w.remove_application(index))
                                        >
                                            <TrashIcon class="w-4 h-4" />
                                        </button>
                                    </td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

// ----------------------------------------------------------------------------
// Step 2: assignment
// ----------------------------------------------------------------------------

#[component]
pub fn AssignmentStep() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let shows_groups = move || app_state.with_wizard(|w| w.shows_assignment_groups());

    view! {
        <div class="space-y-6">
            <Field label="Deployment type">
                {radio_group(
                    "deployment-type",
                    move || app_state.with_wizard(|w| w.deployment_type),
                    move |kind| app_state.update_wizard(|w| w.deployment_type = kind),
                )}
            </Field>

            <Show when=shows_groups>
                <GroupTable kind=AssignmentType::Required />
                <GroupTable kind=AssignmentType::Available />
            </Show>
        </div>
    }
}

#[component]
fn GroupTable(kind: AssignmentType) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let groups = move || {
        app_state.with_wizard(|w| w.groups_of(kind).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-white">{format!("{} assignments", kind.label())}</h3>
                <button
                    class="flex items-center gap-1 text-sm text-blue-400 hover:text-blue-300"
                    on:click=move |_| app_state.update_wizard(|w| w.open_dialog(WizardDialog::AssignmentGroup(kind)))
                >
                    <PlusIcon class="w-4 h-4" />
                    "Add group"
                </button>
            </div>
            <table class="w-full text-sm">
                <thead class=TABLE_HEAD>
                    <tr>
                        <th class="px-3 py-2">"Group"</th>
                        <th class="px-3 py-2">"Mode"</th>
                        <th class="px-3 py-2">"Filter"</th>
                        <th class="px-3 py-2">"Availability"</th>
                        <th class="px-3 py-2">"Deadline"</th>
                        <th class="px-3 py-2">"Grace period"</th>
                        <th class="px-3 py-2 w-10"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-700">
                    <For
                        each=groups
                        key=|group| group.id
                        children=move |group| view! { <GroupRow group=group /> }
                    />
                </tbody>
            </table>
            <Show when=move || groups().is_empty()>
                <p class="text-xs text-slate-500">"No groups assigned."</p>
            </Show>
        </div>
    }
}

#[component]
fn GroupRow(group: AssignmentGroup) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let id = group.id;
    let filter = if group.filter_name.is_empty() {
        group.filter_mode.label().to_string()
    } else {
        format!("{}: {}", group.filter_mode.label(), group.filter_name)
    };

    view! {
        <tr>
            <td class="px-3 py-2 text-white">{group.group_name}</td>
            <td class="px-3 py-2 text-slate-300">{group.mode.label()}</td>
            <td class="px-3 py-2 text-slate-300">{filter}</td>
            <td class="px-3 py-2 text-slate-300">{group.availability.label()}</td>
            <td class="px-3 py-2 text-slate-300">{group.deadline.label()}</td>
            <td class="px-3 py-2 text-slate-300">{group.grace_period.label()}</td>
            <td class="px-3 py-2">
                <button
                    class=ICON_BUTTON
                    on:click=move |_| app_state.update_wizard(|w| w.remove_assignment_group(id))
                >
                    <TrashIcon class="w-4 h-4" />
                </button>
            </td>
        </tr>
    }
}

// ----------------------------------------------------------------------------
// Step 3: installation
// ----------------------------------------------------------------------------

#[component]
pub fn InstallationStep() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let settings = move || app_state.with_wizard(|w| w.installation.clone());
    let shows_postpone = move || app_state.with_wizard(|w| w.shows_postpone_fields());

    view! {
        <div class="space-y-6">
            <Field label="Installation behavior">
                {radio_group(
                    "installation-behavior",
                    move || settings().behavior,
                    move |behavior| app_state.update_wizard(|w| w.installation.behavior = behavior),
                )}
            </Field>

            <Show when=shows_postpone>
                <div class="grid grid-cols-2 gap-4 pl-4 border-l-2 border-slate-700">
                    <Field label="Maximum postpones">
                        <input
                            type="number"
                            min="0"
                            class=INPUT_CLASS
                            prop:value=move || settings().max_postpones.to_string()
                            on:input=move |e| {
                                if let Ok(count) = event_target_value(&e).parse::<u32>() {
                                    app_state.update_wizard(|w| w.installation.max_postpones = count);
                                }
                            }
                        />
                    </Field>
                    <Field label="Postpone interval">
                        {choice_select(
                            move || settings().postpone_interval,
                            move |interval| app_state.update_wizard(|w| w.installation.postpone_interval = interval),
                        )}
                    </Field>
                    <Field label="Show notification to user">
                        {yes_no(
                            "show-notification",
                            move || settings().show_notification,
                            move |show| app_state.update_wizard(|w| w.installation.show_notification = show),
                        )}
                    </Field>
                </div>
            </Show>

            <Field label="Restart behavior">
                {radio_group(
                    "restart-behavior",
                    move || settings().restart,
                    move |restart| app_state.update_wizard(|w| w.installation.restart = restart),
                )}
            </Field>
        </div>
    }
}

// ----------------------------------------------------------------------------
// Step 4: publish settings
// ----------------------------------------------------------------------------

#[component]
pub fn PublishStep() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let language = move || app_state.with_wizard(|w| w.publish.language);
    let template = move || app_state.with_wizard(|w| w.publish.template());

    view! {
        <div class="space-y-4">
            <TextField
                label="Task title"
                value=Signal::derive(move || app_state.with_wizard(|w| w.publish.task_title.clone()))
                on_input=move |title: String| app_state.update_wizard(|w| w.publish.task_title = title)
                placeholder="e.g. Monthly browser updates"
            />

            <Field label="Notification language">
                <select
                    class=INPUT_CLASS
                    on:change=move |e| {
                        if let Some(lang) = Language::from_code(&event_target_value(&e)) {
                            app_state.update_wizard(|w| w.publish.language = lang);
                        }
                    }
                >
                    {Language::all()
                        .iter()
                        .copied()
                        .map(|lang| view! {
                            <option value=lang.code() selected=move || language() == lang>{lang.label()}</option>
                        })
                        .collect_view()}
                </select>
            </Field>

            <TextField
                label="Notification title"
                value=Signal::derive(move || template().title)
                on_input=move |title: String| app_state.update_wizard(|w| {
                    let lang = w.publish.language;
                    w.publish.customizations.set_title(lang, title);
                })
            />
            <TextArea
                label="Notification message"
                value=Signal::derive(move || template().message)
                on_input=move |message: String| app_state.update_wizard(|w| {
                    let lang = w.publish.language;
                    w.publish.customizations.set_message(lang, message);
                })
            />
            <p class="text-xs text-slate-500">
                "Placeholders: {appName}, {appVersion}, {vendor}, {deadline}"
            </p>
        </div>
    }
}

// ----------------------------------------------------------------------------
// Step 5: review
// ----------------------------------------------------------------------------

#[component]
pub fn ReviewStep() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let preview = app_state
        .wizard
        .with_untracked(|w| w.as_ref().map(|w| w.preview()).unwrap_or_default());

    let title = if preview.task_title.is_empty() {
        "(untitled)".to_string()
    } else {
        preview.task_title
    };

    view! {
        <div class="space-y-6">
            <dl class="grid grid-cols-[12rem_1fr] gap-y-3 text-sm">
                <dt class="text-slate-400">"Task title"</dt>
                <dd class="text-white">{title}</dd>
                <dt class="text-slate-400">"Deployment type"</dt>
                <dd class="text-white">{preview.deployment_type.label()}</dd>
                <dt class="text-slate-400">"Required groups"</dt>
                <dd class="text-white">{preview.required_groups}</dd>
                <dt class="text-slate-400">"Available groups"</dt>
                <dd class="text-white">{preview.available_groups}</dd>
                <dt class="text-slate-400">"Installation"</dt>
                <dd class="text-white">{preview.installation}</dd>
                <dt class="text-slate-400">"Restart"</dt>
                <dd class="text-white">{preview.restart}</dd>
                <dt class="text-slate-400">"Notification language"</dt>
                <dd class="text-white">{preview.language.label()}</dd>
            </dl>

            <div>
                <h3 class="text-sm font-semibold text-white mb-2">
                    {format!("Applications ({})", preview.applications.len())}
                </h3>
                <ul class="space-y-1 text-sm text-slate-300">
                    {preview.applications
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="rounded-lg border border-slate-700 bg-slate-900 p-4">
                <p class="text-xs uppercase tracking-wider text-slate-500 mb-2">"Notification preview"</p>
                <p class="font-semibold text-white">{preview.notification.title}</p>
                <p class="text-sm text-slate-300 mt-1">{preview.notification.message}</p>
            </div>
        </div>
    }
}
