//! Form Primitives
//!
//! Inputs, selects, radio groups and the modal frame used by the auth screens
//! and the wizard dialogs. Enum-backed controls take any [`Choice`].

use leptos::*;
use patchtune_shared::Choice;

use super::CloseIcon;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                               placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

pub const PRIMARY_BUTTON: &str = "px-4 py-2 text-sm font-medium bg-blue-500 hover:bg-blue-600 \
                                  text-white rounded-lg transition-colors disabled:opacity-50";

pub const SECONDARY_BUTTON: &str = "px-4 py-2 text-sm font-medium text-slate-400 hover:text-white \
                                    rounded-lg transition-colors";

/// Labelled single-line input
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-300">{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-300">{label}</label>
            <textarea
                class=INPUT_CLASS
                rows="3"
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </div>
    }
}

/// `<select>` over every variant of `T`
pub fn choice_select<T: Choice>(
    value: impl Fn() -> T + 'static,
    on_change: impl Fn(T) + 'static,
) -> impl IntoView {
    let value = Signal::derive(value);
    view! {
        <select
            class=INPUT_CLASS
            on:change=move |e| {
                if let Some(choice) = T::from_label(&event_target_value(&e)) {
                    on_change(choice);
                }
            }
        >
            {T::all()
                .iter()
                .copied()
                .map(|choice| {
                    view! {
                        <option value=choice.label() selected=move || value.get() == choice>
                            {choice.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Radio buttons over every variant of `T`
pub fn radio_group<T: Choice>(
    name: &'static str,
    value: impl Fn() -> T + 'static,
    on_change: impl Fn(T) + 'static,
) -> impl IntoView {
    let value = Signal::derive(value);
    let on_change = Callback::new(on_change);
    view! {
        <div class="flex flex-wrap gap-4">
            {T::all()
                .iter()
                .copied()
                .map(|choice| {
                    view! {
                        <label class="flex items-center gap-2 text-sm text-slate-300 cursor-pointer">
                            <input
                                type="radio"
                                name=name
                                class="accent-blue-500"
                                prop:checked=move || value.get() == choice
                                on:change=move |_| on_change.call(choice)
                            />
                            {choice.label()}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Yes/No radio pair for a boolean
pub fn yes_no(
    name: &'static str,
    value: impl Fn() -> bool + 'static,
    on_change: impl Fn(bool) + 'static,
) -> impl IntoView {
    let value = Signal::derive(value);
    let on_change = Callback::new(on_change);
    view! {
        <div class="flex gap-4">
            {[("Yes", true), ("No", false)]
                .into_iter()
                .map(|(label, flag)| {
                    view! {
                        <label class="flex items-center gap-2 text-sm text-slate-300 cursor-pointer">
                            <input
                                type="radio"
                                name=name
                                class="accent-blue-500"
                                prop:checked=move || value.get() == flag
                                on:change=move |_| on_change.call(flag)
                            />
                            {label}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Labelled row wrapper for controls that are not text inputs
#[component]
pub fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <span class="block text-sm font-medium text-slate-300">{label}</span>
            {children()}
        </div>
    }
}

/// Modal frame with backdrop, title bar and footer slot
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(default = "max-w-lg")] width: &'static str,
    #[prop(into)] footer: ViewFn,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.call(())
            />

            // Modal
            <div class=format!(
                "relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full {} mx-4 max-h-[90vh] flex flex-col",
                width
            )>
                // Header
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">{title}</h2>
                    <button
                        class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                        on:click=move |_| on_close.call(())
                    >
                        <CloseIcon class="w-5 h-5" />
                    </button>
                </div>

                // Body
                <div class="p-6 space-y-4 overflow-y-auto">{children()}</div>

                // Footer
                <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                    {footer.run()}
                </div>
            </div>
        </div>
    }
}
