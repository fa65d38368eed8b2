//! Toast notifications
//!
//! Renders `AppState::toasts` in the bottom-right corner. Toasts expire on
//! their own (see `AppState::notify`) or when dismissed.

use leptos::*;

use super::{toast_class, CloseIcon};
use crate::state::AppState;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80">
            <For
                each=move || app_state.toasts.get()
                key=|n| n.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "rounded-lg border px-4 py-3 shadow-lg flex items-start gap-3 {}",
                                toast_class(notification.variant)
                            )
                        >
                            <div class="flex-1 min-w-0">
                                <p class="text-sm font-semibold">{notification.title.clone()}</p>
                                {notification.description.clone().map(|d| view! {
                                    <p class="text-sm opacity-90 mt-0.5">{d}</p>
                                })}
                            </div>
                            <button
                                class="opacity-70 hover:opacity-100 transition-opacity"
                                on:click=move |_| app_state.dismiss(id)
                            >
                                <CloseIcon class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
