//! Dashboard Shell Component
//!
//! Layout for the authenticated part of the console:
//! - Navigation menu on the left
//! - Top bar with breadcrumbs and logout
//! - Content area switched by the menu's current view

use leptos::*;
use leptos_router::*;
use patchtune_shared::DashboardView;

use super::{NavMenu, TopBar};
use crate::components::inventory::InventoryView;
use crate::components::tasks::PublishedTasksView;
use crate::components::wizard::PublishWizardView;
use crate::state::AppState;

/// `/dashboard` route; bounces to login without a stored token
#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    if !app_state.is_authenticated() {
        tracing::debug!("No token stored, redirecting to login");
        return view! { <Redirect path="/login" /> }.into_view();
    }

    // Only re-render the content when the view itself changes, not on
    // menu expand/collapse
    let current_view = create_memo(move |_| app_state.current_view());

    view! {
        <div class="h-screen flex overflow-hidden">
            <NavMenu />

            <div class="flex-1 flex flex-col min-w-0">
                <TopBar />

                <div class="flex-1 overflow-auto">
                    {move || match current_view.get() {
                        DashboardView::Applications => view! { <InventoryView /> }.into_view(),
                        DashboardView::PublishedTasks => view! { <PublishedTasksView /> }.into_view(),
                        DashboardView::PublishWizard => view! { <PublishWizardView /> }.into_view(),
                        DashboardView::Placeholder(label) => view! { <PlaceholderView label=label /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
    .into_view()
}

/// Page for menu items without a backing view
#[component]
fn PlaceholderView(label: &'static str) -> impl IntoView {
    view! {
        <div class="h-full flex items-center justify-center">
            <div class="text-center text-slate-400">
                <div class="w-16 h-16 rounded-full bg-slate-800 flex items-center justify-center mx-auto mb-4">
                    <svg class="w-8 h-8" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <circle cx="12" cy="12" r="10" />
                        <line x1="12" y1="8" x2="12" y2="12" />
                        <line x1="12" y1="16" x2="12.01" y2="16" />
                    </svg>
                </div>
                <h2 class="text-lg font-semibold text-white">{label}</h2>
                <p class="text-sm mt-1">"This section is not available yet."</p>
            </div>
        </div>
    }
}
