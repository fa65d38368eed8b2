//! Top Bar Component
//!
//! Breadcrumbs for the selected menu entry and the logout action.

use leptos::*;
use leptos_router::*;

use crate::components::common::LogoutIcon;
use crate::state::AppState;

/// Top bar with breadcrumbs and logout
#[component]
pub fn TopBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let breadcrumbs = move || app_state.menu.with(|m| m.breadcrumb());

    let on_logout = move |_| {
        app_state.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="h-14 flex items-center justify-between px-4 bg-slate-800 border-b border-slate-700 flex-shrink-0">
            // Left side: Breadcrumbs
            <nav class="flex items-center gap-1 text-sm min-w-0">
                {move || {
                    let crumbs = breadcrumbs();
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let class = if i == last {
                                "text-white font-medium truncate"
                            } else {
                                "text-slate-400"
                            };
                            view! {
                                {(i > 0).then(|| view! { <span class="text-slate-500 mx-1">"/"</span> })}
                                <span class=class>{label}</span>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            // Right side: Actions
            <button
                class="flex items-center gap-2 px-3 py-2 text-sm text-slate-300 hover:text-white \
                       hover:bg-slate-700 rounded-lg transition-colors"
                on:click=on_logout
            >
                <LogoutIcon class="w-4 h-4" />
                "Log out"
            </button>
        </header>
    }
}
