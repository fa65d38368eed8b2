//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Global state providers
//! - Routing between the auth screens and the dashboard
//! - The toast layer shared by every page

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use patchtune_shared::ConsoleConfig;

use crate::components::auth::{LoginPage, SignupPage};
use crate::components::common::ToastContainer;
use crate::components::layout::DashboardPage;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new(config);
    provide_context(app_state);

    view! {
        <Title text="PatchTune" />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes>
                    <Route path="/" view=RootRedirect />
                    <Route path="/login" view=LoginPage />
                    <Route path="/signup" view=SignupPage />
                    <Route path="/dashboard" view=DashboardPage />
                    <Route path="/*any" view=RootRedirect />
                </Routes>
            </main>
            <ToastContainer />
        </Router>
    }
}

/// Send the visitor to the dashboard when a token is stored, login otherwise
#[component]
fn RootRedirect() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let target = if app_state.is_authenticated() {
        "/dashboard"
    } else {
        "/login"
    };
    view! { <Redirect path=target /> }
}
