use leptos::*;
use leptos_router::*;
use patchtune_shared::{login_notification, LoginRequest};

use super::AuthCard;
use crate::components::common::{TextField, PRIMARY_BUTTON};
use crate::state::AppState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = app_state.api_client().login(&request).await;
            app_state.notify(login_notification(&result));
            set_submitting.set(false);
            if result.is_ok() {
                navigate("/dashboard", Default::default());
            }
        });
    };

    view! {
        <AuthCard title="Sign in" subtitle="PatchTune third-party patching console">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    label="Username"
                    value=username
                    on_input=move |v: String| username.set(v)
                    placeholder="you@company.com"
                    required=true
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=move |v: String| password.set(v)
                    required=true
                />
                <button
                    type="submit"
                    class=format!("{} w-full", PRIMARY_BUTTON)
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="text-sm text-slate-400 mt-6 text-center">
                "No account yet? "
                <A href="/signup" class="text-blue-400 hover:text-blue-300">"Create one"</A>
            </p>
        </AuthCard>
    }
}
