use leptos::*;
use leptos_router::*;
use patchtune_shared::{signup_notification, Notification, SignupForm};

use super::AuthCard;
use crate::components::common::{TextField, PRIMARY_BUTTON};
use crate::state::AppState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = create_rw_signal(SignupForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        // Mismatched passwords never reach the server
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(err) => {
                app_state.notify(Notification::from(&err));
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = app_state.api_client().signup(&request).await;
            app_state.notify(signup_notification(&result));
            set_submitting.set(false);
            if result.is_ok() {
                navigate("/login", Default::default());
            }
        });
    };

    view! {
        <AuthCard title="Create account" subtitle="Register a new tenant">
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    label="Tenant name"
                    value=Signal::derive(move || form.with(|f| f.tenant_name.clone()))
                    on_input=move |v: String| form.update(|f| f.tenant_name = v)
                    required=true
                />
                <TextField
                    label="Username"
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=move |v: String| form.update(|f| f.username = v)
                    required=true
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                    required=true
                />
                <TextField
                    label="Confirm password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                    on_input=move |v: String| form.update(|f| f.confirm_password = v)
                    required=true
                />
                <TextField
                    label="Phone number"
                    input_type="tel"
                    value=Signal::derive(move || form.with(|f| f.phno.clone()))
                    on_input=move |v: String| form.update(|f| f.phno = v)
                    required=true
                />
                <button
                    type="submit"
                    class=format!("{} w-full", PRIMARY_BUTTON)
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <p class="text-sm text-slate-400 mt-6 text-center">
                "Already registered? "
                <A href="/login" class="text-blue-400 hover:text-blue-300">"Sign in"</A>
            </p>
        </AuthCard>
    }
}
