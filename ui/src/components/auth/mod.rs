//! Authentication Screens
//!
//! - `LoginPage` - Username/password login, stores the bearer token
//! - `SignupPage` - Tenant registration with password confirmation

mod login;
mod signup;

pub use login::LoginPage;
pub use signup::SignupPage;

use leptos::*;

/// Centered card shared by both screens
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-slate-800 border border-slate-700 rounded-xl shadow-2xl p-8">
                <div class="flex items-center gap-3 mb-6">
                    <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-indigo-600 rounded-lg flex items-center justify-center">
                        <span class="text-white font-bold">"P"</span>
                    </div>
                    <div>
                        <h1 class="text-xl font-bold text-white">{title}</h1>
                        <p class="text-sm text-slate-400">{subtitle}</p>
                    </div>
                </div>
                {children()}
            </div>
        </div>
    }
}
