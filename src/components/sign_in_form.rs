//! Email/password login form. Field values live in the shared auth state so a
//! successful registration can pre-fill the email.

use crate::{components::Button, features::auth::state::use_auth};
use leptos::{ev::SubmitEvent, prelude::*};

const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

#[component]
pub fn SignInForm() -> impl IntoView {
    let auth = use_auth();
    let is_loading = Signal::derive(move || auth.state.with(|state| state.is_loading));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        auth.submit_login();
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="login-email">
                    "Email"
                </label>
                <input
                    id="login-email"
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    placeholder="name@example.com"
                    required
                    prop:value=move || auth.state.with(|state| state.login_form.email.clone())
                    on:input=move |event| {
                        auth.state.update(|state| state.login_form.email = event_target_value(&event));
                    }
                />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="login-password">
                    "Password"
                </label>
                <input
                    id="login-password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="current-password"
                    required
                    prop:value=move || auth.state.with(|state| state.login_form.password.clone())
                    on:input=move |event| {
                        auth.state
                            .update(|state| state.login_form.password = event_target_value(&event));
                    }
                />
            </div>
            <Button button_type="submit" disabled=is_loading>
                {move || if is_loading.get() { "Signing In..." } else { "Sign In" }}
            </Button>
        </form>
    }
}
