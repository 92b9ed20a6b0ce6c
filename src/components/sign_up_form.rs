//! Registration form. The confirmation field is checked locally and never sent.

use crate::{components::Button, features::auth::state::use_auth};
use leptos::{ev::SubmitEvent, prelude::*};

const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

#[component]
pub fn SignUpForm() -> impl IntoView {
    let auth = use_auth();
    let is_loading = Signal::derive(move || auth.state.with(|state| state.is_loading));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        auth.submit_register();
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="register-name">
                    "Full Name"
                </label>
                <input
                    id="register-name"
                    type="text"
                    class=INPUT_CLASS
                    autocomplete="name"
                    required
                    prop:value=move || auth.state.with(|state| state.register_form.name.clone())
                    on:input=move |event| {
                        auth.state
                            .update(|state| state.register_form.name = event_target_value(&event));
                    }
                />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="register-email">
                    "Email"
                </label>
                <input
                    id="register-email"
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    required
                    prop:value=move || auth.state.with(|state| state.register_form.email.clone())
                    on:input=move |event| {
                        auth.state
                            .update(|state| state.register_form.email = event_target_value(&event));
                    }
                />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="register-password">
                    "Password"
                </label>
                <input
                    id="register-password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    required
                    prop:value=move || auth.state.with(|state| state.register_form.password.clone())
                    on:input=move |event| {
                        auth.state.update(|state| {
                            state.register_form.password = event_target_value(&event);
                        });
                    }
                />
            </div>
            <div>
                <label
                    class="block mb-2 text-sm font-medium text-slate-700"
                    for="register-confirm-password"
                >
                    "Confirm Password"
                </label>
                <input
                    id="register-confirm-password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    required
                    prop:value=move || {
                        auth.state.with(|state| state.register_form.confirm_password.clone())
                    }
                    on:input=move |event| {
                        auth.state.update(|state| {
                            state.register_form.confirm_password = event_target_value(&event);
                        });
                    }
                />
            </div>
            <Button button_type="submit" disabled=is_loading>
                {move || if is_loading.get() { "Creating Account..." } else { "Create Account" }}
            </Button>
        </form>
    }
}
