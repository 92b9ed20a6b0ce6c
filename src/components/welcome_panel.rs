use crate::{
    components::{Alert, AlertKind, Button, ButtonVariant},
    features::auth::state::use_auth,
};
use leptos::prelude::*;

/// Renders the signed-in state with the user record and a sign-out button.
#[component]
pub fn WelcomePanel() -> impl IntoView {
    let auth = use_auth();
    let user = Memo::new(move |_| auth.state.with(|state| state.current_user.clone()));
    let success = Memo::new(move |_| auth.state.with(|state| state.success.clone()));

    view! {
        <div class="space-y-6 text-center">
            {move || {
                let message = success.get();
                (!message.is_empty())
                    .then(|| view! { <Alert kind=AlertKind::Success message=message /> })
            }}
            <div class="space-y-2">
                <h3 class="text-xl font-bold text-slate-900">
                    "Welcome, " {move || user.get().map(|u| u.name).unwrap_or_default()} "!"
                </h3>
                <p class="text-sm text-slate-500">"You've successfully signed in to your account"</p>
            </div>
            <div class="space-y-1 text-sm text-slate-700">
                <p>
                    <strong>"Email: "</strong>
                    {move || user.get().map(|u| u.email).unwrap_or_default()}
                </p>
                {move || {
                    user.get()
                        .and_then(|u| u.auth_provider)
                        .map(|provider| {
                            view! {
                                <p>
                                    <strong>"Authentication: "</strong>
                                    {provider}
                                </p>
                            }
                        })
                }}
            </div>
            <Button variant=ButtonVariant::Secondary on_click=move |()| auth.logout()>
                "Sign Out"
            </Button>
        </div>
    }
}
