//! Shown while a Keycloak authorization code is being exchanged, so the sign-in
//! form never flashes between the redirect and the result.

use crate::components::Spinner;
use leptos::prelude::*;

#[component]
pub fn ProcessingPanel() -> impl IntoView {
    view! {
        <div class="space-y-4 text-center">
            <h3 class="text-lg font-medium text-slate-900">"Authenticating with Keycloak"</h3>
            <p class="text-sm text-slate-500">
                "Please wait while we verify your credentials and set up your session..."
            </p>
            <Spinner label="Authenticating" />
        </div>
    }
}
