//! Landing route. Renders one of three views from the auth state: the Keycloak
//! processing screen, the signed-in welcome, or the login/register card.

use crate::{
    components::{
        Alert, AlertKind, AppShell, AuthTabs, Button, ButtonVariant, ProcessingPanel, SignInForm,
        SignUpForm, WelcomePanel,
    },
    features::auth::{state::use_auth, types::AuthTab},
};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Processing,
    SignedIn,
    SignedOut,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let phase = Memo::new(move |_| {
        if auth.state.with(|state| state.is_oauth_processing) {
            Phase::Processing
        } else if auth.is_authenticated.get() {
            Phase::SignedIn
        } else {
            Phase::SignedOut
        }
    });

    move || match phase.get() {
        Phase::Processing => view! {
            <AppShell title="Processing" subtitle="Completing your Keycloak authentication">
                <ProcessingPanel />
            </AppShell>
        }
        .into_any(),
        Phase::SignedIn => view! {
            <AppShell title="Welcome!" subtitle="You've successfully signed in">
                <WelcomePanel />
            </AppShell>
        }
        .into_any(),
        Phase::SignedOut => view! {
            <AppShell title="Welcome Back" subtitle="Sign in to your account or create a new one">
                <SignedOutPanel />
            </AppShell>
        }
        .into_any(),
    }
}

/// Tabs, the active form, both banners and the Keycloak button.
#[component]
fn SignedOutPanel() -> impl IntoView {
    let auth = use_auth();
    let active = Memo::new(move |_| auth.state.with(|state| state.active_tab));
    let error = Memo::new(move |_| auth.state.with(|state| state.error.clone()));
    let success = Memo::new(move |_| auth.state.with(|state| state.success.clone()));
    let is_loading = Signal::derive(move || auth.state.with(|state| state.is_loading));

    view! {
        <AuthTabs />
        {move || {
            let message = error.get();
            (!message.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                })
        }}
        {move || {
            let message = success.get();
            (!message.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <Alert kind=AlertKind::Success message=message />
                        </div>
                    }
                })
        }}
        {move || match active.get() {
            AuthTab::Login => view! { <SignInForm /> }.into_any(),
            AuthTab::Register => view! { <SignUpForm /> }.into_any(),
        }}
        <div class="my-6 flex items-center gap-3 text-xs uppercase tracking-wide text-slate-400">
            <span class="h-px flex-1 bg-slate-200"></span>
            "or"
            <span class="h-px flex-1 bg-slate-200"></span>
        </div>
        <Button variant=ButtonVariant::Secondary disabled=is_loading on_click=move |()| auth.start_oauth()>
            "Continue with Keycloak"
        </Button>
    }
}
