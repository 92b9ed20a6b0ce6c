//! Auth page state and context for the frontend. The provider builds the
//! browser-bound [`AuthFlow`], runs its startup step once on mount and exposes
//! the state signal plus the flow entry points to the views. Only the user
//! record is kept in memory; passwords live in the form fields until submitted.

use crate::{
    app_lib::config::AppConfig,
    features::auth::{
        browser::{BrowserNavigator, BrowserStorage},
        client::HttpAuthApi,
        controller::{AuthFlow, AuthState, AuthStore},
        redirect::CODE_EXCHANGE_DELAY_MS,
        types::AuthTab,
    },
};
use gloo_timers::future::TimeoutFuture;
use leptos::{prelude::*, task::spawn_local};

pub type BrowserAuthFlow = AuthFlow<HttpAuthApi, BrowserStorage, BrowserNavigator>;

impl AuthStore for RwSignal<AuthState> {
    fn read<R>(&self, read: impl FnOnce(&AuthState) -> R) -> R {
        WithUntracked::with_untracked(self, read)
    }

    fn update(&self, update: impl FnOnce(&mut AuthState)) {
        Update::update(self, update);
    }
}

#[derive(Clone, Copy)]
/// Auth context shared through Leptos.
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    pub is_authenticated: Signal<bool>,
    flow: StoredValue<BrowserAuthFlow>,
}

impl AuthContext {
    fn new(flow: BrowserAuthFlow) -> Self {
        let state = RwSignal::new(AuthState::default());
        let is_authenticated = Signal::derive(move || state.with(|s| s.current_user.is_some()));
        Self {
            state,
            is_authenticated,
            flow: StoredValue::new(flow),
        }
    }

    pub fn switch_tab(self, tab: AuthTab) {
        Update::update(&self.state, |state| state.switch_tab(tab));
    }

    pub fn submit_login(self) {
        let flow = self.flow.get_value();
        spawn_local(async move {
            flow.submit_login(&self.state).await;
        });
    }

    pub fn submit_register(self) {
        let flow = self.flow.get_value();
        spawn_local(async move {
            flow.submit_register(&self.state).await;
        });
    }

    pub fn start_oauth(self) {
        let flow = self.flow.get_value();
        spawn_local(async move {
            flow.start_oauth(&self.state).await;
        });
    }

    pub fn logout(self) {
        self.flow.with_value(|flow| flow.logout(&self.state));
    }
}

fn browser_flow() -> BrowserAuthFlow {
    let config = AppConfig::load();
    AuthFlow::new(
        HttpAuthApi::new(config.api_base_url.clone()),
        BrowserStorage,
        BrowserNavigator,
        config,
    )
}

/// Provides the auth context and runs the one-shot startup step. A Keycloak
/// return is exchanged after a short pause so the processing view renders first.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(browser_flow());
    provide_context(auth);

    let flow = auth.flow.get_value();
    if let Some(code) = flow.initialize(&auth.state) {
        spawn_local(async move {
            TimeoutFuture::new(CODE_EXCHANGE_DELAY_MS).await;
            flow.exchange_code(&auth.state, &code).await;
        });
    }

    view! { {children()} }
}

/// Returns the current auth context or a fresh, uninitialized one.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(browser_flow()))
}
