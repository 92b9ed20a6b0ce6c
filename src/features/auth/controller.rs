//! Auth page state and the flows that mutate it. `AuthState` is plain data; the
//! view layer keeps it in a signal and hands it to [`AuthFlow`] through the
//! [`AuthStore`] trait, so the same flows run against a `RefCell` in tests.
//!
//! Each flow sets its busy flag before the first request and clears it on every
//! outcome. Requests are not cancelled: a response landing after logout still
//! updates the state.

use crate::{
    app_lib::{AppError, config::AppConfig},
    features::auth::{
        client::AuthApi,
        ports::{Navigator, SessionStorage},
        redirect::{OAuthCallback, cache_busted, now_millis, parse_callback},
        session,
        types::{AuthTab, LoginForm, LoginRequest, RegisterForm, RegisterRequest, SessionUser},
    },
};
use std::cell::RefCell;

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTER_SUCCESS: &str = "Account created successfully! Please login.";
pub const OAUTH_SUCCESS: &str = "OAuth login successful!";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const OAUTH_START_FAILED: &str = "Error starting OAuth flow. Please try again.";
pub const OAUTH_EXCHANGE_FAILED: &str = "Error completing OAuth flow. Please try again.";

/// Everything the auth page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub current_user: Option<SessionUser>,
    pub active_tab: AuthTab,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub is_loading: bool,
    pub is_oauth_processing: bool,
    /// Empty when there is nothing to show. Error and success may both be set.
    pub error: String,
    pub success: String,
}

impl AuthState {
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
        self.clear_messages();
    }

    pub fn clear_messages(&mut self) {
        self.error.clear();
        self.success.clear();
    }

    fn begin_request(&mut self) {
        self.is_loading = true;
        self.error.clear();
    }

    fn sign_in(&mut self, user: SessionUser, message: &str) {
        self.current_user = Some(user);
        self.success = message.to_string();
        self.error.clear();
    }

    fn reset_for_logout(&mut self) {
        self.current_user = None;
        self.login_form = LoginForm::default();
        self.register_form = RegisterForm::default();
        self.clear_messages();
    }
}

impl RegisterForm {
    /// Builds the registration request once the confirmation matches.
    pub fn validate(&self) -> Result<RegisterRequest, AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::Validation(PASSWORD_MISMATCH.to_string()));
        }
        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Maps a failed login or registration to the banner text. Backend and local
/// validation messages are shown as is; anything else is a network problem.
pub fn submit_failure_message(err: &AppError) -> String {
    match err {
        AppError::Rejected(message) | AppError::Validation(message) => message.clone(),
        _ => NETWORK_ERROR.to_string(),
    }
}

/// Shared, interior-mutable access to [`AuthState`].
pub trait AuthStore {
    fn read<R>(&self, read: impl FnOnce(&AuthState) -> R) -> R;
    fn update(&self, update: impl FnOnce(&mut AuthState));
}

impl AuthStore for RefCell<AuthState> {
    fn read<R>(&self, read: impl FnOnce(&AuthState) -> R) -> R {
        read(&self.borrow())
    }

    fn update(&self, update: impl FnOnce(&mut AuthState)) {
        update(&mut self.borrow_mut());
    }
}

/// The auth flows bound to a backend, browser storage and navigation.
#[derive(Clone, Debug)]
pub struct AuthFlow<A, S, N> {
    api: A,
    storage: S,
    navigator: N,
    config: AppConfig,
}

impl<A: AuthApi, S: SessionStorage, N: Navigator> AuthFlow<A, S, N> {
    pub fn new(api: A, storage: S, navigator: N, config: AppConfig) -> Self {
        Self {
            api,
            storage,
            navigator,
            config,
        }
    }

    /// Startup step; call exactly once. Returns the authorization code to exchange
    /// when the page was opened by a Keycloak redirect. The query is stripped
    /// before returning so the code cannot be replayed by a refresh.
    pub fn initialize(&self, store: &impl AuthStore) -> Option<String> {
        match parse_callback(&self.navigator.search()) {
            OAuthCallback::Error(reason) => {
                self.strip_query();
                log::warn!("identity provider returned an error: {reason}");
                store.update(|state| state.error = format!("OAuth error: {reason}"));
                None
            }
            OAuthCallback::Code(code) => {
                self.strip_query();
                log::info!("authorization code received, exchanging it with the backend");
                store.update(|state| state.is_oauth_processing = true);
                Some(code)
            }
            OAuthCallback::Absent => {
                if let Some(user) = session::restore(&self.storage) {
                    log::info!("restored stored session for user {}", user.id);
                    store.update(|state| state.current_user = Some(user));
                }
                None
            }
        }
    }

    pub async fn submit_login(&self, store: &impl AuthStore) {
        let request = store.read(|state| LoginRequest::from(&state.login_form));
        store.update(AuthState::begin_request);

        match self.api.login(&request).await {
            Ok(user) => {
                self.persist(&user);
                store.update(|state| state.sign_in(user, LOGIN_SUCCESS));
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                store.update(|state| state.error = submit_failure_message(&err));
            }
        }

        store.update(|state| state.is_loading = false);
    }

    /// Registers the account; a confirmation mismatch never reaches the backend.
    pub async fn submit_register(&self, store: &impl AuthStore) {
        store.update(AuthState::begin_request);
        let form = store.read(|state| state.register_form.clone());

        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                store.update(|state| {
                    state.error = submit_failure_message(&err);
                    state.is_loading = false;
                });
                return;
            }
        };

        match self.api.register(&request).await {
            Ok(user) => {
                self.persist(&user);
                store.update(|state| {
                    state.success = REGISTER_SUCCESS.to_string();
                    state.active_tab = AuthTab::Login;
                    state.login_form.email = form.email;
                    state.register_form = RegisterForm::default();
                    state.error.clear();
                });
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                store.update(|state| state.error = submit_failure_message(&err));
            }
        }

        store.update(|state| state.is_loading = false);
    }

    /// Sends the browser to Keycloak. On success the page unloads, so the busy
    /// flag stays set.
    pub async fn start_oauth(&self, store: &impl AuthStore) {
        store.update(AuthState::begin_request);
        self.clear_oauth_state();

        let navigated = match self.api.authorization_url().await {
            Ok(url) => self.navigator.assign(&cache_busted(&url, now_millis())),
            Err(err) => Err(err),
        };

        if let Err(err) = navigated {
            log::error!("unable to start Keycloak sign-in: {err}");
            store.update(|state| {
                state.error = OAUTH_START_FAILED.to_string();
                state.is_loading = false;
            });
        }
    }

    pub async fn exchange_code(&self, store: &impl AuthStore, code: &str) {
        store.update(AuthState::begin_request);

        match self.api.exchange_code(code).await {
            Ok(user) => {
                self.persist(&user);
                store.update(|state| state.sign_in(user, OAUTH_SUCCESS));
                self.strip_query();
            }
            Err(err) => {
                log::error!("authorization code exchange failed: {err}");
                store.update(|state| state.error = OAUTH_EXCHANGE_FAILED.to_string());
            }
        }

        store.update(|state| {
            state.is_loading = false;
            state.is_oauth_processing = false;
        });
    }

    /// Drops all client-side state and ends the Keycloak session, otherwise the
    /// next sign-in would silently reuse it without asking for credentials.
    pub fn logout(&self, store: &impl AuthStore) {
        store.update(AuthState::reset_for_logout);
        self.clear_oauth_state();

        let target = self.config.logout_url().unwrap_or_else(|err| {
            log::error!("falling back to the app root for logout: {err}");
            "/".to_string()
        });
        if let Err(err) = self.navigator.assign(&target) {
            log::error!("unable to leave for the Keycloak logout page: {err}");
        }
    }

    /// Wipes everything a previous sign-in could have left behind.
    fn clear_oauth_state(&self) {
        self.strip_query();
        if let Err(err) = self.storage.clear_session() {
            log::warn!("unable to clear session storage: {err}");
        }
        if let Err(err) = session::forget(&self.storage) {
            log::warn!("unable to remove stored session: {err}");
        }
        if let Err(err) = self.storage.expire_cookies() {
            log::warn!("unable to expire cookies: {err}");
        }
    }

    fn strip_query(&self) {
        if let Err(err) = self.navigator.strip_query() {
            log::warn!("unable to strip query from the address bar: {err}");
        }
    }

    fn persist(&self, user: &SessionUser) {
        if let Err(err) = session::persist(&self.storage, user) {
            log::warn!("unable to store session: {err}");
        }
    }
}
