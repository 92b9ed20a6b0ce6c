//! In-memory stand-ins for the browser and the backend. Clones share state so a
//! test can keep a handle after moving a fake into an `AuthFlow`.

use crate::{
    app_lib::AppError,
    features::auth::{
        client::AuthApi,
        ports::{Navigator, SessionStorage},
        types::{LoginRequest, RegisterRequest, SessionUser},
    },
};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[derive(Default)]
struct StorageState {
    items: HashMap<String, String>,
    reads: usize,
    session_clears: usize,
    cookie_expiries: usize,
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<StorageState>>,
}

impl MemoryStorage {
    /// Reads without counting as an access by the code under test.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().items.get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }

    pub fn session_clears(&self) -> usize {
        self.state.borrow().session_clears
    }

    pub fn cookie_expiries(&self) -> usize {
        self.state.borrow().cookie_expiries
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        Ok(state.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.state
            .borrow_mut()
            .items
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.state.borrow_mut().items.remove(key);
        Ok(())
    }

    fn clear_session(&self) -> Result<(), AppError> {
        self.state.borrow_mut().session_clears += 1;
        Ok(())
    }

    fn expire_cookies(&self) -> Result<(), AppError> {
        self.state.borrow_mut().cookie_expiries += 1;
        Ok(())
    }
}

#[derive(Default)]
struct NavigatorState {
    search: String,
    strips: usize,
    visits: Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    state: Rc<RefCell<NavigatorState>>,
}

impl RecordingNavigator {
    pub fn at(search: &str) -> Self {
        let navigator = Self::default();
        navigator.state.borrow_mut().search = search.to_string();
        navigator
    }

    pub fn strips(&self) -> usize {
        self.state.borrow().strips
    }

    pub fn visits(&self) -> Vec<String> {
        self.state.borrow().visits.clone()
    }
}

impl Navigator for RecordingNavigator {
    fn search(&self) -> String {
        self.state.borrow().search.clone()
    }

    fn strip_query(&self) -> Result<(), AppError> {
        let mut state = self.state.borrow_mut();
        state.search.clear();
        state.strips += 1;
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<(), AppError> {
        self.state.borrow_mut().visits.push(url.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    AuthorizationUrl,
    ExchangeCode(String),
}

struct ApiState {
    calls: Vec<ApiCall>,
    user_result: Result<SessionUser, AppError>,
    authorization_result: Result<String, AppError>,
}

/// Answers every call from canned results and records what was asked.
#[derive(Clone)]
pub struct FakeAuthApi {
    state: Rc<RefCell<ApiState>>,
}

impl FakeAuthApi {
    pub fn answering(user: SessionUser) -> Self {
        Self {
            state: Rc::new(RefCell::new(ApiState {
                calls: Vec::new(),
                user_result: Ok(user),
                authorization_result: Ok(
                    "http://sso.test/realms/oauth-demo/protocol/openid-connect/auth?client_id=Spring-Client"
                        .to_string(),
                ),
            })),
        }
    }

    pub fn failing(err: AppError) -> Self {
        let api = Self::answering(sample_user());
        {
            let mut state = api.state.borrow_mut();
            state.user_result = Err(err.clone());
            state.authorization_result = Err(err);
        }
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: ApiCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn user_result(&self) -> Result<SessionUser, AppError> {
        self.state.borrow().user_result.clone()
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, AppError> {
        self.record(ApiCall::Login {
            email: request.email.clone(),
            password: request.password.clone(),
        });
        self.user_result()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<SessionUser, AppError> {
        self.record(ApiCall::Register {
            name: request.name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
        });
        self.user_result()
    }

    async fn authorization_url(&self) -> Result<String, AppError> {
        self.record(ApiCall::AuthorizationUrl);
        self.state.borrow().authorization_result.clone()
    }

    async fn exchange_code(&self, code: &str) -> Result<SessionUser, AppError> {
        self.record(ApiCall::ExchangeCode(code.to_string()));
        self.user_result()
    }
}

pub fn sample_user() -> SessionUser {
    SessionUser {
        id: 42,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        auth_provider: None,
    }
}
