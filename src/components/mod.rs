//! Shared UI components exported for routes.

pub(crate) mod auth_tabs;
pub(crate) mod layout;
pub(crate) mod processing_panel;
pub(crate) mod sign_in_form;
pub(crate) mod sign_up_form;
pub(crate) mod ui;
pub(crate) mod welcome_panel;

pub(crate) use auth_tabs::AuthTabs;
pub(crate) use layout::AppShell;
pub(crate) use processing_panel::ProcessingPanel;
pub(crate) use sign_in_form::SignInForm;
pub(crate) use sign_up_form::SignUpForm;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Spinner};
pub(crate) use welcome_panel::WelcomePanel;
