//! Auth feature module covering password login, registration and the Keycloak
//! redirect flow. It keeps authentication logic out of the views and talks to
//! the browser only through the ports in [`ports`], so every flow can run
//! against in-memory fakes. Passwords and authorization codes cross this module
//! and must never be logged.
//!
//! Flow Overview: `AuthFlow::initialize` runs once at startup and either reports
//! a provider error, hands back an authorization code to exchange, or restores
//! the stored user. Login and registration post the forms held in `AuthState`.
//! Logout wipes client-side state and ends the Keycloak session.

#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod ports;
pub(crate) mod redirect;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod types;
