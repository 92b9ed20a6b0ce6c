//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Sign-in Flows
//!
//! ### Password login & registration
//!
//! 1. **Register:** The client checks the password confirmation locally and POSTs
//!    `{name, email, password}` to `/api/users/register`.
//! 2. **Login:** The client POSTs `{email, password}` to `/api/users/login` and
//!    keeps the returned user in memory and in `localStorage`.
//!
//! ### Keycloak sign-in
//!
//! 1. **Authorize:** The client GETs `/oauth/authorize`, appends a `_t` cache
//!    buster and navigates to the returned URL.
//! 2. **Return:** Keycloak redirects back with `?code=` or `?error=`. The query is
//!    stripped before anything else happens so a refresh cannot replay the code.
//! 3. **Exchange:** The code is POSTed to `/oauth/callback`; the backend performs
//!    the token exchange and answers with the user record.
//!
//! Passwords and authorization codes pass through these helpers but must never be
//! logged.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;

pub(crate) use errors::AppError;
