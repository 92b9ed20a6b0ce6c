//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping credential handling and API
//! access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod health;
