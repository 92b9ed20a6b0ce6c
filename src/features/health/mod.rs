//! Backend liveness probe shown on the `/health` page.

pub(crate) mod client;
