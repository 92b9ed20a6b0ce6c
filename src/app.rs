use crate::{app_lib::build_info, features::auth::state::AuthProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. The auth provider wraps the router so its startup step runs
/// once per page load rather than once per navigation.
#[component]
pub fn App() -> impl IntoView {
    log::info!(
        "oauth-lab-client {} ({})",
        env!("CARGO_PKG_VERSION"),
        build_info::git_commit_hash()
    );

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
