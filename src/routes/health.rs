//! Status page: backend liveness from `/oauth/health` plus the client build.

use crate::{
    app_lib::build_info,
    components::{Alert, AlertKind, AppShell, Spinner},
    features::health::client,
};
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let backend = LocalResource::new(client::fetch_health);

    view! {
        <AppShell title="Status" subtitle="Backend and client build information">
            <div class="space-y-4">
                <Suspense fallback=|| view! { <Spinner label="Checking backend" /> }>
                    {move || {
                        backend
                            .get()
                            .map(|result| match result {
                                Ok(status) => {
                                    view! { <Alert kind=AlertKind::Success message=status /> }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <div class="rounded-lg border border-slate-200">
                    <div class="border-b border-slate-200 px-4 py-2 text-sm font-semibold text-slate-600">
                        "Client build"
                    </div>
                    <pre class="p-4 text-center text-sm text-slate-900">{commit}</pre>
                </div>
            </div>
        </AppShell>
    }
}
