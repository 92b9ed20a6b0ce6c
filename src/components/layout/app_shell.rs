//! Shared layout wrapper with the page header and a centered content card.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and a centered card.
#[component]
pub fn AppShell(
    /// Card heading.
    title: &'static str,
    /// Line under the heading.
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-indigo-500 to-purple-600">
            <header>
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="font-semibold text-white">
                        "OAuth Lab"
                    </A>
                    <A href="/health" {..} class="text-sm text-indigo-100 hover:text-white">
                        "Status"
                    </A>
                </div>
            </header>
            <main class="flex-1 flex items-center justify-center px-6 py-10">
                <div class="w-full max-w-md rounded-2xl bg-white p-6 shadow-xl sm:p-8">
                    <div class="mb-6 space-y-1 text-center">
                        <h1 class="text-2xl font-semibold text-slate-900">{title}</h1>
                        <p class="text-sm text-slate-500">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </main>
        </div>
    }
}
