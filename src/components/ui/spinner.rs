use leptos::prelude::*;

/// Indeterminate progress ring. `label` is read out by screen readers.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex justify-center">
            <div
                class="h-10 w-10 animate-spin rounded-full border-4 border-slate-200 border-t-indigo-600"
                role="status"
                aria-live="polite"
                aria-label=label.unwrap_or("Loading")
            ></div>
        </div>
    }
}
