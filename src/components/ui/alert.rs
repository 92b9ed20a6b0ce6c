//! Banners for the error and success messages of the auth page. Messages come
//! from fixed strings or the backend `error` field and never carry passwords or
//! authorization codes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            Self::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
            }
        }
    }

    // Errors interrupt the screen reader, confirmations wait their turn.
    fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success => "status",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.class() role=kind.role()>{message}</div> }
}
