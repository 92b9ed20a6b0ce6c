use crate::features::auth::{state::use_auth, types::AuthTab};
use leptos::prelude::*;

const ACTIVE: &str = "flex-1 py-2 text-sm font-medium border-b-2 border-indigo-600 text-indigo-600";
const INACTIVE: &str =
    "flex-1 py-2 text-sm font-medium border-b-2 border-transparent text-slate-500 hover:text-slate-700";

/// Login/Register switcher. Switching clears both banners.
#[component]
pub fn AuthTabs() -> impl IntoView {
    let auth = use_auth();
    let active = Memo::new(move |_| auth.state.with(|state| state.active_tab));
    let class_for = move |tab: AuthTab| if active.get() == tab { ACTIVE } else { INACTIVE };

    view! {
        <div class="flex mb-6" role="tablist">
            <button
                type="button"
                role="tab"
                class=move || class_for(AuthTab::Login)
                on:click=move |_| auth.switch_tab(AuthTab::Login)
            >
                "Login"
            </button>
            <button
                type="button"
                role="tab"
                class=move || class_for(AuthTab::Register)
                on:click=move |_| auth.switch_tab(AuthTab::Register)
            >
                "Register"
            </button>
        </div>
    }
}
