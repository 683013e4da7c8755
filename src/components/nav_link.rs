//! Nav Link Component
//!
//! In-app link that updates the stored route instead of reloading the page.

use leptos::prelude::*;

use crate::router::Route;
use crate::store::{use_app_store, Action, Dispatch, ViewStateStoreFields};

#[component]
pub fn NavLink(
    route: Route,
    #[prop(into)] dom_id: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store.dispatch(Action::Navigate(route));
    };

    view! {
        <a
            id=dom_id
            href=route.path()
            class=move || if store.route().get() == route { "active" } else { "" }
            on:click=on_click
        >
            {label}
        </a>
    }
}
