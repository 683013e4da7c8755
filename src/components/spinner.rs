//! Spinner Component

use leptos::prelude::*;

use crate::store::{use_app_store, ViewStateStoreFields};

/// Shown while a request is in flight
#[component]
pub fn Spinner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get()>
            <div id="spinner">"Please wait..."</div>
        </Show>
    }
}
