//! Message Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, ViewStateStoreFields};

#[component]
pub fn Message() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="message">{move || store.message().get()}</div>
    }
}
