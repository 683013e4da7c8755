//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::models::Credentials;
use crate::store::use_app_store;

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let is_disabled = move || !Credentials::new(username.get(), password.get()).is_valid();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        if !credentials.is_valid() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            actions::login(&api, &store, credentials).await;
        });
    };

    view! {
        <form id="loginForm" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                id="username"
                maxlength="20"
                placeholder="Enter username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="password"
                type="password"
                maxlength="20"
                placeholder="Enter password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button id="submitCredentials" type="submit" disabled=is_disabled>
                "Submit credentials"
            </button>
        </form>
    }
}
