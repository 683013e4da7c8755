//! Articles Frontend App
//!
//! Root component: wires config, session, API client and store, then renders
//! the shared chrome and the screen for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::api::ApiClient;
use crate::components::{ArticleForm, ArticleList, LoginForm, Message, NavLink, Spinner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{self, Route};
use crate::session::LocalStorageSession;
use crate::store::{ViewState, ViewStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = LocalStorageSession::new(config.token_key.as_str());

    // State
    let store = Store::new(ViewState::new(router::current_route()));
    let ctx = AppContext::new(ApiClient::new(&config, session));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    router::sync_history(store);
    router::listen_popstate(store);

    let route = Memo::new(move |_| store.route().get());

    let logout = move |_| actions::logout(&ctx.api(), &store);

    view! {
        <Spinner />
        <Message />
        <button id="logout" on:click=logout>"Logout from app"</button>
        <div id="wrapper" style=move || if store.loading().get() { "opacity: 0.25" } else { "opacity: 1" }>
            <h1>"Advanced Web Applications"</h1>
            <nav>
                <NavLink dom_id="loginScreen" route=Route::Login label="Login" />
                <NavLink dom_id="articlesScreen" route=Route::Articles label="Articles" />
            </nav>
            {move || match route.get() {
                Route::Login => view! { <LoginForm /> }.into_any(),
                Route::Articles => view! {
                    <ArticleForm />
                    <ArticleList />
                }.into_any(),
            }}
        </div>
    }
}
