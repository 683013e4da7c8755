//! Client Routes
//!
//! Two screens, kept in sync with the browser path and history.

use leptos::prelude::*;

use crate::store::{Action, AppStore, Dispatch, ViewStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Login,
    /// `/articles`
    Articles,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Articles => "/articles",
        }
    }

    /// Unknown paths fall back to the login screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/articles" | "articles" => Route::Articles,
            _ => Route::Login,
        }
    }
}

/// Route for the page the browser is currently on
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Push a history entry whenever the stored route changes
pub fn sync_history(store: AppStore) {
    Effect::new(move |_| {
        let route = store.route().get();
        push_path(route.path());
    });
}

/// Follow back/forward navigation
pub fn listen_popstate(store: AppStore) {
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        store.dispatch(Action::Navigate(current_route()));
    });
}

fn push_path(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().pathname().ok().as_deref() == Some(path) {
        return;
    }
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
                log::warn!("[ROUTER] pushState to {} failed: {:?}", path, e);
            }
        }
        Err(e) => log::warn!("[ROUTER] History unavailable: {:?}", e),
    }
}
