//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::session::LocalStorageSession;

pub type BrowserApi = ApiClient<LocalStorageSession>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<BrowserApi>,
}

impl AppContext {
    pub fn new(api: BrowserApi) -> Self {
        Self {
            api: StoredValue::new(api),
        }
    }

    /// Owned client handle for use inside `spawn_local`
    pub fn api(&self) -> BrowserApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
