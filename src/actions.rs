//! Action Handlers
//!
//! Each handler runs one request and mirrors the outcome into the store.
//! The loading flag is raised before the request and lowered once it settles,
//! whatever the outcome.

use crate::api::{ApiClient, ApiError};
use crate::models::{ArticleDraft, ArticlePatch, Credentials};
use crate::router::Route;
use crate::session::SessionProvider;
use crate::store::{Action, Dispatch};

// ========================
// Session
// ========================

pub async fn login<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D, credentials: Credentials) {
    store.dispatch(Action::RequestStarted);
    match api.login(&credentials).await {
        Ok(response) => {
            api.session().set_token(&response.token);
            log::info!("[AUTH] Logged in as {}", credentials.username);
            store.dispatch(Action::LoggedIn { message: response.message });
        }
        Err(e) => log::warn!("[AUTH] Login failed: {}", e),
    }
    store.dispatch(Action::RequestSettled);
}

/// Local only: drop the token and go back to the login screen
pub fn logout<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D) {
    api.session().clear_token();
    log::info!("[AUTH] Logged out");
    store.dispatch(Action::LoggedOut);
}

// ========================
// Articles
// ========================

/// Guard for the articles screen: without a token go to login, else load
pub async fn enter_articles_screen<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D) {
    if !api.session().has_token() {
        log::info!("[ROUTER] No session token, redirecting to login");
        store.dispatch(Action::Navigate(Route::Login));
        return;
    }
    get_articles(api, store).await;
}

pub async fn get_articles<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D) {
    store.dispatch(Action::RequestStarted);
    match api.list_articles().await {
        Ok(response) => {
            log::debug!("[ARTICLES] Loaded {} articles", response.articles.len());
            store.dispatch(Action::ArticlesLoaded {
                message: response.message,
                articles: response.articles,
            });
        }
        Err(e) => handle_failure(api, store, "list", e),
    }
    store.dispatch(Action::RequestSettled);
}

pub async fn post_article<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D, draft: ArticleDraft) {
    store.dispatch(Action::RequestStarted);
    match api.create_article(&draft).await {
        Ok(response) => store.dispatch(Action::ArticleCreated {
            message: response.message,
            article: response.article,
        }),
        Err(e) => handle_failure(api, store, "create", e),
    }
    store.dispatch(Action::RequestSettled);
}

pub async fn update_article<S: SessionProvider, D: Dispatch>(
    api: &ApiClient<S>,
    store: &D,
    article_id: u32,
    patch: ArticlePatch,
) {
    store.dispatch(Action::RequestStarted);
    match api.update_article(article_id, &patch).await {
        Ok(response) => store.dispatch(Action::ArticleUpdated {
            message: response.message,
            article_id,
            article: response.article,
        }),
        Err(e) => handle_failure(api, store, "update", e),
    }
    store.dispatch(Action::RequestSettled);
}

pub async fn delete_article<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D, article_id: u32) {
    store.dispatch(Action::RequestStarted);
    match api.delete_article(article_id).await {
        Ok(response) => store.dispatch(Action::ArticleDeleted {
            message: response.message,
            article_id,
        }),
        Err(e) => handle_failure(api, store, "delete", e),
    }
    store.dispatch(Action::RequestSettled);
}

/// 401 drops the session and forces login; anything else is only logged
fn handle_failure<S: SessionProvider, D: Dispatch>(api: &ApiClient<S>, store: &D, operation: &str, error: ApiError) {
    if error.is_unauthorized() {
        log::warn!("[ARTICLES] {} rejected, token no longer valid", operation);
        api.session().clear_token();
        store.dispatch(Action::Navigate(Route::Login));
    } else {
        log::error!("[ARTICLES] {} failed: {}", operation, error);
    }
}
