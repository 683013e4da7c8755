//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through `Action`s applied by `ViewState::apply`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Article;
use crate::router::Route;

/// Message shown after logging out
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Global view state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    /// Last status string (server message or fixed client text)
    pub message: String,
    /// True while a request is in flight
    pub loading: bool,
    /// Local copy of the articles, in server order
    pub articles: Vec<Article>,
    /// Article being edited in the form
    pub selected_article_id: Option<u32>,
    /// Current screen
    pub route: Route,
}

/// State transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Clear the message and raise the loading flag
    RequestStarted,
    /// Lower the loading flag
    RequestSettled,
    Navigate(Route),
    LoggedIn { message: String },
    LoggedOut,
    ArticlesLoaded { message: String, articles: Vec<Article> },
    ArticleCreated { message: String, article: Article },
    /// Replace the entry matching `article_id` and leave edit mode
    ArticleUpdated { message: String, article_id: u32, article: Article },
    ArticleDeleted { message: String, article_id: u32 },
    SelectArticle(Option<u32>),
}

impl ViewState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }

    /// The article currently being edited, if it is still in the list
    pub fn selected_article(&self) -> Option<&Article> {
        let id = self.selected_article_id?;
        self.articles.iter().find(|article| article.article_id == id)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::RequestStarted => {
                self.message.clear();
                self.loading = true;
            }
            Action::RequestSettled => self.loading = false,
            Action::Navigate(route) => self.route = route,
            Action::LoggedIn { message } => {
                self.message = message;
                self.route = Route::Articles;
            }
            Action::LoggedOut => {
                self.message = FAREWELL_MESSAGE.to_string();
                self.route = Route::Login;
            }
            Action::ArticlesLoaded { message, articles } => {
                self.articles = articles;
                self.message = message;
            }
            Action::ArticleCreated { message, article } => {
                self.articles.push(article);
                self.message = message;
            }
            Action::ArticleUpdated { message, article_id, article } => {
                if let Some(existing) = self.articles.iter_mut().find(|a| a.article_id == article_id) {
                    *existing = article;
                }
                self.message = message;
                self.selected_article_id = None;
            }
            Action::ArticleDeleted { message, article_id } => {
                self.articles.retain(|a| a.article_id != article_id);
                self.message = message;
            }
            Action::SelectArticle(id) => self.selected_article_id = id,
        }
    }
}

/// Anything that can receive actions
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

impl Dispatch for AppStore {
    /// Runs the reducer on a snapshot, then writes back only the fields that
    /// changed so readers of untouched fields are not notified.
    fn dispatch(&self, action: Action) {
        let mut next = self.get_untracked();
        next.apply(action);
        let ViewState {
            message,
            loading,
            articles,
            selected_article_id,
            route,
        } = next;

        if self.message().with_untracked(|current| *current != message) {
            *self.message().write() = message;
        }
        if self.loading().get_untracked() != loading {
            *self.loading().write() = loading;
        }
        if self.articles().with_untracked(|current| *current != articles) {
            *self.articles().write() = articles;
        }
        if self.selected_article_id().get_untracked() != selected_article_id {
            *self.selected_article_id().write() = selected_article_id;
        }
        if self.route().get_untracked() != route {
            *self.route().write() = route;
        }
    }
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
