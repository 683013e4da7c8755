//! Article List Component
//!
//! Loads articles on mount and renders them with edit/delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Article;
use crate::store::{use_app_store, Action, Dispatch, ViewStateStoreFields};

#[component]
pub fn ArticleList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Redirects to login when there is no session, otherwise loads
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            actions::enter_articles_screen(&api, &store).await;
        });
    });

    let refresh = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            actions::get_articles(&api, &store).await;
        });
    };

    view! {
        <div class="articles">
            <div class="articles-header">
                <h2>"Articles"</h2>
                <button id="refreshArticles" on:click=refresh>"Refresh"</button>
            </div>
            {move || {
                let articles = store.articles().get();
                if articles.is_empty() {
                    view! { <p class="empty">"No articles yet"</p> }.into_any()
                } else {
                    articles
                        .into_iter()
                        .map(|article| view! { <ArticleRow article=article /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ArticleRow(article: Article) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let article_id = article.article_id;

    let editing = move || store.selected_article_id().get().is_some();

    let delete = Callback::new(move |()| {
        let api = ctx.api();
        spawn_local(async move {
            actions::delete_article(&api, &store, article_id).await;
        });
    });

    view! {
        <div class="article">
            <div>
                <h3>{article.title}</h3>
                <p>{article.text}</p>
                <p>"Topic: " {article.topic}</p>
            </div>
            <div class="article-actions">
                <button
                    disabled=editing
                    on:click=move |_| store.dispatch(Action::SelectArticle(Some(article_id)))
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    disabled=Signal::derive(editing)
                    on_confirm=delete
                />
            </div>
        </div>
    }
}
