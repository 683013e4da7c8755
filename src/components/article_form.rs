//! Article Form Component
//!
//! Creates new articles, or edits the selected one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::models::{ArticleDraft, ArticlePatch, TOPICS};
use crate::store::{use_app_store, Action, AppStore, Dispatch, ViewStateStoreFields};

/// Form for creating an article, or editing the selected one
#[component]
pub fn ArticleForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (topic, set_topic) = signal(String::new());

    let fill = move |draft: ArticleDraft| {
        set_title.set(draft.title);
        set_text.set(draft.text);
        set_topic.set(draft.topic);
    };

    let editing = move || store.selected_article_id().get().is_some();

    prefill_on_selection(store, fill);

    let draft = move || ArticleDraft {
        title: title.get(),
        text: text.get(),
        topic: topic.get(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft();
        if !draft.is_complete() {
            return;
        }
        let api = ctx.api();
        match store.selected_article_id().get_untracked() {
            Some(article_id) => spawn_local(async move {
                actions::update_article(&api, &store, article_id, ArticlePatch::from(draft)).await;
            }),
            None => spawn_local(async move {
                actions::post_article(&api, &store, draft).await;
            }),
        }
        fill(ArticleDraft::default());
    };

    view! {
        <form id="form" on:submit=on_submit>
            <h2>{move || if editing() { "Edit Article" } else { "Create Article" }}</h2>
            <input
                id="title"
                maxlength="50"
                placeholder="Enter title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="text"
                maxlength="200"
                placeholder="Enter text"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />

            <div class="topic-selector-row">
                {TOPICS.iter().map(|name| {
                    let name = *name;
                    let is_selected = move || topic.get() == name;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "topic-btn small active" } else { "topic-btn small" }
                            on:click=move |_| set_topic.set(name.to_string())
                        >
                            {name}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="button-group">
                <button id="submitArticle" type="submit" disabled=move || !draft().is_complete()>
                    "Submit"
                </button>
                <Show when=editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| store.dispatch(Action::SelectArticle(None))
                    >
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}

/// Fill the form from the selected article when entering edit mode, and with
/// an empty draft when leaving it. Reacts to selection changes only.
fn prefill_on_selection(store: AppStore, fill: impl Fn(ArticleDraft) + 'static) {
    let selected = Memo::new(move |_| store.selected_article_id().get());
    Effect::new(move |_| {
        let draft = selected
            .get()
            .and_then(|id| {
                store
                    .articles()
                    .with_untracked(|articles| articles.iter().find(|a| a.article_id == id).map(ArticleDraft::from))
            })
            .unwrap_or_default();
        fill(draft);
    });
}
