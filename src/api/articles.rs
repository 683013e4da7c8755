//! Article Endpoints
//!
//! All requests here carry the session token.

use crate::models::{ArticleDraft, ArticlePatch, ArticleResponse, ArticlesResponse, MessageResponse};
use crate::session::SessionProvider;

use super::{ApiClient, ApiResult};

impl<S: SessionProvider> ApiClient<S> {
    pub async fn list_articles(&self) -> ApiResult<ArticlesResponse> {
        let request = self.authorized(self.http.get(self.url("/api/articles")));
        self.send(request).await
    }

    pub async fn create_article(&self, draft: &ArticleDraft) -> ApiResult<ArticleResponse> {
        let request = self.authorized(self.http.post(self.url("/api/articles")).json(draft));
        self.send(request).await
    }

    pub async fn update_article(&self, article_id: u32, patch: &ArticlePatch) -> ApiResult<ArticleResponse> {
        let url = self.url(&format!("/api/articles/{}", article_id));
        let request = self.authorized(self.http.put(url).json(patch));
        self.send(request).await
    }

    pub async fn delete_article(&self, article_id: u32) -> ApiResult<MessageResponse> {
        let url = self.url(&format!("/api/articles/{}", article_id));
        let request = self.authorized(self.http.delete(url));
        self.send(request).await
    }
}
