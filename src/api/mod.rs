//! Articles API Client
//!
//! Thin REST bindings to the articles server, organized by domain.

mod articles;
mod auth;
mod error;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{AppConfig, AuthScheme};
use crate::models::MessageResponse;
use crate::session::SessionProvider;

pub use error::{ApiError, ApiResult};

/// HTTP client bound to one server and one session
#[derive(Debug, Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base: String,
    auth_scheme: AuthScheme,
    session: S,
}

impl<S: SessionProvider> ApiClient<S> {
    pub fn new(config: &AppConfig, session: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_base.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme,
            session,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attach the stored token, if there is one
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, self.auth_scheme.header_value(&token)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            // Servers usually explain the failure in a `{message}` body
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::MemorySession;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) fn client_for(server: &MockServer, session: MemorySession) -> ApiClient<MemorySession> {
        let config = AppConfig {
            api_base: server.uri(),
            ..AppConfig::default()
        };
        ApiClient::new(&config, session)
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = AppConfig {
            api_base: "http://localhost:9000/".to_string(),
            ..AppConfig::default()
        };
        let api = ApiClient::new(&config, MemorySession::default());
        assert_eq!(api.url("/api/articles"), "http://localhost:9000/api/articles");
    }

    #[tokio::test]
    async fn test_token_sent_as_is_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .and(header("Authorization", "secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok", "articles": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server, MemorySession::with_token("secret-token"));
        let response = api.list_articles().await.unwrap();
        assert!(response.articles.is_empty());
    }

    #[tokio::test]
    async fn test_bearer_scheme() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok", "articles": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig {
            api_base: server.uri(),
            auth_scheme: AuthScheme::Bearer,
            ..AppConfig::default()
        };
        let api = ApiClient::new(&config, MemorySession::with_token("secret-token"));
        assert!(api.list_articles().await.is_ok());
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token required" })))
            .mount(&server)
            .await;

        let api = client_for(&server, MemorySession::default());
        let err = api.list_articles().await.unwrap_err();
        assert!(err.is_unauthorized());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_status_error_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/articles/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Article 42 not found" })))
            .mount(&server)
            .await;

        let api = client_for(&server, MemorySession::with_token("t"));
        match api.delete_article(42).await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Article 42 not found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = client_for(&server, MemorySession::with_token("t"));
        assert!(matches!(api.list_articles().await, Err(ApiError::Transport(_))));
    }
}
