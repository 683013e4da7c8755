//! Frontend Models
//!
//! Data structures matching the articles API payloads.

use serde::{Deserialize, Serialize};

/// Topics offered by the article form
pub const TOPICS: &[&str] = &["JavaScript", "React", "Node"];

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Article data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: u32,
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// Body for creating an article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl ArticleDraft {
    /// All fields filled in (ignoring surrounding whitespace)
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.text, &self.topic]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            text: article.text.clone(),
            topic: article.topic.clone(),
        }
    }
}

/// Partial update body; `None` fields are left out of the request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl From<ArticleDraft> for ArticlePatch {
    fn from(draft: ArticleDraft) -> Self {
        Self {
            title: Some(draft.title),
            text: Some(draft.text),
            topic: Some(draft.topic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.username.trim().chars().count() >= MIN_USERNAME_LEN
            && self.password.trim().chars().count() >= MIN_PASSWORD_LEN
    }
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticlesResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("foo", "12345678").is_valid());
        assert!(!Credentials::new("fo", "12345678").is_valid());
        assert!(!Credentials::new("  fo  ", "12345678").is_valid());
        assert!(!Credentials::new("foo", " 1234567 ").is_valid());
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = ArticleDraft {
            title: "Hooks".to_string(),
            text: "useState and friends".to_string(),
            topic: "React".to_string(),
        };
        assert!(draft.is_complete());
        draft.topic = "   ".to_string();
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_patch_skips_missing_fields() {
        let patch = ArticlePatch {
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "X" }));
    }

    #[test]
    fn test_articles_response_keeps_server_order() {
        let body = json!({
            "message": "Here are your articles, foo!",
            "articles": [
                { "article_id": 2, "title": "B", "text": "b", "topic": "Node" },
                { "article_id": 1, "title": "A", "text": "a", "topic": "React" }
            ]
        });
        let response: ArticlesResponse = serde_json::from_value(body).unwrap();
        let ids: Vec<u32> = response.articles.iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
