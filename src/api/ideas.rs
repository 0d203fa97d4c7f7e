//! Ideas Endpoints
//!
//! `GET/POST /ideas`, `POST /ideas/{id}/vote`, `GET /ideas/analytics`.

use percent_encoding::utf8_percent_encode;

use super::{get_json, post_json, IdeasApi, URI_COMPONENT};
use crate::error::ApiError;
use crate::models::{AnalyticsResponse, AnalyticsSummary, Idea, NewIdea, VoteArgs, VoteType};

/// `IdeasApi` over `fetch`, rooted at the configured API base URL
#[derive(Debug, Clone)]
pub struct HttpIdeasApi {
    base_url: String,
}

impl HttpIdeasApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn list_url(&self, limit: u32) -> String {
        format!("{}/ideas?limit={}", self.base_url, limit)
    }

    fn create_url(&self) -> String {
        format!("{}/ideas", self.base_url)
    }

    fn vote_url(&self, idea_id: &str) -> String {
        format!("{}/ideas/{}/vote", self.base_url, utf8_percent_encode(idea_id, URI_COMPONENT))
    }

    fn analytics_url(&self, period_days: u32) -> String {
        format!("{}/ideas/analytics?period_days={}", self.base_url, period_days)
    }
}

impl IdeasApi for HttpIdeasApi {
    async fn list_ideas(&self, limit: u32) -> Result<Vec<Idea>, ApiError> {
        get_json(&self.list_url(limit)).await
    }

    async fn create_idea(&self, idea: &NewIdea) -> Result<(), ApiError> {
        post_json(&self.create_url(), idea).await
    }

    async fn vote(&self, idea_id: &str, vote_type: VoteType) -> Result<(), ApiError> {
        post_json(&self.vote_url(idea_id), &VoteArgs { vote_type }).await
    }

    async fn analytics(&self, period_days: u32) -> Result<AnalyticsSummary, ApiError> {
        let resp: AnalyticsResponse = get_json(&self.analytics_url(period_days)).await?;
        Ok(resp.summary_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = HttpIdeasApi::new("https://ideas.example/api");
        assert_eq!(api.list_url(50), "https://ideas.example/api/ideas?limit=50");
        assert_eq!(api.create_url(), "https://ideas.example/api/ideas");
        assert_eq!(api.analytics_url(365), "https://ideas.example/api/ideas/analytics?period_days=365");
        assert_eq!(
            api.vote_url("0f6c7c1e-9a1b"),
            "https://ideas.example/api/ideas/0f6c7c1e-9a1b/vote"
        );
    }

    #[test]
    fn test_vote_url_escapes_id() {
        let api = HttpIdeasApi::new("/api");
        assert_eq!(api.vote_url("a/b c"), "/api/ideas/a%2Fb%20c/vote");
    }
}
