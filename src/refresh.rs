//! Refresh Workflows
//!
//! Write-then-refetch flows shared by the form, the vote button and startup.
//! Each refresh takes a ticket from the list sequencer; if a newer refresh
//! started while this one was in flight, its result is discarded.

use futures::join;
use leptos_debounce::Sequencer;

use crate::api::IdeasApi;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{AnalyticsSummary, Idea, NewIdea, VoteType};

/// Result of one list + counters round trip
#[derive(Debug)]
pub struct Snapshot {
    pub ideas: Result<Vec<Idea>, ApiError>,
    pub summary: Result<AnalyticsSummary, ApiError>,
}

/// Fetch ideas and counters together.
///
/// Returns `None` when a newer refresh was issued in the meantime.
pub async fn refresh<A: IdeasApi>(api: &A, config: &AppConfig, seq: &Sequencer) -> Option<Snapshot> {
    let ticket = seq.issue();
    let (ideas, summary) = join!(
        api.list_ideas(config.ideas_limit),
        api.analytics(config.analytics_period_days)
    );
    seq.is_current(ticket).then_some(Snapshot { ideas, summary })
}

/// Create an idea, then refetch once
pub async fn submit_idea<A: IdeasApi>(
    api: &A,
    config: &AppConfig,
    seq: &Sequencer,
    idea: &NewIdea,
) -> Result<Option<Snapshot>, ApiError> {
    api.create_idea(idea).await?;
    Ok(refresh(api, config, seq).await)
}

/// Up-vote an idea, then refetch once
pub async fn upvote<A: IdeasApi>(
    api: &A,
    config: &AppConfig,
    seq: &Sequencer,
    idea_id: &str,
) -> Result<Option<Snapshot>, ApiError> {
    api.vote(idea_id, VoteType::Up).await?;
    Ok(refresh(api, config, seq).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MockApi {
        ideas: Vec<Idea>,
        list_calls: Cell<u32>,
        analytics_calls: Cell<u32>,
        created: RefCell<Vec<NewIdea>>,
        votes: RefCell<Vec<(String, VoteType)>>,
        fail_writes: bool,
        /// Simulates another refresh starting while the list request is in flight
        interleave: Option<Sequencer>,
    }

    impl IdeasApi for MockApi {
        async fn list_ideas(&self, limit: u32) -> Result<Vec<Idea>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            if let Some(seq) = &self.interleave {
                seq.issue();
            }
            Ok(self.ideas.iter().take(limit as usize).cloned().collect())
        }

        async fn create_idea(&self, idea: &NewIdea) -> Result<(), ApiError> {
            if self.fail_writes {
                return Err(ApiError::Status { status: 422 });
            }
            self.created.borrow_mut().push(idea.clone());
            Ok(())
        }

        async fn vote(&self, idea_id: &str, vote_type: VoteType) -> Result<(), ApiError> {
            if self.fail_writes {
                return Err(ApiError::Network("offline".into()));
            }
            self.votes.borrow_mut().push((idea_id.to_string(), vote_type));
            Ok(())
        }

        async fn analytics(&self, _period_days: u32) -> Result<AnalyticsSummary, ApiError> {
            self.analytics_calls.set(self.analytics_calls.get() + 1);
            Ok(AnalyticsSummary { total_ideas: self.ideas.len() as u64, ..Default::default() })
        }
    }

    fn config() -> AppConfig {
        AppConfig::with_origin("http://localhost")
    }

    fn draft() -> NewIdea {
        NewIdea {
            title: "Велодорожка".into(),
            description: "Проложить велодорожку вдоль парка".into(),
            category: Category::Infrastructure,
            latitude: 54.0,
            longitude: 86.6,
            address: "ул. Мира".into(),
            photo_urls: vec![],
        }
    }

    fn idea(id: &str) -> Idea {
        serde_json::from_str(&format!(r#"{{"id": "{}", "title": "t", "category": "art"}}"#, id)).unwrap()
    }

    #[test]
    fn test_submit_refetches_exactly_once() {
        let api = MockApi::default();
        let seq = Sequencer::new();

        let snapshot = block_on(submit_idea(&api, &config(), &seq, &draft())).unwrap();

        assert!(snapshot.is_some());
        assert_eq!(api.created.borrow().len(), 1);
        assert_eq!(api.list_calls.get(), 1);
        assert_eq!(api.analytics_calls.get(), 1);
    }

    #[test]
    fn test_failed_submit_does_not_refetch() {
        let api = MockApi { fail_writes: true, ..Default::default() };
        let seq = Sequencer::new();

        let result = block_on(submit_idea(&api, &config(), &seq, &draft()));

        assert!(matches!(result, Err(ApiError::Status { status: 422 })));
        assert_eq!(api.list_calls.get(), 0);
        assert_eq!(api.analytics_calls.get(), 0);
    }

    #[test]
    fn test_upvote_sends_up_and_refreshes() {
        let api = MockApi { ideas: vec![idea("a"), idea("b")], ..Default::default() };
        let seq = Sequencer::new();

        let snapshot = block_on(upvote(&api, &config(), &seq, "b")).unwrap().unwrap();

        assert_eq!(*api.votes.borrow(), vec![("b".to_string(), VoteType::Up)]);
        assert_eq!(snapshot.ideas.unwrap().len(), 2);
        assert_eq!(snapshot.summary.unwrap().total_ideas, 2);
    }

    #[test]
    fn test_refresh_respects_limit() {
        let api = MockApi { ideas: (0..80).map(|i| idea(&i.to_string())).collect(), ..Default::default() };
        let snapshot = block_on(refresh(&api, &config(), &Sequencer::new())).unwrap();
        assert_eq!(snapshot.ideas.unwrap().len(), 50);
    }

    #[test]
    fn test_superseded_refresh_is_dropped() {
        let seq = Sequencer::new();
        let api = MockApi { interleave: Some(seq.clone()), ..Default::default() };

        let snapshot = block_on(refresh(&api, &config(), &seq));

        assert!(snapshot.is_none());
        assert_eq!(api.list_calls.get(), 1);
    }
}
