//! Frontend Models
//!
//! Data structures matching the ideas API.

use serde::{Deserialize, Deserializer, Serialize};

/// Idea category (matches backend enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sport,
    Art,
    Ecology,
    Infrastructure,
    Education,
    Culture,
    Other,
    /// Anything the client does not know about
    #[serde(other)]
    Unknown,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Sport,
        Category::Art,
        Category::Ecology,
        Category::Infrastructure,
        Category::Education,
        Category::Culture,
        Category::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Sport => "sport",
            Category::Art => "art",
            Category::Ecology => "ecology",
            Category::Infrastructure => "infrastructure",
            Category::Education => "education",
            Category::Culture => "culture",
            Category::Other => "other",
            Category::Unknown => "unknown",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Medium, Priority::Low];

    pub fn key(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }

    pub fn from_key(key: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Review workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    New,
    UnderReview,
    Approved,
    InProgress,
    Completed,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `[lat, lon]`, the order the map widget expects
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

/// Idea data structure (matches backend `IdeaResponse`, tolerant of gaps)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Idea {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default = "unknown_category", deserialize_with = "lenient_category")]
    pub category: Category,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub votes_count: Option<u32>,
    #[serde(default)]
    pub comments_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Idea {
    pub fn coords(&self) -> Option<Coords> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coords::new(lat, lon)),
            _ => None,
        }
    }

    pub fn votes(&self) -> u32 {
        self.votes_count.unwrap_or(0)
    }

    pub fn comments(&self) -> u32 {
        self.comments_count.unwrap_or(0)
    }

    /// Priority used for display; missing means medium
    pub fn display_priority(&self) -> Priority {
        self.priority.unwrap_or(Priority::Medium)
    }
}

fn unknown_category() -> Category {
    Category::Unknown
}

/// `null` reads as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` or a non-string reads as `Category::Unknown`
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(Category::deserialize(raw).unwrap_or(Category::Unknown))
}

/// Ids are UUID strings, but stub backends hand out integers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Str(String),
        Int(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Str(s) => s,
        IdRepr::Int(n) => n.to_string(),
    })
}

/// Body of `POST /ideas`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub photo_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// Body of `POST /ideas/{id}/vote`
#[derive(Debug, Serialize)]
pub struct VoteArgs {
    pub vote_type: VoteType,
}

/// Aggregate counters shown in the stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_ideas: u64,
    #[serde(default)]
    pub active_ideas: u64,
    #[serde(default)]
    pub completed_ideas: u64,
    #[serde(default)]
    pub total_users: u64,
}

/// `GET /ideas/analytics` response; only the summary is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(default)]
    pub summary: Option<AnalyticsSummary>,
}

impl AnalyticsResponse {
    pub fn summary_or_default(&self) -> AnalyticsSummary {
        self.summary.unwrap_or_default()
    }
}

/// One geocoder candidate in the address dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSuggestion {
    pub name: String,
    pub label: String,
    pub coords: Coords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_full_payload() {
        let json = r#"{
            "id": "0f6c7c1e-9a1b-4f3e-8d55-1a2b3c4d5e6f",
            "title": "Новая спортивная площадка",
            "description": "Построить площадку во дворе дома 5",
            "category": "sport",
            "priority": "high",
            "status": "under_review",
            "latitude": 54.0,
            "longitude": 86.6,
            "address": "ул. Ленина, 5",
            "votes_count": 12,
            "comments_count": 3,
            "created_at": "2024-05-01T10:00:00+00:00"
        }"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.category, Category::Sport);
        assert_eq!(idea.priority, Some(Priority::High));
        assert_eq!(idea.status, Some(IdeaStatus::UnderReview));
        assert_eq!(idea.coords(), Some(Coords::new(54.0, 86.6)));
        assert_eq!(idea.votes(), 12);
    }

    #[test]
    fn test_idea_sparse_payload_falls_back() {
        let idea: Idea = serde_json::from_str(r#"{"id": 1, "title": "Тестовая идея", "category": "sport"}"#).unwrap();
        assert_eq!(idea.id, "1");
        assert_eq!(idea.description, "");
        assert_eq!(idea.votes(), 0);
        assert_eq!(idea.comments(), 0);
        assert_eq!(idea.display_priority(), Priority::Medium);
        assert_eq!(idea.coords(), None);
    }

    #[test]
    fn test_idea_null_counts_and_unknown_enums() {
        let json = r#"{"id": "a", "title": "t", "category": "space", "priority": "urgent",
                       "votes_count": null, "comments_count": null, "latitude": 1.0, "longitude": 2.0}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.category, Category::Unknown);
        assert_eq!(idea.priority, Some(Priority::Unknown));
        assert_eq!(idea.votes(), 0);
    }

    #[test]
    fn test_idea_null_text_fields_do_not_break_the_list() {
        let json = r#"[
            {"id": "a", "title": "Первая идея", "description": "Описание", "category": "sport"},
            {"id": "b", "title": "Другая идея", "description": null, "category": "art"},
            {"id": "c", "title": null, "description": "Без категории", "category": null},
            {"id": "d", "title": "Странная категория", "category": 42}
        ]"#;
        let ideas: Vec<Idea> = serde_json::from_str(json).unwrap();
        assert_eq!(ideas.len(), 4);
        assert_eq!(ideas[1].description, "");
        assert_eq!(ideas[1].category, Category::Art);
        assert_eq!(ideas[2].title, "");
        assert_eq!(ideas[2].category, Category::Unknown);
        assert_eq!(ideas[3].category, Category::Unknown);
    }

    #[test]
    fn test_analytics_missing_summary_is_zero() {
        let resp: AnalyticsResponse = serde_json::from_str(r#"{"total_ideas": 7}"#).unwrap();
        assert_eq!(resp.summary_or_default(), AnalyticsSummary::default());

        let resp: AnalyticsResponse = serde_json::from_str(r#"{"summary": null}"#).unwrap();
        assert_eq!(resp.summary_or_default().total_users, 0);
    }

    #[test]
    fn test_analytics_partial_summary() {
        let resp: AnalyticsResponse =
            serde_json::from_str(r#"{"summary": {"total_ideas": 10, "completed_ideas": 2}}"#).unwrap();
        let s = resp.summary_or_default();
        assert_eq!(s.total_ideas, 10);
        assert_eq!(s.active_ideas, 0);
        assert_eq!(s.completed_ideas, 2);
    }

    #[test]
    fn test_new_idea_body_shape() {
        let body = NewIdea {
            title: "Парк".into(),
            description: "Высадить деревья вдоль реки".into(),
            category: Category::Ecology,
            latitude: 54.1,
            longitude: 86.5,
            address: "Набережная".into(),
            photo_urls: vec![],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["category"], "ecology");
        assert_eq!(value["photo_urls"], serde_json::json!([]));
        assert_eq!(serde_json::to_value(VoteArgs { vote_type: VoteType::Up }).unwrap()["vote_type"], "up");
    }

    #[test]
    fn test_category_keys_round_trip_through_from_key() {
        for c in Category::ALL {
            assert_eq!(Category::from_key(c.key()), Some(c));
        }
        assert_eq!(Category::from_key("all"), None);
        assert_eq!(Priority::from_key("low"), Some(Priority::Low));
    }
}
