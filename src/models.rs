use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level content domain. The set is closed; `category` within a
/// service stays an open string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Medical,
    It,
    Education,
    Sports,
    Banquets,
    Graveyard,
    Organization,
}

impl Service {
    /// Services eligible for query auto-detection, in detection order.
    /// Organization is site-wide metadata and is never auto-detected.
    pub const DETECTABLE: [Service; 6] = [
        Service::Medical,
        Service::It,
        Service::Education,
        Service::Sports,
        Service::Banquets,
        Service::Graveyard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Medical => "medical",
            Service::It => "it",
            Service::Education => "education",
            Service::Sports => "sports",
            Service::Banquets => "banquets",
            Service::Graveyard => "graveyard",
            Service::Organization => "organization",
        }
    }

    /// Map a service name to its variant, or None for unknown names.
    pub fn parse(name: &str) -> Option<Service> {
        match name.to_lowercase().as_str() {
            "medical" => Some(Service::Medical),
            "it" => Some(Service::It),
            "education" => Some(Service::Education),
            "sports" => Some(Service::Sports),
            "banquets" => Some(Service::Banquets),
            "graveyard" => Some(Service::Graveyard),
            "organization" => Some(Service::Organization),
            _ => None,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indexed, citable unit of website content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentChunk {
    /// Deterministic id: `{service}_{category}_{running_index}`.
    pub id: String,
    pub service: Service,
    pub category: String,
    pub title: String,
    pub content: String,
    /// Lowercase alphabetic tokens from title + content, unioned with the
    /// service's domain vocabulary. Never empty for an indexed chunk.
    pub keywords: BTreeSet<String>,
    /// Provenance of the originating content section, used for citation.
    pub source: String,
}

/// A scored match for a single query. Lives only for the duration of
/// that query call.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub chunk: ContentChunk,
    pub score: f32,
    /// Query tokens that matched the chunk's keyword set.
    pub matched_keywords: Vec<String>,
}

/// Query request
#[derive(Debug, Clone, Deserialize)]
pub struct RagQueryRequest {
    pub query: String,
    /// Optional service filter; unknown names match no chunks.
    pub service: Option<String>,
    pub top_k: Option<usize>,
}

/// A single formatted result
#[derive(Debug, Clone, Serialize)]
pub struct ContentResult {
    pub service: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub relevance_score: f32,
    pub source: String,
}

/// Query response. `found: false` means the caller must report "no
/// information found" rather than substitute fabricated content.
#[derive(Debug, Clone, Serialize)]
pub struct RagQueryResponse {
    pub found: bool,
    pub message: String,
    pub results: Vec<ContentResult>,
    pub sources: Vec<String>,
}

/// One chunk in a service-info dump
#[derive(Debug, Clone, Serialize)]
pub struct ServiceChunk {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub source: String,
}

/// Service info response
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub chunks: Vec<ServiceChunk>,
    pub total: usize,
}

/// Available services response
#[derive(Debug, Clone, Serialize)]
pub struct ServicesListResponse {
    pub services: Vec<String>,
}

/// Index health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub indexed: bool,
    pub total_chunks: usize,
    pub services: Vec<String>,
    pub indexed_at: DateTime<Utc>,
}

/// Reload response
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub total_chunks: usize,
    pub services: Vec<String>,
    pub reloaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_serializes_to_lowercase() {
        let json = serde_json::to_value(Service::Banquets).unwrap();
        assert_eq!(json, "banquets");
    }

    #[test]
    fn test_service_round_trips() {
        for service in [
            Service::Medical,
            Service::It,
            Service::Education,
            Service::Sports,
            Service::Banquets,
            Service::Graveyard,
            Service::Organization,
        ] {
            let json = serde_json::to_string(&service).unwrap();
            let back: Service = serde_json::from_str(&json).unwrap();
            assert_eq!(back, service);
        }
    }

    #[test]
    fn test_service_parse_matches_as_str() {
        assert_eq!(Service::parse("sports"), Some(Service::Sports));
        assert_eq!(Service::parse("SPORTS"), Some(Service::Sports));
        assert_eq!(Service::parse("gardening"), None);
        assert_eq!(Service::parse(""), None);
    }

    #[test]
    fn test_detectable_excludes_organization() {
        assert!(!Service::DETECTABLE.contains(&Service::Organization));
        assert_eq!(Service::DETECTABLE.len(), 6);
    }
}
