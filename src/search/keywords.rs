//! Tokenization and the per-service vocabularies.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Service;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Tokenize free text: runs of 3+ ASCII letters, lowercased. The same
/// rule applies to indexed content and incoming queries.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Deduplicated keyword set for a chunk's text.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Hand-curated domain vocabulary per service. Unioned into every
/// chunk's keyword set, these anchor matching beyond the chunk's
/// literal text and drive the service-affinity boost.
pub fn domain_keywords(service: Service) -> &'static [&'static str] {
    match service {
        Service::Medical => &[
            "doctor",
            "health",
            "hospital",
            "medicine",
            "treatment",
            "clinic",
            "consultation",
            "diagnostic",
            "emergency",
            "vaccination",
            "checkup",
            "physician",
        ],
        Service::It => &[
            "computer",
            "technology",
            "software",
            "programming",
            "web",
            "development",
            "coding",
            "course",
            "training",
            "digital",
            "internet",
            "cybersecurity",
            "cloud",
            "database",
            "app",
        ],
        Service::Education => &[
            "school",
            "learning",
            "study",
            "scholarship",
            "tutoring",
            "library",
            "books",
            "academic",
            "literacy",
            "adult education",
        ],
        Service::Sports => &[
            "fitness",
            "gym",
            "football",
            "cricket",
            "basketball",
            "volleyball",
            "badminton",
            "exercise",
            "trainer",
            "field",
            "grounds",
        ],
        Service::Banquets => &[
            "hall",
            "wedding",
            "event",
            "venue",
            "party",
            "conference",
            "meeting",
            "booking",
            "reservation",
            "capacity",
            "guests",
        ],
        Service::Graveyard => &["burial", "funeral", "cemetery", "plot", "grave", "resting"],
        Service::Organization => &["organization", "community", "welfare", "contact", "about"],
    }
}

/// Trigger vocabulary for service auto-detection. Smaller than the
/// domain lists; the first service (in detection order) with a trigger
/// among the query tokens wins.
pub fn trigger_keywords(service: Service) -> &'static [&'static str] {
    match service {
        Service::Medical => &[
            "medical",
            "doctor",
            "health",
            "hospital",
            "clinic",
            "treatment",
            "diagnostic",
            "emergency",
        ],
        Service::It => &[
            "it",
            "computer",
            "technology",
            "software",
            "programming",
            "web",
            "course",
            "coding",
            "digital",
            "cyber",
        ],
        Service::Education => &[
            "education",
            "school",
            "learning",
            "scholarship",
            "tutoring",
            "library",
            "study",
        ],
        Service::Sports => &[
            "sports",
            "fitness",
            "gym",
            "football",
            "cricket",
            "basketball",
            "exercise",
        ],
        Service::Banquets => &[
            "banquet",
            "banquets",
            "hall",
            "wedding",
            "event",
            "venue",
            "booking",
            "party",
            "conference",
        ],
        Service::Graveyard => &["graveyard", "burial", "funeral", "cemetery"],
        Service::Organization => &[],
    }
}
