use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the content JSON files
    pub content_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Retrieval scoring constants
    pub scoring: ScoringConfig,
}

/// Empirically tuned retrieval constants. Configurable rather than
/// hardcoded; the defaults are the shipped behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bonus added per query token found in the chunk's service
    /// domain vocabulary.
    pub service_boost: f32,
    /// Minimum score for a chunk to qualify as a result.
    pub min_score: f32,
    /// Default result cap per query.
    pub top_k: usize,
    /// IDF weight assumed for query tokens never seen in the corpus.
    pub neutral_idf: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            service_boost: 2.0,
            min_score: 0.5,
            top_k: 5,
            neutral_idf: 1.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            bind_addr: "127.0.0.1:9000".to_string(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("ORG_SEARCH_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("ORG_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("ORG_SEARCH_SERVICE_BOOST") {
            if let Ok(v) = val.parse() {
                config.scoring.service_boost = v;
            }
        }
        if let Ok(val) = std::env::var("ORG_SEARCH_MIN_SCORE") {
            if let Ok(v) = val.parse() {
                config.scoring.min_score = v;
            }
        }
        if let Ok(val) = std::env::var("ORG_SEARCH_TOP_K") {
            if let Ok(v) = val.parse() {
                config.scoring.top_k = v;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_constants() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.service_boost, 2.0);
        assert_eq!(scoring.min_score, 0.5);
        assert_eq!(scoring.top_k, 5);
        assert_eq!(scoring.neutral_idf, 1.0);
    }
}
