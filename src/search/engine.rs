//! Query scoring over the indexed chunk collection.
//!
//! A chunk's score is the IDF-weighted sum of query tokens found in its
//! keyword set, plus a fixed boost per query token belonging to the
//! chunk's service vocabulary. The boost alone never qualifies a chunk:
//! at least one token must genuinely match its keywords.

use std::collections::HashMap;

use crate::config::ScoringConfig;
use crate::content::ContentTree;
use crate::models::{ContentChunk, ContentResult, QueryResult, RagQueryResponse, Service};

use super::indexer::ContentIndexer;
use super::keywords::{domain_keywords, tokenize, trigger_keywords};

/// The built index: chunk collection plus corpus IDF table. Immutable
/// after construction; a rebuild produces a whole new engine.
pub struct QueryEngine {
    chunks: Vec<ContentChunk>,
    idf: HashMap<String, f32>,
    scoring: ScoringConfig,
}

impl QueryEngine {
    /// Index the content tree and compute IDF weights over it.
    pub fn build(tree: &ContentTree, scoring: ScoringConfig) -> Self {
        let chunks = ContentIndexer::index_all(tree);
        let idf = compute_idf(&chunks);
        tracing::info!("Indexed {} content chunks", chunks.len());
        Self {
            chunks,
            idf,
            scoring,
        }
    }

    /// Rank chunks against a free-text query.
    ///
    /// Without an explicit `service` filter the query is scanned for
    /// trigger words and, on a hit, restricted to the detected service.
    /// No qualifying chunk yields an empty list, never an error.
    pub fn query(
        &self,
        query: &str,
        service: Option<Service>,
        top_k: usize,
        min_score: f32,
    ) -> Vec<QueryResult> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() || self.chunks.is_empty() {
            return Vec::new();
        }

        let service = service.or_else(|| detect_service(&query_tokens));

        let mut results: Vec<QueryResult> = self
            .chunks
            .iter()
            .filter(|c| service.map_or(true, |s| c.service == s))
            .filter_map(|chunk| {
                let (score, matched) = self.score_chunk(&query_tokens, chunk);
                (score >= min_score && !matched.is_empty()).then(|| QueryResult {
                    chunk: chunk.clone(),
                    score,
                    matched_keywords: matched,
                })
            })
            .collect();

        // Stable sort: ties keep original chunk order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_k);
        results
    }

    fn score_chunk(&self, query_tokens: &[String], chunk: &ContentChunk) -> (f32, Vec<String>) {
        let mut matched = Vec::new();
        let mut score = 0.0f32;

        for token in query_tokens {
            if chunk.keywords.contains(token) {
                matched.push(token.clone());
                score += self
                    .idf
                    .get(token)
                    .copied()
                    .unwrap_or(self.scoring.neutral_idf);
            }
        }

        let domain = domain_keywords(chunk.service);
        for token in query_tokens {
            if domain.contains(&token.as_str()) {
                score += self.scoring.service_boost;
            }
        }

        (score, matched)
    }

    /// Full dump of a service's chunks, unscored.
    pub fn get_service_info(&self, service: Service) -> Vec<ContentChunk> {
        self.chunks
            .iter()
            .filter(|c| c.service == service)
            .cloned()
            .collect()
    }

    /// Services with indexed content, in first-appearance order.
    pub fn available_services(&self) -> Vec<Service> {
        let mut services = Vec::new();
        for chunk in &self.chunks {
            if !services.contains(&chunk.service) {
                services.push(chunk.service);
            }
        }
        services
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// `idf(k) = ln(N / df(k))` over the whole chunk collection.
fn compute_idf(chunks: &[ContentChunk]) -> HashMap<String, f32> {
    let doc_count = chunks.len();
    if doc_count == 0 {
        return HashMap::new();
    }

    let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
    for chunk in chunks {
        for keyword in &chunk.keywords {
            *doc_frequency.entry(keyword.as_str()).or_insert(0) += 1;
        }
    }

    doc_frequency
        .into_iter()
        .map(|(keyword, df)| (keyword.to_string(), (doc_count as f32 / df as f32).ln()))
        .collect()
}

/// First service whose trigger vocabulary contains any query token, in
/// fixed detection order.
fn detect_service(query_tokens: &[String]) -> Option<Service> {
    Service::DETECTABLE.into_iter().find(|service| {
        trigger_keywords(*service)
            .iter()
            .any(|trigger| query_tokens.iter().any(|token| token == trigger))
    })
}

/// Format ranked results into the response payload downstream consumers
/// depend on. Empty results become an explicit `found: false` — callers
/// must surface "no information found" rather than fabricate an answer.
pub fn format_response(results: &[QueryResult]) -> RagQueryResponse {
    if results.is_empty() {
        return RagQueryResponse {
            found: false,
            message: "No relevant information found in the website content.".to_string(),
            results: Vec::new(),
            sources: Vec::new(),
        };
    }

    let mut formatted = Vec::with_capacity(results.len());
    let mut sources: Vec<String> = Vec::new();

    for result in results {
        let chunk = &result.chunk;
        formatted.push(ContentResult {
            service: chunk.service.as_str().to_string(),
            category: chunk.category.clone(),
            title: chunk.title.clone(),
            content: chunk.content.clone(),
            relevance_score: (result.score * 100.0).round() / 100.0,
            source: chunk.source.clone(),
        });
        if !sources.contains(&chunk.source) {
            sources.push(chunk.source.clone());
        }
    }

    RagQueryResponse {
        found: true,
        message: format!("Found {} relevant result(s).", results.len()),
        results: formatted,
        sources,
    }
}
