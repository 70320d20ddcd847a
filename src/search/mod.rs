//! The retrieval core: tokenization, content indexing, and query
//! scoring. No external search infrastructure — the whole index is a
//! flat chunk collection plus an IDF table held in memory.

pub mod engine;
pub mod indexer;
pub mod keywords;
