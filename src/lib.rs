//! # org-search
//!
//! Retrieval backend for a community organization's information
//! chatbot. It indexes the site's static JSON content into keyword
//! chunks and ranks them against free-text questions without any
//! external search infrastructure — no inverted-index database, no
//! vector store, no hosted embeddings.
//!
//! ## Pipeline
//!
//! ```text
//! content/*.json ──▶ ContentLoader ──▶ ContentIndexer ──▶ QueryEngine
//!                    (normalize)       (chunks +          (IDF weights,
//!                                       keyword sets)      scoring, top-k)
//! ```
//!
//! The index is built once at startup and held read-only behind shared
//! state; an explicit reload endpoint rebuilds it wholesale. Results
//! always carry source attribution, and an empty result is an explicit
//! `found: false` — downstream consumers must never substitute
//! fabricated content.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server, content
//!   directory, and scoring constants
//! - [`models`] - Shared data types: `Service`, `ContentChunk`, request/response types
//! - [`content`] - Content schema and the JSON loader (missing sections load as empty)
//! - [`search`] - The retrieval core: tokenization, indexing, IDF scoring, ranking
//! - [`api`] - Axum HTTP handlers for query, service info, health, and reload
//! - [`state`] - Shared application state with the guarded index reload

pub mod api;
pub mod config;
pub mod content;
pub mod models;
pub mod search;
pub mod state;
