//! Axum HTTP handlers.

pub mod rag;
