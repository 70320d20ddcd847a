use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::config::Config;
use crate::content::loader::ContentLoader;
use crate::models::Service;
use crate::search::engine::QueryEngine;

/// Shared application state.
///
/// Queries only ever see a fully built index: reload constructs the
/// replacement engine outside the lock and swaps it in whole, so the
/// chunk collection and its IDF table always change together.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    index: Arc<RwLock<IndexState>>,
}

struct IndexState {
    engine: QueryEngine,
    indexed_at: DateTime<Utc>,
}

impl AppState {
    /// Load content and build the index once at startup.
    pub fn new(config: Config) -> Self {
        let tree = ContentLoader::new(&config.content_dir).load_all();
        let engine = QueryEngine::build(&tree, config.scoring.clone());
        if engine.chunk_count() == 0 {
            tracing::warn!(
                "No content indexed from {} - queries will find nothing",
                config.content_dir.display()
            );
        }
        Self {
            config,
            index: Arc::new(RwLock::new(IndexState {
                engine,
                indexed_at: Utc::now(),
            })),
        }
    }

    /// Run `f` against the current index snapshot.
    pub fn with_engine<R>(&self, f: impl FnOnce(&QueryEngine) -> R) -> R {
        f(&self.index.read().engine)
    }

    pub fn indexed_at(&self) -> DateTime<Utc> {
        self.index.read().indexed_at
    }

    /// Rebuild the index from the content sources and swap it in.
    pub fn reload(&self) -> (usize, Vec<Service>) {
        let tree = ContentLoader::new(&self.config.content_dir).load_all();
        let engine = QueryEngine::build(&tree, self.config.scoring.clone());

        let mut index = self.index.write();
        index.engine = engine;
        index.indexed_at = Utc::now();
        (index.engine.chunk_count(), index.engine.available_services())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            content_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_with_empty_dir_builds_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config_for(dir.path()));
        assert_eq!(state.with_engine(|e| e.chunk_count()), 0);
    }

    #[test]
    fn test_reload_picks_up_new_content() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config_for(dir.path()));
        assert_eq!(state.with_engine(|e| e.chunk_count()), 0);

        std::fs::write(
            dir.path().join("services.json"),
            r#"{"sports": {"description": "Open daily.", "facilities": [{"title": "Gym", "description": "Weights and cardio."}]}}"#,
        )
        .unwrap();

        let (total, services) = state.reload();
        assert_eq!(total, 2);
        assert_eq!(services, vec![Service::Sports]);
        assert_eq!(state.with_engine(|e| e.chunk_count()), 2);
    }
}
