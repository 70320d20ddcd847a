use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::ContentTree;

/// Loads website content from a directory of JSON files.
///
/// A missing or malformed file is data absence, not a failure: the
/// affected section loads as empty and indexing proceeds with whatever
/// content remains.
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load every content source. Always succeeds.
    pub fn load_all(&self) -> ContentTree {
        ContentTree {
            services: self.load_json("services.json"),
            it_service: self.load_json("it-service.json"),
            site_config: self.load_json("site-config.json"),
        }
    }

    fn load_json<T: DeserializeOwned + Default>(&self, filename: &str) -> T {
        let path = self.content_dir.join(filename);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return T::default(),
        };
        match serde_json::from_str(&data) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Skipping malformed content file {}: {e}", path.display());
                T::default()
            }
        }
    }
}
