//! Test utilities for handler testing.
//!
//! Every helper builds an [`AppState`] pointing at real files, because the
//! service reads the sightings document from disk on each request.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::ServiceConfig;
use crate::state::AppState;

/// Path to the checked-in sightings fixture.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/sightings.json"
);

/// The two-record document used by the end-to-end scenarios.
pub const SCENARIO_DOCUMENT: &str = r#"{"sightings":[{"id":1,"species":"Bald Eagle","habitat":"forest","date":"2024-05-01","verified":true,"location":"Park A"},{"id":2,"species":"Moose","habitat":"wetland","date":"2024-06-01","verified":false,"location":"Park B"}]}"#;

/// Get the absolute path to the sightings fixture.
pub fn fixture_data_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// State backed by the checked-in fixture.
pub fn fixture_state() -> AppState {
    AppState::new(ServiceConfig {
        data_path: fixture_data_path(),
        ..ServiceConfig::default()
    })
}

/// A scratch directory holding `data/sightings.json`, `public/` and `views/`.
///
/// The directory is deleted when the returned [`TempDir`] is dropped, so keep
/// it alive for the duration of the test.
pub struct Workspace {
    pub dir: TempDir,
    pub config: ServiceConfig,
}

impl Workspace {
    /// Create a workspace whose sightings document contains `document`.
    pub fn with_document(document: &str) -> Self {
        let workspace = Self::without_document();
        std::fs::write(&workspace.config.data_path, document)
            .unwrap_or_else(|e| panic!("failed to write test document: {}", e));
        workspace
    }

    /// Create a workspace with no sightings document at all.
    pub fn without_document() -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("failed to create tempdir: {}", e));
        let config = ServiceConfig {
            data_path: dir.path().join("data").join("sightings.json"),
            public_dir: dir.path().join("public"),
            views_dir: dir.path().join("views"),
            ..ServiceConfig::default()
        };
        for sub in ["data", "public", "views"] {
            std::fs::create_dir_all(dir.path().join(sub))
                .unwrap_or_else(|e| panic!("failed to create {}: {}", sub, e));
        }
        Self { dir, config }
    }

    /// Write a file relative to the public directory.
    pub fn with_public_file(self, relative: &str, contents: &str) -> Self {
        let path = self.config.public_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {:?}: {}", parent, e));
        }
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {:?}: {}", path, e));
        self
    }

    /// Write `views/index.html`.
    pub fn with_index(self, contents: &str) -> Self {
        std::fs::write(self.config.index_path(), contents)
            .unwrap_or_else(|e| panic!("failed to write index.html: {}", e));
        self
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_path_exists() {
        let path = fixture_data_path();
        assert!(path.exists(), "fixture not found at {:?}", path);
    }

    #[tokio::test]
    async fn test_fixture_state_loads() {
        let sightings = fixture_state().load_sightings().await.unwrap();
        assert!(!sightings.is_empty());
    }

    #[tokio::test]
    async fn test_workspace_with_document() {
        let workspace = Workspace::with_document(SCENARIO_DOCUMENT).with_index("<h1>hi</h1>");
        let sightings = workspace.state().load_sightings().await.unwrap();
        assert_eq!(sightings.len(), 2);
        assert!(workspace.config.index_path().exists());
    }
}
