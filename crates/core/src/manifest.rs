//! Build manifest stored alongside the generated site.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the last build produced.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BuildManifest {
    /// Dataset the site was generated from.
    pub data_dir: PathBuf,
    /// Time the build finished.
    pub generated_at: Option<DateTime<Utc>>,
    /// Generated routes, sorted.
    pub routes: Vec<String>,
}

impl BuildManifest {
    /// Load a manifest from the given path, returning `None` if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let manifest = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;
        Ok(Some(manifest))
    }

    /// Persist the manifest, creating parent directories if needed.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create manifest directory {}", parent.display())
            })?;
        }

        let serialized =
            serde_json::to_string_pretty(self).context("failed to serialize build manifest")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write manifest {}", path.display()))
    }

    /// Routes present in `previous` but not in this build.
    pub fn stale_routes<'a>(&self, previous: &'a BuildManifest) -> Vec<&'a str> {
        previous
            .routes
            .iter()
            .filter(|route| self.routes.binary_search(route).is_err())
            .map(String::as_str)
            .collect()
    }
}

/// Helper to compute the manifest path inside an output directory.
pub fn manifest_path(out_dir: impl AsRef<Path>) -> PathBuf {
    out_dir.as_ref().join(".abysslab-manifest.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn persists_and_reports_stale_routes() -> Result<()> {
        let dir = tempdir()?;
        let path = manifest_path(dir.path());
        assert!(BuildManifest::load(&path)?.is_none());

        let previous = BuildManifest {
            data_dir: PathBuf::from("data"),
            generated_at: Some(Utc::now()),
            routes: vec!["/".to_string(), "/honkai3rd/weapons/old".to_string()],
        };
        previous.persist(&path)?;
        let loaded = BuildManifest::load(&path)?.expect("manifest written");
        assert_eq!(loaded, previous);

        let current = BuildManifest {
            routes: vec!["/".to_string(), "/honkai3rd".to_string()],
            ..BuildManifest::default()
        };
        assert_eq!(current.stale_routes(&loaded), vec!["/honkai3rd/weapons/old"]);
        Ok(())
    }
}
