//! On-disk layout of the dataset and YAML file access.
//!
//! ```text
//! data_dir/
//! ├── battlesuit-catalog.yaml
//! ├── battlesuits/<id>.yaml
//! ├── weapon-catalog.yaml
//! ├── weapons/<id>.yaml
//! ├── ...
//! ├── er-signets/<battlesuit-id>.yaml
//! ├── er-supports.yaml
//! └── er-sigils.yaml
//! ```
//!
//! Any file may have a locale variant next to it (`weapons/w1.ko-KR.yaml`),
//! which is read instead of the plain file when that locale is requested.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::trace;
use walkdir::WalkDir;

use crate::{
    config::SiteConfig,
    error::{DataError, DataResult},
};

const YAML_EXT: &str = "yaml";

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("invalid id regex"));

/// Kinds of entity that have a catalog file and a directory of detail files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Playable battlesuits.
    Battlesuit,
    /// Weapons.
    Weapon,
    /// Single stigma pieces.
    Stigma,
    /// Stigmata sets.
    StigmataSet,
    /// ELF companions.
    Elf,
    /// Game versions, keyed by version number.
    Version,
    /// Elysian Realm battlesuit entries.
    ErBattlesuit,
}

impl EntityKind {
    /// Every kind, in the order the checker reports them.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Battlesuit,
        EntityKind::Weapon,
        EntityKind::Stigma,
        EntityKind::StigmataSet,
        EntityKind::Elf,
        EntityKind::Version,
        EntityKind::ErBattlesuit,
    ];

    /// File stem of the catalog.
    pub fn catalog_stem(self) -> &'static str {
        match self {
            EntityKind::Battlesuit => "battlesuit-catalog",
            EntityKind::Weapon => "weapon-catalog",
            EntityKind::Stigma => "stigmata-catalog",
            EntityKind::StigmataSet => "stigmata-set-catalog",
            EntityKind::Elf => "elf-catalog",
            EntityKind::Version => "version-catalog",
            EntityKind::ErBattlesuit => "er-battlesuits-catalog",
        }
    }

    /// Directory holding one detail file per id.
    pub fn detail_dir(self) -> &'static str {
        match self {
            EntityKind::Battlesuit => "battlesuits",
            EntityKind::Weapon => "weapons",
            EntityKind::Stigma => "stigmata",
            EntityKind::StigmataSet => "stigmata-sets",
            EntityKind::Elf => "elfs",
            EntityKind::Version => "versions",
            EntityKind::ErBattlesuit => "er-battlesuits",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Battlesuit => "battlesuit",
            EntityKind::Weapon => "weapon",
            EntityKind::Stigma => "stigma",
            EntityKind::StigmataSet => "stigmata set",
            EntityKind::Elf => "elf",
            EntityKind::Version => "version",
            EntityKind::ErBattlesuit => "elysian realm battlesuit",
        };
        f.write_str(label)
    }
}

/// Elysian Realm tables stored as single files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// `er-supports.yaml`.
    ErSupports,
    /// `er-sigils.yaml`.
    ErSigils,
}

impl Table {
    fn stem(self) -> &'static str {
        match self {
            Table::ErSupports => "er-supports",
            Table::ErSigils => "er-sigils",
        }
    }
}

/// Resolves dataset paths and decodes YAML files. Nothing is cached.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at a dataset directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the configured data directory.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Dataset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Catalog file of `kind`, preferring the locale variant when present.
    pub fn catalog_path(&self, kind: EntityKind, locale: Option<&str>) -> DataResult<PathBuf> {
        localized(&self.root, kind.catalog_stem(), locale)
    }

    /// Detail file of `id`, preferring the locale variant when present.
    pub fn detail_path(
        &self,
        kind: EntityKind,
        id: &str,
        locale: Option<&str>,
    ) -> DataResult<PathBuf> {
        validate_id(id)?;
        localized(&self.root.join(kind.detail_dir()), id, locale)
    }

    /// Elysian Realm signet list of one battlesuit.
    pub fn signets_path(&self, battlesuit_id: &str, locale: Option<&str>) -> DataResult<PathBuf> {
        validate_id(battlesuit_id)?;
        localized(&self.root.join("er-signets"), battlesuit_id, locale)
    }

    /// Single-file table.
    pub fn table_path(&self, table: Table, locale: Option<&str>) -> DataResult<PathBuf> {
        localized(&self.root, table.stem(), locale)
    }

    /// Read and decode a YAML file.
    pub fn read_yaml<T: DeserializeOwned>(&self, path: &Path) -> DataResult<T> {
        trace!("reading {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DataError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DataError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        serde_yaml::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize `value` as YAML, creating parent directories if needed.
    pub fn write_yaml<T: Serialize>(&self, path: &Path, value: &T) -> DataResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| DataError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let serialized = serde_yaml::to_string(value).map_err(|source| DataError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, serialized).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Ids of the detail files on disk for `kind`, sorted.
    ///
    /// Locale variants named after one of `locales` are not reported as ids.
    pub fn detail_ids(&self, kind: EntityKind, locales: &[String]) -> DataResult<Vec<String>> {
        let dir = self.root.join(kind.detail_dir());
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| DataError::Io {
                path: dir.clone(),
                source: err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed")),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(YAML_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let is_variant = locales
                .iter()
                .any(|locale| stem.ends_with(&format!(".{locale}")));
            if !is_variant {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}

/// Reject ids that could escape their directory or are not file-name tokens.
pub fn validate_id(id: &str) -> DataResult<()> {
    if ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(DataError::InvalidId(id.to_string()))
    }
}

fn localized(dir: &Path, stem: &str, locale: Option<&str>) -> DataResult<PathBuf> {
    if let Some(locale) = locale {
        validate_id(locale)?;
        let variant = dir.join(format!("{stem}.{locale}.{YAML_EXT}"));
        if variant.is_file() {
            return Ok(variant);
        }
    }
    Ok(dir.join(format!("{stem}.{YAML_EXT}")))
}
