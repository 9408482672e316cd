//! Entity repositories built on the [`FileStore`].
//!
//! Lookups come in three strengths:
//! - [`Repository::get_by_id`] fails when the detail file is absent; pages
//!   that must resolve to something use it.
//! - [`Repository::find_by_id`] turns an absent file into `None`.
//! - [`Repository::get_map_by_ids`] resolves a list of references and leaves
//!   unknown ids out of the returned map.
//!
//! Decoding errors are never swallowed by any of them.

mod elysian;
mod versions;

use std::{
    collections::{HashMap, HashSet},
    marker::PhantomData,
};

use tracing::{debug, warn};

use crate::{
    config::SiteConfig,
    error::{DataError, DataResult},
    models::{
        Battlesuit, CatalogItem, Elf, ErBattlesuit, Record, Stigma, StigmataSet, Version, Weapon,
    },
    store::{validate_id, FileStore},
};

pub use elysian::ElysianTables;
pub use versions::{order_versions, VersionRepository};

/// Typed access to one entity kind.
pub struct Repository<'a, E> {
    store: &'a FileStore,
    _record: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Repository<'_, E> {}

impl<'a, E: Record> Repository<'a, E> {
    /// Repository reading from `store`.
    pub fn new(store: &'a FileStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Catalog rows in file order.
    ///
    /// Thumbnail keys end up in asset URLs, so a row whose key is not a valid
    /// id fails the whole catalog.
    pub fn list(&self, locale: Option<&str>) -> DataResult<Vec<CatalogItem>> {
        let path = self.store.catalog_path(E::KIND, locale)?;
        let rows: Vec<CatalogItem> = self
            .store
            .read_yaml::<Option<Vec<CatalogItem>>>(&path)?
            .unwrap_or_default();
        if let Some(row) = rows.iter().find(|row| validate_id(row.thumbnail_key()).is_err()) {
            return Err(DataError::Schema {
                path,
                message: format!(
                    "thumbnail '{}' of '{}' is not a valid asset key",
                    row.thumbnail_key(),
                    row.id
                ),
            });
        }
        Ok(rows)
    }

    /// Detail record of `id`; an absent file is an error.
    pub fn get_by_id(&self, id: &str, locale: Option<&str>) -> DataResult<E> {
        let path = self.store.detail_path(E::KIND, id, locale)?;
        let record: E = self.store.read_yaml(&path)?;
        if record.id() != id {
            return Err(DataError::Schema {
                path,
                message: format!("expected id '{id}', found '{}'", record.id()),
            });
        }
        record
            .validate()
            .map_err(|message| DataError::Schema { path, message })?;
        Ok(record)
    }

    /// Detail record of `id`, or `None` when no such file exists.
    pub fn find_by_id(&self, id: &str, locale: Option<&str>) -> DataResult<Option<E>> {
        match self.get_by_id(id, locale) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Records for every distinct id in `ids` that exists; missing ids are omitted.
    pub fn get_map_by_ids<I, S>(&self, ids: I, locale: Option<&str>) -> DataResult<HashMap<String, E>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut records = HashMap::new();
        for id in ids {
            let id = id.as_ref();
            if !seen.insert(id.to_string()) {
                continue;
            }
            match self.find_by_id(id, locale) {
                Ok(Some(record)) => {
                    records.insert(id.to_string(), record);
                }
                Ok(None) => debug!("{} '{}' not found, leaving it unresolved", E::KIND, id),
                Err(DataError::InvalidId(id)) => {
                    warn!("{} reference '{}' is not a valid id", E::KIND, id)
                }
                Err(err) => return Err(err),
            }
        }
        Ok(records)
    }

    /// Every record named by the catalog, in catalog order.
    pub fn all(&self, locale: Option<&str>) -> DataResult<Vec<E>> {
        self.list(locale)?
            .iter()
            .map(|item| self.get_by_id(&item.id, locale))
            .collect()
    }
}

/// Entry point to every repository of one dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    store: FileStore,
    current_version: Option<String>,
}

impl Dataset {
    /// Dataset over `store` with no pinned current version.
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            current_version: None,
        }
    }

    /// Dataset at the configured data directory, honouring a pinned current version.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(FileStore::from_config(config)).with_current_version(config.current_version.clone())
    }

    /// Pin the version treated as current instead of the newest one.
    pub fn with_current_version(mut self, version: Option<String>) -> Self {
        self.current_version = version;
        self
    }

    /// Underlying file store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Battlesuit records.
    pub fn battlesuits(&self) -> Repository<'_, Battlesuit> {
        Repository::new(&self.store)
    }

    /// Weapon records.
    pub fn weapons(&self) -> Repository<'_, Weapon> {
        Repository::new(&self.store)
    }

    /// Single stigma pieces.
    pub fn stigmata(&self) -> Repository<'_, Stigma> {
        Repository::new(&self.store)
    }

    /// Stigmata sets.
    pub fn stigmata_sets(&self) -> Repository<'_, StigmataSet> {
        Repository::new(&self.store)
    }

    /// ELF records.
    pub fn elfs(&self) -> Repository<'_, Elf> {
        Repository::new(&self.store)
    }

    /// Elysian Realm battlesuit entries.
    pub fn er_battlesuits(&self) -> Repository<'_, ErBattlesuit> {
        Repository::new(&self.store)
    }

    /// Versions, with chain ordering and the current version.
    pub fn versions(&self) -> VersionRepository<'_> {
        VersionRepository::new(Repository::<Version>::new(&self.store), self.current_version.as_deref())
    }

    /// Signet, support and sigil tables.
    pub fn elysian(&self) -> ElysianTables<'_> {
        ElysianTables::new(&self.store)
    }
}
