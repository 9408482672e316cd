use crate::{
    error::DataResult,
    models::{ErSigil, ErSignet, ErSupportBattlesuit},
    store::{FileStore, Table},
};

/// Elysian Realm data that is not catalog-shaped.
pub struct ElysianTables<'a> {
    store: &'a FileStore,
}

impl<'a> ElysianTables<'a> {
    pub(super) fn new(store: &'a FileStore) -> Self {
        Self { store }
    }

    /// Signets available to an Elysian Realm battlesuit; none when no file exists.
    pub fn signets_for(
        &self,
        er_battlesuit_id: &str,
        locale: Option<&str>,
    ) -> DataResult<Vec<ErSignet>> {
        let path = self.store.signets_path(er_battlesuit_id, locale)?;
        match self.store.read_yaml::<Option<Vec<ErSignet>>>(&path) {
            Ok(signets) => Ok(signets.unwrap_or_default()),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Rows of `er-supports.yaml`; the file must exist.
    pub fn supports(&self, locale: Option<&str>) -> DataResult<Vec<ErSupportBattlesuit>> {
        let path = self.store.table_path(Table::ErSupports, locale)?;
        Ok(self
            .store
            .read_yaml::<Option<Vec<_>>>(&path)?
            .unwrap_or_default())
    }

    /// Rows of `er-sigils.yaml`; the file must exist.
    pub fn sigils(&self, locale: Option<&str>) -> DataResult<Vec<ErSigil>> {
        let path = self.store.table_path(Table::ErSigils, locale)?;
        Ok(self
            .store
            .read_yaml::<Option<Vec<_>>>(&path)?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{repository::Dataset, scaffold, store::FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn reads_signets_supports_and_sigils() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);
        let tables = dataset.elysian();

        let er = dataset.er_battlesuits().get_by_id("er-hofs", None)?;
        let signets = tables.signets_for(&er.id, None)?;
        assert!(!signets.is_empty());
        assert!(tables.signets_for("nobody", None)?.is_empty());
        assert_eq!(tables.supports(None)?.len(), 1);
        assert_eq!(tables.sigils(None)?.len(), 1);
        Ok(())
    }
}
