//! Whole-dataset consistency check.
//!
//! Page builds only fail on what a page strictly needs. The checker loads every
//! record and reports everything else the pages would silently skip: dangling
//! references, orphan detail files and broken version links.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    models::Record,
    repository::{Dataset, Repository},
    store::EntityKind,
};

/// Problem found in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Kind of the offending record.
    pub kind: EntityKind,
    /// Id of the offending record, or a `<catalog>`-style placeholder.
    pub id: String,
    /// What is wrong.
    pub message: String,
}

impl Finding {
    fn new(kind: EntityKind, id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Outcome of [`check_dataset`].
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Number of detail records that loaded.
    pub loaded: usize,
    /// Records that would fail a page build.
    pub errors: Vec<Finding>,
    /// References and files that pages would skip.
    pub warnings: Vec<Finding>,
}

impl CheckReport {
    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

struct Reference {
    from_kind: EntityKind,
    from_id: String,
    to_kind: EntityKind,
    to_id: String,
}

#[derive(Default)]
struct Scan {
    report: CheckReport,
    catalog_ids: HashMap<EntityKind, HashSet<String>>,
    references: Vec<Reference>,
}

impl Scan {
    fn kind<E: Record>(&mut self, repo: Repository<'_, E>, dataset: &Dataset, locales: &[String]) {
        let catalog = match repo.list(None) {
            Ok(catalog) => catalog,
            Err(err) => {
                self.report
                    .errors
                    .push(Finding::new(E::KIND, "<catalog>", err.to_string()));
                return;
            }
        };

        let mut ids = HashSet::new();
        for item in &catalog {
            if !ids.insert(item.id.clone()) {
                self.report.errors.push(Finding::new(
                    E::KIND,
                    item.id.clone(),
                    "listed twice in the catalog",
                ));
                continue;
            }
            let mut locale_variants = vec![None];
            locale_variants.extend(locales.iter().map(|locale| Some(locale.as_str())));
            for locale in locale_variants {
                match repo.get_by_id(&item.id, locale) {
                    Ok(record) => {
                        self.report.loaded += 1;
                        if locale.is_none() {
                            self.references
                                .extend(record.references().into_iter().map(|(to_kind, to_id)| {
                                    Reference {
                                        from_kind: E::KIND,
                                        from_id: item.id.clone(),
                                        to_kind,
                                        to_id: to_id.to_string(),
                                    }
                                }));
                        }
                    }
                    Err(err) => {
                        let message = match locale {
                            Some(locale) => format!("[{locale}] {err}"),
                            None => err.to_string(),
                        };
                        self.report
                            .errors
                            .push(Finding::new(E::KIND, item.id.clone(), message));
                    }
                }
            }
        }

        match dataset.store().detail_ids(E::KIND, locales) {
            Ok(on_disk) => {
                for id in on_disk.into_iter().filter(|id| !ids.contains(id)) {
                    self.report.warnings.push(Finding::new(
                        E::KIND,
                        id,
                        "detail file has no catalog entry",
                    ));
                }
            }
            Err(err) => self
                .report
                .errors
                .push(Finding::new(E::KIND, "<directory>", err.to_string())),
        }

        debug!("{}: {} catalog entries", E::KIND, ids.len());
        self.catalog_ids.insert(E::KIND, ids);
    }

    fn dangling_references(&mut self) {
        for reference in &self.references {
            let known = self
                .catalog_ids
                .get(&reference.to_kind)
                .is_some_and(|ids| ids.contains(&reference.to_id));
            if !known {
                self.report.warnings.push(Finding::new(
                    reference.from_kind,
                    reference.from_id.clone(),
                    format!("references unknown {} '{}'", reference.to_kind, reference.to_id),
                ));
            }
        }
    }

    fn version_links(&mut self, dataset: &Dataset) {
        let Ok(versions) = dataset.versions().all(None) else {
            return;
        };
        let by_id: HashMap<&str, _> = versions
            .iter()
            .map(|version| (version.version.as_str(), version))
            .collect();
        for version in &versions {
            if let Some(next) = version.next_version.as_deref().and_then(|id| by_id.get(id)) {
                if next.previous_version.as_deref() != Some(version.version.as_str()) {
                    self.report.warnings.push(Finding::new(
                        EntityKind::Version,
                        version.version.clone(),
                        format!(
                            "next version {} does not link back as previous",
                            next.version
                        ),
                    ));
                }
            }
        }
    }

    fn signets(&mut self, dataset: &Dataset) {
        let Ok(er_battlesuits) = dataset.er_battlesuits().all(None) else {
            return;
        };
        for er in er_battlesuits {
            match dataset.elysian().signets_for(&er.id, None) {
                Ok(signets) => {
                    let known: HashSet<_> = signets.iter().map(|signet| signet.id.as_str()).collect();
                    for missing in er
                        .recommended_signets
                        .iter()
                        .filter(|id| !known.contains(id.as_str()))
                    {
                        self.report.warnings.push(Finding::new(
                            EntityKind::ErBattlesuit,
                            er.id.clone(),
                            format!("recommends unknown signet '{missing}'"),
                        ));
                    }
                }
                Err(err) => self.report.errors.push(Finding::new(
                    EntityKind::ErBattlesuit,
                    er.id.clone(),
                    err.to_string(),
                )),
            }
        }
    }
}

/// Load the whole dataset, including each locale variant, and collect findings.
pub fn check_dataset(dataset: &Dataset, locales: &[String]) -> CheckReport {
    let mut scan = Scan::default();
    scan.kind(dataset.battlesuits(), dataset, locales);
    scan.kind(dataset.weapons(), dataset, locales);
    scan.kind(dataset.stigmata(), dataset, locales);
    scan.kind(dataset.stigmata_sets(), dataset, locales);
    scan.kind(dataset.elfs(), dataset, locales);
    scan.kind(*dataset.versions(), dataset, locales);
    scan.kind(dataset.er_battlesuits(), dataset, locales);
    scan.dangling_references();
    scan.version_links(dataset);
    scan.signets(dataset);
    scan.report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scaffold, store::FileStore};
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sample_dataset_is_clean() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let report = check_dataset(&Dataset::new(store), &[]);
        assert!(report.is_clean(), "{report:?}");
        assert!(report.loaded > 0);
        Ok(())
    }

    #[test]
    fn reports_dangling_references_and_orphans() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        fs::write(
            dir.path().join("weapons/thunder-edge.yaml"),
            "id: thunder-edge\nname: Thunder Edge\ncategory: katana\nrarity: 4\natk: 450\ncrt: 40\nbattlesuits:\n  - id: ghost\n",
        )?;
        fs::write(
            dir.path().join("elfs/stray.yaml"),
            "id: stray\nname: Stray\nrarity: 1\n",
        )?;

        let report = check_dataset(&Dataset::new(store), &[]);
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert!(report.warnings.contains(&Finding::new(
            EntityKind::Weapon,
            "thunder-edge",
            "references unknown battlesuit 'ghost'"
        )));
        assert!(report.warnings.contains(&Finding::new(
            EntityKind::Elf,
            "stray",
            "detail file has no catalog entry"
        )));
        Ok(())
    }

    #[test]
    fn broken_detail_files_are_errors() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        fs::remove_file(dir.path().join("elfs/bella.yaml"))?;

        let report = check_dataset(&Dataset::new(store), &[]);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, EntityKind::Elf);
        assert_eq!(report.errors[0].id, "bella");
        Ok(())
    }
}
