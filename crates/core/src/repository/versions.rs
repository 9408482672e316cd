use std::{collections::HashMap, ops::Deref};

use crate::{
    error::{DataError, DataResult},
    models::{Record, Version},
};

use super::Repository;

/// Version repository that also knows how versions are linked.
pub struct VersionRepository<'a> {
    inner: Repository<'a, Version>,
    pinned: Option<&'a str>,
}

impl<'a> Deref for VersionRepository<'a> {
    type Target = Repository<'a, Version>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'a> VersionRepository<'a> {
    pub(super) fn new(inner: Repository<'a, Version>, pinned: Option<&'a str>) -> Self {
        Self { inner, pinned }
    }

    /// All versions from oldest to newest, following the link chain.
    pub fn ordered(&self, locale: Option<&str>) -> DataResult<Vec<Version>> {
        Ok(order_versions(self.inner.all(locale)?))
    }

    /// The pinned version if configured, the newest linked version otherwise.
    pub fn current(&self, locale: Option<&str>) -> DataResult<Version> {
        if let Some(pinned) = self.pinned {
            return self.inner.get_by_id(pinned, locale);
        }
        self.ordered(locale)?
            .pop()
            .ok_or_else(|| DataError::Schema {
                path: self
                    .inner
                    .store
                    .catalog_path(Version::KIND, locale)
                    .unwrap_or_default(),
                message: "catalog lists no versions".to_string(),
            })
    }
}

/// Order versions by their `previousVersion`/`nextVersion` links.
///
/// Chains start at versions without a known predecessor and are walked in
/// catalog order of their heads. Versions only reachable through a cycle are
/// appended in catalog order.
pub fn order_versions(versions: Vec<Version>) -> Vec<Version> {
    let index: HashMap<&str, usize> = versions
        .iter()
        .enumerate()
        .map(|(position, version)| (version.version.as_str(), position))
        .collect();

    let mut placed = vec![false; versions.len()];
    let mut order = Vec::with_capacity(versions.len());

    for head in 0..versions.len() {
        let is_head = versions[head]
            .previous_version
            .as_deref()
            .map_or(true, |previous| !index.contains_key(previous));
        if placed[head] || !is_head {
            continue;
        }

        let mut cursor = Some(head);
        while let Some(position) = cursor {
            if placed[position] {
                break;
            }
            placed[position] = true;
            order.push(position);
            cursor = versions[position]
                .next_version
                .as_deref()
                .and_then(|next| index.get(next).copied());
        }
    }

    order.extend((0..versions.len()).filter(|&position| !placed[position]));
    drop(index);

    let mut slots: Vec<Option<Version>> = versions.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect()
}
