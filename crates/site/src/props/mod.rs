//! Page data loaders.
//!
//! Each loader declares exactly which repository calls its page needs and
//! returns them as one flat, serialisable prop bag. Loaders never touch the
//! file store directly and never see templates.

mod battlesuit;
mod elysian;
mod stigmata;
mod version;
mod weapon;

use std::collections::{BTreeMap, HashMap};

use abysslab_core::{
    models::{CatalogItem, Elf},
    DataResult, Dataset, EntityKind,
};
use serde::Serialize;

pub use battlesuit::{load_battlesuit, BattlesuitProps};
pub use elysian::{
    load_elysian_index, load_er_battlesuit, load_er_sigils, load_er_supports, ElysianIndexProps,
    ErBattlesuitProps, ErSigilsProps, ErSupportsProps,
};
pub use stigmata::{load_stigma, load_stigmata_set, StigmaProps, StigmataSetProps};
pub use version::{load_game_index, load_version, GameIndexProps, VersionProps};
pub use weapon::{load_weapon, WeaponProps};

/// Props of a list page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogProps {
    #[serde(skip)]
    pub kind: EntityKind,
    pub items: Vec<CatalogItem>,
}

/// Catalog rows of `kind` for its list page.
pub fn load_catalog(
    dataset: &Dataset,
    kind: EntityKind,
    locale: Option<&str>,
) -> DataResult<CatalogProps> {
    let items = match kind {
        EntityKind::Battlesuit => dataset.battlesuits().list(locale)?,
        EntityKind::Weapon => dataset.weapons().list(locale)?,
        EntityKind::Stigma => dataset.stigmata().list(locale)?,
        EntityKind::StigmataSet => dataset.stigmata_sets().list(locale)?,
        EntityKind::Elf => dataset.elfs().list(locale)?,
        EntityKind::Version => dataset.versions().list(locale)?,
        EntityKind::ErBattlesuit => dataset.er_battlesuits().list(locale)?,
    };
    Ok(CatalogProps { kind, items })
}

#[derive(Debug, Clone, Serialize)]
pub struct ElfProps {
    pub elf: Elf,
}

pub fn load_elf(dataset: &Dataset, elf_id: &str, locale: Option<&str>) -> DataResult<ElfProps> {
    Ok(ElfProps {
        elf: dataset.elfs().get_by_id(elf_id, locale)?,
    })
}

/// Sorted copy of a resolved map, so serialised props are stable.
pub(crate) fn sorted<E>(map: HashMap<String, E>) -> BTreeMap<String, E> {
    map.into_iter().collect()
}

/// Resolved records in the order of `ids`, skipping unresolved ones.
pub(crate) fn in_order<E: Clone>(ids: &[String], map: &HashMap<String, E>) -> Vec<E> {
    ids.iter().filter_map(|id| map.get(id).cloned()).collect()
}
