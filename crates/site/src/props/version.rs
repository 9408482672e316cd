use abysslab_core::{
    models::{Battlesuit, StigmataSet, Version, Weapon},
    DataResult, Dataset,
};
use serde::Serialize;

use super::in_order;

/// A version with the content it introduced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionProps {
    pub version: Version,
    pub new_battlesuits: Vec<Battlesuit>,
    pub new_weapons: Vec<Weapon>,
    pub new_stigmata_sets: Vec<StigmataSet>,
}

/// Game landing page: the current version plus every version, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameIndexProps {
    pub current: VersionProps,
    pub versions: Vec<Version>,
}

pub fn load_version(dataset: &Dataset, version: &str, locale: Option<&str>) -> DataResult<VersionProps> {
    let version = dataset.versions().get_by_id(version, locale)?;
    resolve(dataset, version, locale)
}

pub fn load_game_index(dataset: &Dataset, locale: Option<&str>) -> DataResult<GameIndexProps> {
    let versions = dataset.versions();
    let current = resolve(dataset, versions.current(locale)?, locale)?;
    let mut all = versions.ordered(locale)?;
    all.reverse();
    Ok(GameIndexProps {
        current,
        versions: all,
    })
}

fn resolve(dataset: &Dataset, version: Version, locale: Option<&str>) -> DataResult<VersionProps> {
    let battlesuits = dataset
        .battlesuits()
        .get_map_by_ids(&version.new_battlesuits, locale)?;
    let weapons = dataset
        .weapons()
        .get_map_by_ids(&version.new_weapons, locale)?;
    let sets = dataset
        .stigmata_sets()
        .get_map_by_ids(&version.new_stigmata_sets, locale)?;

    Ok(VersionProps {
        new_battlesuits: in_order(&version.new_battlesuits, &battlesuits),
        new_weapons: in_order(&version.new_weapons, &weapons),
        new_stigmata_sets: in_order(&version.new_stigmata_sets, &sets),
        version,
    })
}
