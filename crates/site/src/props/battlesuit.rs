use std::collections::BTreeMap;

use abysslab_core::{
    models::{Battlesuit, Stigma, Weapon},
    DataResult, Dataset,
};
use serde::Serialize;

use super::sorted;

/// Battlesuit detail page props with its recommended gear resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlesuitProps {
    pub battlesuit: Battlesuit,
    pub weapon_map: BTreeMap<String, Weapon>,
    pub stigma_map: BTreeMap<String, Stigma>,
}

pub fn load_battlesuit(
    dataset: &Dataset,
    battlesuit_id: &str,
    locale: Option<&str>,
) -> DataResult<BattlesuitProps> {
    let battlesuit = dataset.battlesuits().get_by_id(battlesuit_id, locale)?;
    let weapon_map = dataset
        .weapons()
        .get_map_by_ids(battlesuit.equipment_weapon_ids(), locale)?;
    let stigma_map = dataset
        .stigmata()
        .get_map_by_ids(battlesuit.equipment_stigma_ids(), locale)?;

    Ok(BattlesuitProps {
        weapon_map: sorted(weapon_map),
        stigma_map: sorted(stigma_map),
        battlesuit,
    })
}
