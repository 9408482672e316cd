use std::collections::BTreeMap;

use abysslab_core::{
    models::{Battlesuit, Weapon},
    DataResult, Dataset,
};
use serde::Serialize;

use super::sorted;

/// Weapon detail page props.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponProps {
    pub weapon: Weapon,
    /// Covers only `weapon.battlesuits`.
    pub battlesuit_map: BTreeMap<String, Battlesuit>,
    /// Covers `priWeapon` and `originalWeapons`.
    pub weapon_map: BTreeMap<String, Weapon>,
}

/// Fails when the weapon itself is unknown; unknown references are left out of the maps.
pub fn load_weapon(
    dataset: &Dataset,
    weapon_id: &str,
    locale: Option<&str>,
) -> DataResult<WeaponProps> {
    let weapon = dataset.weapons().get_by_id(weapon_id, locale)?;
    let battlesuit_map = dataset
        .battlesuits()
        .get_map_by_ids(weapon.battlesuit_ids(), locale)?;
    let weapon_map = dataset
        .weapons()
        .get_map_by_ids(weapon.related_weapon_ids(), locale)?;

    Ok(WeaponProps {
        battlesuit_map: sorted(battlesuit_map),
        weapon_map: sorted(weapon_map),
        weapon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abysslab_core::{scaffold, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn maps_cover_only_direct_references() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let props = load_weapon(&dataset, "ember-blaze", None)?;
        assert_eq!(props.weapon.id, "ember-blaze");
        assert_eq!(
            props.battlesuit_map.keys().collect::<Vec<_>>(),
            vec!["hofs"]
        );
        assert_eq!(
            props.weapon_map.keys().collect::<Vec<_>>(),
            vec!["ember-blaze-pri"]
        );
        Ok(())
    }

    #[test]
    fn unknown_weapon_fails_the_page() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let err = load_weapon(&dataset, "nope", None).unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }
}
