use serde::{Deserialize, Serialize};

use super::{check_rarity, IdRef, Record, Skill};
use crate::store::EntityKind;

/// Weapon class, which decides which battlesuits can equip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    /// Pistol.
    Pistol,
    /// Katana.
    Katana,
    /// Cannon.
    Cannon,
    /// Cross.
    Cross,
    /// Greatsword.
    Greatsword,
    /// Gauntlet.
    Gauntlet,
    /// Scythe.
    Scythe,
    /// Lance.
    Lance,
    /// Bow.
    Bow,
    /// Chakram.
    Chakram,
    /// Javelin.
    Javelin,
}

impl WeaponCategory {
    /// Value used in data files and list filters.
    pub fn value(self) -> &'static str {
        match self {
            WeaponCategory::Pistol => "pistol",
            WeaponCategory::Katana => "katana",
            WeaponCategory::Cannon => "cannon",
            WeaponCategory::Cross => "cross",
            WeaponCategory::Greatsword => "greatsword",
            WeaponCategory::Gauntlet => "gauntlet",
            WeaponCategory::Scythe => "scythe",
            WeaponCategory::Lance => "lance",
            WeaponCategory::Bow => "bow",
            WeaponCategory::Chakram => "chakram",
            WeaponCategory::Javelin => "javelin",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            WeaponCategory::Pistol => "Pistols",
            WeaponCategory::Katana => "Katanas",
            WeaponCategory::Cannon => "Cannons",
            WeaponCategory::Cross => "Crosses",
            WeaponCategory::Greatsword => "Greatswords",
            WeaponCategory::Gauntlet => "Gauntlets",
            WeaponCategory::Scythe => "Scythes",
            WeaponCategory::Lance => "Lances",
            WeaponCategory::Bow => "Bows",
            WeaponCategory::Chakram => "Chakrams",
            WeaponCategory::Javelin => "Javelins",
        }
    }

    /// Asset key of the category icon.
    pub fn icon(self) -> String {
        format!("weapon-types/{}", self.value())
    }
}

/// Full weapon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Detail file id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Weapon class, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<WeaponCategory>,
    /// Star count, 1 to 5, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<u8>,
    /// Max-level ATK.
    pub atk: u32,
    /// Max-level CRT.
    pub crt: u32,
    /// Battlesuits this weapon suits best.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battlesuits: Option<Vec<IdRef>>,
    /// Upgraded form of this weapon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pri_weapon: Option<String>,
    /// Weapons this one was upgraded from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_weapons: Option<Vec<String>>,
    /// Weapon skills in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Weapon {
    /// Ids of the battlesuits in `battlesuits`, in order.
    pub fn battlesuit_ids(&self) -> Vec<&str> {
        self.battlesuits
            .iter()
            .flatten()
            .map(|battlesuit| battlesuit.id.as_str())
            .collect()
    }

    /// `priWeapon` followed by `originalWeapons`.
    pub fn related_weapon_ids(&self) -> Vec<&str> {
        self.pri_weapon
            .iter()
            .map(String::as_str)
            .chain(self.original_weapons.iter().flatten().map(String::as_str))
            .collect()
    }
}

impl Record for Weapon {
    const KIND: EntityKind = EntityKind::Weapon;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        match self.rarity {
            Some(rarity) => check_rarity(rarity, 5),
            None => Ok(()),
        }
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        self.battlesuit_ids()
            .into_iter()
            .map(|id| (EntityKind::Battlesuit, id))
            .chain(
                self.related_weapon_ids()
                    .into_iter()
                    .map(|id| (EntityKind::Weapon, id)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_reference_fields_default_to_none() {
        let weapon: Weapon = serde_yaml::from_str(
            "id: w1\nname: Sword\ncategory: katana\nrarity: 4\natk: 100\ncrt: 5\nskills: []\n",
        )
        .unwrap();
        assert!(weapon.battlesuits.is_none());
        assert!(weapon.battlesuit_ids().is_empty());
        assert!(weapon.related_weapon_ids().is_empty());
        assert!(weapon.validate().is_ok());
    }

    #[test]
    fn category_and_rarity_are_optional() {
        let weapon: Weapon =
            serde_yaml::from_str("id: w1\nname: Sword\natk: 100\ncrt: 5\nskills: []\n").unwrap();
        assert_eq!(weapon.category, None);
        assert_eq!(weapon.rarity, None);
        assert!(weapon.validate().is_ok());

        let out_of_range: Weapon =
            serde_yaml::from_str("id: w1\nname: Sword\nrarity: 9\natk: 100\ncrt: 5\n").unwrap();
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn related_weapons_list_pri_weapon_first() {
        let weapon: Weapon = serde_yaml::from_str(
            r#"
id: w2
name: Sword Prime
category: katana
rarity: 5
atk: 500
crt: 50
battlesuits:
  - id: b1
  - id: b2
priWeapon: w3
originalWeapons: [w1, w0]
"#,
        )
        .unwrap();
        assert_eq!(weapon.battlesuit_ids(), vec!["b1", "b2"]);
        assert_eq!(weapon.related_weapon_ids(), vec!["w3", "w1", "w0"]);
        assert_eq!(weapon.references().len(), 5);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result: Result<Weapon, _> = serde_yaml::from_str(
            "id: w1\nname: Sword\ncategory: spoon\nrarity: 4\natk: 100\ncrt: 5\n",
        );
        assert!(result.is_err());
    }
}
