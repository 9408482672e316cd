use serde::{Deserialize, Serialize};

use super::{Record, Skill};
use crate::store::EntityKind;

/// Battlesuit rank, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BattlesuitRank {
    /// B rank.
    B,
    /// A rank.
    A,
    /// S rank.
    S,
    /// SS rank.
    SS,
    /// SSS rank.
    SSS,
}

impl BattlesuitRank {
    /// Rank letters as shown on cards.
    pub fn as_str(self) -> &'static str {
        match self {
            BattlesuitRank::B => "B",
            BattlesuitRank::A => "A",
            BattlesuitRank::S => "S",
            BattlesuitRank::SS => "SS",
            BattlesuitRank::SSS => "SSS",
        }
    }
}

/// Battlesuit attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BattlesuitType {
    /// Mecha.
    Mech,
    /// Biologic.
    Bio,
    /// Psychic.
    Psy,
    /// Quantum.
    Qua,
    /// Imaginary.
    Img,
    /// Star.
    Sd,
}

impl BattlesuitType {
    /// Upper-case code used in data files.
    pub fn as_str(self) -> &'static str {
        match self {
            BattlesuitType::Mech => "MECH",
            BattlesuitType::Bio => "BIO",
            BattlesuitType::Psy => "PSY",
            BattlesuitType::Qua => "QUA",
            BattlesuitType::Img => "IMG",
            BattlesuitType::Sd => "SD",
        }
    }
}

/// Skill tab of a battlesuit (leader, evasion, ultimate, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Tab key, e.g. `ultimate`.
    pub category: String,
    /// Core skill name.
    pub name: String,
    /// Core skill text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Passive upgrades under the core skill.
    #[serde(default)]
    pub subskills: Vec<Skill>,
}

/// Recommended gear for a battlesuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    /// Weapon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,
    /// Stigma ids, usually T/M/B.
    #[serde(default)]
    pub stigmata: Vec<String>,
    /// Free-form remark shown with the loadout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Full battlesuit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battlesuit {
    /// Detail file id.
    pub id: String,
    /// Short battlesuit name.
    pub name: String,
    /// Character and battlesuit name, used as the display label.
    pub full_name: String,
    /// Character wearing the suit.
    pub character: String,
    /// Starting rank.
    pub rarity: BattlesuitRank,
    /// Attribute type.
    #[serde(rename = "type")]
    pub battlesuit_type: BattlesuitType,
    /// Skill tabs in display order.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Recommended loadouts, best first.
    #[serde(default)]
    pub equipment: Vec<Loadout>,
}

impl Battlesuit {
    /// Weapon ids across all loadouts, in order.
    pub fn equipment_weapon_ids(&self) -> Vec<&str> {
        self.equipment
            .iter()
            .filter_map(|loadout| loadout.weapon.as_deref())
            .collect()
    }

    /// Stigma ids across all loadouts, in order.
    pub fn equipment_stigma_ids(&self) -> Vec<&str> {
        self.equipment
            .iter()
            .flat_map(|loadout| loadout.stigmata.iter().map(String::as_str))
            .collect()
    }
}

impl Record for Battlesuit {
    const KIND: EntityKind = EntityKind::Battlesuit;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("fullName is empty".to_string());
        }
        match self.equipment.iter().find(|loadout| loadout.stigmata.len() > 3) {
            Some(_) => Err("a loadout lists more than three stigmata".to_string()),
            None => Ok(()),
        }
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        self.equipment_weapon_ids()
            .into_iter()
            .map(|id| (EntityKind::Weapon, id))
            .chain(
                self.equipment_stigma_ids()
                    .into_iter()
                    .map(|id| (EntityKind::Stigma, id)),
            )
            .collect()
    }
}
