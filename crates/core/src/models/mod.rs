//! Typed dataset records.
//!
//! Every entity is decoded straight from its YAML detail file and checked by
//! [`Record::validate`] before it reaches a caller.

mod battlesuit;
mod catalog;
pub(crate) mod de;
mod elf;
mod elysian;
mod stigmata;
mod version;
mod weapon;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::store::EntityKind;

pub use battlesuit::{Battlesuit, BattlesuitRank, BattlesuitType, Loadout, SkillGroup};
pub use catalog::CatalogItem;
pub use elf::Elf;
pub use elysian::{ErBattlesuit, ErSigil, ErSignet, ErSupportBattlesuit};
pub use stigmata::{Stigma, StigmaSlot, StigmataSet};
pub use version::{format_date, DateRange, Version};
pub use weapon::{Weapon, WeaponCategory};

/// A record stored as one detail file per id.
pub trait Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Catalog/directory this record lives in.
    const KIND: EntityKind;

    /// Id the record is stored under.
    fn id(&self) -> &str;

    /// Load-time checks beyond what decoding enforces.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Ids of other records this one points at, in document order.
    fn references(&self) -> Vec<(EntityKind, &str)> {
        Vec::new()
    }
}

/// Named skill with free-form description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill title.
    pub name: String,
    /// Effect text.
    #[serde(default)]
    pub description: String,
}

/// `{id}` pointer used inside list fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    /// Referenced record id.
    pub id: String,
}

pub(crate) fn check_rarity(rarity: u8, max: u8) -> Result<(), String> {
    if (1..=max).contains(&rarity) {
        Ok(())
    } else {
        Err(format!("rarity {rarity} outside 1..={max}"))
    }
}
