use serde::{Deserialize, Serialize};

use super::{check_rarity, Record, Skill};
use crate::store::EntityKind;

/// ELF companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elf {
    /// Detail file id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Star count, 1 to 4.
    pub rarity: u8,
    /// Skill tree entries in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Record for Elf {
    const KIND: EntityKind = EntityKind::Elf;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        check_rarity(self.rarity, 4)
    }
}
