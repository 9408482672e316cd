//! Elysian Realm records.

use serde::{Deserialize, Serialize};

use super::{Record, Skill};
use crate::store::EntityKind;

/// Elysian Realm entry for a battlesuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErBattlesuit {
    /// Detail file id, also naming the signet file.
    pub id: String,
    /// Battlesuit this entry plays as.
    pub battlesuit: String,
    /// Display name.
    pub name: String,
    /// Signet ids to pick first, in order.
    #[serde(default)]
    pub recommended_signets: Vec<String>,
}

impl Record for ErBattlesuit {
    const KIND: EntityKind = EntityKind::ErBattlesuit;

    fn id(&self) -> &str {
        &self.id
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        vec![(EntityKind::Battlesuit, self.battlesuit.as_str())]
    }
}

/// Signet offered to one Elysian Realm battlesuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErSignet {
    /// Id referenced by `recommendedSignets`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Signet family, e.g. Deliverance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Effect text.
    #[serde(default)]
    pub description: String,
}

/// Row of the support battlesuit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErSupportBattlesuit {
    /// Row id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Support skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Row of the sigil table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErSigil {
    /// Row id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Effect text.
    #[serde(default)]
    pub description: String,
}
