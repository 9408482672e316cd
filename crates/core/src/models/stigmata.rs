use serde::{Deserialize, Serialize};

use super::{check_rarity, Record, Skill};
use crate::store::EntityKind;

/// Top, middle or bottom slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StigmaSlot {
    /// Top.
    T,
    /// Middle.
    M,
    /// Bottom.
    B,
}

impl StigmaSlot {
    /// Slot letter as written in data files.
    pub fn as_str(self) -> &'static str {
        match self {
            StigmaSlot::T => "T",
            StigmaSlot::M => "M",
            StigmaSlot::B => "B",
        }
    }
}

/// A single stigma piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stigma {
    /// Detail file id.
    pub id: String,
    /// Display name, including the slot suffix.
    pub name: String,
    /// Slot the piece goes in.
    #[serde(rename = "type")]
    pub slot: StigmaSlot,
    /// Star count, 1 to 5.
    pub rarity: u8,
    /// HP bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    /// ATK bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<u32>,
    /// DEF bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<u32>,
    /// CRT bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crt: Option<u32>,
    /// Piece effect.
    pub skill: Skill,
    /// Set this piece belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
}

impl Stigma {
    /// Present stats as `(label, value)` pairs in display order.
    pub fn stats(&self) -> Vec<(&'static str, u32)> {
        [
            ("HP", self.hp),
            ("ATK", self.atk),
            ("DEF", self.def),
            ("CRT", self.crt),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| (label, value)))
        .collect()
    }
}

impl Record for Stigma {
    const KIND: EntityKind = EntityKind::Stigma;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        check_rarity(self.rarity, 5)
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        self.set
            .iter()
            .map(|id| (EntityKind::StigmataSet, id.as_str()))
            .collect()
    }
}

/// A stigmata set and its member pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StigmataSet {
    /// Detail file id.
    pub id: String,
    /// Set name.
    pub name: String,
    /// Star count, 1 to 5.
    pub rarity: u8,
    /// Member stigma ids, usually in T/M/B order.
    #[serde(default)]
    pub stigmata: Vec<String>,
    /// Bonus for wearing two pieces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_set_skill: Option<Skill>,
    /// Bonus for wearing three pieces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_set_skill: Option<Skill>,
}

impl Record for StigmataSet {
    const KIND: EntityKind = EntityKind::StigmataSet;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        check_rarity(self.rarity, 5)
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        self.stigmata
            .iter()
            .map(|id| (EntityKind::Stigma, id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_without_pieces_still_loads() {
        let set: StigmataSet = serde_yaml::from_str("id: s1\nname: Empty Set\nrarity: 4\n").unwrap();
        assert!(set.stigmata.is_empty());
        assert!(set.references().is_empty());
        assert!(set.validate().is_ok());
    }
}
