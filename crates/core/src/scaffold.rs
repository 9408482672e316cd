//! Small but complete sample dataset, used by `abysslab init` and by tests.

use chrono::NaiveDate;
use tracing::info;

use crate::{
    error::DataResult,
    models::{
        Battlesuit, BattlesuitRank, BattlesuitType, CatalogItem, DateRange, Elf, ErBattlesuit,
        ErSigil, ErSignet, ErSupportBattlesuit, IdRef, Loadout, Record, Skill, SkillGroup, Stigma,
        StigmaSlot, StigmataSet, Version, Weapon, WeaponCategory,
    },
    store::{FileStore, Table},
};

/// Write the sample dataset below the store root.
pub fn write_sample_dataset(store: &FileStore) -> DataResult<()> {
    info!("writing sample dataset to {}", store.root().display());

    write_kind(store, &battlesuits(), |battlesuit| CatalogItem {
        id: battlesuit.id.clone(),
        name: battlesuit.name.clone(),
        full_name: Some(battlesuit.full_name.clone()),
        thumbnail: None,
    })?;
    write_kind(store, &weapons(), |weapon| row(&weapon.id, &weapon.name))?;
    write_kind(store, &stigmata(), |stigma| row(&stigma.id, &stigma.name))?;
    write_kind(store, &stigmata_sets(), |set| row(&set.id, &set.name))?;
    write_kind(store, &elfs(), |elf| row(&elf.id, &elf.name))?;
    write_kind(store, &versions(), |version| row(&version.version, &version.name))?;
    write_kind(store, &er_battlesuits(), |er| row(&er.id, &er.name))?;

    store.write_yaml(&store.signets_path("er-hofs", None)?, &signets())?;
    store.write_yaml(
        &store.table_path(Table::ErSupports, None)?,
        &[ErSupportBattlesuit {
            id: "support-bella".to_string(),
            name: "Bella's Aid".to_string(),
            skills: vec![skill("Shield", "Grants a shield when entering battle.")],
        }],
    )?;
    store.write_yaml(
        &store.table_path(Table::ErSigils, None)?,
        &[ErSigil {
            id: "forbidden-seed".to_string(),
            name: "Forbidden Seed".to_string(),
            description: "Total DMG +10%.".to_string(),
        }],
    )?;
    Ok(())
}

fn write_kind<E: Record>(
    store: &FileStore,
    records: &[E],
    to_row: impl Fn(&E) -> CatalogItem,
) -> DataResult<()> {
    let catalog: Vec<CatalogItem> = records.iter().map(to_row).collect();
    store.write_yaml(&store.catalog_path(E::KIND, None)?, &catalog)?;
    for record in records {
        store.write_yaml(&store.detail_path(E::KIND, record.id(), None)?, record)?;
    }
    Ok(())
}

fn row(id: &str, name: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        full_name: None,
        thumbnail: None,
    }
}

fn skill(name: &str, description: &str) -> Skill {
    Skill {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn battlesuits() -> Vec<Battlesuit> {
    vec![
        Battlesuit {
            id: "hofs".to_string(),
            name: "Herrscher of Flamescion".to_string(),
            full_name: "Kiana - Herrscher of Flamescion".to_string(),
            character: "Kiana".to_string(),
            rarity: BattlesuitRank::S,
            battlesuit_type: BattlesuitType::Psy,
            skills: vec![SkillGroup {
                category: "ultimate".to_string(),
                name: "Flamescion Form".to_string(),
                description: None,
                subskills: vec![skill("Blazing Wings", "Ultimate DMG +30%.")],
            }],
            equipment: vec![Loadout {
                weapon: Some("ember-blaze-pri".to_string()),
                stigmata: vec![
                    "flamescion-t".to_string(),
                    "flamescion-m".to_string(),
                    "flamescion-b".to_string(),
                ],
                note: None,
            }],
        },
        Battlesuit {
            id: "hot".to_string(),
            name: "Herrscher of Thunder".to_string(),
            full_name: "Mei - Herrscher of Thunder".to_string(),
            character: "Mei".to_string(),
            rarity: BattlesuitRank::S,
            battlesuit_type: BattlesuitType::Img,
            skills: Vec::new(),
            equipment: Vec::new(),
        },
    ]
}

fn weapons() -> Vec<Weapon> {
    vec![
        Weapon {
            id: "ember-blaze".to_string(),
            name: "Ember Blaze".to_string(),
            category: Some(WeaponCategory::Pistol),
            rarity: Some(5),
            atk: 600,
            crt: 80,
            battlesuits: Some(vec![IdRef {
                id: "hofs".to_string(),
            }]),
            pri_weapon: Some("ember-blaze-pri".to_string()),
            original_weapons: None,
            skills: vec![skill("Blaze", "Fire DMG +20%.")],
        },
        Weapon {
            id: "ember-blaze-pri".to_string(),
            name: "Ember Blaze PRI-ARM".to_string(),
            category: Some(WeaponCategory::Pistol),
            rarity: Some(5),
            atk: 700,
            crt: 90,
            battlesuits: Some(vec![IdRef {
                id: "hofs".to_string(),
            }]),
            pri_weapon: None,
            original_weapons: Some(vec!["ember-blaze".to_string()]),
            skills: vec![
                skill("Blaze", "Fire DMG +25%."),
                skill("Afterglow", "Ultimate DMG +15%."),
            ],
        },
        Weapon {
            id: "thunder-edge".to_string(),
            name: "Thunder Edge".to_string(),
            category: Some(WeaponCategory::Katana),
            rarity: Some(4),
            atk: 450,
            crt: 40,
            battlesuits: Some(vec![IdRef {
                id: "hot".to_string(),
            }]),
            pri_weapon: None,
            original_weapons: None,
            skills: Vec::new(),
        },
    ]
}

fn stigmata() -> Vec<Stigma> {
    [
        (StigmaSlot::T, "flamescion-t", "Flamescion (T)"),
        (StigmaSlot::M, "flamescion-m", "Flamescion (M)"),
        (StigmaSlot::B, "flamescion-b", "Flamescion (B)"),
    ]
    .into_iter()
    .map(|(slot, id, name)| Stigma {
        id: id.to_string(),
        name: name.to_string(),
        slot,
        rarity: 5,
        hp: Some(300),
        atk: Some(100),
        def: None,
        crt: None,
        skill: skill(name, "Fire DMG +10%."),
        set: Some("flamescion".to_string()),
    })
    .collect()
}

fn stigmata_sets() -> Vec<StigmataSet> {
    vec![StigmataSet {
        id: "flamescion".to_string(),
        name: "Flamescion".to_string(),
        rarity: 5,
        stigmata: vec![
            "flamescion-t".to_string(),
            "flamescion-m".to_string(),
            "flamescion-b".to_string(),
        ],
        two_set_skill: Some(skill("Blazing Heart", "Total DMG +15%.")),
        three_set_skill: Some(skill("Rising Sun", "Fire DMG +30%.")),
    }]
}

fn elfs() -> Vec<Elf> {
    vec![Elf {
        id: "bella".to_string(),
        name: "Bella".to_string(),
        rarity: 2,
        skills: vec![skill("Tidying Up", "Restores SP.")],
    }]
}

fn versions() -> Vec<Version> {
    vec![
        Version {
            version: "6.1".to_string(),
            name: "Wandering Fireflies".to_string(),
            duration: DateRange {
                start: date(2022, 10, 13),
                end: Some(date(2022, 11, 24)),
            },
            new_battlesuits: vec!["hot".to_string()],
            new_weapons: vec!["thunder-edge".to_string()],
            new_stigmata_sets: Vec::new(),
            previous_version: None,
            next_version: Some("6.2".to_string()),
        },
        Version {
            version: "6.2".to_string(),
            name: "Flames of Dawn".to_string(),
            duration: DateRange {
                start: date(2022, 11, 24),
                end: None,
            },
            new_battlesuits: vec!["hofs".to_string()],
            new_weapons: vec!["ember-blaze".to_string(), "ember-blaze-pri".to_string()],
            new_stigmata_sets: vec!["flamescion".to_string()],
            previous_version: Some("6.1".to_string()),
            next_version: None,
        },
    ]
}

fn er_battlesuits() -> Vec<ErBattlesuit> {
    vec![ErBattlesuit {
        id: "er-hofs".to_string(),
        battlesuit: "hofs".to_string(),
        name: "Herrscher of Flamescion".to_string(),
        recommended_signets: vec!["deliverance-1".to_string()],
    }]
}

fn signets() -> Vec<ErSignet> {
    vec![
        ErSignet {
            id: "deliverance-1".to_string(),
            name: "Signet of Deliverance I".to_string(),
            group: Some("Kevin".to_string()),
            description: "Elemental DMG +20%.".to_string(),
        },
        ErSignet {
            id: "gold-1".to_string(),
            name: "Signet of Gold I".to_string(),
            group: Some("Aponia".to_string()),
            description: "Ultimate DMG +15%.".to_string(),
        },
    ]
}
