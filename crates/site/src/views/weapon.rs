use abysslab_core::EntityKind;
use askama::Template;

use super::{section_route, skill_views, stars, Card, Head, Link, SiteView, SkillView};
use crate::props::WeaponProps;

/// Weapon class link with its icon.
pub struct CategoryView {
    pub link: Link,
    pub icon: String,
}

#[derive(Template)]
#[template(path = "weapon.html")]
pub struct WeaponPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub image: String,
    pub category: Option<CategoryView>,
    pub stars: String,
    pub atk: u32,
    pub crt: u32,
    pub best_on: Vec<Card>,
    pub pri_weapon: Option<Card>,
    pub original_weapons: Vec<Card>,
    pub skills: Vec<SkillView>,
}

impl WeaponPage {
    pub fn new(site: SiteView, props: &WeaponProps) -> Self {
        let weapon = &props.weapon;
        let weapons_route = section_route(EntityKind::Weapon);

        let best_on = weapon
            .battlesuit_ids()
            .into_iter()
            .filter_map(|id| props.battlesuit_map.get(id))
            .map(|battlesuit| Card::battlesuit(&site, battlesuit))
            .collect();
        let pri_weapon = weapon
            .pri_weapon
            .as_deref()
            .and_then(|id| props.weapon_map.get(id))
            .map(|pri| Card::weapon(&site, pri));
        let original_weapons = weapon
            .original_weapons
            .iter()
            .flatten()
            .filter_map(|id| props.weapon_map.get(id))
            .map(|original| Card::weapon(&site, original))
            .collect();

        Self {
            head: Head {
                title: site.page_title(&weapon.name),
                description: match weapon.category {
                    Some(category) => format!(
                        "{} ({}) ATK {} CRT {}",
                        weapon.name,
                        category.label(),
                        weapon.atk,
                        weapon.crt
                    ),
                    None => format!("{} ATK {} CRT {}", weapon.name, weapon.atk, weapon.crt),
                },
            },
            breadcrumbs: site.crumbs(Some((&weapons_route, "Weapons"))),
            name: weapon.name.clone(),
            image: site.asset(&format!("weapons/{}", weapon.id)),
            category: weapon.category.map(|category| CategoryView {
                link: site.link(&weapons_route, category.label()),
                icon: site.asset(&category.icon()),
            }),
            stars: weapon.rarity.map(stars).unwrap_or_default(),
            atk: weapon.atk,
            crt: weapon.crt,
            best_on,
            pri_weapon,
            original_weapons,
            skills: skill_views(&weapon.skills),
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::site;
    use abysslab_core::models::{Battlesuit, BattlesuitRank, BattlesuitType, IdRef, Weapon, WeaponCategory};
    use std::collections::BTreeMap;

    fn weapon(id: &str, name: &str) -> Weapon {
        Weapon {
            id: id.to_string(),
            name: name.to_string(),
            category: Some(WeaponCategory::Greatsword),
            rarity: Some(3),
            atk: 100,
            crt: 5,
            battlesuits: None,
            pri_weapon: None,
            original_weapons: None,
            skills: Vec::new(),
        }
    }

    fn battlesuit(id: &str, full_name: &str) -> Battlesuit {
        Battlesuit {
            id: id.to_string(),
            name: full_name.to_string(),
            full_name: full_name.to_string(),
            character: "Kiana".to_string(),
            rarity: BattlesuitRank::A,
            battlesuit_type: BattlesuitType::Mech,
            skills: Vec::new(),
            equipment: Vec::new(),
        }
    }

    fn props(weapon: Weapon) -> WeaponProps {
        WeaponProps {
            weapon,
            battlesuit_map: BTreeMap::new(),
            weapon_map: BTreeMap::new(),
        }
    }

    #[test]
    fn bare_weapon_renders_name_and_stats_only() -> askama::Result<()> {
        let html = WeaponPage::new(site(), &props(weapon("w1", "Sword"))).render()?;

        assert!(html.contains("<h1>Sword</h1>"));
        assert!(html.contains("ATK : 100 / CRT : 5"));
        assert!(html.contains("⭐⭐⭐"));
        assert!(!html.contains("Best on"));
        assert!(!html.contains("PRI Weapon"));
        assert!(!html.contains("class=\"skill\""));
        Ok(())
    }

    #[test]
    fn unclassified_weapon_skips_category_and_stars() -> askama::Result<()> {
        let mut sword = weapon("w1", "Sword");
        sword.category = None;
        sword.rarity = None;

        let page = WeaponPage::new(site(), &props(sword));
        assert_eq!(page.head.description, "Sword ATK 100 CRT 5");
        let html = page.render()?;
        assert!(html.contains("ATK : 100 / CRT : 5"));
        assert!(!html.contains("class=\"category\""));
        assert!(!html.contains("class=\"rarity\""));
        assert!(!html.contains("⭐"));
        Ok(())
    }

    #[test]
    fn best_on_lists_resolved_battlesuits_in_order() -> askama::Result<()> {
        let mut sword = weapon("w1", "Sword");
        sword.battlesuits = Some(
            ["b2", "missing", "b1"]
                .iter()
                .map(|id| IdRef { id: id.to_string() })
                .collect(),
        );
        let mut props = props(sword);
        for (id, name) in [("b1", "Valkyrie Ranger"), ("b2", "White Comet")] {
            props.battlesuit_map.insert(id.to_string(), battlesuit(id, name));
        }

        let page = WeaponPage::new(site(), &props);
        let labels: Vec<_> = page.best_on.iter().map(|card| card.label.as_str()).collect();
        assert_eq!(labels, vec!["White Comet", "Valkyrie Ranger"]);

        let html = page.render()?;
        assert!(html.contains("Best on"));
        let comet = html.find("White Comet").unwrap();
        let ranger = html.find("Valkyrie Ranger").unwrap();
        assert!(comet < ranger);
        Ok(())
    }

    #[test]
    fn pri_and_original_weapons_link_to_each_other() -> askama::Result<()> {
        let mut base = weapon("w1", "Sword");
        base.pri_weapon = Some("w2".to_string());
        let mut props = props(base);
        props
            .weapon_map
            .insert("w2".to_string(), weapon("w2", "Sword PRI-ARM"));

        let html = WeaponPage::new(site(), &props).render()?;
        assert!(html.contains("PRI Weapon"));
        assert!(html.contains("href=\"/honkai3rd/weapons/w2\""));
        assert!(!html.contains("Original Weapons"));
        Ok(())
    }
}
