use abysslab_core::EntityKind;
use askama::Template;

use super::{section_route, skill_views, Card, Head, Link, SiteView, SkillView};
use crate::props::BattlesuitProps;

pub struct SkillGroupView {
    pub category: String,
    pub name: String,
    pub description: String,
    pub subskills: Vec<SkillView>,
}

/// One recommended loadout; unresolved gear is left out.
pub struct LoadoutView {
    pub weapon: Option<Card>,
    pub stigmata: Vec<Card>,
    pub note: String,
}

#[derive(Template)]
#[template(path = "battlesuit.html")]
pub struct BattlesuitPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub image: String,
    pub character: String,
    pub rank: &'static str,
    pub battlesuit_type: &'static str,
    pub skill_groups: Vec<SkillGroupView>,
    pub loadouts: Vec<LoadoutView>,
}

impl BattlesuitPage {
    pub fn new(site: SiteView, props: &BattlesuitProps) -> Self {
        let battlesuit = &props.battlesuit;
        let skill_groups = battlesuit
            .skills
            .iter()
            .map(|group| SkillGroupView {
                category: group.category.clone(),
                name: group.name.clone(),
                description: group.description.clone().unwrap_or_default(),
                subskills: skill_views(&group.subskills),
            })
            .collect();
        let loadouts = battlesuit
            .equipment
            .iter()
            .map(|loadout| LoadoutView {
                weapon: loadout
                    .weapon
                    .as_deref()
                    .and_then(|id| props.weapon_map.get(id))
                    .map(|weapon| Card::weapon(&site, weapon)),
                stigmata: loadout
                    .stigmata
                    .iter()
                    .filter_map(|id| props.stigma_map.get(id))
                    .map(|stigma| {
                        Card::new(&site, EntityKind::Stigma, &stigma.id, &stigma.id, &stigma.name)
                    })
                    .collect(),
                note: loadout.note.clone().unwrap_or_default(),
            })
            .filter(|view| view.weapon.is_some() || !view.stigmata.is_empty())
            .collect();
        let battlesuits_route = section_route(EntityKind::Battlesuit);

        Self {
            head: Head {
                title: site.page_title(&battlesuit.full_name),
                description: format!(
                    "{} ({}-rank {})",
                    battlesuit.full_name,
                    battlesuit.rarity.as_str(),
                    battlesuit.battlesuit_type.as_str()
                ),
            },
            breadcrumbs: site.crumbs(Some((&battlesuits_route, "Battlesuits"))),
            name: battlesuit.full_name.clone(),
            image: site.asset(&format!("battlesuits/{}", battlesuit.id)),
            character: battlesuit.character.clone(),
            rank: battlesuit.rarity.as_str(),
            battlesuit_type: battlesuit.battlesuit_type.as_str(),
            skill_groups,
            loadouts,
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{props::load_battlesuit, views::test_support::site};
    use abysslab_core::{scaffold, Dataset, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn equipment_resolves_weapon_and_stigmata() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let page = BattlesuitPage::new(site(), &load_battlesuit(&dataset, "hofs", None)?);
        assert_eq!(page.loadouts.len(), 1);
        let loadout = &page.loadouts[0];
        assert_eq!(
            loadout.weapon.as_ref().map(|card| card.label.as_str()),
            Some("Ember Blaze PRI-ARM")
        );
        assert_eq!(loadout.stigmata.len(), 3);

        let html = page.render()?;
        assert!(html.contains("<h1>Kiana - Herrscher of Flamescion</h1>"));
        assert!(html.contains("Recommended Equipment"));
        assert!(html.contains("Blazing Wings"));
        Ok(())
    }

    #[test]
    fn battlesuit_without_equipment_has_no_equipment_section() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let html = BattlesuitPage::new(site(), &load_battlesuit(&dataset, "hot", None)?).render()?;
        assert!(!html.contains("Recommended Equipment"));
        Ok(())
    }
}
