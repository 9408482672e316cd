use abysslab_core::EntityKind;
use askama::Template;

use super::{section_route, stars, Card, Head, Link, SiteView, SkillView};
use crate::props::{StigmaProps, StigmataSetProps};

pub struct SetBonusView {
    pub pieces: &'static str,
    pub skill: SkillView,
}

pub struct StatView {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Template)]
#[template(path = "stigma.html")]
pub struct StigmaPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub image: String,
    pub slot: &'static str,
    pub stars: String,
    pub stats: Vec<StatView>,
    pub skill: SkillView,
    pub set_card: Option<Card>,
}

impl StigmaPage {
    pub fn new(site: SiteView, props: &StigmaProps) -> Self {
        let stigma = &props.stigma;
        let stigmata_route = section_route(EntityKind::Stigma);
        Self {
            head: Head {
                title: site.page_title(&stigma.name),
                description: format!("{}: {}", stigma.skill.name, stigma.skill.description),
            },
            breadcrumbs: site.crumbs(Some((&stigmata_route, "Stigmata"))),
            name: stigma.name.clone(),
            image: site.asset(&format!("stigmata/{}", stigma.id)),
            slot: stigma.slot.as_str(),
            stars: stars(stigma.rarity),
            stats: stigma
                .stats()
                .into_iter()
                .map(|(label, value)| StatView { label, value })
                .collect(),
            skill: SkillView::from(&stigma.skill),
            set_card: props.set.as_ref().map(|set| Card::stigmata_set(&site, set)),
            site,
        }
    }
}

#[derive(Template)]
#[template(path = "stigmata_set.html")]
pub struct StigmataSetPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub stars: String,
    pub pieces: Vec<Card>,
    pub set_bonuses: Vec<SetBonusView>,
}

impl StigmataSetPage {
    pub fn new(site: SiteView, props: &StigmataSetProps) -> Self {
        let set = &props.set;
        let stigmata_route = section_route(EntityKind::Stigma);
        let pieces = set
            .stigmata
            .iter()
            .filter_map(|id| props.stigma_map.get(id))
            .map(|stigma| Card::new(&site, EntityKind::Stigma, &stigma.id, &stigma.id, &stigma.name))
            .collect();
        let set_bonuses = [("2-Set", &set.two_set_skill), ("3-Set", &set.three_set_skill)]
            .into_iter()
            .filter_map(|(pieces, skill)| {
                skill.as_ref().map(|skill| SetBonusView {
                    pieces,
                    skill: SkillView::from(skill),
                })
            })
            .collect();

        Self {
            head: Head {
                title: site.page_title(&set.name),
                description: format!("{} stigmata set", set.name),
            },
            breadcrumbs: site.crumbs(Some((&stigmata_route, "Stigmata"))),
            name: set.name.clone(),
            stars: stars(set.rarity),
            pieces,
            set_bonuses,
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        props::{load_stigma, load_stigmata_set},
        views::test_support::site,
    };
    use abysslab_core::{scaffold, Dataset, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn stigma_links_to_its_set() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let page = StigmaPage::new(site(), &load_stigma(&dataset, "flamescion-t", None)?);
        let stats: Vec<_> = page.stats.iter().map(|stat| stat.label).collect();
        assert_eq!(stats, vec!["HP", "ATK"]);

        let html = page.render()?;
        assert!(html.contains("href=\"/honkai3rd/stigmata-sets/flamescion\""));
        Ok(())
    }

    #[test]
    fn set_lists_pieces_and_bonuses() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let page = StigmataSetPage::new(site(), &load_stigmata_set(&dataset, "flamescion", None)?);
        assert_eq!(page.pieces.len(), 3);
        assert_eq!(page.pieces[0].label, "Flamescion (T)");

        let html = page.render()?;
        assert!(html.contains("2-Set"));
        assert!(html.contains("Rising Sun"));
        Ok(())
    }
}
