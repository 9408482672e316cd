use abysslab_core::EntityKind;
use askama::Template;

use super::{
    section_route, skill_views, stars, Card, Head, Link, SiteView, SkillView, GAME_NAME, GAME_ROOT,
};
use crate::props::{CatalogProps, ElfProps};

/// List page of one entity kind.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub heading: &'static str,
    pub cards: Vec<Card>,
}

impl CatalogPage {
    pub fn new(site: SiteView, props: &CatalogProps) -> Self {
        let heading = heading(props.kind);
        let cards = props
            .items
            .iter()
            .map(|item| {
                let label = match props.kind {
                    EntityKind::Version => format!("v{} : {}", item.id, item.name),
                    _ => item.display_name().to_string(),
                };
                Card::new(&site, props.kind, &item.id, item.thumbnail_key(), &label)
            })
            .collect();

        Self {
            head: Head {
                title: site.page_title(heading),
                description: format!("All {GAME_NAME} {}", heading.to_lowercase()),
            },
            breadcrumbs: site.crumbs(None),
            heading,
            cards,
            site,
        }
    }
}

fn heading(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Battlesuit => "Battlesuits",
        EntityKind::Weapon => "Weapons",
        EntityKind::Stigma => "Stigmata",
        EntityKind::StigmataSet => "Stigmata Sets",
        EntityKind::Elf => "ELFs",
        EntityKind::Version => "Versions",
        EntityKind::ErBattlesuit => "Elysian Realm Battlesuits",
    }
}

#[derive(Template)]
#[template(path = "elf.html")]
pub struct ElfPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub image: String,
    pub stars: String,
    pub skills: Vec<SkillView>,
}

impl ElfPage {
    pub fn new(site: SiteView, props: &ElfProps) -> Self {
        let elf = &props.elf;
        let elfs_route = section_route(EntityKind::Elf);
        Self {
            head: Head {
                title: site.page_title(&elf.name),
                description: format!("{} ELF", elf.name),
            },
            breadcrumbs: site.crumbs(Some((&elfs_route, "ELFs"))),
            name: elf.name.clone(),
            image: site.asset(&format!("elfs/{}", elf.id)),
            stars: stars(elf.rarity),
            skills: skill_views(&elf.skills),
            site,
        }
    }
}

/// Site root linking to each game section.
#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub games: Vec<Card>,
}

impl LandingPage {
    pub fn new(site: SiteView) -> Self {
        let games = vec![Card {
            href: site.href(GAME_ROOT),
            image: site.asset("wallpaper"),
            label: GAME_NAME.to_string(),
        }];
        Self {
            head: Head {
                title: site.title.clone(),
                description: format!("{} game guides", site.title),
            },
            breadcrumbs: Vec::new(),
            games,
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{props::load_catalog, views::test_support::site};
    use abysslab_core::{scaffold, Dataset, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn catalog_cards_follow_catalog_order() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let page = CatalogPage::new(site(), &load_catalog(&dataset, EntityKind::Battlesuit, None)?);
        let labels: Vec<_> = page.cards.iter().map(|card| card.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Kiana - Herrscher of Flamescion", "Mei - Herrscher of Thunder"]
        );

        let versions = CatalogPage::new(site(), &load_catalog(&dataset, EntityKind::Version, None)?);
        assert_eq!(versions.cards[0].label, "v6.1 : Wandering Fireflies");
        assert_eq!(versions.cards[0].href, "/honkai3rd/versions/6.1");
        Ok(())
    }

    #[test]
    fn landing_page_links_game_section() -> askama::Result<()> {
        let html = LandingPage::new(site()).render()?;
        assert!(html.contains("href=\"/honkai3rd\""));
        assert!(html.contains("<title>Abyss Lab</title>"));
        Ok(())
    }
}
