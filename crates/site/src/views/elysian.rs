use abysslab_core::{models::ErSignet, EntityKind};
use askama::Template;

use super::{
    elysian_route, sigils_route, skill_views, supports_route, Card, Head, Link, SiteView, SkillView,
};
use crate::props::{ElysianIndexProps, ErBattlesuitProps, ErSigilsProps, ErSupportsProps};

pub struct SignetView {
    pub name: String,
    pub group: String,
    pub description: String,
}

impl From<&ErSignet> for SignetView {
    fn from(signet: &ErSignet) -> Self {
        Self {
            name: signet.name.clone(),
            group: signet.group.clone().unwrap_or_default(),
            description: signet.description.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "elysian.html")]
pub struct ElysianPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub battlesuits: Vec<Card>,
    pub tables: Vec<Link>,
}

impl ElysianPage {
    pub fn new(site: SiteView, props: &ElysianIndexProps) -> Self {
        Self {
            head: Head {
                title: site.page_title("Elysian Realm"),
                description: "Elysian Realm battlesuits, supports and sigils".to_string(),
            },
            breadcrumbs: site.crumbs(None),
            battlesuits: props
                .er_battlesuits
                .iter()
                .map(|item| {
                    Card::new(
                        &site,
                        EntityKind::ErBattlesuit,
                        &item.id,
                        item.thumbnail_key(),
                        item.display_name(),
                    )
                })
                .collect(),
            tables: vec![
                site.link(&supports_route(), "Support Battlesuits"),
                site.link(&sigils_route(), "Sigils"),
            ],
            site,
        }
    }
}

/// One entry of a support or sigil list.
pub struct EntryView {
    pub name: String,
    pub description: String,
    pub skills: Vec<SkillView>,
}

/// Support battlesuit or sigil list page.
#[derive(Template)]
#[template(path = "er_table.html")]
pub struct ErTablePage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub heading: &'static str,
    pub entries: Vec<EntryView>,
}

impl ErTablePage {
    pub fn supports(site: SiteView, props: &ErSupportsProps) -> Self {
        let entries = props
            .supports
            .iter()
            .map(|support| EntryView {
                name: support.name.clone(),
                description: String::new(),
                skills: skill_views(&support.skills),
            })
            .collect();
        Self::build(site, "Support Battlesuits", entries)
    }

    pub fn sigils(site: SiteView, props: &ErSigilsProps) -> Self {
        let entries = props
            .sigils
            .iter()
            .map(|sigil| EntryView {
                name: sigil.name.clone(),
                description: sigil.description.clone(),
                skills: Vec::new(),
            })
            .collect();
        Self::build(site, "Sigils", entries)
    }

    fn build(site: SiteView, heading: &'static str, entries: Vec<EntryView>) -> Self {
        let elysian = elysian_route();
        Self {
            head: Head {
                title: site.page_title(&format!("{heading} - Elysian Realm")),
                description: format!("Elysian Realm {}", heading.to_lowercase()),
            },
            breadcrumbs: site.crumbs(Some((&elysian, "Elysian Realm"))),
            heading,
            entries,
            site,
        }
    }
}

#[derive(Template)]
#[template(path = "er_battlesuit.html")]
pub struct ErBattlesuitPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub name: String,
    pub battlesuit: Option<Card>,
    /// Recommended signets in recommendation order.
    pub recommended: Vec<SignetView>,
    pub signets: Vec<SignetView>,
}

impl ErBattlesuitPage {
    pub fn new(site: SiteView, props: &ErBattlesuitProps) -> Self {
        let er = &props.er_battlesuit;
        let recommended = er
            .recommended_signets
            .iter()
            .filter_map(|id| props.signets.iter().find(|signet| &signet.id == id))
            .map(SignetView::from)
            .collect();
        let elysian = elysian_route();

        Self {
            head: Head {
                title: site.page_title(&format!("{} - Elysian Realm", er.name)),
                description: format!("Elysian Realm signets for {}", er.name),
            },
            breadcrumbs: site.crumbs(Some((&elysian, "Elysian Realm"))),
            name: er.name.clone(),
            battlesuit: props
                .battlesuit
                .as_ref()
                .map(|battlesuit| Card::battlesuit(&site, battlesuit)),
            recommended,
            signets: props.signets.iter().map(SignetView::from).collect(),
            site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        props::{load_elysian_index, load_er_battlesuit, load_er_sigils, load_er_supports},
        views::test_support::site,
    };
    use abysslab_core::{scaffold, Dataset, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn er_page_lists_recommended_signets_first() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let page = ErBattlesuitPage::new(site(), &load_er_battlesuit(&dataset, "er-hofs", None)?);
        assert_eq!(page.recommended.len(), 1);
        assert_eq!(page.recommended[0].name, "Signet of Deliverance I");
        assert_eq!(page.signets.len(), 2);

        let html = page.render()?;
        assert!(html.contains("href=\"/honkai3rd/battlesuits/hofs\""));
        Ok(())
    }

    #[test]
    fn index_links_battlesuits_and_tables() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let html = ElysianPage::new(site(), &load_elysian_index(&dataset, None)?).render()?;
        assert!(html.contains("href=\"/honkai3rd/elysian-realm/battlesuits/er-hofs\""));
        assert!(html.contains("href=\"/honkai3rd/elysian-realm/sigils\""));

        let sigils = ErTablePage::sigils(site(), &load_er_sigils(&dataset, None)?).render()?;
        assert!(sigils.contains("Forbidden Seed"));
        assert!(sigils.contains("Total DMG +10%."));
        let supports = ErTablePage::supports(site(), &load_er_supports(&dataset, None)?).render()?;
        assert!(supports.contains("Shield"));
        Ok(())
    }
}
