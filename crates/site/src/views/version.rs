use abysslab_core::{models::Version, EntityKind};
use askama::Template;

use super::{detail_route, section_route, Card, Head, Link, SiteView, GAME_NAME};
use crate::props::{GameIndexProps, VersionProps};

/// Game landing page and version detail pages.
#[derive(Template)]
#[template(path = "version.html")]
pub struct VersionPage {
    pub site: SiteView,
    pub head: Head,
    pub breadcrumbs: Vec<Link>,
    pub heading: String,
    pub is_current: bool,
    pub duration: String,
    pub previous: Option<Link>,
    pub next: Option<Link>,
    pub new_battlesuits: Vec<Card>,
    pub new_weapons: Vec<Card>,
    pub new_stigmata_sets: Vec<Card>,
    /// Every version, newest first; only filled on the landing page.
    pub all_versions: Vec<Link>,
}

impl VersionPage {
    pub fn index(site: SiteView, props: &GameIndexProps) -> Self {
        let mut page = Self::build(site, &props.current, true);
        page.head.title = format!("{GAME_NAME} - {}", page.site.title);
        page.breadcrumbs = Vec::new();
        page.all_versions = props
            .versions
            .iter()
            .map(|version| version_link(&page.site, version))
            .collect();
        page
    }

    pub fn detail(site: SiteView, props: &VersionProps) -> Self {
        Self::build(site, props, false)
    }

    fn build(site: SiteView, props: &VersionProps, is_current: bool) -> Self {
        let version = &props.version;
        let heading = heading(version);
        let neighbour = |id: &Option<String>, label: &str| {
            id.as_deref().map(|id| {
                site.link(
                    &detail_route(EntityKind::Version, id),
                    &format!("{label} (v{id})"),
                )
            })
        };
        let previous = neighbour(&version.previous_version, "Previous");
        let next = neighbour(&version.next_version, "Next");
        let versions_route = section_route(EntityKind::Version);

        Self {
            head: Head {
                title: site.page_title(&heading),
                description: format!("{heading} ({})", version.duration.display()),
            },
            breadcrumbs: site.crumbs(Some((&versions_route, "Versions"))),
            is_current,
            duration: version.duration.display(),
            previous,
            next,
            new_battlesuits: props
                .new_battlesuits
                .iter()
                .map(|battlesuit| Card::battlesuit(&site, battlesuit))
                .collect(),
            new_weapons: props
                .new_weapons
                .iter()
                .map(|weapon| Card::weapon(&site, weapon))
                .collect(),
            new_stigmata_sets: props
                .new_stigmata_sets
                .iter()
                .map(|set| Card::stigmata_set(&site, set))
                .collect(),
            all_versions: Vec::new(),
            heading,
            site,
        }
    }
}

fn heading(version: &Version) -> String {
    format!("v{} : {}", version.version, version.name)
}

fn version_link(site: &SiteView, version: &Version) -> Link {
    site.link(
        &detail_route(EntityKind::Version, &version.version),
        &heading(version),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::site;
    use abysslab_core::models::DateRange;
    use chrono::NaiveDate;

    fn version(id: &str, previous: Option<&str>, next: Option<&str>) -> Version {
        Version {
            version: id.to_string(),
            name: "Everlasting Flames".to_string(),
            duration: DateRange {
                start: NaiveDate::from_ymd_opt(2021, 9, 9).unwrap(),
                end: None,
            },
            new_battlesuits: Vec::new(),
            new_weapons: Vec::new(),
            new_stigmata_sets: Vec::new(),
            previous_version: previous.map(str::to_string),
            next_version: next.map(str::to_string),
        }
    }

    fn props(version: Version) -> VersionProps {
        VersionProps {
            version,
            new_battlesuits: Vec::new(),
            new_weapons: Vec::new(),
            new_stigmata_sets: Vec::new(),
        }
    }

    #[test]
    fn latest_version_links_back_only() -> askama::Result<()> {
        let page = VersionPage::detail(site(), &props(version("5.1", Some("5"), None)));
        let html = page.render()?;

        assert!(html.contains("href=\"/honkai3rd/versions/5\""));
        assert!(html.contains("Previous (v5)"));
        assert!(!html.contains("Next (v"));
        assert!(html.contains("Sep 9, 2021 - "));
        Ok(())
    }

    #[test]
    fn landing_page_marks_current_and_lists_versions() -> askama::Result<()> {
        let current = version("5.1", Some("5"), None);
        let props = GameIndexProps {
            current: props(current.clone()),
            versions: vec![current, version("5", None, Some("5.1"))],
        };

        let page = VersionPage::index(site(), &props);
        assert_eq!(page.head.title, "Honkai 3rd - Abyss Lab");
        let html = page.render()?;
        assert!(html.contains("v5.1 : Everlasting Flames"));
        assert!(html.contains("(Current)"));
        assert!(html.contains("href=\"/honkai3rd/versions/5.1\""));
        assert!(html.contains("href=\"/honkai3rd/versions/5\""));
        assert!(html.contains("Previous (v5)"));
        assert!(!html.contains("Next (v"));
        assert!(!html.contains("New Battlesuits"));
        Ok(())
    }
}
