//! Presentation layer.
//!
//! Page structs are plain view models rendered by askama templates. All
//! cross-reference lookups happen while building them, so a reference missing
//! from a props map simply produces no card.

mod battlesuit;
mod catalog;
mod elysian;
mod stigmata;
mod version;
mod weapon;

use abysslab_core::{
    models::{Battlesuit, Skill, StigmataSet, Weapon},
    EntityKind, SiteConfig,
};

pub use battlesuit::BattlesuitPage;
pub use catalog::{CatalogPage, ElfPage, LandingPage};
pub use elysian::{ElysianPage, ErBattlesuitPage, ErTablePage};
pub use stigmata::{StigmaPage, StigmataSetPage};
pub use version::VersionPage;
pub use weapon::WeaponPage;

/// Route of the game section every page lives under.
pub const GAME_ROOT: &str = "/honkai3rd";

const GAME_NAME: &str = "Honkai 3rd";

/// Site-wide values shared by every page of one locale.
#[derive(Debug, Clone)]
pub struct SiteView {
    pub title: String,
    pub lang: String,
    pub assets_base_url: String,
    pub prefix: String,
    pub nav: Vec<Link>,
}

impl SiteView {
    pub fn new(config: &SiteConfig, locale: Option<&str>) -> Self {
        let mut site = Self {
            title: config.site_title.clone(),
            lang: locale.unwrap_or("en-US").to_string(),
            assets_base_url: config.assets_base_url.trim_end_matches('/').to_string(),
            prefix: config.locale_prefix(locale),
            nav: Vec::new(),
        };
        site.nav = vec![
            site.link(GAME_ROOT, GAME_NAME),
            site.link(&section_route(EntityKind::Battlesuit), "Battlesuits"),
            site.link(&section_route(EntityKind::Weapon), "Weapons"),
            site.link(&section_route(EntityKind::Stigma), "Stigmata"),
            site.link(&section_route(EntityKind::Elf), "ELFs"),
            site.link(&elysian_route(), "Elysian Realm"),
            site.link(&section_route(EntityKind::Version), "Versions"),
        ];
        site
    }

    /// Locale-prefixed href for a site route.
    pub fn href(&self, route: &str) -> String {
        format!("{}{}", self.prefix, route)
    }

    pub fn link(&self, route: &str, label: &str) -> Link {
        Link {
            href: self.href(route),
            label: label.to_string(),
        }
    }

    /// URL of a hosted game image.
    pub fn asset(&self, key: &str) -> String {
        format!("{}/honkai3rd/{key}.png", self.assets_base_url)
    }

    /// `<page> - Honkai 3rd - <site>` page title.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} - {GAME_NAME} - {}", self.title)
    }

    /// Breadcrumbs from the game root down to `section`.
    pub fn crumbs(&self, section: Option<(&str, &str)>) -> Vec<Link> {
        let mut crumbs = vec![self.link(GAME_ROOT, GAME_NAME)];
        if let Some((route, label)) = section {
            crumbs.push(self.link(route, label));
        }
        crumbs
    }
}

/// Route segment of each entity kind below [`GAME_ROOT`].
pub fn section(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ErBattlesuit => "elysian-realm/battlesuits",
        other => other.detail_dir(),
    }
}

pub fn section_route(kind: EntityKind) -> String {
    format!("{GAME_ROOT}/{}", section(kind))
}

pub fn detail_route(kind: EntityKind, id: &str) -> String {
    format!("{}/{id}", section_route(kind))
}

pub fn elysian_route() -> String {
    format!("{GAME_ROOT}/elysian-realm")
}

pub fn supports_route() -> String {
    format!("{}/supports", elysian_route())
}

pub fn sigils_route() -> String {
    format!("{}/sigils", elysian_route())
}

/// Folder of the hosted images for each kind.
fn asset_dir(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ErBattlesuit => "battlesuits",
        other => other.detail_dir(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub title: String,
    pub description: String,
}

/// Thumbnail link to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub href: String,
    pub image: String,
    pub label: String,
}

impl Card {
    pub fn new(site: &SiteView, kind: EntityKind, id: &str, image_key: &str, label: &str) -> Self {
        Self {
            href: site.href(&detail_route(kind, id)),
            image: site.asset(&format!("{}/{image_key}", asset_dir(kind))),
            label: label.to_string(),
        }
    }

    pub fn battlesuit(site: &SiteView, battlesuit: &Battlesuit) -> Self {
        Self::new(
            site,
            EntityKind::Battlesuit,
            &battlesuit.id,
            &battlesuit.id,
            &battlesuit.full_name,
        )
    }

    pub fn weapon(site: &SiteView, weapon: &Weapon) -> Self {
        Self::new(site, EntityKind::Weapon, &weapon.id, &weapon.id, &weapon.name)
    }

    pub fn stigmata_set(site: &SiteView, set: &StigmataSet) -> Self {
        Self::new(site, EntityKind::StigmataSet, &set.id, &set.id, &set.name)
    }
}

/// Skill name and description card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillView {
    pub name: String,
    pub description: String,
}

impl From<&Skill> for SkillView {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
        }
    }
}

pub(crate) fn skill_views(skills: &[Skill]) -> Vec<SkillView> {
    skills.iter().map(SkillView::from).collect()
}

pub(crate) fn stars(rarity: u8) -> String {
    "⭐".repeat(usize::from(rarity))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn site() -> SiteView {
        SiteView::new(&SiteConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_default_locales_are_prefixed() {
        let config = SiteConfig {
            locales: vec!["en-US".to_string(), "ko-KR".to_string()],
            default_locale: Some("en-US".to_string()),
            ..SiteConfig::default()
        };

        let korean = SiteView::new(&config, Some("ko-KR"));
        assert_eq!(korean.href("/honkai3rd"), "/ko-KR/honkai3rd");
        let english = SiteView::new(&config, Some("en-US"));
        assert_eq!(english.href("/honkai3rd"), "/honkai3rd");
    }

    #[test]
    fn cards_point_at_detail_routes_and_assets() {
        let site = test_support::site();
        let card = Card::new(&site, EntityKind::ErBattlesuit, "er-hofs", "hofs", "HoFS");

        assert_eq!(card.href, "/honkai3rd/elysian-realm/battlesuits/er-hofs");
        assert_eq!(
            card.image,
            "https://assets.abyss-lab.app/honkai3rd/battlesuits/hofs.png"
        );
    }
}
