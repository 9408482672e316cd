//! Static site generation: enumerate routes, assemble props, render and write pages.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use abysslab_core::{
    manifest::manifest_path, BuildManifest, DataResult, Dataset, EntityKind, SiteConfig,
};
use anyhow::{Context, Result};
use askama::Template;
use chrono::Utc;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    props,
    views::{
        detail_route, elysian_route, section_route, sigils_route, supports_route, BattlesuitPage,
        CatalogPage, ElfPage, ElysianPage, ErBattlesuitPage, ErTablePage, LandingPage, SiteView,
        StigmaPage, StigmataSetPage, VersionPage, WeaponPage, GAME_ROOT,
    },
};

const PAGE_FILE: &str = "index.html";
const PROPS_FILE: &str = "props.json";

/// A page of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    GameIndex,
    Elysian,
    ErSupports,
    ErSigils,
    Catalog(EntityKind),
    Detail(EntityKind, String),
}

impl Route {
    /// URL path of the page, without locale prefix.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::GameIndex => GAME_ROOT.to_string(),
            Route::Elysian => elysian_route(),
            Route::ErSupports => supports_route(),
            Route::ErSigils => sigils_route(),
            Route::Catalog(kind) => section_route(*kind),
            Route::Detail(kind, id) => detail_route(*kind, id),
        }
    }
}

/// Every page of one locale, detail pages in catalog order.
pub fn routes(dataset: &Dataset, locale: Option<&str>) -> DataResult<Vec<Route>> {
    let mut routes = vec![
        Route::Landing,
        Route::GameIndex,
        Route::Elysian,
        Route::ErSupports,
        Route::ErSigils,
    ];
    for kind in EntityKind::ALL {
        // The Elysian Realm page doubles as the list of its battlesuits.
        if kind != EntityKind::ErBattlesuit {
            routes.push(Route::Catalog(kind));
        }
        let catalog = props::load_catalog(dataset, kind, locale)?;
        routes.extend(
            catalog
                .items
                .into_iter()
                .map(|item| Route::Detail(kind, item.id)),
        );
    }
    Ok(routes)
}

/// `prefix` + `path`, collapsing the root of a prefixed locale to the prefix itself.
pub fn public_route(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path) {
        (false, "/") => prefix.to_string(),
        _ => format!("{prefix}{path}"),
    }
}

/// Directory receiving the files of `route`.
pub fn route_dir(out_dir: &Path, route: &str) -> PathBuf {
    out_dir.join(route.trim_start_matches('/'))
}

struct Rendered {
    html: String,
    props: Option<String>,
}

/// Renders the whole site from one dataset.
pub struct SiteGenerator {
    config: SiteConfig,
    dataset: Dataset,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        let dataset = Dataset::from_config(&config);
        Self { config, dataset }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build every page of every configured locale.
    ///
    /// Any page failing to load or render fails the build. Pages written by
    /// the previous build that no longer exist are removed.
    pub fn build(&self) -> Result<BuildManifest> {
        let started = Instant::now();
        let out_dir = &self.config.out_dir;
        let previous = BuildManifest::load(manifest_path(out_dir))?;

        let mut written = Vec::new();
        for locale in self.config.build_locales() {
            let locale = locale.as_deref();
            let label = locale.unwrap_or("default");
            let site = SiteView::new(&self.config, locale);
            let routes = routes(&self.dataset, locale)
                .with_context(|| format!("failed to enumerate pages for locale {label}"))?;
            info!(locale = label, pages = routes.len(), "rendering pages");

            let paths = routes
                .par_iter()
                .map(|route| {
                    let path = public_route(&site.prefix, &route.path());
                    self.write_page(&site, route, locale, &path)
                        .with_context(|| format!("failed to build page {path}"))?;
                    Ok(path)
                })
                .collect::<Result<Vec<_>>>()?;
            written.extend(paths);
        }
        written.sort();
        written.dedup();

        let manifest = BuildManifest {
            data_dir: self.config.data_dir.clone(),
            generated_at: Some(Utc::now()),
            routes: written,
        };
        if let Some(previous) = previous {
            self.prune(&manifest, &previous)?;
        }
        manifest.persist(manifest_path(out_dir))?;

        info!(
            pages = manifest.routes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built site into {}",
            out_dir.display()
        );
        Ok(manifest)
    }

    fn write_page(
        &self,
        site: &SiteView,
        route: &Route,
        locale: Option<&str>,
        path: &str,
    ) -> Result<()> {
        let rendered = self.render(site.clone(), route, locale)?;
        let dir = route_dir(&self.config.out_dir, path);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let page = dir.join(PAGE_FILE);
        fs::write(&page, rendered.html)
            .with_context(|| format!("failed to write {}", page.display()))?;
        if let Some(props) = rendered.props {
            let file = dir.join(PROPS_FILE);
            fs::write(&file, props)
                .with_context(|| format!("failed to write {}", file.display()))?;
        }
        debug!("wrote {path}");
        Ok(())
    }

    fn render(&self, site: SiteView, route: &Route, locale: Option<&str>) -> Result<Rendered> {
        let dataset = &self.dataset;
        let emit = self.config.emit_props;
        match route {
            Route::Landing => page((), emit, |_| LandingPage::new(site)),
            Route::GameIndex => page(props::load_game_index(dataset, locale)?, emit, |props| {
                VersionPage::index(site, props)
            }),
            Route::Elysian => page(props::load_elysian_index(dataset, locale)?, emit, |props| {
                ElysianPage::new(site, props)
            }),
            Route::ErSupports => page(props::load_er_supports(dataset, locale)?, emit, |props| {
                ErTablePage::supports(site, props)
            }),
            Route::ErSigils => page(props::load_er_sigils(dataset, locale)?, emit, |props| {
                ErTablePage::sigils(site, props)
            }),
            Route::Catalog(kind) => page(props::load_catalog(dataset, *kind, locale)?, emit, |props| {
                CatalogPage::new(site, props)
            }),
            Route::Detail(kind, id) => match kind {
                EntityKind::Battlesuit => page(props::load_battlesuit(dataset, id, locale)?, emit, |props| {
                    BattlesuitPage::new(site, props)
                }),
                EntityKind::Weapon => page(props::load_weapon(dataset, id, locale)?, emit, |props| {
                    WeaponPage::new(site, props)
                }),
                EntityKind::Stigma => page(props::load_stigma(dataset, id, locale)?, emit, |props| {
                    StigmaPage::new(site, props)
                }),
                EntityKind::StigmataSet => page(props::load_stigmata_set(dataset, id, locale)?, emit, |props| {
                    StigmataSetPage::new(site, props)
                }),
                EntityKind::Elf => page(props::load_elf(dataset, id, locale)?, emit, |props| {
                    ElfPage::new(site, props)
                }),
                EntityKind::Version => page(props::load_version(dataset, id, locale)?, emit, |props| {
                    VersionPage::detail(site, props)
                }),
                EntityKind::ErBattlesuit => page(props::load_er_battlesuit(dataset, id, locale)?, emit, |props| {
                    ErBattlesuitPage::new(site, props)
                }),
            },
        }
    }

    /// Delete pages the previous build wrote and this one did not.
    fn prune(&self, manifest: &BuildManifest, previous: &BuildManifest) -> Result<()> {
        for route in manifest.stale_routes(previous) {
            let dir = route_dir(&self.config.out_dir, route);
            for file in [PAGE_FILE, PROPS_FILE] {
                let path = dir.join(file);
                if path.exists() {
                    fs::remove_file(&path)
                        .with_context(|| format!("failed to remove {}", path.display()))?;
                }
            }
            // Only succeeds once the directory holds no other pages.
            if fs::remove_dir(&dir).is_ok() {
                debug!("removed {}", dir.display());
            }
            warn!("removed stale page {route}");
        }
        Ok(())
    }
}

fn page<P, T>(props: P, emit_props: bool, view: impl FnOnce(&P) -> T) -> Result<Rendered>
where
    P: Serialize,
    T: Template,
{
    let html = view(&props).render()?;
    let props = if emit_props {
        Some(serde_json::to_string_pretty(&props).context("failed to serialize page props")?)
    } else {
        None
    };
    Ok(Rendered { html, props })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abysslab_core::{models::CatalogItem, scaffold, FileStore};
    use tempfile::tempdir;

    fn sample_config(root: &Path) -> Result<SiteConfig> {
        let config = SiteConfig {
            data_dir: root.join("data"),
            out_dir: root.join("public"),
            ..SiteConfig::default()
        };
        scaffold::write_sample_dataset(&FileStore::new(&config.data_dir))?;
        Ok(config)
    }

    #[test]
    fn routes_cover_every_catalog_entry() -> Result<()> {
        let dir = tempdir()?;
        let config = sample_config(dir.path())?;
        let dataset = Dataset::from_config(&config);

        let paths: Vec<_> = routes(&dataset, None)?.iter().map(Route::path).collect();
        for expected in [
            "/",
            "/honkai3rd",
            "/honkai3rd/weapons",
            "/honkai3rd/weapons/ember-blaze-pri",
            "/honkai3rd/battlesuits/hot",
            "/honkai3rd/stigmata/flamescion-b",
            "/honkai3rd/stigmata-sets/flamescion",
            "/honkai3rd/elfs/bella",
            "/honkai3rd/versions/6.1",
            "/honkai3rd/elysian-realm",
            "/honkai3rd/elysian-realm/sigils",
            "/honkai3rd/elysian-realm/battlesuits/er-hofs",
        ] {
            assert!(paths.iter().any(|path| path == expected), "missing {expected}");
        }
        assert!(!paths.iter().any(|path| path == "/honkai3rd/elysian-realm/battlesuits"));
        Ok(())
    }

    #[test]
    fn build_writes_pages_and_manifest() -> Result<()> {
        let dir = tempdir()?;
        let mut config = sample_config(dir.path())?;
        config.emit_props = true;
        let out = config.out_dir.clone();

        let manifest = SiteGenerator::new(config).build()?;
        assert!(manifest.routes.windows(2).all(|pair| pair[0] < pair[1]));

        let weapon = fs::read_to_string(out.join("honkai3rd/weapons/ember-blaze/index.html"))?;
        assert!(weapon.contains("ATK : 600 / CRT : 80"));
        assert!(weapon.contains("Best on"));

        let props: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("honkai3rd/weapons/ember-blaze/props.json"))?)?;
        assert!(props["battlesuitMap"]["hofs"].is_object());

        let index = fs::read_to_string(out.join("honkai3rd/index.html"))?;
        assert!(index.contains("v6.2 : Flames of Dawn"));
        assert!(out.join("index.html").exists());
        assert!(BuildManifest::load(manifest_path(&out))?.is_some());
        Ok(())
    }

    #[test]
    fn minimal_weapon_file_builds_a_bare_page() -> Result<()> {
        let dir = tempdir()?;
        let config = sample_config(dir.path())?;
        let out = config.out_dir.clone();
        let store = FileStore::new(&config.data_dir);

        let catalog = store.catalog_path(EntityKind::Weapon, None)?;
        let mut rows: Vec<CatalogItem> = store.read_yaml(&catalog)?;
        rows.push(CatalogItem {
            id: "w1".to_string(),
            name: "Sword".to_string(),
            full_name: None,
            thumbnail: None,
        });
        store.write_yaml(&catalog, &rows)?;
        fs::write(
            store.detail_path(EntityKind::Weapon, "w1", None)?,
            "{id: w1, name: Sword, atk: 100, crt: 5, skills: []}",
        )?;

        SiteGenerator::new(config).build()?;
        let html = fs::read_to_string(out.join("honkai3rd/weapons/w1/index.html"))?;
        assert!(html.contains("<h1>Sword</h1>"));
        assert!(html.contains("ATK : 100 / CRT : 5"));
        assert!(!html.contains("class=\"skill\""));
        assert!(!html.contains("Best on"));
        Ok(())
    }

    #[test]
    fn locales_write_prefixed_trees() -> Result<()> {
        let dir = tempdir()?;
        let mut config = sample_config(dir.path())?;
        config.locales = vec!["en-US".to_string(), "ko-KR".to_string()];
        config.default_locale = Some("en-US".to_string());
        let out = config.out_dir.clone();

        let manifest = SiteGenerator::new(config).build()?;
        assert!(out.join("honkai3rd/elfs/bella/index.html").exists());
        assert!(out.join("ko-KR/index.html").exists());
        assert!(out.join("ko-KR/honkai3rd/elfs/bella/index.html").exists());
        assert!(manifest.routes.iter().any(|route| route == "/ko-KR"));
        Ok(())
    }

    #[test]
    fn rebuild_removes_pages_of_deleted_entries() -> Result<()> {
        let dir = tempdir()?;
        let config = sample_config(dir.path())?;
        let out = config.out_dir.clone();
        let store = FileStore::new(&config.data_dir);
        let generator = SiteGenerator::new(config);
        generator.build()?;
        assert!(out.join("honkai3rd/elfs/bella/index.html").exists());

        let catalog = store.catalog_path(EntityKind::Elf, None)?;
        fs::write(&catalog, "[]\n")?;
        generator.build()?;
        assert!(!out.join("honkai3rd/elfs/bella/index.html").exists());
        assert!(out.join("honkai3rd/elfs/index.html").exists());
        Ok(())
    }

    #[test]
    fn missing_detail_file_fails_the_build() -> Result<()> {
        let dir = tempdir()?;
        let config = sample_config(dir.path())?;
        let store = FileStore::new(&config.data_dir);
        fs::remove_file(store.detail_path(EntityKind::Weapon, "thunder-edge", None)?)?;

        let err = SiteGenerator::new(config).build().unwrap_err();
        assert!(format!("{err:#}").contains("/honkai3rd/weapons/thunder-edge"));
        Ok(())
    }
}
