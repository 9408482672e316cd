use abysslab_core::{
    models::{Battlesuit, CatalogItem, ErBattlesuit, ErSigil, ErSignet, ErSupportBattlesuit},
    DataResult, Dataset,
};
use serde::Serialize;

/// Elysian Realm landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElysianIndexProps {
    pub er_battlesuits: Vec<CatalogItem>,
}

pub fn load_elysian_index(dataset: &Dataset, locale: Option<&str>) -> DataResult<ElysianIndexProps> {
    Ok(ElysianIndexProps {
        er_battlesuits: dataset.er_battlesuits().list(locale)?,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ErSupportsProps {
    pub supports: Vec<ErSupportBattlesuit>,
}

pub fn load_er_supports(dataset: &Dataset, locale: Option<&str>) -> DataResult<ErSupportsProps> {
    Ok(ErSupportsProps {
        supports: dataset.elysian().supports(locale)?,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ErSigilsProps {
    pub sigils: Vec<ErSigil>,
}

pub fn load_er_sigils(dataset: &Dataset, locale: Option<&str>) -> DataResult<ErSigilsProps> {
    Ok(ErSigilsProps {
        sigils: dataset.elysian().sigils(locale)?,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErBattlesuitProps {
    pub er_battlesuit: ErBattlesuit,
    /// The underlying battlesuit, absent when it is not in the dataset.
    pub battlesuit: Option<Battlesuit>,
    pub signets: Vec<ErSignet>,
}

pub fn load_er_battlesuit(
    dataset: &Dataset,
    er_battlesuit_id: &str,
    locale: Option<&str>,
) -> DataResult<ErBattlesuitProps> {
    let er_battlesuit = dataset.er_battlesuits().get_by_id(er_battlesuit_id, locale)?;
    let battlesuit = dataset
        .battlesuits()
        .find_by_id(&er_battlesuit.battlesuit, locale)?;
    let signets = dataset.elysian().signets_for(&er_battlesuit.id, locale)?;

    Ok(ErBattlesuitProps {
        er_battlesuit,
        battlesuit,
        signets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abysslab_core::{scaffold, FileStore};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn elysian_pages_load_their_tables() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path());
        scaffold::write_sample_dataset(&store)?;
        let dataset = Dataset::new(store);

        let props = load_er_battlesuit(&dataset, "er-hofs", None)?;
        assert_eq!(
            props.battlesuit.map(|b| b.id),
            Some("hofs".to_string())
        );
        assert_eq!(props.signets.len(), 2);

        let index = load_elysian_index(&dataset, None)?;
        assert_eq!(index.er_battlesuits.len(), 1);
        assert_eq!(load_er_supports(&dataset, None)?.supports[0].id, "support-bella");
        assert_eq!(load_er_sigils(&dataset, None)?.sigils[0].id, "forbidden-seed");
        Ok(())
    }
}
