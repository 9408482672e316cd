use std::collections::BTreeMap;

use abysslab_core::{
    models::{Stigma, StigmataSet},
    DataResult, Dataset,
};
use serde::Serialize;

use super::sorted;

#[derive(Debug, Clone, Serialize)]
pub struct StigmaProps {
    pub stigma: Stigma,
    /// The set the piece belongs to, when it exists.
    pub set: Option<StigmataSet>,
}

pub fn load_stigma(dataset: &Dataset, stigma_id: &str, locale: Option<&str>) -> DataResult<StigmaProps> {
    let stigma = dataset.stigmata().get_by_id(stigma_id, locale)?;
    let set = match stigma.set.as_deref() {
        Some(set_id) => dataset.stigmata_sets().find_by_id(set_id, locale)?,
        None => None,
    };
    Ok(StigmaProps { stigma, set })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StigmataSetProps {
    pub set: StigmataSet,
    pub stigma_map: BTreeMap<String, Stigma>,
}

pub fn load_stigmata_set(
    dataset: &Dataset,
    set_id: &str,
    locale: Option<&str>,
) -> DataResult<StigmataSetProps> {
    let set = dataset.stigmata_sets().get_by_id(set_id, locale)?;
    let stigma_map = dataset.stigmata().get_map_by_ids(&set.stigmata, locale)?;
    Ok(StigmataSetProps {
        stigma_map: sorted(stigma_map),
        set,
    })
}
