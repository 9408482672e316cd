use serde::{Deserialize, Serialize};

use super::de;

/// One row of a catalog file, enough to render a list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Id of the detail record; version catalogs call it `version`.
    #[serde(alias = "version", deserialize_with = "de::string_or_number")]
    pub id: String,
    /// Short name.
    pub name: String,
    /// Longer label preferred for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Asset key of the thumbnail; the id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl CatalogItem {
    /// Label shown under the thumbnail.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => &self.name,
        }
    }

    /// Asset key used to build the thumbnail URL.
    pub fn thumbnail_key(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_rows_use_version_as_id() {
        let rows: Vec<CatalogItem> = serde_yaml::from_str(
            "- version: 6.2\n  name: Chasing Shadows\n- version: \"6.10\"\n  name: Later\n",
        )
        .unwrap();
        assert_eq!(rows[0].id, "6.2");
        assert_eq!(rows[1].id, "6.10");
    }

    #[test]
    fn full_name_is_preferred_for_display() {
        let row: CatalogItem = serde_yaml::from_str(
            "id: kiana-hoh\nname: Herrscher of Flamescion\nfullName: Kiana - Herrscher of Flamescion\n",
        )
        .unwrap();
        assert_eq!(row.display_name(), "Kiana - Herrscher of Flamescion");
        assert_eq!(row.thumbnail_key(), "kiana-hoh");
    }
}
