use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{de as helpers, Record};
use crate::store::EntityKind;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `[start, end]` of a version; `end` is `null` while the version is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day.
    pub start: NaiveDate,
    /// Last day, if known.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Human-readable range such as `Jan 5, 2023 - Feb 16, 2023`.
    pub fn display(&self) -> String {
        let end = self
            .end
            .map(|end| format_date(&end))
            .unwrap_or_default();
        format!("{} - {}", format_date(&self.start), end)
    }
}

/// Medium-length date such as `Jan 5, 2023`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (
            self.start.format(DATE_FORMAT).to_string(),
            self.end.map(|end| end.format(DATE_FORMAT).to_string()),
        )
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end): (String, Option<String>) = Deserialize::deserialize(deserializer)?;
        let start = helpers::parse_date(&start).map_err(de::Error::custom)?;
        let end = end
            .as_deref()
            .map(helpers::parse_date)
            .transpose()
            .map_err(de::Error::custom)?;
        Ok(Self { start, end })
    }
}

/// A content release and what it added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Version number, which is also its id.
    #[serde(deserialize_with = "helpers::string_or_number")]
    pub version: String,
    /// Patch title.
    pub name: String,
    /// Days the version ran.
    pub duration: DateRange,
    /// Battlesuit ids released in this version.
    #[serde(default)]
    pub new_battlesuits: Vec<String>,
    /// Weapon ids released in this version.
    #[serde(default)]
    pub new_weapons: Vec<String>,
    /// Stigmata set ids released in this version.
    #[serde(default)]
    pub new_stigmata_sets: Vec<String>,
    /// Version before this one.
    #[serde(
        default,
        deserialize_with = "helpers::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_version: Option<String>,
    /// Version after this one.
    #[serde(
        default,
        deserialize_with = "helpers::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_version: Option<String>,
}

impl Record for Version {
    const KIND: EntityKind = EntityKind::Version;

    fn id(&self) -> &str {
        &self.version
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(end) = self.duration.end {
            if end < self.duration.start {
                return Err(format!(
                    "version {} ends before it starts",
                    self.version
                ));
            }
        }
        if self.previous_version.as_deref() == Some(self.version.as_str())
            || self.next_version.as_deref() == Some(self.version.as_str())
        {
            return Err(format!("version {} links to itself", self.version));
        }
        Ok(())
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        let battlesuits = self
            .new_battlesuits
            .iter()
            .map(|id| (EntityKind::Battlesuit, id.as_str()));
        let weapons = self
            .new_weapons
            .iter()
            .map(|id| (EntityKind::Weapon, id.as_str()));
        let sets = self
            .new_stigmata_sets
            .iter()
            .map(|id| (EntityKind::StigmataSet, id.as_str()));
        let links = self
            .previous_version
            .iter()
            .chain(self.next_version.iter())
            .map(|id| (EntityKind::Version, id.as_str()));
        battlesuits.chain(weapons).chain(sets).chain(links).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_links_and_open_range() {
        let version: Version = serde_yaml::from_str(
            r#"
version: 6
name: Ongoing
duration: ["2023-01-05", null]
newWeapons: [w1]
previousVersion: 5
nextVersion: null
"#,
        )
        .unwrap();
        assert_eq!(version.version, "6");
        assert_eq!(version.previous_version.as_deref(), Some("5"));
        assert_eq!(version.next_version, None);
        assert_eq!(version.duration.end, None);
        assert_eq!(version.duration.display(), "Jan 5, 2023 - ");
        assert!(version.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let version: Version = serde_yaml::from_str(
            "version: '1.0'\nname: Broken\nduration: ['2023-02-01', '2023-01-01']\n",
        )
        .unwrap();
        assert!(version.validate().is_err());
    }

    #[test]
    fn date_range_round_trips_through_yaml() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 2, 16),
        };
        let yaml = serde_yaml::to_string(&range).unwrap();
        let decoded: DateRange = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(decoded, range);
        assert_eq!(range.display(), "Jan 5, 2023 - Feb 16, 2023");
    }
}
