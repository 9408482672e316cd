use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Int(int) => int.to_string(),
            Scalar::Float(float) => float.to_string(),
        }
    }
}

/// Accept `6.2`, `6` or `"6.2"` as a string id.
///
/// Unquoted YAML floats lose trailing zeros (`6.10` reads as `6.1`), so
/// such versions have to be quoted in the data files.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

/// Optional form of [`string_or_number`].
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// Parse `2023-01-05` or a full RFC 3339 timestamp down to its date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid date '{raw}'"))
}
