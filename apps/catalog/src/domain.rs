use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Tag that marks a product as a limited-time item regardless of fish biology.
pub const SEASONAL_MARKER: &str = "#季節限定";

/// Peak season values that mean "no particular season".
pub const YEAR_ROUND_SENTINELS: [&str; 3] = ["全年", "不分", "隨魚種而異"];

/// One product record from `products.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(rename = "Category", default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "Price", default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(rename = "Specifications", default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cba: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,
    #[serde(default)]
    pub related_fish_id: Option<String>,
}

impl Product {
    pub fn has_seasonal_marker(&self) -> bool {
        self.tags.contains(SEASONAL_MARKER)
    }

    /// Description when present and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One fish record from `fish-database.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fish {
    pub fish_id: String,
    #[serde(rename = "peakSeason", default)]
    pub peak_season: Option<String>,
}

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Price as the source data gives it: a JSON number or a string.
///
/// Whole-valued floats such as `380.0` or `1e3` are read as integers, so they
/// print as `380` the way a browser prints the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    #[serde(deserialize_with = "whole_number")]
    Number(serde_json::Number),
    Text(String),
}

fn whole_number<'de, D>(deserializer: D) -> Result<serde_json::Number, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    match number.as_f64() {
        Some(value)
            if number.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER =>
        {
            #[allow(clippy::cast_possible_truncation)]
            Ok(serde_json::Number::from(value as i64))
        }
        _ => Ok(number),
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Product tags. The data normally carries a list, older rows a single string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Text(String),
}

impl Default for Tags {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Tags {
    /// Whole-tag match for lists, substring match for a single string.
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            Self::List(tags) => tags.iter().any(|candidate| candidate == tag),
            Self::Text(text) => text.contains(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Substring that names this season inside a peak season description.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Spring => "春季",
            Self::Summer => "夏季",
            Self::Autumn => "秋季",
            Self::Winter => "冬季",
        }
    }

    pub const fn months(self) -> [u32; 3] {
        match self {
            Self::Spring => [3, 4, 5],
            Self::Summer => [6, 7, 8],
            Self::Autumn => [9, 10, 11],
            Self::Winter => [12, 1, 2],
        }
    }

    pub fn contains_month(self, month: u32) -> bool {
        self.months().contains(&month)
    }
}
