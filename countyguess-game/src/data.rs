//! County dataset: GeoJSON feature properties resolved into typed records.
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

const DEFAULT_DATASET: &str =
    include_str!("../../countyguess-web/static/assets/data/ireland-counties.geojson");

/// Canonical county identifier. The partitioned schema numbers its counties,
/// the majority schema uses administrative codes such as `IRL.6_1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountyId {
    Numeric(u32),
    Code(String),
}

impl fmt::Display for CountyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Code(code) => f.write_str(code),
        }
    }
}

impl From<u32> for CountyId {
    fn from(value: u32) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for CountyId {
    fn from(value: &str) -> Self {
        Self::Code(value.to_string())
    }
}

/// One county, resolved once at load time from whichever schema its feature uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CountyRecord {
    /// Northern Ireland schema: numeric id and a single upper-case name.
    Partitioned { id: CountyId, name: String },
    /// Majority schema: code id with English and Irish names.
    Standard {
        id: CountyId,
        name_en: String,
        name_ga: String,
    },
}

impl CountyRecord {
    #[must_use]
    pub const fn id(&self) -> &CountyId {
        match self {
            Self::Partitioned { id, .. } | Self::Standard { id, .. } => id,
        }
    }

    #[must_use]
    pub const fn is_partitioned(&self) -> bool {
        matches!(self, Self::Partitioned { .. })
    }

    /// Name a guess is compared against, before normalization. Partitioned
    /// counties carry one name regardless of locale.
    #[must_use]
    pub fn comparison_name(&self, locale: Locale) -> &str {
        match self {
            Self::Partitioned { name, .. } => name,
            Self::Standard { name_en, .. } if !locale.is_irish() => name_en,
            Self::Standard { name_ga, .. } => name_ga,
        }
    }

    /// Name shown to the player once the county has been guessed.
    #[must_use]
    pub fn display_name(&self, locale: Locale) -> String {
        match self {
            Self::Partitioned { name, .. } => title_case(name),
            Self::Standard { .. } => self.comparison_name(locale).to_string(),
        }
    }
}

/// `DERRY - LONDONDERRY` becomes `Derry - Londonderry`.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = ch.is_whitespace() || ch == '-';
        }
    }
    out
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset is not a valid feature collection: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feature {index} matches neither county schema")]
    UnrecognizedFeature { index: usize },
    #[error("county id {0} appears more than once")]
    DuplicateId(CountyId),
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(rename = "GID_1", default)]
    gid: Option<String>,
    #[serde(rename = "NAME_1", default)]
    name_en: Option<String>,
    #[serde(rename = "VARNAME_1", default)]
    name_ga: Option<String>,
    #[serde(rename = "COUNTY_ID", default)]
    county_id: Option<u32>,
    #[serde(rename = "CountyName", default)]
    county_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<FeatureProperties>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FeatureProperties {
    fn into_record(self) -> Option<CountyRecord> {
        if let (Some(id), Some(name)) = (self.county_id, non_empty(self.county_name)) {
            return Some(CountyRecord::Partitioned {
                id: CountyId::Numeric(id),
                name,
            });
        }
        let id = non_empty(self.gid)?;
        let name_en = non_empty(self.name_en)?;
        // Variant names are pipe-separated; the first is the Irish form.
        let name_ga = non_empty(self.name_ga)
            .and_then(|v| non_empty(v.split('|').next().map(str::to_string)))
            .unwrap_or_else(|| name_en.clone());
        Some(CountyRecord::Standard {
            id: CountyId::Code(id),
            name_en,
            name_ga,
        })
    }
}

/// Immutable list of counties in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountyDataset {
    counties: Vec<CountyRecord>,
}

impl CountyDataset {
    /// Create an empty dataset (useful for tests and before the fetch resolves)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counties: Vec::new(),
        }
    }

    /// Build a dataset from already-resolved records.
    ///
    /// # Errors
    ///
    /// Returns an error if two records share an id.
    pub fn from_records(counties: Vec<CountyRecord>) -> Result<Self, DatasetError> {
        let mut seen = BTreeSet::new();
        for county in &counties {
            if !seen.insert(county.id()) {
                return Err(DatasetError::DuplicateId(county.id().clone()));
            }
        }
        Ok(Self { counties })
    }

    /// Parse a GeoJSON feature collection, resolving each feature's schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a feature fits neither
    /// schema, or an id is repeated.
    pub fn from_geojson(json: &str) -> Result<Self, DatasetError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let records = collection
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| {
                feature
                    .properties
                    .unwrap_or_default()
                    .into_record()
                    .ok_or(DatasetError::UnrecognizedFeature { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let dataset = Self::from_records(records)?;
        log::debug!("loaded county dataset with {} features", dataset.len());
        Ok(dataset)
    }

    /// Dataset bundled with the web assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn load_from_static() -> Result<Self, DatasetError> {
        Self::from_geojson(DEFAULT_DATASET)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.counties.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountyRecord> {
        self.counties.iter()
    }

    #[must_use]
    pub fn counties(&self) -> &[CountyRecord] {
        &self.counties
    }

    #[must_use]
    pub fn get(&self, id: &CountyId) -> Option<&CountyRecord> {
        self.counties.iter().find(|county| county.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CountyId) -> bool {
        self.get(id).is_some()
    }
}
