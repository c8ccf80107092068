use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::FilterError;

/// Recipe difficulty as shown on the difficulty selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(FilterError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Device-compatibility tier of a recipe.
///
/// A recipe runs on the MoMe, on the Simmr, or on both devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceSupport {
    MoMe,
    Simmr,
    Both,
}

impl DeviceSupport {
    pub const ALL: [DeviceSupport; 3] =
        [DeviceSupport::MoMe, DeviceSupport::Simmr, DeviceSupport::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceSupport::MoMe => "MoMe",
            DeviceSupport::Simmr => "Simmr",
            DeviceSupport::Both => "Both",
        }
    }

    /// Whether a recipe tagged with `self` is shown when `selected` is the
    /// chosen device filter.
    ///
    /// `MoMe` and `Simmr` accept their own tier plus `Both`. Selecting `Both`
    /// only accepts recipes tagged `Both`.
    pub fn satisfies(&self, selected: DeviceSupport) -> bool {
        match selected {
            DeviceSupport::Both => *self == DeviceSupport::Both,
            DeviceSupport::MoMe => matches!(self, DeviceSupport::MoMe | DeviceSupport::Both),
            DeviceSupport::Simmr => matches!(self, DeviceSupport::Simmr | DeviceSupport::Both),
        }
    }
}

impl fmt::Display for DeviceSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DeviceSupport {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoMe" => Ok(DeviceSupport::MoMe),
            "Simmr" => Ok(DeviceSupport::Simmr),
            "Both" => Ok(DeviceSupport::Both),
            other => Err(FilterError::UnknownDevice(other.to_string())),
        }
    }
}

/// Moderation status of a recipe in the admin explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    Pending,
    #[default]
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(FilterError::UnknownStatus(other.to_string())),
        }
    }
}

/// A catalog recipe, validated at ingestion.
///
/// Fields the catalog may omit are coerced rather than left loose:
/// - `cuisine` becomes an empty string, which never equals a selected
///   cuisine and never contains a non-empty query
/// - `difficulty` and `device_support` become `None`, which never satisfies
///   an equality predicate
/// - `ingredients` becomes an empty list
///
/// See [`crate::services::catalog::Catalog::ingest`] for the rules that
/// reject an entry outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub difficulty: Option<Difficulty>,
    pub device_support: Option<DeviceSupport>,
    pub status: ReviewStatus,
}

impl Recipe {
    /// Build a fully specified recipe. Mostly useful for fixtures.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: Vec<String>,
        cooking_time: u32,
        difficulty: Difficulty,
        device_support: DeviceSupport,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            ingredients,
            cooking_time,
            difficulty: Some(difficulty),
            device_support: Some(device_support),
            status: ReviewStatus::Approved,
        }
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }
}

/// Recipe id as it appears in a catalog file: either text or a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// Loosely typed catalog entry, exactly as read from a catalog source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub cooking_time: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub device_support: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
