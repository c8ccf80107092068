use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use std::fs;
use thiserror::Error;

use crate::models::{DeviceSupport, Difficulty, RawRecipe, Recipe, ReviewStatus};

/// Dataset shipped inside the binary, used when no catalog file is configured.
const BUNDLED_RECIPES: &str = include_str!("../../data/recipes.yaml");

/// Errors that can occur while loading or ingesting a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Recipe #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Recipe #{index} has invalid `{field}`: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Where recipe records come from.
///
/// Sources hand back raw entries; validation happens in [`Catalog::ingest`].
pub trait RecipeSource {
    fn load(&self) -> Result<Vec<RawRecipe>, CatalogError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// The dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl RecipeSource for BundledCatalog {
    fn load(&self) -> Result<Vec<RawRecipe>, CatalogError> {
        parse_catalog(BUNDLED_RECIPES, &self.describe())
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

/// A YAML catalog file on disk. JSON files work too, since YAML parses them.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: Utf8PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecipeSource for FileCatalog {
    fn load(&self) -> Result<Vec<RawRecipe>, CatalogError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_catalog(&contents, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

fn parse_catalog(contents: &str, origin: &str) -> Result<Vec<RawRecipe>, CatalogError> {
    serde_yaml_ng::from_str(contents).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Outcome of ingesting raw entries: the accepted catalog plus every rejection.
#[derive(Debug)]
pub struct IngestReport {
    pub catalog: Catalog,
    pub rejected: Vec<CatalogError>,
}

/// Validated, read-only recipe collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Validate raw entries.
    ///
    /// An entry is rejected when its `id` or `name` is missing or blank, or
    /// when `cookingTime` is missing or negative. Everything else is coerced:
    /// unknown difficulty/device values become `None`, a missing cuisine
    /// becomes empty, missing ingredients become an empty list, and a missing
    /// status means `approved`.
    pub fn ingest(raw: Vec<RawRecipe>) -> IngestReport {
        let mut recipes = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();

        for (index, entry) in raw.into_iter().enumerate() {
            match validate(index, entry) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    tracing::warn!("Skipping catalog entry: {}", e);
                    rejected.push(e);
                }
            }
        }

        IngestReport {
            catalog: Catalog { recipes },
            rejected,
        }
    }

    /// Load and ingest everything `source` provides.
    pub fn load_from(source: &dyn RecipeSource) -> Result<IngestReport, CatalogError> {
        let raw = source.load()?;
        let total = raw.len();
        let report = Self::ingest(raw);

        tracing::info!(
            "Loaded {} of {} recipes from {} ({} rejected)",
            report.catalog.len(),
            total,
            source.describe(),
            report.rejected.len()
        );

        Ok(report)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct non-empty cuisines in first-seen order, for the cuisine selector.
    pub fn cuisines(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .map(|recipe| recipe.cuisine.as_str())
            .filter(|cuisine| !cuisine.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

fn validate(index: usize, raw: RawRecipe) -> Result<Recipe, CatalogError> {
    let id = raw
        .id
        .map(|id| id.to_string())
        .filter(|id| !id.trim().is_empty())
        .ok_or(CatalogError::MissingField { index, field: "id" })?;

    let name = raw
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or(CatalogError::MissingField {
            index,
            field: "name",
        })?;

    let minutes = raw.cooking_time.ok_or(CatalogError::MissingField {
        index,
        field: "cookingTime",
    })?;
    let cooking_time = u32::try_from(minutes).map_err(|_| CatalogError::InvalidField {
        index,
        field: "cookingTime",
        reason: format!("{} is not a valid number of minutes", minutes),
    })?;

    let difficulty = raw
        .difficulty
        .as_deref()
        .and_then(|value| coerce::<Difficulty>(index, "difficulty", value));
    let device_support = raw
        .device_support
        .as_deref()
        .and_then(|value| coerce::<DeviceSupport>(index, "deviceSupport", value));
    let status = raw
        .status
        .as_deref()
        .and_then(|value| coerce::<ReviewStatus>(index, "status", value))
        .unwrap_or_default();

    Ok(Recipe {
        id,
        name,
        cuisine: raw.cuisine.unwrap_or_default(),
        ingredients: raw.ingredients.unwrap_or_default(),
        cooking_time,
        difficulty,
        device_support,
        status,
    })
}

fn coerce<T>(index: usize, field: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!("Recipe #{}: dropping {} ({})", index, field, e);
            None
        }
    }
}
