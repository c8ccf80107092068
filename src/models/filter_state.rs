use thiserror::Error;

use super::{DeviceSupport, Difficulty};

/// Lower bound of the cooking-time slider, in minutes.
pub const COOKING_TIME_MIN: u32 = 0;

/// Upper bound of the cooking-time slider, in minutes.
pub const COOKING_TIME_MAX: u32 = 120;

/// Step of the cooking-time slider, in minutes.
pub const COOKING_TIME_STEP: u32 = 5;

/// Errors raised while building or parsing filter inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(
        "Invalid cooking time range {min}-{max} (expected {lo} <= min <= max <= {hi})",
        lo = COOKING_TIME_MIN,
        hi = COOKING_TIME_MAX
    )]
    InvalidCookingTimeRange { min: u32, max: u32 },

    #[error("Unknown device: {0} (expected MoMe, Simmr or Both)")]
    UnknownDevice(String),

    #[error("Unknown difficulty: {0} (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),

    #[error("Unknown review status: {0}")]
    UnknownStatus(String),

    #[error("Unknown admin tab: {0} (expected all, pending or approved)")]
    UnknownTab(String),
}

/// Inclusive cooking-time window in minutes.
///
/// The engine trusts the range it is given; keeping `min <= max` inside
/// `[COOKING_TIME_MIN, COOKING_TIME_MAX]` is the caller's job, either through
/// [`CookingTimeRange::new`] or [`CookingTimeRange::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CookingTimeRange {
    pub min: u32,
    pub max: u32,
}

impl CookingTimeRange {
    /// Full slider range, `[0, 120]`.
    pub const FULL: CookingTimeRange = CookingTimeRange {
        min: COOKING_TIME_MIN,
        max: COOKING_TIME_MAX,
    };

    /// Validated constructor.
    pub fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max || max > COOKING_TIME_MAX {
            return Err(FilterError::InvalidCookingTimeRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Clamp both ends into the slider bounds and put them in order.
    pub fn clamped(a: u32, b: u32) -> Self {
        let a = a.clamp(COOKING_TIME_MIN, COOKING_TIME_MAX);
        let b = b.clamp(COOKING_TIME_MIN, COOKING_TIME_MAX);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Like [`CookingTimeRange::clamped`], but first rounds both ends to the
    /// nearest slider step. Used for typed-in values such as CLI flags.
    pub fn snapped(a: u32, b: u32) -> Self {
        Self::clamped(snap_to_step(a), snap_to_step(b))
    }

    pub fn contains(&self, minutes: u32) -> bool {
        self.min <= minutes && minutes <= self.max
    }

    /// True when the range is narrower than the full slider.
    pub fn is_narrowed(&self) -> bool {
        self.min > COOKING_TIME_MIN || self.max < COOKING_TIME_MAX
    }

    pub fn is_default(&self) -> bool {
        *self == Self::FULL
    }
}

fn snap_to_step(minutes: u32) -> u32 {
    minutes.saturating_add(COOKING_TIME_STEP / 2) / COOKING_TIME_STEP * COOKING_TIME_STEP
}

impl Default for CookingTimeRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// One dimension of [`FilterState`].
///
/// The declaration order is the order badges are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Cuisine,
    Device,
    Difficulty,
    CookingTime,
    Search,
}

/// Filter selections for one recipe view.
///
/// Owned by whoever drives the view (see [`crate::state::FilterSession`]);
/// the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_query: String,
    pub selected_cuisine: Option<String>,
    pub selected_device: Option<DeviceSupport>,
    pub cooking_time_range: CookingTimeRange,
    pub difficulty: Option<Difficulty>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.selected_cuisine = Some(cuisine.into());
        self
    }

    pub fn with_device(mut self, device: DeviceSupport) -> Self {
        self.selected_device = Some(device);
        self
    }

    pub fn with_cooking_time(mut self, range: CookingTimeRange) -> Self {
        self.cooking_time_range = range;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reset a single field, leaving the others untouched.
    pub fn clear_field(&mut self, field: FilterField) {
        match field {
            FilterField::Cuisine => self.selected_cuisine = None,
            FilterField::Device => self.selected_device = None,
            FilterField::Difficulty => self.difficulty = None,
            FilterField::CookingTime => self.cooking_time_range = CookingTimeRange::FULL,
            FilterField::Search => self.search_query.clear(),
        }
    }

    /// Copy of `self` with `field` reset.
    pub fn cleared(&self, field: FilterField) -> Self {
        let mut next = self.clone();
        next.clear_field(field);
        next
    }

    /// Whether `field` differs from its default.
    ///
    /// The cooking-time field counts as active only when narrowed below the
    /// full slider range.
    pub fn is_active(&self, field: FilterField) -> bool {
        match field {
            FilterField::Cuisine => self.selected_cuisine.is_some(),
            FilterField::Device => self.selected_device.is_some(),
            FilterField::Difficulty => self.difficulty.is_some(),
            FilterField::CookingTime => self.cooking_time_range.is_narrowed(),
            FilterField::Search => !self.search_query.is_empty(),
        }
    }

    /// Drives the "Clear All" affordance.
    pub fn has_active_filters(&self) -> bool {
        [
            FilterField::Cuisine,
            FilterField::Device,
            FilterField::Difficulty,
            FilterField::CookingTime,
            FilterField::Search,
        ]
        .into_iter()
        .any(|field| self.is_active(field))
    }
}
