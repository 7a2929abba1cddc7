use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    #[error("slider minimum {min} exceeds maximum {max}")]
    InvertedRange { min: i64, max: i64 },
    #[error("slider default {default} outside {min}..={max}")]
    DefaultOutOfRange { min: i64, max: i64, default: i64 },
}

/// An integer range input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    label: String,
    min: i64,
    max: i64,
    default: i64,
}

impl Slider {
    /// # Errors
    /// Returns an error if `min > max` or `default` lies outside the range.
    pub fn new(label: String, min: i64, max: i64, default: i64) -> Result<Self, SliderError> {
        if min > max {
            return Err(SliderError::InvertedRange { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(SliderError::DefaultOutOfRange { min, max, default });
        }
        Ok(Self {
            label,
            min,
            max,
            default,
        })
    }

    /// `Pick a number`, 0 to 100, starting at 50.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            label: "Pick a number".to_string(),
            min: 0,
            max: 100,
            default: 50,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    #[must_use]
    pub const fn default_value(&self) -> i64 {
        self.default
    }

    /// The value the slider shows: the default when nothing was picked,
    /// otherwise the pick clamped into range.
    #[must_use]
    pub fn select(&self, value: Option<i64>) -> i64 {
        value.map_or(self.default, |value| value.clamp(self.min, self.max))
    }
}
