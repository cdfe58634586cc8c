//! Temperature value object and display unit

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display unit for temperatures
///
/// Purely a display transform: values stay Celsius internally and are only
/// converted when rendered. The active unit is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius (startup default)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// The other unit
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Unit suffix for labels
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A temperature measured in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    /// Create a temperature from a Celsius value
    #[must_use]
    pub const fn from_celsius(celsius: f64) -> Self {
        Self { celsius }
    }

    /// Get the value in degrees Celsius
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.celsius
    }

    /// Get the value converted to degrees Fahrenheit
    #[must_use]
    pub fn fahrenheit(&self) -> f64 {
        self.celsius.mul_add(1.8, 32.0)
    }

    /// The integer shown to the user: the value in the requested unit,
    /// rounded toward negative infinity
    #[must_use]
    pub fn display_value(&self, unit: TemperatureUnit) -> i64 {
        let value = match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit(),
        };
        #[allow(clippy::cast_possible_truncation)]
        {
            value.floor() as i64
        }
    }

    /// Formatted for display: floored value with a degree sign
    #[must_use]
    pub fn display(&self, unit: TemperatureUnit) -> String {
        format!("{}°", self.display_value(unit))
    }
}
