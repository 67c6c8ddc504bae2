use rocket::serde::Deserialize;

use crate::conversion::Length;

/// Converter settings read from `Rocket.toml` or `ROCKET_*` environment
/// variables, next to Rocket's own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ConverterConfig {
    /// Unit selected for the input when a form is first shown.
    #[serde(default = "default_from")]
    pub default_from: Length,
    /// Unit selected for the output when a form is first shown.
    #[serde(default = "default_to")]
    pub default_to: Length,
}

fn default_from() -> Length {
    Length::Centimeters
}

fn default_to() -> Length {
    Length::Meters
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}
