use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use rocket::serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Every accepted spelling of a unit, lowercase. Lookups are case-insensitive.
static UNIT_NAMES: Lazy<HashMap<&'static str, Length>> = Lazy::new(|| {
    let mut names = HashMap::with_capacity(9);
    for unit in Length::ALL {
        let (singular, plural, abbreviation) = unit.spellings();
        names.insert(singular, unit);
        names.insert(plural, unit);
        names.insert(abbreviation, unit);
    }
    names
});

/// A length unit. Meters is the base unit every other unit is scaled against.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", try_from = "String")]
pub enum Length {
    Centimeters,
    Meters,
    Kilometers,
}

/// How a value is scaled when going from one unit to another.
///
/// Factors are kept as multiply or divide by an exact integer constant rather
/// than a precomputed reciprocal, so `1 cm` in meters is `1 / 100` and not
/// `1 * 0.01`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scale {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl Scale {
    pub fn invert(self) -> Scale {
        match self {
            Scale::Identity => Scale::Identity,
            Scale::Multiply(factor) => Scale::Divide(factor),
            Scale::Divide(factor) => Scale::Multiply(factor),
        }
    }

    pub fn apply_to(self, quantity: f64) -> f64 {
        match self {
            Scale::Identity => quantity,
            Scale::Multiply(factor) => quantity * factor,
            Scale::Divide(factor) => quantity / factor,
        }
    }
}

impl Length {
    /// All units, in the order they are offered for selection.
    pub const ALL: [Length; 3] = [Length::Centimeters, Length::Meters, Length::Kilometers];

    fn spellings(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Length::Centimeters => ("centimeter", "centimeters", "cm"),
            Length::Meters => ("meter", "meters", "m"),
            Length::Kilometers => ("kilometer", "kilometers", "km"),
        }
    }

    /// The factor taking a quantity in `self` to a quantity in `target`.
    pub fn scale_to(self, target: Length) -> Scale {
        use Length::*;

        match (self, target) {
            (Centimeters, Centimeters) | (Meters, Meters) | (Kilometers, Kilometers) => {
                Scale::Identity
            }
            (Centimeters, Meters) => Scale::Divide(100.0),
            (Centimeters, Kilometers) => Scale::Divide(100_000.0),
            (Meters, Kilometers) => Scale::Divide(1000.0),
            // The three pairs above cover every downward conversion
            (from, to) => to.scale_to(from).invert(),
        }
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Length::Centimeters => "Centimeters",
            Length::Meters => "Meters",
            Length::Kilometers => "Kilometers",
        };
        f.write_str(name)
    }
}

impl FromStr for Length {
    type Err = ConvertError;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        UNIT_NAMES
            .get(unit.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConvertError::UnknownUnit(unit.to_string()))
    }
}

impl TryFrom<&str> for Length {
    type Error = ConvertError;

    fn try_from(unit: &str) -> Result<Self, ConvertError> {
        unit.parse()
    }
}

impl TryFrom<String> for Length {
    type Error = ConvertError;

    fn try_from(unit: String) -> Result<Self, ConvertError> {
        unit.parse()
    }
}

pub fn convert_value(quantity: f64, from: Length, to: Length) -> f64 {
    from.scale_to(to).apply_to(quantity)
}

/// Parse `input` and convert it, keeping the failure as a typed error.
pub fn try_convert(input: &str, from: Length, to: Length) -> Result<f64, ConvertError> {
    let quantity = parse_quantity(input)?;
    Ok(convert_value(quantity, from, to))
}

/// Convert `input` from one unit to another, returning either the formatted
/// result or the error text ("Invalid input").
pub fn convert(input: &str, from: Length, to: Length) -> String {
    match try_convert(input, from, to) {
        Ok(result) => format_value(result),
        Err(err) => err.to_string(),
    }
}

/// Same as [`convert`] with units given by name. Unknown names give
/// "Invalid unit", but an unparsable value is reported first.
pub fn convert_text(input: &str, from: &str, to: &str) -> String {
    let converted = parse_quantity(input).and_then(|quantity| {
        let from: Length = from.parse()?;
        let to: Length = to.parse()?;
        Ok(convert_value(quantity, from, to))
    });

    match converted {
        Ok(result) => format_value(result),
        Err(err) => err.to_string(),
    }
}

fn parse_quantity(input: &str) -> Result<f64, ConvertError> {
    Ok(input.trim().parse()?)
}

/// Shortest representation that reads back to the same `f64`, never in
/// exponent form. Integral values keep a trailing `.0`; infinities and NaN
/// print as `inf`, `-inf` and `NaN`.
pub fn format_value(value: f64) -> String {
    let formatted = value.to_string();
    if value.is_finite() && !formatted.contains('.') {
        format!("{formatted}.0")
    } else {
        formatted
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use speculoos::prelude::*;

    const QUANTITIES: [&str; 6] = ["1", "0.5", "2.5", "-42", "123456.789", "0.0003"];

    #[test]
    fn from_centimeters_to_meters() {
        assert_that!(convert("1", Length::Centimeters, Length::Meters))
            .is_equal_to("0.01".to_string());
    }

    #[test]
    fn from_meters_to_centimeters() {
        assert_that!(convert("1", Length::Meters, Length::Centimeters))
            .is_equal_to("100.0".to_string());
    }

    #[test]
    fn from_kilometers_to_meters() {
        assert_that!(convert("1", Length::Kilometers, Length::Meters))
            .is_equal_to("1000.0".to_string());
    }

    #[test]
    fn from_kilometers_to_centimeters() {
        assert_that!(convert("2.5", Length::Kilometers, Length::Centimeters))
            .is_equal_to("250000.0".to_string());
    }

    #[test]
    fn from_centimeters_to_kilometers() {
        assert_that!(convert("1", Length::Centimeters, Length::Kilometers))
            .is_equal_to("0.00001".to_string());
    }

    #[test]
    fn from_meters_to_kilometers() {
        assert_that!(convert("1500", Length::Meters, Length::Kilometers))
            .is_equal_to("1.5".to_string());
    }

    #[test]
    fn same_unit_returns_the_parsed_value() {
        for unit in Length::ALL {
            for quantity in QUANTITIES {
                let expected = format_value(quantity.parse().unwrap());
                assert_that!(convert(quantity, unit, unit)).is_equal_to(expected);
            }
        }
    }

    #[test]
    fn unparsable_input_is_reported() {
        assert_that!(convert("abc", Length::Meters, Length::Centimeters))
            .is_equal_to("Invalid input".to_string());
        assert_that!(convert("", Length::Meters, Length::Meters))
            .is_equal_to("Invalid input".to_string());
        assert_that!(convert("1,5", Length::Meters, Length::Kilometers))
            .is_equal_to("Invalid input".to_string());
    }

    #[test]
    fn non_finite_input_is_carried_through() {
        assert_that!(try_convert("inf", Length::Meters, Length::Centimeters))
            .is_ok()
            .is_equal_to(f64::INFINITY);
        assert_that!(convert("inf", Length::Meters, Length::Meters))
            .is_equal_to("inf".to_string());
        assert_that!(convert("-infinity", Length::Kilometers, Length::Meters))
            .is_equal_to("-inf".to_string());
        assert_that!(convert("NaN", Length::Meters, Length::Centimeters))
            .is_equal_to("NaN".to_string());
    }

    #[test]
    fn overflowing_conversion_reads_as_infinity() {
        assert_that!(convert("1e308", Length::Meters, Length::Centimeters))
            .is_equal_to("inf".to_string());
        assert_that!(convert("-1e308", Length::Kilometers, Length::Centimeters))
            .is_equal_to("-inf".to_string());
        assert_that!(convert("1e308", Length::Centimeters, Length::Meters))
            .is_equal_to(format_value(1e308 / 100.0));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_that!(convert(" 3 ", Length::Meters, Length::Centimeters))
            .is_equal_to("300.0".to_string());
    }

    #[test]
    fn converting_there_and_back_keeps_the_quantity() {
        for from in Length::ALL {
            for to in Length::ALL {
                for quantity in QUANTITIES {
                    let quantity: f64 = quantity.parse().unwrap();
                    let there = convert(&quantity.to_string(), from, to);
                    let back: f64 = convert(&there, to, from).parse().unwrap();
                    assert_that!(back).is_close_to(quantity, quantity.abs() * 1e-12);
                }
            }
        }
    }

    #[test]
    fn scale_is_inverted_for_upward_conversions() {
        assert_that!(Length::Meters.scale_to(Length::Centimeters))
            .is_equal_to(Scale::Multiply(100.0));
        assert_that!(Length::Kilometers.scale_to(Length::Centimeters))
            .is_equal_to(Scale::Multiply(100_000.0));
        assert_that!(Length::Kilometers.scale_to(Length::Meters))
            .is_equal_to(Scale::Multiply(1000.0));
    }

    #[test]
    fn parse_unit_names() {
        assert_that!("Centimeters".parse::<Length>()).is_ok().is_equal_to(Length::Centimeters);
        assert_that!(" KM ".parse::<Length>()).is_ok().is_equal_to(Length::Kilometers);
        assert_that!(Length::try_from("meter")).is_ok().is_equal_to(Length::Meters);
        assert_that!("furlong".parse::<Length>())
            .is_err()
            .is_equal_to(ConvertError::UnknownUnit("furlong".to_string()));
    }

    #[test]
    fn display_names_parse_back() {
        for unit in Length::ALL {
            assert_that!(unit.to_string().parse::<Length>()).is_ok().is_equal_to(unit);
        }
    }

    #[test]
    fn convert_by_unit_name() {
        assert_that!(convert_text("1", "Meters", "Centimeters")).is_equal_to("100.0".to_string());
        assert_that!(convert_text("1", "Meters", "Miles")).is_equal_to("Invalid unit".to_string());
        assert_that!(convert_text("x", "Meters", "Miles")).is_equal_to("Invalid input".to_string());
    }

    #[test]
    fn format_keeps_integral_marker() {
        assert_that!(format_value(100.0)).is_equal_to("100.0".to_string());
        assert_that!(format_value(-0.25)).is_equal_to("-0.25".to_string());
        assert_that!(format_value(1e20)).is_equal_to("100000000000000000000.0".to_string());
    }
}
