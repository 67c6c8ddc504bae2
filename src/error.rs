use std::num::ParseFloatError;
use thiserror::Error;

/// The ways a conversion can fail. The `Display` text is what callers see in
/// place of a numeric result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Invalid input")]
    InvalidInput(#[from] ParseFloatError),
    #[error("Invalid unit")]
    UnknownUnit(String),
}
