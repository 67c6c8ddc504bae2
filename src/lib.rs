//! Length conversion between centimeters, meters and kilometers, served over
//! HTTP with Rocket.

#[macro_use]
extern crate rocket;

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod form;

pub use conversion::{convert, Length};
pub use error::ConvertError;
