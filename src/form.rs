use rocket::serde::{Deserialize, Serialize};

use crate::config::ConverterConfig;
use crate::conversion::{convert, Length};

/// A unit picker: the current selection and whether its option list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Dropdown {
    pub selected: Length,
    pub expanded: bool,
}

impl Dropdown {
    pub fn new(selected: Length) -> Self {
        Dropdown {
            selected,
            expanded: false,
        }
    }

    pub fn options(&self) -> [Length; 3] {
        Length::ALL
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Pick `unit` and close the option list.
    pub fn select(&mut self, unit: Length) {
        self.selected = unit;
        self.expanded = false;
    }

    pub fn dismiss(&mut self) {
        self.expanded = false;
    }
}

/// State of a single conversion form: what was typed, the two unit pickers
/// and the last result shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ConverterForm {
    pub input: String,
    pub input_unit: Dropdown,
    pub output_unit: Dropdown,
    pub result: String,
}

impl ConverterForm {
    pub fn new(from: Length, to: Length) -> Self {
        ConverterForm {
            input: String::new(),
            input_unit: Dropdown::new(from),
            output_unit: Dropdown::new(to),
            result: String::new(),
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Run the conversion for the current input and selections, keep the
    /// outcome as the displayed result and return it.
    pub fn submit(&mut self) -> &str {
        self.result = convert(
            &self.input,
            self.input_unit.selected,
            self.output_unit.selected,
        );
        &self.result
    }

    pub fn result_label(&self) -> String {
        format!("Result: {}", self.result)
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        ConverterForm::from(&ConverterConfig::default())
    }
}

impl From<&ConverterConfig> for ConverterForm {
    fn from(config: &ConverterConfig) -> Self {
        ConverterForm::new(config.default_from, config.default_to)
    }
}
