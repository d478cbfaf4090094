//! # Installation Calculations
//!
//! This module contains the four calculators. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The calculators are independent of each other; only [`rail_length`]
//! consults the racking catalog.
//!
//! ## Available Calculations
//!
//! - [`rail_length`] - Rail runs, stock rails, splices and waste
//! - [`clamps`] - End/mid clamps and roof brackets
//! - [`cable`] - DC cable per string and total
//! - [`string_size`] - Min/max panels per string for an inverter

pub mod cable;
pub mod clamps;
pub mod rail_length;
pub mod string_size;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use cable::{CableInput, CableResult};
pub use clamps::{ClampInput, ClampResult};
pub use rail_length::{RailLengthInput, RailLengthResult};
pub use string_size::{StringSizeInput, StringSizeResult, StringSizeWarning};

/// The four calculators, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    RailLength,
    ClampCount,
    CableLength,
    StringSize,
}

impl CalculatorKind {
    /// All calculators for menu display
    pub const ALL: [CalculatorKind; 4] = [
        CalculatorKind::RailLength,
        CalculatorKind::ClampCount,
        CalculatorKind::CableLength,
        CalculatorKind::StringSize,
    ];

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::RailLength => "Rail Length",
            CalculatorKind::ClampCount => "Clamp Count",
            CalculatorKind::CableLength => "DC Cable Length",
            CalculatorKind::StringSize => "String Calculator",
        }
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Enum wrapper for all calculation inputs.
///
/// Lets a front end accept any calculator's input as one JSON document:
///
/// ```json
/// { "type": "Cable", "panel_height_mm": 1700.0, "panel_count": 10, "inverter_distance_mm": 5000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    RailLength(RailLengthInput),
    Clamps(ClampInput),
    Cable(CableInput),
    StringSize(StringSizeInput),
}

/// Enum wrapper for all calculation results, tagged like [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    RailLength(RailLengthResult),
    Clamps(ClampResult),
    Cable(CableResult),
    StringSize(StringSizeResult),
}

impl CalculationItem {
    /// Parse an item from JSON.
    ///
    /// An absent required field gives `CalcError::MissingField`; any other
    /// malformed document gives `CalcError::SerializationError`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Which calculator this item is for
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationItem::RailLength(_) => CalculatorKind::RailLength,
            CalculationItem::Clamps(_) => CalculatorKind::ClampCount,
            CalculationItem::Cable(_) => CalculatorKind::CableLength,
            CalculationItem::StringSize(_) => CalculatorKind::StringSize,
        }
    }

    /// Run the matching calculator.
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::RailLength(input) => CalculationOutput::RailLength(rail_length::calculate(input)?),
            CalculationItem::Clamps(input) => CalculationOutput::Clamps(clamps::calculate(input)?),
            CalculationItem::Cable(input) => CalculationOutput::Cable(cable::calculate(input)?),
            CalculationItem::StringSize(input) => CalculationOutput::StringSize(string_size::calculate(input)?),
        })
    }
}
