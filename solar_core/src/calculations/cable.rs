//! # DC Cable Length
//!
//! Estimates DC cable per string: the interconnects between panels in
//! series plus the positive and negative leads back to the inverter, with a
//! fixed 10% allowance for routing and terminations.
//!
//! The panel run assumes panels are connected along their height, so a
//! string of `n` panels needs `n - 1` panel heights of cable.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::cable::{calculate, CableInput};
//!
//! let input = CableInput::new(1700.0, 10, 5000.0);
//! let result = calculate(&input).unwrap();
//! assert!((result.total_cable_mm - 27830.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CABLE_MARGIN_FACTOR, INVERTER_LEADS_PER_STRING};
use crate::errors::{require_count, require_positive, CalcResult};

/// Input parameters for DC cable estimation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_height_mm": 1700.0,
///   "panel_count": 10,
///   "inverter_distance_mm": 5000.0,
///   "string_count": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableInput {
    /// Panel dimension along which panels are interconnected, in mm
    pub panel_height_mm: f64,

    /// Panels per string
    pub panel_count: u32,

    /// One-way distance from the array to the inverter, in mm
    pub inverter_distance_mm: f64,

    /// Number of strings. Absent or 0 is treated as one string.
    #[serde(default)]
    pub string_count: Option<u32>,
}

impl CableInput {
    /// Create an input for a single string
    pub fn new(panel_height_mm: f64, panel_count: u32, inverter_distance_mm: f64) -> Self {
        CableInput {
            panel_height_mm,
            panel_count,
            inverter_distance_mm,
            string_count: None,
        }
    }

    /// Set the number of strings
    pub fn with_strings(mut self, string_count: u32) -> Self {
        self.string_count = Some(string_count);
        self
    }

    /// String count with the fallback to one applied.
    pub fn effective_string_count(&self) -> u32 {
        self.string_count.filter(|&n| n > 0).unwrap_or(1)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("panel_height_mm", self.panel_height_mm, "Panel height must be positive")?;
        require_count("panel_count", self.panel_count, "Panel count must be at least 1")?;
        require_positive(
            "inverter_distance_mm",
            self.inverter_distance_mm,
            "Inverter distance must be positive",
        )?;
        Ok(())
    }
}

/// Results from DC cable estimation. All lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableResult {
    /// Interconnect cable between panels in one string
    pub panel_run_mm: f64,

    /// Positive and negative leads to the inverter
    pub inverter_run_mm: f64,

    /// Panel run + inverter run, before margin
    pub cable_per_string_mm: f64,

    /// Per-string cable including the 10% margin
    pub cable_per_string_with_margin_mm: f64,

    /// Strings after the fallback
    pub string_count: u32,

    /// Cable across all strings including margin
    pub total_cable_mm: f64,
}

/// Estimate DC cable length.
///
/// # Returns
///
/// * `Ok(CableResult)` - Per-string and total cable
/// * `Err(CalcError)` - If height, count or distance is not positive
pub fn calculate(input: &CableInput) -> CalcResult<CableResult> {
    input.validate()?;

    let strings = input.effective_string_count();

    let panel_run = input.panel_height_mm * (input.panel_count - 1) as f64;
    let inverter_run = input.inverter_distance_mm * INVERTER_LEADS_PER_STRING;
    let cable_per_string = panel_run + inverter_run;
    let with_margin = cable_per_string * CABLE_MARGIN_FACTOR;
    let total = with_margin * strings as f64;

    debug!(cable_per_string, with_margin, strings, total, "dc cable estimated");

    Ok(CableResult {
        panel_run_mm: panel_run,
        inverter_run_mm: inverter_run,
        cable_per_string_mm: cable_per_string,
        cable_per_string_with_margin_mm: with_margin,
        string_count: strings,
        total_cable_mm: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_string() {
        let result = calculate(&CableInput::new(1700.0, 10, 5000.0)).unwrap();

        assert_eq!(result.panel_run_mm, 15300.0);
        assert_eq!(result.inverter_run_mm, 10000.0);
        assert_eq!(result.cable_per_string_mm, 25300.0);
        assert!((result.cable_per_string_with_margin_mm - 27830.0).abs() < 1e-6);
        assert!((result.total_cable_mm - 27830.0).abs() < 1e-6);
    }

    #[test]
    fn test_multiple_strings() {
        let result = calculate(&CableInput::new(1700.0, 10, 5000.0).with_strings(3)).unwrap();
        assert_eq!(result.string_count, 3);
        assert!((result.total_cable_mm - 3.0 * 27830.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_strings_falls_back_to_one() {
        let input = CableInput::new(1700.0, 10, 5000.0).with_strings(0);
        assert_eq!(calculate(&input).unwrap().string_count, 1);
    }

    #[test]
    fn test_single_panel_has_no_panel_run() {
        let result = calculate(&CableInput::new(1700.0, 1, 5000.0)).unwrap();
        assert_eq!(result.panel_run_mm, 0.0);
        assert!((result.cable_per_string_with_margin_mm - 11000.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&CableInput::new(-1700.0, 10, 5000.0)).is_err());
        assert!(calculate(&CableInput::new(1700.0, 0, 5000.0)).is_err());
        let err = calculate(&CableInput::new(1700.0, 10, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("inverter_distance_mm"));
    }

    #[test]
    fn test_serialization() {
        let json = r#"{"panel_height_mm": 1700.0, "panel_count": 10, "inverter_distance_mm": 5000.0}"#;
        let input: CableInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.string_count, None);
        assert_eq!(input.effective_string_count(), 1);
    }
}
