//! # Clamp and Bracket Count
//!
//! Counts the end clamps, mid clamps and roof brackets for rows of panels
//! on two rails per row.
//!
//! Each rail gets an end clamp at both ends and a mid clamp between every
//! pair of adjacent panels. Brackets are only counted when both the bracket
//! spacing and the rail length are known; otherwise they are reported as
//! unknown (`None`), which is not the same as zero.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::clamps::{calculate, ClampInput};
//!
//! let input = ClampInput::new(10, 2).with_brackets(1200.0, 10180.0);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.end_clamps, 8);
//! assert_eq!(result.mid_clamps, 36);
//! assert_eq!(result.total_brackets, Some(40));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{END_CLAMPS_PER_RAIL, RAILS_PER_ROW};
use crate::errors::{checked_count, count_from_f64, require_count, CalcError, CalcResult};

/// Input parameters for clamp and bracket counting.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_count": 10,
///   "row_count": 2,
///   "bracket_spacing_mm": 1200.0,
///   "rail_length_mm": 10180.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampInput {
    /// Panels per row
    pub panel_count: u32,

    /// Number of rows
    pub row_count: u32,

    /// Distance between roof brackets along a rail, in mm
    #[serde(default)]
    pub bracket_spacing_mm: Option<f64>,

    /// Length of one rail run, in mm
    #[serde(default)]
    pub rail_length_mm: Option<f64>,
}

impl ClampInput {
    /// Create an input without bracket data
    pub fn new(panel_count: u32, row_count: u32) -> Self {
        ClampInput {
            panel_count,
            row_count,
            bracket_spacing_mm: None,
            rail_length_mm: None,
        }
    }

    /// Add bracket spacing and rail run length
    pub fn with_brackets(mut self, bracket_spacing_mm: f64, rail_length_mm: f64) -> Self {
        self.bracket_spacing_mm = Some(bracket_spacing_mm);
        self.rail_length_mm = Some(rail_length_mm);
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_count("panel_count", self.panel_count, "Panel count must be at least 1")?;
        require_count("row_count", self.row_count, "Row count must be at least 1")?;
        Ok(())
    }

    /// Spacing and rail length, if both are usable.
    fn bracket_data(&self) -> Option<(f64, f64)> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        match (self.bracket_spacing_mm, self.rail_length_mm) {
            (Some(spacing), Some(length)) if usable(spacing) && usable(length) => Some((spacing, length)),
            _ => None,
        }
    }
}

/// Results from clamp and bracket counting.
///
/// ## JSON Example
///
/// ```json
/// {
///   "end_clamps": 8,
///   "mid_clamps": 36,
///   "total_clamps": 44,
///   "total_rails": 4,
///   "brackets_per_rail": 10,
///   "total_brackets": 40
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampResult {
    /// End clamps across all rails
    pub end_clamps: u32,

    /// Mid clamps across all rails
    pub mid_clamps: u32,

    /// End + mid clamps
    pub total_clamps: u32,

    /// Rails across all rows (2 per row)
    pub total_rails: u32,

    /// Brackets along one rail; `None` when spacing or rail length is unknown
    pub brackets_per_rail: Option<u32>,

    /// Brackets across all rails; `None` when spacing or rail length is unknown
    pub total_brackets: Option<u32>,
}

/// Count clamps and brackets.
///
/// # Returns
///
/// * `Ok(ClampResult)` - Counts
/// * `Err(CalcError)` - If panel or row count is zero, or a count overflows
pub fn calculate(input: &ClampInput) -> CalcResult<ClampResult> {
    input.validate()?;

    let total_rails = checked_count("row_count", input.row_count, RAILS_PER_ROW, input.row_count)?;

    let end_clamps = checked_count("row_count", input.row_count, END_CLAMPS_PER_RAIL, total_rails)?;
    let mid_clamps = checked_count("panel_count", input.panel_count, input.panel_count - 1, total_rails)?;
    let total_clamps = end_clamps
        .checked_add(mid_clamps)
        .ok_or_else(|| CalcError::invalid_input("panel_count", input.panel_count.to_string(), "Count is too large"))?;

    // One bracket at the start of the rail plus one per spacing interval
    let brackets_per_rail = input
        .bracket_data()
        .map(|(spacing, length)| count_from_f64("bracket_spacing_mm", spacing, (length / spacing).ceil() + 1.0))
        .transpose()?;
    let total_brackets = brackets_per_rail
        .map(|per_rail| checked_count("row_count", input.row_count, per_rail, total_rails))
        .transpose()?;

    if brackets_per_rail.is_none() {
        debug!("bracket spacing or rail length not supplied, brackets unknown");
    }

    debug!(end_clamps, mid_clamps, ?total_brackets, "clamps counted");

    Ok(ClampResult {
        end_clamps,
        mid_clamps,
        total_clamps,
        total_rails,
        brackets_per_rail,
        total_brackets,
    })
}
