//! # Rail Length Calculation
//!
//! Sizes the mounting rails for rows of panels laid side by side, and works
//! out how many stock rails, splices and how much offcut that takes.
//!
//! ## Assumptions
//!
//! - Two rails per row (one above, one below the panels)
//! - Every rail run in every row is the same length
//! - Stock rails are joined end to end with splices; offcuts are not reused
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::rail_length::{calculate, RailLengthInput};
//!
//! let input = RailLengthInput::for_system("hopergy", 1000.0, 10).unwrap();
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.single_rail_length_mm, 10180.0);
//! assert_eq!(result.stock_rails_needed, 6);
//! assert_eq!(result.splices_needed, 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::RAILS_PER_ROW;
use crate::errors::{checked_count, count_from_f64, require_count, require_positive, CalcError, CalcResult};
use crate::racking::{self, RackingSystem};

/// Input parameters for rail sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "system": {
///     "id": "hopergy",
///     "name": "Hopergy",
///     "default_gap_mm": 20.0,
///     "default_overhang_mm": 25.0,
///     "rail_length_mm": 4400.0
///   },
///   "panel_width_mm": 1134.0,
///   "panel_count": 12,
///   "row_count": 2,
///   "gap_override_mm": null,
///   "overhang_override_mm": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailLengthInput {
    /// Racking system supplying the default gap, overhang and stock length
    pub system: RackingSystem,

    /// Panel dimension along the rail, in mm
    pub panel_width_mm: f64,

    /// Panels per row
    pub panel_count: u32,

    /// Number of rows. 0 (or absent) is treated as a single row.
    #[serde(default)]
    pub row_count: u32,

    /// Replaces the system's default gap when set
    #[serde(default)]
    pub gap_override_mm: Option<f64>,

    /// Replaces the system's default overhang when set
    #[serde(default)]
    pub overhang_override_mm: Option<f64>,
}

impl RailLengthInput {
    /// Create an input for a single row on the given system.
    pub fn new(system: RackingSystem, panel_width_mm: f64, panel_count: u32) -> Self {
        RailLengthInput {
            system,
            panel_width_mm,
            panel_count,
            row_count: 1,
            gap_override_mm: None,
            overhang_override_mm: None,
        }
    }

    /// Create an input for a catalog system looked up by identifier.
    pub fn for_system(system_id: &str, panel_width_mm: f64, panel_count: u32) -> CalcResult<Self> {
        let system = racking::lookup(system_id)?;
        Ok(Self::new(system.clone(), panel_width_mm, panel_count))
    }

    /// Set the number of rows
    pub fn with_rows(mut self, row_count: u32) -> Self {
        self.row_count = row_count;
        self
    }

    /// Override the default panel gap
    pub fn with_gap(mut self, gap_mm: f64) -> Self {
        self.gap_override_mm = Some(gap_mm);
        self
    }

    /// Override the default end overhang
    pub fn with_overhang(mut self, overhang_mm: f64) -> Self {
        self.overhang_override_mm = Some(overhang_mm);
        self
    }

    /// Gap actually used: the override if set, otherwise the system default.
    pub fn effective_gap_mm(&self) -> f64 {
        self.gap_override_mm.unwrap_or(self.system.default_gap_mm)
    }

    /// Overhang actually used: the override if set, otherwise the system default.
    pub fn effective_overhang_mm(&self) -> f64 {
        self.overhang_override_mm.unwrap_or(self.system.default_overhang_mm)
    }

    /// Row count with the zero fallback applied.
    pub fn effective_row_count(&self) -> u32 {
        self.row_count.max(1)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.system.validate()?;
        require_positive("panel_width_mm", self.panel_width_mm, "Panel width must be positive")?;
        require_count("panel_count", self.panel_count, "Panel count must be at least 1")?;
        if let Some(gap) = self.gap_override_mm {
            require_positive("gap_override_mm", gap, "Gap override must be positive")?;
        }
        if let Some(overhang) = self.overhang_override_mm {
            if !overhang.is_finite() || overhang < 0.0 {
                return Err(CalcError::invalid_input(
                    "overhang_override_mm",
                    overhang.to_string(),
                    "Overhang override cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results from rail sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "single_rail_length_mm": 10180.0,
///   "total_rail_length_mm": 20360.0,
///   "stock_rails_needed": 6,
///   "splices_needed": 4,
///   "waste_mm": 6040.0,
///   "gap_mm": 20.0,
///   "overhang_mm": 25.0,
///   "row_count": 1,
///   "rail_runs": 2,
///   "stock_rails_per_run": 3,
///   "splices_per_run": 2,
///   "stock_rail_length_mm": 4400.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailLengthResult {
    /// Length of one rail run (one rail along one row), in mm
    pub single_rail_length_mm: f64,

    /// Combined length of all rail runs, in mm
    pub total_rail_length_mm: f64,

    /// Stock-length rails to order
    pub stock_rails_needed: u32,

    /// Splices to order
    pub splices_needed: u32,

    /// Offcut left over from the ordered stock, in mm
    pub waste_mm: f64,

    /// Panel gap used
    pub gap_mm: f64,

    /// End overhang used
    pub overhang_mm: f64,

    /// Rows after the zero fallback
    pub row_count: u32,

    /// Rail runs across all rows (2 per row)
    pub rail_runs: u32,

    /// Stock rails spliced together to form one run
    pub stock_rails_per_run: u32,

    /// Splices within one run
    pub splices_per_run: u32,

    /// Stock length the counts are based on
    pub stock_rail_length_mm: f64,
}

/// Calculate rail lengths, stock rail count, splices and waste.
///
/// # Arguments
///
/// * `input` - Racking system, panel dimensions and layout
///
/// # Returns
///
/// * `Ok(RailLengthResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &RailLengthInput) -> CalcResult<RailLengthResult> {
    input.validate()?;

    if input.row_count == 0 {
        debug!("row_count is 0, falling back to a single row");
    }

    let gap = input.effective_gap_mm();
    let overhang = input.effective_overhang_mm();
    let rows = input.effective_row_count();
    let stock_length = input.system.rail_length_mm;
    let panels = input.panel_count as f64;

    let single_rail_length = panels * input.panel_width_mm + (panels - 1.0) * gap + 2.0 * overhang;

    let rail_runs = checked_count("row_count", rows, RAILS_PER_ROW, rows)?;
    let total_rail_length = single_rail_length * rail_runs as f64;

    // Pieces of stock spliced end to end to make one run
    let stock_rails_per_run = count_from_f64(
        "panel_width_mm",
        input.panel_width_mm,
        (single_rail_length / stock_length).ceil(),
    )?;
    let stock_rails_needed = checked_count("panel_count", input.panel_count, stock_rails_per_run, rail_runs)?;

    let splices_per_run = stock_rails_per_run.saturating_sub(1);
    let splices_needed = checked_count("panel_count", input.panel_count, splices_per_run, rail_runs)?;

    let waste = stock_rails_needed as f64 * stock_length - total_rail_length;

    debug!(
        system = %input.system.id,
        single_rail_length,
        stock_rails_needed,
        splices_needed,
        waste,
        "rail length calculated"
    );

    Ok(RailLengthResult {
        single_rail_length_mm: single_rail_length,
        total_rail_length_mm: total_rail_length,
        stock_rails_needed,
        splices_needed,
        waste_mm: waste,
        gap_mm: gap,
        overhang_mm: overhang,
        row_count: rows,
        rail_runs,
        stock_rails_per_run,
        splices_per_run,
        stock_rail_length_mm: stock_length,
    })
}
