//! # String Sizing
//!
//! Works out how many panels can go in series on one inverter MPPT input.
//!
//! ## Method
//!
//! - Panel Voc is corrected for the coldest expected cell temperature:
//!   `Voc_cold = Voc * (1 + |β| / 100 * (25 - T_min))`. The coefficient is
//!   taken by magnitude since Voc always rises in the cold, whichever sign
//!   the datasheet uses.
//! - Maximum string: `floor(V_max_inverter / Voc_cold)`.
//! - Minimum string: `ceil(V_mppt_min / Vmp)` at STC.
//! - Hot-weather Vmp for the maximum string uses a flat 0.85 derating.
//!
//! The numbers are returned as computed. A configuration where the minimum
//! exceeds the maximum, or where the string sits outside the MPPT window, is
//! not rejected; [`StringSizeResult::warnings`] reports those cases.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::string_size::{calculate, StringSizeInput};
//!
//! let input = StringSizeInput {
//!     panel_voc_v: 45.0,
//!     panel_vmp_v: 38.0,
//!     inverter_max_v: 600.0,
//!     mppt_min_v: 150.0,
//!     mppt_max_v: 550.0,
//!     temp_coeff_pct_per_c: -0.29,
//!     min_temp_c: -10.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.max_panels, 12);
//! assert_eq!(result.min_panels, 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{HOT_VMP_DERATE, STC_TEMP_C};
use crate::errors::{count_from_f64, require_finite, require_positive, CalcError, CalcResult};

/// Panel and inverter electrical data.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_voc_v": 45.0,
///   "panel_vmp_v": 38.0,
///   "inverter_max_v": 600.0,
///   "mppt_min_v": 150.0,
///   "mppt_max_v": 550.0,
///   "temp_coeff_pct_per_c": -0.29,
///   "min_temp_c": -10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSizeInput {
    /// Panel open-circuit voltage at STC
    pub panel_voc_v: f64,

    /// Panel maximum-power voltage at STC
    pub panel_vmp_v: f64,

    /// Inverter absolute maximum DC input voltage
    pub inverter_max_v: f64,

    /// Lower end of the MPPT window
    pub mppt_min_v: f64,

    /// Upper end of the MPPT window
    pub mppt_max_v: f64,

    /// Voc temperature coefficient in %/°C (sign ignored)
    pub temp_coeff_pct_per_c: f64,

    /// Coldest expected site temperature in °C
    pub min_temp_c: f64,
}

impl StringSizeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("panel_voc_v", self.panel_voc_v, "Panel Voc must be positive")?;
        require_positive("panel_vmp_v", self.panel_vmp_v, "Panel Vmp must be positive")?;
        require_positive("inverter_max_v", self.inverter_max_v, "Inverter max voltage must be positive")?;
        require_positive("mppt_min_v", self.mppt_min_v, "MPPT minimum must be positive")?;
        require_positive("mppt_max_v", self.mppt_max_v, "MPPT maximum must be positive")?;
        require_finite("temp_coeff_pct_per_c", self.temp_coeff_pct_per_c)?;
        require_finite("min_temp_c", self.min_temp_c)?;
        Ok(())
    }
}

/// Results from string sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "temp_diff_c": 35.0,
///   "voc_adjustment": 1.1015,
///   "adjusted_voc_v": 49.5675,
///   "max_panels": 12,
///   "min_panels": 4,
///   "string_voc_max_v": 594.81,
///   "string_vmp_min_v": 387.6,
///   "string_vmp_max_v": 456.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSizeResult {
    /// How far the site runs below STC (negative when hotter)
    pub temp_diff_c: f64,

    /// Multiplier applied to panel Voc
    pub voc_adjustment: f64,

    /// Panel Voc at the minimum temperature
    pub adjusted_voc_v: f64,

    /// Largest string that stays under the inverter maximum when cold
    pub max_panels: u32,

    /// Smallest string whose Vmp clears the MPPT minimum
    pub min_panels: u32,

    /// Cold Voc of the maximum string
    pub string_voc_max_v: f64,

    /// Derated hot-weather Vmp of the maximum string
    pub string_vmp_min_v: f64,

    /// STC Vmp of the maximum string
    pub string_vmp_max_v: f64,
}

/// Conditions worth flagging to the user. None of these change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringSizeWarning {
    /// Minimum string is longer than the maximum string
    NoFeasibleString,
    /// Maximum string's STC Vmp is above the MPPT window
    ExceedsMpptMax,
    /// Maximum string's derated Vmp drops below the MPPT window
    BelowMpptMin,
}

impl StringSizeWarning {
    /// Human-readable description
    pub fn message(&self) -> &'static str {
        match self {
            StringSizeWarning::NoFeasibleString => {
                "Minimum string length exceeds maximum - no string size satisfies both limits"
            }
            StringSizeWarning::ExceedsMpptMax => "Max string Vmp is above the MPPT maximum",
            StringSizeWarning::BelowMpptMin => "Max string hot-weather Vmp is below the MPPT minimum",
        }
    }
}

impl std::fmt::Display for StringSizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl StringSizeResult {
    /// True when at least one string length fits both limits
    pub fn is_feasible(&self) -> bool {
        self.min_panels <= self.max_panels
    }

    /// Check the result against the input's MPPT window.
    pub fn warnings(&self, input: &StringSizeInput) -> Vec<StringSizeWarning> {
        let mut warnings = Vec::new();
        if !self.is_feasible() {
            warnings.push(StringSizeWarning::NoFeasibleString);
        }
        if self.string_vmp_max_v > input.mppt_max_v {
            warnings.push(StringSizeWarning::ExceedsMpptMax);
        }
        if self.max_panels > 0 && self.string_vmp_min_v < input.mppt_min_v {
            warnings.push(StringSizeWarning::BelowMpptMin);
        }
        warnings
    }
}

/// Size a string for the given panel and inverter.
///
/// # Returns
///
/// * `Ok(StringSizeResult)` - Panel count limits and string voltages
/// * `Err(CalcError)` - If a voltage is not positive, the temperature
///   correction drives Voc to zero or below, or a panel count does not fit
///   in `u32`
pub fn calculate(input: &StringSizeInput) -> CalcResult<StringSizeResult> {
    input.validate()?;

    let temp_diff = STC_TEMP_C - input.min_temp_c;
    let voc_adjustment = 1.0 + input.temp_coeff_pct_per_c.abs() / 100.0 * temp_diff;
    let adjusted_voc = input.panel_voc_v * voc_adjustment;

    if adjusted_voc <= 0.0 {
        return Err(CalcError::invalid_input(
            "min_temp_c",
            input.min_temp_c.to_string(),
            "Temperature correction gives a non-positive Voc",
        ));
    }

    let max_panels = count_from_f64(
        "inverter_max_v",
        input.inverter_max_v,
        (input.inverter_max_v / adjusted_voc).floor(),
    )?;
    let min_panels = count_from_f64("mppt_min_v", input.mppt_min_v, (input.mppt_min_v / input.panel_vmp_v).ceil())?;

    let max = max_panels as f64;
    let string_voc_max = max * adjusted_voc;
    let string_vmp_max = max * input.panel_vmp_v;
    let string_vmp_min = string_vmp_max * HOT_VMP_DERATE;

    debug!(adjusted_voc, max_panels, min_panels, "string sized");

    Ok(StringSizeResult {
        temp_diff_c: temp_diff,
        voc_adjustment,
        adjusted_voc_v: adjusted_voc,
        max_panels,
        min_panels,
        string_voc_max_v: string_voc_max,
        string_vmp_min_v: string_vmp_min,
        string_vmp_max_v: string_vmp_max,
    })
}
