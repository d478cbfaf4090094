//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the calculators use. These
//! are plain f64 newtypes so JSON stays as bare numbers.
//!
//! ## Units
//!
//! - Length: millimeters (mm) internally, meters (m) for display
//! - Voltage: volts (V)
//!
//! Input and result structs store raw `f64` fields with a unit suffix
//! (`_mm`, `_v`); these wrappers are for conversion and report formatting.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::units::{Meters, Millimeters};
//!
//! let rail = Millimeters(4400.0);
//! let rail_m: Meters = rail.into();
//! assert_eq!(rail_m.0, 4.4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MM_PER_M;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

// ============================================================================
// Electrical Units
// ============================================================================

/// Voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

// ============================================================================
// Display
// ============================================================================

// Precision comes from the formatter, e.g. `format!("{:.2}", Meters(4.4))`.
macro_rules! impl_display {
    ($type:ty, $suffix:expr) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*}{}", p, self.0, $suffix),
                    None => write!(f, "{}{}", self.0, $suffix),
                }
            }
        }
    };
}

impl_display!(Millimeters, "mm");
impl_display!(Meters, "m");
impl_display!(Volts, "V");
