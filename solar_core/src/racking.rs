//! # Racking System Catalog
//!
//! Constants for the supported rail mounting systems: default panel gap,
//! default end overhang, and the stock length rails are sold in.
//!
//! The catalog is a read-only table built once on first access. Lookups are
//! by identifier (`"hopergy"`, `"clenergy-universal"`, ...).
//!
//! ## Example
//!
//! ```rust
//! use solar_core::racking;
//!
//! let system = racking::lookup("clenergy").unwrap();
//! assert_eq!(system.rail_length_mm, 3600.0);
//!
//! assert!(racking::lookup("acme").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Constants for one racking system.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "hopergy",
///   "name": "Hopergy",
///   "default_gap_mm": 20.0,
///   "default_overhang_mm": 25.0,
///   "rail_length_mm": 4400.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackingSystem {
    /// Catalog identifier (lower-case, kebab-case)
    pub id: String,

    /// Display name
    pub name: String,

    /// Gap between adjacent panels in mm (mid clamp width)
    pub default_gap_mm: f64,

    /// Rail extension past the outer panel edge at each end, in mm
    pub default_overhang_mm: f64,

    /// Stock rail length as supplied, in mm
    pub rail_length_mm: f64,
}

impl RackingSystem {
    /// Build a system outside the catalog (site-specific rail stock, etc.)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        default_gap_mm: f64,
        default_overhang_mm: f64,
        rail_length_mm: f64,
    ) -> Self {
        RackingSystem {
            id: id.into(),
            name: name.into(),
            default_gap_mm,
            default_overhang_mm,
            rail_length_mm,
        }
    }

    /// Validate the constants. Catalog entries always pass; this guards
    /// systems built by callers or deserialized from JSON.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.rail_length_mm.is_finite() || self.rail_length_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "system.rail_length_mm",
                self.rail_length_mm.to_string(),
                "Stock rail length must be positive",
            ));
        }
        if !self.default_gap_mm.is_finite() || self.default_gap_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "system.default_gap_mm",
                self.default_gap_mm.to_string(),
                "Default gap must be positive",
            ));
        }
        if !self.default_overhang_mm.is_finite() || self.default_overhang_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "system.default_overhang_mm",
                self.default_overhang_mm.to_string(),
                "Default overhang cannot be negative",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for RackingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// (id, name, gap, overhang, stock rail length)
const CATALOG_DATA: [(&str, &str, f64, f64, f64); 6] = [
    ("hopergy", "Hopergy", 20.0, 25.0, 4400.0),
    ("clenergy", "Clenergy", 18.0, 20.0, 3600.0),
    ("clenergy-universal", "Clenergy (Universal)", 20.0, 20.0, 3600.0),
    ("schletter-proline", "Schletter ProLine", 20.0, 25.0, 4400.0),
    ("schletter-classic", "Schletter Classic", 20.0, 25.0, 4400.0),
    ("custom", "Custom", 20.0, 25.0, 4400.0),
];

/// Identifier of the system offered first in menus
pub const DEFAULT_SYSTEM_ID: &str = "hopergy";

static CATALOG: Lazy<Vec<RackingSystem>> = Lazy::new(|| {
    CATALOG_DATA
        .iter()
        .map(|&(id, name, gap, overhang, rail)| RackingSystem::new(id, name, gap, overhang, rail))
        .collect()
});

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATALOG_DATA
        .iter()
        .enumerate()
        .map(|(i, &(id, ..))| (id, i))
        .collect()
});

/// All catalog entries in menu order.
pub fn all() -> &'static [RackingSystem] {
    &CATALOG
}

/// Look up a racking system by identifier.
///
/// Matching ignores surrounding whitespace and ASCII case.
///
/// # Returns
///
/// * `Ok(&RackingSystem)` - The catalog entry
/// * `Err(CalcError::UnknownSystem)` - No entry with that identifier
pub fn lookup(id: &str) -> CalcResult<&'static RackingSystem> {
    let key = id.trim().to_ascii_lowercase();
    INDEX
        .get(key.as_str())
        .map(|&i| &CATALOG[i])
        .ok_or_else(|| CalcError::unknown_system(id))
}
