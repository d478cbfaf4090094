//! # solar_core - Solar Installation Calculation Engine
//!
//! `solar_core` holds the arithmetic behind PV installation planning: rail
//! sizing, clamp and bracket counts, DC cable estimates and string sizing.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No formatting in results**: rounding and unit display live in [`report`]
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_core::calculations::rail_length::{calculate, RailLengthInput};
//!
//! let input = RailLengthInput::for_system("schletter-proline", 1134.0, 8)
//!     .unwrap()
//!     .with_rows(2);
//! let result = calculate(&input).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`racking`] - Racking system catalog
//! - [`calculations`] - Rail, clamp, cable and string calculators
//! - [`report`] - Text breakdowns of results
//! - [`units`] - Type-safe unit wrappers
//! - [`constants`] - Fixed formula factors
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod racking;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, CalculatorKind};
pub use errors::{CalcError, CalcResult};
pub use racking::RackingSystem;
