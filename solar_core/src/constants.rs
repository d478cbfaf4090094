//! # Formula Constants
//!
//! Fixed factors shared by the calculators. None of these are user
//! configurable; per-call configuration goes through the `Option` override
//! fields on each input type.

/// Rails per row of panels (one above, one below).
pub const RAILS_PER_ROW: u32 = 2;

/// End clamps per rail (one at each end).
pub const END_CLAMPS_PER_RAIL: u32 = 2;

/// Slack factor applied to DC cable for routing and terminations (+10%).
pub const CABLE_MARGIN_FACTOR: f64 = 1.10;

/// Leads per string back to the inverter (positive and negative).
pub const INVERTER_LEADS_PER_STRING: f64 = 2.0;

/// Standard Test Conditions cell temperature (°C).
pub const STC_TEMP_C: f64 = 25.0;

/// Rough hot-weather derating applied to string Vmp.
pub const HOT_VMP_DERATE: f64 = 0.85;

/// Millimeters per meter
pub const MM_PER_M: f64 = 1000.0;
