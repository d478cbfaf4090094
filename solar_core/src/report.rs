//! # Text Reports
//!
//! Renders calculation results as plain-text breakdowns for terminal or
//! clipboard use. Rounding happens only here; result structs keep full
//! precision.
//!
//! Lengths are reported in meters (two decimals for rails, one for cable)
//! with the raw millimeter figure where it helps checking by hand.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::calculations::rail_length::{calculate, RailLengthInput};
//! use solar_core::report::rail_length_breakdown;
//!
//! let input = RailLengthInput::for_system("hopergy", 1000.0, 10).unwrap();
//! let result = calculate(&input).unwrap();
//! let text = rail_length_breakdown(&input, &result);
//! assert!(text.contains("Rail length: 10180mm (10.18m)"));
//! ```

use crate::calculations::{
    CableInput, CableResult, CalculationItem, CalculationOutput, ClampInput, ClampResult, RailLengthInput,
    RailLengthResult, StringSizeInput, StringSizeResult,
};
use crate::units::{Meters, Millimeters, Volts};

fn meters(mm: f64) -> Meters {
    Millimeters(mm).into()
}

/// Count or "-" when unknown
fn count_or_dash(count: Option<u32>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Rail sizing summary and per-run breakdown.
pub fn rail_length_breakdown(input: &RailLengthInput, result: &RailLengthResult) -> String {
    let panels = input.panel_count;
    let gaps = panels - 1;
    let rows = result.row_count;

    let mut output = String::new();
    output.push_str(&format!(
        "Total rail length: {:.2} ({:.0})\n",
        meters(result.total_rail_length_mm),
        Millimeters(result.total_rail_length_mm)
    ));
    output.push_str(&format!(
        "Stock rails: {} × {}\n",
        result.stock_rails_needed,
        meters(result.stock_rail_length_mm)
    ));
    output.push_str(&format!("Splices: {}\n", result.splices_needed));
    output.push_str(&format!("Waste: {:.2}\n\n", meters(result.waste_mm)));

    output.push_str("Per row (single rail run):\n");
    output.push_str(&format!(
        "  Panels: {} × {} = {}\n",
        panels,
        Millimeters(input.panel_width_mm),
        Millimeters(panels as f64 * input.panel_width_mm)
    ));
    output.push_str(&format!(
        "  Gaps: {} × {} = {}\n",
        gaps,
        Millimeters(result.gap_mm),
        Millimeters(gaps as f64 * result.gap_mm)
    ));
    output.push_str(&format!(
        "  Overhangs: 2 × {} = {}\n",
        Millimeters(result.overhang_mm),
        Millimeters(2.0 * result.overhang_mm)
    ));
    output.push_str(&format!(
        "  Rail length: {} ({:.2})\n\n",
        Millimeters(result.single_rail_length_mm),
        meters(result.single_rail_length_mm)
    ));
    output.push_str(&format!(
        "Total: {} row{} × 2 rails = {} rail runs",
        rows,
        plural(rows),
        result.rail_runs
    ));
    output
}

/// Clamp and bracket counts. Unknown bracket counts show as "-".
pub fn clamp_breakdown(input: &ClampInput, result: &ClampResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("End clamps: {}\n", result.end_clamps));
    output.push_str(&format!("Mid clamps: {}\n", result.mid_clamps));
    output.push_str(&format!("Total clamps: {}\n", result.total_clamps));
    output.push_str(&format!("Brackets per rail: {}\n", count_or_dash(result.brackets_per_rail)));
    output.push_str(&format!("Total brackets: {}\n\n", count_or_dash(result.total_brackets)));
    output.push_str(&format!(
        "{} panel{} per rail × {} rails",
        input.panel_count,
        plural(input.panel_count),
        result.total_rails
    ));
    output
}

/// Per-string and total DC cable.
pub fn cable_breakdown(_input: &CableInput, result: &CableResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Cable per string: {:.1}\n",
        meters(result.cable_per_string_with_margin_mm)
    ));
    output.push_str(&format!("Total cable: {:.1}\n\n", meters(result.total_cable_mm)));
    output.push_str(&format!("  Panel run: {:.1}\n", meters(result.panel_run_mm)));
    output.push_str(&format!("  Inverter leads (+/-): {:.1}\n", meters(result.inverter_run_mm)));
    output.push_str(&format!(
        "  {:.1} + 10% margin × {} string{}",
        meters(result.cable_per_string_mm),
        result.string_count,
        plural(result.string_count)
    ));
    output
}

/// String size limits, voltages, and any warnings against the MPPT window.
pub fn string_size_breakdown(input: &StringSizeInput, result: &StringSizeResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Max panels: {}\n", result.max_panels));
    output.push_str(&format!("Min panels: {}\n", result.min_panels));
    output.push_str(&format!("Adjusted Voc: {:.2}\n\n", Volts(result.adjusted_voc_v)));

    output.push_str(&format!("With {} panels:\n", result.max_panels));
    output.push_str(&format!("  Max Voc (cold): {:.1}\n", Volts(result.string_voc_max_v)));
    output.push_str(&format!(
        "  Vmp range: {:.1} - {:.1}\n\n",
        Volts(result.string_vmp_min_v),
        Volts(result.string_vmp_max_v)
    ));

    output.push_str("Inverter limits:\n");
    output.push_str(&format!("  Max DC: {}\n", Volts(input.inverter_max_v)));
    output.push_str(&format!("  MPPT: {} - {}", Volts(input.mppt_min_v), Volts(input.mppt_max_v)));

    let warnings = result.warnings(input);
    if !warnings.is_empty() {
        output.push_str("\n\nWarnings:");
        for warning in warnings {
            output.push_str(&format!("\n  ! {}", warning));
        }
    }
    output
}

/// Breakdown for any item/output pair. Returns `None` if they don't match.
pub fn breakdown(item: &CalculationItem, output: &CalculationOutput) -> Option<String> {
    match (item, output) {
        (CalculationItem::RailLength(i), CalculationOutput::RailLength(r)) => Some(rail_length_breakdown(i, r)),
        (CalculationItem::Clamps(i), CalculationOutput::Clamps(r)) => Some(clamp_breakdown(i, r)),
        (CalculationItem::Cable(i), CalculationOutput::Cable(r)) => Some(cable_breakdown(i, r)),
        (CalculationItem::StringSize(i), CalculationOutput::StringSize(r)) => Some(string_size_breakdown(i, r)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{cable, clamps, rail_length, string_size};

    #[test]
    fn test_rail_breakdown() {
        let input = RailLengthInput::for_system("hopergy", 1000.0, 10).unwrap();
        let result = rail_length::calculate(&input).unwrap();
        let text = rail_length_breakdown(&input, &result);

        assert!(text.contains("Total rail length: 20.36m (20360mm)"));
        assert!(text.contains("Stock rails: 6 × 4.4m"));
        assert!(text.contains("Splices: 4"));
        assert!(text.contains("Waste: 6.04m"));
        assert!(text.contains("Panels: 10 × 1000mm = 10000mm"));
        assert!(text.contains("Gaps: 9 × 20mm = 180mm"));
        assert!(text.contains("Overhangs: 2 × 25mm = 50mm"));
        assert!(text.ends_with("Total: 1 row × 2 rails = 2 rail runs"));
    }

    #[test]
    fn test_rail_breakdown_plural_rows() {
        let input = RailLengthInput::for_system("hopergy", 1000.0, 10).unwrap().with_rows(3);
        let result = rail_length::calculate(&input).unwrap();
        assert!(rail_length_breakdown(&input, &result).ends_with("3 rows × 2 rails = 6 rail runs"));
    }

    #[test]
    fn test_clamp_breakdown_unknown_brackets() {
        let input = ClampInput::new(10, 1);
        let result = clamps::calculate(&input).unwrap();
        let text = clamp_breakdown(&input, &result);
        assert!(text.contains("Brackets per rail: -"));
        assert!(text.contains("Total brackets: -"));
        assert!(text.contains("Total clamps: 22"));
    }

    #[test]
    fn test_cable_breakdown() {
        let input = CableInput::new(1700.0, 10, 5000.0);
        let result = cable::calculate(&input).unwrap();
        let text = cable_breakdown(&input, &result);
        assert!(text.contains("Cable per string: 27.8m"));
        assert!(text.contains("Total cable: 27.8m"));
    }

    #[test]
    fn test_string_breakdown() {
        let input = StringSizeInput {
            panel_voc_v: 45.0,
            panel_vmp_v: 38.0,
            inverter_max_v: 600.0,
            mppt_min_v: 150.0,
            mppt_max_v: 550.0,
            temp_coeff_pct_per_c: -0.29,
            min_temp_c: -10.0,
        };
        let result = string_size::calculate(&input).unwrap();
        let text = string_size_breakdown(&input, &result);

        assert!(text.contains("Adjusted Voc: 49.57V"));
        assert!(text.contains("Max Voc (cold): 594.8V"));
        assert!(text.contains("Vmp range: 387.6V - 456.0V"));
        assert!(text.contains("MPPT: 150V - 550V"));
        assert!(!text.contains("Warnings"));
    }

    #[test]
    fn test_mismatched_pair() {
        let item = CalculationItem::Clamps(ClampInput::new(2, 1));
        let output = CalculationItem::Cable(CableInput::new(1700.0, 2, 1000.0)).calculate().unwrap();
        assert!(breakdown(&item, &output).is_none());
    }
}
