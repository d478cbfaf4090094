//! Property-based tests for the calculators using proptest.
//!
//! Covers: rail waste never negative, clamp totals monotonic in panels and
//! rows, repeat calls giving identical results, zero counts rejected, and
//! oversized counts or dimensions returning an error instead of panicking.

use proptest::prelude::*;

use solar_core::calculations::cable::{self, CableInput};
use solar_core::calculations::clamps::{self, ClampInput};
use solar_core::calculations::rail_length::{self, RailLengthInput};
use solar_core::calculations::string_size::{self, StringSizeInput};
use solar_core::racking;

fn system_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(racking::all().iter().map(|s| s.id.as_str()).collect::<Vec<_>>())
}

// ── Rail Length ───────────────────────────────────────────────────────

proptest! {
    /// Ordered stock always covers what is needed.
    #[test]
    fn rail_waste_is_non_negative(
        id in system_id(),
        width in 100.0f64..2500.0,
        panels in 1u32..60,
        rows in 0u32..12,
        gap in prop::option::of(1.0f64..60.0),
        overhang in prop::option::of(0.0f64..200.0),
    ) {
        let mut input = RailLengthInput::for_system(id, width, panels).unwrap().with_rows(rows);
        input.gap_override_mm = gap;
        input.overhang_override_mm = overhang;
        let result = rail_length::calculate(&input).unwrap();

        prop_assert!(result.waste_mm >= -1e-6);
        prop_assert_eq!(result.stock_rails_needed, result.stock_rails_per_run * result.rail_runs);
        prop_assert_eq!(result.splices_per_run + 1, result.stock_rails_per_run);
    }

    /// Waste on one run is less than one stock length.
    #[test]
    fn rail_waste_per_run_below_stock_length(
        width in 100.0f64..2500.0,
        panels in 1u32..60,
    ) {
        let input = RailLengthInput::for_system("clenergy", width, panels).unwrap();
        let result = rail_length::calculate(&input).unwrap();
        let per_run = result.waste_mm / result.rail_runs as f64;
        prop_assert!(per_run < result.stock_rail_length_mm);
    }

    /// Very wide panels either size correctly or are rejected.
    #[test]
    fn rail_huge_widths_never_wrap(
        width in prop_oneof![1.0e6f64..1.0e12, 1.0e12f64..1.0e300],
        panels in 1u32..1000,
        rows in 1u32..1000,
    ) {
        let input = RailLengthInput::for_system("hopergy", width, panels).unwrap().with_rows(rows);
        match rail_length::calculate(&input) {
            Ok(result) => {
                prop_assert!(result.waste_mm >= -1e-6 * result.total_rail_length_mm);
                prop_assert_eq!(
                    result.stock_rails_needed as u64,
                    result.stock_rails_per_run as u64 * result.rail_runs as u64
                );
            }
            Err(e) => prop_assert_eq!(e.error_code(), "INVALID_INPUT"),
        }
    }

    #[test]
    fn rail_is_idempotent(width in 100.0f64..2500.0, panels in 1u32..60, rows in 1u32..10) {
        let input = RailLengthInput::for_system("hopergy", width, panels).unwrap().with_rows(rows);
        prop_assert_eq!(rail_length::calculate(&input).unwrap(), rail_length::calculate(&input).unwrap());
    }
}

// ── Clamps ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clamp_total_monotonic_in_panels(panels in 1u32..200, rows in 1u32..20) {
        let fewer = clamps::calculate(&ClampInput::new(panels, rows)).unwrap();
        let more = clamps::calculate(&ClampInput::new(panels + 1, rows)).unwrap();
        prop_assert!(more.total_clamps >= fewer.total_clamps);
    }

    #[test]
    fn clamp_total_monotonic_in_rows(panels in 1u32..200, rows in 1u32..20) {
        let fewer = clamps::calculate(&ClampInput::new(panels, rows)).unwrap();
        let more = clamps::calculate(&ClampInput::new(panels, rows + 1)).unwrap();
        prop_assert!(more.total_clamps >= fewer.total_clamps);
    }

    #[test]
    fn clamps_is_idempotent(
        panels in 1u32..500,
        rows in 1u32..50,
        spacing in prop::option::of(100.0f64..2000.0),
        length in prop::option::of(100.0f64..20000.0),
    ) {
        let mut input = ClampInput::new(panels, rows);
        input.bracket_spacing_mm = spacing;
        input.rail_length_mm = length;
        prop_assert_eq!(clamps::calculate(&input).unwrap(), clamps::calculate(&input).unwrap());
    }

    /// Any count either gives exact totals or is rejected as invalid input.
    #[test]
    fn clamp_huge_counts_never_wrap(panels in 1u32..=u32::MAX, rows in 1u32..=u32::MAX) {
        match clamps::calculate(&ClampInput::new(panels, rows)) {
            Ok(result) => {
                let rails = 2 * rows as u64;
                prop_assert_eq!(result.total_rails as u64, rails);
                prop_assert_eq!(result.mid_clamps as u64, (panels as u64 - 1) * rails);
                prop_assert_eq!(result.total_clamps as u64, (panels as u64 + 1) * rails);
            }
            Err(e) => prop_assert_eq!(e.error_code(), "INVALID_INPUT"),
        }
    }

    /// Brackets are known exactly when both spacing and length are positive.
    #[test]
    fn brackets_known_only_with_positive_data(
        spacing in prop::option::of(prop_oneof![-500.0f64..=0.0, 100.0f64..2000.0]),
        length in prop::option::of(prop_oneof![-500.0f64..=0.0, 100.0f64..20000.0]),
    ) {
        let mut input = ClampInput::new(6, 2);
        input.bracket_spacing_mm = spacing;
        input.rail_length_mm = length;
        let result = clamps::calculate(&input).unwrap();

        let usable = matches!((spacing, length), (Some(s), Some(l)) if s > 0.0 && l > 0.0);
        prop_assert_eq!(result.brackets_per_rail.is_some(), usable);
        if let Some(per_rail) = result.brackets_per_rail {
            prop_assert!(per_rail >= 2);
        }
    }
}

// ── Cable and String ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn cable_total_scales_with_strings(
        height in 500.0f64..2500.0,
        panels in 1u32..30,
        distance in 100.0f64..50000.0,
        strings in 1u32..10,
    ) {
        let single = cable::calculate(&CableInput::new(height, panels, distance)).unwrap();
        let many = cable::calculate(&CableInput::new(height, panels, distance).with_strings(strings)).unwrap();
        let expected = single.total_cable_mm * strings as f64;
        prop_assert!((many.total_cable_mm - expected).abs() < 1e-6 * expected);
    }

    #[test]
    fn cable_is_idempotent(
        height in 500.0f64..2500.0,
        panels in 1u32..30,
        distance in 100.0f64..50000.0,
        strings in prop::option::of(0u32..10),
    ) {
        let mut input = CableInput::new(height, panels, distance);
        input.string_count = strings;
        prop_assert_eq!(cable::calculate(&input).unwrap(), cable::calculate(&input).unwrap());
    }

    /// Max string Voc never exceeds the inverter limit.
    #[test]
    fn string_voc_within_inverter_limit(
        voc in 20.0f64..60.0,
        inverter_max in 100.0f64..1500.0,
        coeff in -0.5f64..0.5,
        min_temp in -40.0f64..25.0,
    ) {
        let input = StringSizeInput {
            panel_voc_v: voc,
            panel_vmp_v: voc * 0.82,
            inverter_max_v: inverter_max,
            mppt_min_v: 100.0,
            mppt_max_v: inverter_max * 0.9,
            temp_coeff_pct_per_c: coeff,
            min_temp_c: min_temp,
        };
        let result = string_size::calculate(&input).unwrap();
        prop_assert!(result.string_voc_max_v <= inverter_max + 1e-9);
        prop_assert!(result.adjusted_voc_v >= voc);
    }
}

// ── Boundaries ────────────────────────────────────────────────────────

#[test]
fn zero_panel_count_rejected_everywhere() {
    assert!(rail_length::calculate(&RailLengthInput::for_system("hopergy", 1000.0, 0).unwrap()).is_err());
    assert!(clamps::calculate(&ClampInput::new(0, 1)).is_err());
    assert!(cable::calculate(&CableInput::new(1700.0, 0, 5000.0)).is_err());
}

#[test]
fn oversized_inputs_are_invalid_not_panics() {
    let err = clamps::calculate(&ClampInput::new(u32::MAX, 1)).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");

    for width in [1.0e13, 1.0e30] {
        let input = RailLengthInput::for_system("hopergy", width, 1).unwrap();
        let err = rail_length::calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("panel_width_mm"));
    }
}

#[test]
fn negative_dimensions_rejected() {
    assert!(rail_length::calculate(&RailLengthInput::for_system("hopergy", -1000.0, 10).unwrap()).is_err());
    assert!(cable::calculate(&CableInput::new(-1700.0, 10, 5000.0)).is_err());
}
