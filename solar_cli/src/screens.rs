//! Screen view-state and the form for each calculator.
//!
//! The CLI is a small state machine: the home menu, or one calculator
//! screen. A calculator screen collects its inputs and shows the breakdown,
//! then returns to home. On an error it shows the message and the error JSON
//! and stays on the same screen until the user retries or backs out.

use std::io::{BufRead, Write};

use solar_core::calculations::{
    CableInput, CalculationItem, CalculatorKind, ClampInput, RailLengthInput, StringSizeInput,
};
use solar_core::racking::{self, RackingSystem, DEFAULT_SYSTEM_ID};
use solar_core::report;
use tracing::debug;

use crate::prompt::Prompter;

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Calculator(CalculatorKind),
}

impl Screen {
    /// Header title for the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Solar Calculator",
            Screen::Calculator(kind) => kind.title(),
        }
    }

    /// Menu selection from the home screen. `None` for anything unrecognized.
    pub fn from_menu_choice(choice: &str) -> Option<Screen> {
        let index: usize = choice.parse().ok()?;
        CalculatorKind::ALL
            .get(index.checked_sub(1)?)
            .map(|&kind| Screen::Calculator(kind))
    }
}

/// Run screens until the user quits or input runs out.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) {
    let mut screen = Screen::Home;
    loop {
        debug!(?screen, "showing screen");
        screen = match screen {
            Screen::Home => match home(p) {
                Some(next) => next,
                None => return,
            },
            Screen::Calculator(kind) => match calculator(p, kind) {
                Some(next) => next,
                None => return,
            },
        };
    }
}

fn header<R: BufRead, W: Write>(p: &mut Prompter<R, W>, screen: Screen) -> Option<()> {
    let title = screen.title();
    p.say(&format!("\n{}\n{}", title, "=".repeat(title.chars().count())))
}

/// Home menu. Returns the next screen, or `None` to quit.
fn home<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<Screen> {
    header(p, Screen::Home)?;
    let mut menu = String::new();
    for (i, kind) in CalculatorKind::ALL.iter().enumerate() {
        menu.push_str(&format!("  {}) {}\n", i + 1, kind.title()));
    }
    menu.push_str("  q) Quit");
    p.say(&menu)?;

    loop {
        let choice = p.line("> ")?;
        if choice.eq_ignore_ascii_case("q") {
            return None;
        }
        match Screen::from_menu_choice(&choice) {
            Some(screen) => return Some(screen),
            None => p.say(&format!("  Pick 1-{} or q.", CalculatorKind::ALL.len()))?,
        }
    }
}

/// Collect inputs for one calculator, run it and print the outcome.
///
/// Returns the next screen: home after a result, this calculator again
/// when the user retries after an error. `None` if input ran out.
fn calculator<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CalculatorKind) -> Option<Screen> {
    header(p, Screen::Calculator(kind))?;

    let item = match kind {
        CalculatorKind::RailLength => CalculationItem::RailLength(rail_form(p)?),
        CalculatorKind::ClampCount => CalculationItem::Clamps(clamp_form(p)?),
        CalculatorKind::CableLength => CalculationItem::Cable(cable_form(p)?),
        CalculatorKind::StringSize => CalculationItem::StringSize(string_form(p)?),
    };

    match item.calculate() {
        Ok(output) => {
            if let Some(text) = report::breakdown(&item, &output) {
                p.say(&format!("\n{}", text))?;
            }
            Some(Screen::Home)
        }
        Err(e) => {
            debug!(code = e.error_code(), "calculation rejected");
            let mut text = format!("\nError: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                text.push_str(&format!("\n\nError JSON:\n{}", json));
            }
            p.say(&text)?;

            let choice = p.line("\n[Enter] retry, b) back: ")?;
            if choice.eq_ignore_ascii_case("b") {
                Some(Screen::Home)
            } else {
                Some(Screen::Calculator(kind))
            }
        }
    }
}

fn pick_system<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<RackingSystem> {
    let systems = racking::all();
    let listing: Vec<String> = systems
        .iter()
        .enumerate()
        .map(|(i, system)| format!("  {}) {}", i + 1, system.name))
        .collect();
    p.say(&listing.join("\n"))?;
    loop {
        let choice = p.line(&format!("Racking system [{}]: ", DEFAULT_SYSTEM_ID))?;
        let found = if choice.is_empty() {
            racking::lookup(DEFAULT_SYSTEM_ID)
        } else if let Some(system) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| systems.get(i))
        {
            Ok(system)
        } else {
            racking::lookup(&choice)
        };
        match found {
            Ok(system) => return Some(system.clone()),
            Err(e) => p.say(&format!("  {}", e))?,
        }
    }
}

fn rail_form<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<RailLengthInput> {
    let system = pick_system(p)?;
    let panel_width_mm = p.f64("Panel width (mm): ")?;
    let panel_count = p.u32("Panels per row: ")?;
    let row_count = p.u32_or("Rows [1]: ", 1)?;
    let gap = p.optional_f64(&format!("Gap (mm) [default {}]: ", system.default_gap_mm))?;
    let overhang = p.optional_f64(&format!("Overhang (mm) [default {}]: ", system.default_overhang_mm))?;

    let mut input = RailLengthInput::new(system, panel_width_mm, panel_count).with_rows(row_count);
    input.gap_override_mm = gap;
    input.overhang_override_mm = overhang;
    Some(input)
}

fn clamp_form<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<ClampInput> {
    let panel_count = p.u32("Panels per row: ")?;
    let row_count = p.u32("Rows: ")?;
    let bracket_spacing_mm = p.optional_f64("Bracket spacing (mm) [optional]: ")?;
    let rail_length_mm = p.optional_f64("Rail length (mm) [optional]: ")?;
    Some(ClampInput {
        panel_count,
        row_count,
        bracket_spacing_mm,
        rail_length_mm,
    })
}

fn cable_form<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<CableInput> {
    let panel_height_mm = p.f64("Panel height (mm): ")?;
    let panel_count = p.u32("Panels per string: ")?;
    let inverter_distance_mm = p.f64("Distance to inverter (mm): ")?;
    let string_count = p.u32_or("Strings [1]: ", 1)?;
    Some(CableInput::new(panel_height_mm, panel_count, inverter_distance_mm).with_strings(string_count))
}

fn string_form<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Option<StringSizeInput> {
    Some(StringSizeInput {
        panel_voc_v: p.f64("Panel Voc (V): ")?,
        panel_vmp_v: p.f64("Panel Vmp (V): ")?,
        inverter_max_v: p.f64("Inverter max DC voltage (V): ")?,
        mppt_min_v: p.f64("MPPT minimum (V): ")?,
        mppt_max_v: p.f64("MPPT maximum (V): ")?,
        temp_coeff_pct_per_c: p.f64_or("Voc temp coefficient (%/°C) [-0.29]: ", -0.29)?,
        min_temp_c: p.f64_or("Minimum temperature (°C) [-10]: ", -10.0)?,
    })
}
