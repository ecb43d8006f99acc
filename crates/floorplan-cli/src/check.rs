//! Headless template sweep.
//!
//! Runs every catalog template over a grid of aspect ratios and scales and
//! collects one pass/fail result per check. Everything runs in-process on
//! the pure logic crate.

use floorplan_logic::allocation::{allocate, AreaBound, TotalityMode};
use floorplan_logic::catalog::{catalog, keys, Template, TemplateKey};
use floorplan_logic::config::GeneratorConfig;
use floorplan_logic::error::LayoutError;
use floorplan_logic::geometry::PlotSpec;
use floorplan_logic::pipeline::generate;
use floorplan_logic::rooms::RoomKind;

pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Plot heights the sweep runs at.
const SCALES: [f64; 3] = [12.0, 40.0, 100.0];

/// Width/height ratios from 0.5 to 2.5 in steps of 0.1.
fn ratios() -> impl Iterator<Item = f64> {
    (5..=25).map(|i| i as f64 / 10.0)
}

pub fn run(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    // 1. Catalog shape
    results.extend(validate_catalog(verbose));

    // 2. Every template over the plot grid
    let config = GeneratorConfig::default();
    println!("--- Template Sweep ---");
    for template in catalog() {
        results.extend(sweep_template(template, &config, verbose));
    }

    // 3. Rejections
    results.extend(validate_rejections());

    results
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    let keys = keys();
    results.push(TestResult {
        name: "catalog_keys".into(),
        passed: keys.len() == catalog().len() && !keys.is_empty(),
        detail: format!("{} keys, {} entries", keys.len(), catalog().len()),
    });

    let round_trip: Vec<_> = keys
        .iter()
        .filter(|k| k.to_string().parse::<TemplateKey>().ok() != Some(**k))
        .collect();
    results.push(TestResult {
        name: "catalog_keys_parse".into(),
        passed: round_trip.is_empty(),
        detail: if round_trip.is_empty() {
            "every key parses from its own name".into()
        } else {
            format!("{} keys fail to parse back", round_trip.len())
        },
    });

    if verbose {
        for k in &keys {
            println!("  {}", k);
        }
    }
    results
}

// ── 2. Sweep ────────────────────────────────────────────────────────────

fn sweep_template(template: &Template, config: &GeneratorConfig, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();
    let mut runs = 0;
    let mut failures = Vec::new();
    let mut missing_openings = 0;
    let mut min_open = f64::INFINITY;

    for height in SCALES {
        for ratio in ratios() {
            let plot = PlotSpec::new(height * ratio, height);
            if !template.orientation.accepts(&plot) {
                continue;
            }
            runs += 1;
            match generate(&plot, &template.key, config) {
                Ok(plan) => {
                    if plan.openings.len() != template.openings.len() {
                        missing_openings += 1;
                    }
                    min_open = min_open.min(plan.layout.open_area / plot.area());
                }
                Err(e) => failures.push(format!("{}x{}: {}", plot.width, plot.height, e)),
            }
        }
    }

    results.push(TestResult {
        name: format!("{}_generates", template.key),
        passed: runs > 0 && failures.is_empty(),
        detail: if failures.is_empty() {
            format!("{} plots", runs)
        } else {
            format!("{}/{} failed, first: {}", failures.len(), runs, failures[0])
        },
    });
    results.push(TestResult {
        name: format!("{}_openings", template.key),
        passed: missing_openings == 0,
        detail: format!("{} rules, {} short runs", template.openings.len(), missing_openings),
    });

    if verbose && min_open.is_finite() {
        println!(
            "  {}: {} plots, min open floor {:.1}%",
            template.key,
            runs,
            min_open * 100.0
        );
    }
    results
}

// ── 3. Rejections ───────────────────────────────────────────────────────

fn validate_rejections() -> Vec<TestResult> {
    println!("--- Rejections ---");
    let mut results = Vec::new();

    let unknown = TemplateKey::from_parts("5bhk", "north", "standard");
    results.push(TestResult {
        name: "unknown_key_rejected".into(),
        passed: matches!(unknown, Err(LayoutError::UnsupportedTemplate { .. })),
        detail: "5bhk/north/standard".into(),
    });

    let bounds = [
        AreaBound::new(RoomKind::Living, 60.0, 70.0),
        AreaBound::new(RoomKind::Kitchen, 45.0, 50.0),
    ];
    let infeasible = allocate(1200.0, &bounds, TotalityMode::Exact);
    results.push(TestResult {
        name: "min_over_100_infeasible".into(),
        passed: matches!(infeasible, Err(LayoutError::InfeasibleAllocation { .. })),
        detail: "Σmin = 105%".into(),
    });

    let narrow = "1bhk/north/standard"
        .parse::<TemplateKey>()
        .and_then(|key| generate(&PlotSpec::new(10.0, 40.0), &key, &GeneratorConfig::default()));
    results.push(TestResult {
        name: "narrow_plot_rejected".into(),
        passed: matches!(narrow, Err(LayoutError::UnsupportedPlot { .. })),
        detail: "10x40 (aspect 4.0)".into(),
    });

    results
}
