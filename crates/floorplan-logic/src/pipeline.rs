//! End-to-end generation: plot admission → catalog lookup → allocation
//! → placement → validation → openings → report.
//!
//! Every stage is a pure function of its inputs, so `generate` is
//! deterministic and safe to call from many threads at once.

use crate::allocation::{allocate, AllocatedAreas};
use crate::catalog::{lookup, TemplateKey};
use crate::config::GeneratorConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{validate_layout, PlotSpec, Severity};
use crate::openings::{synthesize, OpeningSpec};
use crate::placement::{place, Layout};
use crate::report::{compile, Report};
use serde::Serialize;

/// Everything one request produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPlan {
    pub key: TemplateKey,
    pub plot: PlotSpec,
    pub allocation: AllocatedAreas,
    pub layout: Layout,
    pub openings: Vec<OpeningSpec>,
    pub report: Report,
}

/// Reject plots the catalog is not authored for: non-finite or
/// non-positive sides, or a height/width ratio outside the configured window.
pub fn check_plot(plot: &PlotSpec, config: &GeneratorConfig) -> LayoutResult<()> {
    let reject = |reason: String| {
        log::warn!("rejecting plot {}x{}: {}", plot.width, plot.height, reason);
        Err(LayoutError::UnsupportedPlot {
            width: plot.width,
            height: plot.height,
            reason,
        })
    };

    if !(plot.width.is_finite() && plot.height.is_finite()) {
        return reject("dimensions must be finite".to_string());
    }
    if plot.width <= 0.0 || plot.height <= 0.0 {
        return reject("dimensions must be positive".to_string());
    }
    let aspect = plot.height / plot.width;
    if aspect < config.min_aspect || aspect > config.max_aspect {
        return reject(format!(
            "aspect {:.3} outside [{}, {}]",
            aspect, config.min_aspect, config.max_aspect
        ));
    }
    Ok(())
}

/// Generate a floor plan for `plot` from the template filed under `key`.
pub fn generate(
    plot: &PlotSpec,
    key: &TemplateKey,
    config: &GeneratorConfig,
) -> LayoutResult<FloorPlan> {
    log::info!("generating {} on {}x{} plot", key, plot.width, plot.height);
    config.validate()?;
    check_plot(plot, config)?;

    let template = lookup(key, plot)?;
    log::debug!(
        "template {} ({:?}, {} steps, {} opening rules)",
        template.key,
        template.mode,
        template.steps.len(),
        template.openings.len()
    );

    let allocation = allocate(plot.area(), &template.bounds, template.mode)?;
    let layout = place(template, plot, &allocation, config)?;

    let findings = validate_layout(
        &layout,
        &allocation,
        plot,
        config.length_eps(plot.width, plot.height),
        config.area_eps(plot.area()),
    );
    let (errors, warnings): (Vec<_>, Vec<_>) = findings
        .into_iter()
        .partition(|f| f.severity == Severity::Error);
    for w in &warnings {
        log::warn!("[{}] {}", w.category, w.message);
    }
    if !errors.is_empty() {
        return Err(LayoutError::InvalidLayout { errors });
    }

    let openings = synthesize(&layout, &template.openings, plot, config)?;
    let report = compile(plot, &allocation, &layout, config);
    log::info!(
        "{}: {} rooms, {} openings, {:.2} open floor",
        key,
        layout.rooms.len(),
        openings.len(),
        layout.open_area
    );

    Ok(FloorPlan {
        key: *key,
        plot: *plot,
        allocation,
        layout,
        openings,
        report,
    })
}
