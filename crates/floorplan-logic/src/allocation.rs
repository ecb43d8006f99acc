//! Area allocation under percentage-of-plot bounds.
//!
//! A linear program with box-constrained variables and one sum constraint
//! has a closed-form deterministic solution: start every room at its
//! minimum and spread the remaining slack in proportion to each room's
//! range. In `Exact` mode the spread lands precisely on the plot area; in
//! `Bounded` mode it stops at the maxima when the plot is roomier than the
//! bounds allow, which is the largest attainable total.

use crate::error::{BoundViolation, LayoutError, LayoutResult};
use crate::rooms::RoomKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room kind → allocated area (plot units squared).
pub type AllocatedAreas = BTreeMap<RoomKind, f64>;

/// How the allocated areas must relate to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalityMode {
    /// Areas sum to exactly the plot area.
    Exact,
    /// Areas sum to at most the plot area, with the total maximized.
    Bounded,
}

/// One room's share of the plot, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBound {
    pub room: RoomKind,
    pub min_percent: f64,
    pub max_percent: f64,
}

impl AreaBound {
    pub fn new(room: RoomKind, min_percent: f64, max_percent: f64) -> Self {
        Self {
            room,
            min_percent,
            max_percent,
        }
    }

    pub fn min_area(&self, plot_area: f64) -> f64 {
        self.min_percent * plot_area / 100.0
    }

    pub fn max_area(&self, plot_area: f64) -> f64 {
        self.max_percent * plot_area / 100.0
    }

    fn violation(&self) -> BoundViolation {
        BoundViolation {
            room: self.room,
            min_percent: self.min_percent,
            max_percent: self.max_percent,
        }
    }
}

/// Slack allowed on the percentage sums before a bound set is declared infeasible.
const PERCENT_EPS: f64 = 1e-9;

/// Solve room areas for a plot of area `plot_area`.
pub fn allocate(
    plot_area: f64,
    bounds: &[AreaBound],
    mode: TotalityMode,
) -> LayoutResult<AllocatedAreas> {
    let min_total: f64 = bounds.iter().map(|b| b.min_percent).sum();
    let max_total: f64 = bounds.iter().map(|b| b.max_percent).sum();
    let infeasible = |reason: &str, violations: Vec<BoundViolation>| LayoutError::InfeasibleAllocation {
        reason: reason.to_string(),
        violations,
        min_total,
        max_total,
    };

    let malformed: Vec<_> = bounds
        .iter()
        .filter(|b| {
            !(b.min_percent.is_finite() && b.max_percent.is_finite())
                || b.min_percent < 0.0
                || b.min_percent > b.max_percent
        })
        .map(AreaBound::violation)
        .collect();
    if !malformed.is_empty() {
        return Err(infeasible("malformed bound", malformed));
    }

    let mut seen = Vec::with_capacity(bounds.len());
    for b in bounds {
        if seen.contains(&b.room) {
            return Err(infeasible("room bounded twice", vec![b.violation()]));
        }
        seen.push(b.room);
    }

    if min_total > 100.0 + PERCENT_EPS {
        return Err(infeasible(
            "minimum percentages exceed 100",
            bounds.iter().map(AreaBound::violation).collect(),
        ));
    }
    if mode == TotalityMode::Exact && max_total < 100.0 - PERCENT_EPS {
        return Err(infeasible(
            "maximum percentages fall short of 100",
            bounds.iter().map(AreaBound::violation).collect(),
        ));
    }

    let min_sum: f64 = bounds.iter().map(|b| b.min_area(plot_area)).sum();
    let range_sum: f64 = bounds
        .iter()
        .map(|b| b.max_area(plot_area) - b.min_area(plot_area))
        .sum();
    let slack = (plot_area - min_sum).max(0.0);
    let t = if range_sum > 0.0 {
        (slack / range_sum).min(1.0)
    } else {
        0.0
    };

    let areas: AllocatedAreas = bounds
        .iter()
        .map(|b| {
            let lo = b.min_area(plot_area);
            let hi = b.max_area(plot_area);
            (b.room, (lo + t * (hi - lo)).clamp(lo, hi))
        })
        .collect();

    log::debug!(
        "allocated {} rooms ({:?}): total {:.3} of {:.3}",
        areas.len(),
        mode,
        areas.values().sum::<f64>(),
        plot_area
    );
    Ok(areas)
}

/// Sum of allocated areas.
pub fn total_area(areas: &AllocatedAreas) -> f64 {
    areas.values().sum()
}
