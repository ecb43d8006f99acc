//! Per-room summary: area, rounded dimensions and compass direction.
//!
//! Areas are reported as computed; only widths and heights are rounded to
//! `report_precision` places.

use crate::allocation::AllocatedAreas;
use crate::config::GeneratorConfig;
use crate::geometry::{PlotSpec, Point};
use crate::placement::Layout;
use crate::rooms::RoomKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Compass bucket of a room centroid relative to the plot's thirds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Central,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Central => "Central",
        }
    }
}

/// Bucket a centroid. North/South take precedence over East/West.
pub fn direction(centroid: Point, plot: &PlotSpec, config: &GeneratorConfig) -> Direction {
    if centroid.y > config.north_threshold * plot.height {
        Direction::North
    } else if centroid.y < config.south_threshold * plot.height {
        Direction::South
    } else if centroid.x > config.north_threshold * plot.width {
        Direction::East
    } else if centroid.x < config.south_threshold * plot.width {
        Direction::West
    } else {
        Direction::Central
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomSummary {
    pub area: f64,
    pub width: f64,
    pub height: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotMetadata {
    pub total_area: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub plot: PlotMetadata,
    pub rooms: BTreeMap<RoomKind, RoomSummary>,
    pub open_area: f64,
    #[serde(skip)]
    precision: usize,
}

fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Summarize a placed layout.
pub fn compile(
    plot: &PlotSpec,
    areas: &AllocatedAreas,
    layout: &Layout,
    config: &GeneratorConfig,
) -> Report {
    let precision = config.report_precision;
    let rooms = layout
        .rooms
        .iter()
        .map(|(&kind, rect)| {
            let area = layout
                .resolved_area(kind, areas)
                .unwrap_or_else(|| rect.area());
            let summary = RoomSummary {
                area,
                width: round_to(rect.a2().x - rect.a1().x, precision),
                height: round_to(rect.a1().y - rect.a4().y, precision),
                direction: direction(rect.centroid(), plot, config),
            };
            (kind, summary)
        })
        .collect();

    Report {
        plot: PlotMetadata {
            total_area: plot.area(),
            width: plot.width,
            height: plot.height,
        },
        rooms,
        open_area: layout.open_area,
        precision: precision as usize,
    }
}

impl Report {
    /// Plain-text rendering, one line per room. `generated` is a
    /// caller-supplied timestamp; the library never reads the clock.
    pub fn to_text(&self, layout_id: &str, generated: Option<&str>) -> String {
        let p = self.precision;
        let mut out = String::new();
        let _ = writeln!(out, "ARCHITECTURAL REPORT | ID: {}", layout_id);
        if let Some(ts) = generated {
            let _ = write!(out, "Generated: {} | ", ts);
        }
        let _ = writeln!(out, "Plot: {:.p$} sq.ft", self.plot.total_area);
        let _ = writeln!(out, "{}", "-".repeat(55));
        for (kind, room) in &self.rooms {
            let dims = format!("{:.p$}x{:.p$}", room.width, room.height);
            let _ = writeln!(
                out,
                "{:<16} {:>10.p$}  {:<15} {}",
                kind.name(),
                room.area,
                dims,
                room.direction.name()
            );
        }
        if self.open_area > 0.0 {
            let _ = writeln!(out, "{:<16} {:>10.p$}", "(open floor)", self.open_area);
        }
        out
    }
}
