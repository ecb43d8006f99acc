//! Plot and rectangle geometry, plus validation of generated layouts.
//!
//! The coordinate system has its origin at the plot's south-west corner,
//! x growing East and y growing North. Validation functions are pure:
//! they take room rectangles and return a list of errors.

use crate::allocation::AllocatedAreas;
use crate::placement::Layout;
use crate::rooms::RoomKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The rectangular buildable footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub width: f64,
    pub height: f64,
}

impl PlotSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Wider than tall. A square plot counts as portrait.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A compass side: the edge of a region or the wall of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// North and South walls run along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// The side this one lands on after a clockwise quarter turn.
    pub fn turned_cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The side this one lands on after a counter-clockwise quarter turn.
    pub fn turned_ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

/// A straight wall segment. `start` is always the low-coordinate end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn len(&self) -> f64 {
        (self.end.x - self.start.x) + (self.end.y - self.start.y)
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// The point at distance `d` from `start`.
    pub fn point_at(&self, d: f64) -> Point {
        if self.is_horizontal() {
            Point::new(self.start.x + d, self.start.y)
        } else {
            Point::new(self.start.x, self.start.y + d)
        }
    }
}

/// An axis-aligned rectangle held as four explicit corners:
/// `a1` top-left, `a2` top-right, `a3` bottom-right, `a4` bottom-left.
///
/// Only constructible with positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    a1: Point,
    a2: Point,
    a3: Point,
    a4: Point,
}

impl Rectangle {
    /// Build from the south-west corner and a size. Returns `None` for a
    /// non-positive or non-finite dimension.
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Option<Self> {
        Self::from_edges(left, bottom, left + width, bottom + height)
    }

    /// Build from edge coordinates, so neighbours cut from the same offsets
    /// share their walls bit-for-bit.
    pub fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Option<Self> {
        let finite = [left, bottom, right, top].iter().all(|v| v.is_finite());
        if !finite || right <= left || top <= bottom {
            return None;
        }
        Some(Self {
            a1: Point::new(left, top),
            a2: Point::new(right, top),
            a3: Point::new(right, bottom),
            a4: Point::new(left, bottom),
        })
    }

    pub fn a1(&self) -> Point {
        self.a1
    }
    pub fn a2(&self) -> Point {
        self.a2
    }
    pub fn a3(&self) -> Point {
        self.a3
    }
    pub fn a4(&self) -> Point {
        self.a4
    }

    pub fn left(&self) -> f64 {
        self.a1.x
    }
    pub fn right(&self) -> f64 {
        self.a2.x
    }
    pub fn top(&self) -> f64 {
        self.a1.y
    }
    pub fn bottom(&self) -> f64 {
        self.a4.y
    }

    pub fn width(&self) -> f64 {
        self.a2.x - self.a1.x
    }

    pub fn height(&self) -> f64 {
        self.a1.y - self.a4.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a1.x + self.a2.x) / 2.0,
            (self.a1.y + self.a4.y) / 2.0,
        )
    }

    /// The full wall on one side.
    pub fn wall(&self, side: Side) -> Segment {
        match side {
            Side::North => Segment {
                start: self.a1,
                end: self.a2,
            },
            Side::South => Segment {
                start: self.a4,
                end: self.a3,
            },
            Side::East => Segment {
                start: self.a3,
                end: self.a2,
            },
            Side::West => Segment {
                start: self.a4,
                end: self.a1,
            },
        }
    }

    /// Interior overlap area with another rectangle (zero when only touching).
    pub fn overlap_area(&self, other: &Rectangle) -> f64 {
        let dx = self.right().min(other.right()) - self.left().max(other.left());
        let dy = self.top().min(other.top()) - self.bottom().max(other.bottom());
        if dx > 0.0 && dy > 0.0 {
            dx * dy
        } else {
            0.0
        }
    }

    /// The part of this rectangle's wall that touches `other`, with the side
    /// it lies on. `None` when the two only meet at a corner or not at all.
    pub fn shared_wall(&self, other: &Rectangle, eps: f64) -> Option<(Side, Segment)> {
        let y_lo = self.bottom().max(other.bottom());
        let y_hi = self.top().min(other.top());
        let x_lo = self.left().max(other.left());
        let x_hi = self.right().min(other.right());

        let candidates = [
            (Side::East, self.right(), other.left(), y_lo, y_hi),
            (Side::West, self.left(), other.right(), y_lo, y_hi),
            (Side::North, self.top(), other.bottom(), x_lo, x_hi),
            (Side::South, self.bottom(), other.top(), x_lo, x_hi),
        ];
        for (side, mine, theirs, lo, hi) in candidates {
            if (mine - theirs).abs() > eps || hi - lo <= eps {
                continue;
            }
            let segment = if side.is_horizontal() {
                Segment {
                    start: Point::new(lo, mine),
                    end: Point::new(hi, mine),
                }
            } else {
                Segment {
                    start: Point::new(mine, lo),
                    end: Point::new(mine, hi),
                }
            };
            return Some((side, segment));
        }
        None
    }

    /// True when the given wall lies on the plot boundary.
    pub fn is_exterior(&self, side: Side, plot: &PlotSpec, eps: f64) -> bool {
        match side {
            Side::North => (self.top() - plot.height).abs() <= eps,
            Side::South => self.bottom().abs() <= eps,
            Side::East => (self.right() - plot.width).abs() <= eps,
            Side::West => self.left().abs() <= eps,
        }
    }
}

/// A layout validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Room geometry (per-room) ─────────────────────────────────────────

/// Check that no room has zero or negative dimensions.
pub fn check_room_dimensions(rooms: &BTreeMap<RoomKind, Rectangle>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (kind, r) in rooms {
        if r.width() <= 0.0 || r.height() <= 0.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "{} has non-positive dimensions: {}×{}",
                    kind,
                    r.width(),
                    r.height()
                ),
            });
        }
    }
    errors
}

/// Flag rooms thinner than 10:1. Corridors are exempt.
pub fn check_room_aspect_ratios(rooms: &BTreeMap<RoomKind, Rectangle>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (kind, r) in rooms {
        if *kind == RoomKind::Corridor || r.width() <= 0.0 || r.height() <= 0.0 {
            continue;
        }
        let ratio = r.width().max(r.height()) / r.width().min(r.height());
        if ratio > 10.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Warning,
                message: format!(
                    "{} has extreme aspect ratio {:.1}:1 ({:.2}×{:.2})",
                    kind,
                    ratio,
                    r.width(),
                    r.height()
                ),
            });
        }
    }
    errors
}

/// Check that every room lies inside `[0,W]×[0,H]`.
pub fn check_rooms_within_plot(
    rooms: &BTreeMap<RoomKind, Rectangle>,
    plot: &PlotSpec,
    eps: f64,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (kind, r) in rooms {
        if r.left() < -eps
            || r.bottom() < -eps
            || r.right() > plot.width + eps
            || r.top() > plot.height + eps
        {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "{} extends outside plot: ({:.2},{:.2})→({:.2},{:.2}) vs plot {}×{}",
                    kind,
                    r.left(),
                    r.bottom(),
                    r.right(),
                    r.top(),
                    plot.width,
                    plot.height
                ),
            });
        }
    }
    errors
}

// ── B. Room-to-room (pairwise) ──────────────────────────────────────────

/// AABB overlap test. Rooms sharing a wall are fine; any interior overlap
/// larger than `eps` in both axes is an error.
pub fn check_room_overlaps(
    rooms: &BTreeMap<RoomKind, Rectangle>,
    eps: f64,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let entries: Vec<_> = rooms.iter().collect();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (ka, a) = entries[i];
            let (kb, b) = entries[j];
            let overlap_x = (a.right() - eps) > b.left() && (b.right() - eps) > a.left();
            let overlap_y = (a.top() - eps) > b.bottom() && (b.top() - eps) > a.bottom();
            if overlap_x && overlap_y {
                errors.push(ValidationError {
                    category: "room_overlap",
                    severity: Severity::Error,
                    message: format!(
                        "{} and {} overlap by {:.4}",
                        ka,
                        kb,
                        a.overlap_area(b)
                    ),
                });
            }
        }
    }
    errors
}

// ── C. Area accounting ──────────────────────────────────────────────────

/// Rooms plus open floor must tile the plot exactly.
pub fn check_area_accounting(layout: &Layout, plot: &PlotSpec, eps: f64) -> Vec<ValidationError> {
    let rooms: f64 = layout.rooms.values().map(Rectangle::area).sum();
    let total = rooms + layout.open_area;
    if (total - plot.area()).abs() > eps {
        vec![ValidationError {
            category: "area_accounting",
            severity: Severity::Error,
            message: format!(
                "rooms {:.4} + open floor {:.4} = {:.4}, plot is {:.4}",
                rooms,
                layout.open_area,
                total,
                plot.area()
            ),
        }]
    } else {
        Vec::new()
    }
}

/// Every rectangle not produced by a remainder fill must match its allocated area.
pub fn check_allocated_areas(
    layout: &Layout,
    areas: &AllocatedAreas,
    eps: f64,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (kind, r) in &layout.rooms {
        if layout.remainder_rooms.contains(kind) {
            continue;
        }
        match areas.get(kind) {
            Some(&allocated) if (r.area() - allocated).abs() <= eps => {}
            Some(&allocated) => errors.push(ValidationError {
                category: "area_accounting",
                severity: Severity::Error,
                message: format!(
                    "{} rectangle area {:.4} differs from allocation {:.4}",
                    kind,
                    r.area(),
                    allocated
                ),
            }),
            None => errors.push(ValidationError {
                category: "area_accounting",
                severity: Severity::Error,
                message: format!("{} was placed without an allocation", kind),
            }),
        }
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all layout validations and return combined results.
pub fn validate_layout(
    layout: &Layout,
    areas: &AllocatedAreas,
    plot: &PlotSpec,
    length_eps: f64,
    area_eps: f64,
) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_room_dimensions(&layout.rooms));
    all.extend(check_room_aspect_ratios(&layout.rooms));
    all.extend(check_rooms_within_plot(&layout.rooms, plot, length_eps));
    all.extend(check_room_overlaps(&layout.rooms, length_eps));
    all.extend(check_area_accounting(layout, plot, area_eps));
    all.extend(check_allocated_areas(layout, areas, area_eps));
    all
}
