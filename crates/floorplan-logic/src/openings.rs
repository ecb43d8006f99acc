//! Door, window and passage geometry.
//!
//! Openings are derived purely from resolved rectangles and a template's
//! static rules. A rule names a room and one of its walls, either a full
//! side or the stretch it shares with a neighbour, and places a gap at a
//! fraction along that segment. Doors additionally get a pivot and a
//! 90° swing arc opening into the rule's room.
//!
//! Angles are in degrees, counter-clockwise from +x.

use crate::config::GeneratorConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{PlotSpec, Point, Side};
use crate::placement::Layout;
use crate::rooms::RoomKind;
use serde::Serialize;

/// Which wall of the rule's room an opening sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wall {
    /// The room's full wall on this side.
    Side(Side),
    /// The stretch of wall the room shares with this neighbour.
    Shared(RoomKind),
}

/// Which end of the gap a door leaf hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hinge {
    /// The low-coordinate end.
    Start,
    /// The high-coordinate end.
    End,
}

impl Hinge {
    fn flipped(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// A gap with no leaf: a window on an exterior wall, a passage inside.
    Plain,
    Door { hinge: Hinge },
}

/// Gap width: `min(fraction × segment length, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub fraction: f64,
    pub max: f64,
}

/// A static opening rule, part of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningRule {
    pub room: RoomKind,
    pub wall: Wall,
    /// Center position as a fraction along the segment, from its low end.
    pub at: f64,
    pub span: Span,
    pub kind: RuleKind,
}

impl OpeningRule {
    /// Every room this rule needs present in the layout.
    pub fn rooms(&self) -> Vec<RoomKind> {
        match self.wall {
            Wall::Side(_) => vec![self.room],
            Wall::Shared(neighbor) => vec![self.room, neighbor],
        }
    }

    /// The same rule for a plot turned a quarter turn. Walls whose direction
    /// reverses under the turn get their position and hinge mirrored; shared
    /// walls keep theirs, so they are authored centred.
    pub fn turned(&self, clockwise: bool) -> Self {
        let Wall::Side(side) = self.wall else {
            return *self;
        };
        let reverses = side.is_horizontal() == clockwise;
        let turned_side = if clockwise {
            side.turned_cw()
        } else {
            side.turned_ccw()
        };
        let (at, kind) = if reverses {
            let kind = match self.kind {
                RuleKind::Door { hinge } => RuleKind::Door {
                    hinge: hinge.flipped(),
                },
                RuleKind::Plain => RuleKind::Plain,
            };
            (1.0 - self.at, kind)
        } else {
            (self.at, self.kind)
        };
        Self {
            wall: Wall::Side(turned_side),
            at,
            kind,
            ..*self
        }
    }
}

/// Swing geometry of a door leaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoorSwing {
    pub pivot: Point,
    pub radius: f64,
    pub closed_angle: f64,
    pub open_angle: f64,
    /// Start of the 90° counter-clockwise arc, in `[0, 360)`.
    pub arc_start: f64,
    pub arc_end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OpeningKind {
    Window,
    Passage,
    Door(DoorSwing),
}

/// A resolved opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpeningSpec {
    pub room: RoomKind,
    pub neighbor: Option<RoomKind>,
    /// Side of `room` the opening is on.
    pub side: Side,
    pub center: Point,
    pub width: f64,
    pub kind: OpeningKind,
}

/// Direction a door leaf points when fully open into a room, given the
/// room's wall it hangs on.
fn open_angle(side: Side) -> f64 {
    match side {
        Side::North => 270.0,
        Side::South => 90.0,
        Side::East => 180.0,
        Side::West => 0.0,
    }
}

/// Direction a closed leaf points: along the wall, across the gap.
fn closed_angle(side: Side, hinge: Hinge) -> f64 {
    match (side.is_horizontal(), hinge) {
        (true, Hinge::Start) => 0.0,
        (false, Hinge::Start) => 90.0,
        (true, Hinge::End) => 180.0,
        (false, Hinge::End) => 270.0,
    }
}

/// The 90° counter-clockwise arc between two perpendicular angles.
fn swing_arc(closed: f64, open: f64) -> (f64, f64) {
    let start = if (open - closed).rem_euclid(360.0) == 90.0 {
        closed
    } else {
        open
    };
    let start = start.rem_euclid(360.0);
    (start, start + 90.0)
}

/// Resolve one rule against a layout.
pub fn resolve_rule(
    rule: &OpeningRule,
    layout: &Layout,
    plot: &PlotSpec,
    eps: f64,
) -> LayoutResult<OpeningSpec> {
    let missing = |room: RoomKind| LayoutError::UnknownRoomReference {
        room,
        context: format!("opening rule on {}", rule.room),
    };
    let rect = layout.rooms.get(&rule.room).ok_or_else(|| missing(rule.room))?;

    let (side, segment, neighbor) = match rule.wall {
        Wall::Side(side) => (side, rect.wall(side), None),
        Wall::Shared(other) => {
            let other_rect = layout.rooms.get(&other).ok_or_else(|| missing(other))?;
            let (side, segment) = rect.shared_wall(other_rect, eps).ok_or(
                LayoutError::DetachedOpening {
                    room: rule.room,
                    neighbor: other,
                },
            )?;
            (side, segment, Some(other))
        }
    };

    let len = segment.len();
    let width = (rule.span.fraction * len).min(rule.span.max);
    let half = width / 2.0;
    let center_d = (rule.at * len).clamp(half, len - half);
    let center = segment.point_at(center_d);

    let kind = match rule.kind {
        RuleKind::Plain if neighbor.is_none() && rect.is_exterior(side, plot, eps) => {
            OpeningKind::Window
        }
        RuleKind::Plain => OpeningKind::Passage,
        RuleKind::Door { hinge } => {
            let pivot = match hinge {
                Hinge::Start => segment.point_at(center_d - half),
                Hinge::End => segment.point_at(center_d + half),
            };
            let closed = closed_angle(side, hinge);
            let open = open_angle(side);
            let (arc_start, arc_end) = swing_arc(closed, open);
            OpeningKind::Door(DoorSwing {
                pivot,
                radius: width,
                closed_angle: closed,
                open_angle: open,
                arc_start,
                arc_end,
            })
        }
    };

    Ok(OpeningSpec {
        room: rule.room,
        neighbor,
        side,
        center,
        width,
        kind,
    })
}

/// Resolve every rule of a template, in order.
pub fn synthesize(
    layout: &Layout,
    rules: &[OpeningRule],
    plot: &PlotSpec,
    config: &GeneratorConfig,
) -> LayoutResult<Vec<OpeningSpec>> {
    let eps = config.length_eps(plot.width, plot.height);
    let openings = rules
        .iter()
        .map(|rule| resolve_rule(rule, layout, plot, eps))
        .collect::<LayoutResult<Vec<_>>>()?;
    log::debug!("synthesized {} openings", openings.len());
    Ok(openings)
}
