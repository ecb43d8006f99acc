//! Placement steps and the engine that executes them.
//!
//! A template's steps form a single dependency chain over named regions.
//! The engine starts with one pending region, `plot`, covering the whole
//! footprint. Each step consumes one pending region and turns it into
//! rooms, new regions, or open floor. Strips are cut with a fixed
//! orthogonal extent, so every room rectangle comes out with its
//! allocated area by construction.
//!
//! Steps fail rather than clamp: a non-positive dimension anywhere is a
//! [`LayoutError::DegenerateRectangle`].

use crate::allocation::{AllocatedAreas, AreaBound};
use crate::catalog::Template;
use crate::config::GeneratorConfig;
use crate::error::{LayoutError, LayoutResult, StepTarget};
use crate::geometry::{PlotSpec, Rectangle, Side};
use crate::rooms::RoomKind;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Name of a pending region within one template.
pub type RegionName = &'static str;

/// The region every template starts from.
pub const PLOT_REGION: RegionName = "plot";

/// A corner of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Corner {
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }

    pub fn is_east(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast)
    }

    fn turned(self, clockwise: bool) -> Self {
        match (self, clockwise) {
            (Self::NorthEast, true) | (Self::SouthWest, false) => Self::SouthEast,
            (Self::SouthEast, true) | (Self::NorthWest, false) => Self::SouthWest,
            (Self::SouthWest, true) | (Self::NorthEast, false) => Self::NorthWest,
            (Self::NorthWest, true) | (Self::SouthEast, false) => Self::NorthEast,
        }
    }
}

/// How a corner carve fixes both dimensions from its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarveShape {
    /// side = √area
    Square,
    /// width / height = k
    Aspect(f64),
}

/// How the L-shaped leftover of a corner carve is split in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    /// `rest` is the full-height strip beside the carve column;
    /// `beside` is the remainder of that column.
    Vertical,
    /// `rest` is the full-width strip beside the carve row;
    /// `beside` is the remainder of that row.
    Horizontal,
}

/// One slice of a strip split.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A room, depth = allocated area / orthogonal extent.
    Room(RoomKind),
    /// A region sized to hold the listed rooms.
    Group(RegionName, Vec<RoomKind>),
    /// A fixed fraction of the along-axis extent, chosen by plot orientation.
    /// `None` leaves the slice as open floor.
    Ratio {
        region: Option<RegionName>,
        landscape: f64,
        portrait: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementStep {
    /// Slice `region` into adjacent strips starting at its `from` edge.
    Strip {
        region: RegionName,
        from: Side,
        slots: Vec<Slot>,
        rest: Option<RegionName>,
    },
    /// Carve `room` from one corner of `region`.
    Carve {
        region: RegionName,
        corner: Corner,
        room: RoomKind,
        shape: CarveShape,
        cut: Cut,
        beside: Option<RegionName>,
        rest: Option<RegionName>,
    },
    /// Give all of `region` to `room`, checking it against the room's bounds.
    Remainder { region: RegionName, room: RoomKind },
}

impl PlacementStep {
    /// The region this step consumes.
    pub fn region(&self) -> RegionName {
        match self {
            Self::Strip { region, .. }
            | Self::Carve { region, .. }
            | Self::Remainder { region, .. } => *region,
        }
    }

    /// Regions this step produces.
    pub fn produced_regions(&self) -> Vec<RegionName> {
        match self {
            Self::Strip { slots, rest, .. } => slots
                .iter()
                .filter_map(|s| match s {
                    Slot::Group(name, _) => Some(*name),
                    Slot::Ratio { region, .. } => *region,
                    Slot::Room(_) => None,
                })
                .chain(*rest)
                .collect(),
            Self::Carve { beside, rest, .. } => beside.iter().chain(rest.iter()).copied().collect(),
            Self::Remainder { .. } => Vec::new(),
        }
    }

    /// Rooms this step places.
    pub fn placed_rooms(&self) -> Vec<RoomKind> {
        match self {
            Self::Strip { slots, .. } => slots
                .iter()
                .filter_map(|s| match s {
                    Slot::Room(kind) => Some(*kind),
                    _ => None,
                })
                .collect(),
            Self::Carve { room, .. } | Self::Remainder { room, .. } => vec![*room],
        }
    }

    /// The same step for a plot turned a quarter turn. Orientation-dependent
    /// ratios swap, since a turned landscape plot is a portrait one.
    pub fn turned(&self, clockwise: bool) -> Self {
        let side = |s: Side| if clockwise { s.turned_cw() } else { s.turned_ccw() };
        match self {
            Self::Strip {
                region,
                from,
                slots,
                rest,
            } => Self::Strip {
                region: *region,
                from: side(*from),
                slots: slots
                    .iter()
                    .map(|slot| match slot {
                        Slot::Ratio {
                            region,
                            landscape,
                            portrait,
                        } => Slot::Ratio {
                            region: *region,
                            landscape: *portrait,
                            portrait: *landscape,
                        },
                        other => other.clone(),
                    })
                    .collect(),
                rest: *rest,
            },
            Self::Carve {
                region,
                corner,
                room,
                shape,
                cut,
                beside,
                rest,
            } => Self::Carve {
                region: *region,
                corner: corner.turned(clockwise),
                room: *room,
                shape: match shape {
                    CarveShape::Square => CarveShape::Square,
                    CarveShape::Aspect(k) => CarveShape::Aspect(1.0 / k),
                },
                cut: match cut {
                    Cut::Vertical => Cut::Horizontal,
                    Cut::Horizontal => Cut::Vertical,
                },
                beside: *beside,
                rest: *rest,
            },
            Self::Remainder { region, room } => Self::Remainder {
                region: *region,
                room: *room,
            },
        }
    }
}

/// Resolved room rectangles for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub rooms: BTreeMap<RoomKind, Rectangle>,
    /// Rooms whose rectangle came from a remainder fill rather than an allocation.
    pub remainder_rooms: BTreeSet<RoomKind>,
    /// Floor left unassigned (lobbies, landings).
    pub open_area: f64,
}

impl Layout {
    /// The area a room ends up with: allocated for placed rooms, geometric for
    /// remainder fills.
    pub fn resolved_area(&self, kind: RoomKind, areas: &AllocatedAreas) -> Option<f64> {
        let rect = self.rooms.get(&kind)?;
        if self.remainder_rooms.contains(&kind) {
            Some(rect.area())
        } else {
            areas.get(&kind).copied()
        }
    }
}

/// A pending region, held as edges.
#[derive(Debug, Clone, Copy)]
struct Region {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Region {
    fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Coordinate `offset` in from edge `from`.
    fn edge_at(&self, from: Side, offset: f64) -> f64 {
        match from {
            Side::West => self.x0 + offset,
            Side::East => self.x1 - offset,
            Side::South => self.y0 + offset,
            Side::North => self.y1 - offset,
        }
    }

    /// The slab between two offsets from edge `from`.
    fn slice(&self, from: Side, near: f64, far: f64) -> Region {
        let a = self.edge_at(from, near);
        let b = self.edge_at(from, far);
        match from {
            Side::West => Region { x0: a, x1: b, ..*self },
            Side::East => Region { x0: b, x1: a, ..*self },
            Side::South => Region { y0: a, y1: b, ..*self },
            Side::North => Region { y0: b, y1: a, ..*self },
        }
    }

    /// Everything past `offset` from edge `from`.
    fn trim(&self, from: Side, offset: f64) -> Region {
        let a = self.edge_at(from, offset);
        match from {
            Side::West => Region { x0: a, ..*self },
            Side::East => Region { x1: a, ..*self },
            Side::South => Region { y0: a, ..*self },
            Side::North => Region { y1: a, ..*self },
        }
    }
}

struct Engine<'a> {
    plot: &'a PlotSpec,
    areas: &'a AllocatedAreas,
    bounds: &'a [AreaBound],
    eps: f64,
    area_eps: f64,
    regions: BTreeMap<RegionName, Region>,
    rooms: BTreeMap<RoomKind, Rectangle>,
    remainder_rooms: BTreeSet<RoomKind>,
    open_area: f64,
}

impl<'a> Engine<'a> {
    fn take_region(&mut self, step: usize, name: RegionName) -> LayoutResult<Region> {
        self.regions
            .remove(name)
            .ok_or_else(|| LayoutError::UnresolvedRegion {
                step,
                region: name.to_string(),
            })
    }

    fn area_of(&self, step: usize, kind: RoomKind) -> LayoutResult<f64> {
        self.areas
            .get(&kind)
            .copied()
            .ok_or_else(|| LayoutError::UnknownRoomReference {
                room: kind,
                context: format!("placement step {}", step),
            })
    }

    fn put_room(&mut self, step: usize, kind: RoomKind, r: Region) -> LayoutResult<()> {
        let rect = Rectangle::from_edges(r.x0, r.y0, r.x1, r.y1).ok_or(
            LayoutError::DegenerateRectangle {
                step,
                target: StepTarget::Room(kind),
                width: r.width(),
                height: r.height(),
            },
        )?;
        log::debug!(
            "step {}: {} at ({:.2},{:.2}) {:.2}×{:.2}",
            step,
            kind,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
        self.rooms.insert(kind, rect);
        Ok(())
    }

    fn put_region(&mut self, step: usize, name: RegionName, r: Region) -> LayoutResult<()> {
        if r.width() <= self.eps || r.height() <= self.eps {
            return Err(LayoutError::DegenerateRectangle {
                step,
                target: StepTarget::Region(name.to_string()),
                width: r.width(),
                height: r.height(),
            });
        }
        self.regions.insert(name, r);
        Ok(())
    }

    /// Leftover floor. May be empty, never negative.
    fn put_open(&mut self, step: usize, r: Region) -> LayoutResult<()> {
        if r.width() < -self.eps || r.height() < -self.eps {
            return Err(LayoutError::DegenerateRectangle {
                step,
                target: StepTarget::OpenFloor,
                width: r.width(),
                height: r.height(),
            });
        }
        self.open_area += r.width().max(0.0) * r.height().max(0.0);
        Ok(())
    }

    fn put_leftover(&mut self, step: usize, name: Option<RegionName>, r: Region) -> LayoutResult<()> {
        match name {
            Some(name) => self.put_region(step, name, r),
            None => self.put_open(step, r),
        }
    }

    fn strip(
        &mut self,
        step: usize,
        region: RegionName,
        from: Side,
        slots: &[Slot],
        rest: Option<RegionName>,
    ) -> LayoutResult<()> {
        let r = self.take_region(step, region)?;
        let (orth, extent) = match from {
            Side::East | Side::West => (r.height(), r.width()),
            Side::North | Side::South => (r.width(), r.height()),
        };

        let mut offset = 0.0;
        for slot in slots {
            let depth = match slot {
                Slot::Room(kind) => self.area_of(step, *kind)? / orth,
                Slot::Group(_, kinds) => {
                    let mut sum = 0.0;
                    for kind in kinds {
                        sum += self.area_of(step, *kind)?;
                    }
                    sum / orth
                }
                Slot::Ratio {
                    landscape,
                    portrait,
                    ..
                } => {
                    let ratio = if self.plot.is_landscape() {
                        landscape
                    } else {
                        portrait
                    };
                    ratio * extent
                }
            };
            let piece = r.slice(from, offset, offset + depth);
            offset += depth;
            match slot {
                Slot::Room(kind) => self.put_room(step, *kind, piece)?,
                Slot::Group(name, _) => self.put_region(step, *name, piece)?,
                Slot::Ratio { region, .. } => self.put_leftover(step, *region, piece)?,
            }
        }

        log::debug!(
            "step {}: strip '{}' from {:?}, {:.2} of {:.2} used",
            step,
            region,
            from,
            offset,
            extent
        );
        self.put_leftover(step, rest, r.trim(from, offset))
    }

    #[allow(clippy::too_many_arguments)]
    fn carve(
        &mut self,
        step: usize,
        region: RegionName,
        corner: Corner,
        room: RoomKind,
        shape: CarveShape,
        cut: Cut,
        beside: Option<RegionName>,
        rest: Option<RegionName>,
    ) -> LayoutResult<()> {
        let r = self.take_region(step, region)?;
        let area = self.area_of(step, room)?;
        let (w, h) = match shape {
            CarveShape::Square => (area.sqrt(), area.sqrt()),
            CarveShape::Aspect(k) => {
                let w = (area * k).sqrt();
                (w, area / w)
            }
        };
        if !(w > 0.0 && h > 0.0) || w > r.width() + self.eps || h > r.height() + self.eps {
            return Err(LayoutError::DegenerateRectangle {
                step,
                target: StepTarget::Room(room),
                width: w,
                height: h,
            });
        }

        let (cx0, cx1) = if corner.is_east() {
            (r.x1 - w, r.x1)
        } else {
            (r.x0, r.x0 + w)
        };
        let (cy0, cy1) = if corner.is_north() {
            (r.y1 - h, r.y1)
        } else {
            (r.y0, r.y0 + h)
        };
        self.put_room(
            step,
            room,
            Region {
                x0: cx0,
                y0: cy0,
                x1: cx1,
                y1: cy1,
            },
        )?;

        let (rest_region, beside_region) = match cut {
            Cut::Vertical => {
                let rest_region = if corner.is_east() {
                    Region { x1: cx0, ..r }
                } else {
                    Region { x0: cx1, ..r }
                };
                let column = Region { x0: cx0, x1: cx1, ..r };
                let beside_region = if corner.is_north() {
                    Region { y1: cy0, ..column }
                } else {
                    Region { y0: cy1, ..column }
                };
                (rest_region, beside_region)
            }
            Cut::Horizontal => {
                let rest_region = if corner.is_north() {
                    Region { y1: cy0, ..r }
                } else {
                    Region { y0: cy1, ..r }
                };
                let row = Region { y0: cy0, y1: cy1, ..r };
                let beside_region = if corner.is_east() {
                    Region { x1: cx0, ..row }
                } else {
                    Region { x0: cx1, ..row }
                };
                (rest_region, beside_region)
            }
        };
        self.put_leftover(step, rest, rest_region)?;
        self.put_leftover(step, beside, beside_region)
    }

    fn remainder(&mut self, step: usize, region: RegionName, room: RoomKind) -> LayoutResult<()> {
        let r = self.take_region(step, region)?;
        let bound = self
            .bounds
            .iter()
            .find(|b| b.room == room)
            .ok_or_else(|| LayoutError::UnknownRoomReference {
                room,
                context: format!("remainder step {}", step),
            })?;
        let plot_area = self.plot.area();
        let (min, max) = (bound.min_area(plot_area), bound.max_area(plot_area));
        let area = r.width() * r.height();
        if area < min - self.area_eps || area > max + self.area_eps {
            return Err(LayoutError::RemainderOutOfBounds {
                room,
                area,
                min,
                max,
            });
        }
        self.put_room(step, room, r)?;
        self.remainder_rooms.insert(room);
        Ok(())
    }
}

/// Execute a template's steps against allocated areas.
pub fn place(
    template: &Template,
    plot: &PlotSpec,
    areas: &AllocatedAreas,
    config: &GeneratorConfig,
) -> LayoutResult<Layout> {
    let mut engine = Engine {
        plot,
        areas,
        bounds: &template.bounds,
        eps: config.length_eps(plot.width, plot.height),
        area_eps: config.area_eps(plot.area()),
        regions: BTreeMap::new(),
        rooms: BTreeMap::new(),
        remainder_rooms: BTreeSet::new(),
        open_area: 0.0,
    };
    engine.regions.insert(
        PLOT_REGION,
        Region {
            x0: 0.0,
            y0: 0.0,
            x1: plot.width,
            y1: plot.height,
        },
    );

    for (i, step) in template.steps.iter().enumerate() {
        match step {
            PlacementStep::Strip {
                region,
                from,
                slots,
                rest,
            } => engine.strip(i, *region, *from, slots, *rest)?,
            PlacementStep::Carve {
                region,
                corner,
                room,
                shape,
                cut,
                beside,
                rest,
            } => engine.carve(i, *region, *corner, *room, *shape, *cut, *beside, *rest)?,
            PlacementStep::Remainder { region, room } => engine.remainder(i, *region, *room)?,
        }
    }

    if let Some(name) = engine.regions.keys().next() {
        return Err(LayoutError::UnresolvedRegion {
            step: template.steps.len(),
            region: name.to_string(),
        });
    }

    Ok(Layout {
        rooms: engine.rooms,
        remainder_rooms: engine.remainder_rooms,
        open_area: engine.open_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate, TotalityMode};
    use crate::catalog::{Entrance, Orientation, RoomCount, TemplateKey, Variant};

    fn template(mode: TotalityMode, bounds: Vec<AreaBound>, steps: Vec<PlacementStep>) -> Template {
        Template {
            key: TemplateKey {
                rooms: RoomCount::OneBhk,
                entrance: Entrance::North,
                variant: Variant::Standard,
            },
            orientation: Orientation::Any,
            mode,
            bounds,
            steps,
            openings: Vec::new(),
        }
    }

    fn run(t: &Template, plot: PlotSpec) -> LayoutResult<Layout> {
        let areas = allocate(plot.area(), &t.bounds, t.mode)?;
        place(t, &plot, &areas, &GeneratorConfig::default())
    }

    fn two_room_strip(from: Side) -> Template {
        template(
            TotalityMode::Exact,
            vec![
                AreaBound::new(RoomKind::Living, 60.0, 60.0),
                AreaBound::new(RoomKind::Kitchen, 40.0, 40.0),
            ],
            vec![PlacementStep::Strip {
                region: PLOT_REGION,
                from,
                slots: vec![Slot::Room(RoomKind::Living), Slot::Room(RoomKind::Kitchen)],
                rest: None,
            }],
        )
    }

    #[test]
    fn test_strip_from_west() {
        let layout = run(&two_room_strip(Side::West), PlotSpec::new(10.0, 20.0)).unwrap();
        let living = layout.rooms[&RoomKind::Living];
        let kitchen = layout.rooms[&RoomKind::Kitchen];
        assert_eq!(living.left(), 0.0);
        assert!((living.width() - 6.0).abs() < 1e-9);
        assert_eq!(living.height(), 20.0);
        assert_eq!(living.right(), kitchen.left());
        assert!((kitchen.right() - 10.0).abs() < 1e-9);
        assert!(layout.open_area.abs() < 1e-9);
    }

    #[test]
    fn test_strip_from_north() {
        let layout = run(&two_room_strip(Side::North), PlotSpec::new(10.0, 20.0)).unwrap();
        let living = layout.rooms[&RoomKind::Living];
        assert_eq!(living.top(), 20.0);
        assert!((living.height() - 12.0).abs() < 1e-9);
        assert_eq!(living.width(), 10.0);
        assert_eq!(layout.rooms[&RoomKind::Kitchen].top(), living.bottom());
    }

    #[test]
    fn test_group_then_split() {
        let t = template(
            TotalityMode::Exact,
            vec![
                AreaBound::new(RoomKind::Living, 50.0, 50.0),
                AreaBound::new(RoomKind::Bedroom, 30.0, 30.0),
                AreaBound::new(RoomKind::Bathroom, 20.0, 20.0),
            ],
            vec![
                PlacementStep::Strip {
                    region: PLOT_REGION,
                    from: Side::East,
                    slots: vec![Slot::Room(RoomKind::Living)],
                    rest: Some("night"),
                },
                PlacementStep::Strip {
                    region: "night",
                    from: Side::North,
                    slots: vec![Slot::Room(RoomKind::Bedroom), Slot::Room(RoomKind::Bathroom)],
                    rest: None,
                },
            ],
        );
        let layout = run(&t, PlotSpec::new(20.0, 10.0)).unwrap();
        let bed = layout.rooms[&RoomKind::Bedroom];
        assert!((bed.width() - 10.0).abs() < 1e-9);
        assert!((bed.height() - 6.0).abs() < 1e-9);
        assert!((layout.rooms[&RoomKind::Bathroom].area() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_picks_by_orientation() {
        let t = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Corridor, 0.0, 100.0)],
            vec![
                PlacementStep::Strip {
                    region: PLOT_REGION,
                    from: Side::West,
                    slots: vec![Slot::Ratio {
                        region: Some("hall"),
                        landscape: 0.25,
                        portrait: 0.5,
                    }],
                    rest: None,
                },
                PlacementStep::Remainder {
                    region: "hall",
                    room: RoomKind::Corridor,
                },
            ],
        );
        let wide = run(&t, PlotSpec::new(40.0, 20.0)).unwrap();
        assert!((wide.rooms[&RoomKind::Corridor].width() - 10.0).abs() < 1e-9);
        assert!((wide.open_area - 600.0).abs() < 1e-6);
        assert!(wide.remainder_rooms.contains(&RoomKind::Corridor));

        let tall = run(&t, PlotSpec::new(20.0, 40.0)).unwrap();
        assert!((tall.rooms[&RoomKind::Corridor].width() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_carve_corner_and_leftovers() {
        let t = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Pooja, 4.0, 4.0)],
            vec![PlacementStep::Carve {
                region: PLOT_REGION,
                corner: Corner::SouthEast,
                room: RoomKind::Pooja,
                shape: CarveShape::Aspect(4.0),
                cut: Cut::Vertical,
                beside: None,
                rest: None,
            }],
        );
        // area 4% of 100 = 4 → 4 × 1
        let layout = run(&t, PlotSpec::new(10.0, 10.0)).unwrap();
        let pooja = layout.rooms[&RoomKind::Pooja];
        assert!((pooja.width() - 4.0).abs() < 1e-9);
        assert!((pooja.height() - 1.0).abs() < 1e-9);
        assert_eq!(pooja.right(), 10.0);
        assert_eq!(pooja.bottom(), 0.0);
        assert!((layout.open_area - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_carve_named_leftovers() {
        let t = template(
            TotalityMode::Bounded,
            vec![
                AreaBound::new(RoomKind::Ensuite, 4.0, 4.0),
                AreaBound::new(RoomKind::Corridor, 0.0, 100.0),
                AreaBound::new(RoomKind::Balcony, 0.0, 100.0),
            ],
            vec![
                PlacementStep::Carve {
                    region: PLOT_REGION,
                    corner: Corner::NorthWest,
                    room: RoomKind::Ensuite,
                    shape: CarveShape::Square,
                    cut: Cut::Horizontal,
                    beside: Some("a"),
                    rest: Some("b"),
                },
                PlacementStep::Remainder {
                    region: "a",
                    room: RoomKind::Corridor,
                },
                PlacementStep::Remainder {
                    region: "b",
                    room: RoomKind::Balcony,
                },
            ],
        );
        let layout = run(&t, PlotSpec::new(10.0, 10.0)).unwrap();
        // 2×2 ensuite top-left; beside is the rest of the top row, rest the lower 10×8
        let corridor = layout.rooms[&RoomKind::Corridor];
        assert!((corridor.width() - 8.0).abs() < 1e-9);
        assert!((corridor.height() - 2.0).abs() < 1e-9);
        let balcony = layout.rooms[&RoomKind::Balcony];
        assert!((balcony.area() - 80.0).abs() < 1e-9);
        assert!(layout.open_area.abs() < 1e-12);
    }

    #[test]
    fn test_carve_too_big_is_degenerate() {
        let t = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Pooja, 10.0, 10.0)],
            vec![PlacementStep::Carve {
                region: PLOT_REGION,
                corner: Corner::NorthEast,
                room: RoomKind::Pooja,
                shape: CarveShape::Aspect(100.0),
                cut: Cut::Vertical,
                beside: None,
                rest: None,
            }],
        );
        assert!(matches!(
            run(&t, PlotSpec::new(10.0, 10.0)),
            Err(LayoutError::DegenerateRectangle {
                step: 0,
                target: StepTarget::Room(RoomKind::Pooja),
                ..
            })
        ));
    }

    #[test]
    fn test_overflowing_strip_is_degenerate() {
        let t = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Living, 50.0, 50.0)],
            vec![PlacementStep::Strip {
                region: PLOT_REGION,
                from: Side::South,
                slots: vec![
                    Slot::Room(RoomKind::Living),
                    Slot::Ratio {
                        region: None,
                        landscape: 0.6,
                        portrait: 0.6,
                    },
                ],
                rest: None,
            }],
        );
        assert!(matches!(
            run(&t, PlotSpec::new(10.0, 10.0)),
            Err(LayoutError::DegenerateRectangle {
                target: StepTarget::OpenFloor,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_named_rest_is_degenerate() {
        let mut t = two_room_strip(Side::West);
        if let PlacementStep::Strip { rest, .. } = &mut t.steps[0] {
            *rest = Some("hall");
        }
        match run(&t, PlotSpec::new(10.0, 20.0)) {
            Err(LayoutError::DegenerateRectangle { target, .. }) => {
                assert_eq!(target, StepTarget::Region("hall".into()))
            }
            other => panic!("expected DegenerateRectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_remainder_out_of_bounds() {
        let t = template(
            TotalityMode::Bounded,
            vec![
                AreaBound::new(RoomKind::Living, 50.0, 50.0),
                AreaBound::new(RoomKind::Corridor, 10.0, 20.0),
            ],
            vec![
                PlacementStep::Strip {
                    region: PLOT_REGION,
                    from: Side::West,
                    slots: vec![Slot::Room(RoomKind::Living)],
                    rest: Some("hall"),
                },
                PlacementStep::Remainder {
                    region: "hall",
                    room: RoomKind::Corridor,
                },
            ],
        );
        match run(&t, PlotSpec::new(10.0, 10.0)) {
            Err(LayoutError::RemainderOutOfBounds { room, area, max, .. }) => {
                assert_eq!(room, RoomKind::Corridor);
                assert!((area - 50.0).abs() < 1e-9);
                assert!((max - 20.0).abs() < 1e-9);
            }
            other => panic!("expected RemainderOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_unconsumed_regions() {
        let missing = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Living, 10.0, 10.0)],
            vec![PlacementStep::Remainder {
                region: "nowhere",
                room: RoomKind::Living,
            }],
        );
        assert!(matches!(
            run(&missing, PlotSpec::new(10.0, 10.0)),
            Err(LayoutError::UnresolvedRegion { step: 0, .. })
        ));

        let dangling = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Living, 50.0, 50.0)],
            vec![PlacementStep::Strip {
                region: PLOT_REGION,
                from: Side::West,
                slots: vec![Slot::Room(RoomKind::Living)],
                rest: Some("hall"),
            }],
        );
        match run(&dangling, PlotSpec::new(10.0, 10.0)) {
            Err(LayoutError::UnresolvedRegion { step, region }) => {
                assert_eq!(step, 1);
                assert_eq!(region, "hall");
            }
            other => panic!("expected UnresolvedRegion, got {:?}", other),
        }
    }

    #[test]
    fn test_unallocated_room_is_unknown() {
        let t = template(
            TotalityMode::Bounded,
            vec![AreaBound::new(RoomKind::Living, 50.0, 50.0)],
            vec![PlacementStep::Strip {
                region: PLOT_REGION,
                from: Side::West,
                slots: vec![Slot::Room(RoomKind::Kitchen)],
                rest: None,
            }],
        );
        assert!(matches!(
            run(&t, PlotSpec::new(10.0, 10.0)),
            Err(LayoutError::UnknownRoomReference {
                room: RoomKind::Kitchen,
                ..
            })
        ));
    }

    #[test]
    fn test_turned_step_swaps_orientation_constants() {
        let step = PlacementStep::Strip {
            region: PLOT_REGION,
            from: Side::West,
            slots: vec![Slot::Ratio {
                region: None,
                landscape: 0.55,
                portrait: 0.65,
            }],
            rest: Some("x"),
        };
        match step.turned(true) {
            PlacementStep::Strip { from, slots, .. } => {
                assert_eq!(from, Side::North);
                assert_eq!(
                    slots[0],
                    Slot::Ratio {
                        region: None,
                        landscape: 0.65,
                        portrait: 0.55
                    }
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_turned_carve() {
        let step = PlacementStep::Carve {
            region: "lobby",
            corner: Corner::NorthEast,
            room: RoomKind::Pooja,
            shape: CarveShape::Aspect(2.0),
            cut: Cut::Vertical,
            beside: None,
            rest: None,
        };
        match step.turned(true) {
            PlacementStep::Carve {
                corner, shape, cut, ..
            } => {
                assert_eq!(corner, Corner::SouthEast);
                assert_eq!(shape, CarveShape::Aspect(0.5));
                assert_eq!(cut, Cut::Horizontal);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(step.turned(true).turned(false), step);
    }
}
