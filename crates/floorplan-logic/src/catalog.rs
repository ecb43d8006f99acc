//! Declarative layout templates.
//!
//! A template is data: area bounds, an ordered chain of placement steps,
//! and opening rules. Templates are keyed by room count, entrance
//! orientation and configuration variant; some also only apply to
//! landscape or portrait plots. There is no fallback: a key without a
//! matching entry is [`LayoutError::UnsupportedTemplate`].
//!
//! Six templates are authored directly. Four more are the same recipes
//! turned a quarter turn, which moves the entrance from one side to the
//! other without a second copy of the steps. Every recipe fills the plot
//! on any admissible aspect; only `2bhk/east/1master1normal` narrows its
//! entry to landscape plots.

use crate::allocation::{AreaBound, TotalityMode};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{PlotSpec, Side};
use crate::openings::{Hinge, OpeningRule, RuleKind, Span, Wall};
use crate::placement::{PlacementStep, RegionName, Slot, PLOT_REGION};
use crate::rooms::RoomKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// ── Keys ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCount {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entrance {
    North,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Standard,
    TwoNormal,
    OneMasterOneNormal,
    OneMasterTwoNormal,
    OneMasterOneGuestOneNormal,
}

impl RoomCount {
    pub fn name(self) -> &'static str {
        match self {
            Self::OneBhk => "1bhk",
            Self::TwoBhk => "2bhk",
            Self::ThreeBhk => "3bhk",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk]
            .into_iter()
            .find(|v| v.name() == s)
    }
}

impl Entrance {
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        [Self::North, Self::East].into_iter().find(|v| v.name() == s)
    }
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::TwoNormal => "2normal",
            Self::OneMasterOneNormal => "1master1normal",
            Self::OneMasterTwoNormal => "1master2normal",
            Self::OneMasterOneGuestOneNormal => "1master1guest1normal",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        [
            Self::Standard,
            Self::TwoNormal,
            Self::OneMasterOneNormal,
            Self::OneMasterTwoNormal,
            Self::OneMasterOneGuestOneNormal,
        ]
        .into_iter()
        .find(|v| v.name() == s)
    }
}

/// Template selection key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub rooms: RoomCount,
    pub entrance: Entrance,
    pub variant: Variant,
}

impl TemplateKey {
    /// Parse the three request fields. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn from_parts(rooms: &str, entrance: &str, variant: &str) -> LayoutResult<Self> {
        let norm = |s: &str| s.trim().to_ascii_lowercase();
        let (r, e, v) = (norm(rooms), norm(entrance), norm(variant));
        match (RoomCount::parse(&r), Entrance::parse(&e), Variant::parse(&v)) {
            (Some(rooms), Some(entrance), Some(variant)) => Ok(Self {
                rooms,
                entrance,
                variant,
            }),
            _ => Err(LayoutError::UnsupportedTemplate {
                key: format!("{}/{}/{}", r, e, v),
            }),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.rooms.name(),
            self.entrance.name(),
            self.variant.name()
        )
    }
}

/// `rooms/entrance/variant`, e.g. `2bhk/north/2normal`.
impl FromStr for TemplateKey {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [rooms, entrance, variant] => Self::from_parts(rooms, entrance, variant),
            _ => Err(LayoutError::UnsupportedTemplate { key: s.to_string() }),
        }
    }
}

/// Which plots a template applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Any,
    /// width > height
    Landscape,
    /// width ≤ height
    Portrait,
}

impl Orientation {
    pub fn accepts(self, plot: &PlotSpec) -> bool {
        match self {
            Self::Any => true,
            Self::Landscape => plot.is_landscape(),
            Self::Portrait => !plot.is_landscape(),
        }
    }

    fn turned(self) -> Self {
        match self {
            Self::Any => Self::Any,
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }
}

// ── Templates ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub key: TemplateKey,
    pub orientation: Orientation,
    pub mode: TotalityMode,
    pub bounds: Vec<AreaBound>,
    pub steps: Vec<PlacementStep>,
    pub openings: Vec<OpeningRule>,
}

impl Template {
    /// The same recipe on a plot turned a quarter turn, filed under `key`.
    pub fn turned(&self, key: TemplateKey, clockwise: bool) -> Self {
        Self {
            key,
            orientation: self.orientation.turned(),
            mode: self.mode,
            bounds: self.bounds.clone(),
            steps: self.steps.iter().map(|s| s.turned(clockwise)).collect(),
            openings: self.openings.iter().map(|o| o.turned(clockwise)).collect(),
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = RoomKind> + '_ {
        self.bounds.iter().map(|b| b.room)
    }
}

/// Every catalog entry, built once.
pub fn catalog() -> &'static [Template] {
    static CATALOG: OnceLock<Vec<Template>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Every key the catalog answers to (a key may have more than one
/// orientation-specific entry; it is listed once).
pub fn keys() -> Vec<TemplateKey> {
    let mut keys: Vec<TemplateKey> = Vec::new();
    for t in catalog() {
        if !keys.contains(&t.key) {
            keys.push(t.key);
        }
    }
    keys
}

/// Find the template for a key and plot.
pub fn lookup(key: &TemplateKey, plot: &PlotSpec) -> LayoutResult<&'static Template> {
    let mut candidates = catalog().iter().filter(|t| t.key == *key).peekable();
    if candidates.peek().is_none() {
        return Err(LayoutError::UnsupportedTemplate {
            key: key.to_string(),
        });
    }
    candidates
        .find(|t| t.orientation.accepts(plot))
        .ok_or_else(|| LayoutError::UnsupportedTemplate {
            key: format!(
                "{} ({} plot)",
                key,
                if plot.is_landscape() {
                    "landscape"
                } else {
                    "portrait"
                }
            ),
        })
}

fn build_catalog() -> Vec<Template> {
    let two_north = two_bhk_north_two_normal();
    let two_east = two_bhk_east_master_normal();
    let three_north = three_bhk_north_master_two_normal();
    let three_east = three_bhk_east_master_guest_normal();

    let turned = vec![
        two_north.turned(
            key(RoomCount::TwoBhk, Entrance::East, Variant::TwoNormal),
            true,
        ),
        two_east.turned(
            key(RoomCount::TwoBhk, Entrance::North, Variant::OneMasterOneNormal),
            false,
        ),
        three_north.turned(
            key(RoomCount::ThreeBhk, Entrance::East, Variant::OneMasterTwoNormal),
            true,
        ),
        three_east.turned(
            key(
                RoomCount::ThreeBhk,
                Entrance::North,
                Variant::OneMasterOneGuestOneNormal,
            ),
            false,
        ),
    ];

    let mut all = vec![
        one_bhk_east(),
        one_bhk_north(),
        two_north,
        // East-entrance master/normal plans are only offered on wide plots.
        Template {
            orientation: Orientation::Landscape,
            ..two_east
        },
        three_north,
        three_east,
    ];
    all.extend(turned);
    all
}

// ── Authoring helpers ───────────────────────────────────────────────────

fn key(rooms: RoomCount, entrance: Entrance, variant: Variant) -> TemplateKey {
    TemplateKey {
        rooms,
        entrance,
        variant,
    }
}

fn bounds(table: &[(RoomKind, f64, f64)]) -> Vec<AreaBound> {
    table
        .iter()
        .map(|&(room, lo, hi)| AreaBound::new(room, lo, hi))
        .collect()
}

fn strip(region: RegionName, from: Side, slots: Vec<Slot>, rest: Option<RegionName>) -> PlacementStep {
    PlacementStep::Strip {
        region,
        from,
        slots,
        rest,
    }
}

fn room(kind: RoomKind) -> Slot {
    Slot::Room(kind)
}

fn group(name: RegionName, kinds: &[RoomKind]) -> Slot {
    Slot::Group(name, kinds.to_vec())
}

fn ratio(region: Option<RegionName>, landscape: f64, portrait: f64) -> Slot {
    Slot::Ratio {
        region,
        landscape,
        portrait,
    }
}

fn remainder(region: RegionName, room: RoomKind) -> PlacementStep {
    PlacementStep::Remainder { region, room }
}

const ENTRANCE: Span = Span {
    fraction: 0.3,
    max: 3.5,
};
const ROOM_DOOR: Span = Span {
    fraction: 0.5,
    max: 3.0,
};
const WET_DOOR: Span = Span {
    fraction: 0.5,
    max: 2.5,
};
const PASSAGE: Span = Span {
    fraction: 0.6,
    max: 5.0,
};
const WINDOW: Span = Span {
    fraction: 0.4,
    max: 5.0,
};
const SMALL_WINDOW: Span = Span {
    fraction: 0.3,
    max: 2.0,
};

fn door(room: RoomKind, wall: Wall, span: Span) -> OpeningRule {
    OpeningRule {
        room,
        wall,
        at: 0.5,
        span,
        kind: RuleKind::Door {
            hinge: Hinge::Start,
        },
    }
}

fn entrance(room: RoomKind, side: Side, at: f64) -> OpeningRule {
    OpeningRule {
        at,
        ..door(room, Wall::Side(side), ENTRANCE)
    }
}

fn plain(room: RoomKind, wall: Wall, at: f64, span: Span) -> OpeningRule {
    OpeningRule {
        room,
        wall,
        at,
        span,
        kind: RuleKind::Plain,
    }
}

fn window(room: RoomKind, side: Side) -> OpeningRule {
    plain(room, Wall::Side(side), 0.5, WINDOW)
}

fn passage(room: RoomKind, neighbor: RoomKind) -> OpeningRule {
    plain(room, Wall::Shared(neighbor), 0.5, PASSAGE)
}

// ── Catalog entries ─────────────────────────────────────────────────────

fn one_bhk_bounds() -> Vec<AreaBound> {
    use RoomKind::*;
    bounds(&[
        (Living, 36.0, 40.0),
        (Bedroom, 25.0, 32.0),
        (Kitchen, 18.0, 20.0),
        (Bathroom, 8.0, 10.0),
        (Toilet, 4.0, 6.0),
        (Gallery, 4.0, 6.0),
        (Corridor, 4.0, 6.0),
    ])
}

fn one_bhk_east() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(RoomCount::OneBhk, Entrance::East, Variant::Standard),
        orientation: Orientation::Any,
        mode: TotalityMode::Bounded,
        bounds: one_bhk_bounds(),
        steps: vec![
            strip(PLOT_REGION, West, vec![group("night", &[Bedroom, Bathroom, Toilet])], Some("day")),
            strip("day", South, vec![group("service", &[Kitchen, Gallery])], Some("front")),
            strip("front", East, vec![room(Living)], Some("hall")),
            remainder("hall", Corridor),
            strip("service", East, vec![room(Kitchen), room(Gallery)], None),
            strip("night", North, vec![room(Bedroom)], Some("wet")),
            strip("wet", West, vec![room(Bathroom), room(Toilet)], None),
        ],
        openings: vec![
            entrance(Living, East, 0.5),
            window(Living, North),
            passage(Corridor, Living),
            door(Bedroom, Wall::Shared(Corridor), ROOM_DOOR),
            passage(Kitchen, Living),
            door(Gallery, Wall::Shared(Kitchen), ROOM_DOOR),
            door(Bathroom, Wall::Shared(Bedroom), WET_DOOR),
            door(Toilet, Wall::Shared(Bedroom), WET_DOOR),
            window(Bedroom, West),
            window(Kitchen, South),
            plain(Bathroom, Wall::Side(West), 0.5, SMALL_WINDOW),
        ],
    }
}

fn one_bhk_north() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(RoomCount::OneBhk, Entrance::North, Variant::Standard),
        orientation: Orientation::Any,
        mode: TotalityMode::Bounded,
        bounds: one_bhk_bounds(),
        steps: vec![
            strip(PLOT_REGION, South, vec![group("night", &[Bedroom, Bathroom, Toilet])], Some("day")),
            strip("day", West, vec![group("service", &[Kitchen, Gallery])], Some("front")),
            strip("front", North, vec![room(Living)], Some("hall")),
            remainder("hall", Corridor),
            strip("service", North, vec![room(Kitchen), room(Gallery)], None),
            strip("night", East, vec![room(Bedroom)], Some("wet")),
            strip("wet", South, vec![room(Bathroom), room(Toilet)], None),
        ],
        openings: vec![
            entrance(Living, North, 0.5),
            window(Living, East),
            passage(Corridor, Living),
            door(Bedroom, Wall::Shared(Corridor), ROOM_DOOR),
            passage(Kitchen, Living),
            door(Gallery, Wall::Shared(Kitchen), ROOM_DOOR),
            door(Bathroom, Wall::Shared(Bedroom), WET_DOOR),
            door(Toilet, Wall::Shared(Bedroom), WET_DOOR),
            window(Bedroom, South),
            window(Kitchen, West),
            plain(Bathroom, Wall::Side(West), 0.5, SMALL_WINDOW),
        ],
    }
}

fn two_bhk_north_two_normal() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(RoomCount::TwoBhk, Entrance::North, Variant::TwoNormal),
        orientation: Orientation::Any,
        mode: TotalityMode::Exact,
        bounds: bounds(&[
            (Living, 20.0, 25.0),
            (Kitchen, 12.0, 14.0),
            (KitchenBalcony, 5.0, 6.0),
            (Balcony, 4.0, 5.0),
            (Bedroom, 18.0, 20.0),
            (Bedroom2, 17.0, 19.0),
            (Toilet, 2.0, 3.0),
            (Bathroom, 2.0, 3.0),
            (Pooja, 2.0, 3.0),
            (Corridor, 6.0, 10.0),
        ]),
        steps: vec![
            strip(PLOT_REGION, West, vec![group("west", &[Bedroom, Bathroom, Toilet])], Some("mid")),
            strip(
                "mid",
                East,
                vec![group("east", &[Pooja, Bedroom2, Kitchen, KitchenBalcony])],
                Some("core"),
            ),
            strip("core", North, vec![room(Living)], Some("hall")),
            strip("hall", South, vec![room(Balcony)], Some("passage")),
            remainder("passage", Corridor),
            strip(
                "east",
                North,
                vec![room(Pooja), room(Bedroom2), room(Kitchen), room(KitchenBalcony)],
                None,
            ),
            strip("west", South, vec![room(Bedroom), room(Bathroom), room(Toilet)], None),
        ],
        openings: vec![
            entrance(Living, North, 0.3),
            plain(Living, Wall::Side(North), 0.8, Span { fraction: 0.2, max: 4.0 }),
            passage(Corridor, Living),
            passage(Kitchen, Corridor),
            passage(Pooja, Living),
            door(Bedroom2, Wall::Shared(Living), ROOM_DOOR),
            door(Bedroom, Wall::Shared(Corridor), ROOM_DOOR),
            door(Balcony, Wall::Shared(Bedroom), ROOM_DOOR),
            door(KitchenBalcony, Wall::Shared(Kitchen), ROOM_DOOR),
            door(Bathroom, Wall::Shared(Bedroom), WET_DOOR),
            door(Toilet, Wall::Shared(Living), WET_DOOR),
            window(Bedroom, West),
            window(Bedroom2, East),
            window(Kitchen, East),
            plain(Balcony, Wall::Side(South), 0.5, WINDOW),
            plain(Toilet, Wall::Side(North), 0.5, SMALL_WINDOW),
        ],
    }
}

/// Authored for any plot; the east entrance key restricts it to landscape.
fn two_bhk_east_master_normal() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(RoomCount::TwoBhk, Entrance::East, Variant::OneMasterOneNormal),
        orientation: Orientation::Any,
        mode: TotalityMode::Exact,
        bounds: bounds(&[
            (Living, 20.0, 26.0),
            (Balcony, 3.0, 5.0),
            (Kitchen, 15.0, 19.0),
            (Bedroom, 11.0, 14.0),
            (MasterBedroom, 9.0, 13.0),
            (Pooja, 2.0, 3.0),
            (Ensuite, 1.0, 3.0),
            (Toilet, 2.0, 4.0),
            (Bathroom, 3.0, 5.0),
            (Corridor, 4.0, 9.0),
        ]),
        steps: vec![
            strip(PLOT_REGION, East, vec![group("day", &[Living, Kitchen, Balcony])], Some("rest")),
            strip(
                "rest",
                West,
                vec![group(
                    "night",
                    &[Bedroom, MasterBedroom, Ensuite, Bathroom, Toilet],
                )],
                Some("hall"),
            ),
            strip("hall", North, vec![ratio(Some("passage"), 0.45, 0.65)], Some("lobby")),
            remainder("passage", Corridor),
            strip("lobby", North, vec![room(Pooja)], None),
            strip("day", North, vec![room(Living)], Some("service")),
            strip("service", West, vec![room(Kitchen), room(Balcony)], None),
            strip(
                "night",
                North,
                vec![
                    room(Bedroom),
                    group("suite", &[MasterBedroom, Ensuite]),
                    group("wet", &[Bathroom, Toilet]),
                ],
                None,
            ),
            strip("suite", West, vec![room(Ensuite), room(MasterBedroom)], None),
            strip("wet", West, vec![room(Bathroom), room(Toilet)], None),
        ],
        openings: vec![
            entrance(Living, East, 0.5),
            window(Living, North),
            passage(Corridor, Living),
            passage(Kitchen, Living),
            passage(Pooja, Corridor),
            door(Balcony, Wall::Shared(Kitchen), ROOM_DOOR),
            door(MasterBedroom, Wall::Shared(Corridor), ROOM_DOOR),
            door(Ensuite, Wall::Shared(MasterBedroom), WET_DOOR),
            door(Bedroom, Wall::Side(East), ROOM_DOOR),
            door(Bathroom, Wall::Shared(MasterBedroom), WET_DOOR),
            door(Toilet, Wall::Shared(Bathroom), WET_DOOR),
            window(Bedroom, West),
            window(Kitchen, South),
            plain(Balcony, Wall::Side(South), 0.5, WINDOW),
            plain(Ensuite, Wall::Side(West), 0.5, SMALL_WINDOW),
            plain(Bathroom, Wall::Side(South), 0.5, SMALL_WINDOW),
        ],
    }
}

fn three_bhk_north_master_two_normal() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(RoomCount::ThreeBhk, Entrance::North, Variant::OneMasterTwoNormal),
        orientation: Orientation::Any,
        mode: TotalityMode::Exact,
        bounds: bounds(&[
            (Living, 18.0, 22.0),
            (KitchenBalcony, 3.0, 4.0),
            (Kitchen, 12.0, 14.0),
            (Bedroom, 10.0, 14.0),
            (Bedroom2, 9.0, 11.0),
            (MasterBedroom, 11.0, 13.0),
            (Ensuite, 3.0, 5.0),
            (Toilet, 2.0, 4.0),
            (Bathroom, 2.0, 4.0),
            (Corridor, 6.0, 10.0),
        ]),
        steps: vec![
            strip(PLOT_REGION, North, vec![group("front", &[Living, Kitchen, KitchenBalcony])], Some("back")),
            strip(
                "back",
                South,
                vec![group(
                    "rear",
                    &[MasterBedroom, Ensuite, Bedroom, Bedroom2, Bathroom, Toilet],
                )],
                Some("hall"),
            ),
            remainder("hall", Corridor),
            strip("front", East, vec![room(Living)], Some("service")),
            strip("service", West, vec![room(KitchenBalcony), room(Kitchen)], None),
            strip(
                "rear",
                West,
                vec![
                    group("suite", &[MasterBedroom, Ensuite]),
                    room(Bedroom),
                    group("wet", &[Bathroom, Toilet]),
                    room(Bedroom2),
                ],
                None,
            ),
            strip("suite", North, vec![room(MasterBedroom), room(Ensuite)], None),
            strip("wet", West, vec![room(Bathroom), room(Toilet)], None),
        ],
        openings: vec![
            entrance(Living, North, 0.5),
            window(Living, East),
            passage(Corridor, Living),
            passage(Kitchen, Living),
            door(KitchenBalcony, Wall::Shared(Kitchen), ROOM_DOOR),
            door(MasterBedroom, Wall::Shared(Corridor), ROOM_DOOR),
            door(Ensuite, Wall::Shared(MasterBedroom), WET_DOOR),
            door(Bedroom, Wall::Shared(Corridor), ROOM_DOOR),
            door(Bathroom, Wall::Shared(Bedroom), WET_DOOR),
            door(Toilet, Wall::Shared(Bedroom2), WET_DOOR),
            door(Bedroom2, Wall::Side(North), ROOM_DOOR),
            window(Bedroom, South),
            window(Bedroom2, East),
            window(MasterBedroom, West),
            window(Kitchen, North),
            plain(Ensuite, Wall::Side(South), 0.5, SMALL_WINDOW),
        ],
    }
}

fn three_bhk_east_master_guest_normal() -> Template {
    use RoomKind::*;
    use Side::*;
    Template {
        key: key(
            RoomCount::ThreeBhk,
            Entrance::East,
            Variant::OneMasterOneGuestOneNormal,
        ),
        orientation: Orientation::Any,
        mode: TotalityMode::Exact,
        bounds: bounds(&[
            (Living, 14.0, 20.0),
            (KitchenBalcony, 2.0, 4.0),
            (Kitchen, 9.0, 12.0),
            (Bedroom, 8.0, 12.0),
            (GuestBedroom, 8.0, 12.0),
            (MasterBedroom, 9.0, 12.0),
            (Ensuite, 3.0, 5.0),
            (Toilet, 2.0, 3.0),
            (Bathroom, 3.0, 5.0),
            (Corridor, 12.0, 18.0),
        ]),
        steps: vec![
            strip(
                PLOT_REGION,
                South,
                vec![group("south", &[MasterBedroom, Ensuite, Kitchen, KitchenBalcony])],
                Some("north"),
            ),
            strip("north", North, vec![group("top", &[Bedroom, GuestBedroom])], Some("middle")),
            strip("middle", East, vec![room(Living)], Some("hall")),
            strip("hall", West, vec![group("wet", &[Bathroom, Toilet])], Some("passage")),
            remainder("passage", Corridor),
            strip("wet", North, vec![room(Bathroom), room(Toilet)], None),
            strip("top", West, vec![room(Bedroom), room(GuestBedroom)], None),
            strip(
                "south",
                West,
                vec![
                    group("suite", &[MasterBedroom, Ensuite]),
                    room(KitchenBalcony),
                    room(Kitchen),
                ],
                None,
            ),
            strip("suite", North, vec![room(Ensuite), room(MasterBedroom)], None),
        ],
        openings: vec![
            entrance(Living, East, 0.5),
            passage(Corridor, Living),
            door(Bathroom, Wall::Shared(Corridor), WET_DOOR),
            door(Toilet, Wall::Shared(Corridor), WET_DOOR),
            door(Bedroom, Wall::Shared(Corridor), ROOM_DOOR),
            door(GuestBedroom, Wall::Shared(Living), ROOM_DOOR),
            passage(Ensuite, Corridor),
            door(MasterBedroom, Wall::Shared(Ensuite), ROOM_DOOR),
            passage(Kitchen, Living),
            door(KitchenBalcony, Wall::Shared(Kitchen), ROOM_DOOR),
            window(Bedroom, North),
            window(GuestBedroom, North),
            window(MasterBedroom, South),
            window(Kitchen, East),
            plain(Bathroom, Wall::Side(West), 0.5, SMALL_WINDOW),
        ],
    }
}
