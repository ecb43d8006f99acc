//! Room kinds.
//!
//! The set of rooms in a plan depends on the template; this enum is the
//! union over the whole catalog. Declaration order is the canonical order
//! for every map keyed by room kind.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Living,
    Kitchen,
    Bedroom,
    Bedroom2,
    MasterBedroom,
    GuestBedroom,
    Ensuite,
    Bathroom,
    Toilet,
    Pooja,
    Gallery,
    Balcony,
    KitchenBalcony,
    Corridor,
}

impl RoomKind {
    pub const ALL: [RoomKind; 14] = [
        RoomKind::Living,
        RoomKind::Kitchen,
        RoomKind::Bedroom,
        RoomKind::Bedroom2,
        RoomKind::MasterBedroom,
        RoomKind::GuestBedroom,
        RoomKind::Ensuite,
        RoomKind::Bathroom,
        RoomKind::Toilet,
        RoomKind::Pooja,
        RoomKind::Gallery,
        RoomKind::Balcony,
        RoomKind::KitchenBalcony,
        RoomKind::Corridor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::Bedroom2 => "Bedroom2",
            Self::MasterBedroom => "MasterBedroom",
            Self::GuestBedroom => "GuestBedroom",
            Self::Ensuite => "Ensuite",
            Self::Bathroom => "Bathroom",
            Self::Toilet => "Toilet",
            Self::Pooja => "Pooja",
            Self::Gallery => "Gallery",
            Self::Balcony => "Balcony",
            Self::KitchenBalcony => "KitchenBalcony",
            Self::Corridor => "Corridor",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
