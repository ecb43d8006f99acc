//! Error types for floor-plan generation.
//!
//! Every failure is terminal for the request that produced it. Variants
//! carry enough structured context (room, bound, step) for a caller to
//! react programmatically instead of parsing messages.

use crate::geometry::ValidationError;
use crate::rooms::RoomKind;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// One area bound that takes part in an infeasible allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundViolation {
    pub room: RoomKind,
    pub min_percent: f64,
    pub max_percent: f64,
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}%, {}%]",
            self.room, self.min_percent, self.max_percent
        )
    }
}

/// What a failing placement step was producing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepTarget {
    Room(RoomKind),
    Region(String),
    OpenFloor,
}

impl fmt::Display for StepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(kind) => write!(f, "room {}", kind),
            Self::Region(name) => write!(f, "region '{}'", name),
            Self::OpenFloor => f.write_str("open floor"),
        }
    }
}

/// Main error type for floor-plan generation.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    /// No assignment satisfies the area bounds and the totality mode
    #[error(
        "infeasible allocation ({reason}; min total {min_total}%, max total {max_total}%): {}",
        join_violations(.violations)
    )]
    InfeasibleAllocation {
        reason: String,
        violations: Vec<BoundViolation>,
        min_total: f64,
        max_total: f64,
    },

    /// No catalog entry matches the requested key (and plot orientation)
    #[error("unsupported template '{key}'")]
    UnsupportedTemplate { key: String },

    /// A generator setting is out of range
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Plot dimensions are non-positive or outside the accepted aspect window
    #[error("unsupported plot {width}x{height}: {reason}")]
    UnsupportedPlot {
        width: f64,
        height: f64,
        reason: String,
    },

    /// A placement step computed a non-positive width or height
    #[error("degenerate rectangle at step {step} for {target}: {width}x{height}")]
    DegenerateRectangle {
        step: usize,
        target: StepTarget,
        width: f64,
        height: f64,
    },

    /// A remainder fill produced an area outside the room's bounds
    #[error("remainder for {room} has area {area}, outside [{min}, {max}]")]
    RemainderOutOfBounds {
        room: RoomKind,
        area: f64,
        min: f64,
        max: f64,
    },

    /// A step consumed a region that does not exist, or left one unconsumed
    #[error("unresolved region '{region}' at step {step}")]
    UnresolvedRegion { step: usize, region: String },

    /// A step or opening rule targets a room absent from the allocation or layout
    #[error("unknown room {room} referenced by {context}")]
    UnknownRoomReference { room: RoomKind, context: String },

    /// An opening on a shared wall names two rooms that do not touch
    #[error("opening between {room} and {neighbor} has no shared wall")]
    DetachedOpening { room: RoomKind, neighbor: RoomKind },

    /// Post-placement validation found overlapping or out-of-plot rooms
    #[error("invalid layout: {}", join_validation(.errors))]
    InvalidLayout { errors: Vec<ValidationError> },
}

fn join_violations(violations: &[BoundViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message_names_rooms() {
        let err = LayoutError::InfeasibleAllocation {
            reason: "minimum percentages exceed 100".into(),
            violations: vec![
                BoundViolation {
                    room: RoomKind::Living,
                    min_percent: 60.0,
                    max_percent: 70.0,
                },
                BoundViolation {
                    room: RoomKind::Kitchen,
                    min_percent: 50.0,
                    max_percent: 55.0,
                },
            ],
            min_total: 110.0,
            max_total: 125.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Living [60%, 70%]"));
        assert!(msg.contains("Kitchen"));
    }

    #[test]
    fn test_degenerate_message_names_step() {
        let err = LayoutError::DegenerateRectangle {
            step: 3,
            target: StepTarget::Region("hall".into()),
            width: 0.0,
            height: 4.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate rectangle at step 3 for region 'hall': 0x4"
        );
    }
}
