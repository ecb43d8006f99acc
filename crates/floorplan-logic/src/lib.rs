//! Pure floor-plan synthesis logic.
//!
//! This crate turns a plot's width and height plus a template key
//! (room count, entrance orientation, configuration variant) into a
//! rectangular-room floor plan. Functions take plain data and return
//! results; nothing here touches the filesystem, the network, or any
//! rendering backend.
//!
//! The pipeline runs strictly in order:
//! allocation → placement → validation → openings → report.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`allocation`] | Room areas under percentage-of-plot bounds (exact or bounded total) |
//! | [`catalog`] | Declarative layout templates keyed by room count, entrance, variant |
//! | [`config`] | Generator tolerances, admission window, report thresholds |
//! | [`error`] | `LayoutError` taxonomy with structured context |
//! | [`geometry`] | Points, rectangles, wall segments, layout validation |
//! | [`openings`] | Door, window and passage geometry from opening rules |
//! | [`pipeline`] | End-to-end `generate` entry point |
//! | [`placement`] | Placement steps (strip, corner carve, remainder) and their engine |
//! | [`report`] | Per-room area, dimensions and compass direction |
//! | [`rooms`] | Room kinds |
//!
//! ```
//! use floorplan_logic::catalog::TemplateKey;
//! use floorplan_logic::config::GeneratorConfig;
//! use floorplan_logic::geometry::PlotSpec;
//! use floorplan_logic::pipeline::generate;
//!
//! let key: TemplateKey = "2bhk/north/2normal".parse().unwrap();
//! let plan = generate(&PlotSpec::new(30.0, 40.0), &key, &GeneratorConfig::default()).unwrap();
//! assert!(plan.layout.rooms.len() >= 9);
//! ```

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod openings;
pub mod pipeline;
pub mod placement;
pub mod report;
pub mod rooms;
