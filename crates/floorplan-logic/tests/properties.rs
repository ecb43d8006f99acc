//! Property tests for floor-plan generation.
//!
//! Randomized plots and bound sets protect the layout invariants:
//! allocations respect their bounds, rooms never overlap, never leave the
//! plot, and never collapse to zero width or height.
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use floorplan_logic::allocation::{allocate, total_area, AreaBound, TotalityMode};
use floorplan_logic::catalog::catalog;
use floorplan_logic::config::GeneratorConfig;
use floorplan_logic::geometry::{PlotSpec, Point};
use floorplan_logic::pipeline::generate;
use floorplan_logic::report::{direction, Direction};
use floorplan_logic::rooms::RoomKind;

fn bounds_from(table: &[(f64, f64)]) -> Vec<AreaBound> {
    table
        .iter()
        .zip(RoomKind::ALL)
        .map(|(&(min, range), room)| AreaBound::new(room, min, min + range))
        .collect()
}

fn bound_set() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((0.0f64..25.0, 0.0f64..30.0), 1..8)
}

/// A plot inside the admissible aspect window.
fn admissible_plot() -> impl Strategy<Value = PlotSpec> {
    (8.0f64..120.0, 0.401f64..1.999)
        .prop_map(|(width, aspect)| PlotSpec::new(width, width * aspect))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Bounded allocations stay within bounds and never exceed the plot.
    #[test]
    fn property_bounded_allocation_within_bounds(
        table in bound_set(),
        plot_area in 10.0f64..5000.0,
    ) {
        let bounds = bounds_from(&table);
        let min_total: f64 = bounds.iter().map(|b| b.min_percent).sum();
        prop_assume!(min_total <= 100.0);

        let areas = allocate(plot_area, &bounds, TotalityMode::Bounded).unwrap();
        let eps = 1e-9 * plot_area;
        for b in &bounds {
            let a = areas[&b.room];
            prop_assert!(a >= b.min_area(plot_area) - eps && a <= b.max_area(plot_area) + eps);
        }
        prop_assert!(total_area(&areas) <= plot_area + eps);
    }

    /// PROPERTY: In bounded mode no room can grow: either the plot is full
    /// or every room already sits at its maximum.
    #[test]
    fn property_bounded_allocation_is_maximal(
        table in bound_set(),
        plot_area in 10.0f64..5000.0,
    ) {
        let bounds = bounds_from(&table);
        let min_total: f64 = bounds.iter().map(|b| b.min_percent).sum();
        prop_assume!(min_total <= 100.0);

        let areas = allocate(plot_area, &bounds, TotalityMode::Bounded).unwrap();
        let eps = 1e-9 * plot_area;
        let full = (total_area(&areas) - plot_area).abs() <= eps;
        let capped = bounds
            .iter()
            .all(|b| (areas[&b.room] - b.max_area(plot_area)).abs() <= eps);
        prop_assert!(full || capped);
    }

    /// PROPERTY: Exact allocations sum to the plot area whenever the bounds admit it.
    #[test]
    fn property_exact_allocation_sums_to_plot(
        table in bound_set(),
        plot_area in 10.0f64..5000.0,
    ) {
        let bounds = bounds_from(&table);
        let min_total: f64 = bounds.iter().map(|b| b.min_percent).sum();
        let max_total: f64 = bounds.iter().map(|b| b.max_percent).sum();
        let result = allocate(plot_area, &bounds, TotalityMode::Exact);
        if min_total <= 100.0 && max_total >= 100.0 {
            let areas = result.unwrap();
            prop_assert!((total_area(&areas) - plot_area).abs() <= 1e-9 * plot_area);
        } else if min_total > 100.0 + 1e-9 || max_total < 100.0 - 1e-9 {
            prop_assert!(result.is_err());
        }
    }

    /// PROPERTY: Every generated room has positive dimensions, lies inside
    /// the plot, and overlaps no other room.
    #[test]
    fn property_layout_rectangles_are_sound(
        plot in admissible_plot(),
        index in 0usize..10,
    ) {
        let template = &catalog()[index % catalog().len()];
        prop_assume!(template.orientation.accepts(&plot));

        let config = GeneratorConfig::default();
        let plan = generate(&plot, &template.key, &config).unwrap();
        let eps = config.length_eps(plot.width, plot.height);
        let area_eps = config.area_eps(plot.area());

        let rooms: Vec<_> = plan.layout.rooms.iter().collect();
        for (kind, r) in &rooms {
            prop_assert!(r.width() > 0.0 && r.height() > 0.0, "{} is degenerate", kind);
            prop_assert!(r.left() >= -eps && r.bottom() >= -eps);
            prop_assert!(r.right() <= plot.width + eps && r.top() <= plot.height + eps);
        }
        for i in 0..rooms.len() {
            for j in (i + 1)..rooms.len() {
                prop_assert!(
                    rooms[i].1.overlap_area(rooms[j].1) <= area_eps,
                    "{} overlaps {}",
                    rooms[i].0,
                    rooms[j].0
                );
            }
        }
    }

    /// PROPERTY: direction() is a pure function of centroid and plot.
    #[test]
    fn property_direction_is_pure(
        plot in admissible_plot(),
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0,
    ) {
        let config = GeneratorConfig::default();
        let c = Point::new(fx * plot.width, fy * plot.height);
        let first = direction(c, &plot, &config);
        prop_assert_eq!(first, direction(c, &plot, &config));

        let expected = if c.y > 0.66 * plot.height {
            Direction::North
        } else if c.y < 0.33 * plot.height {
            Direction::South
        } else if c.x > 0.66 * plot.width {
            Direction::East
        } else if c.x < 0.33 * plot.width {
            Direction::West
        } else {
            Direction::Central
        };
        prop_assert_eq!(first, expected);
    }
}
