//! Generator configuration.
//!
//! Tolerances, the plot admission window and the report thresholds. Every
//! field has a default, so a partial JSON document deserializes cleanly:
//!
//! ```
//! use floorplan_logic::config::GeneratorConfig;
//!
//! let config: GeneratorConfig = serde_json::from_str(r#"{ "max_aspect": 2.5 }"#).unwrap();
//! assert_eq!(config.max_aspect, 2.5);
//! assert_eq!(config.min_aspect, 0.4);
//! ```

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Largest accepted `report_precision`. Rounding scales by 10^precision,
/// which must stay well inside f64 range.
pub const MAX_REPORT_PRECISION: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Relative tolerance, scaled by plot extent for lengths and plot area for areas.
    pub tolerance: f64,
    /// Smallest accepted height/width ratio.
    pub min_aspect: f64,
    /// Largest accepted height/width ratio.
    pub max_aspect: f64,
    /// Centroids above this fraction of plot height report as North.
    pub north_threshold: f64,
    /// Centroids below this fraction of plot height report as South.
    /// The same pair of fractions splits the width into East / West.
    pub south_threshold: f64,
    /// Decimal places kept for reported widths and heights.
    pub report_precision: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            min_aspect: 0.4,
            max_aspect: 2.0,
            north_threshold: 0.66,
            south_threshold: 0.33,
            report_precision: 2,
        }
    }
}

impl GeneratorConfig {
    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> LayoutResult<()> {
        let invalid = |field: &'static str, reason: String| {
            Err(LayoutError::InvalidConfig { field, reason })
        };

        if !(self.tolerance.is_finite() && self.tolerance > 0.0 && self.tolerance < 0.01) {
            return invalid("tolerance", format!("{} is not in (0, 0.01)", self.tolerance));
        }
        if !(self.min_aspect.is_finite() && self.min_aspect > 0.0) {
            return invalid("min_aspect", format!("{} is not a positive ratio", self.min_aspect));
        }
        if !self.max_aspect.is_finite() || self.max_aspect < self.min_aspect {
            return invalid(
                "max_aspect",
                format!("{} is below min_aspect {}", self.max_aspect, self.min_aspect),
            );
        }
        if !(self.north_threshold.is_finite() && self.north_threshold < 1.0) {
            return invalid("north_threshold", format!("{} is not below 1", self.north_threshold));
        }
        if !(self.south_threshold.is_finite()
            && self.south_threshold > 0.0
            && self.south_threshold < self.north_threshold)
        {
            return invalid(
                "south_threshold",
                format!(
                    "{} is not in (0, north_threshold {})",
                    self.south_threshold, self.north_threshold
                ),
            );
        }
        if self.report_precision > MAX_REPORT_PRECISION {
            return invalid(
                "report_precision",
                format!("{} exceeds {}", self.report_precision, MAX_REPORT_PRECISION),
            );
        }
        Ok(())
    }

    /// Absolute length tolerance for a plot of the given dimensions.
    pub fn length_eps(&self, width: f64, height: f64) -> f64 {
        self.tolerance * width.max(height)
    }

    /// Absolute area tolerance for a plot of the given area.
    pub fn area_eps(&self, area: f64) -> f64 {
        self.tolerance * area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_matches_admission_rule() {
        let c = GeneratorConfig::default();
        assert_eq!(c.min_aspect, 0.4);
        assert_eq!(c.max_aspect, 2.0);
        assert!(c.south_threshold < c.north_threshold);
    }

    fn rejected_field(config: GeneratorConfig) -> &'static str {
        match config.validate() {
            Err(LayoutError::InvalidConfig { field, .. }) => field,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tolerance_must_be_small_and_positive() {
        for tolerance in [-1e-6, 0.0, f64::NAN, 0.5] {
            let c = GeneratorConfig {
                tolerance,
                ..GeneratorConfig::default()
            };
            assert_eq!(rejected_field(c), "tolerance");
        }
    }

    #[test]
    fn test_aspect_window_must_be_ordered() {
        let c = GeneratorConfig {
            min_aspect: 0.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "min_aspect");

        let c = GeneratorConfig {
            min_aspect: 2.5,
            max_aspect: 2.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "max_aspect");

        let c = GeneratorConfig {
            max_aspect: f64::INFINITY,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "max_aspect");
    }

    #[test]
    fn test_thresholds_must_split_the_plot() {
        let c = GeneratorConfig {
            north_threshold: 1.2,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "north_threshold");

        let c = GeneratorConfig {
            south_threshold: 0.66,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "south_threshold");

        let c = GeneratorConfig {
            south_threshold: -0.1,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "south_threshold");
    }

    #[test]
    fn test_report_precision_is_capped() {
        let c = GeneratorConfig {
            report_precision: 400,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_field(c), "report_precision");

        let c = GeneratorConfig {
            report_precision: MAX_REPORT_PRECISION,
            ..GeneratorConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_eps_scale_with_plot() {
        let c = GeneratorConfig::default();
        assert!((c.length_eps(30.0, 40.0) - 40e-6).abs() < 1e-12);
        assert!((c.area_eps(1200.0) - 1.2e-3).abs() < 1e-12);
    }
}
