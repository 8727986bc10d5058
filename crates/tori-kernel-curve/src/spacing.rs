//! Spacing policies and the sample type they produce.

use serde::{Deserialize, Serialize};

/// How samples are distributed around an ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingPolicy {
    /// Equal increments of the curve parameter (standard ellipse equations).
    #[default]
    Area,
    /// Equal increments of the outward normal direction.
    EquiangularNormal,
    /// Equal increments of the direction from the centre.
    EquiangularRadius,
    /// Equal distance along the circumference.
    #[cfg(feature = "arc-length")]
    ArcLength,
}

impl SpacingPolicy {
    /// Every policy compiled into this build.
    #[cfg(feature = "arc-length")]
    pub const ALL: &'static [SpacingPolicy] = &[
        SpacingPolicy::Area,
        SpacingPolicy::EquiangularNormal,
        SpacingPolicy::EquiangularRadius,
        SpacingPolicy::ArcLength,
    ];

    /// Every policy compiled into this build.
    #[cfg(not(feature = "arc-length"))]
    pub const ALL: &'static [SpacingPolicy] = &[
        SpacingPolicy::Area,
        SpacingPolicy::EquiangularNormal,
        SpacingPolicy::EquiangularRadius,
    ];
}

/// One sample on a parameterized curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamPoint {
    /// Curve parameter in `[0, 2π)`; drives the sample position.
    pub param: f64,
    /// Direction of the outward normal in `[0, 2π)`.
    pub normal_angle: f64,
}

impl ParamPoint {
    /// The sample at index 0 under every policy.
    pub const ORIGIN: Self = Self {
        param: 0.0,
        normal_angle: 0.0,
    };

    /// Create a sample.
    pub fn new(param: f64, normal_angle: f64) -> Self {
        Self {
            param,
            normal_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_default_first() {
        assert_eq!(SpacingPolicy::ALL[0], SpacingPolicy::default());
        #[cfg(feature = "arc-length")]
        assert_eq!(SpacingPolicy::ALL.len(), 4);
    }
}
