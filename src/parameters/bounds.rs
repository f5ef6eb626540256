use crate::data::Event;
use crate::types::Boundary;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Boundaries of the physical model parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum ModelBoundaries {
    /// Derived from the event time span and the model variant
    #[default]
    Default,
    /// One `(min, max)` pair per physical parameter
    Custom(Vec<Boundary>),
}

impl ModelBoundaries {
    pub fn custom(boundaries: impl Into<Vec<Boundary>>) -> Self {
        Self::Custom(boundaries.into())
    }
}

/// Boundaries of the time of closest approach: the event time span extended by 300 days
pub(crate) fn to_boundary(event: &Event) -> Boundary {
    const MARGIN: f64 = 300.0;
    let (t_min, t_max) = event.time_range();
    (t_min - MARGIN, t_max + MARGIN)
}

pub(crate) fn within_bounds(x: &[f64], bounds: &[Boundary]) -> bool {
    x.iter()
        .zip(bounds)
        .all(|(&value, &(lower, upper))| lower <= value && value <= upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within() {
        let bounds = [(-1.0, 1.0), (0.0, 10.0)];
        assert!(within_bounds(&[0.0, 10.0], &bounds));
        assert!(!within_bounds(&[0.0, 10.5], &bounds));
        assert!(!within_bounds(&[-1.5, 5.0], &bounds));
        assert!(!within_bounds(&[f64::NAN, 5.0], &bounds));
    }

    #[test]
    fn extra_values_are_ignored() {
        assert!(within_bounds(&[0.0, 100.0, -100.0], &[(-1.0, 1.0)]));
    }
}
