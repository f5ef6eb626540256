use crate::data::{Event, Telescope};
use crate::error::ModelError;
use crate::parameters::NamedParameters;
use crate::types::{Array1F, ArrayView1F, Boundary, MagnificationArrays};

use enum_dispatch::enum_dispatch;
pub(super) use macro_const::macro_const;
pub(super) use schemars::JsonSchema;
pub(super) use serde::{Deserialize, Serialize};

mod finite_source;
pub use finite_source::FiniteSourcePointLens;

mod point_source;
pub use point_source::PointSourcePointLens;

pub mod yoo;

/// Magnification of a single-lens model
#[enum_dispatch]
pub trait MagnificationTrait {
    /// Names of the physical parameters in the order of the parameter vector
    fn physical_parameters(&self) -> &'static [&'static str];

    /// Default `(min, max)` boundaries of the physical parameters
    fn default_boundaries(&self, event: &Event) -> Vec<Boundary>;

    /// Magnification and impact parameter at every observation time of the telescope
    fn magnification(
        &self,
        telescope: &Telescope,
        parameters: &NamedParameters,
    ) -> Result<MagnificationArrays, ModelError>;
}

#[enum_dispatch(MagnificationTrait)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum MagnificationModel {
    Pspl(PointSourcePointLens),
    Fspl(FiniteSourcePointLens),
}

/// Lens-source separation in Einstein radii for a rectilinear motion
pub fn impact_parameter(time: ArrayView1F, to: f64, uo: f64, t_e: f64) -> Array1F {
    time.mapv(|t| {
        let tau = (t - to) / t_e;
        f64::hypot(tau, uo)
    })
}

/// Point-source point-lens magnification, Paczyński (1986)
#[inline]
pub fn point_source_magnification(u: f64) -> f64 {
    let u2 = u * u;
    (u2 + 2.0) / (u * f64::sqrt(u2 + 4.0))
}

/// Boundaries shared by all single-lens models: `to`, `uo`, `tE`
fn single_lens_boundaries(event: &Event) -> Vec<Boundary> {
    vec![
        crate::parameters::bounds::to_boundary(event),
        (-2.0, 2.0),
        (1.0, 300.0),
    ]
}
