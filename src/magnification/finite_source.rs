use crate::magnification::yoo::b0_b1;
use crate::magnification::*;

/// Smallest impact parameter used in the magnification formula
///
/// At `u = 0` both the point-source factor and `B0(u / rho)` are singular, their product is
/// finite and is approached at this separation.
const MIN_IMPACT_PARAMETER: f64 = 1e-10;

macro_const! {
    const DOC: &str = r#"
Finite-source point-lens (FSPL) model

Point-source magnification corrected for the finite source size $\rho$ and the linear
limb-darkening $\Gamma$ of the telescope passband, Yoo et al. (2004):

$$
A(u) = A_\mathrm{PSPL}(u) \left[B_0(z) - \Gamma B_1(z)\right], \qquad z = u / \rho.
$$

- Physical parameters: **to**, **uo**, **tE**, **rho**
"#;
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FiniteSourcePointLens {}

impl FiniteSourcePointLens {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Magnification at a single separation
    pub fn magnification_at(u: f64, rho: f64, gamma: f64) -> f64 {
        let u = u.max(MIN_IMPACT_PARAMETER);
        let (b0, b1) = b0_b1(u / rho);
        point_source_magnification(u) * (b0 - gamma * b1)
    }
}

impl MagnificationTrait for FiniteSourcePointLens {
    fn physical_parameters(&self) -> &'static [&'static str] {
        &["to", "uo", "tE", "rho"]
    }

    fn default_boundaries(&self, event: &Event) -> Vec<Boundary> {
        let mut boundaries = single_lens_boundaries(event);
        boundaries.push((1e-5, 0.05));
        boundaries
    }

    fn magnification(
        &self,
        telescope: &Telescope,
        parameters: &NamedParameters,
    ) -> Result<MagnificationArrays, ModelError> {
        let u = impact_parameter(
            telescope.time(),
            parameters.to()?,
            parameters.uo()?,
            parameters.t_e()?,
        );
        let rho = parameters.rho()?;
        let gamma = telescope.gamma();
        let magnification = u.mapv(|u| Self::magnification_at(u, rho, gamma));
        Ok((magnification, u))
    }
}
