use crate::magnification::*;

macro_const! {
    const DOC: &str = r#"
Point-source point-lens (PSPL) model

$$
A(u) = \frac{u^2 + 2}{u \sqrt{u^2 + 4}}, \qquad
u(t) = \sqrt{u_0^2 + \left(\frac{t - t_0}{t_E}\right)^2}.
$$

- Physical parameters: **to**, **uo**, **tE**
"#;
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PointSourcePointLens {}

impl PointSourcePointLens {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl MagnificationTrait for PointSourcePointLens {
    fn physical_parameters(&self) -> &'static [&'static str] {
        &["to", "uo", "tE"]
    }

    fn default_boundaries(&self, event: &Event) -> Vec<Boundary> {
        single_lens_boundaries(event)
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
        let magnification = u.mapv(point_source_magnification);
        Ok((magnification, u))
    }
}
