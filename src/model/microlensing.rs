use crate::data::{Event, Telescope};
use crate::error::ModelError;
use crate::fancy::{ConversionTrait, FancyParameter, FancyParameters};
use crate::fancy::resolution::ResolutionPlan;
use crate::magnification::{MagnificationModel, MagnificationTrait};
use crate::model::{ModelConfig, ModelKind};
use crate::parameters::bounds::within_bounds;
use crate::parameters::{
    ModelBoundaries, NamedParameters, ParameterDictionary, blend_ratio_key, source_flux_key,
};
use crate::types::{Array1F, Boundary, MagnificationArrays};

/// Microlensing model of an event
///
/// The model borrows the event and owns everything derived from it: the standard parameter
/// dictionary (physical parameters followed by `fs_<telescope>` and `g_<telescope>` of every
/// telescope), the model dictionary (the standard one with fancy names substituted), the
/// physical parameter boundaries and the fancy parameter registry.
#[derive(Clone, Debug)]
pub struct Model<'a> {
    event: &'a Event,
    kind: ModelKind,
    magnification: MagnificationModel,
    standard_dictionary: ParameterDictionary,
    model_dictionary: ParameterDictionary,
    boundaries_config: ModelBoundaries,
    boundaries: Vec<Boundary>,
    fancy_parameters: FancyParameters,
    plan: ResolutionPlan,
}

impl<'a> Model<'a> {
    /// Model with default boundaries and no fancy parameters
    pub fn new(kind: ModelKind, event: &'a Event) -> Self {
        let magnification = kind.magnification_model();
        let standard_dictionary = standard_dictionary(&magnification, event);
        let boundaries = magnification.default_boundaries(event);
        Self {
            event,
            kind,
            magnification,
            model_dictionary: standard_dictionary.clone(),
            standard_dictionary,
            boundaries_config: ModelBoundaries::Default,
            boundaries,
            fancy_parameters: FancyParameters::new(),
            plan: ResolutionPlan::default(),
        }
    }

    pub fn from_config(config: &ModelConfig, event: &'a Event) -> Result<Self, ModelError> {
        let mut model = Self::new(config.model, event);
        model.set_boundaries_config(config.boundaries.clone())?;
        model.set_fancy_parameters(config.fancy_parameters.clone())?;
        Ok(model)
    }

    /// Configuration the model can be rebuilt from
    pub fn config(&self) -> ModelConfig {
        ModelConfig {
            model: self.kind,
            fancy_parameters: self.fancy_parameters.clone(),
            boundaries: self.boundaries_config.clone(),
        }
    }

    /// Rebuild parameter dictionaries and the fancy parameter resolution plan
    ///
    /// The model is left unchanged if the fancy parameter registry is inconsistent.
    pub fn define_model_parameters(&mut self) -> Result<(), ModelError> {
        let (standard_dictionary, model_dictionary, plan) =
            self.parameter_definitions(&self.fancy_parameters)?;
        self.standard_dictionary = standard_dictionary;
        self.model_dictionary = model_dictionary;
        self.plan = plan;
        Ok(())
    }

    fn parameter_definitions(
        &self,
        fancy_parameters: &FancyParameters,
    ) -> Result<(ParameterDictionary, ParameterDictionary, ResolutionPlan), ModelError> {
        let standard_dictionary = standard_dictionary(&self.magnification, self.event);
        fancy_parameters.validate(&standard_dictionary)?;
        let model_dictionary = fancy_parameters.substitute(&standard_dictionary);
        let plan = ResolutionPlan::new(fancy_parameters, &standard_dictionary, &model_dictionary)?;
        tracing::debug!(
            model = %self.kind,
            parameters = ?model_dictionary.keys().collect::<Vec<_>>(),
            "model parameters defined"
        );
        Ok((standard_dictionary, model_dictionary, plan))
    }

    /// Replace the fancy parameter registry, the model is left unchanged on error
    pub fn set_fancy_parameters(
        &mut self,
        fancy_parameters: FancyParameters,
    ) -> Result<(), ModelError> {
        let (standard_dictionary, model_dictionary, plan) =
            self.parameter_definitions(&fancy_parameters)?;
        self.standard_dictionary = standard_dictionary;
        self.model_dictionary = model_dictionary;
        self.plan = plan;
        self.fancy_parameters = fancy_parameters;
        Ok(())
    }

    pub fn with_fancy_parameters(
        mut self,
        fancy_parameters: FancyParameters,
    ) -> Result<Self, ModelError> {
        self.set_fancy_parameters(fancy_parameters)?;
        Ok(self)
    }

    /// Override the default boundaries, one `(min, max)` pair per physical parameter
    pub fn set_parameters_boundaries(
        &mut self,
        boundaries: impl Into<Vec<Boundary>>,
    ) -> Result<(), ModelError> {
        self.set_boundaries_config(ModelBoundaries::custom(boundaries))
    }

    pub fn with_boundaries(
        mut self,
        boundaries: impl Into<Vec<Boundary>>,
    ) -> Result<Self, ModelError> {
        self.set_parameters_boundaries(boundaries)?;
        Ok(self)
    }

    fn set_boundaries_config(&mut self, config: ModelBoundaries) -> Result<(), ModelError> {
        self.boundaries = match &config {
            ModelBoundaries::Default => self.magnification.default_boundaries(self.event),
            ModelBoundaries::Custom(boundaries) => {
                let expected = self.magnification.physical_parameters().len();
                if boundaries.len() != expected {
                    return Err(ModelError::BoundariesSizeMismatch {
                        expected,
                        actual: boundaries.len(),
                    });
                }
                boundaries.clone()
            }
        };
        self.boundaries_config = config;
        Ok(())
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn event(&self) -> &'a Event {
        self.event
    }

    pub fn magnification_model(&self) -> &MagnificationModel {
        &self.magnification
    }

    pub fn physical_parameters(&self) -> &'static [&'static str] {
        self.magnification.physical_parameters()
    }

    /// Dictionary of the standard parameters, never contains fancy names
    pub fn standard_dictionary(&self) -> &ParameterDictionary {
        &self.standard_dictionary
    }

    /// Dictionary of the fit parameters, fancy names replace the standard ones
    pub fn model_dictionary(&self) -> &ParameterDictionary {
        &self.model_dictionary
    }

    pub fn parameters_boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn fancy_parameters(&self) -> &FancyParameters {
        &self.fancy_parameters
    }

    /// Whether physical entries of a standard parameter vector are within the boundaries
    pub fn within_boundaries(&self, standard: &[f64]) -> bool {
        within_bounds(standard, &self.boundaries)
    }

    /// Whether a fit parameter vector, ordered as [Model::model_dictionary], corresponds to
    /// physical parameters within the boundaries
    pub fn within_fit_boundaries(&self, fancy: &[f64]) -> Result<bool, ModelError> {
        let standard = self.fancy_to_standard_parameters(fancy)?;
        Ok(within_bounds(&standard, &self.boundaries))
    }

    /// Boundaries of the physical entries of the fit parameter vector
    ///
    /// A fancy parameter computed from its standard parameter only gets the converted
    /// boundaries, the conversion is assumed monotonic. Fancy parameters reading other
    /// parameters, or mapping a boundary to NaN, are unbounded: use
    /// [Model::within_fit_boundaries] for them.
    pub fn fit_boundaries(&self) -> Result<Vec<Boundary>, ModelError> {
        self.magnification
            .physical_parameters()
            .iter()
            .zip(&self.boundaries)
            .map(|(&name, &boundary)| match self.fancy_parameters.replacing(name) {
                Some(parameter) => fancy_boundary(parameter, boundary),
                None => Ok(boundary),
            })
            .collect()
    }

    /// Magnification and impact parameter at the telescope observation times
    pub fn model_magnification(
        &self,
        telescope: &Telescope,
        parameters: &NamedParameters,
    ) -> Result<MagnificationArrays, ModelError> {
        self.magnification.magnification(telescope, parameters)
    }

    /// Flux model `fs * (A + g)` and impact parameter at the telescope observation times
    pub fn compute_microlensing_model(
        &self,
        telescope: &Telescope,
        parameters: &NamedParameters,
    ) -> Result<(Array1F, Array1F), ModelError> {
        let source_flux = parameters.source_flux(telescope.name())?;
        let blend_ratio = parameters.blend_ratio(telescope.name())?;
        let (magnification, impact_parameter) = self.model_magnification(telescope, parameters)?;
        let flux = magnification.mapv_into(|a| source_flux * (a + blend_ratio));
        Ok((flux, impact_parameter))
    }

    /// Flux models of all event telescopes in the event order
    pub fn compute_event_model(
        &self,
        parameters: &NamedParameters,
    ) -> Result<Vec<Array1F>, ModelError> {
        self.event
            .telescopes()
            .iter()
            .map(|telescope| {
                self.compute_microlensing_model(telescope, parameters)
                    .map(|(flux, _)| flux)
            })
            .collect()
    }

    /// Named parameters from a fit parameter vector
    ///
    /// Values are assigned to the model dictionary names in order, a vector shorter than the
    /// dictionary sets its prefix only. Standard parameters replaced by fancy ones are
    /// computed and attached after the vector values.
    pub fn compute_named_parameters(&self, vector: &[f64]) -> Result<NamedParameters, ModelError> {
        let mut parameters = named_from_vector(&self.model_dictionary, vector)?;
        self.plan
            .resolve_standard(&self.fancy_parameters, &mut parameters)?;
        Ok(parameters)
    }

    /// Convert a fit parameter vector to the standard parameter vector of the same length
    pub fn fancy_to_standard_parameters(&self, fancy: &[f64]) -> Result<Vec<f64>, ModelError> {
        if self.fancy_parameters.is_empty() {
            return Ok(fancy.to_vec());
        }
        let parameters = self.compute_named_parameters(fancy)?;
        vector_from_named(&self.standard_dictionary, &parameters, fancy.len())
    }

    /// Convert a standard parameter vector to the fit parameter vector of the same length
    pub fn standard_to_fancy_parameters(&self, standard: &[f64]) -> Result<Vec<f64>, ModelError> {
        if self.fancy_parameters.is_empty() {
            return Ok(standard.to_vec());
        }
        let mut parameters = named_from_vector(&self.standard_dictionary, standard)?;
        self.plan
            .resolve_fancy(&self.fancy_parameters, &mut parameters)?;
        vector_from_named(&self.model_dictionary, &parameters, standard.len())
    }
}

fn standard_dictionary(magnification: &MagnificationModel, event: &Event) -> ParameterDictionary {
    let physical = magnification
        .physical_parameters()
        .iter()
        .map(|&name| name.to_owned());
    let fluxes = event.telescopes().iter().flat_map(|telescope| {
        [
            source_flux_key(telescope.name()),
            blend_ratio_key(telescope.name()),
        ]
    });
    physical.chain(fluxes).collect()
}

fn fancy_boundary(
    parameter: &FancyParameter,
    (min, max): Boundary,
) -> Result<Boundary, ModelError> {
    const UNBOUNDED: Boundary = (f64::NEG_INFINITY, f64::INFINITY);

    let conversion = parameter.to_fancy();
    if conversion.dependencies() != [parameter.standard()] {
        return Ok(UNBOUNDED);
    }
    let convert = |value: f64| {
        conversion.convert(&NamedParameters::from_pairs([(parameter.standard(), value)]))
    };
    let (a, b) = (convert(min)?, convert(max)?);
    if a.is_nan() || b.is_nan() {
        return Ok(UNBOUNDED);
    }
    Ok((a.min(b), a.max(b)))
}

fn named_from_vector(
    dictionary: &ParameterDictionary,
    vector: &[f64],
) -> Result<NamedParameters, ModelError> {
    if vector.len() > dictionary.len() {
        return Err(ModelError::TooManyParameters {
            expected: dictionary.len(),
            actual: vector.len(),
        });
    }
    Ok(dictionary.keys().zip(vector.iter().copied()).collect())
}

fn vector_from_named(
    dictionary: &ParameterDictionary,
    parameters: &NamedParameters,
    len: usize,
) -> Result<Vec<f64>, ModelError> {
    dictionary
        .keys()
        .take(len)
        .map(|name| parameters.get(name))
        .collect()
}
