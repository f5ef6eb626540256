use crate::fancy::{FancyParameter, FancyParameters};
use crate::model::ModelKind;
use crate::parameters::ModelBoundaries;
use crate::types::Boundary;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serializable description of a [crate::Model]
///
/// The event is not a part of the configuration, see [crate::Model::from_config].
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ModelConfig {
    pub model: ModelKind,
    #[serde(default)]
    pub fancy_parameters: FancyParameters,
    #[serde(default)]
    pub boundaries: ModelBoundaries,
}

impl ModelConfig {
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            fancy_parameters: FancyParameters::new(),
            boundaries: ModelBoundaries::Default,
        }
    }

    pub fn default_pspl() -> Self {
        Self::new(ModelKind::Pspl)
    }

    /// FSPL model fitting `logrho` instead of `rho`
    pub fn default_fspl() -> Self {
        Self::new(ModelKind::Fspl)
            .with_fancy_parameter(FancyParameter::log10("logrho", "rho"))
    }

    pub fn with_fancy_parameter(mut self, parameter: FancyParameter) -> Self {
        self.fancy_parameters.push(parameter);
        self
    }

    pub fn with_fancy_parameters(mut self, fancy_parameters: FancyParameters) -> Self {
        self.fancy_parameters = fancy_parameters;
        self
    }

    pub fn with_boundaries(mut self, boundaries: impl Into<Vec<Boundary>>) -> Self {
        self.boundaries = ModelBoundaries::custom(boundaries);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json() {
        let config: ModelConfig = serde_json::from_str(r#"{"model": "FSPL"}"#).unwrap();
        assert_eq!(config.model, ModelKind::Fspl);
        assert!(config.fancy_parameters.is_empty());
        assert_eq!(config.boundaries, ModelBoundaries::Default);
    }

    #[test]
    fn default_fspl() {
        let config = ModelConfig::default_fspl();
        assert_eq!(config.fancy_parameters.len(), 1);
        assert_eq!(
            config.fancy_parameters.replacing("rho").map(FancyParameter::name),
            Some("logrho")
        );
    }

    #[test]
    fn json_schema() {
        let schema = schemars::schema_for!(ModelConfig);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("fancy_parameters"));
    }
}
