use crate::error::ModelError;
use crate::fancy::conversion::{Conversion, ConversionTrait};
use crate::parameters::ParameterDictionary;

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Fit parameter replacing a standard model parameter
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct FancyParameter {
    name: String,
    standard: String,
    to_fancy: Conversion,
    to_standard: Conversion,
}

impl FancyParameter {
    /// `name` replaces `standard` in the fit parameter vector
    ///
    /// `to_fancy` computes the fancy value from standard parameters (and, possibly, other fancy
    /// ones), `to_standard` is its inverse computing the standard value from fancy parameters.
    pub fn new(
        name: impl Into<String>,
        standard: impl Into<String>,
        to_fancy: impl Into<Conversion>,
        to_standard: impl Into<Conversion>,
    ) -> Self {
        Self {
            name: name.into(),
            standard: standard.into(),
            to_fancy: to_fancy.into(),
            to_standard: to_standard.into(),
        }
    }

    /// Decimal logarithm of a standard parameter, e.g. `logrho` for `rho`
    pub fn log10(name: impl Into<String>, standard: impl Into<String>) -> Self {
        let name = name.into();
        let standard = standard.into();
        Self::new(
            name.clone(),
            standard.clone(),
            Conversion::log10(standard),
            Conversion::pow10(name),
        )
    }

    /// Natural logarithm of a standard parameter
    pub fn ln(name: impl Into<String>, standard: impl Into<String>) -> Self {
        let name = name.into();
        let standard = standard.into();
        Self::new(
            name.clone(),
            standard.clone(),
            Conversion::ln(standard),
            Conversion::exp(name),
        )
    }

    /// Product of a standard parameter and another parameter, e.g. `tstar = uo * tE`
    pub fn product(
        name: impl Into<String>,
        standard: impl Into<String>,
        factor: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let standard = standard.into();
        let factor = factor.into();
        Self::new(
            name.clone(),
            standard.clone(),
            Conversion::product(factor.clone(), standard),
            Conversion::ratio(name, factor),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn standard(&self) -> &str {
        &self.standard
    }

    pub fn to_fancy(&self) -> &Conversion {
        &self.to_fancy
    }

    pub fn to_standard(&self) -> &Conversion {
        &self.to_standard
    }
}

/// Registry of fancy parameters of a model
///
/// Declaration order matters: conversions without mutual dependencies are applied in this
/// order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FancyParameters {
    parameters: Vec<FancyParameter>,
}

impl FancyParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, parameter: FancyParameter) -> Self {
        self.push(parameter);
        self
    }

    pub fn push(&mut self, parameter: FancyParameter) {
        self.parameters.push(parameter);
    }

    /// Build the registry from three mappings
    ///
    /// - `fancy_to_standard`: fancy name to the standard name it replaces, its order is the
    ///   declaration order
    /// - `to_fancy`: fancy name to the conversion computing the fancy value
    /// - `to_standard`: standard name to the conversion computing the standard value
    ///
    /// Key sets must match the names of `fancy_to_standard`.
    pub fn from_mappings<S1, S2>(
        fancy_to_standard: impl IntoIterator<Item = (S1, S2)>,
        mut to_fancy: HashMap<String, Conversion>,
        mut to_standard: HashMap<String, Conversion>,
    ) -> Result<Self, ModelError>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let mut registry = Self::new();
        for (name, standard) in fancy_to_standard {
            let name = name.into();
            let standard = standard.into();
            let forward = to_fancy.remove(&name).ok_or_else(|| {
                ModelError::invalid_registry(format!(
                    "no conversion to fancy parameter \"{name}\""
                ))
            })?;
            let inverse = to_standard.remove(&standard).ok_or_else(|| {
                ModelError::invalid_registry(format!(
                    "no conversion from fancy parameter \"{name}\" to \"{standard}\""
                ))
            })?;
            registry.push(FancyParameter::new(name, standard, forward, inverse));
        }
        if !to_fancy.is_empty() || !to_standard.is_empty() {
            let extra = to_fancy.keys().chain(to_standard.keys()).sorted().join(", ");
            return Err(ModelError::invalid_registry(format!(
                "conversions for undeclared parameters: {extra}"
            )));
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FancyParameter> {
        self.parameters.iter()
    }

    pub(crate) fn at(&self, index: usize) -> &FancyParameter {
        &self.parameters[index]
    }

    pub fn get(&self, name: &str) -> Option<&FancyParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Fancy parameter replacing the given standard parameter
    pub fn replacing(&self, standard: &str) -> Option<&FancyParameter> {
        self.parameters.iter().find(|p| p.standard == standard)
    }

    /// Check the registry against the standard parameters of a model
    pub(crate) fn validate(&self, standard: &ParameterDictionary) -> Result<(), ModelError> {
        let mut names = BTreeSet::new();
        let mut replaced = BTreeSet::new();
        for parameter in &self.parameters {
            if !standard.contains(&parameter.standard) {
                return Err(ModelError::invalid_registry(format!(
                    "fancy parameter \"{}\" replaces unknown parameter \"{}\"",
                    parameter.name, parameter.standard
                )));
            }
            if standard.contains(&parameter.name) {
                return Err(ModelError::invalid_registry(format!(
                    "fancy parameter name \"{}\" is a standard parameter name",
                    parameter.name
                )));
            }
            if !names.insert(parameter.name.as_str()) {
                return Err(ModelError::invalid_registry(format!(
                    "fancy parameter \"{}\" is declared more than once",
                    parameter.name
                )));
            }
            if !replaced.insert(parameter.standard.as_str()) {
                return Err(ModelError::invalid_registry(format!(
                    "parameter \"{}\" is replaced by more than one fancy parameter",
                    parameter.standard
                )));
            }
        }
        Ok(())
    }

    /// Model dictionary: the standard one with replaced names substituted by fancy names
    pub(crate) fn substitute(&self, standard: &ParameterDictionary) -> ParameterDictionary {
        let mut dictionary = standard.clone();
        for parameter in &self.parameters {
            dictionary.rename(&parameter.standard, parameter.name.clone());
        }
        dictionary
    }

    /// Names read by the conversions of every parameter, in declaration order
    pub(crate) fn to_standard_dependencies(&self) -> Vec<Vec<&str>> {
        self.parameters
            .iter()
            .map(|p| p.to_standard.dependencies())
            .collect()
    }

    pub(crate) fn to_fancy_dependencies(&self) -> Vec<Vec<&str>> {
        self.parameters
            .iter()
            .map(|p| p.to_fancy.dependencies())
            .collect()
    }
}

impl FromIterator<FancyParameter> for FancyParameters {
    fn from_iter<I: IntoIterator<Item = FancyParameter>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
