use crate::error::ModelError;
use crate::parameters::{blend_ratio_key, source_flux_key};

use serde::{Deserialize, Serialize};

/// Parameter record with named fields
///
/// Fields keep the order they were set in. Models build it from a flat vector and attach
/// converted fields one by one, so a conversion sees every field resolved before it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedParameters {
    fields: Vec<(String, f64)>,
}

macro_rules! named_getter {
    ($getter: ident, $name: literal) => {
        #[doc = concat!("Value of `", $name, "`")]
        #[inline]
        pub fn $getter(&self) -> Result<f64, ModelError> {
            self.get($name)
        }
    };
}

impl NamedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        let mut parameters = Self::new();
        for (name, value) in pairs {
            parameters.set(name, value);
        }
        parameters
    }

    pub fn get(&self, name: &str) -> Result<f64, ModelError> {
        self.value(name)
            .ok_or_else(|| ModelError::MissingField(name.to_owned()))
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find_map(|(key, value)| (key == name).then_some(*value))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Set a field, overwriting the previous value if the field exists
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => *old = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), *value))
    }

    named_getter!(to, "to");
    named_getter!(uo, "uo");
    named_getter!(t_e, "tE");
    named_getter!(rho, "rho");

    /// Source flux of the given telescope, `fs_<telescope>`
    pub fn source_flux(&self, telescope: &str) -> Result<f64, ModelError> {
        self.get(&source_flux_key(telescope))
    }

    /// Blend ratio of the given telescope, `g_<telescope>`
    pub fn blend_ratio(&self, telescope: &str) -> Result<f64, ModelError> {
        self.get(&blend_ratio_key(telescope))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for NamedParameters {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
