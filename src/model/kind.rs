use crate::error::ModelError;
use crate::magnification::{FiniteSourcePointLens, MagnificationModel, PointSourcePointLens};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Microlensing model variant
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[non_exhaustive]
pub enum ModelKind {
    /// Point-source point-lens
    #[default]
    #[serde(rename = "PSPL")]
    Pspl,
    /// Finite-source point-lens
    #[serde(rename = "FSPL")]
    Fspl,
}

impl ModelKind {
    pub const ALL: [Self; 2] = [Self::Pspl, Self::Fspl];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pspl => "PSPL",
            Self::Fspl => "FSPL",
        }
    }

    pub fn magnification_model(self) -> MagnificationModel {
        match self {
            Self::Pspl => PointSourcePointLens::new().into(),
            Self::Fspl => FiniteSourcePointLens::new().into(),
        }
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_owned()))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnification::MagnificationTrait;

    #[test]
    fn parse_and_display() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>(), Ok(kind));
        }
        assert_eq!(
            "pspl".parse::<ModelKind>(),
            Err(ModelError::UnknownModel("pspl".into()))
        );
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&ModelKind::Fspl).unwrap(), "\"FSPL\"");
        let kind: ModelKind = serde_json::from_str("\"PSPL\"").unwrap();
        assert_eq!(kind, ModelKind::Pspl);
    }

    #[test]
    fn magnification_variant() {
        assert_eq!(
            ModelKind::Fspl.magnification_model().physical_parameters(),
            ["to", "uo", "tE", "rho"]
        );
    }
}
