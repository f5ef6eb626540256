use crate::error::ModelError;
use crate::parameters::NamedParameters;

use enum_dispatch::enum_dispatch;
use paste::paste;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[enum_dispatch]
pub trait ConversionTrait {
    /// Names of the parameters the conversion reads
    fn dependencies(&self) -> Vec<&str>;

    /// Compute the converted value from already known parameters
    fn convert(&self, parameters: &NamedParameters) -> Result<f64, ModelError>;
}

/// Function of named parameters used to convert between fancy and standard parameters
#[enum_dispatch(ConversionTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum Conversion {
    Log10(Log10Conversion),
    Pow10(Pow10Conversion),
    Ln(LnConversion),
    Exp(ExpConversion),
    Product(ProductConversion),
    Ratio(RatioConversion),
    /// User-defined function, cannot be serialized
    #[serde(skip)]
    Custom(CustomConversion),
}

impl Conversion {
    pub fn log10(parameter: impl Into<String>) -> Self {
        Log10Conversion::new(parameter).into()
    }

    pub fn pow10(parameter: impl Into<String>) -> Self {
        Pow10Conversion::new(parameter).into()
    }

    pub fn ln(parameter: impl Into<String>) -> Self {
        LnConversion::new(parameter).into()
    }

    pub fn exp(parameter: impl Into<String>) -> Self {
        ExpConversion::new(parameter).into()
    }

    pub fn product(left: impl Into<String>, right: impl Into<String>) -> Self {
        ProductConversion::new(left, right).into()
    }

    pub fn ratio(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        RatioConversion::new(numerator, denominator).into()
    }

    pub fn custom<F>(dependencies: impl IntoIterator<Item = impl Into<String>>, func: F) -> Self
    where
        F: Fn(&NamedParameters) -> Result<f64, ModelError> + Send + Sync + 'static,
    {
        CustomConversion::new(dependencies, func).into()
    }
}

macro_rules! unary_conversion {
    ($name: ident, $func: expr, $doc: literal $(,)?) => {
        paste! {
            #[doc = $doc]
            #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
            pub struct [<$name Conversion>] {
                pub parameter: String,
            }

            impl [<$name Conversion>] {
                pub fn new(parameter: impl Into<String>) -> Self {
                    Self {
                        parameter: parameter.into(),
                    }
                }
            }

            impl ConversionTrait for [<$name Conversion>] {
                fn dependencies(&self) -> Vec<&str> {
                    vec![self.parameter.as_str()]
                }

                fn convert(&self, parameters: &NamedParameters) -> Result<f64, ModelError> {
                    let func: fn(f64) -> f64 = $func;
                    parameters.get(&self.parameter).map(func)
                }
            }
        }
    };
}

unary_conversion!(Log10, f64::log10, "Decimal logarithm of a parameter");
unary_conversion!(Pow10, |x| 10.0_f64.powf(x), "Ten to the power of a parameter");
unary_conversion!(Ln, f64::ln, "Natural logarithm of a parameter");
unary_conversion!(Exp, f64::exp, "Exponent of a parameter");

/// Product of two parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductConversion {
    pub left: String,
    pub right: String,
}

impl ProductConversion {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl ConversionTrait for ProductConversion {
    fn dependencies(&self) -> Vec<&str> {
        vec![self.left.as_str(), self.right.as_str()]
    }

    fn convert(&self, parameters: &NamedParameters) -> Result<f64, ModelError> {
        Ok(parameters.get(&self.left)? * parameters.get(&self.right)?)
    }
}

/// Ratio of two parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RatioConversion {
    pub numerator: String,
    pub denominator: String,
}

impl RatioConversion {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }
}

impl ConversionTrait for RatioConversion {
    fn dependencies(&self) -> Vec<&str> {
        vec![self.numerator.as_str(), self.denominator.as_str()]
    }

    fn convert(&self, parameters: &NamedParameters) -> Result<f64, ModelError> {
        Ok(parameters.get(&self.numerator)? / parameters.get(&self.denominator)?)
    }
}

type ConversionFn = dyn Fn(&NamedParameters) -> Result<f64, ModelError> + Send + Sync;

/// Arbitrary conversion function with explicitly declared dependencies
///
/// The function must read only the declared parameters: they are the ones guaranteed to be
/// resolved before the function is called. Reading anything else gives
/// [ModelError::MissingField] unless the field happens to be set already.
#[derive(Clone)]
pub struct CustomConversion {
    dependencies: Vec<String>,
    func: Arc<ConversionFn>,
}

impl CustomConversion {
    pub fn new<F>(dependencies: impl IntoIterator<Item = impl Into<String>>, func: F) -> Self
    where
        F: Fn(&NamedParameters) -> Result<f64, ModelError> + Send + Sync + 'static,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for CustomConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomConversion")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

impl ConversionTrait for CustomConversion {
    fn dependencies(&self) -> Vec<&str> {
        self.dependencies.iter().map(String::as_str).collect()
    }

    fn convert(&self, parameters: &NamedParameters) -> Result<f64, ModelError> {
        (self.func)(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn parameters() -> NamedParameters {
        NamedParameters::from_pairs([
            ("rho", 0.05),
            ("logrho", -1.30103),
            ("uo", 0.1),
            ("tE", 35.6),
        ])
    }

    #[test]
    fn unary() {
        let p = parameters();
        assert_relative_eq!(
            Conversion::log10("rho").convert(&p).unwrap(),
            -1.30103,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            Conversion::pow10("logrho").convert(&p).unwrap(),
            0.05,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            Conversion::exp("uo").convert(&p).unwrap(),
            0.1_f64.exp()
        );
        assert_relative_eq!(
            Conversion::ln("tE").convert(&p).unwrap(),
            35.6_f64.ln()
        );
    }

    #[test]
    fn binary() {
        let p = parameters();
        assert_relative_eq!(Conversion::product("uo", "tE").convert(&p).unwrap(), 3.56);
        assert_relative_eq!(Conversion::ratio("tE", "uo").convert(&p).unwrap(), 356.0);
        assert_eq!(
            Conversion::ratio("tstar", "uo").dependencies(),
            ["tstar", "uo"]
        );
    }

    #[test]
    fn custom() {
        let conversion = Conversion::custom(["uo", "tE"], |p| Ok(p.uo()? * p.t_e()?.sqrt()));
        assert_eq!(conversion.dependencies(), ["uo", "tE"]);
        assert_relative_eq!(
            conversion.convert(&parameters()).unwrap(),
            0.1 * 35.6_f64.sqrt()
        );
        assert!(format!("{conversion:?}").contains("dependencies"));
    }

    #[test]
    fn missing_field() {
        let result = Conversion::log10("rho").convert(&NamedParameters::new());
        assert_eq!(result, Err(ModelError::MissingField("rho".into())));
    }

    #[test]
    fn serde_json() {
        let conversion = Conversion::ratio("tstar", "uo");
        let json = serde_json::to_string(&conversion).unwrap();
        let restored: Conversion = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.dependencies(), ["tstar", "uo"]);
    }

    #[test]
    fn custom_is_not_serializable() {
        let conversion = Conversion::custom(["uo"], |p| p.uo());
        assert!(serde_json::to_string(&conversion).is_err());
    }
}
