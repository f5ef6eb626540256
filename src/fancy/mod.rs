//! Fancy parameters: fit parameters replacing standard model parameters
//!
//! A fancy parameter, e.g. `logrho`, takes the place of a standard parameter, e.g. `rho`, in
//! the flat fit vector. Each fancy parameter holds two [Conversion]s: standard → fancy and
//! fancy → standard. Conversions declare which parameters they read, this is used to find an
//! order in which every conversion sees its inputs already set.

pub mod conversion;
pub use conversion::{
    Conversion, ConversionTrait, CustomConversion, ExpConversion, LnConversion,
    Log10Conversion, Pow10Conversion, ProductConversion, RatioConversion,
};

mod registry;
pub use registry::{FancyParameter, FancyParameters};

pub(crate) mod resolution;
