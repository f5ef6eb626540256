#![doc = include_str!("../README.md")]


mod data;
pub use data::{Event, Telescope};

mod error;
pub use error::{EventError, ModelError};

pub mod fancy;
pub use fancy::{Conversion, ConversionTrait, FancyParameter, FancyParameters};

pub mod magnification;
pub use magnification::{
    FiniteSourcePointLens, MagnificationModel, MagnificationTrait, PointSourcePointLens,
};

mod model;
pub use model::{Model, ModelConfig, ModelKind, create_model};

pub mod parameters;
pub use parameters::{ModelBoundaries, NamedParameters, ParameterDictionary};

pub mod prelude;

mod types;
pub use types::Boundary;

pub use ndarray;
