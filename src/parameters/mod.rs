pub(crate) mod bounds;
pub use bounds::ModelBoundaries;

mod dictionary;
pub use dictionary::ParameterDictionary;

mod named;
pub use named::NamedParameters;

/// Name of the source flux parameter of a telescope
pub fn source_flux_key(telescope: &str) -> String {
    format!("fs_{telescope}")
}

/// Name of the blend ratio parameter of a telescope
pub fn blend_ratio_key(telescope: &str) -> String {
    format!("g_{telescope}")
}
