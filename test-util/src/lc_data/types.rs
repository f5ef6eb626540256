use light_curve_microlensing::ndarray::Array2;

// We cannot return `Event`, because it would cause cyclic crate dependencies
/// Telescope name and its `[time, flux, flux_error]` rows, in the order of appearance
pub type LightCurves = Vec<(String, Array2<f64>)>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    CsvError(#[from] csv::Error),
}
