use lazy_static::lazy_static;
use record::FluxLightCurveRecord;
use types::Error;

mod csv_parser;
pub use csv_parser::light_curves_from_csv;

mod record;

pub(crate) mod simulated;

mod types;
pub use types::LightCurves;

/// Standard parameters the PSPL fixture was simulated with: `to`, `uo`, `tE`, then
/// `fs_OGLE`, `g_OGLE`, `fs_LCO`, `g_LCO`
pub const PSPL_TWO_TELESCOPES_PARAMETERS: [f64; 7] = [20.0, 0.3, 15.0, 1200.0, 0.2, 800.0, 0.5];

lazy_static! {
    /// PSPL event observed by "OGLE" and "LCO" with 1% Gaussian flux errors
    pub static ref PSPL_TWO_TELESCOPES: LightCurves = {
        // Relative to the current file
        const DATA: &str = include_str!("../../../test-data/pspl_two_telescopes.csv");
        light_curves_from_csv(DATA.as_bytes()).unwrap()
    };
}
