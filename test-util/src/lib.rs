pub use lc_data::simulated::simulated_light_curves;
pub use lc_data::{
    LightCurves, PSPL_TWO_TELESCOPES, PSPL_TWO_TELESCOPES_PARAMETERS, light_curves_from_csv,
};

mod lc_data;
