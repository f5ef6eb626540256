use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct FluxLightCurveRecord {
    time: f64,
    flux: f64,
    fluxerr: f64,
    telescope: String,
}

impl FluxLightCurveRecord {
    pub(super) fn into_row(self) -> (String, [f64; 3]) {
        (self.telescope, [self.time, self.flux, self.fluxerr])
    }
}
