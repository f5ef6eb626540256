use crate::error::EventError;
use crate::types::{ArrayView1F, LightCurveArray};

use ndarray::Axis;

const TIME_COLUMN: usize = 0;
const FLUX_COLUMN: usize = 1;
const FLUX_ERROR_COLUMN: usize = 2;

/// Light curve of a single telescope
///
/// `lightcurve_flux` rows are `[time, flux, flux_error]` triples. `gamma` is the linear
/// limb-darkening coefficient of the telescope passband, it is used by finite-source models
/// only.
#[derive(Clone, Debug, PartialEq)]
pub struct Telescope {
    name: String,
    lightcurve_flux: LightCurveArray,
    gamma: f64,
}

impl Telescope {
    pub fn new(
        name: impl Into<String>,
        lightcurve_flux: impl Into<LightCurveArray>,
        gamma: f64,
    ) -> Result<Self, EventError> {
        let name = name.into();
        let lightcurve_flux = lightcurve_flux.into();
        if lightcurve_flux.ncols() != 3 {
            return Err(EventError::WrongColumnNumber {
                telescope: name,
                actual: lightcurve_flux.ncols(),
            });
        }
        if lightcurve_flux.nrows() == 0 {
            return Err(EventError::EmptyLightCurve(name));
        }
        Ok(Self {
            name,
            lightcurve_flux,
            gamma,
        })
    }

    /// Construct from separate columns, panics if their lengths differ
    pub fn from_columns(
        name: impl Into<String>,
        time: &[f64],
        flux: &[f64],
        flux_error: &[f64],
        gamma: f64,
    ) -> Result<Self, EventError> {
        assert_eq!(time.len(), flux.len(), "time and flux should have the same size");
        assert_eq!(
            flux.len(),
            flux_error.len(),
            "flux and flux error should have the same size"
        );
        let mut lightcurve_flux = LightCurveArray::zeros((time.len(), 3));
        for (mut row, ((&t, &f), &e)) in lightcurve_flux
            .axis_iter_mut(Axis(0))
            .zip(time.iter().zip(flux).zip(flux_error))
        {
            row[TIME_COLUMN] = t;
            row[FLUX_COLUMN] = f;
            row[FLUX_ERROR_COLUMN] = e;
        }
        Self::new(name, lightcurve_flux, gamma)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lightcurve_flux(&self) -> &LightCurveArray {
        &self.lightcurve_flux
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn time(&self) -> ArrayView1F<'_> {
        self.lightcurve_flux.column(TIME_COLUMN)
    }

    pub fn flux(&self) -> ArrayView1F<'_> {
        self.lightcurve_flux.column(FLUX_COLUMN)
    }

    pub fn flux_error(&self) -> ArrayView1F<'_> {
        self.lightcurve_flux.column(FLUX_ERROR_COLUMN)
    }

    pub fn len(&self) -> usize {
        self.lightcurve_flux.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Minimum and maximum observation time
    pub fn time_range(&self) -> (f64, f64) {
        self.time()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &t| {
                (min.min(t), max.max(t))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn columns() {
        let telescope =
            Telescope::new("Test", array![[0.0, 1.0, 1.0], [42.0, 6.0, 6.0]], 0.5).unwrap();
        assert_eq!(telescope.name(), "Test");
        assert_eq!(telescope.time(), array![0.0, 42.0]);
        assert_eq!(telescope.flux(), array![1.0, 6.0]);
        assert_eq!(telescope.flux_error(), array![1.0, 6.0]);
        assert_eq!(telescope.gamma(), 0.5);
        assert_eq!(telescope.len(), 2);
    }

    #[test]
    fn from_columns() {
        let telescope =
            Telescope::from_columns("A", &[1.0, 2.0], &[10.0, 20.0], &[0.1, 0.2], 0.0).unwrap();
        assert_eq!(
            telescope.lightcurve_flux(),
            &array![[1.0, 10.0, 0.1], [2.0, 20.0, 0.2]]
        );
    }

    #[test]
    fn time_range() {
        let telescope =
            Telescope::from_columns("A", &[5.0, -3.0, 7.0], &[1.0; 3], &[1.0; 3], 0.0).unwrap();
        assert_eq!(telescope.time_range(), (-3.0, 7.0));
    }

    #[test]
    fn wrong_column_number() {
        let result = Telescope::new("Test", array![[0.0, 1.0], [42.0, 6.0]], 0.5);
        assert_eq!(
            result,
            Err(EventError::WrongColumnNumber {
                telescope: "Test".into(),
                actual: 2
            })
        );
    }

    #[test]
    fn empty_light_curve() {
        let result = Telescope::new("Test", LightCurveArray::zeros((0, 3)), 0.5);
        assert_eq!(result, Err(EventError::EmptyLightCurve("Test".into())));
    }
}
