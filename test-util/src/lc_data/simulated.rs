use crate::lc_data::LightCurves;

use light_curve_microlensing::ndarray::{Array1, Array2, Axis, stack};
use light_curve_microlensing::{Event, Telescope, create_model};
use rand::prelude::*;
use rand_distr::StandardNormal;

/// Light curves of telescopes "T0", "T1", ... generated by a model with Gaussian noise
///
/// `standard` is the full standard parameter vector of the model, including source fluxes and
/// blend ratios of every telescope, `times` are observation times per telescope.
pub fn simulated_light_curves(
    model_name: &str,
    standard: &[f64],
    times: &[Array1<f64>],
    gamma: f64,
    relative_error: f64,
    seed: u64,
) -> LightCurves {
    let telescopes: Vec<_> = times
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let ones = Array1::<f64>::ones(t.len());
            let lc = stack![Axis(1), t.view(), ones.view(), ones.view()];
            Telescope::new(format!("T{i}"), lc, gamma).unwrap()
        })
        .collect();
    let event = Event::new(telescopes).unwrap();
    let model = create_model(model_name, &event).unwrap();
    let parameters = model.compute_named_parameters(standard).unwrap();
    let fluxes = model.compute_event_model(&parameters).unwrap();

    let mut rng = StdRng::seed_from_u64(seed);
    event
        .telescopes()
        .iter()
        .zip(fluxes)
        .map(|(telescope, flux)| {
            let flux_error = flux.mapv(|f| relative_error * f.abs());
            let noisy = Array1::from_iter(flux.iter().zip(&flux_error).map(|(&f, &e)| {
                let noise: f64 = rng.sample(StandardNormal);
                f + e * noise
            }));
            let lc: Array2<f64> = stack![
                Axis(1),
                telescope.time(),
                noisy.view(),
                flux_error.view()
            ];
            (telescope.name().to_owned(), lc)
        })
        .collect()
}
