use criterion::Criterion;
use light_curve_microlensing::{
    Conversion, Event, FancyParameter, FancyParameters, Telescope, create_model,
};
use light_curve_microlensing_test_util::PSPL_TWO_TELESCOPES;
use std::hint::black_box;

pub fn bench_fancy_parameters(c: &mut Criterion) {
    let telescopes: Vec<_> = PSPL_TWO_TELESCOPES
        .iter()
        .map(|(name, lc)| Telescope::new(name.clone(), lc.clone(), 0.5).unwrap())
        .collect();
    let event = Event::new(telescopes).unwrap();

    let registries = [
        ("no fancy parameters", FancyParameters::new()),
        (
            "logrho",
            FancyParameters::new().with(FancyParameter::log10("logrho", "rho")),
        ),
        (
            "tstar = logrho * tE, logrho",
            FancyParameters::new()
                .with(FancyParameter::new(
                    "tstar",
                    "tE",
                    Conversion::product("logrho", "tE"),
                    Conversion::ratio("tstar", "logrho"),
                ))
                .with(FancyParameter::log10("logrho", "rho")),
        ),
    ];
    let standard = [20.0, 0.3, 15.0, 0.01, 1200.0, 0.2, 800.0, 0.5];

    for (name, registry) in registries {
        let model = create_model("FSPL", &event)
            .unwrap()
            .with_fancy_parameters(registry)
            .unwrap();
        let fancy = model.standard_to_fancy_parameters(&standard).unwrap();
        c.bench_function(&format!("Fancy to standard: {name}"), |b| {
            b.iter(|| model.fancy_to_standard_parameters(black_box(&fancy)));
        });
        c.bench_function(&format!("Standard to fancy: {name}"), |b| {
            b.iter(|| model.standard_to_fancy_parameters(black_box(&standard)));
        });
    }
}
