//! Finite-source factors of Yoo et al. (2004), ApJ 603, 139
//!
//! For a source of unit radius at distance `z` from the lens (both in source radii) the
//! finite-source magnification is approximated as
//! $A(u) = A_\mathrm{PSPL}(u) \left[B_0(z) - \Gamma B_1(z)\right]$ where
//!
//! $$
//! B_0(z) = \frac1\pi \int_\mathrm{disk} \frac{z}{|\vec z + \vec r|}\,d^2r, \qquad
//! B_1(z) = \frac1\pi \int_\mathrm{disk} \left(1 - \frac32\sqrt{1 - r^2}\right)
//!     \frac{z}{|\vec z + \vec r|}\,d^2r.
//! $$
//!
//! Both integrals are taken in polar coordinates centred on the lens, $(s, \psi)$, where
//! the $1/s$ factor cancels the area element. The integral over $s$ is analytic and the
//! remaining integral over $\psi$ is smooth, it is evaluated with the composite Simpson
//! rule.

use std::f64::consts::{FRAC_PI_2, PI};

/// Number of Simpson intervals, must be even
const N_INTERVALS: usize = 512;

/// Simpson integration of a function returning two values at once
fn simpson2<F>(f: F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> (f64, f64),
{
    let h = (b - a) / N_INTERVALS as f64;
    let (fa0, fa1) = f(a);
    let (fb0, fb1) = f(b);
    let (mut s0, mut s1) = (fa0 + fb0, fa1 + fb1);
    for i in 1..N_INTERVALS {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        let (f0, f1) = f(a + i as f64 * h);
        s0 += weight * f0;
        s1 += weight * f1;
    }
    (s0 * h / 3.0, s1 * h / 3.0)
}

/// $B_0(z)$ and the limb-darkening integral
/// $\frac1\pi\int_\mathrm{disk}\sqrt{1 - r^2}\,\frac{z}{|\vec z + \vec r|}\,d^2r$
fn uniform_and_limb_integrals(z: f64) -> (f64, f64) {
    if z > 1.0 {
        // Lens is outside of the source, the chord at angle psi is parametrized by
        // sin(psi) = sin(beta) / z, beta in [0, pi/2]
        let (b0, limb) = simpson2(
            |beta| {
                let (sin, cos) = beta.sin_cos();
                let jacobian = cos / f64::sqrt(z * z - sin * sin);
                (cos * jacobian, cos * cos * jacobian)
            },
            0.0,
            FRAC_PI_2,
        );
        (4.0 * z / PI * b0, z * limb)
    } else {
        let one_minus_z2 = f64::max(1.0 - z * z, 0.0);
        let (b0, limb) = simpson2(
            |psi| {
                let (sin, cos) = psi.sin_cos();
                let d = f64::max(1.0 - z * z * sin * sin, 0.0);
                let z_cos = z * cos;
                let uniform = z_cos + d.sqrt();
                let limb = 0.25 * PI * d
                    + 0.5
                        * (z_cos * one_minus_z2.sqrt()
                            + d * f64::atan2(z_cos, one_minus_z2.sqrt()));
                (uniform, limb)
            },
            0.0,
            PI,
        );
        (2.0 * z / PI * b0, 2.0 * z / PI * limb)
    }
}

/// Pair of $B_0(z)$ and $B_1(z)$
pub fn b0_b1(z: f64) -> (f64, f64) {
    let (b0, limb) = uniform_and_limb_integrals(z);
    (b0, b0 - 1.5 * limb)
}
