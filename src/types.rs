use ndarray::{Array1, Array2, ArrayView1};

pub type Array1F = Array1<f64>;
pub type ArrayView1F<'a> = ArrayView1<'a, f64>;
pub type LightCurveArray = Array2<f64>;

/// Closed interval of allowed parameter values, `(min, max)`
pub type Boundary = (f64, f64);

/// Magnification and impact parameter arrays, in this order
pub type MagnificationArrays = (Array1F, Array1F);
