//! Input construction for the benchmarks.
//!
//! Random inputs take the generator explicitly so a run is reproducible from
//! its seed. The phantom image is fully deterministic.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;

/// `n` samples from U[0, 1).
pub fn uniform_array<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|_| rng.gen::<f64>()))
}

/// `n` samples from N(0, 1).
pub fn normal_array<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|_| rng.sample::<f64, _>(StandardNormal)))
}

pub fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

struct Ellipse {
    intensity: f64,
    a: f64,
    b: f64,
    x0: f64,
    y0: f64,
    phi_deg: f64,
}

impl Ellipse {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (sin, cos) = self.phi_deg.to_radians().sin_cos();
        let dx = x - self.x0;
        let dy = y - self.y0;
        let u = (dx * cos + dy * sin) / self.a;
        let v = (dy * cos - dx * sin) / self.b;
        u * u + v * v <= 1.0
    }
}

const fn ellipse(intensity: f64, a: f64, b: f64, x0: f64, y0: f64, phi_deg: f64) -> Ellipse {
    Ellipse {
        intensity,
        a,
        b,
        x0,
        y0,
        phi_deg,
    }
}

// Modified Shepp-Logan (Toft) with non-negative, higher-contrast intensities.
const SHEPP_LOGAN: [Ellipse; 10] = [
    ellipse(1.0, 0.69, 0.92, 0.0, 0.0, 0.0),
    ellipse(-0.8, 0.6624, 0.874, 0.0, -0.0184, 0.0),
    ellipse(-0.2, 0.11, 0.31, 0.22, 0.0, -18.0),
    ellipse(-0.2, 0.16, 0.41, -0.22, 0.0, 18.0),
    ellipse(0.1, 0.21, 0.25, 0.0, 0.35, 0.0),
    ellipse(0.1, 0.046, 0.046, 0.0, 0.1, 0.0),
    ellipse(0.1, 0.046, 0.046, 0.0, -0.1, 0.0),
    ellipse(0.1, 0.046, 0.023, -0.08, -0.605, 0.0),
    ellipse(0.1, 0.023, 0.023, 0.0, -0.606, 0.0),
    ellipse(0.1, 0.023, 0.046, 0.06, -0.605, 0.0),
];

/// Render the Shepp-Logan head phantom on an `n x n` grid.
///
/// Pixel centres span [-1, 1] on both axes; row 0 is the top of the image.
pub fn shepp_logan_phantom(n: usize) -> Array2<f64> {
    let step = if n > 1 { 2.0 / (n - 1) as f64 } else { 0.0 };
    Array2::from_shape_fn((n, n), |(row, col)| {
        let x = -1.0 + col as f64 * step;
        let y = 1.0 - row as f64 * step;
        SHEPP_LOGAN
            .iter()
            .filter(|e| e.contains(x, y))
            .map(|e| e.intensity)
            .sum::<f64>()
            .max(0.0)
    })
}
