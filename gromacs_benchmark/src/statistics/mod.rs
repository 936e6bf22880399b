//!
//! Scaling statistics.
//!

/// The deviation reported when it cannot be computed.
pub const DEVIATION_UNAVAILABLE: f64 = -1.0;

///
/// Fits `y = slope * x + intercept` by ordinary least squares.
///
/// Returns `None` for fewer than two points or when every `x` is equal.
///
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let count = xs.len().min(ys.len());
    if count < 2 {
        return None;
    }
    let (xs, ys) = (&xs[..count], &ys[..count]);

    let n = count as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (covariance, variance) = xs.iter().zip(ys.iter()).fold(
        (0.0, 0.0),
        |(covariance, variance), (x, y)| {
            (
                covariance + (x - mean_x) * (y - mean_y),
                variance + (x - mean_x).powi(2),
            )
        },
    );
    if variance == 0.0 {
        return None;
    }

    let slope = covariance / variance;
    Some((slope, mean_y - slope * mean_x))
}

///
/// The root mean square deviation of the points from their least-squares line.
///
/// Returns [`DEVIATION_UNAVAILABLE`] if a value is missing or no line can be fitted.
///
pub fn deviation_from_linear(xs: &[f64], ys: &[Option<f64>]) -> f64 {
    let Some(ys) = ys.iter().copied().collect::<Option<Vec<f64>>>() else {
        return DEVIATION_UNAVAILABLE;
    };
    let Some((slope, intercept)) = linear_regression(xs, ys.as_slice()) else {
        return DEVIATION_UNAVAILABLE;
    };

    let squares = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .collect::<Vec<f64>>();
    (squares.iter().sum::<f64>() / squares.len() as f64).sqrt()
}
