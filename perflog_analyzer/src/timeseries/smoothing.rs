//!
//! Binned nearest-neighbour smoothing.
//!

use super::error::Error;
use super::Point;

///
/// Smooths a series by averaging it over `bins` equal-width time bins and resampling
/// a nearest-neighbour interpolant through the bin midpoints at `resolution` uniformly
/// spaced timestamps.
///
/// A series whose timestamps are all equal collapses into a single point holding the mean.
///
pub fn smooth(points: &[Point], bins: usize, resolution: usize) -> Result<Vec<Point>, Error> {
    if bins == 0 {
        return Err(Error::ZeroBins);
    }
    if points.is_empty() || resolution == 0 {
        return Ok(vec![]);
    }

    let mut points = points.to_vec();
    Point::sort(points.as_mut_slice());
    let t_min = points[0].x;
    let t_max = points[points.len() - 1].x;

    if t_max <= t_min {
        let mean = points.iter().map(|point| point.y).sum::<f64>() / points.len() as f64;
        return Ok(vec![Point::new(t_min, mean)]);
    }

    let midpoints = bin_means(points.as_slice(), bins, t_min, t_max);
    Ok(linspace(t_min, t_max, resolution)
        .map(|t| Point::new(t, nearest(midpoints.as_slice(), t)))
        .collect())
}

///
/// Averages sorted points over equal-width bins. The last bin is closed on the right.
/// Empty bins are skipped.
///
fn bin_means(points: &[Point], bins: usize, t_min: f64, t_max: f64) -> Vec<Point> {
    let width = (t_max - t_min) / bins as f64;
    let mut sums = vec![(0.0, 0usize); bins];
    for point in points.iter() {
        let index = (((point.x - t_min) / width) as usize).min(bins - 1);
        sums[index].0 += point.y;
        sums[index].1 += 1;
    }
    sums.into_iter()
        .enumerate()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(index, (sum, count))| {
            Point::new(
                t_min + (index as f64 + 0.5) * width,
                sum / count as f64,
            )
        })
        .collect()
}

///
/// Evaluates a nearest-neighbour interpolant. Ties resolve to the earlier midpoint.
///
fn nearest(midpoints: &[Point], t: f64) -> f64 {
    let index = midpoints.partition_point(|point| point.x < t);
    let after = midpoints.get(index);
    let before = index.checked_sub(1).and_then(|index| midpoints.get(index));
    match (before, after) {
        (Some(before), Some(after)) if after.x - t < t - before.x => after.y,
        (Some(before), _) => before.y,
        (None, Some(after)) => after.y,
        (None, None) => f64::NAN,
    }
}

///
/// Returns `count` uniformly spaced values from `start` to `end` inclusive.
///
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |index| {
        if index + 1 == count && count > 1 {
            end
        } else {
            start + step * index as f64
        }
    })
}
