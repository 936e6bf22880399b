//!
//! Block averaging with min/max envelopes.
//!

use super::error::Error;
use super::Point;

///
/// A block of consecutive points reduced to its mean and extremes.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Block {
    /// The mean timestamp.
    pub x: f64,
    /// The mean value.
    pub mean: f64,
    /// The smallest value.
    pub min: f64,
    /// The largest value.
    pub max: f64,
}

impl Block {
    ///
    /// A block made of a single point.
    ///
    pub fn anchor(point: Point) -> Self {
        Self {
            x: point.x,
            mean: point.y,
            min: point.y,
            max: point.y,
        }
    }

    ///
    /// Reduces a non-empty slice of points.
    ///
    fn reduce(points: &[Point]) -> Self {
        let count = points.len() as f64;
        let (x_sum, y_sum, min, max) = points.iter().fold(
            (0.0, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(x_sum, y_sum, min, max), point| {
                (x_sum + point.x, y_sum + point.y, min.min(point.y), max.max(point.y))
            },
        );
        Self {
            x: x_sum / count,
            mean: y_sum / count,
            min,
            max,
        }
    }
}

///
/// Reduces a series to blocks of `block_size` consecutive points framed by the first and
/// last raw points as anchors. A trailing partial block is averaged as well.
///
pub fn block_average(points: &[Point], block_size: usize) -> Result<Vec<Block>, Error> {
    if block_size == 0 {
        return Err(Error::ZeroBlockSize);
    }
    let mut points = points.to_vec();
    Point::sort(points.as_mut_slice());
    let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
        return Ok(vec![]);
    };

    let mut blocks = Vec::with_capacity(points.len() / block_size + 3);
    blocks.push(Block::anchor(first));
    blocks.extend(points.chunks(block_size).map(Block::reduce));
    blocks.push(Block::anchor(last));
    Ok(blocks)
}
