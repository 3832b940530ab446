//! Evaluating a function at evenly spaced points.

use crate::func::Function;
use super::error::{kind::{InvalidSampleRange, TooFewSamples}, Error};
use tracing::trace;

/// A pair of `(x, y)` values produced by [`sample`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SamplePoint(pub f64, pub f64);

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> SamplePoint {
        SamplePoint(x, y)
    }
}

/// Evaluates the function at `count` evenly spaced points over `[start, end]`, including both
/// ends.
///
/// If the function cannot be evaluated at a point, the `y` value of that point is [`f64::NAN`];
/// the remaining points are still evaluated. Returns [`Err`] if the range is not finite, `start`
/// is greater than `end`, or `count` is less than 2.
pub fn sample(
    f: &impl Function,
    start: f64,
    end: f64,
    count: usize,
) -> Result<Vec<SamplePoint>, Error> {
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(Error::unspanned(InvalidSampleRange { start, end }));
    }

    if count < 2 {
        return Err(Error::unspanned(TooFewSamples { count }));
    }

    let last = (count - 1) as f64;
    let points = (0..count)
        .map(|i| {
            // interpolate from both ends, since `end - start` can overflow for finite bounds
            let t = i as f64 / last;
            let x = if i == count - 1 {
                end
            } else {
                (start * (1.0 - t) + end * t).clamp(start, end)
            };
            let y = f.evaluate(x).unwrap_or_else(|err| {
                trace!(x, %err, "sample point could not be evaluated");
                f64::NAN
            });
            SamplePoint(x, y)
        })
        .collect();

    Ok(points)
}
