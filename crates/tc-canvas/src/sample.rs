//! Evaluate a function over a range.
//!
//! Plotting code wants `f(x)` at one abscissa per pixel column. Computing
//! the values once and reusing them for both the axes and the curve keeps
//! the two in sync.

/// Evaluate `f` at `count` evenly spaced points from `from` to `to`.
///
/// Both bounds are always included exactly, never as the result of adding
/// steps. With `count < 2` only `from` is sampled, and nothing at all for
/// `count == 0`.
///
/// ```
/// use tc_canvas::sample;
///
/// let (x, y) = sample(0.0, 1.0, 5, |x| x * 2.0);
/// assert_eq!(x, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(y, [0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample<T, F>(from: f64, to: f64, count: usize, mut f: F) -> (Vec<f64>, Vec<T>)
where
    F: FnMut(f64) -> T,
{
    if count == 0 {
        return (Vec::new(), Vec::new());
    }
    if count == 1 {
        return (vec![from], vec![f(from)]);
    }

    let step = (to - from) / (count - 1) as f64;

    let xs: Vec<f64> = (0..count)
        .map(|i| match i {
            0 => from,
            i if i == count - 1 => to,
            i => step.mul_add(i as f64, from),
        })
        .collect();
    let ys = xs.iter().map(|&x| f(x)).collect();

    (xs, ys)
}
