use crate::kernel::kernelerror::KernelError;

// ─────────────────────────────────────────────────────────────────────────────
// Trapezoidal integration of f(x) = x²
// ─────────────────────────────────────────────────────────────────────────────
//
//   dx    = (xmax - xmin) / intervals_count
//   total = Σ dx·(f(x_i) + f(x_i + dx)) / 2,   x_i = xmin + i·dx
//
// `x2_integrate` sums i = 0 .. intervals_count - 2 only, so the last
// sub-interval [xmax - dx, xmax] never contributes. The exported symbol
// keeps that behavior; `x2_integrate_trapezoid` sums the full range.
//
// Neither function validates `intervals_count`. For a count <= 1 the loop
// body never runs, so the infinite or NaN `dx` produced by a zero count is
// not observable and the result is 0.0.

#[inline]
fn square(x: f64) -> f64 {
    x * x
}

#[inline]
fn trapezoid_sum(xmin: f64, dx: f64, steps: i32) -> f64 {
    let mut total = 0.0;
    let mut x = xmin;
    for _ in 0..steps {
        total = total + dx * (square(x) + square(x + dx)) / 2.0;
        x = x + dx;
    }
    total
}

/// Approximates ∫ x² dx over `[xmin, xmax]` with `intervals_count - 1`
/// trapezoids starting at `xmin`.
///
/// The area of the final sub-interval is omitted, so over `[0, 1]` with
/// 1000 intervals the result falls short of 1/3 by roughly `1e-3`.
/// Swapping the bounds omits the sub-interval at the other end, so
/// `x2_integrate(b, a, n)` is not the exact negation of `x2_integrate(a, b, n)`.
pub fn x2_integrate(xmin: f64, xmax: f64, intervals_count: i32) -> f64 {
    let dx = (xmax - xmin) / f64::from(intervals_count);
    trapezoid_sum(xmin, dx, intervals_count.saturating_sub(1))
}

/// Composite trapezoidal rule over the full range `[xmin, xmax]`.
pub fn x2_integrate_trapezoid(xmin: f64, xmax: f64, intervals_count: i32) -> f64 {
    let dx = (xmax - xmin) / f64::from(intervals_count);
    trapezoid_sum(xmin, dx, intervals_count)
}

pub fn checked_x2_integrate(xmin: f64, xmax: f64, intervals_count: i32) -> Result<f64, KernelError> {
    if intervals_count <= 0 {
        return Err(KernelError::NonPositiveIntervals(intervals_count));
    }
    Ok(x2_integrate_trapezoid(xmin, xmax, intervals_count))
}
