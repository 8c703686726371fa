//! The escape-time evaluator.  A point `c` belongs to the Mandelbrot
//! set if the orbit of `z = z² + c` never leaves the circle of radius
//! 2.  We can't iterate forever, so we count how many steps the orbit
//! takes to leave, giving up at some limit.
use num::Complex;

/// A point on the complex plane.  There's no separate Point type; a
/// single Complex number is a Point.
pub type Point = Complex<f64>;

/// The squared escape radius.  Comparing against the square saves a
/// `sqrt()` on every step.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// True once the orbit is outside the circle of radius 2, from which
/// it can never return.
#[inline]
pub fn escapes(z: &Point) -> bool {
    z.norm_sqr() > ESCAPE_RADIUS_SQR
}

/// One step of the quadratic recurrence.
#[inline]
pub fn step(z: Point, c: Point) -> Point {
    z * z + c
}

/// Returns the step at which the orbit of `c` escaped, or `limit` if
/// it never did.  The orbit is seeded with `z₀ = c` and checked
/// before each step, so a point already outside the circle returns 0
/// and a limit of 0 still performs exactly one check.
pub fn iterations(c: Point, limit: usize) -> usize {
    let mut z = c;
    for i in 0..=limit {
        if escapes(&z) {
            return i;
        }
        z = step(z, c);
    }
    limit
}
