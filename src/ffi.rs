//! Unmangled C ABI entry points. Both bodies are panic-free, so nothing
//! unwinds across the boundary.

use crate::math;

#[unsafe(no_mangle)]
pub extern "C" fn factorial(n: i32) -> i32 {
    math::factorial::factorial(n)
}

#[unsafe(export_name = "x2Integrate")]
pub extern "C" fn x2_integrate(xmin: f64, xmax: f64, intervals_count: i32) -> f64 {
    math::integration::x2_integrate(xmin, xmax, intervals_count)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exports_match_kernels() {
        assert_eq!(factorial(10), 3628800);
        assert_eq!(factorial(-4), 1);
        assert_eq!(x2_integrate(1.0, 3.0, 4), 4.9375);
        assert_eq!(x2_integrate(0.0, 1.0, 0), 0.0);
    }

    #[test]
    fn test_callable_through_fn_pointer() {
        let exported: extern "C" fn(f64, f64, i32) -> f64 = x2_integrate;
        assert_eq!(exported(2.0, 2.0, 100), 0.0);
    }
}
