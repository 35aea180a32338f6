use crate::kernel::kernelerror::KernelError;

/// n! in 32-bit two's complement arithmetic.
///
/// Every `n <= 1`, negative values included, yields 1. Products past
/// `i32::MAX` wrap silently; callers that need to detect that use
/// [`checked_factorial`].
pub fn factorial(n: i32) -> i32 {
    let mut result: i32 = 1;

    if n <= 1 {
        return result;
    }

    for i in 2..=n {
        result = result.wrapping_mul(i);
    }
    result
}

pub fn checked_factorial(n: i32) -> Result<i32, KernelError> {
    if n < 0 {
        return Err(KernelError::NegativeFactorial(n));
    }
    (2..=n).try_fold(1i32, |acc, i| {
        acc.checked_mul(i).ok_or(KernelError::FactorialOverflow(n))
    })
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3628800);
        assert_eq!(factorial(12), 479001600);
    }

    #[test]
    fn test_negative_input_returns_one() {
        for n in [-1, -2, -17, i32::MIN] {
            assert_eq!(factorial(n), 1);
        }
    }

    #[test]
    fn test_recurrence() {
        for n in 1..40 {
            assert_eq!(factorial(n), n.wrapping_mul(factorial(n - 1)));
        }
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(factorial(13), 1932053504);
        assert_eq!(factorial(17), -288522240);
    }

    #[test]
    fn test_checked_factorial() {
        assert_eq!(checked_factorial(0).unwrap(), 1);
        assert_eq!(checked_factorial(12).unwrap(), 479001600);
        assert!(matches!(checked_factorial(-3), Err(KernelError::NegativeFactorial(-3))));
        assert!(matches!(checked_factorial(13), Err(KernelError::FactorialOverflow(13))));
    }
}
