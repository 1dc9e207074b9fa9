//! The Fibonacci recurrence, computed by naive double recursion.
//!
//! # Complexity Contract
//!
//! This is intentionally the naive algorithm: `fib(n) = fib(n-1) + fib(n-2)`
//! evaluated by direct self-call with no caching. That makes the runtime
//! exponential, O(2^n), and the recursion depth linear, O(n). Callers that
//! need large indices want a different algorithm, not a bigger machine;
//! n = 25 completes in well under a second, n = 40 takes minutes, and the
//! doubling continues from there. The recursive shape is part of the
//! documented contract and must not be swapped for memoization or iteration.
//!
//! # Result Width
//!
//! Results are `BigUint`, so every index yields an exact value with no
//! overflow boundary. The exponential runtime is the binding limit long
//! before the integer width would be.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::FibError;

/// Calculate the nth Fibonacci number (0-indexed) by naive recursion.
///
/// The sequence is F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).
///
/// Pure and deterministic: no shared state, safe to call from any number
/// of threads concurrently. Recursion depth equals `n`; the default thread
/// stack comfortably handles depths in the thousands, though the O(2^n)
/// runtime makes such indices impractical anyway.
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] with the message
/// "n must be non-negative" when `n < 0`. There are no other failure modes.
///
/// # Examples
///
/// ```
/// use fib_core::fibonacci;
/// use num_bigint::BigUint;
///
/// assert_eq!(fibonacci(0).unwrap(), BigUint::from(0u32));
/// assert_eq!(fibonacci(10).unwrap(), BigUint::from(55u32));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<BigUint, FibError> {
    if n < 0 {
        return Err(FibError::negative_index());
    }
    Ok(fib(n as u64))
}

/// The recurrence itself, for an already-validated index.
///
/// Kept `Result`-free so the recursive call tree is exactly the naive
/// double recursion, with validation paid once at the public boundary.
fn fib(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }
    if n == 1 {
        return BigUint::one();
    }
    fib(n - 1) + fib(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(0).unwrap(), big(0));
        assert_eq!(fibonacci(1).unwrap(), big(1));
    }

    #[test]
    fn test_small_values() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        for (i, &v) in expected.iter().enumerate() {
            assert_eq!(fibonacci(i as i64).unwrap(), big(v), "F({})", i);
        }
    }

    #[test]
    fn test_medium_values() {
        assert_eq!(fibonacci(10).unwrap(), big(55));
        assert_eq!(fibonacci(12).unwrap(), big(144));
        assert_eq!(fibonacci(15).unwrap(), big(610));
        assert_eq!(fibonacci(20).unwrap(), big(6765));
    }

    #[test]
    fn test_negative_input_is_invalid_argument() {
        for n in [-1i64, -5, -10, -100, -1000] {
            match fibonacci(n) {
                Err(FibError::InvalidArgument(msg)) => {
                    assert_eq!(msg, "n must be non-negative", "n = {}", n);
                }
                other => panic!("expected InvalidArgument for n = {}, got {:?}", n, other),
            }
        }
    }

    #[test]
    fn test_error_message() {
        let err = fibonacci(-1).unwrap_err();
        assert_eq!(err.to_string(), "n must be non-negative");
    }
}
