//! Fib Core: a recursive Fibonacci calculator
//!
//! One stateless function, `fibonacci(n)`, computing the sequence
//! F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2) by naive double recursion.
//! The exponential runtime is intentional and documented - see the `fib`
//! module for the complexity contract.
//!
//! # Modules
//!
//! - `error`: the single `InvalidArgument` error kind (negative index)
//! - `fib`: the recurrence itself

pub mod error;
pub mod fib;

// Re-export key types and functions
pub use error::FibError;
pub use fib::fibonacci;
