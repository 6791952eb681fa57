//! The synthetic CPU workload.
//!
//! `fib` is the textbook double recursion with no memoization. Its cost grows
//! as roughly 1.6^n calls, which is the whole point of this service: every
//! `/calculate` request burns a predictable amount of CPU on the request's own
//! task. Do not replace it with an iterative or cached version.

use std::time::{Duration, Instant};

use crate::config::MAX_FIB_INPUT;

/// Compute the nth Fibonacci number by naive recursion.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fib(n - 1) + fib(n - 2)
}

/// Outcome of a single timed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub input: u32,
    pub value: u64,
    pub elapsed: Duration,
}

impl Calculation {
    /// Elapsed wall-clock time truncated to whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// A validated Fibonacci input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    input: u32,
}

impl Workload {
    pub fn new(input: u32) -> Result<Self, WorkloadError> {
        if input > MAX_FIB_INPUT {
            return Err(WorkloadError::InputTooLarge {
                n: input,
                max: MAX_FIB_INPUT,
            });
        }
        Ok(Self { input })
    }

    pub fn input(&self) -> u32 {
        self.input
    }

    /// Run the computation synchronously on the calling thread and time it.
    pub fn run(&self) -> Calculation {
        let start = Instant::now();
        let value = fib(self.input);
        let elapsed = start.elapsed();

        Calculation {
            input: self.input,
            value,
            elapsed,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Fibonacci input {n} overflows u64 (max {max})")]
    InputTooLarge { n: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIB_INPUT;

    fn fib_iterative(n: u32) -> u64 {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            let next = a + b;
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
        assert_eq!(fib(2), 1);
    }

    #[test]
    fn test_matches_iterative_reference() {
        for n in 0..=25 {
            assert_eq!(fib(n), fib_iterative(n), "mismatch at n={}", n);
        }
    }

    #[test]
    fn test_reference_bound_fits_u64() {
        assert_eq!(fib_iterative(MAX_FIB_INPUT), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_fixed_input_value_and_cost() {
        let calculation = Workload::new(FIB_INPUT).unwrap().run();
        assert_eq!(calculation.input, 36);
        assert_eq!(calculation.value, fib_iterative(FIB_INPUT));
        assert_eq!(calculation.value, 14_930_352);
        // The value alone is not enough: the naive recursion must actually burn CPU.
        assert!(
            calculation.elapsed >= Duration::from_millis(1),
            "fib(36) finished in {:?}, recursion looks memoized",
            calculation.elapsed
        );
    }

    #[test]
    fn test_deterministic() {
        let workload = Workload::new(20).unwrap();
        assert_eq!(workload.run().value, workload.run().value);
    }

    #[test]
    fn test_elapsed_ms_truncates() {
        let calculation = Calculation {
            input: 1,
            value: 1,
            elapsed: Duration::from_micros(1999),
        };
        assert_eq!(calculation.elapsed_ms(), 1);
    }

    #[test]
    fn test_input_too_large_rejected() {
        let err = Workload::new(MAX_FIB_INPUT + 1).unwrap_err();
        assert!(matches!(err, WorkloadError::InputTooLarge { n: 94, max: 93 }));
        assert!(Workload::new(MAX_FIB_INPUT).is_ok());
    }
}
