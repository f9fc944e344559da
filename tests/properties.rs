// Copyright (c) 2026 the numera developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use numera::{factorial, fibonacci, is_prime, prime_factors};
use proptest::prelude::*;

/// Reference primality check: plain trial division by every integer up
/// to the square root, with none of the wheel shortcuts.
fn is_prime_naive(n: i64) -> bool {
    n > 1 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    #[test]
    fn factorial_satisfies_recurrence(n in 1i64..=20) {
        prop_assert_eq!(
            factorial(n).unwrap(),
            n as u64 * factorial(n - 1).unwrap()
        );
    }

    #[test]
    fn fibonacci_satisfies_recurrence(n in 2i64..=93) {
        prop_assert_eq!(
            fibonacci(n).unwrap(),
            fibonacci(n - 1).unwrap() + fibonacci(n - 2).unwrap()
        );
    }

    #[test]
    fn negative_input_is_rejected(n in i64::MIN..0) {
        prop_assert!(factorial(n).is_err());
        prop_assert!(fibonacci(n).is_err());
    }

    #[test]
    fn primality_matches_naive_trial_division(n in -1_000i64..100_000) {
        prop_assert_eq!(is_prime(n), is_prime_naive(n));
    }

    #[test]
    fn factor_product_reconstructs_input(n in 2i64..10_000_000) {
        let factors = prime_factors(n);
        let product: i64 = factors.iter().product();
        prop_assert_eq!(product, n);
    }

    #[test]
    fn factors_are_prime_and_non_decreasing(n in 2i64..10_000_000) {
        let factors = prime_factors(n);
        prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(factors.iter().all(|&f| is_prime(f)));
    }

    #[test]
    fn values_below_two_have_no_factors(n in i64::MIN..=1) {
        prop_assert!(prime_factors(n).is_empty());
    }
}
