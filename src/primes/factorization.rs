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

use num_traits::PrimInt;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// A lazy iterator over the prime factors of an integer, with
/// multiplicity, in ascending order.
///
/// Factors of 2 are stripped first, then odd candidates from 3 upward in
/// steps of 2 are trial-divided against the remaining value; once all
/// candidates up to the square root of what is left are exhausted, any
/// remainder greater than 1 is itself prime and yielded last.
///
/// # Invariants
///
/// - The yielded sequence is non-decreasing.
/// - For inputs greater than 1, the product of all yielded factors equals
///   the original input.
///
/// # Examples
///
/// ```rust
/// # use numera::PrimeFactors;
///
/// let factors: Vec<i64> = PrimeFactors::new(12).collect();
/// assert_eq!(factors, vec![2, 2, 3]);
///
/// // Values below 2 have no prime factorization
/// assert_eq!(PrimeFactors::new(1).count(), 0);
/// assert_eq!(PrimeFactors::new(-4).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct PrimeFactors<T>
where
    T: PrimInt,
{
    remaining: T,
    candidate: T,
}

impl<T> PrimeFactors<T>
where
    T: PrimInt,
{
    /// Creates an iterator over the prime factors of `n`.
    ///
    /// For `n <= 1` (including all negative values) the iterator is
    /// empty.
    #[inline]
    pub fn new(n: T) -> Self {
        Self {
            remaining: n,
            candidate: T::one() + T::one(),
        }
    }

    /// Returns the part of the input not yet broken into factors.
    ///
    /// Starts at the input value and decreases as factors are yielded;
    /// once the iterator is exhausted it is 1 (or the untouched input for
    /// inputs below 2).
    #[inline]
    pub fn remaining(&self) -> T {
        self.remaining
    }
}

impl<T> Iterator for PrimeFactors<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let one = T::one();
        let two = one + one;

        if self.remaining <= one {
            return None;
        }

        if self.candidate == two {
            if (self.remaining % two).is_zero() {
                self.remaining = self.remaining / two;
                return Some(two);
            }
            self.candidate = two + one;
        }

        // i <= remaining / i is i * i <= remaining without overflow
        while self.candidate <= self.remaining / self.candidate {
            if (self.remaining % self.candidate).is_zero() {
                self.remaining = self.remaining / self.candidate;
                return Some(self.candidate);
            }
            self.candidate = self.candidate + two;
        }

        // What is left has no divisor up to its square root, so it is
        // prime and is the final, largest factor.
        let last = self.remaining;
        self.remaining = one;
        Some(last)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining <= T::one() {
            (0, Some(0))
        } else {
            // At least one factor remains; at most log2(remaining) do.
            (1, Some((T::zero().count_zeros() as usize).max(1)))
        }
    }
}

impl<T> FusedIterator for PrimeFactors<T> where T: PrimInt {}

/// Returns the prime factors of `n`, with multiplicity, in ascending
/// order.
///
/// `n <= 1` (including all negative values) yields an empty sequence;
/// negative numbers are given no factorization rather than a misleading
/// one. For `n > 1` the product of the returned factors equals `n`.
///
/// The sequence is returned in a [`SmallVec`] because factorizations are
/// short: a `u64` has at most 63 prime factors and almost all inputs have
/// far fewer than 16, so the common case allocates nothing.
///
/// # Examples
///
/// ```rust
/// # use numera::prime_factors;
///
/// assert_eq!(prime_factors(12).as_slice(), &[2, 2, 3]);
/// assert_eq!(prime_factors(360).as_slice(), &[2, 2, 2, 3, 3, 5]);
/// assert_eq!(prime_factors(17).as_slice(), &[17]);
/// assert!(prime_factors(1).is_empty());
/// assert!(prime_factors(-12).is_empty());
/// ```
#[inline]
pub fn prime_factors<T>(n: T) -> SmallVec<[T; 16]>
where
    T: PrimInt,
{
    PrimeFactors::new(n).collect()
}
