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

/// Returns `true` if `n` is prime.
///
/// Total over all integers: negative numbers, 0, and 1 are not prime.
/// After rejecting multiples of 2 and 3, only candidates of the form
/// `6k ± 1` up to `sqrt(n)` are trial-divided (mod-6 wheel), so the test
/// runs in O(sqrt(n)) divisions. The loop bound is expressed as
/// `i <= n / i` to avoid overflowing `i * i` near the type's maximum.
///
/// # Examples
///
/// ```rust
/// # use numera::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(18));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// ```
#[inline]
pub fn is_prime<T>(n: T) -> bool
where
    T: PrimInt,
{
    let one = T::one();
    if n <= one {
        return false;
    }

    let two = one + one;
    let three = two + one;
    if n <= three {
        return true;
    }
    if (n % two).is_zero() || (n % three).is_zero() {
        return false;
    }

    let six = two * three;
    let mut i = two + three;
    while i <= n / i {
        if (n % i).is_zero() || (n % (i + two)).is_zero() {
            return false;
        }
        i = i + six;
    }
    true
}
