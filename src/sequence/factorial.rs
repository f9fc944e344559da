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

use crate::error::{ArithmeticError, ArithmeticResult};

/// Computes `n!` as a `u64`.
///
/// The result is accumulated iteratively: the accumulator starts at 1 and
/// is multiplied by every integer from 2 to `n` inclusive, so `n = 0` and
/// `n = 1` both yield 1 without entering the loop. Every multiplication
/// is checked; `20!` is the largest factorial representable in a `u64`.
///
/// # Errors
///
/// Returns [`ArithmeticError::NegativeInput`] if `n < 0` and
/// [`ArithmeticError::Overflow`] if `n > 20`.
///
/// # Examples
///
/// ```rust
/// # use numera::factorial;
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert_eq!(factorial(10), Ok(3628800));
/// assert!(factorial(-1).is_err());
/// assert!(factorial(21).is_err());
/// ```
#[inline]
pub fn factorial(n: i64) -> ArithmeticResult<u64> {
    if n < 0 {
        return Err(ArithmeticError::NegativeInput {
            operation: "factorial",
            value: n,
        });
    }

    let mut result: u64 = 1;
    for i in 2..=n as u64 {
        result = result
            .checked_mul(i)
            .ok_or(ArithmeticError::Overflow {
                operation: "factorial",
                value: n,
            })?;
    }
    Ok(result)
}
