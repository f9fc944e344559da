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

/// Computes the `n`th Fibonacci number (0-indexed) as a `u64`.
///
/// `fibonacci(0) == 0` and `fibonacci(1) == 1` are returned immediately;
/// larger indices use the rolling update `(a, b) -> (b, a + b)` in O(n)
/// time and O(1) extra space. Every addition is checked; `fibonacci(93)`
/// is the largest Fibonacci number representable in a `u64`.
///
/// # Errors
///
/// Returns [`ArithmeticError::NegativeInput`] if `n < 0` and
/// [`ArithmeticError::Overflow`] if `n > 93`.
///
/// # Examples
///
/// ```rust
/// # use numera::fibonacci;
///
/// assert_eq!(fibonacci(0), Ok(0));
/// assert_eq!(fibonacci(1), Ok(1));
/// assert_eq!(fibonacci(10), Ok(55));
/// assert!(fibonacci(-1).is_err());
/// assert!(fibonacci(94).is_err());
/// ```
#[inline]
pub fn fibonacci(n: i64) -> ArithmeticResult<u64> {
    if n < 0 {
        return Err(ArithmeticError::NegativeInput {
            operation: "fibonacci",
            value: n,
        });
    }
    if n == 0 {
        return Ok(0);
    }
    if n == 1 {
        return Ok(1);
    }

    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 2..=n {
        let next = a.checked_add(b).ok_or(ArithmeticError::Overflow {
            operation: "fibonacci",
            value: n,
        })?;
        a = b;
        b = next;
    }
    Ok(b)
}
