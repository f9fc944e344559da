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

use std::fmt;

/// Errors raised by the value-producing arithmetic functions.
///
/// The primality and factorization functions are total and never return
/// an error; only `factorial` and `fibonacci` can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The operation is undefined for negative input.
    NegativeInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
        /// The offending input value.
        value: i64,
    },
    /// The result does not fit in a `u64`.
    Overflow {
        /// Name of the operation whose result overflowed.
        operation: &'static str,
        /// The input for which the result overflowed.
        value: i64,
    },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::NegativeInput { operation, value } => {
                write!(f, "{operation}: invalid argument: {value} is negative")
            }
            ArithmeticError::Overflow { operation, value } => {
                write!(
                    f,
                    "{operation}: arithmetic overflow: result for input {value} exceeds u64::MAX"
                )
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for the arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_negative_input() {
        let err = ArithmeticError::NegativeInput {
            operation: "factorial",
            value: -3,
        };
        assert_eq!(err.to_string(), "factorial: invalid argument: -3 is negative");
    }

    #[test]
    fn test_error_display_overflow() {
        let err = ArithmeticError::Overflow {
            operation: "fibonacci",
            value: 94,
        };
        assert_eq!(
            err.to_string(),
            "fibonacci: arithmetic overflow: result for input 94 exceeds u64::MAX"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = ArithmeticError::NegativeInput {
            operation: "factorial",
            value: -1,
        };
        let b = ArithmeticError::NegativeInput {
            operation: "factorial",
            value: -1,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            ArithmeticError::Overflow {
                operation: "factorial",
                value: -1
            }
        );
    }
}
