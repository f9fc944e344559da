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

//! # Integer Sequences
//!
//! Iteratively computed integer sequences with checked 64-bit arithmetic.
//!
//! ## Submodules
//!
//! - `factorial`: `n!` via a single accumulator multiplied by `2..=n`.
//! - `fibonacci`: the 0-indexed Fibonacci sequence via a two-variable
//!   rolling update in O(n) time and O(1) space.
//!
//! ## Semantics
//!
//! Both functions reject negative input with
//! [`ArithmeticError::NegativeInput`](crate::error::ArithmeticError) and
//! report results that do not fit in a `u64` with
//! [`ArithmeticError::Overflow`](crate::error::ArithmeticError) rather
//! than silently wrapping.

pub mod factorial;
pub mod fibonacci;
