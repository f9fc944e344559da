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

//! # Prime Number Utilities
//!
//! Trial-division number theory, generic over the primitive integer
//! types via `num_traits::PrimInt`.
//!
//! ## Submodules
//!
//! - `primality`: `is_prime`, a total predicate using the mod-6 wheel
//!   (only candidates of the form `6k ± 1` up to the square root are
//!   trial-divided).
//! - `factorization`: `prime_factors` and the lazy [`PrimeFactors`]
//!   iterator, producing the ordered prime factorization with
//!   multiplicity.
//!
//! Both operations are defined for every integer: values below 2 are
//! never prime and have an empty factorization. Neither has an error
//! path.
//!
//! [`PrimeFactors`]: factorization::PrimeFactors

pub mod factorization;
pub mod primality;
