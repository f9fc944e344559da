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

//! # Numera
//!
//! Elementary integer arithmetic over native 64-bit integers: factorials,
//! Fibonacci numbers, trial-division primality testing, and prime
//! factorization. Every operation is a pure, stateless computation over a
//! single integer input; there is no shared state, no I/O, and no
//! synchronization, so all functions are safe to call concurrently from
//! any number of call sites.
//!
//! ## Modules
//!
//! - `sequence`: Iteratively computed integer sequences. `factorial` and
//!   `fibonacci` run in O(n) time and O(1) extra space and use checked
//!   arithmetic throughout, reporting overflow as an error instead of
//!   wrapping.
//! - `primes`: Trial-division number theory. `is_prime` uses the mod-6
//!   wheel (candidates of the form `6k ± 1` up to the square root);
//!   `prime_factors` returns the ordered prime factorization with
//!   multiplicity and is backed by the lazy [`PrimeFactors`] iterator.
//! - `error`: The crate error type ([`ArithmeticError`]) and result alias
//!   ([`ArithmeticResult`]).
//!
//! ## Error handling
//!
//! Value-producing sequence functions reject negative input and signal
//! 64-bit overflow explicitly. The primality and factorization functions
//! are total: every integer has a defined (possibly trivial) answer, so
//! they expose no error path.
//!
//! ## Limitations
//!
//! This is not a bignum library (results must fit in `u64`), and the
//! factorization is plain trial division (no Pollard's rho, no sieve).
//! Inputs with large prime factors take O(sqrt(n)) steps.

pub mod error;
pub mod primes;
pub mod sequence;

pub use error::{ArithmeticError, ArithmeticResult};
pub use primes::factorization::{prime_factors, PrimeFactors};
pub use primes::primality::is_prime;
pub use sequence::factorial::factorial;
pub use sequence::fibonacci::fibonacci;
