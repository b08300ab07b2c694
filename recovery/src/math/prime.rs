//! # Prime Selection
//!
//! When modular reconstruction is requested without an explicit modulus, the
//! field prime is chosen here: the smallest prime strictly greater than the
//! largest coordinate magnitude plus a safety margin.
//!
//! That choice does **not** make the modular result equal the exact integer
//! result. It only guarantees a valid, deterministic field. Callers who need
//! to reproduce a share-generation modulus must pass it explicitly.
//!
//! Primality is decided by trial division against a small table followed by
//! Miller–Rabin with fixed witnesses (see [`crate::config::MILLER_RABIN_BASES`]),
//! so the search is deterministic for a given input.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::config::{DEFAULT_PRIME_MARGIN, MILLER_RABIN_BASES, SMALL_PRIMES};
use crate::types::Point;

/// Miller–Rabin primality test.
///
/// Exact for every `n < 3.3 * 10^24`; above that a composite slips through
/// with probability below `4^-20`.
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_recovery::math::is_probable_prime;
///
/// assert!(is_probable_prime(&BigInt::from(7919)));
/// assert!(!is_probable_prime(&BigInt::from(561)));
/// ```
pub fn is_probable_prime(n: &BigInt) -> bool {
    if *n < BigInt::from(2) {
        return false;
    }
    for p in SMALL_PRIMES {
        let p = BigInt::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n is odd and larger than every witness from here on.
    let n_minus_one = n - BigInt::one();
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let two = BigInt::from(2);

    'witness: for a in MILLER_RABIN_BASES {
        let mut x = BigInt::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// The smallest prime strictly greater than `n`.
pub fn next_prime_above(n: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    let mut candidate = n + BigInt::one();
    if candidate <= two {
        return two;
    }
    if candidate.is_even() {
        candidate += BigInt::one();
    }
    while !is_probable_prime(&candidate) {
        candidate += &two;
    }
    candidate
}

/// Picks a field prime large enough to hold every input coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSelector {
    margin: BigInt,
}

impl PrimeSelector {
    /// A selector with a custom safety margin.
    pub fn new(margin: u64) -> Self {
        Self {
            margin: BigInt::from(margin),
        }
    }

    pub fn margin(&self) -> &BigInt {
        &self.margin
    }

    /// Smallest prime strictly greater than `max(|x|, |y|) + margin` over all
    /// supplied points. An empty point set behaves as if the maximum were 0.
    pub fn select(&self, points: &[Point]) -> BigInt {
        let max = points
            .iter()
            .flat_map(|p| [p.x.abs(), p.y.abs()])
            .max()
            .unwrap_or_else(BigInt::zero);

        let prime = next_prime_above(&(&max + &self.margin));
        debug!(max_coordinate = %max, margin = %self.margin, prime = %prime, "selected field prime");
        prime
    }
}

impl Default for PrimeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PRIME_MARGIN)
    }
}
