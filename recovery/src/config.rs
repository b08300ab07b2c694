//! # Recovery Configuration & Constants
//!
//! Every tunable number in the recovery engine lives here. Anything the
//! binary exposes as a flag has its default defined in this module, so the
//! library and the CLI can never disagree about what "default" means.

// ---------------------------------------------------------------------------
// Prime Selection
// ---------------------------------------------------------------------------

/// Added to the largest coordinate magnitude before searching upward for a
/// field prime. A heuristic, not a bound: it keeps the chosen prime from
/// sitting right on top of the largest share value.
pub const DEFAULT_PRIME_MARGIN: u64 = 100;

/// Witnesses for the Miller–Rabin test. The first 12 primes make the test
/// deterministic for every n < 3.3 * 10^24; the remaining bases push the
/// error bound for larger candidates below 4^-20.
pub const MILLER_RABIN_BASES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Trial-division table used to reject most composites before paying for a
/// modular exponentiation.
pub const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

// ---------------------------------------------------------------------------
// Share Encoding
// ---------------------------------------------------------------------------

/// Smallest radix a share value may be written in.
pub const MIN_RADIX: u32 = 2;

/// Largest radix a share value may be written in (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Name of the JSON object holding `n` and `k` in a test-case document.
pub const KEYS_FIELD: &str = "keys";

// ---------------------------------------------------------------------------
// CLI Defaults
// ---------------------------------------------------------------------------

/// Test-case files processed when the binary is given no paths.
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["test1.json", "test2.json"];
