//! End-to-end tests for secret reconstruction.
//!
//! Shares are generated from random integer polynomials with a seeded RNG, so
//! every run sees the same inputs. Each test builds its own polynomial; there
//! is no shared state and no ordering dependency between tests.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use shamir_recovery::input::TestCase;
use shamir_recovery::interpolation::Indices;
use shamir_recovery::{
    reconstruct_exact, reconstruct_modular, Mode, Point, ReconstructionRequest, Reconstructor,
    RecoveryError,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Random coefficients `[a_0, ..., a_degree]`, each a signed `bits`-bit value.
fn random_polynomial(rng: &mut StdRng, degree: usize, bits: u64) -> Vec<BigInt> {
    (0..=degree).map(|_| rng.gen_bigint(bits)).collect()
}

/// Horner evaluation over the integers.
fn evaluate(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, c| acc * x + c)
}

fn shares_at(coefficients: &[BigInt], xs: &[i64]) -> Vec<Point> {
    xs.iter()
        .map(|&x| {
            let x = BigInt::from(x);
            let y = evaluate(coefficients, &x);
            Point { x, y }
        })
        .collect()
}

fn mersenne_127() -> BigInt {
    (BigInt::one() << 127usize) - 1
}

// ---------------------------------------------------------------------------
// 1. Exact Reconstruction
// ---------------------------------------------------------------------------

#[test]
fn exact_roundtrip_over_random_polynomials() {
    let mut rng = StdRng::seed_from_u64(7);

    for degree in 0..8 {
        let k = degree + 1;
        let poly = random_polynomial(&mut rng, degree, 128);
        let xs: Vec<i64> = (1..=(k as i64 + 4)).collect();
        let shares = shares_at(&poly, &xs);

        assert_eq!(reconstruct_exact(&shares, k).unwrap(), poly[0], "degree {}", degree);

        let tail = &shares[shares.len() - k..];
        assert_eq!(reconstruct_exact(tail, k).unwrap(), poly[0], "degree {} tail", degree);

        for _ in 0..3 {
            let mut shuffled = shares.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(
                reconstruct_exact(&shuffled, k).unwrap(),
                poly[0],
                "degree {} shuffled",
                degree
            );
        }
    }
}

#[test]
fn exact_with_scattered_and_negative_abscissas() {
    let mut rng = StdRng::seed_from_u64(11);
    let poly = random_polynomial(&mut rng, 4, 64);
    let shares = shares_at(&poly, &[-7, 1000, 3, -2, 19, 40]);

    assert_eq!(reconstruct_exact(&shares, 5).unwrap(), poly[0]);
    assert_eq!(reconstruct_exact(&shares[1..], 5).unwrap(), poly[0]);
}

#[test]
fn exact_high_threshold() {
    let mut rng = StdRng::seed_from_u64(23);
    let poly = random_polynomial(&mut rng, 24, 256);
    let xs: Vec<i64> = (1..=25).map(|i| i * 37).collect();
    let shares = shares_at(&poly, &xs);

    assert_eq!(reconstruct_exact(&shares, 25).unwrap(), poly[0]);
}

#[test]
fn reordering_first_k_is_invariant() {
    let mut rng = StdRng::seed_from_u64(5);
    let poly = random_polynomial(&mut rng, 3, 96);
    let mut shares = shares_at(&poly, &[2, 4, 6, 8]);
    let expected = reconstruct_exact(&shares, 4).unwrap();

    shares.reverse();
    assert_eq!(reconstruct_exact(&shares, 4).unwrap(), expected);
    shares.swap(0, 2);
    assert_eq!(reconstruct_exact(&shares, 4).unwrap(), expected);
}

#[test]
fn too_few_shares_do_not_recover_the_secret() {
    // A line through two points of a cubic is the wrong polynomial: the
    // result is either a different integer or not an integer at all.
    let poly: Vec<BigInt> = [17, -5, 3, 2].into_iter().map(BigInt::from).collect();
    let shares = shares_at(&poly, &[1, 2, 3, 4]);

    match reconstruct_exact(&shares, 2) {
        Ok(value) => assert_ne!(value, poly[0]),
        Err(e) => assert!(matches!(e, RecoveryError::NonIntegralResult { .. })),
    }
}

#[test]
fn duplicate_share_among_selected_fails() {
    let shares = vec![Point::new(5, 10), Point::new(5, 20), Point::new(6, 1)];
    assert!(matches!(
        reconstruct_exact(&shares, 2),
        Err(RecoveryError::DivisionByZero { .. })
    ));
    // A duplicate outside the first k is never looked at.
    let shares = vec![Point::new(1, 3), Point::new(2, 4), Point::new(2, 99)];
    assert_eq!(reconstruct_exact(&shares, 2).unwrap(), BigInt::from(2));
}

// ---------------------------------------------------------------------------
// 2. Modular Reconstruction
// ---------------------------------------------------------------------------

#[test]
fn modular_roundtrip_with_generation_prime() {
    let mut rng = StdRng::seed_from_u64(42);
    let p = mersenne_127();

    for degree in 1..6 {
        let k = degree + 1;
        let poly: Vec<BigInt> = (0..=degree)
            .map(|_| rng.gen_bigint_range(&BigInt::zero(), &p))
            .collect();
        let shares: Vec<Point> = (1..=(k as i64 + 3))
            .map(|x| {
                let x = BigInt::from(x);
                let y = evaluate(&poly, &x) % &p;
                Point { x, y }
            })
            .collect();

        assert_eq!(reconstruct_modular(&shares, k, &p).unwrap(), poly[0]);

        let mut shuffled = shares.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(reconstruct_modular(&shuffled, k, &p).unwrap(), poly[0]);
    }
}

#[test]
fn modular_agrees_with_exact_for_small_secrets() {
    // With a prime far above every intermediate, the residue of the exact
    // answer is the modular answer.
    let poly: Vec<BigInt> = [123, 4, 5].into_iter().map(BigInt::from).collect();
    let shares = shares_at(&poly, &[1, 2, 3]);
    let p = BigInt::from(1_000_000_007u64);

    assert_eq!(reconstruct_exact(&shares, 3).unwrap(), BigInt::from(123));
    assert_eq!(reconstruct_modular(&shares, 3, &p).unwrap(), BigInt::from(123));
}

#[test]
fn modular_collision_needs_bigger_prime() {
    let shares = vec![Point::new(3, 10), Point::new(14, 21)];
    let err = reconstruct_modular(&shares, 2, &BigInt::from(11)).unwrap_err();
    assert!(matches!(err, RecoveryError::NoInverse { .. }));
    assert!(err.to_string().contains("larger or different prime"));

    // The same shares are fine under a prime that separates 3 and 14.
    assert_eq!(
        reconstruct_modular(&shares, 2, &BigInt::from(13)).unwrap(),
        BigInt::from(7)
    );
}

// ---------------------------------------------------------------------------
// 3. Full Pipeline
// ---------------------------------------------------------------------------

#[test]
fn document_to_secret() {
    let doc = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;
    let tc = TestCase::from_json(doc).unwrap();
    let r = Reconstructor::new();

    let exact = r.reconstruct(&tc.request(Mode::Exact)).unwrap();
    assert_eq!(exact.value, BigInt::from(3));
    assert_eq!(exact.modulus, None);

    let modular = r
        .reconstruct(&tc.request(Mode::Modular { prime: None }))
        .unwrap();
    // max coordinate 39 + margin 100 = 139; the next prime strictly above is 149.
    assert_eq!(modular.modulus, Some(BigInt::from(149)));
    assert_eq!(modular.value, BigInt::from(3));
}

#[test]
fn generated_document_in_mixed_bases() {
    let mut rng = StdRng::seed_from_u64(99);
    let poly = random_polynomial(&mut rng, 6, 160);
    // Non-negative coefficients give every share a clean unsigned encoding.
    let poly: Vec<BigInt> = poly
        .iter()
        .map(|c| BigInt::from(c.magnitude().clone()))
        .collect();

    let bases = [2u32, 7, 10, 15, 16, 36, 3, 8, 12, 20];
    let mut entries = Vec::new();
    for (i, &base) in bases.iter().enumerate() {
        let x = BigInt::from(i as i64 + 1);
        let y = evaluate(&poly, &x);
        let mut value = y.to_str_radix(base);
        if i % 2 == 1 {
            value = value.to_uppercase();
        }
        entries.push(format!(
            r#""{}": {{ "base": "{}", "value": "{}" }}"#,
            i + 1,
            base,
            value
        ));
    }
    let doc = format!(
        r#"{{ "keys": {{ "n": {}, "k": 7 }}, {} }}"#,
        bases.len(),
        entries.join(", ")
    );

    let tc = TestCase::from_json(&doc).unwrap();
    assert_eq!(tc.points.len(), 10);
    let secret = Reconstructor::new()
        .reconstruct(&tc.request(Mode::Exact))
        .unwrap();
    assert_eq!(secret.value, poly[0]);
}

#[test]
fn explicit_subset_selection() {
    let poly: Vec<BigInt> = [9, 1, 1].into_iter().map(BigInt::from).collect();
    let mut shares = shares_at(&poly, &[1, 2, 3, 4, 5]);
    // Corrupt the first share; pick around it.
    shares[0].y += 1;

    let request = ReconstructionRequest::exact(shares, 3);
    assert_ne!(
        Reconstructor::new().reconstruct(&request).ok().map(|s| s.value),
        Some(BigInt::from(9))
    );
    let secret = Reconstructor::with_selector(Indices(vec![4, 2, 1]))
        .reconstruct(&request)
        .unwrap();
    assert_eq!(secret.value, BigInt::from(9));
}

// ---------------------------------------------------------------------------
// 4. Independence
// ---------------------------------------------------------------------------

#[test]
fn parallel_reconstructions_are_independent() {
    let mut rng = StdRng::seed_from_u64(3);
    let cases: Vec<(Vec<Point>, BigInt)> = (0..8)
        .map(|_| {
            let poly = random_polynomial(&mut rng, 3, 64);
            (shares_at(&poly, &[1, 2, 3, 4]), poly[0].clone())
        })
        .collect();
    let r = Reconstructor::new();

    std::thread::scope(|s| {
        for (i, (shares, expected)) in cases.iter().enumerate() {
            let r = &r;
            s.spawn(move || {
                // Every third case is deliberately broken; the others must
                // still succeed.
                let threshold = if i % 3 == 0 { 5 } else { 4 };
                let request = ReconstructionRequest::exact(shares.clone(), threshold);
                match r.reconstruct(&request) {
                    Ok(secret) => assert_eq!(&secret.value, expected),
                    Err(e) => {
                        assert_eq!(threshold, 5);
                        assert!(matches!(e, RecoveryError::InsufficientPoints { .. }));
                    }
                }
            });
        }
    });
}
