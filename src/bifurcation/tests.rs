// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

use super::bifurcate;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_parameter_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let b = bifurcate(100.0, 7.0, &mut rng);
        assert!(b.d1 >= 0.4 * 7.0 && b.d1 < 7.0);
        assert!(b.d2 >= 0.4 * 7.0 && b.d2 < 7.0);
        assert!(b.l1 >= 0.5 * 100.0 && b.l1 < 100.0);
        assert!(b.l2 >= 0.5 * 100.0 && b.l2 < 100.0);
        assert!(b.th1 >= 30.0 && b.th1 < 40.0);
        assert!(b.th2 >= 30.0 && b.th2 < 35.0);
    }
}

#[test]
fn test_zero_parent_is_finite() {
    let mut rng = StdRng::seed_from_u64(0);
    let b = bifurcate(0.0, 0.0, &mut rng);
    assert_eq!(b.d1, 0.0);
    assert_eq!(b.d2, 0.0);
    assert_eq!(b.l1, 0.0);
    assert_eq!(b.l2, 0.0);
    // the angles do not depend on the parent at all
    assert!(b.th1.is_finite() && b.th2.is_finite());
}

#[test]
fn test_independent_draws() {
    // with 1000 samples the odds of the two children always matching are nil
    let mut rng = StdRng::seed_from_u64(1);
    let distinct = (0..1000)
        .map(|_| bifurcate(100.0, 7.0, &mut rng))
        .filter(|b| b.d1 != b.d2 || b.l1 != b.l2)
        .count();
    assert!(distinct > 0);
}
