// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

use super::{sample, sample_segment};
use crate::turtle::Segment;
use vector_traits::{approx::*, glam::DVec2};

fn segment(origin: DVec2, target: DVec2, diameter: f64, previous_diameter: f64) -> Segment {
    Segment {
        origin,
        target,
        diameter,
        previous_diameter,
    }
}

#[test]
fn test_taper_interpolation() {
    let dots = sample_segment(&segment(
        DVec2::ZERO,
        DVec2::new(0.0, 10.0),
        4.0,
        6.0,
    ));
    // one dot per length unit, plus the endpoint
    assert_eq!(dots.len(), 11);

    // endpoints: full parent diameter in, own diameter out
    assert_eq!(dots[0].center, DVec2::ZERO);
    assert_eq!(dots[0].diameter, 6.0);
    let last = dots.last().unwrap();
    assert_abs_diff_eq!(last.center.y, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.diameter, 4.0, epsilon = 1e-9);

    // monotone taper in between
    for pair in dots.windows(2) {
        assert!(pair[1].diameter <= pair[0].diameter);
        assert!(pair[1].center.y >= pair[0].center.y);
    }
}

#[test]
fn test_dot_count_scales_with_length() {
    let short = sample_segment(&segment(DVec2::ZERO, DVec2::new(0.0, 3.0), 1.0, 1.5));
    let long = sample_segment(&segment(DVec2::ZERO, DVec2::new(0.0, 300.0), 1.0, 1.5));
    assert!(long.len() > short.len());
    assert_eq!(long.len(), 301);
}

#[test]
fn test_zero_length_segment() {
    let origin = DVec2::new(5.0, 5.0);
    let dots = sample_segment(&segment(origin, origin, 4.0, 6.0));
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].center, origin);
    assert_eq!(dots[0].diameter, 6.0);
}

#[test]
fn test_non_finite_segment_is_a_noop() {
    let dots = sample_segment(&segment(
        DVec2::ZERO,
        DVec2::new(f64::NAN, 1.0),
        4.0,
        6.0,
    ));
    assert!(dots.is_empty());
}

#[test]
fn test_sample_preserves_generation_order() {
    let segments = [
        segment(DVec2::ZERO, DVec2::new(0.0, 2.0), 1.0, 1.5),
        segment(DVec2::new(0.0, 2.0), DVec2::new(0.0, 4.0), 0.5, 1.0),
    ];
    let dots = sample(&segments);
    assert_eq!(dots.len(), 6);
    // the second segment's dots follow the first's
    assert_eq!(dots[0].diameter, 1.5);
    assert_eq!(dots[3].diameter, 1.0);
}
