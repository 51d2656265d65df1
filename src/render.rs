// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

//! The boundary handed to the drawing shell: each segment becomes a run of filled
//! circles with linearly interpolated position and diameter. Longer segments get more
//! dots, roughly one per length unit, so the taper reads as a continuous gradient.

#[cfg(test)]
mod tests;

use crate::turtle::Segment;
use vector_traits::glam::DVec2;

/// One filled circle, ready for the shell's stamping primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: DVec2,
    pub diameter: f64,
}

/// Samples a single segment into dots.
///
/// At sample fraction `t` the position is lerped origin→target and the diameter
/// `previous_diameter`→`diameter`. A zero-length segment yields exactly one dot, never
/// a division by zero, and a non-finite segment renders as nothing at all: degenerate
/// segments keep their place in the segment list for topology's sake, but they must
/// not be able to crash the shell.
pub fn sample_segment(segment: &Segment) -> Vec<Dot> {
    if !(segment.origin.is_finite() && segment.target.is_finite()) {
        return Vec::new();
    }
    let vector = segment.target - segment.origin;
    let length = vector.length();
    if length == 0.0 {
        return vec![Dot {
            center: segment.origin,
            diameter: segment.previous_diameter,
        }];
    }
    let iterations = length.ceil() as usize;
    let mut dots = Vec::with_capacity(iterations + 1);
    for i in 0..=iterations {
        let t = i as f64 / iterations as f64;
        dots.push(Dot {
            center: segment.origin + vector * t,
            diameter: segment.previous_diameter * (1.0 - t) + segment.diameter * t,
        });
    }
    dots
}

/// Samples a whole pass worth of segments, in generation order.
pub fn sample(segments: &[Segment]) -> Vec<Dot> {
    segments.iter().flat_map(sample_segment).collect()
}
