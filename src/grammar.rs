// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

//! The vessel grammar: one recursive production, expanded into a flat command string.
//!
//! `F(n, l0, d0)` emits a step for the current branch and, while depth remains, two
//! bracketed sub-branches with freshly drawn bifurcation parameters:
//!
//! ```text
//! F(n, l0, d0) => f(l0,d0) [ +(th1) F(n-1, l1, d1) ] [ -(th2) F(n-1, l2, d2) ]
//! F(0, l0, d0) => f(l0,d0)
//! ```
//!
//! Bracket pairs are balanced by construction, so the interpreter's branch stack always
//! drains back to empty. Numeric parameters are embedded through `f64`'s `Display`
//! (shortest round-trip decimal, never scientific notation) and re-parse without loss.


use crate::{
    RamifyError,
    bifurcation::bifurcate,
    turtle::{Segment, Turtle},
};
use rand::Rng;
use std::fmt::Write;

/// A single-rule stochastic L-system describing one vessel tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselGrammar {
    /// remaining recursion depth of the entry rule
    pub depth: u32,
    pub start_length: f64,
    pub start_diameter: f64,
}

impl Default for VesselGrammar {
    fn default() -> Self {
        Self {
            depth: 1,
            start_length: 100.0,
            start_diameter: 7.0,
        }
    }
}

impl VesselGrammar {
    /// Expands the rule into a command string, drawing every branch parameter from `rng`.
    ///
    /// Expansion at the same depth produces a different tree shape each call; determinism
    /// is the caller's business, by way of the RNG it injects.
    pub fn expand<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, RamifyError> {
        if !(self.start_length.is_finite() && self.start_diameter.is_finite()) {
            return Err(RamifyError::FloatNotFinite(format!(
                "start_length:{} start_diameter:{}",
                self.start_length, self.start_diameter
            )));
        }
        if self.start_length < 0.0 || self.start_diameter < 0.0 {
            return Err(RamifyError::InvalidParameter(format!(
                "start_length:{} and start_diameter:{} must not be negative",
                self.start_length, self.start_diameter
            )));
        }
        // one step token per rule invocation, 2^(depth+1)-1 invocations
        let mut commands =
            String::with_capacity(24 * 2_usize.pow(self.depth.min(20) + 1));
        expand_rule(
            self.depth,
            self.start_length,
            self.start_diameter,
            rng,
            &mut commands,
        );
        Ok(commands)
    }

    /// Expands the rule and runs a turtle over the result.
    pub fn exec<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut turtle: Turtle,
    ) -> Result<Vec<Segment>, RamifyError> {
        let commands = self.expand(rng)?;
        turtle.interpret(&commands)?;
        Ok(turtle.into_segments())
    }
}

fn expand_rule<R: Rng + ?Sized>(n: u32, l0: f64, d0: f64, rng: &mut R, out: &mut String) {
    // writing to a String is infallible
    let _ = write!(out, "f({l0},{d0})");
    if n == 0 {
        return;
    }
    let split = bifurcate(l0, d0, rng);

    let _ = write!(out, "[+({})", split.th1);
    expand_rule(n - 1, split.l1, split.d1, rng, out);
    out.push(']');

    let _ = write!(out, "[-({})", split.th2);
    expand_rule(n - 1, split.l2, split.d2, rng, out);
    out.push(']');
}

/// One full generation pass at the given depth, with the stock trunk scale
/// (length 100, diameter 7) and a default turtle.
pub fn generate(depth: u32) -> Result<Vec<Segment>, RamifyError> {
    VesselGrammar {
        depth,
        ..Default::default()
    }
    .exec(&mut rand::rng(), Turtle::default())
}
