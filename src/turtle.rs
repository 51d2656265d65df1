// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

//! The command-string interpreter: a 2D turtle with a branch stack.
//!
//! The command string is scanned left to right with `logos`. Step and turn tokens carry
//! their parameters inline (`f(length,diameter)`, `+(angle)`, `-(angle)`); `[` and `]`
//! open and close a branch by pushing and popping the turtle state. Any other character
//! is a formatting no-op, so the expander is free to decorate its output.


use crate::RamifyError;
use logos::Logos;
use smallvec::SmallVec;
use vector_traits::glam::{DMat2, DVec2};

fn parse_step(lex: &mut logos::Lexer<'_, Command>) -> Option<(f64, f64)> {
    let slice = lex.slice();
    // strip "f(" and ")"
    let (length, diameter) = slice[2..slice.len() - 1].split_once(',')?;
    Some((length.parse().ok()?, diameter.parse().ok()?))
}

fn parse_turn(lex: &mut logos::Lexer<'_, Command>) -> Option<f64> {
    let slice = lex.slice();
    // strip "+(" or "-(" and ")"
    slice[2..slice.len() - 1].parse().ok()
}

/// One turtle command as it appears in the command string. Numeric literals are
/// non-negative decimals; the turn sign is carried by the operator character.
#[derive(Logos, Debug, PartialEq)]
pub enum Command {
    /// `f(length,diameter)`: step forward, emitting a segment
    #[regex(r"f\([0-9]+(\.[0-9]+)?,[0-9]+(\.[0-9]+)?\)", parse_step)]
    Step((f64, f64)),

    /// `+(angle)`: turn clockwise by `angle` degrees
    #[regex(r"\+\([0-9]+(\.[0-9]+)?\)", parse_turn)]
    TurnCw(f64),

    /// `-(angle)`: turn counterclockwise by `angle` degrees
    #[regex(r"-\([0-9]+(\.[0-9]+)?\)", parse_turn)]
    TurnCcw(f64),

    /// `[`: open a branch
    #[token("[")]
    Push,

    /// `]`: close a branch
    #[token("]")]
    Pop,
}

/// A structure defining the full state of the turtle at one point of the walk.
///
/// `diameter` is set lazily: it stays at its initial value until the first step executed
/// in this state, and is only ever read back through the stack, as "the diameter of the
/// branch a child forked from".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub position: DVec2,
    pub direction: DVec2,
    pub diameter: f64,
}

/// One drawable tapered branch piece.
///
/// `previous_diameter` is the diameter of the parent branch at the fork point, or
/// 1.5× the segment's own diameter for a root segment. Interpolating from it down to
/// `diameter` gives the smooth thick-to-thin taper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: DVec2,
    pub target: DVec2,
    pub diameter: f64,
    pub previous_diameter: f64,
}

pub struct Turtle {
    state: TurtleState,
    stack: SmallVec<[TurtleState; 8]>,
    result: Vec<Segment>,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            state: TurtleState {
                position: DVec2::ZERO,
                // "down" the growth axis
                direction: DVec2::Y,
                diameter: 0.0,
            },
            stack: SmallVec::new(),
            result: Vec::new(),
        }
    }
}

impl Turtle {
    /// A turtle starting at `position` heading `direction`. The drawing shell will
    /// typically pass the horizontal center of its viewport here.
    pub fn with_start(position: DVec2, direction: DVec2) -> Self {
        Self {
            state: TurtleState {
                position,
                direction,
                diameter: 0.0,
            },
            ..Self::default()
        }
    }

    /// Apply a single turtle command
    fn apply(&mut self, command: &Command) -> Result<(), RamifyError> {
        match command {
            Command::Step((length, diameter)) => {
                let origin = self.state.position;
                let target = origin + self.state.direction * *length;
                let previous_diameter = match self.stack.last() {
                    Some(parent) => parent.diameter,
                    // root branch, nothing to taper from
                    None => 1.5 * diameter,
                };
                self.state.diameter = *diameter;
                self.state.position = target;
                self.result.push(Segment {
                    origin,
                    target,
                    diameter: *diameter,
                    previous_diameter,
                });
            }
            Command::TurnCw(angle) => self.turn(*angle),
            Command::TurnCcw(angle) => self.turn(-*angle),
            Command::Push => self.stack.push(self.state),
            Command::Pop => {
                self.state = self.stack.pop().ok_or_else(|| {
                    RamifyError::StackUnderflow("Could not pop branch stack".to_string())
                })?;
            }
        };
        Ok(())
    }

    /// `direction' = R(θ)·direction`. The direction is intentionally not renormalized;
    /// rotation matrices are orthonormal, so its magnitude only drifts within float
    /// rounding.
    fn turn(&mut self, angle_deg: f64) {
        self.state.direction = DMat2::from_angle(angle_deg.to_radians()) * self.state.direction;
    }

    /// Walks the whole command string, accumulating segments.
    ///
    /// A malformed `f`/`+`/`-` token is a `ParseError` and an unmatched `]` is a
    /// `StackUnderflow`; both indicate a bug in whatever generated the string and
    /// abort the walk immediately. Unrecognized characters are skipped.
    pub fn interpret(&mut self, commands: &str) -> Result<(), RamifyError> {
        let mut lex = Command::lexer(commands);
        while let Some(token) = lex.next() {
            match token {
                Ok(command) => self.apply(&command)?,
                Err(()) => {
                    // a failed lex starting at an `f`, `+` or `-` means a malformed
                    // operator token; anything else is stray formatting
                    let slice = lex.slice();
                    if slice.contains(['f', '+', '-']) {
                        return Err(RamifyError::ParseError(format!(
                            "Malformed token {:?} at offset {}",
                            slice,
                            lex.span().start
                        )));
                    }
                    // any other character is a no-op
                }
            }
        }
        Ok(())
    }

    /// The current turtle state
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// Number of open branches. Zero before and after interpreting any well-formed
    /// command string.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The segments accumulated so far, in generation order
    pub fn segments(&self) -> &[Segment] {
        &self.result
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.result
    }
}
