// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.


use super::{CommandResult, ConfigType, Options};
use crate::{RamifyError, grammar::VesselGrammar, turtle::Turtle};
use itertools::Itertools;
use std::time;
use vector_traits::glam::DVec2;

pub(crate) const DEFAULT_START_LENGTH: f64 = 100.0;
pub(crate) const DEFAULT_START_DIAMETER: f64 = 7.0;

/// Builds the grammar and the start state out of the config options.
///
/// `depth` is mandatory; `start_length`, `start_diameter` and `width` have the stock
/// defaults. The trunk grows downwards from the horizontal center of the shell's
/// viewport, `(width / 2, 0)`.
pub(crate) fn parse_options(
    input_config: &ConfigType,
) -> Result<(VesselGrammar, Turtle), RamifyError> {
    let depth: u32 = input_config.get_mandatory_parsed_option("depth", None)?;
    let start_length: f64 =
        input_config.get_mandatory_parsed_option("start_length", Some(DEFAULT_START_LENGTH))?;
    let start_diameter: f64 =
        input_config.get_mandatory_parsed_option("start_diameter", Some(DEFAULT_START_DIAMETER))?;
    let width: f64 = input_config.get_mandatory_parsed_option("width", Some(0.0))?;
    if !width.is_finite() || width < 0.0 {
        return Err(RamifyError::InvalidParameter(format!(
            "The viewport width must be a non-negative finite value, got {width}"
        )));
    }

    let grammar = VesselGrammar {
        depth,
        start_length,
        start_diameter,
    };
    let turtle = Turtle::with_start(DVec2::new(width / 2.0, 0.0), DVec2::Y);
    Ok((grammar, turtle))
}

/// Run the generate command: expand the grammar and interpret it into segments.
pub(crate) fn process_command(input_config: ConfigType) -> Result<CommandResult, RamifyError> {
    let (grammar, turtle) = parse_options(&input_config)?;
    let verbose = input_config.get_parsed_option::<bool>("verbose")?.unwrap_or(false);

    let now = time::Instant::now();
    let segments = grammar.exec(&mut rand::rng(), turtle)?;
    println!(
        "cmd_generate: {} segments at depth {}, duration: {:?}",
        segments.len(),
        grammar.depth,
        now.elapsed()
    );
    if verbose {
        if let Some((thinnest, thickest)) = segments
            .iter()
            .map(|segment| segment.diameter)
            .minmax()
            .into_option()
        {
            println!("cmd_generate: diameter range {thinnest}..{thickest}");
        }
    }

    let mut return_config = ConfigType::new();
    let _ = return_config.insert(super::FORMAT_TAG.to_string(), "segments".to_string());
    Ok((segments, Vec::new(), return_config))
}
