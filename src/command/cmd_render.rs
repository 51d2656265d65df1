// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.


use super::{CommandResult, ConfigType};
use crate::{RamifyError, render};
use std::time;

/// Run the render command: one full generate-and-stamp pass, the segments plus the dot
/// list the shell will draw them as.
pub(crate) fn process_command(input_config: ConfigType) -> Result<CommandResult, RamifyError> {
    let (grammar, turtle) = super::cmd_generate::parse_options(&input_config)?;

    let now = time::Instant::now();
    let segments = grammar.exec(&mut rand::rng(), turtle)?;
    let dots = render::sample(&segments);
    println!(
        "cmd_render: {} segments, {} dots, duration: {:?}",
        segments.len(),
        dots.len(),
        now.elapsed()
    );

    let mut return_config = ConfigType::new();
    let _ = return_config.insert(super::FORMAT_TAG.to_string(), "dots".to_string());
    Ok((segments, dots, return_config))
}
