// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

//! The stateless boundary towards the drawing shell: string-map configs in, plain
//! segment/dot lists out. The shell owns the recursion-depth counter and passes it in
//! on every call; nothing in here survives from one pass to the next.

mod cmd_generate;
mod cmd_render;
mod trait_impl;

use crate::{RamifyError, render::Dot, turtle::Segment};
use std::collections::HashMap;

/// The config key whose value selects the operation to run
pub const COMMAND_TAG: &str = "command";
/// The returned config key describing what the result buffers contain
pub const FORMAT_TAG: &str = "format";

pub type ConfigType = HashMap<String, String>;

/// Segments, dots (empty unless the command renders) and a result config
pub type CommandResult = (Vec<Segment>, Vec<Dot>, ConfigType);

trait Options {
    /// Will return an option parsed as a `T` or an Err
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, RamifyError>;

    /// Will return an option parsed as a `T` or None.
    /// If the option is missing None is returned, if it there but if it can't be parsed an error
    /// will be returned.
    fn get_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
    ) -> Result<Option<T>, RamifyError>;

    /// Returns the &str value of an option, or an Err is it does not exists
    fn get_mandatory_option(&self, key: &str) -> Result<&str, RamifyError>;
}

/// This is the main shell entry point, all commands are routed through this API
pub fn process_command(config: ConfigType) -> Result<CommandResult, RamifyError> {
    match config.get_mandatory_option(COMMAND_TAG)? {
        "generate" => cmd_generate::process_command(config),
        "render" => cmd_render::process_command(config),
        illegal_command => Err(RamifyError::InvalidParameter(format!(
            "Invalid command:{}",
            illegal_command
        ))),
    }
}
