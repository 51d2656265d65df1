// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the ramify crate.

//! A module containing boilerplate implementations of standard traits

use crate::{RamifyError, command::Options};
use std::collections::HashMap;

impl Options for HashMap<String, String> {
    /// Will return an option parsed as a `T` or an Err
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, RamifyError> {
        match self.get(key) {
            Some(v) => match v.parse() {
                Ok(val) => Ok(val),
                Err(_) => Err(RamifyError::InvalidParameter(format!(
                    "Invalid value for parameter {{\"{key}\"}}: {{\"{v}\"}}"
                ))),
            },
            None => {
                if let Some(default_value) = default {
                    Ok(default_value)
                } else {
                    Err(RamifyError::MissingParameter(
                        format!("The mandatory parameter \"{key}\" was missing").to_string(),
                    ))
                }
            }
        }
    }

    /// Will return an option parsed as a `T` or None.
    /// If the option is missing None is returned, if it there but if it can't be parsed an error
    /// will be returned.
    fn get_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
    ) -> Result<Option<T>, RamifyError> {
        match self.get(key) {
            Some(v) => match v.parse() {
                Ok(val) => Ok(Some(val)),
                Err(_) => Err(RamifyError::InvalidParameter(format!(
                    "Invalid value for parameter {{\"{key}\"}}: {{\"{v}\"}}"
                ))),
            },
            None => Ok(None),
        }
    }

    /// Returns the &str value of an option, or an Err is it does not exists
    fn get_mandatory_option(&self, key: &str) -> Result<&str, RamifyError> {
        match self.get(key) {
            Some(v) => Ok(v),
            None => Err(RamifyError::MissingParameter(
                format!("The parameter {{\"{key}\"}} was missing").to_string(),
            )),
        }
    }
}
