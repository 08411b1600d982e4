// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing user-supplied number lists.
//!
//! The engines accept any finite `f64`; this is the only place that decides
//! whether text becomes an engine input. Tokens are separated by any run of
//! whitespace and/or commas, so `"5, 3 8,,1"` is four numbers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Why a list could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input held no numbers at all.
    Empty,
    /// A token is not a finite number.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("enter numbers separated by commas or spaces"),
            Self::NotANumber(token) => write!(f, "\"{token}\" is not a number"),
        }
    }
}

impl core::error::Error for InputError {}

/// Parses a comma- and/or whitespace-separated list of finite numbers.
///
/// # Errors
///
/// Returns [`InputError::Empty`] if there are no tokens, or
/// [`InputError::NotANumber`] for the first token that does not parse as a
/// finite `f64` (`NaN` and infinities are rejected).
pub fn parse_sequence(input: &str) -> Result<Vec<f64>, InputError> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InputError::NotANumber(token.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}
