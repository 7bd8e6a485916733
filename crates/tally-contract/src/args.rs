//! Positional argument handling for contract operations.
//!
//! The host hands every operation a flat list of strings. Arity is checked
//! up front; numeric fields are parsed strictly, so a malformed value is an
//! argument error naming the field rather than a silently zeroed quantity.

use std::str::FromStr;

use crate::error::{ContractError, ContractResult};

/// A positional argument list with checked arity.
///
/// # Examples
///
/// ```
/// use tally_contract::args::Args;
///
/// let raw = vec!["100".to_string(), "20".to_string()];
/// let args = Args::exactly(&raw, 2, "sellFromInventory").unwrap();
/// assert_eq!(args.raw(0), "100");
/// assert_eq!(args.parse::<u32>(1, "quantity").unwrap(), 20);
/// assert!(Args::exactly(&raw, 9, "addInventory").is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    values: &'a [String],
}

impl<'a> Args<'a> {
    /// Check that exactly `expected` arguments were supplied.
    pub fn exactly(
        values: &'a [String],
        expected: usize,
        operation: &str,
    ) -> ContractResult<Self> {
        if values.len() != expected {
            return Err(ContractError::InvalidArguments(format!(
                "{operation} expects {expected} arguments, got {}",
                values.len()
            )));
        }
        Ok(Self { values })
    }

    /// The raw string at a position.
    ///
    /// Positions are fixed per operation and checked by [`Self::exactly`],
    /// so indexing past the end is a programming error and panics.
    pub fn raw(&self, index: usize) -> &'a str {
        &self.values[index]
    }

    /// Parse the value at a position, naming the field on failure.
    pub fn parse<T: FromStr>(&self, index: usize, field: &str) -> ContractResult<T> {
        let raw = self.raw(index);
        raw.parse().map_err(|_| {
            ContractError::InvalidArguments(format!(
                "{field} must be an unsigned integer, got {raw:?}"
            ))
        })
    }
}
