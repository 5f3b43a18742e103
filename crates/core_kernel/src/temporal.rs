//! Stay date handling
//!
//! This module provides the check-in/check-out date pair used to price
//! a stay. Nights are whole days with a one-night floor, so a same-day
//! checkout still bills a single night.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to stay date handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid stay date '{value}', expected YYYY-MM-DD")]
    InvalidDateRange { value: String },
}

/// A check-in/check-out date pair
///
/// The pair itself accepts any ordering; an inverted or same-day range
/// simply prices as one night. Only unparseable date text is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Creates a stay from already-parsed dates
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Parses a stay from ISO `YYYY-MM-DD` strings, as submitted by the
    /// booking forms
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, TemporalError> {
        Ok(Self {
            check_in: parse_date(check_in)?,
            check_out: parse_date(check_out)?,
        })
    }

    /// Number of billable nights: whole days between the dates, floored
    /// at one night
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(1) as u32
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| TemporalError::InvalidDateRange {
        value: value.to_string(),
    })
}
