//! Room rate plans
//!
//! Prices a stay into a single Room charge line: nightly rate times
//! billable nights, with the one-night floor coming from the stay
//! dates themselves.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, StayDates};

use crate::charge::{ChargeCategory, ChargeLine};
use crate::error::FolioError;

/// A nightly room rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlan {
    nightly_rate: Money,
}

impl RatePlan {
    /// Creates a rate plan from a nightly rate
    pub fn new(nightly_rate: Money) -> Self {
        Self { nightly_rate }
    }

    /// Returns the nightly rate
    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    /// Prices a stay given raw `YYYY-MM-DD` strings from a booking form
    ///
    /// Unparseable dates fail with an invalid date range error; a
    /// checkout on or before check-in simply prices as one night.
    pub fn compute_room_line(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<ChargeLine, FolioError> {
        let stay = StayDates::parse(check_in, check_out)?;
        self.room_line(&stay)
    }

    /// Prices an already-parsed stay
    pub fn room_line(&self, stay: &StayDates) -> Result<ChargeLine, FolioError> {
        let nights = stay.nights();
        ChargeLine::new(
            format!("Room charges ({} nights × {})", nights, self.nightly_rate),
            self.nightly_rate,
            nights,
            ChargeCategory::Room,
        )
    }
}
