//! Printable bill assembly
//!
//! A bill is the data behind the printed page: letterhead, guest block,
//! stay block, and the folio statement with every figure already
//! computed. Rendering (HTML, print, PDF) is someone else's job; this
//! module only assembles and serializes the content.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use domain_folio::{FolioPresenter, FolioStatement};

use core_kernel::StayDates;

use crate::booking::{Booking, Occupancy, PaymentStatus};
use crate::room::RoomType;

fn generate_bill_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("BILL-{:08}", duration.as_millis() % 100_000_000)
}

/// Which desk moment the bill documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillType {
    /// Issued at reservation, usually showing the advance
    BookingConfirmation,
    /// Issued at checkout with the full folio
    CheckoutBill,
}

impl BillType {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            BillType::BookingConfirmation => "Booking Confirmation",
            BillType::CheckoutBill => "Checkout Bill",
        }
    }
}

/// Letterhead printed at the top of every bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelInfo {
    /// Property name
    pub name: String,
    /// Tagline under the name
    pub tagline: String,
    /// Street address
    pub address: Option<String>,
    /// Front desk phone
    pub phone: Option<String>,
}

impl HotelInfo {
    /// Creates a letterhead with name and tagline
    pub fn new(name: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: tagline.into(),
            address: None,
            phone: None,
        }
    }

    /// Sets the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the front desk phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl Default for HotelInfo {
    fn default() -> Self {
        Self::new("StayManager", "Premium Hospitality")
    }
}

/// The data behind one printed bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Bill number printed on the page
    pub bill_number: String,
    /// Confirmation or checkout
    pub bill_type: BillType,
    /// When the bill was issued
    pub issued_at: DateTime<Utc>,
    /// Letterhead
    pub hotel: HotelInfo,
    /// Guest name
    pub guest_name: String,
    /// Guest contact number
    pub guest_contact: String,
    /// Guest address
    pub guest_address: Option<String>,
    /// Number of guests
    pub occupancy: Occupancy,
    /// Room number
    pub room_no: String,
    /// Room category
    pub room_type: RoomType,
    /// Stay dates
    pub stay: StayDates,
    /// Expected arrival time
    pub check_in_time: NaiveTime,
    /// Expected departure time
    pub check_out_time: NaiveTime,
    /// Settlement state at issue time
    pub payment_status: PaymentStatus,
    /// The folio statement with all figures
    pub statement: FolioStatement,
}

impl Bill {
    /// Assembles a bill for a booking
    ///
    /// # Arguments
    ///
    /// * `booking` - The booking to bill
    /// * `bill_type` - Confirmation or checkout
    /// * `hotel` - Letterhead to print
    pub fn for_booking(booking: &Booking, bill_type: BillType, hotel: HotelInfo) -> Self {
        Self {
            bill_number: generate_bill_number(),
            bill_type,
            issued_at: Utc::now(),
            hotel,
            guest_name: booking.guest().name.clone(),
            guest_contact: booking.guest().mobile_no.clone(),
            guest_address: booking.guest().address.clone(),
            occupancy: booking.occupancy(),
            room_no: booking.room_no().to_string(),
            room_type: booking.room_type(),
            stay: *booking.stay(),
            check_in_time: booking.check_in_time(),
            check_out_time: booking.check_out_time(),
            payment_status: booking.payment_status(),
            statement: FolioPresenter::present(booking.folio()),
        }
    }
}
