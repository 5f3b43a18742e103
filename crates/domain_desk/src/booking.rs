//! Booking aggregate
//!
//! A booking ties one guest party to one room for one stay, and owns the
//! folio that accumulates every charge and payment for that stay. The
//! booking lifecycle (reserved, checked-in, checked-out) is separate from
//! the room's own status; the front desk keeps the two in step.
//!
//! # State Machine
//!
//! Valid transitions:
//! - Reserved -> CheckedIn (via check_in)
//! - CheckedIn -> CheckedOut (via check_out)
//!
//! Checking out freezes the folio; a checked-out booking is a closed,
//! read-only record.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, Currency, StayDates};
use domain_folio::{ChargeLine, Folio, Payment, RatePlan};

use crate::error::DeskError;
use crate::room::RoomType;

/// Default arrival time when none is given (2 PM)
fn default_check_in_time() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default()
}

/// Default departure time when none is given (11 AM)
fn default_check_out_time() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default()
}

fn generate_booking_ref() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("BKG-{}", duration.as_millis() % 10_000_000_000)
}

/// Identity document presented by the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdProof {
    /// Document kind (passport, Aadhaar, driving licence, ...)
    pub proof_type: String,
    /// Document number
    pub number: String,
}

impl IdProof {
    /// Creates a new ID proof record
    pub fn new(proof_type: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            proof_type: proof_type.into(),
            number: number.into(),
        }
    }
}

/// Guest details captured at reservation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestProfile {
    /// Guest name
    pub name: String,
    /// Mobile number, used by the desk search
    pub mobile_no: String,
    /// Email address
    pub email: Option<String>,
    /// Home address
    pub address: Option<String>,
    /// City the guest arrived from
    pub arrived_from: Option<String>,
    /// Purpose of visit
    pub purpose_of_visit: Option<String>,
    /// Identity document
    pub id_proof: Option<IdProof>,
}

impl GuestProfile {
    /// Creates a profile with the two fields the desk always collects
    pub fn new(name: impl Into<String>, mobile_no: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile_no: mobile_no.into(),
            email: None,
            address: None,
            arrived_from: None,
            purpose_of_visit: None,
            id_proof: None,
        }
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the home address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the city the guest arrived from
    pub fn with_arrived_from(mut self, place: impl Into<String>) -> Self {
        self.arrived_from = Some(place.into());
        self
    }

    /// Sets the purpose of visit
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose_of_visit = Some(purpose.into());
        self
    }

    /// Sets the identity document
    pub fn with_id_proof(mut self, proof: IdProof) -> Self {
        self.id_proof = Some(proof);
        self
    }
}

/// Number of guests in the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Adults, at least one
    pub adults: u32,
    /// Children
    pub children: u32,
}

impl Occupancy {
    /// Creates an occupancy record; a booking always has at least one adult
    pub fn new(adults: u32, children: u32) -> Self {
        Self {
            adults: adults.max(1),
            children,
        }
    }

    /// Total number of guests
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// Feedback left by the guest at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestFeedback {
    /// Star rating from 1 to 5
    pub rating: u8,
    /// Free-text comment
    pub comment: Option<String>,
}

impl GuestFeedback {
    /// Creates a feedback record, clamping the rating to the 1-5 scale
    pub fn new(rating: u8) -> Self {
        Self {
            rating: rating.clamp(1, 5),
            comment: None,
        }
    }

    /// Attaches a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Booking lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Booked, guest not yet arrived
    Reserved,
    /// Guest is staying
    CheckedIn,
    /// Stay is over, folio frozen
    CheckedOut,
}

impl BookingStatus {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Reserved => "Reserved",
            BookingStatus::CheckedIn => "Checked-In",
            BookingStatus::CheckedOut => "Checked-Out",
        }
    }
}

/// Settlement state derived from the folio, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing outstanding
    Paid,
    /// Some money received, balance remains
    Partial,
    /// No money received yet
    Pending,
}

impl PaymentStatus {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Pending => "Pending",
        }
    }
}

/// A guest booking and its folio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier
    id: BookingId,
    /// Human-readable booking reference
    booking_ref: String,
    /// Guest details
    guest: GuestProfile,
    /// Number of guests
    occupancy: Occupancy,
    /// Room number
    room_no: String,
    /// Room category
    room_type: RoomType,
    /// Stay dates
    stay: StayDates,
    /// Expected arrival time
    check_in_time: NaiveTime,
    /// Expected departure time
    check_out_time: NaiveTime,
    /// Where the booking came from (walk-in, phone, online, ...)
    source: Option<String>,
    /// Current lifecycle state
    status: BookingStatus,
    /// Whether the room key was returned at checkout
    key_returned: bool,
    /// Feedback captured at checkout
    feedback: Option<GuestFeedback>,
    /// The per-stay charge ledger
    folio: Folio,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a reservation and opens its folio
    ///
    /// # Arguments
    ///
    /// * `guest` - Guest details
    /// * `occupancy` - Number of guests
    /// * `room_no` - Room number being booked
    /// * `room_type` - Category of that room
    /// * `stay` - Check-in and check-out dates
    /// * `currency` - Currency the folio will bill in
    pub fn reserve(
        guest: GuestProfile,
        occupancy: Occupancy,
        room_no: impl Into<String>,
        room_type: RoomType,
        stay: StayDates,
        currency: Currency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BookingId::new_v7(),
            booking_ref: generate_booking_ref(),
            guest,
            occupancy,
            room_no: room_no.into(),
            room_type,
            stay,
            check_in_time: default_check_in_time(),
            check_out_time: default_check_out_time(),
            source: None,
            status: BookingStatus::Reserved,
            key_returned: false,
            feedback: None,
            folio: Folio::open(currency),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the booking source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Overrides the expected arrival and departure times
    pub fn with_times(mut self, check_in: NaiveTime, check_out: NaiveTime) -> Self {
        self.check_in_time = check_in;
        self.check_out_time = check_out;
        self
    }

    /// Returns the booking ID
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the human-readable booking reference
    pub fn booking_ref(&self) -> &str {
        &self.booking_ref
    }

    /// Returns the guest details
    pub fn guest(&self) -> &GuestProfile {
        &self.guest
    }

    /// Returns the occupancy
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Returns the room number
    pub fn room_no(&self) -> &str {
        &self.room_no
    }

    /// Returns the room category
    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the stay dates
    pub fn stay(&self) -> &StayDates {
        &self.stay
    }

    /// Returns the expected arrival time
    pub fn check_in_time(&self) -> NaiveTime {
        self.check_in_time
    }

    /// Returns the expected departure time
    pub fn check_out_time(&self) -> NaiveTime {
        self.check_out_time
    }

    /// Returns the booking source
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the current lifecycle state
    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns whether the room key was returned
    pub fn key_returned(&self) -> bool {
        self.key_returned
    }

    /// Returns the checkout feedback, if any
    pub fn feedback(&self) -> Option<&GuestFeedback> {
        self.feedback.as_ref()
    }

    /// Returns the folio
    pub fn folio(&self) -> &Folio {
        &self.folio
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the number of billable nights
    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }

    /// Checks if the guest is currently staying
    pub fn is_checked_in(&self) -> bool {
        self.status == BookingStatus::CheckedIn
    }

    /// Settlement state derived from the folio balance
    pub fn payment_status(&self) -> PaymentStatus {
        if !self.folio.balance_due().is_positive() {
            PaymentStatus::Paid
        } else if !self.folio.total_paid().is_zero() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }

    /// Checks the guest in and posts the room charge
    ///
    /// The nightly rate comes from the room, so the desk passes it in as
    /// a rate plan. Returns the position of the posted room line.
    ///
    /// # Errors
    ///
    /// Returns error if the booking is not in Reserved state
    pub fn check_in(&mut self, rate: &RatePlan) -> Result<usize, DeskError> {
        match self.status {
            BookingStatus::Reserved => {
                let line = rate.room_line(&self.stay)?;
                let position = self.folio.add_line(line)?;
                self.status = BookingStatus::CheckedIn;
                self.updated_at = Utc::now();
                Ok(position)
            }
            _ => Err(DeskError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: "CheckedIn".to_string(),
            }),
        }
    }

    /// Posts a charge to the folio
    pub fn post_charge(&mut self, line: ChargeLine) -> Result<usize, DeskError> {
        let position = self.folio.add_line(line)?;
        self.updated_at = Utc::now();
        Ok(position)
    }

    /// Reverses a previously posted charge
    pub fn reverse_charge(&mut self, position: usize) -> Result<usize, DeskError> {
        let reversal = self.folio.reverse_line(position)?;
        self.updated_at = Utc::now();
        Ok(reversal)
    }

    /// Records a payment against the folio
    pub fn record_payment(&mut self, payment: Payment) -> Result<usize, DeskError> {
        let position = self.folio.add_payment(payment)?;
        self.updated_at = Utc::now();
        Ok(position)
    }

    /// Sets the folio discount percentage
    pub fn set_discount_percent(&mut self, percent: u8) -> Result<(), DeskError> {
        self.folio.set_discount_percent(percent)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks the guest out and freezes the folio
    ///
    /// An optional final payment is recorded before freezing, so the desk
    /// can settle the balance and close in one step. If that payment is
    /// invalid, the booking is left untouched.
    ///
    /// # Arguments
    ///
    /// * `final_payment` - Settlement collected at the desk, if any
    /// * `feedback` - Guest feedback, if any
    /// * `key_returned` - Whether the room key came back
    ///
    /// # Errors
    ///
    /// Returns error if the booking is not in CheckedIn state
    pub fn check_out(
        &mut self,
        final_payment: Option<Payment>,
        feedback: Option<GuestFeedback>,
        key_returned: bool,
    ) -> Result<(), DeskError> {
        match self.status {
            BookingStatus::CheckedIn => {
                if let Some(payment) = final_payment {
                    self.folio.add_payment(payment)?;
                }
                self.folio.freeze()?;
                self.feedback = feedback;
                self.key_returned = key_returned;
                self.status = BookingStatus::CheckedOut;
                self.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(DeskError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: "CheckedOut".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_folio::{ChargeCategory, PaymentMethod};

    fn inr(minor: i64) -> Money {
        Money::from_minor(minor, Currency::INR)
    }

    fn test_booking() -> Booking {
        Booking::reserve(
            GuestProfile::new("Rahul Sharma", "9876543210"),
            Occupancy::new(2, 1),
            "101",
            RoomType::Standard,
            StayDates::parse("2025-01-10", "2025-01-13").unwrap(),
            Currency::INR,
        )
    }

    fn standard_rate() -> RatePlan {
        RatePlan::new(Money::from_major(1500, Currency::INR))
    }

    #[test]
    fn test_reservation_opens_an_empty_folio() {
        let booking = test_booking();

        assert_eq!(booking.status(), BookingStatus::Reserved);
        assert!(booking.booking_ref().starts_with("BKG-"));
        assert_eq!(booking.nights(), 3);
        assert!(booking.folio().lines().is_empty());
        assert_eq!(booking.folio().currency(), Currency::INR);
        assert_eq!(booking.payment_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_default_times() {
        let booking = test_booking();

        assert_eq!(
            booking.check_in_time(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert_eq!(
            booking.check_out_time(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_check_in_posts_the_room_line() {
        let mut booking = test_booking();
        let position = booking.check_in(&standard_rate()).unwrap();

        assert_eq!(booking.status(), BookingStatus::CheckedIn);
        assert_eq!(position, 0);
        assert_eq!(booking.folio().subtotal(), inr(450000));
        assert_eq!(
            booking.folio().line(0).unwrap().category(),
            ChargeCategory::Room
        );
    }

    #[test]
    fn test_double_check_in_fails() {
        let mut booking = test_booking();
        booking.check_in(&standard_rate()).unwrap();

        let result = booking.check_in(&standard_rate());
        assert!(matches!(
            result,
            Err(DeskError::InvalidStatusTransition { .. })
        ));
        // the room line was not posted twice
        assert_eq!(booking.folio().lines().len(), 1);
    }

    #[test]
    fn test_payment_status_progression() {
        let mut booking = test_booking();
        booking.check_in(&standard_rate()).unwrap();
        assert_eq!(booking.payment_status(), PaymentStatus::Pending);

        booking
            .record_payment(Payment::new(inr(200000), PaymentMethod::Upi))
            .unwrap();
        assert_eq!(booking.payment_status(), PaymentStatus::Partial);

        booking
            .record_payment(Payment::new(inr(250000), PaymentMethod::Cash))
            .unwrap();
        assert_eq!(booking.payment_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_check_out_freezes_the_folio() {
        let mut booking = test_booking();
        booking.check_in(&standard_rate()).unwrap();

        booking
            .check_out(
                Some(Payment::new(inr(450000), PaymentMethod::Card)),
                Some(GuestFeedback::new(5).with_comment("Great stay")),
                true,
            )
            .unwrap();

        assert_eq!(booking.status(), BookingStatus::CheckedOut);
        assert!(booking.folio().is_frozen());
        assert!(booking.key_returned());
        assert_eq!(booking.feedback().unwrap().rating, 5);
        assert_eq!(booking.payment_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_check_out_without_check_in_fails() {
        let mut booking = test_booking();
        let result = booking.check_out(None, None, false);

        assert!(matches!(
            result,
            Err(DeskError::InvalidStatusTransition { .. })
        ));
        assert!(!booking.folio().is_frozen());
    }

    #[test]
    fn test_invalid_final_payment_aborts_check_out() {
        let mut booking = test_booking();
        booking.check_in(&standard_rate()).unwrap();

        let result = booking.check_out(
            Some(Payment::new(inr(-100), PaymentMethod::Cash)),
            None,
            true,
        );

        assert!(result.is_err());
        assert_eq!(booking.status(), BookingStatus::CheckedIn);
        assert!(!booking.folio().is_frozen());
    }

    #[test]
    fn test_charges_after_check_out_are_rejected() {
        let mut booking = test_booking();
        booking.check_in(&standard_rate()).unwrap();
        booking.check_out(None, None, true).unwrap();

        let line =
            ChargeLine::new("Late tea", inr(2000), 1, ChargeCategory::Beverage).unwrap();
        assert!(matches!(
            booking.post_charge(line),
            Err(DeskError::Folio(_))
        ));
    }

    #[test]
    fn test_occupancy_floors_at_one_adult() {
        let occupancy = Occupancy::new(0, 2);
        assert_eq!(occupancy.adults, 1);
        assert_eq!(occupancy.total(), 3);
    }

    #[test]
    fn test_feedback_rating_is_clamped() {
        assert_eq!(GuestFeedback::new(0).rating, 1);
        assert_eq!(GuestFeedback::new(9).rating, 5);
    }

    #[test]
    fn test_guest_profile_builders() {
        let guest = GuestProfile::new("Priya Patel", "9812345678")
            .with_email("priya@example.com")
            .with_arrived_from("Mumbai")
            .with_purpose("Business")
            .with_id_proof(IdProof::new("Aadhaar", "1234-5678-9012"));

        assert_eq!(guest.email.as_deref(), Some("priya@example.com"));
        assert_eq!(guest.arrived_from.as_deref(), Some("Mumbai"));
        assert_eq!(guest.id_proof.unwrap().proof_type, "Aadhaar");
    }

    #[test]
    fn test_booking_serde_round_trip() {
        let booking = test_booking().with_source("Walk-in");

        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), booking.id());
        assert_eq!(back.booking_ref(), booking.booking_ref());
        assert_eq!(back.source(), Some("Walk-in"));
        assert_eq!(back.status(), BookingStatus::Reserved);
    }
}
