//! Front desk workflows
//!
//! `FrontDesk` is the service the desk staff drive: it coordinates the
//! registry, the room lifecycles, and each booking's folio, and emits a
//! tracing event for every step of the guest journey. The calculation
//! code underneath stays silent; this is the one layer that narrates.

use chrono::NaiveDate;
use tracing::{info, instrument};

use core_kernel::{BookingId, Currency, StayDates};
use domain_folio::{ChargeCatalog, ChargeLine, FolioError, Payment, RatePlan};

use crate::bill::{Bill, BillType, HotelInfo};
use crate::booking::{Booking, GuestFeedback, GuestProfile, Occupancy};
use crate::error::DeskError;
use crate::registry::{DeskRegistry, DeskSummary};
use crate::room::{Room, RoomStatus};

/// Everything the desk collects to create a reservation
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    /// Guest details
    pub guest: GuestProfile,
    /// Number of guests
    pub occupancy: Occupancy,
    /// Room number being booked
    pub room_no: String,
    /// Check-in and check-out dates
    pub stay: StayDates,
    /// Where the booking came from
    pub source: Option<String>,
}

impl ReservationRequest {
    /// Creates a reservation request
    pub fn new(
        guest: GuestProfile,
        occupancy: Occupancy,
        room_no: impl Into<String>,
        stay: StayDates,
    ) -> Self {
        Self {
            guest,
            occupancy,
            room_no: room_no.into(),
            stay,
            source: None,
        }
    }

    /// Sets the booking source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// The front desk service
pub struct FrontDesk {
    /// Store of rooms and bookings
    registry: DeskRegistry,
    /// Priced items the desk posts by name
    catalog: ChargeCatalog,
    /// Letterhead for generated bills
    hotel: HotelInfo,
}

impl FrontDesk {
    /// Creates a front desk for the given house currency
    pub fn new(currency: Currency) -> Self {
        Self {
            registry: DeskRegistry::new(currency),
            catalog: ChargeCatalog::standard(),
            hotel: HotelInfo::default(),
        }
    }

    /// Overrides the letterhead printed on bills
    pub fn with_hotel_info(mut self, hotel: HotelInfo) -> Self {
        self.hotel = hotel;
        self
    }

    /// Overrides the charge catalog
    pub fn with_catalog(mut self, catalog: ChargeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Returns the registry for queries
    pub fn registry(&self) -> &DeskRegistry {
        &self.registry
    }

    /// Returns the registry for direct mutation
    pub fn registry_mut(&mut self) -> &mut DeskRegistry {
        &mut self.registry
    }

    /// Returns the letterhead
    pub fn hotel_info(&self) -> &HotelInfo {
        &self.hotel
    }

    /// Registers a room
    #[instrument(skip(self, room), fields(room_no = %room.room_no))]
    pub fn add_room(&mut self, room: Room) -> Result<(), DeskError> {
        self.registry.add_room(room)?;
        info!("Room registered");
        Ok(())
    }

    /// Removes a room that has no guest in it
    #[instrument(skip(self))]
    pub fn remove_room(&mut self, room_no: &str) -> Result<Room, DeskError> {
        let room = self.registry.remove_room(room_no)?;
        info!("Room removed");
        Ok(room)
    }

    /// Marks a room cleaned; a checked-out room becomes available again
    #[instrument(skip(self))]
    pub fn mark_room_cleaned(&mut self, room_no: &str) -> Result<(), DeskError> {
        let room = self
            .registry
            .room_mut(room_no)
            .ok_or_else(|| DeskError::RoomNotFound(room_no.to_string()))?;
        room.mark_cleaned()?;
        info!("Room cleaned");
        Ok(())
    }

    /// Creates a reservation and holds the room
    ///
    /// # Errors
    ///
    /// Returns error if the room does not exist or cannot take a booking
    #[instrument(skip(self, request), fields(room_no = %request.room_no, guest = %request.guest.name))]
    pub fn reserve(&mut self, request: ReservationRequest) -> Result<BookingId, DeskError> {
        let room = self
            .registry
            .room(&request.room_no)
            .ok_or_else(|| DeskError::RoomNotFound(request.room_no.clone()))?;
        if !room.is_available() {
            return Err(DeskError::RoomUnavailable {
                room_no: request.room_no.clone(),
                status: room.status.label().to_string(),
            });
        }
        let room_type = room.room_type;

        let mut booking = Booking::reserve(
            request.guest,
            request.occupancy,
            request.room_no.clone(),
            room_type,
            request.stay,
            self.registry.currency(),
        );
        if let Some(source) = request.source {
            booking = booking.with_source(source);
        }
        let booking_ref = booking.booking_ref().to_string();
        let id = self.registry.add_booking(booking)?;

        if let Some(room) = self.registry.room_mut(&request.room_no) {
            room.reserve()?;
        }

        info!(booking_id = %id, %booking_ref, nights = request.stay.nights(), "Reservation created");
        Ok(id)
    }

    /// Checks a guest in: booking transition, room occupancy, room charge
    ///
    /// The room line is priced from the room's own nightly rate. The
    /// booking is only transitioned once the room is known to be able to
    /// take the guest, so a failure leaves both untouched.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub fn check_in(&mut self, id: BookingId) -> Result<(), DeskError> {
        let (room_no, guest_name, check_out) = {
            let booking = self.booking_entry(id)?;
            (
                booking.room_no().to_string(),
                booking.guest().name.clone(),
                booking.stay().check_out,
            )
        };

        let rate = {
            let room = self
                .registry
                .room(&room_no)
                .ok_or_else(|| DeskError::RoomNotFound(room_no.clone()))?;
            if !room.status.can_transition_to(RoomStatus::CheckedIn) {
                return Err(DeskError::InvalidStatusTransition {
                    from: format!("{:?}", room.status),
                    to: "CheckedIn".to_string(),
                });
            }
            RatePlan::new(room.nightly_rate)
        };

        let booking = self.booking_entry_mut(id)?;
        booking.check_in(&rate)?;
        let room_charge = booking.folio().subtotal();

        if let Some(room) = self.registry.room_mut(&room_no) {
            room.occupy(guest_name, check_out)?;
        }

        info!(%room_no, %room_charge, "Guest checked in");
        Ok(())
    }

    /// Posts a charge to a booking's folio
    #[instrument(skip(self, line), fields(booking_id = %id))]
    pub fn post_charge(&mut self, id: BookingId, line: ChargeLine) -> Result<usize, DeskError> {
        let description = line.description().to_string();
        let amount = line.line_total();
        let booking = self.booking_entry_mut(id)?;
        let position = booking.post_charge(line)?;
        info!(%description, %amount, "Charge posted");
        Ok(position)
    }

    /// Posts a catalog item by name, priced from the house catalog
    ///
    /// # Errors
    ///
    /// Returns error if the item is not in the catalog
    #[instrument(skip(self), fields(booking_id = %id))]
    pub fn post_catalog_charge(
        &mut self,
        id: BookingId,
        item_name: &str,
        quantity: u32,
    ) -> Result<usize, DeskError> {
        let line = self
            .catalog
            .find(item_name)
            .ok_or_else(|| {
                FolioError::InvalidChargeLine(format!("Unknown catalog item '{item_name}'"))
            })?
            .charge_line(quantity)?;
        self.post_charge(id, line)
    }

    /// Records a payment against a booking's folio
    #[instrument(skip(self, payment), fields(booking_id = %id))]
    pub fn record_payment(&mut self, id: BookingId, payment: Payment) -> Result<usize, DeskError> {
        let amount = payment.amount;
        let method = payment.method;
        let booking = self.booking_entry_mut(id)?;
        let position = booking.record_payment(payment)?;
        let balance = booking.folio().balance_due();
        info!(%amount, method = method.label(), %balance, "Payment recorded");
        Ok(position)
    }

    /// Sets the discount on a booking's folio
    #[instrument(skip(self), fields(booking_id = %id))]
    pub fn set_discount(&mut self, id: BookingId, percent: u8) -> Result<(), DeskError> {
        let booking = self.booking_entry_mut(id)?;
        booking.set_discount_percent(percent)?;
        info!(percent, "Discount applied");
        Ok(())
    }

    /// Checks a guest out: optional settlement, feedback, frozen folio,
    /// room handed to housekeeping
    #[instrument(skip(self, final_payment, feedback), fields(booking_id = %id))]
    pub fn check_out(
        &mut self,
        id: BookingId,
        final_payment: Option<Payment>,
        feedback: Option<GuestFeedback>,
        key_returned: bool,
    ) -> Result<(), DeskError> {
        let room_no = self.booking_entry(id)?.room_no().to_string();

        {
            let room = self
                .registry
                .room(&room_no)
                .ok_or_else(|| DeskError::RoomNotFound(room_no.clone()))?;
            if !room.status.can_transition_to(RoomStatus::CheckedOut) {
                return Err(DeskError::InvalidStatusTransition {
                    from: format!("{:?}", room.status),
                    to: "CheckedOut".to_string(),
                });
            }
        }

        let booking = self.booking_entry_mut(id)?;
        booking.check_out(final_payment, feedback, key_returned)?;
        let balance = booking.folio().balance_due();

        if let Some(room) = self.registry.room_mut(&room_no) {
            room.vacate()?;
        }

        info!(%room_no, %balance, key_returned, "Guest checked out");
        Ok(())
    }

    /// Assembles a bill for a booking
    #[instrument(skip(self), fields(booking_id = %id))]
    pub fn generate_bill(&self, id: BookingId, bill_type: BillType) -> Result<Bill, DeskError> {
        let booking = self.booking_entry(id)?;
        let bill = Bill::for_booking(booking, bill_type, self.hotel.clone());
        info!(bill_number = %bill.bill_number, bill_type = bill_type.label(), "Bill generated");
        Ok(bill)
    }

    /// Finds a booking by reference, guest name, phone, or room number
    pub fn find_booking(&self, query: &str) -> Option<&Booking> {
        self.registry.find_booking(query)
    }

    /// Computes the dashboard figures for the given business date
    pub fn summary(&self, on: NaiveDate) -> DeskSummary {
        self.registry.summary(on)
    }

    fn booking_entry(&self, id: BookingId) -> Result<&Booking, DeskError> {
        self.registry
            .booking(id)
            .ok_or_else(|| DeskError::BookingNotFound(id.to_string()))
    }

    fn booking_entry_mut(&mut self, id: BookingId) -> Result<&mut Booking, DeskError> {
        self.registry
            .booking_mut(id)
            .ok_or_else(|| DeskError::BookingNotFound(id.to_string()))
    }
}
