//! Booking a court slot.

use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::error::Result;
use crate::refund::RESERVATION_PRICE;
use crate::reservation::{GuestId, Reservation, ScheduleId};
use crate::schedule::{require_schedule, ScheduleLookup};

use super::plan::{OperationPlan, PlanAction};

/// Options for a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOptions {
    /// The guest booking the slot.
    pub guest_id: GuestId,

    /// The slot to book.
    pub schedule_id: ScheduleId,

    /// The amount charged.
    pub price: Decimal,
}

impl BookOptions {
    /// Creates options charging [`RESERVATION_PRICE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use courtside::operations::BookOptions;
    /// use courtside::{GuestId, ScheduleId, RESERVATION_PRICE};
    ///
    /// let options = BookOptions::new(GuestId::new(1), ScheduleId::new(3));
    /// assert_eq!(options.price, RESERVATION_PRICE);
    /// ```
    #[must_use]
    pub const fn new(guest_id: GuestId, schedule_id: ScheduleId) -> Self {
        Self {
            guest_id,
            schedule_id,
            price: RESERVATION_PRICE,
        }
    }

    /// Sets the amount charged.
    #[must_use]
    pub const fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }
}

/// A booking plan generator.
pub struct BookPlan {
    options: BookOptions,
}

impl BookPlan {
    /// Creates a plan generator for `options`.
    #[must_use]
    pub const fn new(options: BookOptions) -> Self {
        Self { options }
    }

    /// Builds the plan: one new `ReadyToPlay` reservation.
    ///
    /// Neither the guest nor existing bookings of the slot are checked.
    /// Booking a slot that has already started is allowed but warned about.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schedule is unknown (`NotFound`)
    /// - The price is negative
    pub fn build_plan<L, C>(&self, schedules: &L, clock: &C) -> Result<OperationPlan>
    where
        L: ScheduleLookup + ?Sized,
        C: Clock + ?Sized,
    {
        let options = &self.options;
        let schedule = require_schedule(schedules, options.schedule_id)?;
        let now = clock.now();

        let reservation = Reservation::builder(
            options.guest_id,
            schedule.id,
            schedule.start_time,
            options.price,
        )
        .created_at(now)
        .build()?;

        let mut plan = OperationPlan::new(format!(
            "Book schedule {} for guest {}",
            schedule.id, options.guest_id
        ))
        .add_action(PlanAction::CreateReservation(reservation));

        if schedule.start_time <= now {
            plan = plan.add_warning(format!(
                "schedule {} already started at {}",
                schedule.id, schedule.start_time
            ));
        }

        log::debug!("planned booking of schedule {}", schedule.id);
        Ok(plan)
    }
}
