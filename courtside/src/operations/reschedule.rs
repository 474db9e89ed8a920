//! Moving a reservation to another slot.

use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::refund::{RefundPolicy, RESERVATION_PRICE};
use crate::reservation::{Reservation, ReservationId, ReservationStatus, ScheduleId};
use crate::schedule::{require_schedule, ScheduleLookup};
use crate::store::ReservationStore;

use super::cancel::require_playable;
use super::plan::{OperationPlan, PlanAction};

/// A reschedule plan generator.
///
/// Rescheduling cancels the original with status `Rescheduled` (the refund
/// policy applies as for a cancellation) and books the guest onto the new
/// slot at full price, linked back to the original.
pub struct ReschedulePlan<'a> {
    reservation_id: ReservationId,
    new_schedule_id: ScheduleId,
    policy: &'a RefundPolicy,
    price: Decimal,
}

impl<'a> ReschedulePlan<'a> {
    /// Creates a plan generator charging [`RESERVATION_PRICE`] for the new
    /// booking.
    #[must_use]
    pub const fn new(
        reservation_id: ReservationId,
        new_schedule_id: ScheduleId,
        policy: &'a RefundPolicy,
    ) -> Self {
        Self {
            reservation_id,
            new_schedule_id,
            policy,
            price: RESERVATION_PRICE,
        }
    }

    /// Sets the amount charged for the new booking.
    #[must_use]
    pub const fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Builds the plan: an update marking the original `Rescheduled`,
    /// followed by the new booking.
    ///
    /// The checks run in this order, so the first failing one decides the
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reservation does not exist (`NotFound`)
    /// - It is not `ReadyToPlay` (`InvalidState`)
    /// - Its slot is not strictly in the future (`InvalidState`)
    /// - The new schedule is the current one (`InvalidArgument`)
    /// - The new schedule is unknown (`NotFound`)
    pub fn build_plan<S, L, C>(&self, store: &S, schedules: &L, clock: &C) -> Result<OperationPlan>
    where
        S: ReservationStore + ?Sized,
        L: ScheduleLookup + ?Sized,
        C: Clock + ?Sized,
    {
        let now = clock.now();
        let original = require_playable(store, self.reservation_id, now)?;

        if original.schedule_id() == self.new_schedule_id {
            return Err(Error::InvalidArgument {
                field: "schedule_id".into(),
                message: format!(
                    "reservation {} is already on schedule {}",
                    self.reservation_id, self.new_schedule_id
                ),
            });
        }

        let schedule = require_schedule(schedules, self.new_schedule_id)?;

        let refund = self
            .policy
            .refund_at(original.value(), original.schedule_start(), now);
        let guest_id = original.guest_id();
        let moved = original.terminate(ReservationStatus::Rescheduled, refund)?;

        let replacement =
            Reservation::builder(guest_id, schedule.id, schedule.start_time, self.price)
                .previous_reservation(Some(self.reservation_id))
                .created_at(now)
                .build()?;

        let mut plan = OperationPlan::new(format!(
            "Reschedule reservation {} to schedule {}",
            self.reservation_id, schedule.id
        ))
        .add_action(PlanAction::UpdateReservation(moved))
        .add_action(PlanAction::CreateReservation(replacement));

        if schedule.start_time <= now {
            plan = plan.add_warning(format!(
                "schedule {} already started at {}",
                schedule.id, schedule.start_time
            ));
        }

        Ok(plan)
    }
}
