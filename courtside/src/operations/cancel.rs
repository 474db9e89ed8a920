//! Cancelling a reservation.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::refund::RefundPolicy;
use crate::reservation::{Reservation, ReservationId, ReservationStatus};
use crate::store::ReservationStore;

use super::plan::{OperationPlan, PlanAction};

/// Loads a reservation that may still be cancelled or moved.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, and `InvalidState` when the
/// reservation is terminal or its slot is not strictly in the future.
pub(super) fn require_playable<S>(
    store: &S,
    id: ReservationId,
    now: DateTime<Utc>,
) -> Result<Reservation>
where
    S: ReservationStore + ?Sized,
{
    let reservation = store.find_by_id(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;

    if reservation.status() != ReservationStatus::ReadyToPlay {
        return Err(Error::InvalidState {
            details: format!("reservation {id} is already {}", reservation.status()),
        });
    }

    if reservation.schedule_start() <= now {
        return Err(Error::InvalidState {
            details: format!(
                "reservation {id} started at {}",
                reservation.schedule_start()
            ),
        });
    }

    Ok(reservation)
}

/// A cancellation plan generator.
pub struct CancelPlan<'a> {
    reservation_id: ReservationId,
    policy: &'a RefundPolicy,
}

impl<'a> CancelPlan<'a> {
    /// Creates a plan generator refunding according to `policy`.
    #[must_use]
    pub const fn new(reservation_id: ReservationId, policy: &'a RefundPolicy) -> Self {
        Self {
            reservation_id,
            policy,
        }
    }

    /// Builds the plan: one update moving the reservation to `Cancelled`
    /// with the refund deducted from its value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reservation does not exist (`NotFound`)
    /// - It is not `ReadyToPlay` (`InvalidState`)
    /// - Its slot is not strictly in the future (`InvalidState`)
    pub fn build_plan<S, C>(&self, store: &S, clock: &C) -> Result<OperationPlan>
    where
        S: ReservationStore + ?Sized,
        C: Clock + ?Sized,
    {
        let now = clock.now();
        let reservation = require_playable(store, self.reservation_id, now)?;

        let notice = reservation.schedule_start() - now;
        let refund = self
            .policy
            .refund_at(reservation.value(), reservation.schedule_start(), now);
        let cancelled = reservation.terminate(ReservationStatus::Cancelled, refund)?;

        let mut plan = OperationPlan::new(format!("Cancel reservation {}", self.reservation_id))
            .add_action(PlanAction::UpdateReservation(cancelled));

        if refund.is_zero() {
            plan = plan.add_warning(format!(
                "no refund is due with {} minutes of notice",
                notice.num_minutes()
            ));
        }

        Ok(plan)
    }
}
