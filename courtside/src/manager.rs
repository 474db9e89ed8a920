//! The reservation lifecycle manager.
//!
//! [`ReservationManager`] is the entry point for booking, cancelling,
//! rescheduling and looking up reservations. Every call runs its planning
//! and execution inside one store transaction.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::operations::{
    BookOptions, BookPlan, CancelPlan, ExecutionResult, OperationPlan, PlanExecutor,
    ReschedulePlan,
};
use crate::refund::{RefundPolicy, RESERVATION_PRICE};
use crate::reservation::{GuestId, Reservation, ReservationId, ReservationSnapshot, ScheduleId};
use crate::schedule::ScheduleLookup;
use crate::store::ReservationStore;

/// Books, cancels, reschedules and finds reservations.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use courtside::{FixedClock, GuestId, MemoryStore, ReservationManager};
/// use rust_decimal::Decimal;
///
/// let now = Utc::now();
/// let store = MemoryStore::new();
/// let schedule = store.add_schedule(now + Duration::hours(48));
/// let manager = ReservationManager::new(&store, &store, FixedClock::new(now));
///
/// let booked = manager.book_reservation(GuestId::new(1), schedule.id).unwrap();
/// let cancelled = manager.cancel_reservation(booked.id.unwrap()).unwrap();
///
/// assert_eq!(cancelled.reservation_status, "CANCELLED");
/// assert_eq!(cancelled.refund_value, Decimal::TEN);
/// assert_eq!(cancelled.value, Decimal::ZERO);
/// ```
#[derive(Debug)]
pub struct ReservationManager<S, L, C = SystemClock> {
    store: S,
    schedules: L,
    clock: C,
    price: Decimal,
    policy: RefundPolicy,
}

impl<S, L, C> ReservationManager<S, L, C>
where
    S: ReservationStore,
    L: ScheduleLookup,
    C: Clock,
{
    /// Creates a manager charging [`RESERVATION_PRICE`] under the standard
    /// refund policy.
    #[must_use]
    pub fn new(store: S, schedules: L, clock: C) -> Self {
        Self {
            store,
            schedules,
            clock,
            price: RESERVATION_PRICE,
            policy: RefundPolicy::standard(),
        }
    }

    /// Sets the price charged for new bookings.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Replaces the refund policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RefundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Applies the price and refund policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured refund tiers are invalid.
    pub fn with_config(mut self, config: &Config) -> Result<Self> {
        if let Some(price) = config.reservation_price {
            self.price = price;
        }
        if let Some(tiers) = &config.refund_policy {
            self.policy = RefundPolicy::new(tiers.clone())?;
        }
        Ok(self)
    }

    /// Returns the price charged for new bookings.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the refund policy.
    #[must_use]
    pub const fn policy(&self) -> &RefundPolicy {
        &self.policy
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Books `schedule_id` for `guest_id`, returning the new reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the schedule is unknown, or a storage error.
    pub fn book_reservation(
        &self,
        guest_id: GuestId,
        schedule_id: ScheduleId,
    ) -> Result<ReservationSnapshot> {
        self.apply(|_| self.book_plan(guest_id, schedule_id), false)
            .map(|(_, snapshot)| snapshot)
    }

    /// Plans and (unless `dry_run`) executes a booking.
    ///
    /// # Errors
    ///
    /// See [`book_reservation`](Self::book_reservation).
    pub fn execute_book(
        &self,
        guest_id: GuestId,
        schedule_id: ScheduleId,
        dry_run: bool,
    ) -> Result<ExecutionResult> {
        self.apply(|_| self.book_plan(guest_id, schedule_id), dry_run)
            .map(|(result, _)| result)
    }

    /// Returns the reservation with `id`, with its chain of replaced
    /// reservations resolved.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the reservation is unknown, or a storage error.
    pub fn find_reservation(&self, id: ReservationId) -> Result<ReservationSnapshot> {
        self.store.transaction(|store| {
            let reservation = store.find_by_id(id)?.ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })?;
            snapshot_with_history(store, &reservation)
        })
    }

    /// Returns every reservation ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn list_reservations(&self) -> Result<Vec<ReservationSnapshot>> {
        self.store.transaction(|store| {
            store
                .list_all()?
                .iter()
                .map(|reservation| snapshot_with_history(store, reservation))
                .collect()
        })
    }

    /// Cancels the reservation with `id`, refunding according to the
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, `InvalidState` if the
    /// reservation is not `ReadyToPlay` or its slot has started, or a
    /// storage error.
    pub fn cancel_reservation(&self, id: ReservationId) -> Result<ReservationSnapshot> {
        self.apply(|store| self.cancel_plan(store, id), false)
            .map(|(_, snapshot)| snapshot)
    }

    /// Plans and (unless `dry_run`) executes a cancellation.
    ///
    /// # Errors
    ///
    /// See [`cancel_reservation`](Self::cancel_reservation).
    pub fn execute_cancel(&self, id: ReservationId, dry_run: bool) -> Result<ExecutionResult> {
        self.apply(|store| self.cancel_plan(store, id), dry_run)
            .map(|(result, _)| result)
    }

    /// Moves the reservation with `id` to `new_schedule_id`.
    ///
    /// The original becomes `Rescheduled` with the policy refund deducted;
    /// the returned replacement is booked at full price and carries the
    /// original as its previous reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown reservation or schedule,
    /// `InvalidState` if the reservation is not `ReadyToPlay` or its slot has
    /// started, `InvalidArgument` if it is already on `new_schedule_id`, or a
    /// storage error. On any error neither write is kept.
    pub fn reschedule_reservation(
        &self,
        id: ReservationId,
        new_schedule_id: ScheduleId,
    ) -> Result<ReservationSnapshot> {
        self.apply(|store| self.reschedule_plan(store, id, new_schedule_id), false)
            .map(|(_, snapshot)| snapshot)
    }

    /// Plans and (unless `dry_run`) executes a reschedule.
    ///
    /// # Errors
    ///
    /// See [`reschedule_reservation`](Self::reschedule_reservation).
    pub fn execute_reschedule(
        &self,
        id: ReservationId,
        new_schedule_id: ScheduleId,
        dry_run: bool,
    ) -> Result<ExecutionResult> {
        self.apply(|store| self.reschedule_plan(store, id, new_schedule_id), dry_run)
            .map(|(result, _)| result)
    }

    /// Returns the refund owed if `reservation` were cancelled now.
    #[must_use]
    pub fn get_refund_value(&self, reservation: &Reservation) -> Decimal {
        self.policy.refund_at(
            reservation.value(),
            reservation.schedule_start(),
            self.clock.now(),
        )
    }

    fn book_plan(&self, guest_id: GuestId, schedule_id: ScheduleId) -> Result<OperationPlan> {
        let options = BookOptions::new(guest_id, schedule_id).with_price(self.price);
        BookPlan::new(options).build_plan(&self.schedules, &self.clock)
    }

    fn cancel_plan(&self, store: &S, id: ReservationId) -> Result<OperationPlan> {
        CancelPlan::new(id, &self.policy).build_plan(store, &self.clock)
    }

    fn reschedule_plan(
        &self,
        store: &S,
        id: ReservationId,
        new_schedule_id: ScheduleId,
    ) -> Result<OperationPlan> {
        ReschedulePlan::new(id, new_schedule_id, &self.policy)
            .with_price(self.price)
            .build_plan(store, &self.schedules, &self.clock)
    }

    /// Plans, executes and snapshots inside one transaction.
    fn apply<F>(&self, build: F, dry_run: bool) -> Result<(ExecutionResult, ReservationSnapshot)>
    where
        F: FnOnce(&S) -> Result<OperationPlan>,
    {
        self.store.transaction(|store| {
            let plan = build(store)?;
            for warning in &plan.warnings {
                log::warn!("{warning}");
            }

            let executor = PlanExecutor::new(store);
            let result = if dry_run {
                executor.dry_run().execute(&plan)?
            } else {
                executor.execute(&plan)?
            };

            let snapshot = snapshot_of_last(store, &result)?;
            Ok((result, snapshot))
        })
    }
}

/// Snapshots the last reservation written, resolving its history.
fn snapshot_of_last<S>(store: &S, result: &ExecutionResult) -> Result<ReservationSnapshot>
where
    S: ReservationStore + ?Sized,
{
    let last = result
        .last_reservation()
        .ok_or_else(|| Error::DatabaseCorruption {
            details: "operation wrote no reservation".into(),
        })?;

    // A reservation replaced by this same plan is taken from the result, so
    // dry runs show the planned refund rather than the stored state.
    match result.reservations.as_slice() {
        [.., previous, _] if last.previous_reservation() == previous.id() => {
            let mut snapshot = last.to_snapshot();
            snapshot.previous_reservation = Some(Box::new(snapshot_with_history(store, previous)?));
            Ok(snapshot)
        }
        _ => snapshot_with_history(store, last),
    }
}

/// Snapshots `reservation` and every reservation it replaced, newest
/// first.
fn snapshot_with_history<S>(store: &S, reservation: &Reservation) -> Result<ReservationSnapshot>
where
    S: ReservationStore + ?Sized,
{
    let mut chain = vec![reservation.clone()];
    let mut seen: HashSet<ReservationId> = reservation.id().into_iter().collect();
    let mut next = reservation.previous_reservation();

    while let Some(id) = next {
        if !seen.insert(id) {
            return Err(Error::DatabaseCorruption {
                details: format!("reservation {id} appears twice in its own history"),
            });
        }
        let previous = store.find_by_id(id)?.ok_or_else(|| Error::DatabaseCorruption {
            details: format!("previous reservation {id} is missing"),
        })?;
        next = previous.previous_reservation();
        chain.push(previous);
    }

    let snapshot = chain
        .iter()
        .rev()
        .fold(None, |older: Option<ReservationSnapshot>, reservation| {
            let mut snapshot = reservation.to_snapshot();
            snapshot.previous_reservation = older.map(Box::new);
            Some(snapshot)
        });

    Ok(snapshot.unwrap_or_else(|| reservation.to_snapshot()))
}
