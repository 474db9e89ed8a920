//! Plan execution engine.

use crate::error::{Error, Result};
use crate::store::ReservationStore;
use crate::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether this was a dry run (nothing was written).
    pub dry_run: bool,

    /// Descriptions of actions taken, or that would be taken in a dry run.
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The written reservations in action order. In a dry run these are the
    /// planned values, and new reservations have no id.
    pub reservations: Vec<Reservation>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, reservations: Vec<Reservation>) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservations,
        }
    }

    /// Returns the reservation written by the last action.
    ///
    /// For a booking or cancellation that is the only reservation; for a
    /// reschedule it is the replacement.
    #[must_use]
    pub fn last_reservation(&self) -> Option<&Reservation> {
        self.reservations.last()
    }
}

/// Applies operation plans to a reservation store.
///
/// The executor does not open a transaction itself; callers run planning
/// and execution inside one [`ReservationStore::transaction`] so the checks
/// made while planning still hold when the writes land.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use courtside::operations::{BookOptions, BookPlan, PlanExecutor};
/// use courtside::{GuestId, MemoryStore, ReservationStore, SystemClock};
///
/// let store = MemoryStore::new();
/// let schedule = store.add_schedule(Utc::now() + Duration::days(1));
///
/// let plan = BookPlan::new(BookOptions::new(GuestId::new(1), schedule.id))
///     .build_plan(&store, &SystemClock)
///     .unwrap();
///
/// let preview = PlanExecutor::new(&store).dry_run().execute(&plan).unwrap();
/// assert!(preview.dry_run);
/// assert!(store.is_empty());
///
/// let result = PlanExecutor::new(&store).execute(&plan).unwrap();
/// assert!(result.reservations[0].id().is_some());
/// assert_eq!(store.len(), 1);
/// ```
pub struct PlanExecutor<'a, S: ?Sized> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: ReservationStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates an executor writing to `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Switches to dry-run mode: the plan is reported but nothing is written.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the plan's actions in order.
    ///
    /// # Errors
    ///
    /// Returns an error if an action is malformed or the store rejects a
    /// write. Earlier writes are only undone if the caller runs inside a
    /// transaction.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run of '{}'", plan.description);
            let planned = plan
                .actions
                .iter()
                .map(|action| action.reservation().clone())
                .collect();
            return Ok(ExecutionResult::new(plan, true, planned));
        }

        let mut written = Vec::with_capacity(plan.len());
        for action in &plan.actions {
            written.push(self.execute_action(action)?);
            log::info!("{}", action.description());
        }

        Ok(ExecutionResult::new(plan, false, written))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Reservation> {
        match action {
            PlanAction::CreateReservation(reservation) => {
                if let Some(id) = reservation.id() {
                    return Err(Error::Validation {
                        field: "id".into(),
                        message: format!("new reservation already carries id {id}"),
                    });
                }
                self.store.save(reservation)
            }
            PlanAction::UpdateReservation(reservation) => {
                if reservation.id().is_none() {
                    return Err(Error::Validation {
                        field: "id".into(),
                        message: "cannot update a reservation that was never saved".into(),
                    });
                }
                self.store.save(reservation)
            }
        }
    }
}
