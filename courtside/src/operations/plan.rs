//! Plan types for reservation operations.
//!
//! A plan describes the writes an operation will make without making them.

use crate::Reservation;

/// A single write to be performed when a plan is executed.
///
/// Both variants are persisted with [`ReservationStore::save`]; they are
/// kept apart so plans read clearly and the executor can check that a
/// create carries no id and an update does.
///
/// [`ReservationStore::save`]: crate::ReservationStore::save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new reservation.
    CreateReservation(Reservation),

    /// Overwrite an existing reservation.
    UpdateReservation(Reservation),
}

impl PlanAction {
    /// Returns the reservation this action writes.
    #[must_use]
    pub const fn reservation(&self) -> &Reservation {
        match self {
            Self::CreateReservation(r) | Self::UpdateReservation(r) => r,
        }
    }

    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation(r) => match r.previous_reservation() {
                Some(previous) => format!(
                    "Book schedule {} for guest {} at {}, replacing reservation {previous}",
                    r.schedule_id(),
                    r.guest_id(),
                    r.value()
                ),
                None => format!(
                    "Book schedule {} for guest {} at {}",
                    r.schedule_id(),
                    r.guest_id(),
                    r.value()
                ),
            },
            Self::UpdateReservation(r) => {
                let id = r
                    .id()
                    .map_or_else(|| "(unsaved)".to_string(), |id| id.to_string());
                format!(
                    "Mark reservation {id} {} with refund {}",
                    r.status(),
                    r.refund_value()
                )
            }
        }
    }
}

/// A complete operation plan.
///
/// Plans are produced by the planning phase and can be inspected, logged
/// or handed to a [`PlanExecutor`](super::PlanExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The writes to perform, in order.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtside::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel reservation 4")
    ///     .add_warning("no refund is due");
    /// assert_eq!(plan.description, "Cancel reservation 4");
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Appends an action.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Appends a warning.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuestId, ReservationId, ReservationStatus, ScheduleId, RESERVATION_PRICE};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn reservation() -> Reservation {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();
        Reservation::builder(GuestId::new(2), ScheduleId::new(8), start, RESERVATION_PRICE)
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_description() {
        let desc = PlanAction::CreateReservation(reservation()).description();
        assert_eq!(desc, "Book schedule 8 for guest 2 at 10");
    }

    #[test]
    fn test_create_description_mentions_replaced_reservation() {
        let start = Utc.with_ymd_and_hms(2026, 9, 2, 10, 0, 0).unwrap();
        let replacement =
            Reservation::builder(GuestId::new(2), ScheduleId::new(9), start, RESERVATION_PRICE)
                .previous_reservation(Some(ReservationId::new(5)))
                .build()
                .unwrap();

        let desc = PlanAction::CreateReservation(replacement).description();
        assert!(desc.ends_with("replacing reservation 5"));
    }

    #[test]
    fn test_update_description() {
        let cancelled = reservation()
            .with_id(ReservationId::new(3))
            .terminate(ReservationStatus::Cancelled, Decimal::new(5, 0))
            .unwrap();

        let desc = PlanAction::UpdateReservation(cancelled).description();
        assert_eq!(desc, "Mark reservation 3 CANCELLED with refund 5");
    }

    #[test]
    fn test_plan_preserves_order() {
        let first = reservation().with_id(ReservationId::new(1));
        let plan = OperationPlan::new("Reschedule")
            .add_action(PlanAction::UpdateReservation(first))
            .add_action(PlanAction::CreateReservation(reservation()))
            .add_warning("one")
            .add_warning("two");

        assert_eq!(plan.len(), 2);
        assert!(matches!(plan.actions[0], PlanAction::UpdateReservation(_)));
        assert!(matches!(plan.actions[1], PlanAction::CreateReservation(_)));
        assert_eq!(plan.warnings, vec!["one", "two"]);
    }
}
