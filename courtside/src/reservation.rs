//! Reservation types for tracking court bookings.
//!
//! This module provides the reservation entity, its lifecycle status, the
//! identifier newtypes, and the snapshot handed back to callers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a persisted reservation, assigned by the store.
    ReservationId
);
id_type!(
    /// Opaque reference to a guest. Never validated by this crate.
    GuestId
);
id_type!(
    /// Identifier of a bookable court time slot.
    ScheduleId
);

/// Lifecycle status of a reservation.
///
/// `ReadyToPlay` is the only non-terminal status.
///
/// # Examples
///
/// ```
/// use courtside::ReservationStatus;
///
/// let status: ReservationStatus = "CANCELLED".parse().unwrap();
/// assert_eq!(status, ReservationStatus::Cancelled);
/// assert!(status.is_terminal());
/// assert_eq!(ReservationStatus::ReadyToPlay.to_string(), "READY_TO_PLAY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked and still playable.
    ReadyToPlay,
    /// Cancelled by the guest.
    Cancelled,
    /// Moved to another slot; the replacement links back to this one.
    Rescheduled,
}

impl ReservationStatus {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadyToPlay => "READY_TO_PLAY",
            Self::Cancelled => "CANCELLED",
            Self::Rescheduled => "RESCHEDULED",
        }
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::ReadyToPlay)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READY_TO_PLAY" => Ok(Self::ReadyToPlay),
            "CANCELLED" => Ok(Self::Cancelled),
            "RESCHEDULED" => Ok(Self::Rescheduled),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown reservation status '{other}'"),
            }),
        }
    }
}

/// A court reservation.
///
/// The schedule start time is copied from the schedule at booking time and
/// never changes afterwards; refunds are always computed against it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use courtside::{GuestId, Reservation, ReservationStatus, ScheduleId, RESERVATION_PRICE};
///
/// let start = Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap();
/// let reservation = Reservation::builder(GuestId::new(1), ScheduleId::new(1), start, RESERVATION_PRICE)
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.status(), ReservationStatus::ReadyToPlay);
/// assert!(reservation.id().is_none());
/// assert!(reservation.refund_value().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Option<ReservationId>,
    guest_id: GuestId,
    schedule_id: ScheduleId,
    schedule_start: DateTime<Utc>,
    status: ReservationStatus,
    value: Decimal,
    refund_value: Decimal,
    previous_reservation: Option<ReservationId>,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder with status `ReadyToPlay`.
    #[must_use]
    pub fn builder(
        guest_id: GuestId,
        schedule_id: ScheduleId,
        schedule_start: DateTime<Utc>,
        value: Decimal,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            guest_id,
            schedule_id,
            schedule_start,
            status: ReservationStatus::ReadyToPlay,
            value,
            refund_value: Decimal::ZERO,
            previous_reservation: None,
            created_at: None,
        }
    }

    /// Returns the store-assigned id, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<ReservationId> {
        self.id
    }

    /// Returns the guest this reservation belongs to.
    #[must_use]
    pub const fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    /// Returns the booked schedule.
    #[must_use]
    pub const fn schedule_id(&self) -> ScheduleId {
        self.schedule_id
    }

    /// Returns the start time of the booked slot.
    #[must_use]
    pub const fn schedule_start(&self) -> DateTime<Utc> {
        self.schedule_start
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the amount currently charged.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the amount refunded on cancellation or reschedule.
    #[must_use]
    pub const fn refund_value(&self) -> Decimal {
        self.refund_value
    }

    /// Returns the reservation this one was rescheduled from.
    #[must_use]
    pub const fn previous_reservation(&self) -> Option<ReservationId> {
        self.previous_reservation
    }

    /// Returns the booking timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy carrying the store-assigned id.
    #[must_use]
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Moves the reservation into a terminal status, deducting `refund`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `status` is not terminal
    /// - The reservation is already terminal
    /// - `refund` is negative or larger than the current value
    pub fn terminate(
        mut self,
        status: ReservationStatus,
        refund: Decimal,
    ) -> Result<Self, ValidationError> {
        if !status.is_terminal() {
            return Err(ValidationError {
                field: "status".into(),
                message: format!("{status} is not a terminal status"),
            });
        }
        if self.status.is_terminal() {
            return Err(ValidationError {
                field: "status".into(),
                message: format!("cannot move from {} to {status}", self.status),
            });
        }
        if refund < Decimal::ZERO || refund > self.value {
            return Err(ValidationError {
                field: "refund_value".into(),
                message: format!("refund {refund} must be between 0 and {}", self.value),
            });
        }

        self.refund_value = refund;
        self.value -= refund;
        self.status = status;
        Ok(self)
    }

    /// Returns the caller-facing view, without the previous reservation
    /// resolved.
    #[must_use]
    pub fn to_snapshot(&self) -> ReservationSnapshot {
        ReservationSnapshot {
            id: self.id,
            guest_id: self.guest_id,
            schedule_id: self.schedule_id,
            reservation_status: self.status.to_string(),
            value: self.value,
            refund_value: self.refund_value,
            previous_reservation: None,
        }
    }
}

/// Builder for creating `Reservation` instances.
///
/// Used both for fresh bookings and for rehydrating stored rows.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    guest_id: GuestId,
    schedule_id: ScheduleId,
    schedule_start: DateTime<Utc>,
    status: ReservationStatus,
    value: Decimal,
    refund_value: Decimal,
    previous_reservation: Option<ReservationId>,
    created_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets the store-assigned id.
    #[must_use]
    pub const fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the refunded amount.
    #[must_use]
    pub const fn refund_value(mut self, refund_value: Decimal) -> Self {
        self.refund_value = refund_value;
        self
    }

    /// Links this reservation to the one it replaces.
    #[must_use]
    pub const fn previous_reservation(mut self, previous: Option<ReservationId>) -> Self {
        self.previous_reservation = previous;
        self
    }

    /// Sets the booking timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value or refund is negative
    /// - A refund is recorded on a reservation that is still `ReadyToPlay`
    /// - The reservation links to itself as its previous reservation
    pub fn build(self) -> Result<Reservation, ValidationError> {
        if self.value < Decimal::ZERO {
            return Err(ValidationError {
                field: "value".into(),
                message: format!("value must not be negative, got {}", self.value),
            });
        }

        if self.refund_value < Decimal::ZERO {
            return Err(ValidationError {
                field: "refund_value".into(),
                message: format!("refund must not be negative, got {}", self.refund_value),
            });
        }

        if !self.status.is_terminal() && !self.refund_value.is_zero() {
            return Err(ValidationError {
                field: "refund_value".into(),
                message: "only cancelled or rescheduled reservations carry a refund".into(),
            });
        }

        if let (Some(id), Some(previous)) = (self.id, self.previous_reservation) {
            if id == previous {
                return Err(ValidationError {
                    field: "previous_reservation".into(),
                    message: format!("reservation {id} cannot replace itself"),
                });
            }
        }

        Ok(Reservation {
            id: self.id,
            guest_id: self.guest_id,
            schedule_id: self.schedule_id,
            schedule_start: self.schedule_start,
            status: self.status,
            value: self.value,
            refund_value: self.refund_value,
            previous_reservation: self.previous_reservation,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

/// The externally visible view of a reservation.
///
/// `previous_reservation` is filled in when the reservation was created by
/// rescheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSnapshot {
    /// Store-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ReservationId>,
    /// Guest the reservation belongs to.
    pub guest_id: GuestId,
    /// Booked schedule.
    pub schedule_id: ScheduleId,
    /// Status in its canonical string form.
    pub reservation_status: String,
    /// Amount currently charged.
    pub value: Decimal,
    /// Amount refunded.
    pub refund_value: Decimal,
    /// The reservation this one replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_reservation: Option<Box<ReservationSnapshot>>,
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
