//! Court time slots and their lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::ScheduleId;

/// A bookable court slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Slot identifier.
    pub id: ScheduleId,
    /// When play starts.
    pub start_time: DateTime<Utc>,
}

impl Schedule {
    /// Creates a schedule.
    #[must_use]
    pub const fn new(id: ScheduleId, start_time: DateTime<Utc>) -> Self {
        Self { id, start_time }
    }
}

/// Resolves schedule identifiers to slots.
///
/// Booking reads the slot start time through this trait; the schedules
/// themselves are managed elsewhere.
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleLookup {
    /// Returns the schedule with `id`, or `None` if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn find_schedule(&self, id: ScheduleId) -> Result<Option<Schedule>>;
}

/// Returns the schedule with `id` from `lookup`.
///
/// # Errors
///
/// Returns `NotFound` if the schedule is unknown, or the lookup's own error.
pub fn require_schedule<L: ScheduleLookup + ?Sized>(
    lookup: &L,
    id: ScheduleId,
) -> Result<Schedule> {
    lookup.find_schedule(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("schedule {id}"),
    })
}

impl<L: ScheduleLookup + ?Sized> ScheduleLookup for &L {
    fn find_schedule(&self, id: ScheduleId) -> Result<Option<Schedule>> {
        (**self).find_schedule(id)
    }
}
