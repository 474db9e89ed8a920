//! Reservation persistence contract and an in-memory implementation.
//!
//! The lifecycle manager only ever talks to a [`ReservationStore`]. The
//! SQLite-backed [`Database`](crate::Database) is the durable implementation;
//! [`MemoryStore`] keeps everything in process for tests and embedding.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId, ScheduleId};
use crate::schedule::{Schedule, ScheduleLookup};

/// Storage for reservations.
///
/// # Atomicity contract
///
/// [`transaction`](Self::transaction) runs its closure as one unit of work:
/// every read and write made through the store inside the closure either
/// commits together or not at all, and no other transaction may write in
/// between. The lifecycle manager relies on this to make the status check,
/// the update and (for reschedule) the follow-up insert a single step, so two
/// concurrent cancellations of one reservation can never both pass the
/// status check.
///
/// Transactions are not reentrant; the closure must not open another one.
pub trait ReservationStore {
    /// Returns the reservation with `id`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Inserts a reservation without an id or updates an existing one,
    /// returning the persisted entity.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when updating an id the store does not know, or a
    /// storage error.
    fn save(&self, reservation: &Reservation) -> Result<Reservation>;

    /// Returns every reservation ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn list_all(&self) -> Result<Vec<Reservation>>;

    /// Runs `f` atomically.
    ///
    /// # Errors
    ///
    /// Returns the closure's error after rolling back, or an error if the
    /// transaction cannot be started or committed.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
        Self: Sized;
}

impl<S: ReservationStore> ReservationStore for &S {
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        (**self).find_by_id(id)
    }

    fn save(&self, reservation: &Reservation) -> Result<Reservation> {
        (**self).save(reservation)
    }

    fn list_all(&self) -> Result<Vec<Reservation>> {
        (**self).list_all()
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        (**self).transaction(|_| f(self))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    last_schedule_id: i64,
    reservations: BTreeMap<ReservationId, Reservation>,
    schedules: BTreeMap<ScheduleId, Schedule>,
    journal: Option<Journal>,
}

/// Undo log of the open transaction. Only saves made on `owner` are
/// recorded, so writes from other threads survive a rollback.
#[derive(Debug)]
struct Journal {
    owner: ThreadId,
    last_id: i64,
    undo: Vec<(ReservationId, Option<Reservation>)>,
}

impl MemoryState {
    fn record(&mut self, id: ReservationId) {
        let previous = self.reservations.get(&id).cloned();
        if let Some(journal) = &mut self.journal {
            if journal.owner == thread::current().id() {
                journal.undo.push((id, previous));
            }
        }
    }

    fn roll_back(&mut self, journal: Journal) {
        for (id, previous) in journal.undo.into_iter().rev() {
            match previous {
                Some(reservation) => self.reservations.insert(id, reservation),
                None => self.reservations.remove(&id),
            };
        }
        let highest = self
            .reservations
            .keys()
            .next_back()
            .map_or(0, |id| id.value());
        self.last_id = journal.last_id.max(highest);
    }
}

/// An in-process reservation store and schedule lookup.
///
/// Transactions are serialized by a lock. A failed transaction undoes the
/// saves it made; saves from other threads outside a transaction are kept.
/// Schedule registration is not transactional.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use courtside::{GuestId, MemoryStore, Reservation, ReservationStore, RESERVATION_PRICE};
///
/// let store = MemoryStore::new();
/// let schedule = store.add_schedule(Utc::now() + Duration::days(2));
///
/// let reservation = Reservation::builder(GuestId::new(1), schedule.id, schedule.start_time, RESERVATION_PRICE)
///     .build()
///     .unwrap();
/// let saved = store.save(&reservation).unwrap();
///
/// assert!(saved.id().is_some());
/// assert_eq!(store.find_by_id(saved.id().unwrap()).unwrap(), Some(saved));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    transaction_lock: Mutex<()>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a slot starting at `start_time` and returns it.
    pub fn add_schedule(&self, start_time: DateTime<Utc>) -> Schedule {
        let mut state = self.state();
        state.last_schedule_id += 1;
        let schedule = Schedule::new(ScheduleId::new(state.last_schedule_id), start_time);
        state.schedules.insert(schedule.id, schedule);
        schedule
    }

    /// Returns the number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state().reservations.len()
    }

    /// Returns whether no reservation has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReservationStore for MemoryStore {
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        Ok(self.state().reservations.get(&id).cloned())
    }

    fn save(&self, reservation: &Reservation) -> Result<Reservation> {
        let mut state = self.state();

        let saved = match reservation.id() {
            Some(id) => {
                if !state.reservations.contains_key(&id) {
                    return Err(Error::NotFound {
                        resource: format!("reservation {id}"),
                    });
                }
                reservation.clone()
            }
            None => {
                state.last_id += 1;
                reservation.clone().with_id(ReservationId::new(state.last_id))
            }
        };

        if let Some(id) = saved.id() {
            state.record(id);
            state.reservations.insert(id, saved.clone());
        }
        Ok(saved)
    }

    fn list_all(&self) -> Result<Vec<Reservation>> {
        Ok(self.state().reservations.values().cloned().collect())
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let _guard = self
            .transaction_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        {
            let mut state = self.state();
            let last_id = state.last_id;
            state.journal = Some(Journal {
                owner: thread::current().id(),
                last_id,
                undo: Vec::new(),
            });
        }

        let result = f(self);

        let mut state = self.state();
        if let Some(journal) = state.journal.take() {
            if result.is_err() {
                state.roll_back(journal);
            }
        }
        result
    }
}

impl ScheduleLookup for MemoryStore {
    fn find_schedule(&self, id: ScheduleId) -> Result<Option<Schedule>> {
        Ok(self.state().schedules.get(&id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuestId, ReservationStatus, RESERVATION_PRICE};
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap()
    }

    fn new_reservation() -> Reservation {
        Reservation::builder(GuestId::new(1), ScheduleId::new(1), start(), RESERVATION_PRICE)
            .build()
            .unwrap()
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.save(&new_reservation()).unwrap();
        let b = store.save(&new_reservation()).unwrap();

        assert_eq!(a.id(), Some(ReservationId::new(1)));
        assert_eq!(b.id(), Some(ReservationId::new(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_updates_existing() {
        let store = MemoryStore::new();
        let saved = store.save(&new_reservation()).unwrap();
        let cancelled = saved
            .terminate(ReservationStatus::Cancelled, Decimal::ONE)
            .unwrap();

        store.save(&cancelled).unwrap();

        let found = store.find_by_id(ReservationId::new(1)).unwrap().unwrap();
        assert_eq!(found.status(), ReservationStatus::Cancelled);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_unknown_id_fails() {
        let store = MemoryStore::new();
        let ghost = new_reservation().with_id(ReservationId::new(77));
        assert!(store.save(&ghost).unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.find_by_id(ReservationId::new(1)).unwrap(), None);
    }

    #[test]
    fn test_transaction_commits() {
        let store = MemoryStore::new();
        let id = store
            .transaction(|s| s.save(&new_reservation()).map(|r| r.id()))
            .unwrap();
        assert!(store.find_by_id(id.unwrap()).unwrap().is_some());
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let store = MemoryStore::new();
        store.save(&new_reservation()).unwrap();

        let result: Result<()> = store.transaction(|s| {
            s.save(&new_reservation())?;
            Err(Error::InvalidState {
                details: "abort".into(),
            })
        });

        assert!(result.is_err());
        assert_eq!(store.len(), 1);

        // The id counter rolls back too.
        let next = store.save(&new_reservation()).unwrap();
        assert_eq!(next.id(), Some(ReservationId::new(2)));
    }

    #[test]
    fn test_rollback_keeps_writes_from_other_threads() {
        use std::sync::mpsc;

        let store = MemoryStore::new();
        let (opened_tx, opened_rx) = mpsc::channel();
        let (written_tx, written_rx) = mpsc::channel();

        let shared = &store;
        let outside = thread::scope(|scope| {
            let writer = scope.spawn(move || {
                opened_rx.recv().unwrap();
                let saved = shared.save(&new_reservation()).unwrap();
                written_tx.send(()).unwrap();
                saved
            });

            let result: Result<()> = store.transaction(|s| {
                s.save(&new_reservation())?;
                opened_tx.send(()).unwrap();
                written_rx.recv().unwrap();
                Err(Error::InvalidState {
                    details: "abort".into(),
                })
            });
            assert!(result.is_err());

            writer.join().unwrap()
        });

        let remaining = store.list_all().unwrap();
        assert_eq!(remaining, vec![outside.clone()]);
        assert_eq!(outside.id(), Some(ReservationId::new(2)));

        let next = store.save(&new_reservation()).unwrap();
        assert_eq!(next.id(), Some(ReservationId::new(3)));
    }

    #[test]
    fn test_list_all_ordered() {
        let store = MemoryStore::new();
        for _ in 0..3 {
            store.save(&new_reservation()).unwrap();
        }
        let ids: Vec<i64> = store
            .list_all()
            .unwrap()
            .iter()
            .filter_map(Reservation::id)
            .map(ReservationId::value)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_schedules() {
        let store = MemoryStore::new();
        let first = store.add_schedule(start());
        let next = store.add_schedule(start() + chrono::Duration::hours(1));

        assert_eq!(first.id, ScheduleId::new(1));
        assert_eq!(next.id, ScheduleId::new(2));
        assert_eq!(store.find_schedule(next.id).unwrap().unwrap().start_time, next.start_time);
        assert!(store.find_schedule(ScheduleId::new(3)).unwrap().is_none());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        let saved = by_ref
            .transaction(|s| s.save(&new_reservation()))
            .unwrap();
        assert_eq!(by_ref.find_by_id(saved.id().unwrap()).unwrap(), Some(saved));
    }
}
