//! Reservation and schedule persistence on top of [`Database`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::reservation::{GuestId, Reservation, ReservationId, ReservationStatus, ScheduleId};
use crate::schedule::{Schedule, ScheduleLookup};
use crate::store::ReservationStore;

use super::connection::Database;
use super::schema::{
    INSERT_RESERVATION, INSERT_SCHEDULE, LIST_RESERVATIONS, LIST_SCHEDULES, SELECT_RESERVATION,
    SELECT_SCHEDULE, UPDATE_RESERVATION,
};

fn conversion_error(
    column: usize,
    kind: Type,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, kind, Box::new(err))
}

fn instant_from_row(row: &Row<'_>, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, secs))
}

fn decimal_from_row(row: &Row<'_>, column: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(column)?;
    Decimal::from_str(&text).map_err(|e| conversion_error(column, Type::Text, e))
}

/// Expects columns in the order of [`SELECT_RESERVATION`].
fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let guest_id: i64 = row.get(1)?;
    let schedule_id: i64 = row.get(2)?;
    let schedule_start = instant_from_row(row, 3)?;
    let status: String = row.get(4)?;
    let value = decimal_from_row(row, 5)?;
    let refund_value = decimal_from_row(row, 6)?;
    let previous: Option<i64> = row.get(7)?;
    let created_at = instant_from_row(row, 8)?;

    let status =
        ReservationStatus::from_str(&status).map_err(|e| conversion_error(4, Type::Text, e))?;

    Reservation::builder(
        GuestId::new(guest_id),
        ScheduleId::new(schedule_id),
        schedule_start,
        value,
    )
    .id(ReservationId::new(id))
    .status(status)
    .refund_value(refund_value)
    .previous_reservation(previous.map(ReservationId::new))
    .created_at(created_at)
    .build()
    .map_err(|e| conversion_error(0, Type::Integer, e))
}

fn row_to_schedule(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    let id: i64 = row.get(0)?;
    Ok(Schedule::new(ScheduleId::new(id), instant_from_row(row, 1)?))
}

impl Database {
    /// Registers a slot starting at `start_time`.
    ///
    /// Sub-second precision is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_schedule(&self, start_time: DateTime<Utc>) -> Result<Schedule> {
        self.conn
            .execute(INSERT_SCHEDULE, params![start_time.timestamp()])?;
        let id = ScheduleId::new(self.conn.last_insert_rowid());
        log::info!("added schedule {id} starting {start_time}");

        self.find_schedule(id)?.ok_or_else(|| Error::DatabaseCorruption {
            details: format!("schedule {id} vanished after insert"),
        })
    }

    /// Returns every slot, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_schedules(&self) -> Result<Vec<Schedule>> {
        let mut stmt = self.conn.prepare(LIST_SCHEDULES)?;
        let schedules = stmt
            .query_map([], row_to_schedule)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(schedules)
    }
}

impl ReservationStore for Database {
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        let reservation = self
            .conn
            .query_row(SELECT_RESERVATION, params![id.value()], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    fn save(&self, reservation: &Reservation) -> Result<Reservation> {
        let previous = reservation.previous_reservation().map(ReservationId::value);

        let id = match reservation.id() {
            Some(id) => {
                let rows = self.conn.execute(
                    UPDATE_RESERVATION,
                    params![
                        reservation.guest_id().value(),
                        reservation.schedule_id().value(),
                        reservation.schedule_start().timestamp(),
                        reservation.status().as_str(),
                        reservation.value().to_string(),
                        reservation.refund_value().to_string(),
                        previous,
                        id.value(),
                    ],
                )?;
                if rows == 0 {
                    return Err(Error::NotFound {
                        resource: format!("reservation {id}"),
                    });
                }
                id
            }
            None => {
                self.conn.execute(
                    INSERT_RESERVATION,
                    params![
                        reservation.guest_id().value(),
                        reservation.schedule_id().value(),
                        reservation.schedule_start().timestamp(),
                        reservation.status().as_str(),
                        reservation.value().to_string(),
                        reservation.refund_value().to_string(),
                        previous,
                        reservation.created_at().timestamp(),
                    ],
                )?;
                ReservationId::new(self.conn.last_insert_rowid())
            }
        };

        self.find_by_id(id)?.ok_or_else(|| Error::DatabaseCorruption {
            details: format!("reservation {id} vanished after save"),
        })
    }

    fn list_all(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        self.immediate_transaction(f)
    }
}

impl ScheduleLookup for Database {
    fn find_schedule(&self, id: ScheduleId) -> Result<Option<Schedule>> {
        let schedule = self
            .conn
            .query_row(SELECT_SCHEDULE, params![id.value()], row_to_schedule)
            .optional()?;
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, test_reservation, test_start};
    use crate::RESERVATION_PRICE;

    #[test]
    fn test_save_and_find_round_trip() {
        let (db, _dir) = create_test_database();
        let saved = db.save(&test_reservation(7)).unwrap();

        let id = saved.id().unwrap();
        let found = db.find_by_id(id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.guest_id(), GuestId::new(7));
        assert_eq!(found.schedule_start(), test_start());
        assert_eq!(found.value(), RESERVATION_PRICE);
        assert_eq!(found.status(), ReservationStatus::ReadyToPlay);
    }

    #[test]
    fn test_find_missing_returns_none() {
        let (db, _dir) = create_test_database();
        assert!(db.find_by_id(ReservationId::new(42)).unwrap().is_none());
    }

    #[test]
    fn test_update_preserves_exact_decimals() {
        let (db, _dir) = create_test_database();
        let saved = db.save(&test_reservation(1)).unwrap();

        let refund = Decimal::new(75, 1);
        let cancelled = saved
            .terminate(ReservationStatus::Cancelled, refund)
            .unwrap();
        db.save(&cancelled).unwrap();

        let found = db.find_by_id(cancelled.id().unwrap()).unwrap().unwrap();
        assert_eq!(found.status(), ReservationStatus::Cancelled);
        assert_eq!(found.refund_value(), Decimal::new(75, 1));
        assert_eq!(found.value(), Decimal::new(25, 1));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (db, _dir) = create_test_database();
        let ghost = test_reservation(1).with_id(ReservationId::new(99));
        assert!(db.save(&ghost).unwrap_err().is_not_found());
    }

    #[test]
    fn test_previous_reservation_link_persists() {
        let (db, _dir) = create_test_database();
        let first = db.save(&test_reservation(1)).unwrap();

        let replacement = Reservation::builder(
            GuestId::new(1),
            ScheduleId::new(2),
            test_start(),
            RESERVATION_PRICE,
        )
        .previous_reservation(first.id())
        .build()
        .unwrap();
        let saved = db.save(&replacement).unwrap();

        assert_eq!(saved.previous_reservation(), first.id());
    }

    #[test]
    fn test_list_all_ordered_by_id() {
        let (db, _dir) = create_test_database();
        for guest in [3, 1, 2] {
            db.save(&test_reservation(guest)).unwrap();
        }

        let guests: Vec<i64> = db
            .list_all()
            .unwrap()
            .iter()
            .map(|r| r.guest_id().value())
            .collect();
        assert_eq!(guests, vec![3, 1, 2]);
    }

    #[test]
    fn test_schedules_round_trip() {
        let (db, _dir) = create_test_database();
        let later = db.add_schedule(test_start()).unwrap();
        let earlier = db
            .add_schedule(test_start() - chrono::Duration::hours(2))
            .unwrap();

        assert_eq!(db.find_schedule(later.id).unwrap(), Some(later));
        assert!(db.find_schedule(ScheduleId::new(500)).unwrap().is_none());

        let listed = db.list_schedules().unwrap();
        assert_eq!(listed, vec![earlier, later]);
    }

    #[test]
    fn test_corrupt_decimal_is_reported() {
        let (db, _dir) = create_test_database();
        let saved = db.save(&test_reservation(1)).unwrap();
        db.connection()
            .execute(
                "UPDATE reservations SET value = 'ten' WHERE id = ?",
                params![saved.id().unwrap().value()],
            )
            .unwrap();

        assert!(matches!(
            db.find_by_id(saved.id().unwrap()),
            Err(Error::Database(_))
        ));
    }
}
