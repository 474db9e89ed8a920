#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # courtside
//!
//! A library for managing tennis court reservations.
//!
//! Guests book court time slots (schedules), may cancel them for a refund
//! that depends on how much notice they give, and may move a booking to a
//! different slot. Every change runs inside a store transaction, so an
//! operation either fully succeeds or leaves the store untouched.
//!
//! ## Core Types
//!
//! - [`ReservationManager`]: book, find, cancel and reschedule
//! - [`Reservation`] and [`ReservationSnapshot`]: the entity and its external view
//! - [`RefundPolicy`]: the notice-based refund table
//! - [`ReservationStore`], [`Database`] and [`MemoryStore`]: persistence
//! - [`Clock`]: injectable time source
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use courtside::{FixedClock, GuestId, MemoryStore, ReservationManager};
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let store = MemoryStore::new();
//! let schedule = store.add_schedule(now + Duration::hours(48));
//! let manager = ReservationManager::new(&store, &store, FixedClock::new(now));
//!
//! let booked = manager.book_reservation(GuestId::new(1), schedule.id).unwrap();
//! let cancelled = manager.cancel_reservation(booked.id.unwrap()).unwrap();
//!
//! assert_eq!(cancelled.reservation_status, "CANCELLED");
//! assert_eq!(cancelled.refund_value, Decimal::TEN);
//! ```

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod manager;
pub mod operations;
pub mod output;
pub mod refund;
pub mod reservation;
pub mod schedule;
pub mod store;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::ReservationManager;
pub use operations::{
    BookOptions, BookPlan, CancelPlan, ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
    ReschedulePlan,
};
pub use refund::{RefundPolicy, RefundTier, RESERVATION_PRICE};
pub use reservation::{
    GuestId, Reservation, ReservationBuilder, ReservationId, ReservationSnapshot,
    ReservationStatus, ScheduleId, ValidationError,
};
pub use schedule::{require_schedule, Schedule, ScheduleLookup};
pub use store::{MemoryStore, ReservationStore};
