//! Reservation operations using the plan-execute pattern.
//!
//! Each mutating operation is split into two phases:
//! 1. **Planning** reads through the store and schedule lookup, enforces
//!    the lifecycle rules and produces an [`OperationPlan`]
//! 2. **Execution** writes the plan's actions with a [`PlanExecutor`]
//!
//! A dry-run executor reports the plan without writing it.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use courtside::operations::{CancelPlan, PlanExecutor};
//! use courtside::{
//!     GuestId, MemoryStore, RefundPolicy, Reservation, ReservationStore, SystemClock,
//!     RESERVATION_PRICE,
//! };
//!
//! let store = MemoryStore::new();
//! let schedule = store.add_schedule(Utc::now() + Duration::days(3));
//! let booked = store
//!     .save(
//!         &Reservation::builder(GuestId::new(1), schedule.id, schedule.start_time, RESERVATION_PRICE)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let policy = RefundPolicy::standard();
//! let result = store
//!     .transaction(|store| {
//!         let plan = CancelPlan::new(booked.id().unwrap(), &policy).build_plan(store, &SystemClock)?;
//!         PlanExecutor::new(store).execute(&plan)
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.reservations[0].refund_value(), RESERVATION_PRICE);
//! ```

pub mod book;
pub mod cancel;
pub mod executor;
pub mod plan;
pub mod reschedule;

pub use book::{BookOptions, BookPlan};
pub use cancel::CancelPlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use reschedule::ReschedulePlan;
