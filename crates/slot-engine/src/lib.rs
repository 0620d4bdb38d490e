//! # slot-engine
//!
//! Free-time computation for scheduling assistants.
//!
//! Given the occupied intervals of a day and a work window, the engine finds
//! the free gaps, keeps the first few as suggestions, and phrases them as a
//! French sentence ("le 21 février de 11 heures à 12 heures"). A separate
//! helper moves a date to the next business day and returns its work window.
//!
//! Every operation is a pure function of its inputs. The current time is
//! never read.
//!
//! ## Modules
//!
//! - [`interval`] — timestamp parsing, occupied-interval normalization
//! - [`freebusy`] — work windows and the free-slot sweep
//! - [`suggest`] — leading suggestions from a free-slot list
//! - [`business_day`] — weekend-skipping date advance
//! - [`answer`] — French sentence rendering
//! - [`locale`] — month-name tables
//! - [`config`] — engine tunables
//! - [`api`] — JSON request/response boundary
//! - [`error`] — Error types

pub mod answer;
pub mod api;
pub mod business_day;
pub mod config;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod locale;
pub mod suggest;

pub use answer::format_answer;
pub use business_day::next_business_day;
pub use config::SlotConfig;
pub use error::SlotError;
pub use freebusy::{find_free_slots, merge_busy_periods, WorkWindow};
pub use interval::{normalize, RawInterval, TimeInterval};
pub use suggest::suggest_slots;
