//! Weekly dosing calendar.
//!
//! Expands a medication list into seven calendar-day buckets starting at a
//! reference date. Slot computation (`slots`) is kept apart from display
//! text (`labels`) so the expansion rules can be tested on structured
//! values alone.

mod builder;
pub mod labels;
pub mod slots;
mod types;

pub use builder::*;
pub use types::*;
