//! Domain types for the departure board.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod departure;
mod time;

pub use departure::{Departure, InvalidTrainNumber, parse_train_number};
pub use time::{DepartureTime, TimeError};
