//! Meet data model: entries, flights, and the active lifting selection.

mod roster;
mod types;

pub use roster::{entries_in_flight, entries_on_platform, flights_on_platform};
pub use types::*;
