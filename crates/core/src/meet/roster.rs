//! Roster filtering helpers.
//!
//! The order engine only ever sees the entries assigned to the active
//! day/platform/flight; these helpers derive that view from the full roster.

use super::types::{Entry, Flight, LiftingState};

/// Entries assigned to the given day and platform, in roster order.
pub fn entries_on_platform(entries: &[Entry], day: u32, platform: u32) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.day == day && entry.platform == platform)
        .cloned()
        .collect()
}

/// Distinct flights present among the given entries, sorted.
///
/// Flights are derived from the entries themselves rather than configured
/// separately, so an empty flight simply does not appear.
pub fn flights_on_platform(entries: &[Entry]) -> Vec<Flight> {
    let mut flights: Vec<Flight> = Vec::new();
    for entry in entries {
        if !flights.contains(&entry.flight) {
            flights.push(entry.flight.clone());
        }
    }
    flights.sort();
    flights
}

/// Entries in the currently-lifting flight on the active day and platform.
pub fn entries_in_flight(entries: &[Entry], state: &LiftingState) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| {
            entry.day == state.day
                && entry.platform == state.platform
                && entry.flight == state.flight
        })
        .cloned()
        .collect()
}
