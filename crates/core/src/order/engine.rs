//! The order computation itself.

use std::cmp::Ordering;

use crate::meet::{Entry, LiftingState, TieBreak};

use super::types::LiftingOrder;

/// Compute the lifting order with the default lot-number tie-break.
pub fn compute(entries_in_flight: &[Entry], state: &LiftingState) -> LiftingOrder {
    compute_with_tie_break(entries_in_flight, state, TieBreak::LotNumber)
}

/// Compute the lifting order for the active lift.
///
/// Every pending (entry, attempt) pair is ranked by (attempt number,
/// tie-break, entry id), all ascending. A lower attempt number always lifts
/// before a higher one regardless of the requested weights: the whole flight
/// takes its first attempts before anyone takes a second. When a lifter is
/// the only one with attempts left, their own later attempt is on deck.
///
/// Pure function of its inputs; identical inputs yield identical output.
pub fn compute_with_tie_break(
    entries_in_flight: &[Entry],
    state: &LiftingState,
    tie_break: TieBreak,
) -> LiftingOrder {
    let lift = state.lift;

    let mut pending: Vec<(&Entry, u32)> = entries_in_flight
        .iter()
        .flat_map(|entry| {
            entry
                .pending_attempts(lift)
                .map(move |attempt| (entry, attempt))
        })
        .collect();

    pending.sort_by(|(a, a_attempt), (b, b_attempt)| {
        a_attempt
            .cmp(b_attempt)
            .then_with(|| compare_tie_break(a, b, tie_break))
            .then_with(|| a.id.cmp(&b.id))
    });

    let current = pending.first();
    let next = pending.get(1);

    let order = LiftingOrder {
        current_entry_id: current.map(|(entry, _)| entry.id),
        current_attempt_one_indexed: current.map(|(_, attempt)| *attempt),
        next_entry_id: next.map(|(entry, _)| entry.id),
        next_attempt_one_indexed: next.map(|(_, attempt)| *attempt),
        ordered_entries: ordered_entries(entries_in_flight, &pending),
    };

    debug_assert!(
        order.current_entry_id.is_none() || order.current_entry().is_some(),
        "current entry must be present in ordered_entries"
    );

    order
}

fn compare_tie_break(a: &Entry, b: &Entry, tie_break: TieBreak) -> Ordering {
    match tie_break {
        TieBreak::LotNumber => a.lot.cmp(&b.lot),
        TieBreak::Bodyweight => a.bodyweight_kg.total_cmp(&b.bodyweight_kg),
    }
}

/// Pending entries in selection order (each listed once, at the position of
/// their earliest pending attempt), then finished entries in roster order.
fn ordered_entries(entries_in_flight: &[Entry], pending: &[(&Entry, u32)]) -> Vec<Entry> {
    let mut ordered: Vec<Entry> = Vec::new();
    for (entry, _) in pending {
        if !ordered.iter().any(|seen| seen.id == entry.id) {
            ordered.push((*entry).clone());
        }
    }
    ordered.extend(
        entries_in_flight
            .iter()
            .filter(|entry| !pending.iter().any(|(p, _)| p.id == entry.id))
            .cloned(),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meet::{Attempt, AttemptStatus, Lift};
    use crate::testing::fixtures;

    #[test]
    fn test_empty_roster_yields_all_none() {
        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[], &state);
        assert!(order.ordered_entries.is_empty());
        assert_eq!(order.current_entry_id, None);
        assert_eq!(order.current_attempt_one_indexed, None);
        assert_eq!(order.next_entry_id, None);
        assert_eq!(order.next_attempt_one_indexed, None);
    }

    #[test]
    fn test_lot_number_breaks_ties_within_attempt() {
        // A and B are both on attempt 1; C already has a first-attempt
        // decision and sits on attempt 2. Expected: B (lot 1), A (lot 2), C.
        let a = fixtures::entry(1, "A", 2);
        let b = fixtures::entry(2, "B", 1);
        let mut c = fixtures::entry(3, "C", 3);
        c.squat[0] = Attempt::decided(100.0, AttemptStatus::GoodLift);

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a, b, c], &state);

        assert_eq!(order.current_entry_id, Some(2));
        assert_eq!(order.current_attempt_one_indexed, Some(1));
        assert_eq!(order.next_entry_id, Some(1));
        assert_eq!(order.next_attempt_one_indexed, Some(1));
    }

    #[test]
    fn test_attempt_number_dominates_requested_weight() {
        // B requests a far lighter second attempt than A's first attempt;
        // A still lifts first because attempt 1 precedes attempt 2.
        let mut a = fixtures::entry(1, "A", 5);
        a.squat = [
            Attempt::declared(300.0),
            Attempt::declared(305.0),
            Attempt::declared(310.0),
        ];
        let mut b = fixtures::entry(2, "B", 1);
        b.squat = [
            Attempt::decided(50.0, AttemptStatus::GoodLift),
            Attempt::declared(55.0),
            Attempt::declared(60.0),
        ];

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a, b], &state);

        assert_eq!(order.current_entry_id, Some(1));
        assert_eq!(order.current_attempt_one_indexed, Some(1));
        assert_eq!(order.next_entry_id, Some(2));
        assert_eq!(order.next_attempt_one_indexed, Some(2));
    }

    #[test]
    fn test_failed_attempt_does_not_repeat() {
        let mut a = fixtures::entry(1, "A", 1);
        a.squat[0] = Attempt::decided(100.0, AttemptStatus::NoLift);

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a], &state);

        // The no-lift retired attempt 1; the lifter moves on to attempt 2.
        assert_eq!(order.current_entry_id, Some(1));
        assert_eq!(order.current_attempt_one_indexed, Some(2));
    }

    #[test]
    fn test_exhausted_flight_has_no_current_lifter() {
        let mut a = fixtures::entry(1, "A", 1);
        let mut b = fixtures::entry(2, "B", 2);
        for entry in [&mut a, &mut b] {
            for attempt in entry.squat.iter_mut() {
                attempt.status = AttemptStatus::NoLift;
            }
        }

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a, b], &state);

        assert_eq!(order.current_entry_id, None);
        assert_eq!(order.next_entry_id, None);
        // Finished entries are still listed.
        assert_eq!(order.ordered_entries.len(), 2);
    }

    #[test]
    fn test_lone_lifter_is_their_own_next() {
        // Nobody else has attempts left, so the same lifter is on deck for
        // their own second attempt.
        let a = fixtures::entry(1, "A", 1);
        let state = fixtures::lifting_state(Lift::Squat);

        let order = compute(&[a], &state);
        assert_eq!(order.current_entry_id, Some(1));
        assert_eq!(order.current_attempt_one_indexed, Some(1));
        assert_eq!(order.next_entry_id, Some(1));
        assert_eq!(order.next_attempt_one_indexed, Some(2));
        assert_eq!(order.ordered_entries.len(), 1);
    }

    #[test]
    fn test_final_pending_attempt_has_no_next() {
        let mut a = fixtures::entry(1, "A", 1);
        a.squat[0] = Attempt::decided(100.0, AttemptStatus::GoodLift);
        a.squat[1] = Attempt::decided(105.0, AttemptStatus::NoLift);

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a], &state);

        assert_eq!(order.current_entry_id, Some(1));
        assert_eq!(order.current_attempt_one_indexed, Some(3));
        assert_eq!(order.next_entry_id, None);
        assert_eq!(order.next_attempt_one_indexed, None);
    }

    #[test]
    fn test_bodyweight_tie_break() {
        let mut a = fixtures::entry(1, "A", 1);
        let mut b = fixtures::entry(2, "B", 2);
        a.bodyweight_kg = 93.0;
        b.bodyweight_kg = 74.0;

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute_with_tie_break(&[a, b], &state, TieBreak::Bodyweight);

        // Lighter lifter goes first despite the higher lot number.
        assert_eq!(order.current_entry_id, Some(2));
    }

    #[test]
    fn test_entry_id_is_the_final_tie_break() {
        let a = fixtures::entry(9, "A", 1);
        let b = fixtures::entry(4, "B", 1);

        let state = fixtures::lifting_state(Lift::Squat);
        let order = compute(&[a, b], &state);
        assert_eq!(order.current_entry_id, Some(4));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let entries = vec![
            fixtures::entry(1, "A", 2),
            fixtures::entry(2, "B", 1),
            fixtures::entry(3, "C", 3),
        ];
        let state = fixtures::lifting_state(Lift::Squat);

        let first = compute(&entries, &state);
        let second = compute(&entries, &state);
        assert_eq!(first, second);
    }
}
