//! Testing utilities and mock implementations.
//!
//! Provides a mock scoreboard client and roster fixtures so the broadcast
//! path can be exercised end to end without real infrastructure.

mod mock_api_client;

pub use mock_api_client::MockApiClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::meet::{
        Attempt, AttemptStatus, Entry, Lift, LiftingState, MeetInfo, Sex, ATTEMPTS_PER_LIFT,
    };

    /// An entry in flight A on day 1, platform 1, with three declared squat
    /// attempts and undeclared bench/deadlift.
    pub fn entry(id: u32, name: &str, lot: u32) -> Entry {
        Entry {
            id,
            name: name.to_string(),
            sex: Sex::M,
            bodyweight_kg: 80.0,
            day: 1,
            platform: 1,
            flight: "A".into(),
            lot,
            squat: [
                Attempt::declared(100.0),
                Attempt::declared(105.0),
                Attempt::declared(110.0),
            ],
            bench: [Attempt::default(); ATTEMPTS_PER_LIFT],
            deadlift: [Attempt::default(); ATTEMPTS_PER_LIFT],
        }
    }

    /// Record a decision for the given one-indexed attempt.
    pub fn decide(mut entry: Entry, lift: Lift, attempt_one_indexed: u32, status: AttemptStatus) -> Entry {
        entry.attempts_mut(lift)[attempt_one_indexed as usize - 1].status = status;
        entry
    }

    /// Lifting state pointing at day 1, platform 1, flight A.
    pub fn lifting_state(lift: Lift) -> LiftingState {
        LiftingState {
            day: 1,
            platform: 1,
            flight: "A".into(),
            lift,
        }
    }

    /// Meet info with default weight classes and lot-number tie-break.
    pub fn meet_info() -> MeetInfo {
        MeetInfo {
            name: "Test Meet".to_string(),
            ..MeetInfo::default()
        }
    }
}
