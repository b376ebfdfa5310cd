//! Types for the meet data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attempts allowed per lift per entry.
pub const ATTEMPTS_PER_LIFT: usize = 3;

/// Sex category of a competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
    Mx,
}

/// One of the three competition lifts.
///
/// Serialized as the single-letter lift code the scoreboard expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lift {
    #[serde(rename = "S")]
    Squat,
    #[serde(rename = "B")]
    Bench,
    #[serde(rename = "D")]
    Deadlift,
}

/// A named subgroup of competitors who lift together in sequence.
///
/// Flight names compare lexically, which is the order flights run in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flight(String);

impl Flight {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Flight {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The unit system weights are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Recorded outcome of a single attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttemptStatus {
    #[default]
    NotTaken,
    GoodLift,
    NoLift,
}

/// One try at a lift: the declared weight and its recorded outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    /// Declared weight in kg. Zero means no weight has been declared.
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub status: AttemptStatus,
}

impl Attempt {
    /// An attempt with a declared weight and no decision yet.
    pub fn declared(weight_kg: f64) -> Self {
        Self {
            weight_kg,
            status: AttemptStatus::NotTaken,
        }
    }

    /// An attempt with a recorded decision.
    pub fn decided(weight_kg: f64, status: AttemptStatus) -> Self {
        Self { weight_kg, status }
    }

    /// Whether this attempt still has to be taken.
    ///
    /// A recorded decision retires the attempt even when it was a no-lift;
    /// an undeclared weight means the attempt is not in play yet.
    pub fn is_pending(&self) -> bool {
        self.status == AttemptStatus::NotTaken && self.weight_kg > 0.0
    }
}

/// One competitor-in-meet record.
///
/// Owned by meet administration; the order engine only reads it. Serialized
/// in camelCase so the full lifter record can go out in broadcast payloads
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
    /// Bodyweight in kg. Zero until weigh-in is recorded.
    pub bodyweight_kg: f64,
    pub day: u32,
    pub platform: u32,
    pub flight: Flight,
    /// Tie-break ordering value, assigned independent of performance.
    pub lot: u32,
    pub squat: [Attempt; ATTEMPTS_PER_LIFT],
    pub bench: [Attempt; ATTEMPTS_PER_LIFT],
    pub deadlift: [Attempt; ATTEMPTS_PER_LIFT],
}

impl Entry {
    pub fn attempts(&self, lift: Lift) -> &[Attempt; ATTEMPTS_PER_LIFT] {
        match lift {
            Lift::Squat => &self.squat,
            Lift::Bench => &self.bench,
            Lift::Deadlift => &self.deadlift,
        }
    }

    pub fn attempts_mut(&mut self, lift: Lift) -> &mut [Attempt; ATTEMPTS_PER_LIFT] {
        match lift {
            Lift::Squat => &mut self.squat,
            Lift::Bench => &mut self.bench,
            Lift::Deadlift => &mut self.deadlift,
        }
    }

    /// One-indexed numbers of every pending attempt for the lift, ascending.
    pub fn pending_attempts(&self, lift: Lift) -> impl Iterator<Item = u32> + '_ {
        self.attempts(lift)
            .iter()
            .enumerate()
            .filter(|(_, attempt)| attempt.is_pending())
            .map(|(idx, _)| idx as u32 + 1)
    }

    /// One-indexed number of the lowest pending attempt for the lift,
    /// or `None` if the entry is finished with it.
    pub fn pending_attempt(&self, lift: Lift) -> Option<u32> {
        self.pending_attempts(lift).next()
    }
}

/// Process-wide selection of what is currently being lifted.
///
/// Mutated by meet control, read-only to the order engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingState {
    pub day: u32,
    pub platform: u32,
    pub flight: Flight,
    pub lift: Lift,
}

/// Federation-configured rule for ordering entries on the same attempt number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    LotNumber,
    Bodyweight,
}

/// Meet-level configuration consumed by the broadcast path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetInfo {
    #[serde(default)]
    pub name: String,
    /// Whether the meet displays weights in kg (false means pounds).
    #[serde(default = "default_in_kg")]
    pub in_kg: bool,
    #[serde(default = "default_classes_men")]
    pub weight_classes_kg_men: Vec<f64>,
    #[serde(default = "default_classes_women")]
    pub weight_classes_kg_women: Vec<f64>,
    #[serde(default = "default_classes_men")]
    pub weight_classes_kg_mx: Vec<f64>,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl MeetInfo {
    /// Weight-class boundary table for the given sex category.
    pub fn classes_for_sex(&self, sex: Sex) -> &[f64] {
        match sex {
            Sex::M => &self.weight_classes_kg_men,
            Sex::F => &self.weight_classes_kg_women,
            Sex::Mx => &self.weight_classes_kg_mx,
        }
    }

    pub fn weight_unit(&self) -> WeightUnit {
        if self.in_kg {
            WeightUnit::Kg
        } else {
            WeightUnit::Lb
        }
    }
}

impl Default for MeetInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            in_kg: default_in_kg(),
            weight_classes_kg_men: default_classes_men(),
            weight_classes_kg_women: default_classes_women(),
            weight_classes_kg_mx: default_classes_men(),
            tie_break: TieBreak::default(),
        }
    }
}

fn default_in_kg() -> bool {
    true
}

fn default_classes_men() -> Vec<f64> {
    vec![59.0, 66.0, 74.0, 83.0, 93.0, 105.0, 120.0]
}

fn default_classes_women() -> Vec<f64> {
    vec![47.0, 52.0, 57.0, 63.0, 69.0, 76.0, 84.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared_entry() -> Entry {
        Entry {
            id: 1,
            name: "Test Lifter".to_string(),
            sex: Sex::M,
            bodyweight_kg: 82.5,
            day: 1,
            platform: 1,
            flight: "A".into(),
            lot: 7,
            squat: [
                Attempt::declared(100.0),
                Attempt::declared(105.0),
                Attempt::declared(110.0),
            ],
            bench: [Attempt::default(); ATTEMPTS_PER_LIFT],
            deadlift: [Attempt::default(); ATTEMPTS_PER_LIFT],
        }
    }

    #[test]
    fn test_pending_attempt_starts_at_one() {
        let entry = declared_entry();
        assert_eq!(entry.pending_attempt(Lift::Squat), Some(1));
    }

    #[test]
    fn test_no_lift_retires_the_attempt() {
        let mut entry = declared_entry();
        entry.squat[0] = Attempt::decided(100.0, AttemptStatus::NoLift);
        assert_eq!(entry.pending_attempt(Lift::Squat), Some(2));
    }

    #[test]
    fn test_pending_attempts_enumerates_every_open_attempt() {
        let mut entry = declared_entry();
        entry.squat[0] = Attempt::decided(100.0, AttemptStatus::GoodLift);
        let pending: Vec<u32> = entry.pending_attempts(Lift::Squat).collect();
        assert_eq!(pending, vec![2, 3]);
    }

    #[test]
    fn test_all_decided_means_no_pending() {
        let mut entry = declared_entry();
        for attempt in entry.squat.iter_mut() {
            attempt.status = AttemptStatus::GoodLift;
        }
        assert_eq!(entry.pending_attempt(Lift::Squat), None);
    }

    #[test]
    fn test_undeclared_weights_are_not_pending() {
        let entry = declared_entry();
        // Bench attempts were never declared.
        assert_eq!(entry.pending_attempt(Lift::Bench), None);
    }

    #[test]
    fn test_flight_ordering_is_lexical() {
        let mut flights = vec![Flight::from("C"), Flight::from("A"), Flight::from("B")];
        flights.sort();
        assert_eq!(flights, vec!["A".into(), "B".into(), "C".into()]);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = declared_entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"bodyweightKg\":82.5"));
        assert!(json.contains("\"weightKg\":100.0"));
        assert!(json.contains("\"status\":\"notTaken\""));
    }

    #[test]
    fn test_lift_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lift::Squat).unwrap(), "\"S\"");
        assert_eq!(serde_json::to_string(&Lift::Deadlift).unwrap(), "\"D\"");
    }

    #[test]
    fn test_weight_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WeightUnit::Kg).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Lb).unwrap(), "\"lb\"");
    }
}
