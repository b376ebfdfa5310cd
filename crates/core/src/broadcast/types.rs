//! Outbound payload shapes and the broadcast error taxonomy.

use serde::Serialize;
use thiserror::Error;

use crate::meet::{Entry, Lift, WeightUnit};

use super::policy::PolicyError;

/// Payload announcing the upcoming attempt to the scoreboard feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptApiModel {
    pub competition_name: String,
    /// Full lifter record as known at arming time.
    pub lifter: Entry,
    pub lift_code: Lift,
    pub weight_unit: WeightUnit,
    /// Resolved weight-class label; empty when weigh-in is not recorded.
    pub lifter_weight_class: String,
}

/// Payload reporting the recorded judgment for an attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultApiModel {
    pub competition_name: String,
    pub lifter: Entry,
    pub lift_code: Lift,
    pub weight_unit: WeightUnit,
}

/// Errors the broadcast path reports to its caller.
///
/// Only programmer errors propagate: a missing current lifter is logged and
/// suppressed, and transport failures are logged inside the dispatch task.
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
