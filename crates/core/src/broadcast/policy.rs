//! Interaction classification.
//!
//! Every recognized user interaction maps, per message family, to a
//! `{send_data, delay_ms}` policy entry. The mapping is typed rather than
//! string-keyed: an interaction kind a family does not define is a
//! programmer error surfaced as [`PolicyError::UnknownInteraction`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BroadcastConfig;

#[derive(Debug, Error)]
pub enum PolicyError {
    /// The policy table and the call site have drifted out of sync.
    #[error("interaction {kind:?} is not defined for the {family:?} message family")]
    UnknownInteraction {
        family: MessageFamily,
        kind: Interaction,
    },

    #[error("unrecognized interaction kind: {0}")]
    UnrecognizedKind(String),
}

/// A recognized user interaction on the lifting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Interaction {
    GoodLift,
    NoLift,
    DayChange,
    PlatformChange,
    LiftChange,
    FlightChange,
    AttemptChange,
    LifterChange,
}

impl FromStr for Interaction {
    type Err = PolicyError;

    /// Parse the interaction-kind names used by the scoreboard config.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goodLift" => Ok(Self::GoodLift),
            "noLift" => Ok(Self::NoLift),
            "dayDropdownChange" => Ok(Self::DayChange),
            "platformDropdownChange" => Ok(Self::PlatformChange),
            "liftDropdownChange" => Ok(Self::LiftChange),
            "flightDropdownChange" => Ok(Self::FlightChange),
            "attemptDropdownChange" => Ok(Self::AttemptChange),
            "lifterDropdownChange" => Ok(Self::LifterChange),
            other => Err(PolicyError::UnrecognizedKind(other.to_string())),
        }
    }
}

/// Which outbound message the interaction belongs to.
///
/// Attempt broadcasts announce the upcoming lifter after a delay; result
/// broadcasts report the recorded judgment and go out immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageFamily {
    LiftAttempt,
    LiftResult,
}

/// Whether an interaction broadcasts, and after how long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    #[serde(default)]
    pub send_data: bool,
    #[serde(default)]
    pub delay_ms: u64,
}

/// Typed lookup over the per-family interaction policies.
#[derive(Debug, Clone)]
pub struct BroadcastPolicy {
    config: BroadcastConfig,
}

impl BroadcastPolicy {
    pub fn new(config: BroadcastConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn route(&self, family: MessageFamily) -> &str {
        match family {
            MessageFamily::LiftAttempt => &self.config.lift_attempt.route,
            MessageFamily::LiftResult => &self.config.lift_result.route,
        }
    }

    /// Policy entry for an interaction within a message family.
    pub fn action(
        &self,
        family: MessageFamily,
        kind: Interaction,
    ) -> Result<PolicyEntry, PolicyError> {
        let family_config = match family {
            MessageFamily::LiftAttempt => &self.config.lift_attempt,
            MessageFamily::LiftResult => &self.config.lift_result,
        };
        family_config
            .entry(kind)
            .ok_or(PolicyError::UnknownInteraction { family, kind })
    }
}
