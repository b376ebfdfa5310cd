//! Configuration types.
//!
//! Loaded once at startup and injected where needed; nothing in the crate
//! reads configuration through a global. The broadcast defaults mirror the
//! scoreboard service's published interaction table.

use serde::{Deserialize, Serialize};

use crate::broadcast::{Interaction, PolicyEntry};
use crate::meet::MeetInfo;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub broadcast: BroadcastConfig,
    #[serde(default)]
    pub meet: MeetInfo,
}

/// Scoreboard broadcast configuration: where to send, and which interactions
/// qualify per message family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_lift_attempt")]
    pub lift_attempt: FamilyConfig,
    #[serde(default = "default_lift_result")]
    pub lift_result: FamilyConfig,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lift_attempt: default_lift_attempt(),
            lift_result: default_lift_result(),
        }
    }
}

/// Route and per-interaction policies for one message family.
///
/// An interaction left unset is not defined for the family; looking it up is
/// a policy error, not a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub route: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good_lift: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_lift: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_change: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_change: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift_change: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_change: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_change: Option<PolicyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifter_change: Option<PolicyEntry>,
}

impl FamilyConfig {
    /// Policy entry for the interaction, if the family defines it.
    pub fn entry(&self, kind: Interaction) -> Option<PolicyEntry> {
        match kind {
            Interaction::GoodLift => self.good_lift,
            Interaction::NoLift => self.no_lift,
            Interaction::DayChange => self.day_change,
            Interaction::PlatformChange => self.platform_change,
            Interaction::LiftChange => self.lift_change,
            Interaction::FlightChange => self.flight_change,
            Interaction::AttemptChange => self.attempt_change,
            Interaction::LifterChange => self.lifter_change,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost/api".to_string()
}

fn default_lift_attempt() -> FamilyConfig {
    let broadcast_delayed = Some(PolicyEntry {
        send_data: true,
        delay_ms: 5000,
    });
    let suppressed = Some(PolicyEntry {
        send_data: false,
        delay_ms: 0,
    });
    FamilyConfig {
        route: "/liftattempt".to_string(),
        good_lift: broadcast_delayed,
        no_lift: broadcast_delayed,
        day_change: suppressed,
        platform_change: suppressed,
        lift_change: suppressed,
        flight_change: suppressed,
        attempt_change: suppressed,
        lifter_change: suppressed,
    }
}

fn default_lift_result() -> FamilyConfig {
    // Result judgments go out immediately; no delay is defined for them.
    let broadcast_now = Some(PolicyEntry {
        send_data: true,
        delay_ms: 0,
    });
    FamilyConfig {
        route: "/liftresult".to_string(),
        good_lift: broadcast_now,
        no_lift: broadcast_now,
        day_change: None,
        platform_change: None,
        lift_change: None,
        flight_change: None,
        attempt_change: None,
        lifter_change: None,
    }
}
