//! Lifting-order computation and delayed scoreboard broadcasting for
//! powerlifting meets.
//!
//! The flow: an interaction on the lifting screen is classified by the
//! broadcast policy; if it qualifies, the scheduler snapshots the current
//! [`order::LiftingOrder`] (enriched with the lifter's resolved weight
//! class) and dispatches the payload to the external scoreboard feed after
//! the configured delay.

pub mod broadcast;
pub mod config;
pub mod meet;
pub mod order;
pub mod testing;
pub mod weight_class;

pub use broadcast::{
    ApiClient, ApiClientError, ArmedBroadcast, AttemptApiModel, BroadcastError, BroadcastPolicy,
    BroadcastScheduler, HttpApiClient, Interaction, MessageFamily, PolicyEntry, PolicyError,
    ResultApiModel,
};
pub use config::{
    load_config, load_config_from_str, validate_config, BroadcastConfig, Config, ConfigError,
    FamilyConfig,
};
pub use meet::{
    Attempt, AttemptStatus, Entry, Flight, Lift, LiftingState, MeetInfo, Sex, TieBreak, WeightUnit,
};
pub use order::LiftingOrder;
