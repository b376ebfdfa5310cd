//! Delayed scoreboard broadcasting.
//!
//! This module decides which user interactions are relayed to the external
//! scoreboard feed and when: a static per-family policy classifies the
//! interaction, and the scheduler snapshots the lifting order at arming time
//! and dispatches the payload after the configured delay. Delivery is
//! best-effort; transport failures are logged and never surface to the
//! presentation layer.

mod client;
mod policy;
mod scheduler;
mod types;

pub use client::{ApiClient, ApiClientError, HttpApiClient};
pub use policy::{BroadcastPolicy, Interaction, MessageFamily, PolicyEntry, PolicyError};
pub use scheduler::{ArmedBroadcast, BroadcastScheduler};
pub use types::{AttemptApiModel, BroadcastError, ResultApiModel};
