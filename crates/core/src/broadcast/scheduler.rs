//! Arming scheduler for delayed broadcasts.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::BroadcastConfig;
use crate::meet::{Entry, Lift, MeetInfo};
use crate::order::LiftingOrder;
use crate::weight_class;

use super::client::ApiClient;
use super::policy::{BroadcastPolicy, Interaction, MessageFamily};
use super::types::{AttemptApiModel, BroadcastError, ResultApiModel};

/// A broadcast that has been armed and will dispatch after its delay.
///
/// The payload was snapshotted at arming time; whatever happens to the meet
/// state during the delay window, the originally captured snapshot is what
/// goes out. Dropping the handle does not cancel the task.
pub struct ArmedBroadcast {
    pub delay: Duration,
    pub armed_at: DateTime<Utc>,
    handle: JoinHandle<()>,
}

impl ArmedBroadcast {
    /// Cancellation hook. Normal operation never cancels an armed broadcast;
    /// this exists so a caller that wants to drop a stale snapshot can.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the dispatch task to run to completion.
    pub async fn wait(self) {
        let _ = self.handle.await;
    }
}

/// Stateful coordinator between interactions and the scoreboard feed.
///
/// Configuration is injected once at construction and immutable thereafter.
pub struct BroadcastScheduler {
    policy: BroadcastPolicy,
    meet: MeetInfo,
    client: Arc<dyn ApiClient>,
}

impl BroadcastScheduler {
    pub fn new(config: BroadcastConfig, meet: MeetInfo, client: Arc<dyn ApiClient>) -> Self {
        Self {
            policy: BroadcastPolicy::new(config),
            meet,
            client,
        }
    }

    pub fn policy(&self) -> &BroadcastPolicy {
        &self.policy
    }

    /// Classify an interaction and, if it qualifies, arm a delayed broadcast.
    ///
    /// Returns `Ok(None)` when the interaction does not broadcast or when
    /// there is no current lifter to report (logged, not dispatched). An
    /// interaction kind the family does not define is an error: the policy
    /// table and the call site are out of sync.
    pub fn on_interaction(
        &self,
        family: MessageFamily,
        kind: Interaction,
        order: &LiftingOrder,
        lift: Lift,
    ) -> Result<Option<ArmedBroadcast>, BroadcastError> {
        let action = self.policy.action(family, kind)?;
        if !action.send_data {
            debug!(?family, ?kind, "interaction does not broadcast");
            return Ok(None);
        }

        let Some(entry) = order.current_entry() else {
            warn!(?family, ?kind, "no lifter data to send, broadcast suppressed");
            return Ok(None);
        };

        // Snapshot at arming time: the payload must reflect the lifter that
        // actually attempted, not whatever the roster shows when the timer
        // fires.
        let delay = Duration::from_millis(action.delay_ms);
        let client = Arc::clone(&self.client);
        let handle = match family {
            MessageFamily::LiftAttempt => {
                let model = self.attempt_model(entry, lift);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    Self::dispatch_attempt(client, model).await;
                })
            }
            MessageFamily::LiftResult => {
                let model = self.result_model(entry, lift);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    Self::dispatch_result(client, model).await;
                })
            }
        };

        debug!(?family, ?kind, delay_ms = action.delay_ms, "broadcast armed");
        Ok(Some(ArmedBroadcast {
            delay,
            armed_at: Utc::now(),
            handle,
        }))
    }

    fn attempt_model(&self, entry: &Entry, lift: Lift) -> AttemptApiModel {
        AttemptApiModel {
            competition_name: self.meet.name.clone(),
            lifter: entry.clone(),
            lift_code: lift,
            weight_unit: self.meet.weight_unit(),
            lifter_weight_class: weight_class::resolve_for_entry(&self.meet, entry),
        }
    }

    fn result_model(&self, entry: &Entry, lift: Lift) -> ResultApiModel {
        ResultApiModel {
            competition_name: self.meet.name.clone(),
            lifter: entry.clone(),
            lift_code: lift,
            weight_unit: self.meet.weight_unit(),
        }
    }

    /// Timer-elapsed half of the contract: best-effort dispatch.
    async fn dispatch_attempt(client: Arc<dyn ApiClient>, model: AttemptApiModel) {
        if let Err(e) = client.post_attempt(&model).await {
            warn!(lifter = %model.lifter.name, "failed to post lift attempt: {}", e);
        }
    }

    async fn dispatch_result(client: Arc<dyn ApiClient>, model: ResultApiModel) {
        if let Err(e) = client.post_result(&model).await {
            warn!(lifter = %model.lifter.name, "failed to post lift result: {}", e);
        }
    }
}
