//! The two-hop pipeline: admin oracle, then policy, then delivery.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::{ChatId, UserId},
    policy::{self, Decision},
    ports::{AdminOracle, DeliveryOutcome, DeliveryPort},
};

/// Sequences oracle -> policy -> delivery for one incoming message.
///
/// Owns no decision logic. The hops run strictly in order: the policy never
/// executes before the oracle's verdict is available, so denial always takes
/// precedence over content disclosure.
pub struct Dispatcher {
    oracle: Arc<dyn AdminOracle>,
    delivery: Arc<dyn DeliveryPort>,
}

impl Dispatcher {
    pub fn new(oracle: Arc<dyn AdminOracle>, delivery: Arc<dyn DeliveryPort>) -> Self {
        Self { oracle, delivery }
    }

    /// Handle one raw message. Returns `None` when the policy ignored the
    /// input (delivery is not invoked at all in that case).
    pub async fn dispatch(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        raw: &str,
    ) -> Option<DeliveryOutcome> {
        let verdict = self.oracle.check_admin(chat_id, user_id).await;
        if let Some(err) = &verdict.error {
            warn!(chat = chat_id.0, user = user_id.0, "admin check failed: {err}");
        }

        let reply = match policy::decide(raw, &verdict) {
            Decision::Broadcast(reply) => reply,
            Decision::Ignore => {
                debug!(chat = chat_id.0, "message ignored by policy");
                return None;
            }
        };

        let outcome = self.delivery.send(chat_id, &reply).await;
        if outcome.success {
            info!(
                chat = chat_id.0,
                message_id = ?outcome.message_id,
                "reply delivered"
            );
        } else {
            // A failed delivery is logged only; it is never retried and
            // never resurfaced into the chat.
            warn!(chat = chat_id.0, "delivery failed: {:?}", outcome.error);
        }

        Some(outcome)
    }
}
