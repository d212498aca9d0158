use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageId, UserId},
    membership::AdminVerdict,
    policy::Reply,
};

/// Result of one delivery attempt. At most one attempt is made per reply.
#[derive(Clone, Debug)]
pub struct DeliveryOutcome {
    pub success: bool,
    pub message_id: Option<MessageId>,
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn delivered(message_id: MessageId) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Port for the admin directory query.
///
/// Implementations must be total: any transport or protocol failure is
/// reported as a fail-closed `AdminVerdict`, never as an error.
#[async_trait]
pub trait AdminOracle: Send + Sync {
    async fn check_admin(&self, chat_id: ChatId, user_id: UserId) -> AdminVerdict;
}

/// Port for pushing a finished reply into a chat.
///
/// Implementations must be total: failures (missing credential, remote
/// rejection, transport error) are encoded in the outcome, never raised.
#[async_trait]
pub trait DeliveryPort: Send + Sync {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> DeliveryOutcome;
}
