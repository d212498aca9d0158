//! Telegram adapter (teloxide).
//!
//! Implements the `tbb-core` oracle and delivery ports over the Telegram
//! Bot API: `getChatMember` for the admin check, `sendMessage` for the
//! broadcast. Both implementations are total; failures come back as values.

use std::time::Duration;

use async_trait::async_trait;

use teloxide::{prelude::*, types::ChatMemberKind, ApiError, RequestError};

use tokio::time::timeout;

pub mod handlers;
pub mod router;

use tbb_core::{
    config::Config,
    domain::{ChatId, MessageId, UserId},
    membership::{AdminVerdict, MemberStatus},
    policy::Reply,
    ports::{AdminOracle, DeliveryOutcome, DeliveryPort},
};

const MISSING_TOKEN: &str = "TELEGRAM_BOT_TOKEN is not configured";

/// Telegram-backed implementation of both outbound ports.
///
/// When the credential is unconfigured the gateway holds no bot at all,
/// and every call reports a failure without touching the network.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Option<Bot>,
    api_timeout: Duration,
}

impl TelegramGateway {
    pub fn from_config(cfg: &Config) -> Self {
        let bot = cfg
            .bot_token
            .as_ref()
            .map(|token| Bot::with_client(token.clone(), http_client(cfg.api_timeout)));

        Self {
            bot,
            api_timeout: cfg.api_timeout,
        }
    }

    pub fn bot(&self) -> Option<Bot> {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    /// Run one API request with a bounded wait. At most one attempt.
    async fn bounded<T, R>(&self, req: R) -> std::result::Result<T, String>
    where
        R: std::future::IntoFuture<Output = std::result::Result<T, RequestError>>,
    {
        match timeout(self.api_timeout, std::future::IntoFuture::into_future(req)).await {
            Ok(Ok(v)) => Ok(v),
            Ok(Err(e)) => Err(describe_request_error(&e)),
            Err(_) => Err(format!(
                "telegram api call timed out after {:?}",
                self.api_timeout
            )),
        }
    }
}

/// HTTP client with explicit connect and request deadlines, so neither
/// outbound call can block a pipeline indefinitely.
fn http_client(request_timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(request_timeout)
        .build()
        .expect("failed to build HTTP client")
}

fn member_status(kind: &ChatMemberKind) -> MemberStatus {
    if kind.is_owner() {
        MemberStatus::Creator
    } else if kind.is_administrator() {
        MemberStatus::Administrator
    } else if kind.is_member() {
        MemberStatus::Member
    } else {
        MemberStatus::Other
    }
}

fn describe_request_error(e: &RequestError) -> String {
    match e {
        // Carry the remote's own description through unchanged.
        RequestError::Api(api) => api.to_string(),
        other => other.to_string(),
    }
}

#[async_trait]
impl AdminOracle for TelegramGateway {
    async fn check_admin(&self, chat_id: ChatId, user_id: UserId) -> AdminVerdict {
        let Some(bot) = &self.bot else {
            return AdminVerdict::failure(MISSING_TOKEN);
        };

        let user = teloxide::types::UserId(user_id.0 as u64);
        match self
            .bounded(bot.get_chat_member(Self::tg_chat(chat_id), user))
            .await
        {
            Ok(member) => AdminVerdict::from_status(member_status(&member.kind)),
            Err(err) => AdminVerdict::failure(err),
        }
    }
}

#[async_trait]
impl DeliveryPort for TelegramGateway {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> DeliveryOutcome {
        let Some(bot) = &self.bot else {
            return DeliveryOutcome::failed(MISSING_TOKEN);
        };

        // Plain text, no parse mode: the broadcast goes out verbatim.
        match self
            .bounded(bot.send_message(Self::tg_chat(chat_id), reply.text.clone()))
            .await
        {
            Ok(msg) => DeliveryOutcome::delivered(MessageId(msg.id.0)),
            Err(err) => DeliveryOutcome::failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> TelegramGateway {
        TelegramGateway::from_config(&Config {
            bot_token: None,
            api_timeout: Duration::from_secs(1),
        })
    }

    #[tokio::test]
    async fn missing_token_fails_delivery_without_a_network_call() {
        let gw = unconfigured();
        let outcome = gw
            .send(
                ChatId(1),
                &Reply {
                    text: "hello".to_string(),
                },
            )
            .await;

        assert!(!outcome.success);
        assert_eq!(outcome.message_id, None);
        assert_eq!(outcome.error.as_deref(), Some(MISSING_TOKEN));
    }

    #[tokio::test]
    async fn missing_token_fails_the_admin_check_closed() {
        let gw = unconfigured();
        let verdict = gw.check_admin(ChatId(1), UserId(2)).await;

        assert!(!verdict.is_admin);
        assert_eq!(verdict.error.as_deref(), Some(MISSING_TOKEN));
    }

    #[test]
    fn remote_description_is_carried_into_the_error() {
        let e = RequestError::Api(ApiError::Unknown(
            "Bad Request: chat not found".to_string(),
        ));
        assert!(describe_request_error(&e).contains("chat not found"));
    }
}
