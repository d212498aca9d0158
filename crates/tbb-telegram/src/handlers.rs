use std::sync::Arc;

use teloxide::prelude::*;

use tbb_core::domain::{ChatId, UserId};

use crate::router::AppState;

/// Hand one incoming message to the core pipeline.
///
/// Updates without a sender or without text carry nothing the policy could
/// act on and are dropped here. Outcomes are logged by the dispatcher; a
/// failed delivery is never resurfaced into the chat.
pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let chat_id = ChatId(msg.chat.id.0);
    let user_id = UserId(user.id.0 as i64);

    let _ = state.dispatcher.dispatch(chat_id, user_id, text).await;

    Ok(())
}
