//! Command policy: the decision table for `/text`.
//!
//! `decide` is a pure function of (raw message, admin verdict); no history
//! across invocations influences the result, and it never fails.

use crate::membership::AdminVerdict;

/// The one recognized command. Case-sensitive, must sit at position 0.
pub const COMMAND: &str = "/text";

pub const DENIAL_TEXT: &str = "Only admins may use this command.";
pub const USAGE_TEXT: &str = "Usage: /text <message to broadcast>";

/// Parsed view of an incoming `/text` message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub argument: Option<String>,
}

/// The reply text that crosses back out of the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    fn fixed(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// What the policy wants done with an incoming message.
///
/// `Ignore` is the deterministic fallback for input that is not the command
/// (including a `/text` token embedded mid-sentence): no reply is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Broadcast(Reply),
    Ignore,
}

/// Recognize the command and extract its argument.
///
/// Parsing never fails: malformed input degrades to "no argument present".
/// A whitespace-only remainder counts as absent.
pub fn parse(raw: &str) -> Option<Command> {
    let rest = raw.strip_prefix(COMMAND)?;
    let argument = rest.trim();
    Some(Command {
        argument: (!argument.is_empty()).then(|| argument.to_string()),
    })
}

/// Decide the reply for a raw message and an admin verdict.
///
/// Authorization is checked before the argument is inspected, so a
/// non-admin never learns whether they supplied a valid argument.
pub fn decide(raw: &str, verdict: &AdminVerdict) -> Decision {
    let Some(command) = parse(raw) else {
        return Decision::Ignore;
    };

    if !verdict.is_admin {
        return Decision::Broadcast(Reply::fixed(DENIAL_TEXT));
    }

    match command.argument {
        None => Decision::Broadcast(Reply::fixed(USAGE_TEXT)),
        // Verbatim echo; the policy appends nothing.
        Some(text) => Decision::Broadcast(Reply { text }),
    }
}
