/// Core error type.
///
/// The adapter crate maps its specific failures into this type so the bot
/// core can handle them consistently. Note that the oracle and delivery
/// ports never return this type: their failures are encoded in the verdict
/// and outcome values they produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
