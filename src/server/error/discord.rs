use thiserror::Error;

/// Failures talking to Discord's REST API.
#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// `DISCORD_BOT_TOKEN` is not configured so no authenticated call can be made.
    #[error("Discord bot token is not configured")]
    MissingBotToken,

    /// `DISCORD_APPLICATION_ID` is not configured, required for command registration.
    #[error("Discord application id is not configured")]
    MissingApplicationId,

    /// An id passed to the client is not a valid snowflake.
    #[error("Invalid Discord snowflake: {0}")]
    InvalidSnowflake(String),

    /// Request failed in transport or Discord answered with a non-2xx status.
    ///
    /// Boxed due to the size of `serenity::Error`.
    #[error(transparent)]
    Request(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for DiscordApiError {
    fn from(err: serenity::Error) -> Self {
        DiscordApiError::Request(Box::new(err))
    }
}
