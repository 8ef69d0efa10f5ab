//! Outbound Discord REST calls.
//!
//! Handlers depend on the `DiscordApi` trait so tests can substitute a fake; the
//! production implementation goes through Serenity's HTTP client.

use async_trait::async_trait;
use serenity::all::{ChannelId, GuildId};
use serenity::http::Http;
use std::{num::NonZeroU64, sync::Arc};

use crate::{
    model::command::CommandSpec,
    server::{
        error::discord::DiscordApiError,
        model::discord::{CreatedInvite, DiscordChannel, InviteParams},
    },
};

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// `GET /guilds/{guild_id}/channels`, in the order Discord returns them.
    async fn list_guild_channels(&self, guild_id: &str)
        -> Result<Vec<DiscordChannel>, DiscordApiError>;

    /// `POST /channels/{channel_id}/invites`.
    async fn create_invite(
        &self,
        channel_id: u64,
        params: &InviteParams,
    ) -> Result<CreatedInvite, DiscordApiError>;

    /// `PUT /applications/{application_id}/commands`, replacing the whole command set.
    ///
    /// Returns the number of commands Discord now has registered.
    async fn overwrite_global_commands(
        &self,
        commands: &[CommandSpec],
    ) -> Result<usize, DiscordApiError>;
}

/// Discord REST client backed by Serenity.
///
/// Holds no HTTP client when the bot token is missing, in which case every call
/// fails fast with `DiscordApiError::MissingBotToken`.
pub struct SerenityDiscordClient {
    http: Option<Arc<Http>>,
}

impl SerenityDiscordClient {
    pub fn new(http: Option<Arc<Http>>) -> Self {
        Self { http }
    }

    fn http(&self) -> Result<&Http, DiscordApiError> {
        self.http.as_deref().ok_or_else(|| {
            tracing::warn!("Skipping Discord REST call, no bot token configured");
            DiscordApiError::MissingBotToken
        })
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordClient {
    async fn list_guild_channels(
        &self,
        guild_id: &str,
    ) -> Result<Vec<DiscordChannel>, DiscordApiError> {
        let http = self.http()?;
        let guild_id = GuildId::new(parse_snowflake(guild_id)?.get());

        let channels = http.get_channels(guild_id).await?;

        Ok(channels.iter().map(DiscordChannel::from_serenity).collect())
    }

    async fn create_invite(
        &self,
        channel_id: u64,
        params: &InviteParams,
    ) -> Result<CreatedInvite, DiscordApiError> {
        let http = self.http()?;
        let channel_id = NonZeroU64::new(channel_id)
            .map(|id| ChannelId::new(id.get()))
            .ok_or_else(|| DiscordApiError::InvalidSnowflake(channel_id.to_string()))?;

        let invite = http.create_invite(channel_id, params, None).await?;

        Ok(CreatedInvite { code: invite.code })
    }

    async fn overwrite_global_commands(
        &self,
        commands: &[CommandSpec],
    ) -> Result<usize, DiscordApiError> {
        let http = self.http()?;
        if http.application_id().is_none() {
            return Err(DiscordApiError::MissingApplicationId);
        }

        let registered = http.create_global_commands(&commands).await?;

        Ok(registered.len())
    }
}

/// Parses a snowflake transmitted as a string.
fn parse_snowflake(value: &str) -> Result<NonZeroU64, DiscordApiError> {
    value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|_| DiscordApiError::InvalidSnowflake(value.to_string()))
}
