//! Interaction dispatch and slash command handlers.
//!
//! Every interaction is answered synchronously in a single response. Handlers never
//! return errors to the caller: failures are turned into a `CommandReply::SoftFail`
//! carrying a user-facing message.

pub mod bump;
pub mod invite;
pub mod options;

use crate::{
    model::interaction::{Interaction, InteractionResponse, InteractionType},
    server::service::{
        discord::DiscordApi,
        registrar::{BUMP_COMMAND, INVITE_COMMAND},
        server::ServerRecordStore,
    },
};

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command.";
pub const UNSUPPORTED_INTERACTION_MESSAGE: &str = "Unsupported interaction type.";
pub const GUILD_ONLY_MESSAGE: &str = "This command can only be used inside a server.";

/// Outcome of a command handler.
///
/// Both variants render as the same chat message; the split exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Ok(String),
    SoftFail(String),
}

impl CommandReply {
    pub fn content(&self) -> &str {
        match self {
            Self::Ok(content) | Self::SoftFail(content) => content,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn into_interaction_response(self) -> InteractionResponse {
        match self {
            Self::Ok(content) | Self::SoftFail(content) => InteractionResponse::message(content),
        }
    }
}

/// Routes verified interactions to their handlers.
pub struct InteractionService<'a> {
    servers: &'a dyn ServerRecordStore,
    discord: &'a dyn DiscordApi,
}

impl<'a> InteractionService<'a> {
    pub fn new(servers: &'a dyn ServerRecordStore, discord: &'a dyn DiscordApi) -> Self {
        Self { servers, discord }
    }

    pub async fn dispatch(&self, interaction: Interaction) -> InteractionResponse {
        match interaction.kind {
            InteractionType::Ping => InteractionResponse::pong(),
            InteractionType::ApplicationCommand => {
                self.run_command(interaction).await.into_interaction_response()
            }
            InteractionType::Other(code) => {
                tracing::debug!("Ignoring unsupported interaction type {}", code);
                InteractionResponse::message(UNSUPPORTED_INTERACTION_MESSAGE)
            }
        }
    }

    /// Runs a slash command by exact name.
    pub async fn run_command(&self, interaction: Interaction) -> CommandReply {
        let Some(data) = interaction.data else {
            return CommandReply::SoftFail(UNKNOWN_COMMAND_MESSAGE.to_string());
        };
        let guild_id = interaction.guild_id.filter(|id| !id.trim().is_empty());

        let reply = match (data.name.as_str(), guild_id.as_deref()) {
            (BUMP_COMMAND, Some(guild_id)) => bump::bump(self.servers, guild_id).await,
            (INVITE_COMMAND, Some(guild_id)) => {
                invite::invite(self.discord, guild_id, &data.options).await
            }
            (BUMP_COMMAND | INVITE_COMMAND, None) => {
                CommandReply::SoftFail(GUILD_ONLY_MESSAGE.to_string())
            }
            _ => CommandReply::SoftFail(UNKNOWN_COMMAND_MESSAGE.to_string()),
        };

        match &reply {
            CommandReply::Ok(_) => tracing::info!(
                "/{} succeeded for guild {}",
                data.name,
                guild_id.as_deref().unwrap_or("-")
            ),
            CommandReply::SoftFail(content) => tracing::warn!(
                "/{} soft-failed for guild {}: {}",
                data.name,
                guild_id.as_deref().unwrap_or("-"),
                content
            ),
        }

        reply
    }
}

#[cfg(test)]
mod test;
