//! Publishes the slash command schema to Discord once at startup.

use crate::{
    model::command::{CommandOptionSpec, CommandSpec, CHAT_INPUT_COMMAND_TYPE, INTEGER_OPTION_TYPE},
    server::{
        config::Config,
        service::{
            discord::DiscordApi,
            interaction::options::{MAX_EXPIRY_HOURS, MAX_INVITE_USES},
        },
    },
};

pub const BUMP_COMMAND: &str = "bump";
pub const INVITE_COMMAND: &str = "invite";
pub const EXPIRY_OPTION: &str = "expiry";
pub const USES_OPTION: &str = "uses";

/// Every command this webhook answers, in registration order.
pub fn command_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: BUMP_COMMAND.to_string(),
            description: "Bump this server to the top of the listing".to_string(),
            kind: CHAT_INPUT_COMMAND_TYPE,
            options: Vec::new(),
        },
        CommandSpec {
            name: INVITE_COMMAND.to_string(),
            description: "Create an invite link for this server".to_string(),
            kind: CHAT_INPUT_COMMAND_TYPE,
            options: vec![
                CommandOptionSpec {
                    kind: INTEGER_OPTION_TYPE,
                    name: EXPIRY_OPTION.to_string(),
                    description: "Hours until the invite expires (default 24, 0 for never)"
                        .to_string(),
                    required: false,
                    min_value: Some(0),
                    max_value: Some(i64::from(MAX_EXPIRY_HOURS)),
                },
                CommandOptionSpec {
                    kind: INTEGER_OPTION_TYPE,
                    name: USES_OPTION.to_string(),
                    description: "Maximum number of uses (default 0 for unlimited)".to_string(),
                    required: false,
                    min_value: Some(0),
                    max_value: Some(i64::from(MAX_INVITE_USES)),
                },
            ],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Discord accepted the command set and now holds this many commands.
    Registered(usize),
    /// Bot token or application id missing.
    Skipped,
    Failed,
}

/// Replaces the registered command set with `command_specs()`.
///
/// Never fails the caller: problems are logged and reported through the outcome so a
/// failed registration cannot block interaction handling.
pub async fn register_commands(discord: &dyn DiscordApi, config: &Config) -> RegistrationOutcome {
    if config.discord_bot_token.is_none() || config.discord_application_id.is_none() {
        tracing::warn!(
            "Skipping slash command registration, DISCORD_BOT_TOKEN and DISCORD_APPLICATION_ID are both required"
        );
        return RegistrationOutcome::Skipped;
    }

    match discord.overwrite_global_commands(&command_specs()).await {
        Ok(count) => {
            tracing::info!("Registered {} slash commands with Discord", count);
            RegistrationOutcome::Registered(count)
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {}", e);
            RegistrationOutcome::Failed
        }
    }
}
