use crate::{
    model::interaction::CommandOption,
    server::{
        model::discord::CreatedInvite,
        service::{
            discord::DiscordApi,
            interaction::{
                options::{resolve_invite_options, InviteOptions},
                CommandReply,
            },
        },
    },
};

pub const INVITE_PERMISSION_MESSAGE: &str =
    "I couldn't create an invite. Make sure I have the View Channels and Create Invite permissions.";
pub const INVITE_NO_CHANNEL_MESSAGE: &str =
    "No suitable text channel was found to create an invite in.";

/// Creates an invite on the guild's first text channel.
///
/// Two remote calls, each with its own failure message. Nothing is persisted locally.
/// The channel is the first text channel in the order Discord lists them; no attempt
/// is made to prefer a "general" or system channel.
pub async fn invite(
    discord: &dyn DiscordApi,
    guild_id: &str,
    options: &[CommandOption],
) -> CommandReply {
    let resolved = resolve_invite_options(options);

    let channels = match discord.list_guild_channels(guild_id).await {
        Ok(channels) => channels,
        Err(e) => {
            tracing::warn!("Failed to list channels for guild {}: {}", guild_id, e);
            return CommandReply::SoftFail(INVITE_PERMISSION_MESSAGE.to_string());
        }
    };

    let Some(channel) = channels.iter().find(|channel| channel.is_text()) else {
        return CommandReply::SoftFail(INVITE_NO_CHANNEL_MESSAGE.to_string());
    };

    match discord.create_invite(channel.id, &resolved.to_params()).await {
        Ok(invite) => CommandReply::Ok(format_invite_reply(&invite, resolved)),
        Err(e) => {
            tracing::warn!(
                "Failed to create invite on channel {} in guild {}: {}",
                channel.id,
                guild_id,
                e
            );
            CommandReply::SoftFail(INVITE_PERMISSION_MESSAGE.to_string())
        }
    }
}

fn format_invite_reply(invite: &CreatedInvite, options: InviteOptions) -> String {
    let expiry = match options.expiry_hours {
        0 => "never".to_string(),
        1 => "in 1 hour".to_string(),
        hours => format!("in {} hours", hours),
    };
    let uses = match options.max_uses {
        0 => "unlimited".to_string(),
        uses => uses.to_string(),
    };

    format!(
        "Here is your invite: {}\nExpires: {}\nMax uses: {}",
        invite.url(),
        expiry,
        uses
    )
}
