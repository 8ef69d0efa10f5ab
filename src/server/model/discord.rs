use serde::Serialize;
use serenity::all::GuildChannel;

/// Discord channel type code of a regular guild text channel.
pub const TEXT_CHANNEL_KIND: u8 = 0;

/// Base URL of shareable invite links.
pub const INVITE_BASE_URL: &str = "https://discord.gg";

/// The parts of a guild channel the invite flow needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordChannel {
    pub id: u64,
    pub kind: u8,
}

impl DiscordChannel {
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            kind: u8::from(channel.kind),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == TEXT_CHANNEL_KIND
    }
}

/// Body of `POST /channels/{channel_id}/invites`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InviteParams {
    /// Lifetime in seconds, 0 never expires.
    pub max_age: u32,
    /// Use cap, 0 is unlimited.
    pub max_uses: u8,
    pub temporary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedInvite {
    pub code: String,
}

impl CreatedInvite {
    pub fn url(&self) -> String {
        format!("{}/{}", INVITE_BASE_URL, self.code)
    }
}
