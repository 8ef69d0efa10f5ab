use chrono::Utc;

use crate::server::service::{interaction::CommandReply, server::ServerRecordStore};

pub const BUMP_SUCCESS_MESSAGE: &str =
    "Server bumped! It will now show up higher in the listing.";
pub const BUMP_NOT_LISTED_MESSAGE: &str =
    "This server is not listed yet. Add it on the website before bumping.";
pub const BUMP_FAILED_MESSAGE: &str = "Failed to bump this server. Please try again later.";

/// Touches the listing's `updated_at` if the guild has been registered.
///
/// Performs at most one write and never retries. Unregistered guilds are not
/// created as a side effect.
pub async fn bump(servers: &dyn ServerRecordStore, guild_id: &str) -> CommandReply {
    let server = match servers.find_server(guild_id).await {
        Ok(Some(server)) => server,
        Ok(None) => return CommandReply::SoftFail(BUMP_NOT_LISTED_MESSAGE.to_string()),
        Err(e) => {
            tracing::error!("Failed to look up listing {}: {}", guild_id, e);
            return CommandReply::SoftFail(BUMP_FAILED_MESSAGE.to_string());
        }
    };

    match servers.touch_server(&server.id, Utc::now()).await {
        Ok(true) => CommandReply::Ok(BUMP_SUCCESS_MESSAGE.to_string()),
        // Deleted between the lookup and the update
        Ok(false) => CommandReply::SoftFail(BUMP_NOT_LISTED_MESSAGE.to_string()),
        Err(e) => {
            tracing::error!("Failed to bump listing {}: {}", server.id, e);
            CommandReply::SoftFail(BUMP_FAILED_MESSAGE.to_string())
        }
    }
}
