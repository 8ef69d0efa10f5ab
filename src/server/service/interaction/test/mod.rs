use crate::{
    model::interaction::{CommandOption, Interaction},
    server::{
        service::interaction::{CommandReply, InteractionService},
        test::fake::{server_record, FakeDiscordApi, FakeServerStore},
    },
};
use chrono::{Duration, Utc};
use serde_json::json;


const GUILD_ID: &str = "123456789012345678";

fn interaction(value: serde_json::Value) -> Interaction {
    serde_json::from_value(value).unwrap()
}

fn command(name: &str, guild_id: Option<&str>, options: serde_json::Value) -> Interaction {
    interaction(json!({
        "type": 2,
        "guild_id": guild_id,
        "data": { "name": name, "options": options }
    }))
}

fn options(value: serde_json::Value) -> Vec<CommandOption> {
    serde_json::from_value(value).unwrap()
}
