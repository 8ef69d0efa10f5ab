use serde::{Deserialize, Serialize};

/// `CHAT_INPUT` application command type.
pub const CHAT_INPUT_COMMAND_TYPE: u8 = 1;

/// `INTEGER` application command option type.
pub const INTEGER_OPTION_TYPE: u8 = 4;

/// Slash command descriptor published to Discord's command registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOptionSpec {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// Lower bound Discord enforces client-side for integer options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}
