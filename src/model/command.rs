use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum CommandRequest {
    Quiz {
        channel_id: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

#[derive(Deserialize, Serialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    InvalidArguments,
    NoQuestions,
    Questions,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommandResponse {
    pub outcome: CommandOutcome,
    pub messages: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    pub args_required: bool,
    pub usage: String,
}
