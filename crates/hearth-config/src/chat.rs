//! Chat widget configuration.

use hearth_core::fixtures::WELCOME_MESSAGE;
use serde::{Deserialize, Serialize};

fn default_welcome() -> String {
    WELCOME_MESSAGE.to_string()
}

fn default_placeholder() -> String {
    "Describe your maintenance issue... I'll help create a request!".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// First system message of every transcript.
    #[serde(default = "default_welcome")]
    pub welcome_message: String,

    /// Prompt shown before each line in the chat REPL.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: default_welcome(),
            placeholder: default_placeholder(),
        }
    }
}
