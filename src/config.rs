use std::env;

pub const DEFAULT_NAME: &str = "shh";
pub const DEFAULT_PROMPT: &str = "> ";
pub const PROMPT_VAR: &str = "SHH_PROMPT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix of every diagnostic line.
    pub name: String,
    pub prompt: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_prompt(env::var(PROMPT_VAR).ok())
    }

    fn with_prompt(mut self, prompt: Option<String>) -> Self {
        if let Some(prompt) = prompt {
            self.prompt = prompt;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            prompt: String::from(DEFAULT_PROMPT),
        }
    }
}
