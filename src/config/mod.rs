use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Google generative-language API key. Optional: without it the chat
    /// endpoint always serves the canned fallback reply.
    #[serde(default)]
    pub google_ai_api_key: Option<String>,

    /// Base URL of the generative-language API, overridable for tests.
    #[serde(default = "default_api_base")]
    pub google_ai_api_base: String,

    /// Model served behind the chat endpoint.
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_assistant_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config: AppConfig = envy::prefixed("KRISHIMITRA_TEST_UNSET_")
            .from_env()
            .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.google_ai_api_key.is_none());
        assert_eq!(config.assistant_model, "gemini-2.5-flash");
    }
}
