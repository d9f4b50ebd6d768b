use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub chat_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // GEMINI_API_KEY wins; API_KEY is accepted for existing deployments
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .context("GEMINI_API_KEY not set")?,
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            chat_model: std::env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }

    /// Config pointing at `api_url` with the default models.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            gemini_api_key: api_key.into(),
            gemini_api_url: api_url.into(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "GEMINI_API_KEY",
        "API_KEY",
        "GEMINI_API_URL",
        "GEMINI_CHAT_MODEL",
        "GEMINI_IMAGE_MODEL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("GEMINI_API_KEY", "gemini-key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini_api_key, "gemini-key");
        assert_eq!(config.gemini_api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_api_key() {
        clear_env();
        std::env::set_var("API_KEY", "legacy-key");
        std::env::set_var("GEMINI_CHAT_MODEL", "gemini-2.5-pro");

        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini_api_key, "legacy-key");
        assert_eq!(config.chat_model, "gemini-2.5-pro");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_key() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY not set"));
    }

    #[test]
    fn test_with_api_url_uses_default_models() {
        let config = Config::with_api_url("key", "http://localhost:1234");

        assert_eq!(config.gemini_api_key, "key");
        assert_eq!(config.gemini_api_url, "http://localhost:1234");
        assert_eq!(config.chat_model, "gemini-2.5-flash");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
    }
}
