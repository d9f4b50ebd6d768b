use crate::gemini::GeminiClient;
use crate::i18n::Localizer;
use crate::views::View;
use tracing::{error, info};

pub const DEFAULT_IMAGE_PROMPT: &str =
    "A futuristic smart city with robots helping humans, cyberpunk style";

/// Image generation gallery.
#[derive(Debug)]
pub struct GallerySection {
    prompt: String,
    generating: bool,
    image: Option<String>,
    error: Option<String>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_IMAGE_PROMPT.to_string(),
            generating: false,
            image: None,
            error: None,
        }
    }
}

impl GallerySection {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The last generated image as a `data:` URI.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generate an image from the prompt. Blank prompts are ignored.
    pub async fn generate(&mut self, client: &GeminiClient, i18n: &Localizer) {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return;
        }

        self.generating = true;
        self.error = None;

        match client.generate_image(&prompt).await {
            Ok(uri) => {
                info!("Generated image ({} bytes of data URI)", uri.len());
                self.image = Some(uri);
            }
            Err(e) => {
                error!("Image generation failed: {}", e);
                self.error = Some(i18n.t("gallery.error").to_string());
            }
        }
        self.generating = false;
    }
}

impl View for GallerySection {
    fn render(&self, i18n: &Localizer) -> String {
        let button = if self.generating {
            i18n.t("gallery.buttonGenerating")
        } else {
            i18n.t("gallery.button")
        };

        let mut lines = vec![
            format!("## {}", i18n.t("gallery.title")),
            i18n.t("gallery.subtitle").to_string(),
            format!("{}: {} [{}]", i18n.t("gallery.label"), self.prompt, button),
        ];

        if let Some(message) = &self.error {
            lines.push(message.clone());
        }

        match &self.image {
            Some(uri) => {
                let header = uri.split(',').next().unwrap_or_default();
                lines.push(format!("[image {}]", header));
            }
            None => lines.push(i18n.t("gallery.preview").to_string()),
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::Language;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(Config::with_api_url("test-key", server.uri()))
    }

    #[test]
    fn test_default_prompt_and_preview() {
        let i18n = Localizer::builtin().unwrap();
        let gallery = GallerySection::default();

        assert_eq!(gallery.prompt(), DEFAULT_IMAGE_PROMPT);
        assert!(!gallery.is_generating());
        let text = gallery.render(&i18n);
        assert!(text.contains("[Generate Image]"));
        assert!(text.ends_with("Your image will appear here"));
    }

    #[tokio::test]
    async fn test_generate_stores_data_uri() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "inlineData": { "mimeType": "image/jpeg", "data": "aGVsbG8=" } }
                        ]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let i18n = Localizer::builtin().unwrap();
        let mut gallery = GallerySection::default();
        gallery.generate(&client(&server), &i18n).await;

        assert_eq!(gallery.image(), Some("data:image/jpeg;base64,aGVsbG8="));
        assert_eq!(gallery.error(), None);
        assert!(gallery.render(&i18n).ends_with("[image data:image/jpeg;base64]"));
    }

    #[tokio::test]
    async fn test_missing_image_shows_localized_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [ { "text": "I can't draw that." } ] } }]
            })))
            .mount(&server)
            .await;

        let i18n = Localizer::builtin().unwrap();
        i18n.set_language(Language::Russian);
        let mut gallery = GallerySection::default();
        gallery.generate(&client(&server), &i18n).await;

        assert_eq!(gallery.image(), None);
        assert_eq!(gallery.error(), Some("Не удалось создать изображение."));
        assert!(!gallery.is_generating());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let i18n = Localizer::builtin().unwrap();
        let mut gallery = GallerySection::default();
        gallery.image = Some("data:image/png;base64,aGVsbG8=".to_string());
        gallery.set_prompt("a robot");
        gallery.generate(&client(&server), &i18n).await;

        assert_eq!(gallery.image(), Some("data:image/png;base64,aGVsbG8="));
        assert_eq!(gallery.error(), Some("Failed to generate image."));
    }
}
