use crate::gemini::{ChatMessage, GeminiClient, Role};
use crate::i18n::Localizer;
use crate::views::View;
use tracing::{debug, error};

/// Floating assistant widget.
#[derive(Debug)]
pub struct ChatBot {
    open: bool,
    typing: bool,
    messages: Vec<ChatMessage>,
}

impl ChatBot {
    pub fn new(i18n: &Localizer) -> Self {
        Self {
            open: false,
            typing: false,
            messages: vec![welcome(i18n)],
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the panel; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Start over with a welcome message in the new language.
    pub fn on_language_change(&mut self, i18n: &Localizer) {
        self.messages = vec![welcome(i18n)];
    }

    /// Send a user message and append the assistant's reply.
    ///
    /// Blank input is ignored. A failed call appends the localized error
    /// text as the model's turn.
    pub async fn send(&mut self, client: &GeminiClient, i18n: &Localizer, input: &str) {
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::new(Role::User, text));
        self.typing = true;

        let reply = match client.chat(&history, text).await {
            Ok(reply) => {
                debug!("Chat reply received ({} chars)", reply.len());
                reply
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                i18n.t("chat.error").to_string()
            }
        };

        self.messages.push(ChatMessage::new(Role::Model, reply));
        self.typing = false;
    }
}

fn welcome(i18n: &Localizer) -> ChatMessage {
    ChatMessage::new(Role::Model, i18n.t("chat.welcome"))
}

impl View for ChatBot {
    fn render(&self, i18n: &Localizer) -> String {
        if !self.open {
            return format!("[{}]", i18n.t("chat.title"));
        }

        let mut lines = vec![format!(
            "== {} ({}) ==",
            i18n.t("chat.title"),
            i18n.t("chat.online")
        )];
        for message in &self.messages {
            let speaker = match message.role {
                Role::User => ">",
                Role::Model => "<",
            };
            lines.push(format!(
                "{} [{}] {}",
                speaker,
                message.timestamp.format("%H:%M"),
                message.text
            ));
        }
        if self.typing {
            lines.push("< ...".to_string());
        }
        lines.push(format!("[{}]", i18n.t("chat.placeholder")));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::Language;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(Config::with_api_url("test-key", server.uri()))
    }

    #[test]
    fn test_seeded_with_welcome() {
        let i18n = Localizer::builtin().unwrap();
        let chat = ChatBot::new(&i18n);

        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Model);
        assert!(chat.messages()[0].text.starts_with("Hi! I'm your AI assistant."));
    }

    #[test]
    fn test_toggle_and_closed_render() {
        let i18n = Localizer::builtin().unwrap();
        let mut chat = ChatBot::new(&i18n);

        assert!(!chat.is_open());
        assert_eq!(chat.render(&i18n), "[AI Assistant]");

        assert!(chat.toggle());
        let text = chat.render(&i18n);
        assert!(text.starts_with("== AI Assistant (Online) =="));
        assert!(text.ends_with("[Type your question...]"));

        assert!(!chat.toggle());
    }

    #[test]
    fn test_language_change_reseeds_log() {
        let i18n = Localizer::builtin().unwrap();
        let mut chat = ChatBot::new(&i18n);
        chat.messages.push(ChatMessage::new(Role::User, "hello"));

        i18n.set_language(Language::Russian);
        chat.on_language_change(&i18n);

        assert_eq!(chat.messages().len(), 1);
        assert!(chat.messages()[0].text.starts_with("Привет!"));
    }

    #[tokio::test]
    async fn test_send_includes_history_and_appends_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [
                    { "role": "model" },
                    { "role": "user", "parts": [ { "text": "What is AGI?" } ] }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [ { "text": "General intelligence." } ] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let i18n = Localizer::builtin().unwrap();
        let mut chat = ChatBot::new(&i18n);
        chat.send(&client(&server), &i18n, "  What is AGI?  ").await;

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "What is AGI?");
        assert_eq!(messages[2].role, Role::Model);
        assert_eq!(messages[2].text, "General intelligence.");
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let i18n = Localizer::builtin().unwrap();
        let mut chat = ChatBot::new(&i18n);
        chat.send(&client(&server), &i18n, "   \n").await;

        assert_eq!(chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_appends_localized_error() {
        let i18n = Localizer::builtin().unwrap();
        i18n.set_language(Language::Kazakh);
        let client = GeminiClient::new(Config::with_api_url("test-key", "http://127.0.0.1:1"));

        let mut chat = ChatBot::new(&i18n);
        chat.send(&client, &i18n, "Сәлем").await;

        let last = chat.messages().last().unwrap();
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.text, i18n.t("chat.error"));
        assert!(!chat.is_typing());
    }
}
